//! `cdnimg srcset <url>` – srcset attribute value over the configured ladder.

use anyhow::Result;
use cdnimg_core::config::CdnimgConfig;
use cdnimg_core::srcset;

pub fn run_srcset(cfg: &CdnimgConfig, url: &str, device_only: bool) -> Result<()> {
    let widths = if device_only {
        let mut widths = cfg.device_widths.clone();
        widths.sort_unstable();
        widths.dedup();
        widths
    } else {
        srcset::candidate_widths(cfg)
    };

    let value = srcset::srcset(url, &widths, cfg.quality)?;
    println!("{value}");
    Ok(())
}
