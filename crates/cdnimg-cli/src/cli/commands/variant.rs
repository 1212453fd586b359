//! `cdnimg variant --width N <url>...` – width-bound optimized variants.

use anyhow::Result;
use cdnimg_core::transform;

pub fn run_variant(urls: &[String], width: u32, quality: Option<u8>) -> Result<()> {
    for url in urls {
        println!("{}", transform::for_width(url, width, quality));
    }
    Ok(())
}
