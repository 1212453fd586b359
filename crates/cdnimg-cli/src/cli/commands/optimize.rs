//! `cdnimg optimize <url>...` – rewrite URLs into canonical optimized form.

use anyhow::Result;
use cdnimg_core::transform;

pub fn run_optimize(urls: &[String]) -> Result<()> {
    for url in urls {
        if !transform::is_transformable(url) {
            tracing::debug!("pass-through (not a CDN delivery URL): {url}");
        }
        println!("{}", transform::optimize(Some(url.as_str())));
    }
    Ok(())
}
