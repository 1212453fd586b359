//! Responsive variant sets over a ladder of target widths.
//!
//! The rendering pipeline requests one delivery URL per viewport bucket;
//! this module fans a source URL out across such a width ladder and renders
//! the HTML `srcset` attribute value.

use thiserror::Error;

use crate::config::CdnimgConfig;
use crate::transform;

/// Error building a responsive variant set.
///
/// The transformation core never range-checks widths; this layer is the
/// caller that validates them before any URL work.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SrcsetError {
    /// No target widths were supplied.
    #[error("no target widths supplied")]
    EmptyWidths,
    /// A width of zero cannot be emitted as a `w_<N>` directive.
    #[error("width must be positive (found 0 at index {index})")]
    ZeroWidth { index: usize },
}

/// A single width-bound delivery URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Target display width in pixels.
    pub width: u32,
    /// Optimized delivery URL bound to that width.
    pub url: String,
}

/// Maps `url` across `widths`, producing one optimized variant per width.
///
/// Widths are used in the order given; callers wanting a sorted ladder pass
/// one (see [`candidate_widths`]). Non-transformable URLs yield identical
/// pass-through variants for every width.
pub fn variants(
    url: &str,
    widths: &[u32],
    quality: Option<u8>,
) -> Result<Vec<Variant>, SrcsetError> {
    if widths.is_empty() {
        return Err(SrcsetError::EmptyWidths);
    }
    if let Some(index) = widths.iter().position(|&w| w == 0) {
        return Err(SrcsetError::ZeroWidth { index });
    }

    Ok(widths
        .iter()
        .map(|&width| Variant {
            width,
            url: transform::for_width(url, width, quality),
        })
        .collect())
}

/// Renders an HTML `srcset` attribute value: `"<url> <width>w"` candidates
/// joined with `", "`.
///
/// A non-transformable URL degrades to the bare URL as a single candidate
/// without a width descriptor, since every per-width variant would be the
/// same string.
pub fn srcset(url: &str, widths: &[u32], quality: Option<u8>) -> Result<String, SrcsetError> {
    let variants = variants(url, widths, quality)?;

    if !transform::is_transformable(url) {
        return Ok(url.to_string());
    }

    Ok(variants
        .iter()
        .map(|v| format!("{} {}w", v.url, v.width))
        .collect::<Vec<_>>()
        .join(", "))
}

/// Merged, sorted, deduplicated width ladder from configuration (device
/// widths for full-bleed images plus fixed icon/thumbnail widths).
pub fn candidate_widths(cfg: &CdnimgConfig) -> Vec<u32> {
    let mut widths: Vec<u32> = cfg
        .device_widths
        .iter()
        .chain(cfg.image_widths.iter())
        .copied()
        .collect();
    widths.sort_unstable();
    widths.dedup();
    widths
}
