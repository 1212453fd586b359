//! Directive normalization: split a delivery URL at the upload marker, strip
//! stale directives, and re-emit the canonical directive chain.

use super::directive;

/// Host fragment identifying URLs served by the image CDN.
pub(crate) const CDN_HOST: &str = "res.cloudinary.com";

/// Path segment separating the account/asset-type prefix from the
/// transformation-and-asset suffix.
pub(crate) const UPLOAD_MARKER: &str = "/upload/";

/// The canonical optimized directive chain, in the only order ever emitted
/// (after an optional leading width).
pub(crate) const OPTIMIZED_PREFIX: &str = "f_auto/q_auto/";

/// Options steering a single normalization pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Target width to emit as the leading `w_<N>` directive, if any.
    pub width: Option<u32>,
    /// When the URL already starts with the canonical `f_auto/q_auto/` chain
    /// right after the upload marker, keep it (inserting only the width)
    /// instead of re-deriving from scratch.
    pub preserve_if_optimized: bool,
}

/// Rewrites `url` into canonical optimized delivery form.
///
/// Every input maps to some output string; there is no error channel. URLs
/// that do not contain the CDN host or the upload marker are returned
/// byte-for-byte unchanged, as are already-canonical URLs under
/// `preserve_if_optimized` with no width requested.
///
/// # Examples
///
/// - `normalize("https://res.cloudinary.com/demo/image/upload/v1/w_300/a.jpg", opts)`
///   with no width → `"https://res.cloudinary.com/demo/image/upload/f_auto/q_auto/a.jpg"`
/// - `normalize("/assets/logo.png", opts)` → `"/assets/logo.png"`
pub fn normalize(url: &str, opts: NormalizeOptions) -> String {
    if !url.contains(CDN_HOST) {
        return url.to_string();
    }

    let Some(idx) = url.find(UPLOAD_MARKER) else {
        return url.to_string();
    };
    let (base, after_upload) = url.split_at(idx + UPLOAD_MARKER.len());

    if opts.preserve_if_optimized {
        if let Some(rest) = after_upload.strip_prefix(OPTIMIZED_PREFIX) {
            return match opts.width {
                None => url.to_string(),
                Some(w) => format!("{base}w_{w}/{OPTIMIZED_PREFIX}{rest}"),
            };
        }
    }

    let stripped = directive::strip_directives(directive::strip_version_prefix(after_upload));
    let asset = stripped.trim_matches(|c| c == '/' || c == ',');

    match opts.width {
        Some(w) => format!("{base}w_{w}/{OPTIMIZED_PREFIX}{asset}"),
        None => format!("{base}{OPTIMIZED_PREFIX}{asset}"),
    }
}
