//! Delivery URL transformation.
//!
//! Rewrites Cloudinary delivery URLs into a canonical optimized form
//! (`.../upload/[w_<N>/]f_auto/q_auto/<asset>`), passing every other input
//! through untouched. Pure string work: no network, no configuration, no
//! error channel.

mod directive;
mod normalize;

pub use normalize::{normalize, NormalizeOptions};

use normalize::{CDN_HOST, UPLOAD_MARKER};

/// Returns true when `url` targets the managed CDN and carries the upload
/// marker, i.e. when the normalizer would actually rewrite it.
pub fn is_transformable(url: &str) -> bool {
    url.contains(CDN_HOST) && url.contains(UPLOAD_MARKER)
}

/// Optimizes a delivery URL for automatic format and quality selection.
///
/// Idempotent: an already-canonical URL is returned unchanged, so
/// `optimize(optimize(u)) == optimize(u)` for every input. `None` and the
/// empty string map to `""`; non-CDN URLs map to themselves.
///
/// # Examples
///
/// - `optimize(Some("https://res.cloudinary.com/demo/image/upload/v1/sample.jpg"))`
///   → `"https://res.cloudinary.com/demo/image/upload/f_auto/q_auto/sample.jpg"`
/// - `optimize(Some("/assets/logo.png"))` → `"/assets/logo.png"`
/// - `optimize(None)` → `""`
pub fn optimize(url: Option<&str>) -> String {
    let Some(url) = url else {
        return String::new();
    };
    if url.is_empty() {
        return String::new();
    }

    normalize(
        url,
        NormalizeOptions {
            width: None,
            preserve_if_optimized: true,
        },
    )
}

/// Produces a width-bound optimized variant of `url` for responsive
/// rendering.
///
/// The `quality` hint is accepted for parity with the rendering pipeline's
/// per-variant interface, but the emitted quality directive is always the
/// literal `q_auto`; explicit values are not threaded into the URL.
pub fn for_width(url: &str, width: u32, _quality: Option<u8>) -> String {
    normalize(
        url,
        NormalizeOptions {
            width: Some(width),
            preserve_if_optimized: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimize_strips_and_canonicalizes() {
        assert_eq!(
            optimize(Some(
                "https://res.cloudinary.com/demo/image/upload/v1700000000/w_300,q_80,f_jpg/sample.jpg"
            )),
            "https://res.cloudinary.com/demo/image/upload/f_auto/q_auto/sample.jpg"
        );
    }

    #[test]
    fn optimize_leaves_canonical_urls_alone() {
        let url = "https://res.cloudinary.com/demo/image/upload/f_auto/q_auto/sample.jpg";
        assert_eq!(optimize(Some(url)), url);
    }

    #[test]
    fn optimize_none_and_empty() {
        assert_eq!(optimize(None), "");
        assert_eq!(optimize(Some("")), "");
    }

    #[test]
    fn optimize_passes_through_foreign_urls() {
        assert_eq!(optimize(Some("/assets/logo.png")), "/assets/logo.png");
        assert_eq!(
            optimize(Some("https://images.example.com/upload/a.jpg")),
            "https://images.example.com/upload/a.jpg"
        );
    }

    #[test]
    fn for_width_inserts_width_on_canonical_url() {
        assert_eq!(
            for_width(
                "https://res.cloudinary.com/demo/image/upload/f_auto/q_auto/sample.jpg",
                1280,
                None
            ),
            "https://res.cloudinary.com/demo/image/upload/w_1280/f_auto/q_auto/sample.jpg"
        );
    }

    #[test]
    fn for_width_ignores_quality_hint() {
        let url = "https://res.cloudinary.com/demo/image/upload/v1/sample.jpg";
        assert_eq!(for_width(url, 640, None), for_width(url, 640, Some(75)));
        assert!(for_width(url, 640, Some(75)).contains("/q_auto/"));
        assert!(!for_width(url, 640, Some(75)).contains("q_75"));
    }

    #[test]
    fn for_width_passes_through_foreign_urls() {
        assert_eq!(for_width("/assets/logo.png", 800, None), "/assets/logo.png");
    }

    #[test]
    fn transformable_predicate() {
        assert!(is_transformable(
            "https://res.cloudinary.com/demo/image/upload/sample.jpg"
        ));
        assert!(!is_transformable(
            "https://res.cloudinary.com/demo/image/fetch/sample.jpg"
        ));
        assert!(!is_transformable("https://example.com/upload/sample.jpg"));
    }
}
