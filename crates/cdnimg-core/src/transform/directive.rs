//! Directive token recognition and stripping.

/// Returns true when `token` is a recognized transformation directive.
///
/// Recognition is by fixed keyword prefix with a fixed permitted value set:
/// - `w_` / `h_`: digits only
/// - `q_` / `dpr_`: `auto` or digits
/// - `f_`: `auto`, `webp`, `avif`, `jpg`, `png`
/// - `c_`: `limit`, `fill`, `fit`, `scale`, `pad`
///
/// Anything else (including near-misses like `w_abc` or `f_gif`) is treated
/// as asset path content and preserved.
pub(crate) fn is_directive(token: &str) -> bool {
    if let Some(v) = token.strip_prefix("w_") {
        return is_digits(v);
    }
    if let Some(v) = token.strip_prefix("h_") {
        return is_digits(v);
    }
    if let Some(v) = token.strip_prefix("q_") {
        return v == "auto" || is_digits(v);
    }
    if let Some(v) = token.strip_prefix("f_") {
        return matches!(v, "auto" | "webp" | "avif" | "jpg" | "png");
    }
    if let Some(v) = token.strip_prefix("c_") {
        return matches!(v, "limit" | "fill" | "fit" | "scale" | "pad");
    }
    if let Some(v) = token.strip_prefix("dpr_") {
        return v == "auto" || is_digits(v);
    }
    false
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Strips a leading asset-version segment (`v` + digits + `/`).
///
/// Version markers are only meaningful directly after the upload marker;
/// a `v123` deeper in the path is asset content and left alone.
pub(crate) fn strip_version_prefix(path: &str) -> &str {
    if let Some(rest) = path.strip_prefix('v') {
        if let Some(idx) = rest.find('/') {
            if is_digits(&rest[..idx]) {
                return &rest[idx + 1..];
            }
        }
    }
    path
}

/// Removes every recognized directive token from `path`, preserving all
/// other content verbatim.
///
/// Tokens are delimited by `/` and `,` in any mix. A segment consisting
/// entirely of directives is removed; unrecognized tokens inside a mixed
/// segment are kept and rejoined with commas. Pre-existing empty segments
/// (double slashes in the asset path) are kept so asset bytes survive
/// untouched.
pub(crate) fn strip_directives(path: &str) -> String {
    let mut kept: Vec<String> = Vec::new();

    for segment in path.split('/') {
        if segment.is_empty() {
            kept.push(String::new());
            continue;
        }

        let remaining: Vec<&str> = segment.split(',').filter(|t| !is_directive(t)).collect();
        if remaining.is_empty() {
            continue;
        }
        kept.push(remaining.join(","));
    }

    kept.join("/")
}
