//! URL resolution utilities.
//!
//! Resolves stylesheet hrefs against the document's base URL. This is a
//! simplified resolver covering the common cases; it does not normalise
//! `.` / `..` path segments.

/// Resolve a potentially relative URL against a base URL.
///
/// Absolute URLs pass through untouched. Protocol-relative hrefs take the
/// base's scheme, absolute paths join the base's origin, and anything else
/// joins the base's directory.
#[must_use]
pub fn resolve_url(href: &str, base_url: Option<&str>) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    let Some(base) = base_url else {
        return href.to_string();
    };

    if href.starts_with("//") {
        // Protocol-relative URL - prepend scheme from base
        if base.starts_with("https:") {
            format!("https:{href}")
        } else {
            format!("http:{href}")
        }
    } else if href.starts_with('/') {
        // Absolute path - join with the base's origin
        base.find("://").map_or_else(
            || href.to_string(),
            |scheme_end| {
                let after_scheme = &base[scheme_end + 3..];
                after_scheme.find('/').map_or_else(
                    || format!("{base}{href}"),
                    |path_start| {
                        let origin = &base[..scheme_end + 3 + path_start];
                        format!("{origin}{href}")
                    },
                )
            },
        )
    } else {
        // Relative path - join with the base's directory
        let base_dir = base.rsplit_once('/').map_or(base, |(dir, _)| dir);
        format!("{base_dir}/{href}")
    }
}
