/// Normalizes a name typed into the search box.
///
/// Returns `None` for blank input; the API matches names case-insensitively,
/// so the query is lowercased to keep "GOKU" and "goku" identical.
pub(crate) fn normalize_search_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

pub(crate) fn or_unknown(value: &str) -> &str {
    if value.trim().is_empty() {
        "Unknown"
    } else {
        value
    }
}

/// Heading size for the detail title; long names drop a size on large screens.
pub(crate) fn detail_heading_class(name: &str) -> &'static str {
    if name.chars().count() > 10 {
        "text-7xl sm:text-8xl lg:text-4xl"
    } else {
        "text-7xl sm:text-8xl"
    }
}

/// `/` is only active on the landing page; other links also match their sub-routes.
pub(crate) fn is_active_path(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/" || pathname.is_empty();
    }
    match pathname.strip_prefix(href) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
