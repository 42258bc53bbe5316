//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_asset--list"`) and a `data-page-category` from below, so a
//! page found in the DOM inspector maps straight to its module.

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Dashboard widgets.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System administration page (users, roles, permissions).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_asset--list"));
        assert!(!is_valid_page_id("a001_asset"));
        assert!(!is_valid_page_id("--list"));
    }
}
