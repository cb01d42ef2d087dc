//! Form id resolution from the page URL.

use std::collections::HashMap;

/// Resolve the form id from a query string and a path.
///
/// Priority: the `formId` query parameter first, then `id`, then a
/// `/form/<id>` path segment. Returns `None` when the page carries no
/// identifier at all, which is terminal for the widget.
pub fn resolve_form_id(search: &str, path: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    for key in ["formId", "id"] {
        if let Some(id) = params.get(key).filter(|id| !id.is_empty()) {
            return Some(id.clone());
        }
    }
    form_id_from_path(path)
}

fn form_id_from_path(path: &str) -> Option<String> {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    match (segments.next(), segments.next()) {
        (Some("form"), Some(id)) => Some(id.to_string()),
        _ => None,
    }
}

/// Read the form id from the live window location.
pub fn resolve_form_id_from_window() -> Option<String> {
    let window = web_sys::window()?;
    let location = window.location();
    let search = location.search().unwrap_or_default();
    let path = location.pathname().unwrap_or_default();
    resolve_form_id(&search, &path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_id_query_parameter() {
        assert_eq!(
            resolve_form_id("?formId=abc123", "/"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_id_query_parameter() {
        assert_eq!(resolve_form_id("?id=xyz", "/"), Some("xyz".to_string()));
    }

    #[test]
    fn test_form_id_wins_over_id() {
        assert_eq!(
            resolve_form_id("?id=other&formId=abc123", "/"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_path_segment_fallback() {
        assert_eq!(resolve_form_id("", "/form/xyz"), Some("xyz".to_string()));
        assert_eq!(resolve_form_id("?", "/form/xyz/extra"), Some("xyz".to_string()));
    }

    #[test]
    fn test_no_identifier() {
        assert_eq!(resolve_form_id("", "/"), None);
        assert_eq!(resolve_form_id("?other=1", "/about"), None);
        assert_eq!(resolve_form_id("?formId=", "/form"), None);
    }
}
