//! Cursor window derivation for returned pages.
//!
//! The gateway does not paginate itself — it reflects whatever page the
//! REST service returned. [`build_page_info`] therefore only looks at the
//! actual result sequence, never at the limit or cursor that was requested.

/// Cursor window of a returned page: identifiers of its first and last
/// elements.
///
/// Exists only for non-empty pages; an empty page has no `PageInfo` rather
/// than one with empty cursors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub start_cursor: String,
    pub end_cursor: String,
}

/// Derive the cursor window of `items` using `id_of` as the identifier
/// accessor. Returns `None` for an empty sequence.
pub fn build_page_info<T, F>(items: &[T], id_of: F) -> Option<PageInfo>
where
    F: Fn(&T) -> String,
{
    let first = items.first()?;
    let last = items.last()?;

    Some(PageInfo {
        start_cursor: id_of(first),
        end_cursor: id_of(last),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &&str) -> String {
        (*s).to_string()
    }

    #[test]
    fn test_empty_sequence_has_no_page_info() {
        let items: Vec<&str> = Vec::new();
        assert_eq!(build_page_info(&items, id), None);
    }

    #[test]
    fn test_single_element_uses_same_cursor_twice() {
        let info = build_page_info(&["x1"], id).unwrap();
        assert_eq!(info.start_cursor, "x1");
        assert_eq!(info.end_cursor, "x1");
    }

    // Test critique: seuls le premier et le dernier élément comptent, peu importe la longueur
    #[test]
    fn test_multi_element_uses_first_and_last() {
        let info = build_page_info(&["x1", "y2", "z3"], id).unwrap();
        assert_eq!(info.start_cursor, "x1");
        assert_eq!(info.end_cursor, "z3");

        let longer = build_page_info(&["a", "b", "c", "d", "e"], id).unwrap();
        assert_eq!(longer.start_cursor, "a");
        assert_eq!(longer.end_cursor, "e");
    }
}
