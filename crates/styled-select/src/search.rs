//! Search filtering for options

use crate::option::{IndexedOption, OptionStore};

/// Filter options by a search query
///
/// Keeps, in store order, every option whose flattened label text contains
/// `query` case-insensitively. When search is disabled or the query is empty
/// every option is visible.
///
/// # Returns
///
/// Positions (into the store) of the visible options.
pub fn filter_options(store: &OptionStore, query: &str, searchable: bool) -> Vec<usize> {
    if !searchable || query.is_empty() {
        return store.entries().iter().map(|e| e.position).collect();
    }

    let query_lower = query.to_lowercase();

    store
        .entries()
        .iter()
        .filter(|entry| entry.search_key().contains(&query_lower))
        .map(|entry| entry.position)
        .collect()
}

/// The visible list as option references, in display order
pub fn visible_options<'a>(
    store: &'a OptionStore,
    query: &str,
    searchable: bool,
) -> Vec<&'a IndexedOption> {
    filter_options(store, query, searchable)
        .into_iter()
        .filter_map(|position| store.get(position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;
    use crate::option::SelectOption;

    fn create_test_store() -> OptionStore {
        OptionStore::load(vec![
            SelectOption::new(
                "option1",
                Label::node([Label::glyph("@"), Label::text("Diseño UX")]),
            ),
            SelectOption::new(
                "option2",
                Label::node([Label::glyph("#"), Label::text("Backend Dev")]),
            ),
            SelectOption::new("option3", "IA Engineer"),
            SelectOption::new("option4", "Design UX"),
        ])
    }

    #[test]
    fn test_empty_query_returns_all() {
        let store = create_test_store();
        assert_eq!(filter_options(&store, "", true), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_search_disabled_is_identity() {
        let store = create_test_store();
        assert_eq!(filter_options(&store, "backend", false), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let store = create_test_store();
        assert_eq!(filter_options(&store, "BACKEND", true), vec![1]);
        assert_eq!(filter_options(&store, "ux", true), vec![0, 3]);
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let store = create_test_store();
        assert_eq!(filter_options(&store, "DISEÑO", true), vec![0]);
    }

    #[test]
    fn test_glyphs_are_not_searchable() {
        let store = create_test_store();
        assert!(filter_options(&store, "#", true).is_empty());
    }

    #[test]
    fn test_whitespace_is_significant() {
        let store = create_test_store();
        assert_eq!(filter_options(&store, "n u", true), vec![3]);
        assert!(filter_options(&store, "  ", true).is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let store = create_test_store();
        for query in ["e", "d", "x", "zz", "in"] {
            let result = filter_options(&store, query, true);
            assert!(result.windows(2).all(|w| w[0] < w[1]), "order for {query}");
            for position in &result {
                assert!(store.get(*position).unwrap().search_key().contains(query));
            }
            let excluded = store
                .entries()
                .iter()
                .filter(|e| !result.contains(&e.position));
            for entry in excluded {
                assert!(!entry.search_key().contains(query));
            }
        }
    }

    #[test]
    fn test_visible_options() {
        let store = create_test_store();
        let visible = visible_options(&store, "engineer", true);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].option.value, "option3");
    }
}
