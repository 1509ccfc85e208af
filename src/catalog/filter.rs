//! Filter Engine
//!
//! Stable, pure filtering of a collection by chip selection and text query.

use super::state::FilterState;
use super::traits::Filterable;

/// Text rule: empty query passes, otherwise case-insensitive substring of any search field
pub fn matches_query<T: Filterable>(item: &T, query: &str) -> bool {
    if !T::SEARCHABLE || query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Category rule AND text rule
pub fn matches<T: Filterable>(item: &T, state: &FilterState) -> bool {
    state.selection.matches(item.facet()) && matches_query(item, &state.query)
}

/// Items passing both rules, in their original order
pub fn filter<'a, T: Filterable>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    if state.is_identity() {
        return items.iter().collect();
    }
    items.iter().filter(|item| matches(*item, state)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::state::{FilterEvent, Selection};
    use crate::domain::{Article, Difficulty, Entity, Tutorial, Video};

    fn articles() -> Vec<Article> {
        vec![
            Article::new(1, "The Fundamentals of User-Centered Design", "Put users at the heart", "UI/UX"),
            Article::new(2, "Cognitive Load Theory", "How users process information", "Psychology"),
            Article::new(3, "Accessibility Guidelines", "Accessible web applications", "Accessibility"),
            Article::new(4, "Usability Testing Methods", "Extract meaningful insights", "Research"),
            Article::new(5, "Design Systems", "Consistent user experiences", "UI/UX"),
        ]
    }

    fn ids<T: Entity>(items: &[&T]) -> Vec<u32> {
        items.iter().map(|item| item.id()).collect()
    }

    #[test]
    fn test_identity_filter_returns_everything_in_order() {
        let items = articles();
        let result = filter(&items, &FilterState::new());
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_category_is_exact_and_case_sensitive() {
        let items = articles();
        let result = filter(&items, &FilterState::with_selection("UI/UX"));
        assert_eq!(ids(&result), vec![1, 5]);
        assert!(result.iter().all(|a| a.category == "UI/UX"));

        let result = filter(&items, &FilterState::with_selection("ui/ux"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_query_matches_title_or_excerpt_ignoring_case() {
        let items = articles();

        let by_title = filter(&items, &FilterState::new().with_query("DESIGN"));
        assert_eq!(ids(&by_title), vec![1, 5]);

        let by_excerpt = filter(&items, &FilterState::new().with_query("insights"));
        assert_eq!(ids(&by_excerpt), vec![4]);
    }

    #[test]
    fn test_conjunction_is_intersection() {
        let items = articles();
        let state = FilterState::with_selection("UI/UX").with_query("user");

        let both = ids(&filter(&items, &state));
        let by_chip = ids(&filter(&items, &FilterState::with_selection("UI/UX")));
        let by_text = ids(&filter(&items, &FilterState::new().with_query("user")));
        let intersection: Vec<u32> = by_chip.into_iter().filter(|id| by_text.contains(id)).collect();

        assert_eq!(both, intersection);
        assert_eq!(both, vec![1, 5]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let items = articles();
        let state = FilterState::with_selection("Research").with_query("xyz-nonexistent");
        assert!(filter(&items, &state).is_empty());
    }

    #[test]
    fn test_stale_selection_matches_nothing() {
        let items = articles();
        let state = FilterState::new().apply(FilterEvent::SelectChip("HCI History".to_string()));
        assert_eq!(state.selection, Selection::Only("HCI History".to_string()));
        assert!(filter(&items, &state).is_empty());
    }

    #[test]
    fn test_query_ignored_without_search_box() {
        let videos = vec![Video::new(1, "Designing for Accessibility", "Fundamentals", 920)];
        let state = FilterState::new().with_query("no such words");
        assert_eq!(filter(&videos, &state).len(), 1);
    }

    #[test]
    fn test_tutorials_filter_on_difficulty() {
        let tutorials = vec![
            Tutorial::new(1, "First Design System", Difficulty::Beginner, 12, 4.8),
            Tutorial::new(2, "Usability Testing", Difficulty::Advanced, 18, 4.9),
            Tutorial::new(3, "Accessible Web", Difficulty::Intermediate, 15, 4.7),
            Tutorial::new(4, "Framer Motion", Difficulty::Advanced, 20, 4.6),
        ];
        let result = filter(&tutorials, &FilterState::with_selection("Advanced"));
        assert_eq!(ids(&result), vec![2, 4]);
    }
}
