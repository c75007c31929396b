//! Todo Filtering
//!
//! Case-insensitive substring match on titles, recomputed in full on every search.

use crate::models::TodoItem;

/// Result of filtering the canonical list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Matching items, in canonical order
    pub items: Vec<TodoItem>,
    /// True iff `items` is empty
    pub no_results: bool,
}

pub fn filter_todos(query: &str, items: &[TodoItem]) -> FilterOutcome {
    let needle = query.to_lowercase();
    let items: Vec<TodoItem> = items
        .iter()
        .filter(|todo| todo.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    let no_results = items.is_empty();
    log::debug!("query {:?} matched {} todos", query, items.len());
    FilterOutcome { items, no_results }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, title: &str, completed: bool) -> TodoItem {
        TodoItem { id, title: title.to_string(), completed }
    }

    fn sample() -> Vec<TodoItem> {
        vec![
            make_todo(1, "Buy milk", false),
            make_todo(2, "Walk dog", true),
            make_todo(3, "buy bread", false),
        ]
    }

    #[test]
    fn test_matches_case_insensitive() {
        let outcome = filter_todos("buy", &sample());
        let ids: Vec<u32> = outcome.items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(!outcome.no_results);
    }

    #[test]
    fn test_uppercase_query() {
        let outcome = filter_todos("BUY", &sample());
        assert_eq!(outcome.items.len(), 2);
    }

    #[test]
    fn test_no_matches_sets_flag() {
        let outcome = filter_todos("xyz", &sample());
        assert!(outcome.items.is_empty());
        assert!(outcome.no_results);
    }

    #[test]
    fn test_empty_list_has_no_results() {
        let outcome = filter_todos("buy", &[]);
        assert!(outcome.no_results);
    }

    #[test]
    fn test_partition_and_order() {
        let todos = vec![
            make_todo(10, "delectus aut autem", false),
            make_todo(11, "quis ut nam facilis et officia qui", false),
            make_todo(12, "fugiat veniam minus", false),
            make_todo(13, "et porro tempora", true),
            make_todo(14, "laboriosam mollitia et enim quasi", false),
            make_todo(15, "Qui Ullam Ratione", true),
        ];

        for query in ["qui", "ET", "aut", "a", "zzz", "tempora", " et "] {
            let outcome = filter_todos(query, &todos);
            let needle = query.to_lowercase();

            // Every kept item matches, every dropped item doesn't
            for todo in &todos {
                let kept = outcome.items.contains(todo);
                assert_eq!(kept, todo.title.to_lowercase().contains(&needle), "query {:?}, todo {}", query, todo.id);
            }

            // Kept items appear in canonical order
            let positions: Vec<usize> = outcome.items.iter()
                .map(|t| todos.iter().position(|c| c.id == t.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {:?}", query);

            assert_eq!(outcome.no_results, outcome.items.is_empty());
        }
    }

    #[test]
    fn test_same_query_twice_is_identical() {
        let todos = sample();
        let first = filter_todos("buy", &todos);
        let second = filter_todos("buy", &todos);
        assert_eq!(first, second);
    }
}
