//! Pure filter rules of the catalog view.
//!
//! The active filter is held as a category id. The UI still selects by list
//! position; the position is resolved to an id at selection time so a reorder
//! of the category list cannot retarget the filter.

use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::domain::a002_animal::aggregate::Animal;

/// Next filter after the user picks `index` (or clears with `None`).
///
/// Picking the active category again clears the filter. An index outside the
/// loaded list clears it too.
pub fn toggle_filter(
    categories: &[Category],
    current: Option<&CategoryId>,
    index: Option<usize>,
) -> Option<CategoryId> {
    let picked = index.and_then(|i| categories.get(i)).map(|c| &c.id)?;
    if current == Some(picked) {
        None
    } else {
        Some(picked.clone())
    }
}

/// Category the filter points at, if it is still loaded
pub fn resolve_filter<'a>(
    categories: &'a [Category],
    active: Option<&CategoryId>,
) -> Option<&'a Category> {
    let active = active?;
    categories.iter().find(|c| &c.id == active)
}

/// Position of the active category in the current list, for highlighting
pub fn active_index(categories: &[Category], active: Option<&CategoryId>) -> Option<usize> {
    let active = active?;
    categories.iter().position(|c| &c.id == active)
}

/// Animals to display. Always rebuilt from the full inputs.
pub fn filter_animals(
    animals: &[Animal],
    categories: &[Category],
    active: Option<&CategoryId>,
) -> Vec<Animal> {
    match resolve_filter(categories, active) {
        Some(category) => animals
            .iter()
            .filter(|a| a.belongs_to(&category.id))
            .cloned()
            .collect(),
        None => animals.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![Category::new("c1", "Mammals"), Category::new("c2", "Birds")]
    }

    fn animals() -> Vec<Animal> {
        vec![
            Animal::new("a1", "Lion", "https://img/lion.png", "c1"),
            Animal::new("a2", "Owl", "https://img/owl.png", "c2"),
            Animal::new("a3", "Tiger", "https://img/tiger.png", "c1"),
            Animal::new("a4", "Snake", "https://img/snake.png", "c9"),
        ]
    }

    fn ids(animals: &[Animal]) -> Vec<&str> {
        animals.iter().map(|a| a.id.0.as_str()).collect()
    }

    #[test]
    fn test_no_filter_shows_everything() {
        let shown = filter_animals(&animals(), &categories(), None);
        assert_eq!(shown, animals());
    }

    #[test]
    fn test_filter_keeps_matching_animals_in_order() {
        let active = CategoryId::new("c1");
        let shown = filter_animals(&animals(), &categories(), Some(&active));
        assert_eq!(ids(&shown), vec!["a1", "a3"]);
    }

    #[test]
    fn test_mammals_scenario() {
        let categories = vec![Category::new("c1", "Mammals")];
        let animals = vec![
            Animal::new("a1", "Lion", "", "c1"),
            Animal::new("a2", "Owl", "", "c2"),
        ];

        let active = toggle_filter(&categories, None, Some(0));
        assert_eq!(active, Some(CategoryId::new("c1")));
        assert_eq!(ids(&filter_animals(&animals, &categories, active.as_ref())), vec!["a1"]);

        let active = toggle_filter(&categories, active.as_ref(), Some(0));
        assert_eq!(active, None);
        assert_eq!(
            ids(&filter_animals(&animals, &categories, active.as_ref())),
            vec!["a1", "a2"]
        );
    }

    #[test]
    fn test_toggle_replaces_a_different_selection() {
        let active = toggle_filter(&categories(), None, Some(0));
        let active = toggle_filter(&categories(), active.as_ref(), Some(1));
        assert_eq!(active, Some(CategoryId::new("c2")));
    }

    #[test]
    fn test_toggle_with_none_or_out_of_range_clears() {
        let current = CategoryId::new("c1");
        assert_eq!(toggle_filter(&categories(), Some(&current), None), None);
        assert_eq!(toggle_filter(&categories(), Some(&current), Some(7)), None);
    }

    #[test]
    fn test_removed_category_falls_back_to_full_list() {
        let active = CategoryId::new("c2");
        let shrunk = vec![Category::new("c1", "Mammals")];
        assert!(resolve_filter(&shrunk, Some(&active)).is_none());
        assert_eq!(filter_animals(&animals(), &shrunk, Some(&active)), animals());
    }

    #[test]
    fn test_reordered_categories_keep_the_selected_one() {
        let active = toggle_filter(&categories(), None, Some(1));
        let reordered = vec![Category::new("c2", "Birds"), Category::new("c1", "Mammals")];

        assert_eq!(active_index(&reordered, active.as_ref()), Some(0));
        assert_eq!(
            ids(&filter_animals(&animals(), &reordered, active.as_ref())),
            vec!["a2"]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let active = CategoryId::new("c1");
        assert!(filter_animals(&[], &categories(), Some(&active)).is_empty());
        assert_eq!(active_index(&[], Some(&active)), None);
        assert_eq!(toggle_filter(&[], None, Some(0)), None);
    }
}
