//! Category Tree Utilities
//!
//! Nesting levels and subtree queries over the flat category list.

use crate::models::Category;
use std::collections::{HashMap, HashSet};

/// Category paired with its computed depth (display only, never persisted)
#[derive(Debug, Clone, PartialEq)]
pub struct LeveledCategory {
    pub category: Category,
    pub level: usize,
}

/// Walk categories depth-first from the roots.
/// Returns categories in display order with their nesting level; siblings keep input order.
pub fn with_nesting_levels(categories: &[Category]) -> Vec<LeveledCategory> {
    // Build parent -> children map
    let mut children_map: HashMap<Option<u32>, Vec<&Category>> = HashMap::new();
    for category in categories {
        children_map.entry(category.parent_id()).or_default().push(category);
    }

    fn collect(
        parent_id: Option<u32>,
        level: usize,
        children_map: &HashMap<Option<u32>, Vec<&Category>>,
        visited: &mut HashSet<u32>,
        result: &mut Vec<LeveledCategory>,
    ) {
        if let Some(children) = children_map.get(&parent_id) {
            for category in children {
                // A parent cycle in bad data must not recurse forever
                if !visited.insert(category.id) {
                    continue;
                }
                result.push(LeveledCategory { category: (*category).clone(), level });
                collect(Some(category.id), level + 1, children_map, visited, result);
            }
        }
    }

    let mut result = Vec::with_capacity(categories.len());
    let mut visited = HashSet::new();
    collect(None, 0, &children_map, &mut visited, &mut result);
    result
}

/// Whether any category names `id` as its parent
pub fn has_children(categories: &[Category], id: u32) -> bool {
    categories.iter().any(|c| c.parent_id() == Some(id))
}

/// `id` and every category below it
pub fn subtree_ids(categories: &[Category], id: u32) -> HashSet<u32> {
    let mut ids = HashSet::from([id]);
    let mut frontier = vec![id];
    while let Some(current) = frontier.pop() {
        for child in categories.iter().filter(|c| c.parent_id() == Some(current)) {
            if ids.insert(child.id) {
                frontier.push(child.id);
            }
        }
    }
    ids
}
