use std::collections::HashSet;

use tracing::debug;

use crate::categories::{is_home_category, resolve_image, resolve_order};
use crate::constants::{HOME_FALLBACK_COUNT, HOME_SHOW_ALL_LIMIT};
use crate::types::{DisplayNode, RawCategory};

/// Maps a single raw category into a display node, recursing into children.
/// `show_on_home` starts false everywhere; only the top-level pass in
/// [`build_tree`] may flip it.
pub fn build_node(category: &RawCategory) -> DisplayNode {
    DisplayNode {
        name: category.name.clone(),
        id: category.id,
        image: resolve_image(category),
        order: resolve_order(category),
        children: build_list(&category.children),
        show_on_home: false,
    }
}

/// Maps a sibling list and sorts it by resolved order. The sort is stable so
/// categories with equal orders keep their input position.
pub fn build_list(categories: &[RawCategory]) -> Vec<DisplayNode> {
    let mut nodes: Vec<DisplayNode> = categories.iter().map(build_node).collect();
    nodes.sort_by_key(|node| node.order);
    nodes
}

/// Builds the full display tree and applies the home-selection rule to the
/// top level:
/// - fewer than 5 categories: show all of them;
/// - otherwise, if any title carries a `#` flag: show exactly those;
/// - otherwise: show the first 3 by display order.
pub fn build_tree(categories: &[RawCategory]) -> Vec<DisplayNode> {
    let home_candidates: HashSet<i64> = categories
        .iter()
        .filter(|category| is_home_category(category))
        .map(|category| category.id)
        .collect();

    let mut tree = build_list(categories);

    if tree.len() < HOME_SHOW_ALL_LIMIT {
        for node in &mut tree {
            node.show_on_home = true;
        }
    } else if !home_candidates.is_empty() {
        debug!(flagged = home_candidates.len(), "using title-flagged home categories");
        for node in &mut tree {
            node.show_on_home = home_candidates.contains(&node.id);
        }
    } else {
        for (index, node) in tree.iter_mut().enumerate() {
            node.show_on_home = index < HOME_FALLBACK_COUNT;
        }
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, title: &str) -> RawCategory {
        RawCategory {
            id,
            name: format!("category-{id}"),
            title: Some(title.to_string()),
            meta_description: None,
            url: None,
            children: Vec::new(),
        }
    }

    #[test]
    fn preserves_node_count_and_nesting() {
        let mut parent = category(1, "1");
        parent.children = vec![category(10, "2"), category(11, "1")];
        let input = vec![parent, category(2, "2")];

        let tree = build_tree(&input);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].children.len(), 2);
        assert_eq!(tree[1].children.len(), 0);
    }

    #[test]
    fn siblings_sort_by_resolved_order() {
        let input = vec![category(1, "3"), category(2, "1"), category(3, "2")];
        let tree = build_list(&input);
        let ids: Vec<i64> = tree.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn equal_orders_keep_input_position() {
        let input = vec![category(8, "1"), category(3, "1"), category(5, "1")];
        let tree = build_list(&input);
        let ids: Vec<i64> = tree.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![8, 3, 5]);
    }

    #[test]
    fn children_are_sorted_but_never_flagged_for_home() {
        let mut parent = category(1, "1");
        parent.children = vec![category(10, "2#"), category(11, "1")];
        let tree = build_tree(&[parent]);

        let child_ids: Vec<i64> = tree[0].children.iter().map(|n| n.id).collect();
        assert_eq!(child_ids, vec![11, 10]);
        assert!(tree[0].children.iter().all(|n| !n.show_on_home));
    }

    #[test]
    fn fewer_than_five_shows_everything() {
        let input = vec![
            category(1, "1"),
            category(2, "2"),
            category(3, "3"),
            category(4, "4"),
        ];
        let flags: Vec<bool> = build_tree(&input).iter().map(|n| n.show_on_home).collect();
        assert_eq!(flags, vec![true, true, true, true]);
    }

    #[test]
    fn fewer_than_five_wins_over_title_flags() {
        let input = vec![category(1, "#1"), category(2, "2")];
        let flags: Vec<bool> = build_tree(&input).iter().map(|n| n.show_on_home).collect();
        assert_eq!(flags, vec![true, true]);
    }

    #[test]
    fn title_flags_select_home_categories_when_five_or_more() {
        let input = vec![
            category(1, "1"),
            category(2, "2"),
            category(3, "3#"),
            category(4, "4#"),
            category(5, "5"),
            category(6, "6"),
        ];
        let flags: Vec<bool> = build_tree(&input).iter().map(|n| n.show_on_home).collect();
        assert_eq!(flags, vec![false, false, true, true, false, false]);
    }

    #[test]
    fn first_three_fallback_when_nothing_is_flagged() {
        let input = vec![
            category(1, "1"),
            category(2, "2"),
            category(3, "3"),
            category(4, "4"),
            category(5, "5"),
            category(6, "6"),
        ];
        let flags: Vec<bool> = build_tree(&input).iter().map(|n| n.show_on_home).collect();
        assert_eq!(flags, vec![true, true, true, false, false, false]);
    }

    #[test]
    fn flag_selection_follows_sorted_order() {
        // ids land in a different order than the input once sorted
        let input = vec![
            category(6, "6"),
            category(5, "5"),
            category(4, "4#"),
            category(3, "3#"),
            category(2, "2"),
            category(1, "1"),
        ];
        let tree = build_tree(&input);
        let ids: Vec<i64> = tree.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        let flags: Vec<bool> = tree.iter().map(|n| n.show_on_home).collect();
        assert_eq!(flags, vec![false, false, true, true, false, false]);
    }
}
