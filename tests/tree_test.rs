//! Tests for OrgTree structural operations

use std::collections::BTreeSet;

use rstest::{fixture, rstest};

use orgtree::util::testing::init_test_setup;
use orgtree::{OrgTree, TreeError};

/// CEO (Fred) -> CFO (George) -> Clerk (Amy)
#[fixture]
fn chain_org() -> OrgTree {
    init_test_setup();
    let mut tree = OrgTree::new();
    let ceo = tree.add_root("CEO", "Fred");
    let cfo = tree.hire(ceo, "CFO", "George").unwrap();
    tree.hire(cfo, "Clerk", "Amy").unwrap();
    tree
}

fn roster(tree: &OrgTree) -> BTreeSet<(String, String)> {
    tree.iter()
        .map(|(_, n)| (n.employee.title.clone(), n.employee.name.clone()))
        .collect()
}

// ============================================================
// Root Tests
// ============================================================

#[test]
fn given_empty_tree_when_adding_root_then_root_is_set() {
    init_test_setup();
    let mut tree = OrgTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);

    let id = tree.add_root("CEO", "Fred");

    assert_eq!(tree.root(), Some(id));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.title(id).unwrap(), "CEO");
    assert_eq!(tree.name(id).unwrap(), "Fred");
    assert_eq!(tree.parent(id).unwrap(), None);
    assert_eq!(tree.leftmost_child(id).unwrap(), None);
}

#[test]
fn given_existing_root_when_adding_new_root_then_old_root_becomes_only_child() {
    init_test_setup();
    let mut tree = OrgTree::new();
    let old_root = tree.add_root("CEO", "Fred");
    let new_root = tree.add_root("Chair", "Dana");

    assert_eq!(tree.root(), Some(new_root));
    assert_eq!(tree.leftmost_child(new_root).unwrap(), Some(old_root));
    assert_eq!(tree.right_sibling(old_root).unwrap(), None);
    assert_eq!(tree.parent(old_root).unwrap(), Some(new_root));
}

// ============================================================
// Hire Tests
// ============================================================

#[test]
fn given_supervisor_when_hiring_then_children_are_linked_in_hire_order() {
    init_test_setup();
    let mut tree = OrgTree::new();
    let root = tree.add_root("CEO", "Fred");
    let first = tree.hire(root, "CFO", "George").unwrap();
    let second = tree.hire(root, "CTO", "Grace").unwrap();
    let third = tree.hire(root, "COO", "Hank").unwrap();

    assert_eq!(tree.leftmost_child(root).unwrap(), Some(first));
    assert_eq!(tree.right_sibling(first).unwrap(), Some(second));
    assert_eq!(tree.right_sibling(second).unwrap(), Some(third));
    assert_eq!(tree.right_sibling(third).unwrap(), None);
    assert_eq!(tree.parent(third).unwrap(), Some(root));
}

#[rstest]
fn given_stale_handle_when_hiring_then_reports_invalid_node(mut chain_org: OrgTree) {
    // handles are dense indices: removing a node invalidates the handle of
    // the last-stored node
    let stale = chain_org.find("Clerk").unwrap();
    chain_org.fire("Clerk").unwrap();

    let result = chain_org.hire(stale, "Intern", "Pat");

    assert!(matches!(result, Err(TreeError::InvalidNode(_))));
    assert_eq!(chain_org.len(), 2);
}

// ============================================================
// Accessor Tests
// ============================================================

#[rstest]
fn given_stale_handle_when_accessing_then_reports_invalid_node(mut chain_org: OrgTree) {
    let stale = chain_org.find("Clerk").unwrap();
    chain_org.fire("Clerk").unwrap();

    assert!(matches!(
        chain_org.title(stale),
        Err(TreeError::InvalidNode(_))
    ));
    assert!(matches!(
        chain_org.name(stale),
        Err(TreeError::InvalidNode(_))
    ));
    assert!(matches!(
        chain_org.parent(stale),
        Err(TreeError::InvalidNode(_))
    ));
    assert!(matches!(
        chain_org.leftmost_child(stale),
        Err(TreeError::InvalidNode(_))
    ));
    assert!(matches!(
        chain_org.right_sibling(stale),
        Err(TreeError::InvalidNode(_))
    ));
}

#[test]
fn given_duplicate_titles_when_finding_then_returns_first_in_storage_order() {
    init_test_setup();
    let mut tree = OrgTree::new();
    let root = tree.add_root("CEO", "Fred");
    tree.hire(root, "Analyst", "First").unwrap();
    tree.hire(root, "Analyst", "Second").unwrap();

    let found = tree.find("Analyst").unwrap();
    assert_eq!(tree.name(found).unwrap(), "First");
}

#[test]
fn given_missing_title_when_finding_then_returns_none() {
    init_test_setup();
    let mut tree = OrgTree::new();
    tree.add_root("CEO", "Fred");

    assert_eq!(tree.find("CFO"), None);
}

// ============================================================
// Fire Tests
// ============================================================

#[rstest]
fn given_leaf_when_firing_then_node_is_removed(mut chain_org: OrgTree) {
    chain_org.fire("Clerk").unwrap();

    assert_eq!(chain_org.len(), 2);
    assert_eq!(chain_org.find("Clerk"), None);
    let cfo = chain_org.find("CFO").unwrap();
    assert_eq!(chain_org.leftmost_child(cfo).unwrap(), None);
}

#[rstest]
fn given_middle_manager_when_firing_then_reports_move_up(mut chain_org: OrgTree) {
    chain_org.fire("CFO").unwrap();

    assert_eq!(chain_org.find("CFO"), None);
    let ceo = chain_org.root().unwrap();
    let clerk = chain_org.find("Clerk").unwrap();
    assert_eq!(chain_org.parent(clerk).unwrap(), Some(ceo));
    assert_eq!(chain_org.leftmost_child(ceo).unwrap(), Some(clerk));
}

#[test]
fn given_fired_node_with_reports_then_reports_trail_existing_children() {
    init_test_setup();
    let mut tree = OrgTree::new();
    let root = tree.add_root("CEO", "Fred");
    tree.hire(root, "A", "a").unwrap();
    let b = tree.hire(root, "B", "b").unwrap();
    tree.hire(root, "C", "c").unwrap();
    tree.hire(b, "B1", "b1").unwrap();
    tree.hire(b, "B2", "b2").unwrap();

    tree.fire("B").unwrap();

    // chain order: pre-existing children first, orphans appended in their
    // original relative order
    let mut order = Vec::new();
    let mut child = tree.leftmost_child(tree.root().unwrap()).unwrap();
    while let Some(c) = child {
        order.push(tree.title(c).unwrap().to_string());
        child = tree.right_sibling(c).unwrap();
    }
    assert_eq!(order, vec!["A", "C", "B1", "B2"]);

    let b1 = tree.find("B1").unwrap();
    assert_eq!(tree.parent(b1).unwrap(), tree.root());
}

#[rstest]
fn given_root_title_when_firing_then_fails_without_mutation(mut chain_org: OrgTree) {
    let before = chain_org.serialize();

    let result = chain_org.fire("CEO");

    assert!(matches!(result, Err(TreeError::FireRoot)));
    assert_eq!(chain_org.serialize(), before);
}

#[rstest]
fn given_missing_title_when_firing_then_fails_without_mutation(mut chain_org: OrgTree) {
    let before = chain_org.serialize();

    let result = chain_org.fire("Janitor");

    assert!(matches!(result, Err(TreeError::UnknownTitle(_))));
    assert_eq!(chain_org.serialize(), before);
}

#[test]
fn given_fire_when_compacting_then_other_employees_are_unchanged() {
    init_test_setup();
    let mut tree = OrgTree::new();
    let root = tree.add_root("CEO", "Fred");
    let cfo = tree.hire(root, "CFO", "George").unwrap();
    tree.hire(cfo, "Clerk", "Amy").unwrap();
    tree.hire(root, "CTO", "Grace").unwrap();
    tree.hire(root, "COO", "Hank").unwrap();

    let mut expected = roster(&tree);
    expected.remove(&("CFO".to_string(), "George".to_string()));

    // CFO is not the last-stored node, so COO gets relocated into its slot
    tree.fire("CFO").unwrap();

    assert_eq!(roster(&tree), expected);
    assert_eq!(tree.len(), 4);
}

#[test]
fn given_root_in_last_slot_when_firing_then_root_handle_is_repaired() {
    init_test_setup();
    let mut tree = OrgTree::new();
    let ceo = tree.add_root("CEO", "Fred");
    tree.hire(ceo, "CFO", "George").unwrap();
    tree.hire(ceo, "CTO", "Grace").unwrap();
    // re-rooting stores the new root in the last slot
    tree.add_root("Chair", "Dana");

    tree.fire("CFO").unwrap();

    let root = tree.root().unwrap();
    assert_eq!(tree.title(root).unwrap(), "Chair");
    assert_eq!(tree.parent(root).unwrap(), None);
    let ceo = tree.find("CEO").unwrap();
    assert_eq!(tree.parent(ceo).unwrap(), Some(root));
}

#[test]
fn given_relocated_manager_when_firing_then_their_reports_follow() {
    init_test_setup();
    let mut tree = OrgTree::new();
    let root = tree.add_root("CEO", "Fred");
    tree.hire(root, "A", "a").unwrap();
    let late_manager = tree.hire(root, "M", "m").unwrap();
    tree.hire(late_manager, "M1", "m1").unwrap();

    // M1 sits in the last slot and gets relocated into A's freed slot
    tree.fire("A").unwrap();

    let m = tree.find("M").unwrap();
    let m1 = tree.find("M1").unwrap();
    assert_eq!(tree.parent(m1).unwrap(), Some(m));
    assert_eq!(tree.leftmost_child(m).unwrap(), Some(m1));
}
