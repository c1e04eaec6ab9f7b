//! Tests for recursive tree queries

use pretty_assertions::assert_eq;
use serde_json::json;

use refract::*;

/// `["One", ["Two"], {"Three": ["Four"]}]` as typed elements, with
/// every intermediate node reachable by name.
fn sample_tree() -> Element {
    let inner = Element::array(vec![Element::string("Two")]).unwrap();
    let object = Element::object();
    object
        .push(
            Element::member(
                Element::string("Three"),
                Element::array(vec![Element::string("Four")]).unwrap(),
            )
            .unwrap(),
        )
        .unwrap();
    Element::array(vec![Element::string("One"), inner, object]).unwrap()
}

#[test]
fn single_name_collects_every_match_in_discovery_order() {
    let tree = sample_tree();

    let strings = tree.find_recursive(&["string"]);
    assert_eq!(
        strings.to_value(),
        vec![json!("One"), json!("Two"), json!("Three"), json!("Four")]
    );
}

#[test]
fn staged_names_narrow_by_ancestry() {
    let tree = sample_tree();

    let narrowed = tree.find_recursive(&["member", "array", "string"]);
    assert_eq!(narrowed.to_value(), vec![json!("Four")]);

    // Loosening the chain widens the result again.
    let from_arrays = tree.find_recursive(&["array", "string"]);
    assert_eq!(
        from_arrays.to_value(),
        vec![json!("Two"), json!("Four")]
    );
}

#[test]
fn query_works_on_frozen_trees() {
    let tree = sample_tree();
    tree.freeze();

    let strings = tree.find_recursive(&["string"]);
    assert_eq!(strings.len(), 4);

    // Results alias the tree, so ancestry is real.
    let four = tree.find_recursive(&["member", "array", "string"]);
    let parents = four.first().unwrap().parents();
    assert_eq!(parents.len(), 4);
    assert!(parents.get(3).unwrap().ptr_eq(&tree));
}

#[test]
fn no_match_and_empty_chain_yield_empty_slices() {
    let tree = sample_tree();

    assert!(tree.find_recursive(&["link"]).is_empty());
    assert!(tree.find_recursive(&[]).is_empty());
    assert!(tree.find_recursive(&["string", "member"]).is_empty());
}

#[test]
fn query_matches_renamed_elements_by_name() {
    let tree = sample_tree();
    let first = tree.children().first().unwrap();
    first.set_name("annotation").unwrap();

    assert_eq!(tree.find_recursive(&["string"]).len(), 3);
    assert_eq!(
        tree.find_recursive(&["annotation"]).to_value(),
        vec![json!("One")]
    );
}
