//! Tests for slices: functional combinators, mutation passthroughs, and
//! keyed object views

use pretty_assertions::assert_eq;
use serde_json::json;

use refract::*;

fn numbers(range: std::ops::Range<i64>) -> ArraySlice {
    ArraySlice::new(range.map(Element::number).collect())
}

// ═══════════════════════════════════════════════════════════════════════
// Combinators
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn filter_and_reject_partition_by_predicate() {
    let slice = ArraySlice::new(vec![
        Element::string("one"),
        Element::number(2),
        Element::string("three"),
    ]);

    assert_eq!(
        slice.filter("string").to_value(),
        vec![json!("one"), json!("three")]
    );
    assert_eq!(slice.reject("string").to_value(), vec![json!(2)]);
    assert_eq!(
        slice.filter(ElementKind::Number).to_value(),
        vec![json!(2)]
    );
    assert_eq!(
        slice
            .filter(Predicate::when(|element| {
                element.to_value() == Some(json!("one"))
            }))
            .len(),
        1
    );
}

#[test]
fn find_returns_the_first_match() {
    let slice = ArraySlice::new(vec![
        Element::number(1),
        Element::string("a"),
        Element::string("b"),
    ]);

    let found = slice.find("string").unwrap();
    assert_eq!(found.to_value(), Some(json!("a")));
    assert!(slice.find("member").is_none());
}

#[test]
fn map_for_each_and_reduce() {
    let slice = numbers(0..4);

    let names = slice.map(|element| element.name());
    assert_eq!(names, vec!["number"; 4]);

    let mut seen = Vec::new();
    slice.for_each(|element, index| {
        seen.push((index, element.to_value()));
    });
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[3], (3, Some(json!(3))));

    let sum = slice.reduce(0i64, |total, element| {
        total + element.to_value().and_then(|v| v.as_i64()).unwrap_or(0)
    });
    assert_eq!(sum, 6);
}

#[test]
fn flat_map_flattens_one_level() {
    let slice = numbers(1..5);

    let doubled = slice.flat_map(|element| {
        let n = element.to_value().and_then(|v| v.as_i64()).unwrap_or(0);
        vec![n * 2]
    });
    assert_eq!(doubled, vec![2, 4, 6, 8]);
}

#[test]
fn compact_map_drops_empty_results() {
    let slice = ArraySlice::new(vec![
        Element::string("kept"),
        Element::new(),
        Element::string("also"),
    ]);

    let values = slice.compact_map(|element| element.to_value());
    assert_eq!(values, vec![json!("kept"), json!("also")]);
}

#[test]
fn includes_compares_raw_values() {
    let slice = ArraySlice::new(vec![Element::string("one"), Element::number(2)]);

    assert!(slice.includes(&json!("one")));
    assert!(slice.includes(&json!(2)));
    assert!(!slice.includes(&json!("two")));
}

#[test]
fn to_value_substitutes_null_for_empty_elements() {
    let slice = ArraySlice::new(vec![Element::string("a"), Element::new()]);
    assert_eq!(slice.to_value(), vec![json!("a"), json!(null)]);
}

// ═══════════════════════════════════════════════════════════════════════
// Mutation passthroughs
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn detached_slice_mutations_are_local() {
    let mut slice = ArraySlice::new(vec![Element::string("one"), Element::string("two")]);

    slice.unshift("zero").unwrap();
    slice.push("three").unwrap();
    assert_eq!(
        slice.to_value(),
        vec![json!("zero"), json!("one"), json!("two"), json!("three")]
    );

    let shifted = slice.shift().unwrap().unwrap();
    assert_eq!(shifted.to_value(), Some(json!("zero")));
    assert_eq!(slice.len(), 3);

    let mut empty = ArraySlice::new(Vec::new());
    assert!(empty.shift().unwrap().is_none());
}

#[test]
fn origin_backed_slice_writes_through() {
    let array = Element::array(vec![Element::string("one")]).unwrap();

    let mut children = array.children();
    children.push("two").unwrap();
    children.add("three").unwrap();

    assert_eq!(array.to_value(), Some(json!(["one", "two", "three"])));
    let adopted = array.children().get(1).unwrap();
    assert!(adopted.parent().unwrap().ptr_eq(&array));

    let removed = children.shift().unwrap().unwrap();
    assert_eq!(removed.to_value(), Some(json!("one")));
    assert!(removed.parent().is_none());
    assert_eq!(array.to_value(), Some(json!(["two", "three"])));
}

#[test]
fn origin_backed_slice_honors_freezing() {
    let array = Element::array(vec![Element::string("one")]).unwrap();
    array.freeze();

    let mut children = array.children();
    assert!(matches!(
        children.push("two"),
        Err(RefractError::FrozenViolation { .. })
    ));
    assert_eq!(array.to_value(), Some(json!(["one"])));
}

#[test]
fn first_and_get_are_bounds_checked() {
    let slice = numbers(0..2);

    assert_eq!(slice.first().unwrap().to_value(), Some(json!(0)));
    assert_eq!(slice.get_value(1), Some(json!(1)));
    assert!(slice.get(2).is_none());
}

// ═══════════════════════════════════════════════════════════════════════
// Object slices
// ═══════════════════════════════════════════════════════════════════════

fn link_members() -> Vec<Element> {
    vec![
        Element::member(Element::string("href"), Element::string("foobar")).unwrap(),
        Element::member(Element::string("relation"), Element::string("create")).unwrap(),
    ]
}

#[test]
fn object_slice_lookups() {
    let slice = ObjectSlice::new(link_members());

    assert_eq!(slice.keys(), vec![json!("href"), json!("relation")]);
    assert_eq!(slice.get_value("relation"), Some(json!("create")));
    assert_eq!(slice.get_member("href").unwrap().name(), "member");
    assert!(slice.get("missing").is_none());
}

#[test]
fn object_slice_set_upserts_in_place() {
    let mut slice = ObjectSlice::new(link_members());

    slice.set("href", Element::string("/updated")).unwrap();
    assert_eq!(slice.get_value("href"), Some(json!("/updated")));
    assert_eq!(slice.keys(), vec![json!("href"), json!("relation")]);

    slice.set("title", Element::string("A Link")).unwrap();
    assert_eq!(
        slice.keys(),
        vec![json!("href"), json!("relation"), json!("title")]
    );
}

#[test]
fn object_slice_remove_deletes_the_first_match() {
    let mut slice = ObjectSlice::new(link_members());

    let removed = slice.remove("href").unwrap().unwrap();
    assert_eq!(removed.value().unwrap().to_value(), Some(json!("foobar")));
    assert_eq!(slice.keys(), vec![json!("relation")]);
    assert!(slice.remove("href").unwrap().is_none());
}

#[test]
fn members_view_writes_through_to_the_object() {
    let object = Element::object();
    object.set("foo", Element::string("bar")).unwrap();

    let mut members = object.members();
    members.set("baz", Element::string("qux")).unwrap();
    members.remove("foo").unwrap();

    assert_eq!(object.keys(), vec![json!("baz")]);
    assert_eq!(object.get_value("baz"), Some(json!("qux")));
    let member = object.get_member("baz").unwrap();
    assert!(member.parent().unwrap().ptr_eq(&object));
}

#[test]
fn object_element_upsert_and_remove() {
    let object = Element::object();
    object.set("one", Element::number(1)).unwrap();
    object.set("two", Element::number(2)).unwrap();
    object.set("one", Element::number(10)).unwrap();

    assert_eq!(object.to_value(), Some(json!({ "one": 10, "two": 2 })));

    let removed = object.remove("one").unwrap().unwrap();
    assert!(removed.parent().is_none());
    assert_eq!(object.keys(), vec![json!("two")]);
    assert!(object.remove("one").unwrap().is_none());
}
