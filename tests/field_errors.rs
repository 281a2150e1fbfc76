use json_envelope::{FieldError, FieldErrors};
use serde_json::json;

#[test]
fn flat_field_renders_one_segment() {
    let errors = FieldErrors::new().field("name", ["Required"]);
    assert_eq!(errors.message(), Some("Name: Required. ".to_string()));
}

#[test]
fn flat_messages_are_joined_with_commas() {
    let errors = FieldErrors::new().field("first_name", ["Required", "Too short"]);
    assert_eq!(
        errors.message(),
        Some("First name: Required, Too short. ".to_string())
    );
}

#[test]
fn nested_field_uses_dotted_key() {
    let errors = FieldErrors::new().with(
        "address",
        FieldError::Nested(vec![("city".to_string(), vec!["Required".to_string()])]),
    );
    assert_eq!(errors.message(), Some("Address.city: Required. ".to_string()));
}

#[test]
fn collection_field_includes_index_in_key() {
    let errors = FieldErrors::new().with(
        "phones",
        FieldError::Collection(vec![(
            0,
            vec![("number".to_string(), vec!["Invalid".to_string()])],
        )]),
    );
    assert_eq!(errors.message(), Some("Phones.0.number: Invalid. ".to_string()));
}

#[test]
fn segments_follow_insertion_order() {
    let errors = FieldErrors::new()
        .field("title", ["Required"])
        .with(
            "phones",
            FieldError::Collection(vec![
                (0, vec![("number".to_string(), vec!["Invalid".to_string()])]),
                (2, vec![("number".to_string(), vec!["Too long".to_string()])]),
            ]),
        )
        .field("name", ["Required"]);

    assert_eq!(
        errors.message(),
        Some(
            "Title: Required. Phones.0.number: Invalid. Phones.2.number: Too long. Name: Required. "
                .to_string()
        )
    );
}

#[test]
fn no_entries_means_no_message_at_all() {
    assert_eq!(FieldErrors::new().message(), None);
}

#[test]
fn entries_without_messages_yield_empty_string() {
    let errors = FieldErrors::new().field("name", Vec::<String>::new());
    assert_eq!(errors.message(), Some(String::new()));
}

#[test]
fn empty_and_no_errors_are_distinct() {
    let none = FieldErrors::new();
    let empty = FieldErrors::new().field("name", Vec::<String>::new());
    assert!(none.is_empty());
    assert!(!empty.is_empty());
    assert_ne!(none.message(), empty.message());
}

#[test]
fn to_value_preserves_shape_and_order() {
    let errors = FieldErrors::new()
        .field("name", ["Required"])
        .with(
            "address",
            FieldError::Nested(vec![("city".to_string(), vec!["Required".to_string()])]),
        )
        .with(
            "phones",
            FieldError::Collection(vec![(
                0,
                vec![("number".to_string(), vec!["Invalid".to_string()])],
            )]),
        );

    let value = errors.to_value();
    assert_eq!(
        value,
        json!({
            "name": ["Required"],
            "address": { "city": ["Required"] },
            "phones": { "0": { "number": ["Invalid"] } }
        })
    );
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["name", "address", "phones"]);
}

#[test]
fn collect_from_pairs() {
    let errors: FieldErrors = vec![
        ("name".to_string(), FieldError::flat(["Required"])),
        ("email".to_string(), FieldError::flat(["Invalid"])),
    ]
    .into_iter()
    .collect();

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|(_, e)| matches!(e, FieldError::Flat(_))));
    assert_eq!(
        errors.message(),
        Some("Name: Required. Email: Invalid. ".to_string())
    );
}
