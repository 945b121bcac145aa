use library_core::{Book, Member, Record, UNASSIGNED_ID};

#[test]
fn new_records_start_unassigned() {
    let book = Book::new("Dune", "Herbert");
    let member = Member::new("Alice");

    assert_eq!(book.id, UNASSIGNED_ID);
    assert_eq!(member.id, UNASSIGNED_ID);
}

#[test]
fn display_form_matches_catalog_listing() {
    let mut book = Book::new("1984", "Orwell");
    book.assign_id(2);
    let mut member = Member::new("Bob");
    member.assign_id(7);

    assert_eq!(book.to_string(), "2: 1984 - Orwell");
    assert_eq!(member.to_string(), "7: Bob");
}

#[test]
fn display_keeps_empty_fields_verbatim() {
    let mut book = Book::new("", "");
    book.assign_id(3);

    assert_eq!(book.to_string(), "3:  - ");
    assert_eq!(Member::new("").to_string(), "0: ");
}

#[test]
fn serialization_uses_field_names() {
    let mut book = Book::new("Dune", "Herbert");
    book.assign_id(1);

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["title"], "Dune");
    assert_eq!(json["author"], "Herbert");

    let member: Member = serde_json::from_value(serde_json::json!({
        "id": 4,
        "name": "Carol"
    }))
    .unwrap();
    assert_eq!(member.id, 4);
    assert_eq!(member.name, "Carol");
}
