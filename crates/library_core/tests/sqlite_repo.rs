use library_core::db::open_db_in_memory;
use library_core::{
    Book, Member, RepoError, Repository, SqliteBookRepository, SqliteMemberRepository,
};
use rusqlite::params;

#[test]
fn book_add_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteBookRepository::new(&conn);

    let mut book = Book::new("Dune", "Herbert");
    let id = repo.add(&mut book).unwrap();

    assert_eq!(id, 1);
    assert_eq!(book.id, 1);
    assert_eq!(repo.get_by_id(id).unwrap(), Some(book));
    assert!(repo.get_by_id(2).unwrap().is_none());
}

#[test]
fn book_scenario_matches_in_memory_store() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteBookRepository::new(&conn);
    let mut dune = Book::new("Dune", "Herbert");
    let mut orwell = Book::new("1984", "Orwell");

    assert_eq!(repo.add(&mut dune).unwrap(), 1);
    assert_eq!(repo.add(&mut orwell).unwrap(), 2);
    repo.remove(&dune).unwrap();

    assert!(repo.get_by_id(1).unwrap().is_none());
    assert_eq!(repo.get_by_id(2).unwrap().unwrap().title, "1984");
}

#[test]
fn member_ids_follow_current_maximum() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteMemberRepository::new(&conn);
    let mut alice = Member::new("Alice");
    let mut bob = Member::new("Bob");
    let mut carol = Member::new("Carol");

    repo.add(&mut alice).unwrap();
    repo.add(&mut bob).unwrap();
    repo.remove(&alice).unwrap();
    assert_eq!(repo.add(&mut carol).unwrap(), 3);

    repo.remove(&carol).unwrap();
    let mut dave = Member::new("Dave");
    assert_eq!(repo.add(&mut dave).unwrap(), 3);
}

#[test]
fn removing_absent_member_is_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteMemberRepository::new(&conn);
    let mut alice = Member::new("Alice");
    repo.add(&mut alice).unwrap();

    repo.remove(&Member::new("Never added")).unwrap();

    assert_eq!(member_count(&conn), 1);
    assert_eq!(repo.get_by_id(1).unwrap(), Some(alice));
}

#[test]
fn empty_member_name_is_stored() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteMemberRepository::new(&conn);
    let mut blank = Member::new("");

    assert_eq!(repo.add(&mut blank).unwrap(), 1);

    assert_eq!(member_count(&conn), 1);
    assert_eq!(repo.get_by_id(1).unwrap().unwrap().name, "");
}

#[test]
fn non_positive_stored_id_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO books (id, title, author) VALUES (?1, ?2, ?3);",
        params![-4, "Ghost", "Anonymous"],
    )
    .unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let err = repo.get_by_id(-4).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(ref message) if message.contains("books.id")));
}

#[test]
fn book_and_member_tables_share_connection_independently() {
    let conn = open_db_in_memory().unwrap();
    let mut books = SqliteBookRepository::new(&conn);
    let mut members = SqliteMemberRepository::new(&conn);

    assert_eq!(books.add(&mut Book::new("Dune", "Herbert")).unwrap(), 1);
    assert_eq!(members.add(&mut Member::new("Alice")).unwrap(), 1);
    assert_eq!(books.add(&mut Book::new("1984", "Orwell")).unwrap(), 2);
}

fn member_count(conn: &rusqlite::Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM members;", [], |row| row.get(0))
        .unwrap()
}
