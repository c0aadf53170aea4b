use aula::contacts::ContactBook;
use aula::library::Library;
use aula::model::Book;
use aula::notes::NoteBook;
use aula::temperature::{convert, Scale};
use aula::text::analyze;
use aula::{Error, Order, RecordStore};

#[test]
fn every_book_is_found_by_its_own_title_and_author() {
    let library = Library::new();
    for book in library.books() {
        assert!(library.by_title(&book.title).contains(&book));
        assert!(library.by_author(&book.author).contains(&book));
    }
}

#[test]
fn duplicate_phone_leaves_book_unchanged() {
    let mut contacts = ContactBook::new();
    contacts.add("Ana", "600000001", "ana@example.com").unwrap();
    let before = contacts.len();
    let err = contacts.add("Ana Bis", "600000001", "bis@example.com").unwrap_err();
    assert!(matches!(err, Error::DuplicateKey(_)));
    assert_eq!(contacts.len(), before);
}

#[test]
fn sorting_by_a_constant_keeps_insertion_order() {
    let mut store = RecordStore::new();
    for (i, title) in ["c", "a", "b", "a"].iter().enumerate() {
        store.insert(Book::new(title, "X", 2000 + i as i32, true)).unwrap();
    }
    for order in [Order::Ascending, Order::Descending] {
        let years: Vec<_> = store.sorted_by(|_| (), order).iter().map(|b| b.year).collect();
        assert_eq!(years, vec![2000, 2001, 2002, 2003]);
    }
}

#[test]
fn celsius_round_trip_holds_down_to_absolute_zero() {
    for c in [-273.15, -200.0, -40.0, 0.0, 36.6, 100.0, 5_000.0] {
        let f = convert(c, Scale::Celsius, Scale::Fahrenheit).unwrap().value;
        let back = convert(f, Scale::Fahrenheit, Scale::Celsius).unwrap().value;
        assert!((back - c).abs() < 1e-9);
    }
    assert!(matches!(
        convert(-273.16, Scale::Celsius, Scale::Kelvin),
        Err(Error::PhysicalImpossibility { .. })
    ));
}

#[test]
fn greeting_statistics() {
    let stats = analyze("Hola hola HOLA mundo").unwrap();
    assert_eq!(stats.word_count, 4);
    assert_eq!(stats.most_frequent, Some(("hola".into(), 3)));
}

#[test]
fn toggling_twice_is_a_no_op() {
    let mut contacts = ContactBook::new();
    contacts.add("Eva", "611111111", "eva@example.com").unwrap();
    let first = contacts.toggle_favorite("611111111").unwrap();
    let second = contacts.toggle_favorite("611111111").unwrap();
    assert_ne!(first, second);
    assert!(contacts.favorites().is_empty());

    let mut notes = NoteBook::new();
    notes.create("t", "c").unwrap();
    notes.toggle_important(0).unwrap();
    notes.toggle_important(0).unwrap();
    assert!(!notes.all().get(0).unwrap().important);
}

#[test]
fn aggregates_over_nothing() {
    let stats = Library::empty().statistics();
    assert!(stats.groups.is_empty());
    assert!(stats.top_group.is_none());
}

#[test]
fn deleting_an_unknown_phone_keeps_size() {
    let mut contacts = ContactBook::new();
    contacts.add("Leo", "622222222", "leo@example.com").unwrap();
    assert!(matches!(contacts.delete("633333333"), Err(Error::NotFound(_))));
    assert_eq!(contacts.len(), 1);
}
