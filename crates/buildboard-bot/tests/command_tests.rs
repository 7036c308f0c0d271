// Handler-level tests: raw option strings in, reply text out, against a
// real on-disk store.

use buildboard_bot::commands::add::AddArgs;
use buildboard_bot::commands::delete::DeleteArgs;
use buildboard_bot::commands::view::ViewArgs;
use buildboard_bot::commands::{dispatch, CommandRequest, Invoker, MESSAGE_LIMIT};
use buildboard_store::BuildStore;
use tempfile::TempDir;

fn setup_store() -> (TempDir, BuildStore) {
    let dir = TempDir::new().unwrap();
    let store = BuildStore::new(dir.path().join("builds.db"));
    store.initialize().unwrap();
    (dir, store)
}

fn alice() -> Invoker {
    Invoker::new("111", "alice")
}

fn bob() -> Invoker {
    Invoker::new("222", "bob")
}

fn add(store: &BuildStore, invoker: &Invoker, name: &str, code: &str, description: &str) -> String {
    dispatch(
        store,
        CommandRequest::Add(AddArgs::new(name, code, description)),
        invoker,
    )
}

fn view(store: &BuildStore, name: &str) -> String {
    dispatch(store, CommandRequest::View(ViewArgs::from_raw(name)), &alice())
}

fn delete(store: &BuildStore, invoker: &Invoker, code: &str) -> String {
    dispatch(
        store,
        CommandRequest::Delete(DeleteArgs::from_raw(code)),
        invoker,
    )
}

#[test]
fn test_add_view_delete_flow() {
    let (_dir, store) = setup_store();

    let reply = add(&store, &alice(), " Mercy ", " ab12c ", "  pocket build  ");
    assert_eq!(
        reply,
        "📌 Build added for 'Mercy'!\nCode: `AB12C` | Description: pocket build | Owner: alice"
    );

    let listing = view(&store, "Mercy");
    assert!(listing.starts_with("📖 Builds registered for 'Mercy':"));
    assert!(listing.contains("1. Code: `AB12C` | Description: pocket build | Owner: alice"));

    assert_eq!(
        delete(&store, &bob(), "ab12c"),
        "⚠️ You can only delete builds you registered."
    );
    assert!(view(&store, "Mercy").contains("`AB12C`"));

    assert_eq!(
        delete(&store, &alice(), "ab12c"),
        "✅ Code `AB12C` has been deleted."
    );
    assert_eq!(view(&store, "Mercy"), "❌ No builds registered for 'Mercy'.");
}

#[test]
fn test_duplicate_code_reply() {
    let (_dir, store) = setup_store();
    add(&store, &alice(), "Ana", "SLEEP", "dart");

    let reply = add(&store, &bob(), "Kiriko", "sleep", "different hero");
    assert_eq!(reply, "⚠️ Code `SLEEP` is already registered.");
    assert_eq!(view(&store, "Kiriko"), "❌ No builds registered for 'Kiriko'.");
}

#[test]
fn test_unknown_hero_gets_format_error() {
    let (_dir, store) = setup_store();

    let reply = add(&store, &alice(), "Hero1", "AB12C", "d1");

    assert!(reply.starts_with("⚠️ Format error"));
    assert!(reply.contains("Reinhardt"));
    assert_eq!(view(&store, "Hero1"), "❌ No builds registered for 'Hero1'.");
}

#[test]
fn test_wrong_code_length_gets_format_error() {
    let (_dir, store) = setup_store();

    assert!(add(&store, &alice(), "Ana", "AB12", "d").starts_with("⚠️ Format error"));
    assert!(add(&store, &alice(), "Ana", "AB12CD", "d").starts_with("⚠️ Format error"));
    assert!(view(&store, "Ana").starts_with("❌"));
}

#[test]
fn test_validation_never_touches_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("untouched.db");
    let store = BuildStore::new(&path);

    let reply = add(&store, &alice(), "NotAHero", "AB12C", "d");

    assert!(reply.starts_with("⚠️ Format error"));
    assert!(!path.exists());
}

#[test]
fn test_delete_missing_code() {
    let (_dir, store) = setup_store();
    assert_eq!(
        delete(&store, &alice(), " zzzzz "),
        "❌ Code `ZZZZZ` does not exist."
    );
}

#[test]
fn test_view_name_is_trimmed_but_case_sensitive() {
    let (_dir, store) = setup_store();
    add(&store, &alice(), "Ana", "NADE1", "d");

    assert!(view(&store, "  Ana  ").contains("`NADE1`"));
    assert!(view(&store, "ana").starts_with("❌"));
}

#[test]
fn test_storage_failure_gets_generic_reply() {
    let dir = TempDir::new().unwrap();
    // A directory where the database file should be makes every open fail
    let path = dir.path().join("builds.db");
    std::fs::create_dir(&path).unwrap();
    let store = BuildStore::new(&path);

    let reply = add(&store, &alice(), "Ana", "AB12C", "d");
    assert_eq!(
        reply,
        "⚠️ Something went wrong on our side. Please try again later."
    );
}

#[test]
fn test_long_description_reply_fits_message() {
    let (_dir, store) = setup_store();
    let description = "x".repeat(5000);

    let reply = add(&store, &alice(), "Ana", "LONG1", &description);

    assert!(reply.chars().count() <= MESSAGE_LIMIT);
    assert!(reply.starts_with("📌 Build added for 'Ana'!"));
}

#[test]
fn test_view_lists_older_rows_after_a_huge_description() {
    let (_dir, store) = setup_store();
    add(&store, &alice(), "Ana", "OLD01", "short");
    add(&store, &bob(), "Ana", "BIG01", &"z".repeat(2100));

    let listing = view(&store, "Ana");

    assert!(listing.chars().count() <= MESSAGE_LIMIT);
    assert!(listing.contains("\n1. Code: `BIG01`"));
    assert!(listing.contains("\n2. Code: `OLD01` | Description: short | Owner: alice"));
    assert!(!listing.contains("more."));
}
