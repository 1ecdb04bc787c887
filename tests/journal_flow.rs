use diarist::confirm::ConfirmState;
use diarist::model::{Direction, FontFamily, ThemePreference};
use diarist::render::TerminalView;
use diarist::router::{InputEvent, Key, KeyPress, RouteOutcome, Session, SessionOptions};
use diarist::store::{EntryStore, FsBackend, StorageBackend};
use diarist::theme::FixedColorScheme;
use std::rc::Rc;

type FsSession = Session<FsBackend, TerminalView<Vec<u8>>>;

fn open_session(dir: &std::path::Path, os_dark: Option<bool>) -> FsSession {
    let backend = Rc::new(FsBackend::new(dir.to_path_buf()));
    let view = TerminalView::new(Vec::new(), 60, false).unwrap();
    let mut session = Session::new(
        backend,
        view,
        &SessionOptions::default(),
        &FixedColorScheme(os_dark),
    );
    session.start();
    session
}

fn screen(session: &FsSession) -> String {
    String::from_utf8_lossy(session.view().writer()).into_owned()
}

fn type_and_save(session: &mut FsSession, text: &str) -> RouteOutcome {
    session.handle(InputEvent::TextChanged(text.to_string()));
    session.handle(InputEvent::KeyDown(KeyPress::ctrl(Key::Enter)))
}

#[test]
fn mixed_script_journal_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(dir.path(), Some(false));

    type_and_save(&mut session, "Morning pages");
    type_and_save(&mut session, "مرحبا بالعالم");
    type_and_save(&mut session, "नमस्ते");

    let reopened = EntryStore::new(FsBackend::new(dir.path().to_path_buf()));
    let entries = reopened.load();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].direction, Direction::Ltr);
    assert_eq!(entries[1].direction, Direction::Rtl);
    assert_eq!(entries[1].font_family, FontFamily::Arabic);
    // Devanagari is classified as RTL.
    assert_eq!(entries[2].direction, Direction::Rtl);
    assert_eq!(entries[2].font_family, FontFamily::Devanagari);
}

#[test]
fn swipe_delete_removes_the_swiped_entry_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(dir.path(), Some(false));
    for text in ["one", "two", "three"] {
        type_and_save(&mut session, text);
    }

    session.handle(InputEvent::TouchStart { x: 400.0 });
    let outcome = session.handle(InputEvent::TouchEnd {
        x: 250.0,
        row: Some(1),
    });
    assert_eq!(outcome, RouteOutcome::ConfirmationRequested { position: 1 });
    assert_eq!(session.confirm_state(), ConfirmState::Open);

    assert_eq!(
        session.handle(InputEvent::ConfirmClicked),
        RouteOutcome::Deleted { position: 1 }
    );

    let texts: Vec<String> = session.store().load().into_iter().map(|e| e.text).collect();
    assert_eq!(texts, vec!["one", "three"]);
    assert!(screen(&session).contains("Removing entry 2"));
}

#[test]
fn backdrop_click_cancels_and_a_new_request_works_afterwards() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(dir.path(), Some(false));
    type_and_save(&mut session, "a");
    type_and_save(&mut session, "b");

    session.handle(InputEvent::DeleteClicked { row: 0 });
    assert_eq!(
        session.handle(InputEvent::OverlayClicked { on_backdrop: true }),
        RouteOutcome::Cancelled
    );
    assert_eq!(session.store().len(), 2);

    assert_eq!(
        session.handle(InputEvent::DeleteClicked { row: 1 }),
        RouteOutcome::ConfirmationRequested { position: 0 }
    );
    session.handle(InputEvent::ConfirmClicked);
    let texts: Vec<String> = session.store().load().into_iter().map(|e| e.text).collect();
    assert_eq!(texts, vec!["b"]);
}

#[test]
fn theme_is_resolved_once_then_follows_storage() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = open_session(dir.path(), Some(true));
    assert_eq!(first.theme(), ThemePreference::dark());
    assert!(screen(&first).starts_with("dark theme  🌜 Light Mode\n"));
    first.handle(InputEvent::ThemeToggled);
    drop(first);

    // The OS still prefers dark, but the stored light preference wins.
    let second = open_session(dir.path(), Some(true));
    assert_eq!(second.theme(), ThemePreference::light());

    let backend = FsBackend::new(dir.path().to_path_buf());
    assert_eq!(backend.get("darkMode").unwrap().as_deref(), Some("false"));
}

#[test]
fn stored_entries_use_the_documented_shape() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(dir.path(), Some(false));
    type_and_save(&mut session, "  שלום  ");

    let raw = std::fs::read_to_string(dir.path().join("diaryEntries.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &value[0];
    assert_eq!(entry["text"], "שלום");
    assert_eq!(entry["direction"], "rtl");
    assert_eq!(entry["fontFamily"], "'Noto Sans Hebrew', sans-serif");
    let date = entry["date"].as_str().unwrap();
    assert!(date.ends_with('Z'), "{date}");
    assert!(chrono::DateTime::parse_from_rfc3339(date).is_ok());
}
