use super::*;

fn handle(path: &str, content: &str) -> FileHandle {
    FileHandle::new(path, content)
}

#[test]
fn open_same_identity_twice_keeps_one_entry_with_fresh_content() {
    let mut session = SessionState::new();
    session.open_or_focus(handle("f.py", "x=1"));
    session.open_or_focus(handle("g.py", ""));
    session.open_or_focus(handle("f.py", "x=9"));

    let paths: Vec<_> = session
        .documents()
        .iter()
        .map(|doc| doc.path.clone().unwrap())
        .collect();
    assert_eq!(paths, vec![PathBuf::from("f.py"), PathBuf::from("g.py")]);
    assert_eq!(session.documents()[0].content, "x=9");
    assert_eq!(session.current(), &CurrentDocument::Path(PathBuf::from("f.py")));
}

#[test]
fn reopening_discards_cached_edits() {
    let mut session = SessionState::new();
    session.open_or_focus(handle("f.py", "x=1"));
    session.update_content("x=2".to_string());
    session.open_or_focus(handle("f.py", "x=1"));

    let doc = session.current_document().unwrap();
    assert_eq!(doc.content, "x=1");
    assert!(!doc.dirty);
}

#[test]
fn update_content_marks_identified_document_dirty() {
    let mut session = SessionState::new();
    session.open_or_focus(handle("f.py", "x=1"));

    session.update_content("x=2".to_string());
    session.update_content("x=2".to_string());

    let doc = session.document(Path::new("f.py")).unwrap();
    assert_eq!(doc.content, "x=2");
    assert!(doc.dirty);
    assert_eq!(doc.status(), DocumentStatus::Dirty);
}

#[test]
fn update_content_without_current_starts_untitled_slot() {
    let mut session = SessionState::new();
    session.update_content("print()".to_string());

    assert_eq!(session.current(), &CurrentDocument::Untitled);
    assert!(session.documents().is_empty());
    let doc = session.current_document().unwrap();
    assert!(doc.is_untitled());
    assert!(doc.dirty);
    assert_eq!(doc.display_name, UNTITLED_NAME);
}

#[test]
fn new_document_resets_slot_and_leaves_registry_alone() {
    let mut session = SessionState::new();
    session.open_or_focus(handle("f.py", "x=1"));
    session.update_content("x=2".to_string());
    session.new_document();
    session.update_content("draft".to_string());
    session.new_document();

    assert_eq!(session.current(), &CurrentDocument::Untitled);
    let scratch = session.current_document().unwrap();
    assert!(scratch.content.is_empty());
    assert!(!scratch.dirty);
    assert_eq!(session.documents().len(), 1);
    assert!(session.document(Path::new("f.py")).unwrap().dirty);
    assert_eq!(session.title(), UNTITLED_NAME);
}

#[test]
fn save_request_follows_current_document() {
    let mut session = SessionState::new();
    assert!(session.save_request().is_none());

    session.new_document();
    session.update_content("a = 1".to_string());
    let request = session.save_request().unwrap();
    assert!(request.is_save_as());
    assert_eq!(request.content, "a = 1");

    session.open_or_focus(handle("f.py", "x=1"));
    let request = session.save_request().unwrap();
    assert_eq!(request.file, Some(PathBuf::from("f.py")));
}

#[test]
fn mark_saved_requires_matching_content() {
    let mut session = SessionState::new();
    session.open_or_focus(handle("f.py", "x=1"));
    session.update_content("x=2".to_string());

    assert!(!session.mark_saved(Path::new("f.py"), "x=1"));
    assert!(session.is_dirty());
    assert!(session.mark_saved(Path::new("f.py"), "x=2"));
    assert!(!session.is_dirty());
    assert_eq!(
        session.current_document().unwrap().status(),
        DocumentStatus::Saved
    );
}

#[test]
fn complete_save_as_moves_slot_into_registry() {
    let mut session = SessionState::new();
    session.new_document();
    session.update_content("a".to_string());

    session.complete_save_as(handle("/w/a.py", "a"));

    assert_eq!(session.documents().len(), 1);
    let doc = &session.documents()[0];
    assert_eq!(doc.path, Some(PathBuf::from("/w/a.py")));
    assert_eq!(doc.display_name, "a.py");
    assert!(!doc.dirty);
    assert_eq!(session.current_path(), Some(Path::new("/w/a.py")));
}

#[test]
fn remove_current_clears_current() {
    let mut session = SessionState::new();
    session.open_or_focus(handle("f.py", ""));
    session.open_or_focus(handle("g.py", ""));

    let removed = session.remove(Path::new("g.py")).unwrap();
    assert_eq!(removed.path, Some(PathBuf::from("g.py")));
    assert_eq!(session.current(), &CurrentDocument::None);
    assert_eq!(session.documents().len(), 1);
    assert!(session.remove(Path::new("g.py")).is_none());
}

#[test]
fn remove_other_document_keeps_current() {
    let mut session = SessionState::new();
    session.open_or_focus(handle("f.py", ""));
    session.open_or_focus(handle("g.py", ""));

    session.remove(Path::new("f.py"));
    assert_eq!(session.current_path(), Some(Path::new("g.py")));
}

#[test]
fn focus_with_content_ignores_unknown_paths() {
    let mut session = SessionState::new();
    session.open_or_focus(handle("f.py", "x=1"));
    session.open_or_focus(handle("g.py", "y=1"));

    assert!(!session.focus_with_content(Path::new("h.py"), "z".to_string()));
    assert!(session.focus_with_content(Path::new("f.py"), "x=3".to_string()));
    assert_eq!(session.current_document().unwrap().content, "x=3");
    assert_eq!(
        session.documents()[0].path.as_deref(),
        Some(Path::new("g.py"))
    );
}

#[test]
fn discard_check_only_flags_dirty_documents() {
    let mut session = SessionState::new();
    session.open_or_focus(handle("f.py", "x=1"));
    session.open_or_focus(handle("g.py", "y=1"));
    assert_eq!(
        session.discard_check(&Transition::NewDocument),
        DiscardCheck::Proceed
    );

    session.update_content("y=2".to_string());
    assert_eq!(
        session.discard_check(&Transition::NewDocument),
        DiscardCheck::Confirm {
            display_name: "g.py".to_string()
        }
    );
    assert!(session
        .discard_check(&Transition::Close(PathBuf::from("g.py")))
        .needs_confirmation());
    assert!(!session
        .discard_check(&Transition::Select(PathBuf::from("f.py")))
        .needs_confirmation());
}

#[test]
fn clear_current_keeps_registry() {
    let mut session = SessionState::new();
    assert!(!session.clear_current());
    session.open_or_focus(handle("f.py", ""));
    assert!(session.clear_current());
    assert_eq!(session.current(), &CurrentDocument::None);
    assert_eq!(session.documents().len(), 1);
    assert_eq!(session.title(), UNTITLED_NAME);
}
