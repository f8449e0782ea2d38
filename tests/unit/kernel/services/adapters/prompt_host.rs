use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex as StdMutex;
use tempfile::tempdir;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

fn host() -> (PromptHost, UnboundedSender<String>, Arc<StdMutex<Vec<String>>>) {
    let (tx, rx) = unbounded_channel();
    let printed = Arc::new(StdMutex::new(Vec::new()));
    let sink = Arc::clone(&printed);
    let host = PromptHost::new(
        rx,
        Arc::new(move |line| sink.lock().unwrap().push(line.to_string())),
    );
    (host, tx, printed)
}

#[tokio::test]
async fn confirm_accepts_yes_only() {
    let (host, tx, printed) = host();
    tx.send("Y".to_string()).unwrap();
    tx.send("no".to_string()).unwrap();
    tx.send(String::new()).unwrap();

    assert!(host.confirm_dialog("Close?").await);
    assert!(!host.confirm_dialog("Close?").await);
    assert!(!host.confirm_dialog("Close?").await);
    assert_eq!(printed.lock().unwrap()[0], "Close? [y/N]");
}

#[tokio::test]
async fn closed_input_cancels_dialogs() {
    let (host, tx, _) = host();
    drop(tx);

    assert_eq!(host.open_file().await, Err(HostError::Cancelled));
    assert_eq!(host.interpreter_dialog("Interpreter path:").await, None);
    assert!(!host.confirm_dialog("Close?").await);
}

#[tokio::test]
async fn save_as_writes_to_answered_path() {
    let dir = tempdir().unwrap();
    let (host, tx, _) = host();
    let host = host.with_base_dir(dir.path());
    tx.send("a.py".to_string()).unwrap();

    let saved = host
        .save_file(&SaveRequest {
            file: None,
            content: "a=1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(saved.path, dir.path().join("a.py"));
    assert_eq!(saved.name, "a.py");
    assert_eq!(std::fs::read_to_string(dir.path().join("a.py")).unwrap(), "a=1");
}

#[tokio::test]
async fn save_to_known_path_does_not_prompt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("f.py");
    let (host, _tx, printed) = host();

    host.save_file(&SaveRequest {
        file: Some(path.clone()),
        content: "x=2".to_string(),
    })
    .await
    .unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "x=2");
    assert!(printed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn open_reads_chosen_file() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("f.py"), "x=1").unwrap();
    let (host, tx, _) = host();
    let host = host.with_base_dir(dir.path());
    tx.send(" f.py ".to_string()).unwrap();

    let handle = host.open_file().await.unwrap();

    assert_eq!(handle.name, "f.py");
    assert_eq!(handle.content, "x=1");
}

#[test]
fn resolve_matches_the_identity_the_open_dialog_assigns() {
    let (host, _tx, _) = host();
    let host = host.with_base_dir("/work");

    assert_eq!(host.resolve("a.py"), PathBuf::from("/work/a.py"));
    assert_eq!(host.resolve("./src/./a.py"), PathBuf::from("/work/src/a.py"));
    assert_eq!(host.resolve("/tmp/b.py"), PathBuf::from("/tmp/b.py"));
}

#[tokio::test]
async fn typed_name_resolves_to_opened_path() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("f.py"), "x=1").unwrap();
    let (host, tx, _) = host();
    let host = host.with_base_dir(dir.path());
    tx.send("./f.py".to_string()).unwrap();

    let handle = host.open_file().await.unwrap();

    assert_eq!(handle.path, host.resolve("f.py"));
}

#[tokio::test]
async fn read_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let (host, _tx, _) = host();

    let err = host.read_file(&dir.path().join("gone.py")).await.unwrap_err();

    assert!(matches!(err, HostError::Io { .. }));
}

#[test]
fn emit_reaches_subscribers_until_unsubscribed() {
    let (host, _tx, _) = host();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let id = host.subscribe(
        "event-terminal",
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );

    assert_eq!(host.emit("event-terminal"), 1);
    assert!(host.unsubscribe(id));
    assert_eq!(host.emit("event-terminal"), 0);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
