use super::*;

use std::io::Cursor;

struct Session {
    out: String,
    err: String,
}

fn run_script(store: &Arc<FileStore>, script: &str) -> Session {
    let printer = ConsolePrinter::new(Vec::new(), Vec::new(), false);
    let mut prompt = Prompt::new(
        Arc::clone(store),
        Cursor::new(script.as_bytes().to_vec()),
        printer,
        ServerConfig::with_port(0),
    );

    prompt.run().expect("prompt run");

    let (out, err) = prompt.into_printer().into_inner();
    Session {
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

fn temp_store() -> (Arc<FileStore>, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = FileStore::open(dir.path()).expect("open store");
    (Arc::new(store), dir)
}

#[test]
fn banner_and_prompt_are_printed() {
    let (store, _dir) = temp_store();
    let s = run_script(&store, "exit\n");

    assert!(s.out.starts_with("=== File Management Tool ==="));
    assert!(s.out.contains("Available commands:"));
    assert!(s.out.contains("file-manager> "));
    assert!(s.out.ends_with("Goodbye!\n"));
}

#[test]
fn create_read_delete_cycle() {
    let (store, dir) = temp_store();
    let s = run_script(
        &store,
        "create a.txt hello world\nread a.txt\ndelete a.txt\nread a.txt\nexit\n",
    );

    assert!(s.out.contains("✓ File 'a.txt' created successfully"));
    assert!(s.out.contains("--- Content of 'a.txt' ---\nhello world\n--- End of 'a.txt' ---"));
    assert!(s.out.contains("✓ File 'a.txt' deleted successfully"));
    assert_eq!(s.err, "✗ File 'a.txt' not found\n");
    assert!(!dir.path().join("a.txt").exists());
}

#[test]
fn create_existing_reports_error_and_keeps_file() {
    let (store, _dir) = temp_store();
    store.create("keep.txt", "original").unwrap();

    let s = run_script(&store, "create keep.txt replaced\nexit\n");

    assert_eq!(
        s.err,
        "✗ Error creating file: File 'keep.txt' already exists\n"
    );
    assert_eq!(store.read("keep.txt").unwrap(), "original");
}

#[test]
fn list_and_info_render_records() {
    let (store, _dir) = temp_store();
    store.create("b.rs", "fn main() {}").unwrap();
    store.create("a.txt", "hi").unwrap();

    let s = run_script(&store, "list\ninfo b.rs\nexit\n");

    let a = s.out.find("a.txt (2 bytes").expect("a.txt listed");
    let b = s.out.find("b.rs (12 bytes").expect("b.rs listed");
    assert!(a < b, "list should be sorted by name");
    assert!(s.out.contains("--- File Info for 'b.rs' ---"));
    assert!(s.out.contains("extension: rs"));
    assert!(s.err.is_empty());
}

#[test]
fn missing_arguments_print_usage_without_touching_store() {
    let (store, _dir) = temp_store();
    let s = run_script(&store, "create\nread\ndelete\ninfo\nexit\n");

    for usage in [
        "Usage: create <filename> [content]",
        "Usage: read <filename>",
        "Usage: delete <filename>",
        "Usage: info <filename>",
    ] {
        assert!(s.out.contains(usage), "missing {usage:?}");
    }
    assert!(s.err.is_empty());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn unknown_and_blank_lines() {
    let (store, _dir) = temp_store();
    let s = run_script(&store, "\n   \nfoo bar\nexit\n");

    assert!(
        s.out
            .contains("Unknown command: foo. Type 'help' for available commands.")
    );
    // one prompt per line read
    assert_eq!(s.out.matches("file-manager> ").count(), 4);
}

#[test]
fn eof_ends_the_loop() {
    let (store, _dir) = temp_store();
    let s = run_script(&store, "create x.txt\n");

    assert!(s.out.contains("✓ File 'x.txt' created successfully"));
    assert!(s.out.ends_with("Goodbye!\n"));
}

#[test]
fn commands_after_exit_are_not_run() {
    let (store, _dir) = temp_store();
    run_script(&store, "exit\ncreate never.txt\n");

    assert!(store.read("never.txt").unwrap_err().is_not_found());
}

#[test]
fn traversal_names_are_refused() {
    let (store, dir) = temp_store();
    let s = run_script(&store, "create ../outside.txt x\nexit\n");

    assert!(s.err.contains("Invalid file name '../outside.txt'"));
    assert!(!dir.path().parent().unwrap().join("outside.txt").exists());
}

#[test]
fn server_starts_once_and_does_not_block() {
    let (store, _dir) = temp_store();
    let s = run_script(&store, "server 0\nserver 0\ncreate after.txt ok\nexit\n");

    assert!(s.out.contains("File Manager Server running at http://localhost:"));
    assert!(s.err.contains("✗ Server already running at http://localhost:"));
    assert_eq!(store.read("after.txt").unwrap(), "ok");
}

#[test]
fn invalid_server_port_prints_usage() {
    let (store, _dir) = temp_store();
    let s = run_script(&store, "server nope\nexit\n");

    assert!(s.out.contains("Invalid port 'nope'. Usage: server [port]"));
    assert!(!s.out.contains("Server running"));
}
