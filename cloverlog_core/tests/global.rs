use std::fs;

use cloverlog_core::{Logger, clover, global, init};
use tempfile::tempdir;

// Single test: the process-wide logger can only be installed once per binary.
#[test]
fn init_once_then_clover_writes_through_global() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("global.log");

    init(Logger::builder().file(&path).build()).expect("first init wins");
    let again = init(Logger::builder().file(dir.path().join("other.log")).build());
    assert!(again.is_err());

    clover!("info", "from", "global").unwrap();
    global().log_without_function("plain", &[]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(
        lines[0].contains("::info::")
            && lines[0].contains("::init_once_then_clover_writes_through_global::")
            && lines[0].ends_with("::from::global"),
        "{}",
        lines[0]
    );
    // No function is observable without the macro; `-` marks it unknown.
    assert!(lines[1].contains("::plain::") && lines[1].contains("::-::"));
    assert!(!dir.path().join("other.log").exists());
}
