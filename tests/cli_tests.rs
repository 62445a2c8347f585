//! End-to-end tests for the `fieldcut` binary.

#![cfg(feature = "cli")]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

fn fieldcut<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_fieldcut"))
        .args(args)
        .output()
        .expect("failed to run fieldcut")
}

fn input_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

fn path_arg(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

// ============================================================================
// Extraction
// ============================================================================

#[test]
fn test_default_tab_second_field() {
    let file = input_file(b"a\tb\tc\n1\t2\t3\n");
    let output = fieldcut([path_arg(file.path())]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"b\n2\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_comma_first_field() {
    let file = input_file(b"x,y,z\n");
    let output = fieldcut(["-d", ",", "-f", "1", path_arg(file.path()).as_str()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"x\n");
}

#[test]
fn test_adjacent_delimiters_print_empty_line() {
    let file = input_file(b"a,,c\n");
    let output = fieldcut(["-d", ",", "-f", "2", path_arg(file.path()).as_str()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"\n");
}

#[test]
fn test_last_line_without_newline() {
    let file = input_file(b"a,b\nc,d");
    let output = fieldcut(["-d", ",", path_arg(file.path()).as_str()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"b\nd\n");
}

#[test]
fn test_short_line_prints_empty_line() {
    let file = input_file(b"a,b\nlonely\nc,d\n");
    let output = fieldcut(["-d", ",", "-f", "2", path_arg(file.path()).as_str()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"b\n\nd\n");
}

#[test]
fn test_empty_file_prints_nothing() {
    let file = input_file(b"");
    let output = fieldcut([path_arg(file.path())]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_defaults_match_explicit_flags() {
    let file = input_file(b"k\tv\tw\none\ttwo\n\tempty-first\nsolo\n");
    let path = path_arg(file.path());

    let implicit = fieldcut([path.as_str()]);
    let explicit = fieldcut(["-d", "\\t", "-f", "2", path.as_str()]);
    let literal_tab = fieldcut(["-d", "\t", "-f", "2", path.as_str()]);

    assert_eq!(implicit.status.code(), Some(0));
    assert_eq!(implicit.stdout, explicit.stdout);
    assert_eq!(implicit.stdout, literal_tab.stdout);
    assert_eq!(implicit.stdout, b"v\ntwo\nempty-first\n\n");
}

#[test]
fn test_verbose_prints_configuration_first() {
    let file = input_file(b"a\tb\n");
    let path = path_arg(file.path());
    let output = fieldcut(["-l", path.as_str()]);

    assert_eq!(output.status.code(), Some(0));
    let expected = format!(
        "\tdelimiter: \\t\n\tfile: {}\n\tfilesize: 4\n\tlogger: 1\n\ttarget field: 2\nb\n",
        path
    );
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

fn closed_stdout_status(extra_args: &[&str]) -> Option<i32> {
    // Far more output than a pipe buffer holds, so the writer must hit the closed pipe
    let mut contents = Vec::new();
    for i in 0..100_000 {
        contents.extend_from_slice(format!("key{}\tvalue{}\n", i, i).as_bytes());
    }
    let file = input_file(&contents);

    let mut child = Command::new(env!("CARGO_BIN_EXE_fieldcut"))
        .args(extra_args)
        .arg(file.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to run fieldcut");
    drop(child.stdout.take());

    child.wait().expect("fieldcut did not exit").code()
}

#[test]
fn test_closed_stdout_exits_successfully() {
    assert_eq!(closed_stdout_status(&[]), Some(0));
}

#[test]
fn test_closed_stdout_with_verbose_exits_successfully() {
    assert_eq!(closed_stdout_status(&["-l"]), Some(0));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_zero_field_is_fatal() {
    let file = input_file(b"a\tb\n");
    let output = fieldcut(["-f", "0", path_arg(file.path()).as_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("field must be higher than 0"), "{}", stderr);
}

#[test]
fn test_negative_field_is_fatal() {
    let file = input_file(b"a\tb\n");
    let output = fieldcut(["-f", "-1", path_arg(file.path()).as_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_nonexistent_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.tsv");
    let output = fieldcut([path_arg(&missing)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("couldn't find file"), "{}", stderr);
}

#[test]
fn test_missing_file_argument_is_fatal() {
    let output = fieldcut(Vec::<String>::new());

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_multi_character_delimiter_is_fatal() {
    let file = input_file(b"a::b\n");
    let output = fieldcut(["-d", "::", path_arg(file.path()).as_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_help_exits_successfully() {
    let output = fieldcut(["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}
