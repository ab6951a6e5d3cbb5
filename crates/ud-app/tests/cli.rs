use std::process::{Command, Output};

/// Run the binary from an empty directory so no `upsidedown.toml` is picked up.
fn run(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_upsidedown"))
        .args(args)
        .current_dir(dir.path())
        .output()
        .unwrap()
}

#[test]
fn no_arguments_exits_with_error_and_empty_stdout() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("You must provide at least one argument"),
        "stderr : {stderr}"
    );
}

#[test]
fn prints_flipped_phrase_with_newline() {
    let out = run(&["hello", "world"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "p\u{a781}\u{0279}o\u{028d} o\u{a781}\u{a781}\u{0259}\u{0265}\n"
    );
}

#[test]
fn hyphenated_words_are_flipped() {
    let out = run(&["-hello", "-5"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "5- o\u{a781}\u{a781}\u{0259}\u{0265}-\n"
    );
}
