use std::fs;

use tempfile::TempDir;

use context_statusline::usage::{context_tokens, last_usage_in_transcript};

fn context_tokens_from_transcript(path: &str) -> i64 {
    context_tokens(last_usage_in_transcript(path).as_ref())
}

fn assistant(input: i64, cache_create: i64, cache_read: i64, output: i64) -> String {
    format!(
        r#"{{"type":"assistant","message":{{"model":"m","usage":{{"input_tokens":{input},"cache_creation_input_tokens":{cache_create},"cache_read_input_tokens":{cache_read},"output_tokens":{output}}}}}}}"#
    )
}

fn write_transcript(dir: &TempDir, lines: &[String]) -> String {
    let path = dir.path().join("transcript.jsonl");
    fs::write(&path, lines.join("\n")).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn uses_only_the_last_assistant_usage() {
    let dir = TempDir::new().unwrap();
    let path = write_transcript(
        &dir,
        &[
            assistant(150_000, 10_000, 5_000, 2_000),
            r#"{"type":"user","message":{"role":"user","content":"more"}}"#.to_string(),
            assistant(1000, 0, 500, 500),
            r#"{"type":"user","message":{"role":"user","content":"thanks"}}"#.to_string(),
        ],
    );
    assert_eq!(context_tokens_from_transcript(&path), 2000);
}

#[test]
fn invalid_line_before_valid_usage_is_tolerated() {
    let dir = TempDir::new().unwrap();
    let path = write_transcript(
        &dir,
        &["{\"type\":\"assistant\",".to_string(), assistant(10, 20, 30, 40)],
    );
    assert_eq!(context_tokens_from_transcript(&path), 100);
}

#[test]
fn invalid_trailing_line_is_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write_transcript(
        &dir,
        &[assistant(10, 20, 30, 40), "garbage }".to_string(), String::new()],
    );
    let usage = last_usage_in_transcript(&path).unwrap();
    assert_eq!(usage.output_tokens, 40);
}

#[test]
fn crlf_line_endings_are_handled() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("t.jsonl");
    let contents = format!("{}\r\n{}\r\n", assistant(1, 1, 1, 1), assistant(2, 2, 2, 2));
    fs::write(&path, contents).unwrap();
    assert_eq!(context_tokens_from_transcript(&path.to_string_lossy()), 8);
}

#[test]
fn unusable_transcripts_yield_zero() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("missing.jsonl");
    assert_eq!(context_tokens_from_transcript(&missing.to_string_lossy()), 0);

    assert_eq!(context_tokens_from_transcript(&dir.path().to_string_lossy()), 0);

    let binary = dir.path().join("binary.jsonl");
    fs::write(&binary, b"\xff\xfe\x00{").unwrap();
    assert_eq!(context_tokens_from_transcript(&binary.to_string_lossy()), 0);

    let no_usage = write_transcript(
        &dir,
        &[r#"{"type":"summary","summary":"x"}"#.to_string()],
    );
    assert!(last_usage_in_transcript(&no_usage).is_none());
}
