use std::fs;

use clap::Parser;
use clyper::{cli::Cli, clipboard::MemoryClipboard, dispatch, prompt::Scripted};
use tempfile::TempDir;

fn cli(dir: &TempDir, args: &[&str]) -> Cli {
    let file = dir.path().join("clyper_data.json");
    let mut argv = vec!["clyper", "--file", file.to_str().unwrap()];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn no_arguments_prints_usage() {
    let mut prompt = Scripted::default();
    let mut clipboard = MemoryClipboard::default();

    dispatch::run(Cli::try_parse_from(["clyper"]).unwrap(), &mut prompt, &mut clipboard).unwrap();
    assert!(prompt.printed("Usage"));
}

#[test]
fn add_list_copy_delete() {
    let dir = TempDir::new().unwrap();
    let mut clipboard = MemoryClipboard::default();

    let mut prompt = Scripted::new(["git status -sb", "gs", "short status"]);
    dispatch::run(cli(&dir, &["a"]), &mut prompt, &mut clipboard).unwrap();

    let mut prompt = Scripted::default();
    dispatch::run(cli(&dir, &["list"]), &mut prompt, &mut clipboard).unwrap();
    assert!(prompt.printed("gs - short status"));

    let mut prompt = Scripted::default();
    dispatch::run(cli(&dir, &["gs"]), &mut prompt, &mut clipboard).unwrap();
    assert_eq!(clipboard.contents.as_deref(), Some("git status -sb"));

    let mut prompt = Scripted::new(["y"]);
    dispatch::run(cli(&dir, &["delete", "gs"]), &mut prompt, &mut clipboard).unwrap();

    let mut prompt = Scripted::default();
    dispatch::run(cli(&dir, &["list"]), &mut prompt, &mut clipboard).unwrap();
    assert_eq!(prompt.output, ["No entries found."]);
}

#[test]
fn keys_named_like_commands_are_copied() {
    let dir = TempDir::new().unwrap();
    let mut clipboard = MemoryClipboard::default();

    for key in ["ls", "rm", "help", "-dash"] {
        let text = format!("text for {key}");
        let mut prompt = Scripted::new([text.as_str(), key, ""]);
        dispatch::run(cli(&dir, &["add"]), &mut prompt, &mut clipboard).unwrap();
        assert_eq!(prompt.remaining(), 0);
    }

    for key in ["ls", "rm", "help", "-dash"] {
        let mut prompt = Scripted::default();
        dispatch::run(cli(&dir, &[key]), &mut prompt, &mut clipboard).unwrap();
        assert_eq!(clipboard.contents, Some(format!("text for {key}")));
    }
}

#[test]
fn delete_without_key_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let mut prompt = Scripted::default();
    let mut clipboard = MemoryClipboard::default();

    dispatch::run(cli(&dir, &["delete"]), &mut prompt, &mut clipboard).unwrap();
    assert_eq!(prompt.output, ["Please specify the key to delete."]);
}

#[test]
fn corrupt_file_is_kept_aside() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clyper_data.json");
    fs::write(&path, "garbage").unwrap();

    let mut prompt = Scripted::default();
    let mut clipboard = MemoryClipboard::default();
    dispatch::run(cli(&dir, &["list"]), &mut prompt, &mut clipboard).unwrap();

    assert_eq!(prompt.output, ["No entries found."]);
    let backup = dir.path().join("clyper_data.json.corrupt");
    assert_eq!(fs::read_to_string(backup).unwrap(), "garbage");
}

#[test]
fn failed_backup_still_runs_the_command() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("clyper_data.json"), "garbage").unwrap();
    fs::create_dir(dir.path().join("clyper_data.json.corrupt")).unwrap();

    let mut prompt = Scripted::default();
    let mut clipboard = MemoryClipboard::default();
    dispatch::run(cli(&dir, &["list"]), &mut prompt, &mut clipboard).unwrap();

    assert_eq!(prompt.output, ["No entries found."]);
}
