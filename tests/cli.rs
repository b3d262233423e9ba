// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::read_to_string;
use std::fs::write;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::process::Output;
use std::process::Stdio;

use tempfile::TempDir;
use tempfile::tempdir;

fn run(dir: &Path, args: &[&str]) -> Output {
    run_with_input(dir, args, "")
}

fn run_with_input(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wordcards"))
        .current_dir(dir)
        .args(["--data", "profile.json"])
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn workspace() -> TempDir {
    let dir = tempdir().unwrap();
    write(
        dir.path().join("words.txt"),
        "dog;pies\n\ncat;kot;Easy\nnot a card\n",
    )
    .unwrap();
    dir
}

#[test]
fn test_default_sets() {
    let dir = workspace();
    let output = run(dir.path(), &["sets"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("* Basics (0 cards)"));
    assert!(text.contains("  Travel (0 cards)"));
    assert!(text.contains("  Business (0 cards)"));
}

#[test]
fn test_import_and_list() {
    let dir = workspace();
    let output = run(dir.path(), &["new-set", "Animals"]);
    assert!(output.status.success());
    let output = run(dir.path(), &["import", "words.txt", "--set", "Animals"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Imported 2 cards into 'Animals'."));

    let output = run(dir.path(), &["select", "Animals"]);
    assert!(output.status.success());
    let text = stdout(&run(dir.path(), &["cards"]));
    assert!(text.contains("1. dog → pies [Medium, +0 -0]"));
    assert!(text.contains("2. cat → kot [Easy, +0 -0]"));

    let profile = read_to_string(dir.path().join("profile.json")).unwrap();
    assert!(profile.contains("\"activeSetName\": \"Animals\""));
}

#[test]
fn test_duplicate_set_is_rejected() {
    let dir = workspace();
    let output = run(dir.path(), &["new-set", "Travel"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("a set named 'Travel' already exists."));
}

#[test]
fn test_empty_set_cannot_be_tested() {
    let dir = workspace();
    let output = run(dir.path(), &["test"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no cards in set 'Basics'."));
    let stats = stdout(&run(dir.path(), &["stats"]));
    assert!(stats.contains("Tests: 0"));
}

#[test]
fn test_quitting_a_test_keeps_the_start() {
    let dir = workspace();
    run(dir.path(), &["import", "words.txt"]);
    let output = run_with_input(dir.path(), &["test"], "q\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("[Test] 1/4"));

    let output = run(dir.path(), &["stats", "--format", "json"]);
    let stats: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(stats["totalTests"], 1);
    assert_eq!(stats["totalQuestions"], 0);
    assert_eq!(stats["cardCount"], 2);
    assert!(stats["lastTestDate"].is_string());
}

#[test]
fn test_skipping_through_a_test() {
    let dir = workspace();
    run(dir.path(), &["import", "words.txt"]);
    let output = run_with_input(dir.path(), &["test"], "s\ns\ns\ns\n");
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Test finished!"));
    assert!(text.contains("Correct: 0 / 0 (0.0%)"));
}

#[test]
fn test_learning_session() {
    let dir = workspace();
    run(dir.path(), &["import", "words.txt"]);
    let output = run_with_input(dir.path(), &["learn"], "r\nn\np\nq\n");
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("[Learning] 1/2 • Basics"));
    assert!(text.contains("[Learning] 2/2 • Basics"));
    assert!(text.contains("A: "));
}

#[test]
fn test_difficulty_override() {
    let dir = workspace();
    run(dir.path(), &["import", "words.txt"]);
    let output = run(dir.path(), &["difficulty", "1", "hard"]);
    assert!(output.status.success());
    let stats = stdout(&run(dir.path(), &["stats"]));
    assert!(stats.contains("Hard: 1"));
    let output = run(dir.path(), &["difficulty", "1", "impossible"]);
    assert!(!output.status.success());
}
