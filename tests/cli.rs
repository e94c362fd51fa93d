// End-to-end tests driving the compiled binary with piped stdin.
// A one-word list makes the target known, so every run is deterministic.

use assert_cmd::Command;
use chrono::Utc;
use std::fs;
use std::path::Path;
use word_guru::scores::{ScoreRecord, ScoreStore};

fn game(dir: &Path) -> Command {
    let words = dir.join("words.txt");
    fs::write(&words, "# test list\nCRANE\n").unwrap();

    let mut cmd = Command::cargo_bin("word_guru").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("WORD_GURU_PLAYER")
        .env_remove("WORD_GURU_SCORES")
        .arg("--words")
        .arg(&words)
        .arg("--scores-path")
        .arg(dir.join("scores.json"))
        .arg("--player")
        .arg("tester");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn winning_game_records_score() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(game(dir.path()).write_stdin("slate\ncrane\n"));

    assert!(out.contains("Congratulations! You guessed 'CRANE' in 2 attempts!"));
    assert!(out.contains("Score saved for player 'tester'"));

    let records = ScoreStore::new(dir.path().join("scores.json")).load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].player, "tester");
    assert_eq!(records[0].word, "CRANE");
    assert_eq!(records[0].attempts, 2);
    assert!(records[0].won);
    assert!(records[0].date.ends_with('Z'));
}

#[test]
fn guess_shows_letter_summary() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(game(dir.path()).write_stdin("trace\ncrane\n"));
    assert!(out.contains("T✗ R✓ A✓ C~ E✓"));
}

#[test]
fn corrupt_score_file_warning_names_file() {
    let dir = tempfile::tempdir().unwrap();
    let scores = dir.path().join("scores.json");
    fs::write(&scores, "[{\"player\": 1}]").unwrap();

    let out = stdout_of(game(dir.path()).write_stdin("crane\n"));
    assert!(out.contains("Congratulations"));
    assert!(out.contains("Could not save score"));
    assert!(out.contains(&format!("'{}' is repaired or removed", scores.display())));
    assert_eq!(fs::read_to_string(&scores).unwrap(), "[{\"player\": 1}]");
}

#[test]
fn losing_game_reveals_word() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(
        game(dir.path())
            .args(["--max-attempts", "2"])
            .write_stdin("slate\nplane\n"),
    );

    assert!(out.contains("Game over! The word was 'CRANE'"));
    let records = ScoreStore::new(dir.path().join("scores.json")).load().unwrap();
    assert!(!records[0].won);
    assert_eq!(records[0].attempts, 2);
}

#[test]
fn invalid_guess_can_be_retried() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(game(dir.path()).write_stdin("cat\ncrane\n"));

    assert!(out.contains("Invalid guess: guess must be 5 letters long, got 3"));
    assert!(out.contains("in 1 attempts"));
}

#[test]
fn end_of_input_exits_cleanly_without_saving() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(game(dir.path()).write_stdin("slate\n"));

    assert!(out.contains("Thanks for playing"));
    assert!(!dir.path().join("scores.json").exists());
}

#[test]
fn no_save_skips_score_file() {
    let dir = tempfile::tempdir().unwrap();
    stdout_of(game(dir.path()).arg("--no-save").write_stdin("crane\n"));
    assert!(!dir.path().join("scores.json").exists());
}

#[test]
fn missing_word_file_exits_with_1() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("word_guru")
        .unwrap()
        .env("NO_COLOR", "1")
        .arg("--words")
        .arg(dir.path().join("missing.txt"))
        .arg("--no-save")
        .write_stdin("")
        .assert()
        .code(1);
}

#[test]
fn zero_max_attempts_exits_with_1() {
    let dir = tempfile::tempdir().unwrap();
    game(dir.path())
        .args(["--max-attempts", "0"])
        .write_stdin("")
        .assert()
        .code(1);
}

#[test]
fn stats_without_scores() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(game(dir.path()).arg("--stats"));
    assert!(out.contains("No scores found yet"));
}

#[test]
fn stats_ranks_wins_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("scores.json"));
    let now = Utc::now();
    for (player, attempts, won) in [("lost6", 6, false), ("won5", 5, true), ("won2", 2, true)] {
        store
            .save(&ScoreRecord::new(player, "CRANE", attempts, won, now))
            .unwrap();
    }

    let out = stdout_of(game(dir.path()).arg("--stats"));
    let won2 = out.find("won2").unwrap();
    let won5 = out.find("won5").unwrap();
    let lost6 = out.find("lost6").unwrap();
    assert!(won2 < won5 && won5 < lost6);
}

#[test]
fn daily_already_completed_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    ScoreStore::new(dir.path().join("scores.json"))
        .save(&ScoreRecord::new("tester", "CRANE", 3, true, Utc::now()))
        .unwrap();

    let out = stdout_of(game(dir.path()).arg("--daily").write_stdin("crane\n"));
    assert!(out.contains("Daily Word Already Completed"));
    assert!(!out.contains("Congratulations"));
}

#[test]
fn daily_game_with_single_word() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(game(dir.path()).arg("--daily").write_stdin("crane\n"));
    assert!(out.contains("Daily word for"));
    assert!(out.contains("Next daily word in:"));
}
