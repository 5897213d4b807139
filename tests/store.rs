use std::path::PathBuf;

use chrono::NaiveDate;
use runboard_rs::store::goals::GoalLog;
use runboard_rs::store::weight::WeightLog;

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("runboard-test-{}", uuid::Uuid::new_v4()))
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

#[test]
fn missing_goal_file_reads_as_empty() {
    let log = GoalLog::new(&scratch_dir());
    assert_eq!(log.read().expect("read"), Vec::<String>::new());
}

#[test]
fn goals_write_then_read_preserves_order() {
    let log = GoalLog::new(&scratch_dir());
    let goals = vec!["first".to_string(), "second".to_string(), "third".to_string()];

    log.write(&goals).expect("write");
    assert_eq!(log.read().expect("read"), goals);
}

#[test]
fn writing_an_empty_goal_list_clears_the_file() {
    let log = GoalLog::new(&scratch_dir());
    log.write(&["something".to_string()]).expect("write");
    log.write(&[]).expect("clear");
    assert_eq!(log.read().expect("read"), Vec::<String>::new());
}

#[test]
fn missing_weight_file_reads_as_empty() {
    let log = WeightLog::new(&scratch_dir());
    assert!(log.read_all().expect("read").is_empty());
}

#[test]
fn weight_appends_accumulate_in_order() {
    let log = WeightLog::new(&scratch_dir());
    log.append(date("2026-03-01"), 74.5).expect("append");
    log.append(date("2026-03-08"), 74.1).expect("append");

    let entries = log.read_all().expect("read");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, date("2026-03-01"));
    assert_eq!(entries[0].weight_kg, 74.5);
    assert_eq!(entries[1].date, date("2026-03-08"));
}

#[test]
fn malformed_weight_lines_are_skipped() {
    let dir = scratch_dir();
    let log = WeightLog::new(&dir);
    log.append(date("2026-03-01"), 74.5).expect("append");

    // Corrupt the file by hand: a bad date, a bad number, and a bare word.
    let path = dir.join("weight_log.csv");
    let mut contents = std::fs::read_to_string(&path).expect("read file");
    contents.push_str("not-a-date,70.0\n2026-03-02,heavy\njunk\n2026-03-03,73.9\n");
    std::fs::write(&path, contents).expect("write file");

    let entries = log.read_all().expect("read");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].date, date("2026-03-03"));
    assert_eq!(entries[1].weight_kg, 73.9);
}
