use std::fs;

use reckon::{Calculation, Calculator, Config, History, StorageError};
use tempfile::TempDir;

fn temp_config(dir: &TempDir, auto_save: bool) -> Config {
    let history_dir = dir.path().join("history");
    Config {
        history_file: history_dir.join("history.csv"),
        history_dir,
        auto_save,
        ..Config::default()
    }
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let config = temp_config(&dir, false);

    let mut history = History::new(&config);
    history.append(Calculation::new("add", 2.0, 3.0, 5.0));
    history.append(Calculation::new("divide", 1.0, 3.0, 0.333333));
    history.save(None).unwrap();

    let mut fresh = History::new(&config);
    fresh.load(None).unwrap();
    assert_eq!(fresh.list(), history.list());
}

#[test]
fn save_creates_the_history_directory() {
    let dir = TempDir::new().unwrap();
    let config = temp_config(&dir, false);
    assert!(!config.history_dir.exists());

    let mut history = History::new(&config);
    history.append(Calculation::new("add", 1.0, 1.0, 2.0));
    history.save(None).unwrap();
    assert!(config.history_file.exists());
}

#[test]
fn load_missing_file_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let config = temp_config(&dir, false);

    let mut history = History::new(&config);
    history.load(None).unwrap();
    assert!(history.is_empty());
}

#[test]
fn load_missing_file_keeps_existing_records() {
    let dir = TempDir::new().unwrap();
    let config = temp_config(&dir, false);

    let mut history = History::new(&config);
    history.append(Calculation::new("add", 1.0, 1.0, 2.0));
    history.load(None).unwrap();
    assert_eq!(history.len(), 1);
}

#[test]
fn load_replaces_previous_contents() {
    let dir = TempDir::new().unwrap();
    let config = temp_config(&dir, false);

    let mut history = History::new(&config);
    history.append(Calculation::new("add", 1.0, 1.0, 2.0));
    history.save(None).unwrap();

    let mut other = History::new(&config);
    other.append(Calculation::new("multiply", 2.0, 2.0, 4.0));
    other.append(Calculation::new("multiply", 3.0, 3.0, 9.0));
    other.load(None).unwrap();

    let listed = other.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].operation, "add");
}

#[test]
fn malformed_file_fails_and_leaves_history_untouched() {
    let dir = TempDir::new().unwrap();
    let config = temp_config(&dir, false);
    fs::create_dir_all(&config.history_dir).unwrap();
    fs::write(
        &config.history_file,
        "operation,a,b,result,timestamp\nadd,1,1,2,t1\nadd,not-a-number,1,2,t2\n",
    )
    .unwrap();

    let mut history = History::new(&config);
    history.append(Calculation::new("subtract", 5.0, 3.0, 2.0));

    let err = history.load(None).unwrap_err();
    assert!(matches!(err, StorageError::Parse { line: 3, .. }));

    // A mid-file failure must not partially clear the sequence.
    let listed = history.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].operation, "subtract");
}

#[test]
fn timestamps_survive_the_round_trip() {
    let dir = TempDir::new().unwrap();
    let config = temp_config(&dir, false);

    let mut history = History::new(&config);
    history.append(Calculation::new("add", 2.0, 3.0, 5.0));
    let original = history.list()[0].timestamp.clone();
    history.save(None).unwrap();

    let mut fresh = History::new(&config);
    fresh.load(None).unwrap();
    assert_eq!(fresh.list()[0].timestamp, original);
}

#[test]
fn auto_save_persists_every_append() {
    let dir = TempDir::new().unwrap();
    let config = temp_config(&dir, true);

    let mut calc = Calculator::new(config.clone());
    calc.do_calculation("add", "2", "3").unwrap();
    assert!(config.history_file.exists());

    let mut fresh = Calculator::new(config);
    fresh.load_history().unwrap();
    let listed = fresh.history().list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].result, 5.0);
}

#[test]
fn auto_save_disabled_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = temp_config(&dir, false);

    let mut calc = Calculator::new(config.clone());
    calc.do_calculation("add", "2", "3").unwrap();
    assert!(!config.history_file.exists());
}
