use reckon::{Calculator, Config};

fn quiet_config() -> Config {
    Config {
        auto_save: false,
        ..Config::default()
    }
}

#[test]
fn undo_restores_pre_action_sequence() {
    let mut calc = Calculator::new(quiet_config());
    calc.do_calculation("add", "1", "2").unwrap();
    let before = calc.history().list();

    calc.do_calculation("multiply", "3", "4").unwrap();
    assert_eq!(calc.history().len(), 2);

    assert!(calc.undo());
    assert_eq!(calc.history().list(), before);
}

#[test]
fn append_a_then_b_undo_redo() {
    let mut calc = Calculator::new(quiet_config());
    calc.do_calculation("add", "1", "0").unwrap();
    calc.do_calculation("add", "2", "0").unwrap();

    assert!(calc.undo());
    let listed = calc.history().list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].result, 1.0);

    assert!(calc.redo());
    let listed = calc.history().list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[1].result, 2.0);
}

#[test]
fn undo_past_the_first_action_reaches_empty() {
    let mut calc = Calculator::new(quiet_config());
    calc.do_calculation("add", "1", "0").unwrap();
    calc.do_calculation("add", "2", "0").unwrap();

    assert!(calc.undo());
    assert!(calc.undo());
    assert!(calc.history().is_empty());
    assert!(!calc.undo());
}

#[test]
fn new_calculation_invalidates_redo_timeline() {
    let mut calc = Calculator::new(quiet_config());
    calc.do_calculation("add", "1", "0").unwrap();
    calc.do_calculation("add", "2", "0").unwrap();
    assert!(calc.undo());

    // A fresh action forks the timeline; the old redo state is gone.
    calc.do_calculation("subtract", "9", "4").unwrap();
    assert!(!calc.redo());
    let listed = calc.history().list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[1].operation, "subtract");
}

#[test]
fn clearing_history_can_be_undone_and_redone() {
    let mut calc = Calculator::new(quiet_config());
    calc.do_calculation("add", "1", "0").unwrap();
    calc.do_calculation("add", "2", "0").unwrap();

    calc.clear_history();
    assert!(calc.history().is_empty());

    assert!(calc.undo());
    assert_eq!(calc.history().len(), 2);

    assert!(calc.redo());
    assert!(calc.history().is_empty());
}

#[test]
fn interleaved_undo_redo_keeps_states_exact() {
    let mut calc = Calculator::new(quiet_config());
    calc.do_calculation("add", "1", "0").unwrap();
    let one = calc.history().list();
    calc.do_calculation("add", "2", "0").unwrap();
    let two = calc.history().list();
    calc.do_calculation("add", "3", "0").unwrap();
    let three = calc.history().list();

    assert!(calc.undo());
    assert_eq!(calc.history().list(), two);
    assert!(calc.undo());
    assert_eq!(calc.history().list(), one);
    assert!(calc.redo());
    assert_eq!(calc.history().list(), two);
    assert!(calc.redo());
    assert_eq!(calc.history().list(), three);
    assert!(!calc.redo());
}
