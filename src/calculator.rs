use crate::config::Config;
use crate::error::CalcError;
use crate::history::{AutoSaveObserver, History, LoggingObserver};
use crate::memento::Caretaker;
use crate::operations::Op;
use crate::record::Calculation;
use crate::validate::two_numbers;

/// Facade combining validation, computation, snapshotting, and history
/// mutation into one logical action per calculation.
///
/// This is the only component that couples "take a snapshot" with "mutate
/// history": the snapshot is taken strictly before the append, so undo
/// restores the sequence as it was immediately before the action.
pub struct Calculator {
    config: Config,
    history: History,
    caretaker: Caretaker,
}

impl Calculator {
    pub fn new(config: Config) -> Self {
        let mut history = History::new(&config);
        history.register(Box::new(LoggingObserver));
        history.register(Box::new(AutoSaveObserver));
        Calculator {
            history,
            caretaker: Caretaker::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Run one calculation end to end: validate operands, resolve and apply
    /// the operation, round to the configured precision, snapshot, append.
    /// Validation and operation errors surface before any mutation.
    pub fn do_calculation(&mut self, name: &str, a: &str, b: &str) -> Result<f64, CalcError> {
        let (a, b) = two_numbers(a, b, &self.config)?;
        let op = Op::parse(name)?;
        let result = round_to(op.compute(a, b)?, self.config.precision);

        // snapshot before mutating, then append (which notifies observers)
        self.caretaker.snapshot(&self.history.list());
        self.history.append(Calculation::new(op.name(), a, b, result));
        Ok(result)
    }

    /// Step history back one action. Returns false when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> bool {
        let (state, ok) = self.caretaker.undo(self.history.list());
        if ok {
            self.history.restore(state);
        }
        ok
    }

    /// Step history forward one undone action. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let (state, ok) = self.caretaker.redo(self.history.list());
        if ok {
            self.history.restore(state);
        }
        ok
    }

    /// Clear the history as an undoable action.
    pub fn clear_history(&mut self) {
        self.caretaker.snapshot(&self.history.list());
        self.history.clear();
    }

    pub fn save_history(&self) -> Result<(), CalcError> {
        self.history.save(None)?;
        Ok(())
    }

    pub fn load_history(&mut self) -> Result<(), CalcError> {
        self.history.load(None)?;
        Ok(())
    }
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}
