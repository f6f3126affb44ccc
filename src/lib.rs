mod calculator;
mod config;
mod error;
mod history;
mod memento;
mod operations;
mod record;
mod validate;

pub use calculator::Calculator;
pub use config::Config;
pub use error::{CalcError, OperationError, StorageError, ValidationError};
pub use history::{AutoSaveObserver, History, LoggingObserver, Observer, Table};
pub use memento::{Caretaker, Memento};
pub use operations::Op;
pub use record::Calculation;
pub use validate::{as_number, two_numbers};
