use log::info;

use crate::error::CalcError;
use crate::record::Calculation;

use super::store::History;

/// A listener notified after every successful append to the history store.
///
/// Notification failures are isolated by the store: an observer returning an
/// error is logged and skipped, and never prevents later observers from
/// firing nor rolls back the append.
pub trait Observer {
    fn notify(&self, calc: &Calculation, history: &History) -> Result<(), CalcError>;
}

/// Logs one structured line per appended calculation. Never fails for valid
/// input.
pub struct LoggingObserver;

impl Observer for LoggingObserver {
    fn notify(&self, calc: &Calculation, _history: &History) -> Result<(), CalcError> {
        info!(
            "CALC: {}({}, {}) = {}",
            calc.operation, calc.a, calc.b, calc.result
        );
        Ok(())
    }
}

/// Saves the history after each append when the store's bound configuration
/// has auto-save enabled.
///
/// The flag is read from the notifying store at notification time, not
/// captured at registration, so stores with independent configurations
/// behave independently.
pub struct AutoSaveObserver;

impl Observer for AutoSaveObserver {
    fn notify(&self, _calc: &Calculation, history: &History) -> Result<(), CalcError> {
        if history.config().auto_save {
            history.save(None)?;
        }
        Ok(())
    }
}
