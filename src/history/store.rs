use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{error, info, warn};

use crate::config::Config;
use crate::error::StorageError;
use crate::record::Calculation;

use super::csv::{self, Table};
use super::observer::Observer;

/// Ordered, size-bounded collection of calculations with observer
/// notification and CSV persistence.
///
/// The store knows nothing about undo/redo; it is a plain mutable sequence
/// with oldest-first eviction and a notification hook. Snapshot management
/// is layered on top by the calculator facade.
pub struct History {
    items: Vec<Calculation>,
    observers: Vec<Box<dyn Observer>>,
    config: Config,
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .field("max_size", &self.config.max_history_size)
            .finish()
    }
}

impl History {
    pub fn new(config: &Config) -> Self {
        History {
            items: Vec::new(),
            observers: Vec::new(),
            config: config.clone(),
        }
    }

    /// The configuration this store was built with. Observers read it at
    /// notification time.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append one record, evicting the oldest while over the configured
    /// bound, then notify observers in registration order. Eviction and
    /// append are atomic from the caller's view; a failing observer is
    /// logged and skipped.
    pub fn append(&mut self, calc: Calculation) {
        let appended = calc.clone();
        self.items.push(calc);
        while self.items.len() > self.config.max_history_size {
            self.items.remove(0);
        }
        info!(
            "appended {}({}, {}) = {} (history len {})",
            appended.operation,
            appended.a,
            appended.b,
            appended.result,
            self.items.len()
        );
        self.broadcast(&appended);
    }

    /// An independent copy of the current sequence. Mutating the returned
    /// vector never touches the store.
    pub fn list(&self) -> Vec<Calculation> {
        self.items.clone()
    }

    /// Empty the sequence. Does not snapshot; callers wanting undo-ability
    /// must snapshot first.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace the whole sequence with a previously-valid state, bypassing
    /// eviction and notification. Undo/redo restoration only.
    pub fn restore(&mut self, items: Vec<Calculation>) {
        self.items = items;
    }

    /// Register an observer at the end of the notification order. No
    /// de-duplication, no removal.
    pub fn register(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    fn broadcast(&self, calc: &Calculation) {
        for observer in &self.observers {
            if let Err(err) = observer.notify(calc, self) {
                error!("observer failed: {}", err);
            }
        }
    }

    /// Columnar view of the current sequence.
    pub fn to_tabular(&self) -> Table {
        Table::from_records(&self.items)
    }

    /// Write the current sequence to `path`, or to the configured history
    /// file when `path` is `None`. In-memory state is untouched on failure.
    pub fn save(&self, path: Option<&Path>) -> Result<(), StorageError> {
        self.check_encoding()?;
        let path = path.unwrap_or(&self.config.history_file);
        let io_err = |source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        csv::write_table(&mut writer, &self.items).map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        info!("history saved to {}", path.display());
        Ok(())
    }

    /// Replace the in-memory sequence with the contents of `path`, or of the
    /// configured history file when `path` is `None`.
    ///
    /// A missing file is not an error: a warning is logged and the sequence
    /// is left unchanged. A malformed or unreadable file fails with a
    /// `StorageError` and also leaves the sequence exactly as it was; the
    /// replacement happens only after the whole file has parsed.
    pub fn load(&mut self, path: Option<&Path>) -> Result<(), StorageError> {
        self.check_encoding()?;
        let path = path.unwrap_or(&self.config.history_file);
        if !path.exists() {
            warn!("history file not found: {}", path.display());
            return Ok(());
        }

        let contents = fs::read_to_string(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let items = csv::parse_table(&contents, path)?;

        self.items = items;
        info!("history loaded from {} ({} records)", path.display(), self.items.len());
        Ok(())
    }

    fn check_encoding(&self) -> Result<(), StorageError> {
        let encoding = self.config.encoding.to_lowercase();
        if encoding == "utf-8" || encoding == "utf8" {
            Ok(())
        } else {
            Err(StorageError::UnsupportedEncoding(self.config.encoding.clone()))
        }
    }
}
