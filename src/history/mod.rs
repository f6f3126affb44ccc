mod csv;
mod observer;
mod store;

pub use csv::Table;
pub use observer::{AutoSaveObserver, LoggingObserver, Observer};
pub use store::History;
