use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One completed calculation: the operation name, both operands, the rounded
/// result, and an RFC 3339 timestamp assigned at construction.
///
/// Records are immutable once created. The history store owns them after
/// append; snapshots and `list()` work on clones, which are full deep copies
/// since every field is a plain owned value.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Calculation {
    pub operation: String,
    pub a: f64,
    pub b: f64,
    pub result: f64,
    pub timestamp: String,
}

impl Calculation {
    pub fn new(operation: impl Into<String>, a: f64, b: f64, result: f64) -> Self {
        Calculation {
            operation: operation.into(),
            a,
            b,
            result,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Rebuild a record from persisted fields, keeping the stored timestamp
    /// as an opaque string.
    pub fn from_parts(
        operation: impl Into<String>,
        a: f64,
        b: f64,
        result: f64,
        timestamp: impl Into<String>,
    ) -> Self {
        Calculation {
            operation: operation.into(),
            a,
            b,
            result,
            timestamp: timestamp.into(),
        }
    }
}
