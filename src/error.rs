use std::fmt;
use std::io;
use std::path::PathBuf;

/// Operand input that is malformed or out of range. Raised before any
/// mutation takes place.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NotANumber(String),
    TooLarge { value: f64, max: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotANumber(raw) => write!(f, "not a number: {}", raw),
            ValidationError::TooLarge { value, max } => {
                write!(f, "input {} exceeds max allowed {}", value, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// An unknown operation name, or a mathematically undefined computation.
/// Raised before history mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationError {
    Unknown(String),
    DivisionByZero,
    ModulusByZero,
    PercentByZero,
    ZeroRoot,
    EvenRootOfNegative,
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationError::Unknown(name) => write!(f, "unknown operation: {}", name),
            OperationError::DivisionByZero => write!(f, "division by zero"),
            OperationError::ModulusByZero => write!(f, "modulus by zero"),
            OperationError::PercentByZero => write!(f, "percent with divisor zero"),
            OperationError::ZeroRoot => write!(f, "zero root undefined"),
            OperationError::EvenRootOfNegative => {
                write!(f, "even root of negative number")
            }
        }
    }
}

impl std::error::Error for OperationError {}

/// Save or load failure, always wrapping its cause. A failed save leaves the
/// in-memory history untouched; a failed load leaves it exactly as it was
/// before the attempt.
#[derive(Debug)]
pub enum StorageError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, line: usize, message: String },
    UnsupportedEncoding(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io { path, source } => {
                write!(f, "history i/o failed for {}: {}", path.display(), source)
            }
            StorageError::Parse { path, line, message } => write!(
                f,
                "malformed history file {} (line {}): {}",
                path.display(),
                line,
                message
            ),
            StorageError::UnsupportedEncoding(encoding) => {
                write!(f, "unsupported encoding: {} (only utf-8 is supported)", encoding)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Umbrella error returned by the calculator facade.
#[derive(Debug)]
pub enum CalcError {
    Validation(ValidationError),
    Operation(OperationError),
    Storage(StorageError),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Validation(err) => err.fmt(f),
            CalcError::Operation(err) => err.fmt(f),
            CalcError::Storage(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcError::Validation(err) => Some(err),
            CalcError::Operation(err) => Some(err),
            CalcError::Storage(err) => Some(err),
        }
    }
}

impl From<ValidationError> for CalcError {
    fn from(err: ValidationError) -> Self {
        CalcError::Validation(err)
    }
}

impl From<OperationError> for CalcError {
    fn from(err: OperationError) -> Self {
        CalcError::Operation(err)
    }
}

impl From<StorageError> for CalcError {
    fn from(err: StorageError) -> Self {
        CalcError::Storage(err)
    }
}
