use crate::error::OperationError;

/// The arithmetic operation set, dispatched by name.
///
/// Each variant is a pure function of its operands; there is no shared state,
/// so a plain enum matched in `compute` replaces any registry of operation
/// objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Root,
    Modulus,
    IntDivide,
    Percent,
    AbsDiff,
}

impl Op {
    /// Resolve an operation by name (trimmed, case-insensitive).
    pub fn parse(name: &str) -> Result<Self, OperationError> {
        match name.trim().to_lowercase().as_str() {
            "add" => Ok(Op::Add),
            "subtract" => Ok(Op::Subtract),
            "multiply" => Ok(Op::Multiply),
            "divide" => Ok(Op::Divide),
            "power" => Ok(Op::Power),
            "root" => Ok(Op::Root),
            "modulus" => Ok(Op::Modulus),
            "int_divide" => Ok(Op::IntDivide),
            "percent" => Ok(Op::Percent),
            "abs_diff" => Ok(Op::AbsDiff),
            _ => Err(OperationError::Unknown(name.to_string())),
        }
    }

    /// The canonical name this operation is listed and persisted under.
    pub fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Subtract => "subtract",
            Op::Multiply => "multiply",
            Op::Divide => "divide",
            Op::Power => "power",
            Op::Root => "root",
            Op::Modulus => "modulus",
            Op::IntDivide => "int_divide",
            Op::Percent => "percent",
            Op::AbsDiff => "abs_diff",
        }
    }

    /// All operations, in the order the REPL lists them.
    pub const ALL: [Op; 10] = [
        Op::Add,
        Op::Subtract,
        Op::Multiply,
        Op::Divide,
        Op::Power,
        Op::Root,
        Op::Modulus,
        Op::IntDivide,
        Op::Percent,
        Op::AbsDiff,
    ];

    pub fn compute(self, a: f64, b: f64) -> Result<f64, OperationError> {
        match self {
            Op::Add => Ok(a + b),
            Op::Subtract => Ok(a - b),
            Op::Multiply => Ok(a * b),
            Op::Divide => {
                if b == 0.0 {
                    return Err(OperationError::DivisionByZero);
                }
                Ok(a / b)
            }
            Op::Power => Ok(a.powf(b)),
            Op::Root => nth_root(a, b),
            Op::Modulus => {
                if b == 0.0 {
                    return Err(OperationError::ModulusByZero);
                }
                Ok(a.rem_euclid(b))
            }
            Op::IntDivide => {
                if b == 0.0 {
                    return Err(OperationError::DivisionByZero);
                }
                Ok((a / b).floor())
            }
            Op::Percent => {
                if b == 0.0 {
                    return Err(OperationError::PercentByZero);
                }
                Ok((a / b) * 100.0)
            }
            Op::AbsDiff => Ok((a - b).abs()),
        }
    }
}

/// Sign-preserving nth root: `root(-8, 3)` is `-2`, while an even root of a
/// negative base is undefined.
fn nth_root(a: f64, b: f64) -> Result<f64, OperationError> {
    if b == 0.0 {
        return Err(OperationError::ZeroRoot);
    }
    if a < 0.0 && (b.trunc() as i64) % 2 == 0 {
        return Err(OperationError::EvenRootOfNegative);
    }
    let magnitude = a.abs().powf(1.0 / b);
    Ok(if a < 0.0 { -magnitude } else { magnitude })
}
