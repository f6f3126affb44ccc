use crate::config::Config;
use crate::error::ValidationError;

/// Parse one raw operand and check it against the configured magnitude bound.
pub fn as_number(raw: &str, config: &Config) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber(raw.to_string()))?;
    if !value.is_finite() {
        return Err(ValidationError::NotANumber(raw.to_string()));
    }
    if value.abs() > config.max_input_value {
        return Err(ValidationError::TooLarge {
            value,
            max: config.max_input_value,
        });
    }
    Ok(value)
}

/// Validate both operands, left first.
pub fn two_numbers(a: &str, b: &str, config: &Config) -> Result<(f64, f64), ValidationError> {
    Ok((as_number(a, config)?, as_number(b, config)?))
}
