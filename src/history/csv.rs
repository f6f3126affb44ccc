use std::io::{self, Write};
use std::path::Path;

use crate::error::StorageError;
use crate::record::Calculation;

/// Column order of the persisted history format. The header row and every
/// data row follow this order exactly.
pub const COLUMNS: [&str; 5] = ["operation", "a", "b", "result", "timestamp"];

/// Columnar view of a history sequence, suitable for serialization. An empty
/// history still carries the full column set with zero rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: [&'static str; 5],
    pub rows: Vec<[String; 5]>,
}

impl Table {
    pub fn from_records(items: &[Calculation]) -> Self {
        Table {
            columns: COLUMNS,
            rows: items.iter().map(row).collect(),
        }
    }
}

fn row(calc: &Calculation) -> [String; 5] {
    [
        calc.operation.clone(),
        calc.a.to_string(),
        calc.b.to_string(),
        calc.result.to_string(),
        calc.timestamp.clone(),
    ]
}

pub(super) fn write_table<W: Write>(writer: &mut W, items: &[Calculation]) -> io::Result<()> {
    writeln!(writer, "{}", COLUMNS.join(","))?;
    for calc in items {
        writeln!(
            writer,
            "{},{},{},{},{}",
            calc.operation, calc.a, calc.b, calc.result, calc.timestamp
        )?;
    }
    Ok(())
}

/// Parse a whole history file. Returns all rows or the first error; callers
/// replace their in-memory state only on full success.
pub(super) fn parse_table(contents: &str, path: &Path) -> Result<Vec<Calculation>, StorageError> {
    let expected_header = COLUMNS.join(",");
    let mut lines = contents.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header.trim_end() == expected_header => {}
        Some((_, header)) => {
            return Err(StorageError::Parse {
                path: path.to_path_buf(),
                line: 1,
                message: format!("expected header {:?}, found {:?}", expected_header, header),
            })
        }
        None => {
            return Err(StorageError::Parse {
                path: path.to_path_buf(),
                line: 1,
                message: String::from("missing header row"),
            })
        }
    }

    let mut items = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        items.push(parse_row(line, index + 1, path)?);
    }
    Ok(items)
}

fn parse_row(line: &str, line_number: usize, path: &Path) -> Result<Calculation, StorageError> {
    let malformed = |message: String| StorageError::Parse {
        path: path.to_path_buf(),
        line: line_number,
        message,
    };

    let fields: Vec<&str> = line.splitn(COLUMNS.len(), ',').collect();
    if fields.len() != COLUMNS.len() {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            COLUMNS.len(),
            fields.len()
        )));
    }

    let number = |field: &str, name: &str| {
        field
            .trim()
            .parse::<f64>()
            .map_err(|err| malformed(format!("bad {} value {:?}: {}", name, field, err)))
    };

    Ok(Calculation::from_parts(
        fields[0],
        number(fields[1], "a")?,
        number(fields[2], "b")?,
        number(fields[3], "result")?,
        fields[4],
    ))
}
