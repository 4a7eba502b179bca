use std::io;
use std::path::{Path, PathBuf};

use super::error::LoadError;
use super::filter::{retained_lines, RetainedLine};
use super::model::{NumericMatrix, TrajectoryTable};

/// Directory, next to the executable, that holds trajectory logs.
pub const DATA_DIR: &str = "data";

/// Log file the viewer opens on start-up.
pub const DATA_FILE: &str = "levelthree.txt";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Built-in input location: `<exe dir>/data/levelthree.txt`.
pub fn default_data_path() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory")
    })?;
    Ok(dir.join(DATA_DIR).join(DATA_FILE))
}

/// Load a trajectory log from disk.
///
/// The whole file is read up front; see [`parse_str`] for the format.
pub fn load_file(path: &Path) -> Result<TrajectoryTable, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_str(&text)?;
    log::info!(
        "Loaded {} trajectory samples from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Parse an in-memory trajectory log.
///
/// Layout:
/// ```text
/// t x y z v a                  ← header, always skipped
/// 0.000 -1.000 1.000 -3.000 …  ← kept: first token is a number
/// notes: spring attached       ← dropped silently
///                              ← dropped silently
/// last time above 1 m/s was …  ← dropped silently
/// ```
/// Kept rows must all have the same width (at least four columns); only
/// `t x y z` are returned.
pub fn parse_str(text: &str) -> Result<TrajectoryTable, LoadError> {
    let retained = retained_lines(text);
    parse_matrix(&retained)?.into_trajectory()
}

// ---------------------------------------------------------------------------
// Strict matrix parse
// ---------------------------------------------------------------------------

/// Parse retained lines into a uniform-width matrix.
///
/// Every line must yield the same number of numbers as the first one. A
/// `#` starts a comment that runs to the end of the line. No lines gives an
/// empty matrix.
pub fn parse_matrix(lines: &[RetainedLine]) -> Result<NumericMatrix, LoadError> {
    let mut columns: Option<usize> = None;
    let mut values = Vec::new();

    for retained in lines {
        let row = parse_row(retained)?;
        match columns {
            None => columns = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(LoadError::RaggedRow {
                    line: retained.line,
                    expected,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }
        values.extend(row);
    }

    Ok(match columns {
        Some(columns) => NumericMatrix::from_row_major(columns, values),
        None => NumericMatrix::empty(),
    })
}

fn parse_row(retained: &RetainedLine) -> Result<Vec<f64>, LoadError> {
    let content = match retained.text.split_once('#') {
        Some((before, _comment)) => before,
        None => retained.text.as_str(),
    };

    content
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                line: retained.line,
                token: tok.to_string(),
            })
        })
        .collect()
}
