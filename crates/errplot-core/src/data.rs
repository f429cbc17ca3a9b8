// File: crates/errplot-core/src/data.rs
// Summary: Dataset model and line-oriented reader for (n, err) pairs.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::DataError;

/// Parallel sequences of the series parameter `n` and its approximation
/// error, preserved in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub n_values: Vec<i64>,
    pub err_values: Vec<f64>,
}

impl Dataset {
    pub fn from_pairs(pairs: &[(i64, f64)]) -> Self {
        Self {
            n_values: pairs.iter().map(|&(n, _)| n).collect(),
            err_values: pairs.iter().map(|&(_, e)| e).collect(),
        }
    }

    pub fn len(&self) -> usize { self.n_values.len() }

    pub fn is_empty(&self) -> bool { self.n_values.is_empty() }

    /// Largest error value, or None for an empty dataset.
    pub fn max_err(&self) -> Option<f64> {
        self.err_values.iter().copied().reduce(f64::max)
    }

    /// Smallest error value, or None for an empty dataset.
    pub fn min_err(&self) -> Option<f64> {
        self.err_values.iter().copied().reduce(f64::min)
    }

    /// Index of the smallest error; the first occurrence wins on ties.
    pub fn min_err_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &e) in self.err_values.iter().enumerate() {
            let better = match best {
                None => true,
                Some(b) => e < self.err_values[b],
            };
            if better {
                best = Some(i);
            }
        }
        best
    }
}

/// Read `(n, err)` pairs from a whitespace-delimited text file.
///
/// Lines are trimmed; empty lines and lines starting with `#` are skipped.
/// The first token parses as an integer, the second as a float accepting a
/// decimal comma ("1,23" parses as 1.23); extra tokens are ignored. Any
/// malformed line aborts with a `Parse` error naming the file and 1-based
/// line number.
pub fn read_data(path: impl AsRef<Path>) -> Result<Dataset, DataError> {
    let path = path.as_ref();
    let io_err = |source| DataError::Io { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(io_err)?;

    let mut data = Dataset::default();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(io_err)?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let lineno = idx + 1;
        let parse_err = |reason: String| DataError::Parse {
            path: path.to_path_buf(),
            line: lineno,
            reason,
        };

        let mut tokens = line.split_whitespace();
        let (Some(n_tok), Some(err_tok)) = (tokens.next(), tokens.next()) else {
            return Err(parse_err("expected two columns `<n> <err>`".into()));
        };
        let n = n_tok
            .parse::<i64>()
            .map_err(|_| parse_err(format!("invalid integer `{n_tok}`")))?;
        let err = err_tok
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| parse_err(format!("invalid number `{err_tok}`")))?;

        data.n_values.push(n);
        data.err_values.push(err);
    }
    Ok(data)
}
