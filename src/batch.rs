//! # Batch
//!
//! The IO plumbing arround the numerical core: read `(x, dof)` pairs one
//! per line, run the [solver](crate::solver) once per pair and write one
//! formatted result line per pair, in input order.
//!
//! Everything here is single threaded and synchronous: each record is
//! processed to completion (including the whole refinement loop) before the
//! next one begins, and the output is written once per record in strict
//! input order.
//!
//! ### Input format
//!
//! One record per line, 2 whitespace separated tokens: `x` (float) and
//! `dof` (positive integer). Blank lines and lines starting with `#` are
//! filtered out. A line that cannot be parsed into a valid pair is a
//! malformed record: it is skipped (and counted), never fatal to the batch.
//!
//! ### Output format
//!
//! One line per record: `x = {:.4}   dof = {}   p = {:.5}`.

use std::io::{BufRead, Write};

use crate::{
    errors::BatchError,
    solver::{Convergence, solve},
};

/// One input pair together with its computed integral. Immutable once
/// written to the output.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRecord {
    /// The upper bound of integration (`x`).
    pub upper_bound: f64,
    /// The degrees of freedom of the t distribution.
    pub degrees_of_freedom: u64,
    /// The converged integral of the t density from `0` to `x`.
    pub p: f64,
}

/// The outcome of classifying one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// A valid `(x, dof)` pair.
    Record {
        /// The upper bound of integration (`x`).
        upper_bound: f64,
        /// The degrees of freedom.
        degrees_of_freedom: u64,
    },
    /// A blank line or a `#` comment. Not a record at all.
    Filtered,
    /// A line that could not be parsed into a valid `(x, dof)` pair.
    /// Skipped, not fatal to the batch.
    Malformed,
}

/// How many records a [process_batch] run computed and how many malformed
/// lines it skipped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchSummary {
    /// The number of records computed and written.
    pub computed: usize,
    /// The number of malformed lines that were skipped.
    pub skipped: usize,
}

/// Classifies one input line.
///
/// The line is trimmed first. Blank lines and lines starting with `#` are
/// [ParsedLine::Filtered]. Otherwise the line must split into at least 2
/// whitespace separated tokens: a finite float `x` and an integer
/// `dof >= 1`. Anything else is [ParsedLine::Malformed].
pub fn parse_record(line: &str) -> ParsedLine {
    let trimmed: &str = line.trim();

    if trimmed.is_empty() || trimmed.starts_with('#') {
        return ParsedLine::Filtered;
    }

    let mut tokens = trimmed.split_whitespace();

    let upper_bound: f64 = match tokens.next().map(str::parse::<f64>) {
        Some(Ok(x)) if x.is_finite() => x,
        _ => return ParsedLine::Malformed,
    };

    let degrees_of_freedom: u64 = match tokens.next().map(str::parse::<u64>) {
        Some(Ok(dof)) if 1 <= dof => dof,
        _ => return ParsedLine::Malformed,
    };

    return ParsedLine::Record {
        upper_bound,
        degrees_of_freedom,
    };
}

/// Formats one computed record as a single output line (with the trailing
/// newline): `x` to 4 decimal places, `dof` as an integer, `p` to 5 decimal
/// places.
pub fn format_record(record: &BatchRecord) -> String {
    return format!(
        "x = {:.4}   dof = {}   p = {:.5}\n",
        record.upper_bound, record.degrees_of_freedom, record.p
    );
}

/// Reads `(x, dof)` pairs from `input`, computes the converged integral for
/// each one (with the deafult solver parameters) and writes one formatted
/// line per record to `output`, in input order.
///
/// Malformed lines are skipped and counted in the returned [BatchSummary];
/// blank lines and `#` comments are silently filtered.
///
/// ## Errors
///
///  - [BatchError::Io] if reading or writing fails.
///  - [BatchError::Quadrature] if the computation of a record fails
///     (including a refinement that hits the ceiling). The batch is aborted
///     at that record and no partial result is emitted for it.
pub fn process_batch<R: BufRead, W: Write>(
    input: R,
    mut output: W,
) -> Result<BatchSummary, BatchError> {
    let mut summary: BatchSummary = BatchSummary::default();

    for line in input.lines() {
        let line: String = line?;

        let (upper_bound, degrees_of_freedom): (f64, u64) = match parse_record(&line) {
            ParsedLine::Record {
                upper_bound,
                degrees_of_freedom,
            } => (upper_bound, degrees_of_freedom),
            ParsedLine::Filtered => continue,
            ParsedLine::Malformed => {
                summary.skipped = summary.skipped + 1;
                continue;
            }
        };

        let result: Convergence = solve()
            .degrees_of_freedom(degrees_of_freedom)
            .upper_bound(upper_bound)
            .call()?;

        let record: BatchRecord = BatchRecord {
            upper_bound,
            degrees_of_freedom,
            p: result.estimate,
        };

        output.write_all(format_record(&record).as_bytes())?;
        summary.computed = summary.computed + 1;
    }

    return Ok(summary);
}
