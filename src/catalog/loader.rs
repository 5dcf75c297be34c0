// ABOUTME: CSV catalog file loading for fitness and diet reference data
// ABOUTME: Distinguishes absent files (data unavailable) from malformed files (hard error)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nova Coach

//! Catalog file loading
//!
//! A missing catalog file is an expected deployment state, not an error: the
//! loader returns `None` and the server starts with that catalog marked
//! unavailable. A file that exists but cannot be parsed is a hard
//! `InvalidFormat` error, because a silent partial load would serve wrong
//! plans without anyone noticing.
//!
//! The files are plain CSV with a header row. Fields may be quoted (meal and
//! exercise descriptions contain commas); quotes inside quoted fields are
//! escaped by doubling, and CRLF line endings are accepted.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::{DietPlan, FitnessPlan};

/// Load the fitness plan catalog from a CSV file
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
/// Returns `InvalidFormat` when the file exists but is not a well-formed
/// catalog (bad CSV, missing header columns, short rows).
pub fn load_fitness_catalog(path: &Path) -> AppResult<Option<Vec<FitnessPlan>>> {
    let Some(records) = read_records(path)? else {
        return Ok(None);
    };
    let table = Table::new(path, records)?;

    let goal = table.column("goal")?;
    let level = table.column("level")?;
    let duration = table.column("duration")?;
    let exercise_name = table.column("exercise_name")?;
    let exercise_explanation = table.column("exercise_explanation")?;
    let time_required = table.column("time_required")?;
    let sets = table.column("sets")?;

    let mut entries = Vec::with_capacity(table.row_count());
    for row in table.rows() {
        entries.push(FitnessPlan {
            goal: row.field(goal)?.to_owned(),
            level: row.field(level)?.to_owned(),
            duration: row.field(duration)?.to_owned(),
            exercise_name: row.field(exercise_name)?.to_owned(),
            exercise_explanation: row.field(exercise_explanation)?.to_owned(),
            time_required: row.field(time_required)?.to_owned(),
            sets: row.field(sets)?.to_owned(),
        });
    }

    info!(
        "Loaded {} fitness plan entries from {}",
        entries.len(),
        path.display()
    );
    Ok(Some(entries))
}

/// Load the diet plan catalog from a CSV file
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
/// Returns `InvalidFormat` when the file exists but is not a well-formed
/// catalog.
pub fn load_diet_catalog(path: &Path) -> AppResult<Option<Vec<DietPlan>>> {
    let Some(records) = read_records(path)? else {
        return Ok(None);
    };
    let table = Table::new(path, records)?;

    let goal = table.column("goal")?;
    let diet_preference = table.column("diet_preference")?;
    let level = table.column("level")?;
    let morning_meal = table.column("morning_meal")?;
    let afternoon_meal = table.column("afternoon_meal")?;
    let night_meal = table.column("night_meal")?;

    let mut entries = Vec::with_capacity(table.row_count());
    for row in table.rows() {
        entries.push(DietPlan {
            goal: row.field(goal)?.to_owned(),
            diet_preference: row.field(diet_preference)?.to_owned(),
            level: row.field(level)?.to_owned(),
            morning_meal: row.field(morning_meal)?.to_owned(),
            afternoon_meal: row.field(afternoon_meal)?.to_owned(),
            night_meal: row.field(night_meal)?.to_owned(),
        });
    }

    info!(
        "Loaded {} diet plan entries from {}",
        entries.len(),
        path.display()
    );
    Ok(Some(entries))
}

/// Read and parse a catalog file into raw records
///
/// `Ok(None)` when the file does not exist; all other I/O failures are
/// surfaced as internal errors.
fn read_records(path: &Path) -> AppResult<Option<Vec<Vec<String>>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(
                AppError::internal(format!("Failed to read catalog file {}", path.display()))
                    .with_source(e),
            )
        }
    };

    parse_records(&content).map(Some)
}

/// Parse CSV content into records of fields
///
/// Handles quoted fields, doubled-quote escapes, and CRLF. Blank lines are
/// skipped. Does not interpret the header; callers do that via [`Table`].
fn parse_records(content: &str) -> AppResult<Vec<Vec<String>>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' if field.is_empty() => in_quotes = true,
                ',' => record.push(std::mem::take(&mut field)),
                '\r' => {}
                '\n' => {
                    record.push(std::mem::take(&mut field));
                    // A lone empty field means the line was blank
                    if record.len() > 1 || !record[0].is_empty() {
                        records.push(std::mem::take(&mut record));
                    } else {
                        record.clear();
                    }
                }
                _ => field.push(c),
            }
        }
    }

    if in_quotes {
        return Err(AppError::invalid_format(
            "Unterminated quoted field in catalog file",
        ));
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}

/// A parsed catalog file: header column index plus data rows
struct Table<'a> {
    path: &'a Path,
    columns: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl<'a> Table<'a> {
    fn new(path: &'a Path, mut records: Vec<Vec<String>>) -> AppResult<Self> {
        if records.is_empty() {
            return Err(AppError::invalid_format(format!(
                "Catalog file {} is empty (missing header row)",
                path.display()
            )));
        }
        let header = records.remove(0);
        let columns = header
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_owned(), i))
            .collect();
        Ok(Self {
            path,
            columns,
            rows: records,
        })
    }

    /// Resolve a required column name to its index
    fn column(&self, name: &str) -> AppResult<usize> {
        self.columns.get(name).copied().ok_or_else(|| {
            AppError::invalid_format(format!(
                "Catalog file {} is missing required column '{name}'",
                self.path.display()
            ))
        })
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(|(i, fields)| Row {
            path: self.path,
            // Header is line 1
            line: i + 2,
            fields,
        })
    }
}

/// One data row with enough context to produce a useful parse error
struct Row<'a> {
    path: &'a Path,
    line: usize,
    fields: &'a [String],
}

impl Row<'_> {
    fn field(&self, index: usize) -> AppResult<&str> {
        self.fields.get(index).map(String::as_str).ok_or_else(|| {
            AppError::invalid_format(format!(
                "Catalog file {} line {} has too few fields",
                self.path.display(),
                self.line
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records_quoted_commas() {
        let records =
            parse_records("a,b\n\"one, two\",plain\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], vec!["one, two", "plain"]);
    }

    #[test]
    fn test_parse_records_doubled_quotes_and_crlf() {
        let records = parse_records("a,b\r\n\"say \"\"hi\"\"\",x\r\n").unwrap();
        assert_eq!(records[1], vec!["say \"hi\"", "x"]);
    }

    #[test]
    fn test_parse_records_skips_blank_lines() {
        let records = parse_records("a,b\n\n1,2\n\n").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_records_no_trailing_newline() {
        let records = parse_records("a,b\n1,2").unwrap();
        assert_eq!(records[1], vec!["1", "2"]);
    }

    #[test]
    fn test_parse_records_unterminated_quote_is_error() {
        assert!(parse_records("a,b\n\"open,2\n").is_err());
    }
}
