//! Loading integer-coded datasets from text.
use super::dataset::{Dataset, WholeNumber};
use crate::errors::Id3Error;
use csv::ReaderBuilder;
use log::{info, trace, warn};
use std::{fs::File, io::Read, path::Path};

/// How `parse_token` treats characters that are not decimal digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenPolicy {
    /// Reject the token with `Id3Error::InvalidToken`.
    #[default]
    Strict,
    /// Warn and let the character contribute 0, keeping its digit position.
    Lenient,
}

#[derive(Clone, Debug)]
pub struct ReaderParams {
    pub delimiter: u8,
    pub token_policy: TokenPolicy,
}

impl Default for ReaderParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderParams {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            token_policy: TokenPolicy::Strict,
        }
    }

    pub fn set_delimiter(&mut self, delimiter: char) -> Result<(), Id3Error> {
        if !delimiter.is_ascii() {
            return Err(Id3Error::InvalidParameter(
                "delimiter".into(),
                "an ASCII character".into(),
                delimiter.to_string(),
            ));
        }
        self.delimiter = delimiter as u8;
        Ok(())
    }

    pub fn set_token_policy(&mut self, token_policy: TokenPolicy) {
        self.token_policy = token_policy;
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn token_policy(&self) -> TokenPolicy {
        self.token_policy
    }
}

/// Parses a string of decimal digits as a non-negative integer.
///
/// # Arguments
///
/// * `token` - The token to parse.
/// * `policy` - What to do with non-digit characters.
/// * `line` - Source line, used in diagnostics only.
///
/// # Errors
///
/// Under `TokenPolicy::Strict` any non-digit character or an empty token is rejected.
/// Values that overflow `u64` are rejected under both policies.
pub fn parse_token(token: &str, policy: TokenPolicy, line: u64) -> Result<u64, Id3Error> {
    let invalid = || Id3Error::InvalidToken {
        token: token.to_string(),
        line,
    };

    match policy {
        TokenPolicy::Strict => {
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            token.parse::<u64>().map_err(|_| invalid())
        }
        TokenPolicy::Lenient => {
            let mut total: u64 = 0;
            for (position, ch) in token.chars().rev().enumerate() {
                match ch.to_digit(10) {
                    Some(0) => {}
                    Some(digit) => {
                        let place = u32::try_from(position)
                            .ok()
                            .and_then(|exp| 10u64.checked_pow(exp))
                            .ok_or_else(invalid)?;
                        total = place
                            .checked_mul(u64::from(digit))
                            .and_then(|value| total.checked_add(value))
                            .ok_or_else(invalid)?;
                    }
                    None => warn!(
                        "Input is not valid: {:?} in token {:?} on line {}, counted as 0",
                        ch, token, line
                    ),
                }
            }
            Ok(total)
        }
    }
}

/// Parses a dataset from text, one example per line with the class label last.
///
/// Fields are split on the configured delimiter and then on whitespace, so both
/// `1,0,1` and `1 0 1` are accepted. Lines without tokens are skipped.
pub fn parse_dataset<T: WholeNumber>(
    text: &str,
    params: &ReaderParams,
) -> Result<Dataset<T>, Id3Error> {
    parse_from_reader(text.as_bytes(), params)
}

/// Reads a dataset file, see [`parse_dataset`] for the format.
///
/// # Errors
///
/// Returns `Id3Error::FileUnavailable` if the file cannot be opened.
pub fn read_dataset<T: WholeNumber>(
    path: impl AsRef<Path>,
    params: &ReaderParams,
) -> Result<Dataset<T>, Id3Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Id3Error::FileUnavailable {
        path: path.display().to_string(),
        source,
    })?;
    let dataset: Dataset<T> = parse_from_reader(file, params)?;
    info!(
        "Loaded {} rows with {} attributes from {}",
        dataset.nrows(),
        dataset.n_attributes(),
        path.display()
    );
    Ok(dataset)
}

fn parse_from_reader<T: WholeNumber, R: Read>(
    source: R,
    params: &ReaderParams,
) -> Result<Dataset<T>, Id3Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(params.delimiter())
        .from_reader(source);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |position| position.line());

        let row = record
            .iter()
            .flat_map(str::split_whitespace)
            .map(|token| {
                let value = parse_token(token, params.token_policy(), line)?;
                T::from_u64(value).ok_or_else(|| Id3Error::InvalidToken {
                    token: token.to_string(),
                    line,
                })
            })
            .collect::<Result<Vec<T>, _>>()?;

        if row.is_empty() {
            continue;
        }
        trace!("line {}: {:?}", line, row);
        rows.push(row);
    }

    Dataset::from_rows(&rows)
}
