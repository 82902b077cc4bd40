use std::collections::HashSet;

use serde::Deserialize;

use super::table::Row;
use crate::unicode::is_hiragana_reading;

#[derive(Deserialize)]
struct RowsConfig {
    rows: Vec<RowEntry>,
}

#[derive(Deserialize)]
struct RowEntry {
    symbol: String,
    kana: String,
    #[serde(default)]
    max_run: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum RowConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[rows]] table is empty")]
    Empty,
    #[error("row symbol must be a single ASCII character: {0:?}")]
    InvalidSymbol(String),
    #[error("duplicate row symbol: {0}")]
    DuplicateSymbol(char),
    #[error("row {0} must list hiragana only")]
    InvalidKana(char),
    #[error("row {symbol}: max_run {max_run} outside 1..={kana_len}")]
    InvalidMaxRun {
        symbol: char,
        max_run: usize,
        kana_len: usize,
    },
    #[error("row table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into rows, preserving declaration order.
pub fn parse_rows_toml(toml_str: &str) -> Result<Vec<Row>, RowConfigError> {
    let config: RowsConfig =
        toml::from_str(toml_str).map_err(|e| RowConfigError::Parse(e.to_string()))?;

    if config.rows.is_empty() {
        return Err(RowConfigError::Empty);
    }

    let mut seen = HashSet::new();
    let mut rows = Vec::with_capacity(config.rows.len());
    for entry in config.rows {
        let mut chars = entry.symbol.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_graphic() => c,
            _ => return Err(RowConfigError::InvalidSymbol(entry.symbol)),
        };
        if !seen.insert(symbol) {
            return Err(RowConfigError::DuplicateSymbol(symbol));
        }
        if !is_hiragana_reading(&entry.kana) {
            return Err(RowConfigError::InvalidKana(symbol));
        }
        let kana: Vec<char> = entry.kana.chars().collect();
        let max_run = entry.max_run.unwrap_or(kana.len());
        if max_run == 0 || max_run > kana.len() {
            return Err(RowConfigError::InvalidMaxRun {
                symbol,
                max_run,
                kana_len: kana.len(),
            });
        }
        rows.push(Row::new(symbol, kana, max_run));
    }

    Ok(rows)
}
