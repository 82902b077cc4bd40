use std::sync::OnceLock;

use super::config::{parse_rows_toml, RowConfigError};

pub const DEFAULT_ROWS_TOML: &str = include_str!("default_rows.toml");

static OVERRIDE: OnceLock<String> = OnceLock::new();

/// One consonant row: its key symbol, kana in press order, and run limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    symbol: char,
    kana: Vec<char>,
    max_run: usize,
}

impl Row {
    pub(crate) fn new(symbol: char, kana: Vec<char>, max_run: usize) -> Self {
        Self {
            symbol,
            kana,
            max_run,
        }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn kana(&self) -> &[char] {
        &self.kana
    }

    /// Longest run of presses that still names a single kana.
    pub fn max_run(&self) -> usize {
        self.max_run
    }

    /// Kana selected by `count` consecutive presses (1-based).
    /// `None` once `count` exceeds the run limit.
    pub fn kana_for(&self, count: usize) -> Option<char> {
        if count == 0 || count > self.max_run {
            return None;
        }
        self.kana.get(count - 1).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTable {
    rows: Vec<Row>,
}

impl RowTable {
    pub fn from_toml(toml_str: &str) -> Result<Self, RowConfigError> {
        Ok(Self {
            rows: parse_rows_toml(toml_str)?,
        })
    }

    /// Replace the built-in rows for this process. Only takes effect if
    /// called before the first `global()`.
    pub fn init_custom(toml_content: String) -> Result<(), RowConfigError> {
        parse_rows_toml(&toml_content)?;
        OVERRIDE
            .set(toml_content)
            .map_err(|_| RowConfigError::AlreadyInitialized)
    }

    /// The process-wide table: the override if one was installed, else the
    /// keypad default.
    pub fn global() -> &'static RowTable {
        static TABLE: OnceLock<RowTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let source = OVERRIDE.get().map_or(DEFAULT_ROWS_TOML, String::as_str);
            RowTable::from_toml(source).expect("row table TOML must be valid")
        })
    }

    pub fn get(&self, symbol: char) -> Option<&Row> {
        self.rows.iter().find(|r| r.symbol == symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.get(symbol).is_some()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for RowTable {
    fn default() -> Self {
        RowTable::global().clone()
    }
}
