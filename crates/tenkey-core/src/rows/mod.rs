//! Consonant row table.
//!
//! Each row maps a run length (1-based) to a kana and caps how many
//! consecutive presses one character may take. The default table is embedded
//! TOML; a custom table can replace it before first use.

mod config;
mod table;

pub use config::{parse_rows_toml, RowConfigError};
pub use table::{Row, RowTable, DEFAULT_ROWS_TOML};
