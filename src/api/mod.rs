//! UniFFI export layer: bindings for the native tenkey frontend.
//!
//! Each public type here maps to a generated foreign class, struct, or enum.

mod session;
mod types;

pub use session::TkSession;
pub use types::{TkDecoded, TkDisplay, TkError, TkGroup, TkGroupKind, TkKeyResponse};

use std::path::Path;

use tenkey_core::RowTable;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn read_config(path: &str) -> Result<String, TkError> {
    std::fs::read_to_string(path).map_err(|e| TkError::Io {
        msg: format!("{path}: {e}"),
    })
}

/// Install a custom row table. Must run before the first session is created.
#[uniffi::export]
fn rows_load_config(path: String) -> Result<(), TkError> {
    let content = read_config(&path)?;
    RowTable::init_custom(content).map_err(|e| TkError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

/// Install custom settings. Must run before the first session is created.
#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), TkError> {
    let content = read_config(&path)?;
    tenkey_core::settings::init_custom(content)
        .map_err(|e| TkError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn rows_default_config() -> String {
    tenkey_core::rows::DEFAULT_ROWS_TOML.to_string()
}

#[uniffi::export]
fn settings_default_config() -> String {
    tenkey_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
