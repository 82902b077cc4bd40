use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn rows_export() {
    print!("{}", tenkey_core::rows::DEFAULT_ROWS_TOML);
}

pub fn rows_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let rows = die!(tenkey_core::rows::parse_rows_toml(&content), "Error: {}");
    let symbols: String = rows.iter().map(|r| r.symbol()).collect();
    println!("OK: {} rows ({symbols})", rows.len());
}

pub fn settings_export() {
    print!("{}", tenkey_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        tenkey_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: split.min_threshold_ms={}, split.max_flagged={}, ranking.strategy={:?}",
        s.split.min_threshold_ms, s.split.max_flagged, s.ranking.strategy
    );
}
