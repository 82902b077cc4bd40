use toml::{Table, Value};

const SETTINGS: &str = "src/default_settings.toml";
const ROWS: &str = "src/rows/default_rows.toml";

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS}");
    println!("cargo:rerun-if-changed={ROWS}");

    let settings = parse(SETTINGS, include_str!("src/default_settings.toml"));
    for section in ["split", "ranking", "confidence", "speech", "input"] {
        if !settings.get(section).is_some_and(Value::is_table) {
            panic!("{SETTINGS}: missing [{section}]");
        }
    }

    let rows = parse(ROWS, include_str!("src/rows/default_rows.toml"));
    let Some(entries) = rows.get("rows").and_then(Value::as_array) else {
        panic!("{ROWS}: missing [[rows]]");
    };
    for (i, entry) in entries.iter().enumerate() {
        let has = |key: &str| entry.get(key).is_some_and(Value::is_str);
        if !has("symbol") || !has("kana") {
            panic!("{ROWS}: rows[{i}] needs string `symbol` and `kana`");
        }
    }
}

fn parse(path: &str, content: &str) -> Table {
    toml::from_str::<Table>(content)
        .unwrap_or_else(|e| panic!("{path} contains invalid TOML: {e}"))
}
