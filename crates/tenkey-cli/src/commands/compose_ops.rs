use std::process;

use tenkey_core::separator::{ComposeOp, SeparatorComposer};
use tenkey_core::RowTable;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown compose key {0:?} (expected s, rs, b, - or c)")]
pub struct UnknownOp(pub String);

/// Key tokens: `s` next row, `rs` previous row, `b` next vowel,
/// `-` separator, `c` clear.
pub fn parse_ops(input: &str) -> Result<Vec<ComposeOp>, UnknownOp> {
    input
        .split_whitespace()
        .map(|tok| match tok {
            "s" => Ok(ComposeOp::NextRow),
            "rs" => Ok(ComposeOp::PrevRow),
            "b" => Ok(ComposeOp::NextVowel),
            "-" => Ok(ComposeOp::Separate),
            "c" => Ok(ComposeOp::Clear),
            other => Err(UnknownOp(other.to_string())),
        })
        .collect()
}

pub fn compose(ops: &[ComposeOp]) -> String {
    let mut composer = SeparatorComposer::new(RowTable::global());
    for &op in ops {
        composer.apply(op);
    }
    composer.text()
}

pub fn compose_cmd(input: &str) {
    let ops = parse_ops(input).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });
    println!("{}", compose(&ops));
}
