use std::fs;
use std::io::{self, Read};
use std::process;

use clap::ValueEnum;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use tenkey_core::segment::segment;
use tenkey_core::settings::RankStrategy;
use tenkey_core::split::mean_delay;
use tenkey_core::{decode, DecodePolicy, DecodedGroup, Press, RowTable};

use crate::timeline::parse_timeline;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    MeanDelay,
    SplitConfidence,
}

impl From<StrategyArg> for RankStrategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::MeanDelay => RankStrategy::MeanDelay,
            StrategyArg::SplitConfidence => RankStrategy::SplitConfidence,
        }
    }
}

#[derive(Debug, Serialize)]
struct DecodeReport<'a> {
    rendered: String,
    best: String,
    presses: &'a [Press],
    groups: &'a [DecodedGroup],
}

/// Decode a timeline file (`-` reads stdin) and print the result.
pub fn decode_cmd(
    file: &str,
    json: bool,
    threshold: Option<u64>,
    strategy: Option<StrategyArg>,
) {
    let input = if file == "-" {
        let mut buf = String::new();
        die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
        buf
    } else {
        die!(fs::read_to_string(file), "Error reading {file}: {}")
    };
    let presses = die!(parse_timeline(&input), "Error: {}");

    let mut policy = DecodePolicy::default();
    if let Some(t) = threshold {
        policy = policy.with_min_threshold(t);
    }
    if let Some(s) = strategy {
        policy = policy.with_strategy(s.into());
    }

    if json {
        let out = die!(json_report(&presses, &policy), "Error encoding JSON: {}");
        println!("{out}");
    } else {
        print!("{}", text_report(&presses, &policy));
    }
}

pub fn json_report(presses: &[Press], policy: &DecodePolicy) -> serde_json::Result<String> {
    let out = decode(presses, RowTable::global(), policy);
    let report = DecodeReport {
        rendered: out.to_string(),
        best: out.best_text(),
        presses,
        groups: &out.groups,
    };
    serde_json::to_string_pretty(&report)
}

/// Rendered line, then every run with its ranked candidates.
pub fn text_report(presses: &[Press], policy: &DecodePolicy) -> String {
    let out = decode(presses, RowTable::global(), policy);
    let mut s = format!("{out}\n");

    for (group, run) in out.groups.iter().zip(segment(presses)) {
        s.push_str(&format!(
            "\n{} x{} ({})\n",
            group.row,
            group.presses,
            kind_label(group)
        ));
        let texts: Vec<String> = group.candidates.iter().map(|c| c.text()).collect();
        let pad_width = texts.iter().map(|t| t.width()).max().unwrap_or(0);

        for (i, (cand, text)) in group.candidates.iter().zip(&texts).enumerate() {
            let padded = format!("{text}{}", " ".repeat(pad_width - text.width()));
            let mean = match mean_delay(&cand.split, run.presses) {
                Some(m) => format!("mean={m:.0}ms"),
                None => "mean=-".to_string(),
            };
            s.push_str(&format!(
                "  #{:>2}: {padded}  split={:?}  {mean}\n",
                i + 1,
                cand.split.indices()
            ));
        }
    }
    s
}

fn kind_label(group: &DecodedGroup) -> &'static str {
    use tenkey_core::RenderedGroup::*;
    match group.rendered {
        Resolved { .. } => "resolved",
        Alternatives { .. } => "ambiguous",
        Unresolvable { .. } => "unresolvable",
    }
}
