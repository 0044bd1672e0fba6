use std::fmt::Debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use crate::errors::*;

/// A non-blank line of a tab-separated table, with its 1-based line number.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Reads a tab-separated table of target sites, skipping blank lines.
pub fn read<P: AsRef<Path> + Debug>(path: &P) -> Result<Vec<Row>> {
    let file = File::open(path).chain_err(|| format!("failed to open table {:?}", path))?;

    parse(BufReader::new(file))
}

pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Row>> {
    let mut table: Vec<Row> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.chain_err(|| "error reading line from table")?;
        let line = line.trim_end_matches('\r');

        if !line.trim().is_empty() {
            table.push(Row {
                line: idx + 1,
                fields: line.split('\t').map(|v| v.trim().to_string()).collect(),
            });
        }
    }

    Ok(table)
}
