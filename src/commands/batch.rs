use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::args::BatchArgs;
use crate::common::{format_score, open_file_or_stdout, write_rows};
use crate::errors::*;
use crate::progress;
use crate::sites;
use crate::sites::Row;
use crate::tables::ScoreTables;

pub const SCORE_COLUMN: &str = "CFD";

fn score_row(tables: &ScoreTables, row: &[String]) -> Result<f64> {
    match row {
        [spacer, protospacer, pam, ..] => tables.calculate_cfd(spacer, protospacer, pam),
        _ => Err(format!("expected at least 3 columns, found {}", row.len()).into()),
    }
}

/// Appends the CFD score of each row (spacer, protospacer, PAM, ...) to that
/// row. Rows are scored in parallel; the first failure aborts scoring and
/// names the line of the table it was read from.
pub fn score_rows(
    tables: &ScoreTables,
    rows: &mut [Row],
    header: bool,
    progress: &ProgressBar,
) -> Result<()> {
    let offset = if header && !rows.is_empty() { 1 } else { 0 };
    let (head, body) = rows.split_at_mut(offset);

    for row in head {
        row.fields.push(SCORE_COLUMN.into());
    }

    body.par_iter_mut()
        .try_for_each(|row| -> Result<()> {
            let score = score_row(tables, &row.fields)
                .chain_err(|| format!("failed to score line {}", row.line))?;

            row.fields.push(format_score(score));
            progress.inc(1);

            Ok(())
        })
}

pub fn main(args: &BatchArgs) -> Result<()> {
    ::rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .chain_err(|| "failed to build thread pool")?;

    eprintln!(
        "\nReading score tables from {:?} and {:?}",
        args.mismatch_scores, args.pam_scores
    );
    let tables = ScoreTables::load(&args.mismatch_scores, &args.pam_scores)?;
    eprintln!("  {}", tables.summarize());

    eprintln!("Reading target sites from {:?}", args.table);
    let mut table = sites::read(&args.table).chain_err(|| "failed to read table of target sites")?;
    eprintln!("  read {} rows from table.", table.len());

    let progress = progress::rows(table.len());
    score_rows(&tables, &mut table, args.header, &progress)?;
    progress.finish();

    let mut out = open_file_or_stdout(&args.output)?;
    write_rows(&mut out, &table)
}
