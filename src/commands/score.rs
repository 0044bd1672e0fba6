use crate::args::ScoreArgs;
use crate::cfd::check_lengths;
use crate::common::format_score;
use crate::errors::*;
use crate::tables::ScoreTables;

pub fn main(args: &ScoreArgs) -> Result<()> {
    // Report malformed input before touching the score tables
    check_lengths(&args.spacer, &args.protospacer, &args.pam)?;

    let tables = ScoreTables::load(&args.mismatch_scores, &args.pam_scores)?;
    let score = tables.calculate_cfd(&args.spacer, &args.protospacer, &args.pam)?;

    println!("{}", format_score(score));

    Ok(())
}
