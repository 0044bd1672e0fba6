use std::cmp::max;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar on STDERR for scoring `size` rows.
pub fn rows(size: usize) -> ProgressBar {
    let progress = ProgressBar::new(size as u64);
    progress.set_draw_delta(max(1, size as u64 / 1000));
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Scoring {wide_bar} {pos}/{len} [{elapsed} elapsed; {eta} left]"),
    );

    progress
}
