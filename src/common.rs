use std::fs::File;
use std::io;
use std::io::Write;

use crate::errors::*;
use crate::sites::Row;

pub fn open_file_or_stdout(file: &Option<String>) -> Result<Box<dyn Write>> {
    if let Some(path) = file {
        let handle =
            File::create(path).chain_err(|| format!("could not create output file {:?}", path))?;
        let writer = io::BufWriter::new(handle);

        Ok(Box::new(writer))
    } else {
        Ok(Box::new(io::BufWriter::new(io::stdout())))
    }
}

/// Formats a score in plain decimal notation, never with an exponent.
pub fn format_score(score: f64) -> String {
    format!("{}", score)
}

/// Writes rows of a table as tab-separated lines.
pub fn write_rows(out: &mut dyn Write, rows: &[Row]) -> Result<()> {
    for row in rows {
        writeln!(out, "{}", row.fields.join("\t")).chain_err(|| "failed to write output row")?;
    }

    out.flush().chain_err(|| "failed to flush output")
}
