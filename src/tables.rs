use std::collections::HashMap;
use std::fmt;
use std::fmt::Debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use crate::cfd;
use crate::constants::*;
use crate::errors::*;
use crate::nucleotide::{dna_index, rna_index, DNA_BASES, RNA_BASES};

const MISMATCH_SLOTS: usize = RNA_BASES.len() * DNA_BASES.len() * SEQUENCE_LEN;
// PAM keys use the four DNA bases only, never the gap
const PAM_BASES: usize = 4;
const PAM_SLOTS: usize = PAM_BASES * PAM_BASES;

/// An RNA:DNA base pair at a 1-based position of the alignment, written as
/// `rC:dA,1` in score tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MismatchKey {
    rna: u8,
    dna: u8,
    position: usize,
}

impl MismatchKey {
    pub fn new(rna: u8, dna: u8, position: usize) -> MismatchKey {
        MismatchKey { rna, dna, position }
    }

    pub fn parse(key: &str) -> Option<MismatchKey> {
        let bytes = key.as_bytes();
        if bytes.len() < 7 || bytes[0] != b'r' || bytes[2] != b':' || bytes[3] != b'd' || bytes[5] != b','
        {
            return None;
        }

        // Positions are plain decimal numbers without sign or leading zeros
        let digits = &bytes[6..];
        if digits[0] == b'0' || !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }

        let position = key.get(6..)?.parse::<usize>().ok()?;
        let key = MismatchKey::new(bytes[1], bytes[4], position);

        key.offset().map(|_| key)
    }

    fn offset(self) -> Option<usize> {
        if self.position < 1 || self.position > SEQUENCE_LEN {
            return None;
        }

        let pair = rna_index(self.rna)? * DNA_BASES.len() + dna_index(self.dna)?;

        Some(pair * SEQUENCE_LEN + self.position - 1)
    }

    fn from_offset(offset: usize) -> MismatchKey {
        let pair = offset / SEQUENCE_LEN;

        MismatchKey {
            rna: RNA_BASES[pair / DNA_BASES.len()],
            dna: DNA_BASES[pair % DNA_BASES.len()],
            position: offset % SEQUENCE_LEN + 1,
        }
    }
}

impl fmt::Display for MismatchKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "r{}:d{},{}",
            self.rna as char, self.dna as char, self.position
        )
    }
}

fn check_score(key: &str, score: f64) -> Result<()> {
    if score.is_finite() && (0.0..=1.0).contains(&score) {
        Ok(())
    } else {
        Err(format!("score {} for {:?} is not in the range [0, 1]", score, key).into())
    }
}

/// Entry point shared by the table loaders.
trait ScoreTable: Default {
    fn insert_entry(&mut self, key: &str, score: f64) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct MismatchTable {
    scores: Vec<Option<f64>>,
}

impl Default for MismatchTable {
    fn default() -> MismatchTable {
        MismatchTable::new()
    }
}

impl MismatchTable {
    pub fn new() -> MismatchTable {
        MismatchTable {
            scores: vec![None; MISMATCH_SLOTS],
        }
    }

    pub fn read<P: AsRef<Path> + Debug>(path: &P) -> Result<MismatchTable> {
        read_table(path.as_ref())
    }

    pub fn get(&self, key: MismatchKey) -> Option<f64> {
        key.offset().and_then(|offset| self.scores[offset])
    }

    /// Like `get`, but reports an absent key as `MissingScoreKey`.
    pub fn score(&self, key: MismatchKey) -> Result<f64> {
        match self.get(key) {
            Some(score) => Ok(score),
            None => Err(ErrorKind::MissingScoreKey(key.to_string()).into()),
        }
    }

    pub fn insert(&mut self, key: MismatchKey, score: f64) -> Result<Option<f64>> {
        let offset = match key.offset() {
            Some(offset) => offset,
            None => return Err(format!("invalid mismatch key {:?}", key.to_string()).into()),
        };

        check_score(&key.to_string(), score)?;

        Ok(self.scores[offset].replace(score))
    }

    pub fn remove(&mut self, key: MismatchKey) -> Option<f64> {
        key.offset().and_then(|offset| self.scores[offset].take())
    }

    pub fn len(&self) -> usize {
        self.scores.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (MismatchKey, f64)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .filter_map(|(offset, score)| score.map(|v| (MismatchKey::from_offset(offset), v)))
    }

    pub fn write_text(&self, out: &mut dyn Write) -> Result<()> {
        for (key, score) in self.iter() {
            writeln!(out, "{}\t{}", key, score).chain_err(|| "failed to write mismatch score")?;
        }

        Ok(())
    }
}

impl ScoreTable for MismatchTable {
    fn insert_entry(&mut self, key: &str, score: f64) -> Result<()> {
        let parsed = match MismatchKey::parse(key) {
            Some(parsed) => parsed,
            None => return Err(format!("invalid mismatch key {:?}", key).into()),
        };

        if self.insert(parsed, score)?.is_some() {
            return Err(format!("duplicate mismatch key {:?}", key).into());
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PamTable {
    scores: Vec<Option<f64>>,
}

impl Default for PamTable {
    fn default() -> PamTable {
        PamTable::new()
    }
}

impl PamTable {
    pub fn new() -> PamTable {
        PamTable {
            scores: vec![None; PAM_SLOTS],
        }
    }

    pub fn read<P: AsRef<Path> + Debug>(path: &P) -> Result<PamTable> {
        read_table(path.as_ref())
    }

    fn offset(pam: &str) -> Option<usize> {
        let bytes = pam.as_bytes();
        if bytes.len() != PAM_LEN {
            return None;
        }

        let first = dna_index(bytes[0]).filter(|&v| v < PAM_BASES)?;
        let second = dna_index(bytes[1]).filter(|&v| v < PAM_BASES)?;

        Some(first * PAM_BASES + second)
    }

    pub fn get(&self, pam: &str) -> Option<f64> {
        Self::offset(pam).and_then(|offset| self.scores[offset])
    }

    /// Looks up `pam` exactly as given; callers are expected to uppercase it.
    pub fn score(&self, pam: &str) -> Result<f64> {
        match self.get(pam) {
            Some(score) => Ok(score),
            None => Err(ErrorKind::MissingScoreKey(pam.to_owned()).into()),
        }
    }

    pub fn insert(&mut self, pam: &str, score: f64) -> Result<Option<f64>> {
        let offset = match Self::offset(pam) {
            Some(offset) => offset,
            None => return Err(format!("invalid PAM key {:?}", pam).into()),
        };

        check_score(pam, score)?;

        Ok(self.scores[offset].replace(score))
    }

    pub fn remove(&mut self, pam: &str) -> Option<f64> {
        Self::offset(pam).and_then(|offset| self.scores[offset].take())
    }

    pub fn len(&self) -> usize {
        self.scores.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        self.scores.iter().enumerate().filter_map(|(offset, score)| {
            score.map(|v| {
                let pam = [DNA_BASES[offset / PAM_BASES], DNA_BASES[offset % PAM_BASES]];

                (String::from_utf8_lossy(&pam).into_owned(), v)
            })
        })
    }

    pub fn write_text(&self, out: &mut dyn Write) -> Result<()> {
        for (pam, score) in self.iter() {
            writeln!(out, "{}\t{}", pam, score).chain_err(|| "failed to write PAM score")?;
        }

        Ok(())
    }
}

impl ScoreTable for PamTable {
    fn insert_entry(&mut self, key: &str, score: f64) -> Result<()> {
        if self.insert(key, score)?.is_some() {
            return Err(format!("duplicate PAM key {:?}", key).into());
        }

        Ok(())
    }
}

/// Reads `key value` pairs separated by whitespace, one pair per line. Blank
/// lines and lines starting with '#' are skipped.
pub fn read_text<R: BufRead>(reader: R) -> Result<Vec<(String, f64)>> {
    let mut entries = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.chain_err(|| "error reading line from score table")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(format!(
                "expected 2 fields on line {}, found {}",
                idx + 1,
                fields.len()
            )
            .into());
        }

        let score = fields[1]
            .parse::<f64>()
            .chain_err(|| format!("invalid score {:?} on line {}", fields[1], idx + 1))?;

        entries.push((fields[0].to_owned(), score));
    }

    Ok(entries)
}

/// Reads a pickled `dict` of `str` keys to `float` scores.
pub fn read_pickle<R: Read>(reader: R) -> Result<Vec<(String, f64)>> {
    let table: HashMap<String, f64> = serde_pickle::from_reader(reader, serde_pickle::DeOptions::new())?;
    let mut entries: Vec<(String, f64)> = table.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(entries)
}

fn build_table<T: ScoreTable>(entries: Vec<(String, f64)>) -> Result<T> {
    let mut table = T::default();
    for (key, score) in entries {
        table.insert_entry(&key, score)?;
    }

    Ok(table)
}

fn read_table<T: ScoreTable>(path: &Path) -> Result<T> {
    let load = || -> Result<T> {
        let file = File::open(path).chain_err(|| "failed to open score table")?;
        let reader = BufReader::new(file);

        let entries = match path.extension() {
            Some(ext) if ext == PICKLE_EXTENSION => read_pickle(reader)?,
            _ => read_text(reader)?,
        };

        build_table(entries)
    };

    load().chain_err(|| ErrorKind::ScoreTablesUnavailable(path.display().to_string()))
}

/// The mismatch and PAM score tables used by the CFD scorer. Tables are never
/// modified once loaded and may be shared between threads.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreTables {
    mismatch: MismatchTable,
    pam: PamTable,
}

impl ScoreTables {
    pub fn new(mismatch: MismatchTable, pam: PamTable) -> ScoreTables {
        ScoreTables { mismatch, pam }
    }

    pub fn load<P: AsRef<Path> + Debug, Q: AsRef<Path> + Debug>(
        mismatch_path: &P,
        pam_path: &Q,
    ) -> Result<ScoreTables> {
        let mismatch = MismatchTable::read(mismatch_path)?;
        debug!("read {} mismatch scores from {:?}", mismatch.len(), mismatch_path);

        let pam = PamTable::read(pam_path)?;
        debug!("read {} PAM scores from {:?}", pam.len(), pam_path);

        Ok(ScoreTables::new(mismatch, pam))
    }

    pub fn mismatch(&self) -> &MismatchTable {
        &self.mismatch
    }

    pub fn pam(&self) -> &PamTable {
        &self.pam
    }

    pub fn calculate_cfd(&self, spacer: &str, protospacer: &str, pam: &str) -> Result<f64> {
        cfd::calculate_cfd(spacer, protospacer, pam, &self.mismatch, &self.pam)
    }

    pub fn summarize(&self) -> String {
        format!(
            "{} mismatch scores and {} PAM scores",
            self.mismatch.len(),
            self.pam.len()
        )
    }
}
