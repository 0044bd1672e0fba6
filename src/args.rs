use std::env;
use std::ffi::OsString;

use clap::{App, AppSettings, Arg, ArgMatches};

use crate::constants::*;
use crate::errors::*;

#[derive(Debug)]
pub struct ScoreArgs {
    pub spacer: String,
    pub protospacer: String,
    pub pam: String,
    pub mismatch_scores: String,
    pub pam_scores: String,
}

#[derive(Debug)]
pub struct BatchArgs {
    pub table: String,
    pub output: Option<String>,
    pub mismatch_scores: String,
    pub pam_scores: String,
    pub threads: usize,
    pub header: bool,
}

fn score_command<'a, 'b>() -> App<'a, 'b> {
    App::new("cfd_score")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Calculate the CFD score of an aligned gRNA and target site")
        .after_help(
            "Score tables are read from the files named by $CFD_MISMATCH_SCORES and \
             $CFD_PAM_SCORES (default: mismatch_scores.txt and pam_scores.txt).",
        )
        // A bulge at the PAM-distal end means sequences may start with '-'
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(
            Arg::with_name("spacer")
                .help("20 nt aligned spacer (gRNA) sequence.")
                .required(true),
        )
        .arg(
            Arg::with_name("protospacer")
                .help("20 nt aligned protospacer (target DNA) sequence.")
                .required(true),
        )
        .arg(
            Arg::with_name("pam")
                .help("Last 2 nt of the PAM.")
                .required(true),
        )
}

fn batch_command<'a, 'b>() -> App<'a, 'b> {
    App::new("cfd_batch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Calculate CFD scores for a table of aligned gRNAs and target sites")
        .arg(
            Arg::with_name("table")
                .help("Tab-separated table with spacer, protospacer, and PAM columns.")
                .required(true),
        )
        .arg(Arg::with_name("output").help("Output table (default: STDOUT)."))
        .arg(
            Arg::with_name("mismatch-scores")
                .long("mismatch-scores")
                .takes_value(true)
                .env(MISMATCH_SCORES_ENV)
                .default_value(DEFAULT_MISMATCH_SCORES)
                .help("Table of RNA:DNA mismatch scores (text or pickle)."),
        )
        .arg(
            Arg::with_name("pam-scores")
                .long("pam-scores")
                .takes_value(true)
                .env(PAM_SCORES_ENV)
                .default_value(DEFAULT_PAM_SCORES)
                .help("Table of PAM scores (text or pickle)."),
        )
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .takes_value(true)
                .allow_hyphen_values(true)
                .number_of_values(1)
                .default_value("0")
                .help("Number of threads used for computation (0 for automatic)."),
        )
        .arg(
            Arg::with_name("header")
                .long("header")
                .help("First row of the table is a header."),
        )
}

fn get_str<'a>(matches: &'a ArgMatches, key: &str) -> Result<&'a str> {
    match matches.value_of(key) {
        Some(value) => Ok(value),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_string(matches: &ArgMatches, key: &str) -> Result<String> {
    get_str(matches, key).map(|v| v.into())
}

fn parse_threads(matches: &ArgMatches) -> Result<usize> {
    let s = get_str(matches, "threads")?;

    match s.parse::<usize>() {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Invalid --threads ({:?}) value: {}", s, err).into()),
    }
}

fn get_matches<'a, I, T>(app: App<'a, '_>, args: I) -> Result<ArgMatches<'a>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match app.get_matches_from_safe(args) {
        Ok(matches) => Ok(matches),
        Err(err) => match err.kind {
            clap::ErrorKind::HelpDisplayed | clap::ErrorKind::VersionDisplayed => err.exit(),
            _ => Err(err.into()),
        },
    }
}

fn table_path(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_owned())
}

/// Parses `<spacer> <protospacer> <pam>`; missing or surplus arguments are
/// both usage errors.
pub fn parse_score_args_from<I, T>(args: I) -> Result<ScoreArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = get_matches(score_command(), args)?;

    Ok(ScoreArgs {
        spacer: get_string(&matches, "spacer")?,
        protospacer: get_string(&matches, "protospacer")?,
        pam: get_string(&matches, "pam")?,
        mismatch_scores: table_path(MISMATCH_SCORES_ENV, DEFAULT_MISMATCH_SCORES),
        pam_scores: table_path(PAM_SCORES_ENV, DEFAULT_PAM_SCORES),
    })
}

pub fn parse_score_args() -> Result<ScoreArgs> {
    parse_score_args_from(env::args_os())
}

pub fn parse_batch_args_from<I, T>(args: I) -> Result<BatchArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = get_matches(batch_command(), args)?;

    Ok(BatchArgs {
        table: get_string(&matches, "table")?,
        output: matches.value_of("output").map(|s| s.to_string()),
        mismatch_scores: get_string(&matches, "mismatch-scores")?,
        pam_scores: get_string(&matches, "pam-scores")?,
        threads: parse_threads(&matches)?,
        header: matches.is_present("header"),
    })
}

pub fn parse_batch_args() -> Result<BatchArgs> {
    parse_batch_args_from(env::args_os())
}
