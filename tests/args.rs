extern crate cfdscore;

use cfdscore::args::{parse_batch_args_from, parse_score_args_from};
use cfdscore::errors::ErrorKind;

const SPACER: &str = "CTAACAGTTGCTTTTATCAC";
const PROTOSPACER: &str = "tT-ACAGcTGCaTTTATCAC";

fn assert_usage_error<T: std::fmt::Debug>(result: cfdscore::errors::Result<T>) {
    match result {
        Err(err) => match err.kind() {
            ErrorKind::Clap(_) => (),
            kind => panic!("unexpected error {:?}", kind),
        },
        Ok(args) => panic!("unexpected arguments {:?}", args),
    }
}

#[test]
fn test_score_args() {
    let args = parse_score_args_from(vec!["cfd_score", SPACER, PROTOSPACER, "GG"]).unwrap();

    assert_eq!(args.spacer, SPACER);
    assert_eq!(args.protospacer, PROTOSPACER);
    assert_eq!(args.pam, "GG");
}

#[test]
fn test_score_args_with_leading_gap() {
    let args =
        parse_score_args_from(vec!["cfd_score", "-TAACAGTTGCTTTTATCAC", SPACER, "GG"]).unwrap();

    assert_eq!(args.spacer, "-TAACAGTTGCTTTTATCAC");
}

#[test]
fn test_score_args_too_few() {
    assert_usage_error(parse_score_args_from(vec!["cfd_score"]));
    assert_usage_error(parse_score_args_from(vec!["cfd_score", SPACER]));
    assert_usage_error(parse_score_args_from(vec!["cfd_score", SPACER, PROTOSPACER]));
}

#[test]
fn test_score_args_too_many() {
    assert_usage_error(parse_score_args_from(vec![
        "cfd_score",
        SPACER,
        PROTOSPACER,
        "GG",
        "extra",
    ]));
}

#[test]
fn test_score_args_lengths_are_not_checked() {
    let args = parse_score_args_from(vec!["cfd_score", "ACGT", "ACGT", "NGG"]).unwrap();

    assert_eq!(args.pam, "NGG");
}

#[test]
fn test_batch_args() {
    let args = parse_batch_args_from(vec![
        "cfd_batch",
        "sites.tsv",
        "scores.tsv",
        "--mismatch-scores",
        "mm.pkl",
        "--pam-scores",
        "pam.pkl",
        "--threads",
        "4",
        "--header",
    ])
    .unwrap();

    assert_eq!(args.table, "sites.tsv");
    assert_eq!(args.output, Some("scores.tsv".to_string()));
    assert_eq!(args.mismatch_scores, "mm.pkl");
    assert_eq!(args.pam_scores, "pam.pkl");
    assert_eq!(args.threads, 4);
    assert!(args.header);
}

#[test]
fn test_batch_args_defaults() {
    let args = parse_batch_args_from(vec!["cfd_batch", "sites.tsv"]).unwrap();

    assert_eq!(args.output, None);
    assert_eq!(args.threads, 0);
    assert!(!args.header);
}

#[test]
fn test_batch_args_invalid_threads() {
    assert!(parse_batch_args_from(vec!["cfd_batch", "sites.tsv", "--threads", "many"]).is_err());
}
