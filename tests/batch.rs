extern crate cfdscore;
extern crate indicatif;

use indicatif::ProgressBar;

use cfdscore::commands::batch::score_rows;
use cfdscore::sites;
use cfdscore::sites::Row;
use cfdscore::ScoreTables;

fn data(name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn tables() -> ScoreTables {
    ScoreTables::load(&data("mismatch_scores.txt"), &data("pam_scores.txt")).unwrap()
}

fn row(line: usize, values: &[&str]) -> Row {
    Row {
        line,
        fields: values.iter().map(|v| v.to_string()).collect(),
    }
}

#[test]
fn test_read_sites() {
    let table = sites::read(&data("sites.tsv")).unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(table[0], row(1, &["spacer", "protospacer", "pam", "name"]));
    assert_eq!(
        table[2],
        row(
            3,
            &["CTAACAGTTGCTTTTATCAC", "tT-ACAGcTGCaTTTATCAC", "GG", "bulge"]
        )
    );
    // Line 4 is blank
    assert_eq!(table[3].line, 5);
}

#[test]
fn test_parse_sites_with_crlf() {
    let table = sites::parse("a\tb\r\n\r\nc\td\r\n".as_bytes()).unwrap();

    assert_eq!(table, vec![row(1, &["a", "b"]), row(3, &["c", "d"])]);
}

#[test]
fn test_score_rows_with_header() {
    let mut table = sites::read(&data("sites.tsv")).unwrap();
    score_rows(&tables(), &mut table, true, &ProgressBar::hidden()).unwrap();

    let scores: Vec<&str> = table.iter().map(|row| row.fields[4].as_str()).collect();
    assert_eq!(scores, vec!["CFD", "0.6875", "0.05859375", "0.259259259"]);
}

#[test]
fn test_score_rows_without_header() {
    let mut table = vec![
        row(1, &["CTAACAGTTGCTTTTATCAC", "CTAACAGTTGCTTTTATCAC", "GG"]),
        row(2, &["-TAACAGTTGCTTTTATCAC", "CTAACAGTTGCTTTTATCAC", "GG"]),
    ];
    score_rows(&tables(), &mut table, false, &ProgressBar::hidden()).unwrap();

    assert_eq!(table[0].fields[3], "1");
    assert_eq!(table[1].fields[3], "1");
}

#[test]
fn test_score_rows_rejects_header_when_not_flagged() {
    let mut table = sites::read(&data("sites.tsv")).unwrap();

    assert!(score_rows(&tables(), &mut table, false, &ProgressBar::hidden()).is_err());
}

#[test]
fn test_score_rows_reports_line_number() {
    let text = "CTAACAGTTGCTTTTATCAC\tCTAACAGTTGCTTTTATCAC\tGG\n\n\
                CTAACAGTTGCTTTTATCAC\tCTAACAGTTGCTTTTATCAC\n";
    let mut table = sites::parse(text.as_bytes()).unwrap();

    let err = score_rows(&tables(), &mut table, false, &ProgressBar::hidden()).unwrap_err();
    assert_eq!(err.to_string(), "failed to score line 3");
}

#[test]
fn test_score_empty_table() {
    let mut table: Vec<Row> = Vec::new();

    score_rows(&tables(), &mut table, true, &ProgressBar::hidden()).unwrap();
    assert!(table.is_empty());
}
