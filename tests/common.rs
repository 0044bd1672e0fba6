extern crate cfdscore;

use cfdscore::common::format_score;

#[test]
fn test_format_score() {
    assert_eq!(format_score(1.0), "1");
    assert_eq!(format_score(0.0), "0");
    assert_eq!(format_score(0.05859375), "0.05859375");
}

#[test]
fn test_format_small_score_without_exponent() {
    assert_eq!(format_score(1.961844305419922e-5), "0.00001961844305419922");
}

#[test]
fn test_formatted_score_reads_back() {
    let score = 0.259259259 * 0.038961039 * 0.0625;

    assert_eq!(format_score(score).parse::<f64>().unwrap().to_bits(), score.to_bits());
}
