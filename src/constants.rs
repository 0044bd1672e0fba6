pub const SEQUENCE_LEN: usize = 20;
pub const PAM_LEN: usize = 2;

// Placeholder for a bulge in either aligned sequence
pub const GAP: u8 = b'-';

pub const USAGE: &str =
    "cfd_score <20nt_aligned_spacer_sequence> <20nt_aligned_protospacer_sequence> <last_2nt_of_PAM>";

pub const MISMATCH_SCORES_ENV: &str = "CFD_MISMATCH_SCORES";
pub const PAM_SCORES_ENV: &str = "CFD_PAM_SCORES";

pub const DEFAULT_MISMATCH_SCORES: &str = "mismatch_scores.txt";
pub const DEFAULT_PAM_SCORES: &str = "pam_scores.txt";

pub const PICKLE_EXTENSION: &str = "pkl";
