use crate::constants::*;
use crate::errors::*;
use crate::nucleotide::{normalize, reverse_complement_nt};
use crate::tables::{MismatchKey, MismatchTable, PamTable};

/// Fails with `InvalidInputLength` unless both sequences are 20 nt long and
/// the PAM is 2 nt long.
pub fn check_lengths(spacer: &str, protospacer: &str, pam: &str) -> Result<()> {
    if spacer.len() != SEQUENCE_LEN || protospacer.len() != SEQUENCE_LEN || pam.len() != PAM_LEN {
        Err(ErrorKind::InvalidInputLength(spacer.len(), protospacer.len(), pam.len()).into())
    } else {
        Ok(())
    }
}

/// Calculates the Cutting Frequency Determination (CFD) score of a guide
/// (`spacer`) against an aligned target site (`protospacer`) followed by the
/// last two nucleotides of the PAM.
///
/// Both sequences must be 20 nt long and aligned position for position, with
/// '-' marking a bulge on either strand. Position 1 is the most PAM-distal.
/// Every mismatching position multiplies the score by the penalty of the
/// RNA:DNA base pair at that position, and the PAM penalty is applied last.
pub fn calculate_cfd(
    spacer: &str,
    protospacer: &str,
    pam: &str,
    mismatch_scores: &MismatchTable,
    pam_scores: &PamTable,
) -> Result<f64> {
    check_lengths(spacer, protospacer, pam)?;

    let spacer = normalize(spacer);
    let protospacer = normalize(protospacer);

    let mut score = 1.0;
    for (idx, (&rna, &nuc)) in spacer.iter().zip(protospacer.iter()).enumerate() {
        if rna == nuc {
            continue;
        } else if idx == 0 && (rna == GAP || nuc == GAP) {
            // No empirical data for bulges at the most PAM-distal position
            continue;
        }

        let key = MismatchKey::new(rna, reverse_complement_nt(nuc)?, idx + 1);
        let penalty = mismatch_scores.score(key)?;
        trace!("{} -> {}", key, penalty);

        score *= penalty;
    }

    let pam = pam.to_ascii_uppercase();
    let penalty = pam_scores.score(&pam)?;
    trace!("PAM {} -> {}", pam, penalty);

    Ok(score * penalty)
}
