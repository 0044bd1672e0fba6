use crate::constants::GAP;
use crate::errors::*;

// Bases of the guide (RNA) and target (DNA) strands, in table order
pub const RNA_BASES: &[u8; 5] = b"ACGU-";
pub const DNA_BASES: &[u8; 5] = b"ACGT-";

// Pairing partner of each recognized symbol; T and U both pair with A
const MAPPING: [(u8, u8); 6] = [
    (b'A', b'T'),
    (b'C', b'G'),
    (b'G', b'C'),
    (b'T', b'A'),
    (b'U', b'A'),
    (GAP, GAP),
];

lazy_static! {
    static ref COMPLEMENT: Vec<Option<u8>> = {
        let mut table = vec![None; 256];

        for &(nuc, complement) in &MAPPING {
            table[nuc as usize] = Some(complement);
        }

        table
    };
}

/// Returns the base pairing with `nuc`; gaps are their own complement.
pub fn reverse_complement_nt(nuc: u8) -> Result<u8> {
    match COMPLEMENT[nuc as usize] {
        Some(complement) => Ok(complement),
        None => Err(ErrorKind::UnrecognizedSymbol(nuc as char).into()),
    }
}

/// Uppercases a sequence and rewrites T to U, so that spacer and protospacer
/// are compared in RNA terms.
pub fn normalize(seq: &str) -> Vec<u8> {
    seq.bytes()
        .map(|nuc| match nuc.to_ascii_uppercase() {
            b'T' => b'U',
            nuc => nuc,
        })
        .collect()
}

pub fn rna_index(nuc: u8) -> Option<usize> {
    RNA_BASES.iter().position(|&v| v == nuc)
}

pub fn dna_index(nuc: u8) -> Option<usize> {
    DNA_BASES.iter().position(|&v| v == nuc)
}
