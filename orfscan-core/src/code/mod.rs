//! Genetic code tables.
//!
//! A [`GeneticCode`] maps each of the 64 RNA codons to an amino acid letter
//! or the stop marker `*`. Tables are checked for completeness when built, so
//! a lookup on a well-formed codon cannot miss.

use crate::alphabets::protein;
use crate::error::{BioError, BioResult};

pub const STOP_MARKER: u8 = b'*';
pub const START_CODON: &[u8; 3] = b"AUG";
pub const N_CODONS: usize = 64;

const BASES: [u8; 4] = [b'A', b'C', b'G', b'U'];

/// NCBI table 1, codons ordered AAA, AAC, AAG, AAU, ACA, ... UUU.
const STANDARD_TABLE: [u8; N_CODONS] =
    *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

#[inline]
fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' | b'a' => Some(0),
        b'C' | b'c' => Some(1),
        b'G' | b'g' => Some(2),
        b'U' | b'u' => Some(3),
        _ => None,
    }
}

/// Index of a 3-base codon in `[0, 64)`.
pub fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some((b1 << 4) | (b2 << 2) | b3)
}

pub fn index_to_codon(idx: usize) -> [u8; 3] {
    [BASES[(idx >> 4) & 3], BASES[(idx >> 2) & 3], BASES[idx & 3]]
}

fn codon_string(codon: &[u8]) -> String {
    String::from_utf8_lossy(codon).into_owned()
}

/// What a codon translates to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Residue {
    AminoAcid(u8),
    Stop,
}

impl Residue {
    fn from_byte(b: u8) -> Self {
        if b == STOP_MARKER {
            Residue::Stop
        } else {
            Residue::AminoAcid(b)
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Residue::AminoAcid(aa) => aa,
            Residue::Stop => STOP_MARKER,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneticCode {
    table: [u8; N_CODONS],
}

impl Default for GeneticCode {
    fn default() -> Self {
        Self::standard()
    }
}

impl GeneticCode {
    pub fn standard() -> Self {
        Self {
            table: STANDARD_TABLE,
        }
    }

    /// Build a table from `(codon, amino_acid)` pairs.
    ///
    /// Codons are case-insensitive. Each value must be one amino acid letter
    /// or `*`. Repeating a codon with the same value is accepted; repeating it
    /// with a different value is not. Every one of the 64 codons must appear.
    pub fn new<I, K, V>(entries: I) -> BioResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let residues = protein::iupac_alphabet();
        let mut slots: [Option<u8>; N_CODONS] = [None; N_CODONS];

        for (codon, value) in entries {
            let codon = codon.as_ref().trim();
            let value = value.as_ref().trim();
            let idx = codon_index(codon.as_bytes()).ok_or_else(|| BioError::InvalidCodon {
                codon: codon.to_string(),
            })?;
            let canonical = codon_string(&index_to_codon(idx));

            let aa = match value.as_bytes() {
                [b] if *b == STOP_MARKER || residues.contains(b.to_ascii_uppercase()) => {
                    b.to_ascii_uppercase()
                }
                _ => {
                    return Err(BioError::InvalidAminoAcid {
                        codon: canonical,
                        value: value.to_string(),
                    })
                }
            };

            if slots[idx].is_some_and(|prev| prev != aa) {
                return Err(BioError::DuplicateCodon { codon: canonical });
            }
            slots[idx] = Some(aa);
        }

        let mut table = [0u8; N_CODONS];
        for (idx, slot) in slots.iter().enumerate() {
            table[idx] = slot.ok_or_else(|| BioError::IncompleteGeneticCode {
                codon: codon_string(&index_to_codon(idx)),
            })?;
        }
        Ok(Self { table })
    }

    /// Look up one codon. Anything other than three ACGU bases is an error.
    #[inline]
    pub fn get(&self, codon: &[u8]) -> BioResult<Residue> {
        let idx = codon_index(codon).ok_or_else(|| BioError::InvalidCodon {
            codon: codon_string(codon),
        })?;
        Ok(Residue::from_byte(self.table[idx]))
    }

    /// Every codon with its residue, in ACGU order.
    pub fn entries(&self) -> impl Iterator<Item = ([u8; 3], Residue)> + '_ {
        self.table
            .iter()
            .enumerate()
            .map(|(idx, &b)| (index_to_codon(idx), Residue::from_byte(b)))
    }
}
