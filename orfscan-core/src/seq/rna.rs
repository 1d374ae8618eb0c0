use crate::alphabets::rna;
use crate::error::{BioError, BioResult};
use crate::seq::traits::SeqBytes;
use memchr::memmem;
use std::fmt;
use std::str::FromStr;

/// An RNA sequence over `ACGU`, stored uppercase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RnaSeq {
    bytes: Vec<u8>,
}

impl RnaSeq {
    pub fn new(mut bytes: Vec<u8>) -> BioResult<Self> {
        if let Some((pos, b)) = rna::alphabet().first_invalid(bytes.as_slice()) {
            return Err(BioError::InvalidChar { ch: b as char, pos });
        }
        bytes.make_ascii_uppercase();
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn reverse(&self) -> Self {
        Self {
            bytes: rna::reverse(&self.bytes),
        }
    }

    pub fn complement(&self) -> BioResult<Self> {
        Ok(Self {
            bytes: rna::complement_bytes(&self.bytes)?,
        })
    }

    pub fn reverse_complement(&self) -> BioResult<Self> {
        Ok(Self {
            bytes: rna::reverse_complement(&self.bytes)?,
        })
    }

    pub fn find_iter<'a>(&'a self, pattern: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
        // Overlapping hits are kept.
        let finder = memmem::Finder::new(pattern);
        let hay = self.as_bytes();
        let mut i = 0usize;
        std::iter::from_fn(move || {
            if pattern.is_empty() || i > hay.len() {
                return None;
            }
            let pos = finder.find(&hay[i..])? + i;
            i = pos + 1;
            Some(pos)
        })
    }
}

impl SeqBytes for RnaSeq {
    fn as_bytes(&self) -> &[u8] {
        RnaSeq::as_bytes(self)
    }
}

impl FromStr for RnaSeq {
    type Err = BioError;

    fn from_str(s: &str) -> BioResult<Self> {
        RnaSeq::new(s.as_bytes().to_vec())
    }
}

impl fmt::Display for RnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn reverse(sequence: &str) -> BioResult<String> {
    Ok(sequence.parse::<RnaSeq>()?.reverse().to_string())
}

/// Swap every base for its pairing partner.
pub fn complement(sequence: &str) -> BioResult<String> {
    Ok(sequence.parse::<RnaSeq>()?.complement()?.to_string())
}

/// Reverse `sequence` and complement the result.
pub fn reverse_complement(sequence: &str) -> BioResult<String> {
    Ok(sequence.parse::<RnaSeq>()?.reverse_complement()?.to_string())
}
