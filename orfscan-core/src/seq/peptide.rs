use crate::alphabets::protein;
use crate::error::{BioError, BioResult};
use crate::seq::traits::SeqBytes;
use std::fmt;

/// Amino acids produced by translation. May be empty; never holds `*`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Peptide {
    bytes: Vec<u8>,
}

impl Peptide {
    pub fn new(bytes: Vec<u8>) -> BioResult<Self> {
        if let Some((pos, b)) = protein::iupac_alphabet().first_invalid(bytes.as_slice()) {
            return Err(BioError::InvalidChar { ch: b as char, pos });
        }
        Ok(Self { bytes })
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
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

    pub fn into_string(self) -> String {
        String::from_utf8(self.bytes).unwrap_or_default()
    }
}

impl SeqBytes for Peptide {
    fn as_bytes(&self) -> &[u8] {
        Peptide::as_bytes(self)
    }
}

impl fmt::Display for Peptide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Peptide> for String {
    fn from(peptide: Peptide) -> Self {
        peptide.into_string()
    }
}

impl PartialEq<str> for Peptide {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Peptide {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_stop_marker() {
        assert!(matches!(
            Peptide::new(b"MA*".to_vec()),
            Err(BioError::InvalidChar { ch: '*', pos: 2 })
        ));
    }

    #[test]
    fn empty_peptide() {
        let p = Peptide::default();
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert_eq!(p.to_string(), "");
    }

    #[test]
    fn compares_with_str() {
        let p = Peptide::new(b"MYW".to_vec()).unwrap();
        assert_eq!(p, "MYW");
        assert_eq!(String::from(p), "MYW");
    }
}
