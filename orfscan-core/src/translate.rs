//! Codon-by-codon translation of a single reading frame.

use crate::code::{GeneticCode, Residue};
use crate::error::{BioError, BioResult};
use crate::seq::{Peptide, RnaSeq};

/// A translated frame and whether it was closed by a stop codon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Translation {
    pub peptide: Peptide,
    pub stopped: bool,
}

/// Translate from position 0 until the first stop codon or until fewer than
/// three bases remain. The stop codon is not part of the peptide, and a
/// trailing partial codon is ignored.
pub fn translate_orf(seq: &RnaSeq, code: &GeneticCode) -> BioResult<Translation> {
    translate_bytes(seq.as_bytes(), code)
}

pub(crate) fn translate_bytes(bytes: &[u8], code: &GeneticCode) -> BioResult<Translation> {
    let mut out = Vec::with_capacity(bytes.len() / 3);
    for codon in bytes.chunks_exact(3) {
        match code.get(codon)? {
            Residue::AminoAcid(aa) => out.push(aa),
            Residue::Stop => {
                return Ok(Translation {
                    peptide: Peptide::from_bytes_unchecked(out),
                    stopped: true,
                })
            }
        }
    }
    Ok(Translation {
        peptide: Peptide::from_bytes_unchecked(out),
        stopped: false,
    })
}

/// Translate `sequence` (either case) from its first base; see [`translate_orf`].
pub fn translate(sequence: &str, code: &GeneticCode) -> BioResult<Peptide> {
    let seq: RnaSeq = sequence.parse()?;
    Ok(translate_orf(&seq, code)?.peptide)
}

/// Translate a whole frame without stopping. Stop codons appear as `*`.
pub fn translate_frame(seq: &RnaSeq, frame: usize, code: &GeneticCode) -> BioResult<String> {
    if frame > 2 {
        return Err(BioError::InvalidFrame { frame });
    }
    let bytes = seq.as_bytes().get(frame..).unwrap_or_default();
    let mut out = String::with_capacity(bytes.len() / 3);
    for codon in bytes.chunks_exact(3) {
        out.push(code.get(codon)?.as_byte() as char);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rna(s: &str) -> RnaSeq {
        s.parse().unwrap()
    }

    #[test]
    fn short_sequences_are_empty() {
        let code = GeneticCode::standard();
        assert_eq!(translate("", &code).unwrap(), "");
        assert_eq!(translate("A", &code).unwrap(), "");
        assert_eq!(translate("AU", &code).unwrap(), "");
    }

    #[test]
    fn leading_stop_is_empty() {
        let code = GeneticCode::standard();
        for s in ["UAA", "UAG", "UGA", "UAAAUGGCC", "ugaAUG"] {
            assert_eq!(translate(s, &code).unwrap(), "", "{s}");
        }
    }

    #[test]
    fn translate_basic() {
        let code = GeneticCode::standard();
        assert_eq!(translate("AUGUAC", &code).unwrap(), "MY");
        assert_eq!(translate("AUGGCC", &code).unwrap(), "MA");
        // Translation does not require a start codon.
        assert_eq!(translate("GCCAUG", &code).unwrap(), "AM");
    }

    #[test]
    fn stops_at_first_stop_codon() {
        let code = GeneticCode::standard();
        let t = translate_orf(&rna("AUGGCCUAGAUG"), &code).unwrap();
        assert_eq!(t.peptide, "MA");
        assert!(t.stopped);
    }

    #[test]
    fn trailing_partial_codon_ignored() {
        let code = GeneticCode::standard();
        let t = translate_orf(&rna("AUGGCCAU"), &code).unwrap();
        assert_eq!(t.peptide, "MA");
        assert!(!t.stopped);
    }

    #[test]
    fn translate_is_case_insensitive() {
        let code = GeneticCode::standard();
        assert_eq!(
            translate("auguacugg", &code).unwrap(),
            translate("AUGUACUGG", &code).unwrap()
        );
    }

    #[test]
    fn translate_rejects_invalid_base() {
        let code = GeneticCode::standard();
        assert!(matches!(
            translate("AUGNNN", &code),
            Err(BioError::InvalidChar { ch: 'N', pos: 3 })
        ));
    }

    #[test]
    fn translate_frame_keeps_stops() {
        let code = GeneticCode::standard();
        let s = rna("AUGUAAGCCA");
        assert_eq!(translate_frame(&s, 0, &code).unwrap(), "M*A");
        assert_eq!(translate_frame(&s, 1, &code).unwrap(), "CKP");
        assert_eq!(translate_frame(&s, 2, &code).unwrap(), "VS");
    }

    #[test]
    fn translate_frame_short_and_invalid() {
        let code = GeneticCode::standard();
        assert_eq!(translate_frame(&rna("A"), 2, &code).unwrap(), "");
        assert!(matches!(
            translate_frame(&rna("AUG"), 3, &code),
            Err(BioError::InvalidFrame { frame: 3 })
        ));
    }

    proptest! {
        #[test]
        fn case_normalization_is_idempotent(
            s in prop::collection::vec(prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'U')], 0..60),
        ) {
            let code = GeneticCode::standard();
            let upper = String::from_utf8(s).unwrap();
            let lower = upper.to_ascii_lowercase();
            prop_assert_eq!(translate(&upper, &code).unwrap(), translate(&lower, &code).unwrap());
        }

        #[test]
        fn peptide_never_contains_stop(
            s in prop::collection::vec(prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'U')], 0..90),
        ) {
            let code = GeneticCode::standard();
            let t = translate_orf(&RnaSeq::new(s.clone()).unwrap(), &code).unwrap();
            prop_assert!(!t.peptide.as_bytes().contains(&b'*'));
            prop_assert!(t.peptide.len() <= s.len() / 3);
        }
    }
}
