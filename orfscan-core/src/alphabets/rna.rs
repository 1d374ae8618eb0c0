use crate::alphabets::Alphabet;
use crate::error::{BioError, BioResult};
use std::sync::LazyLock;

pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGUacgu")
}

/// Pairing partner per byte; 0 marks bytes outside the RNA alphabet.
static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [0u8; 256];
    b"ACGU"
        .iter()
        .zip(b"UGCA".iter())
        .for_each(|(&a, &b)| {
            comp[a as usize] = b;
            comp[a as usize + 32] = b + 32;
        });
    comp
});

#[inline]
pub fn complement(a: u8) -> Option<u8> {
    match COMPLEMENT[a as usize] {
        0 => None,
        b => Some(b),
    }
}

/// Complement every base, failing on the first byte outside ACGU.
pub fn complement_bytes(text: &[u8]) -> BioResult<Vec<u8>> {
    text.iter()
        .enumerate()
        .map(|(pos, &a)| complement(a).ok_or(BioError::InvalidChar { ch: a as char, pos }))
        .collect()
}

pub fn reverse(text: &[u8]) -> Vec<u8> {
    text.iter().rev().copied().collect()
}

/// `complement(reverse(text))`. Error positions refer to the reversed text.
pub fn reverse_complement(text: &[u8]) -> BioResult<Vec<u8>> {
    complement_bytes(&reverse(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_either_case() {
        assert_eq!(alphabet().first_invalid(b"GAUUACA"), None);
        assert_eq!(alphabet().first_invalid(b"gauuaca"), None);
    }

    #[test]
    fn rejects_dna() {
        assert_eq!(alphabet().first_invalid(b"GATTACA"), Some((2, b'T')));
    }

    #[test]
    fn rejects_symbol() {
        assert_eq!(alphabet().first_invalid(b"#"), Some((0, b'#')));
    }

    #[test]
    fn complement_pairs() {
        assert_eq!(complement(b'A'), Some(b'U'));
        assert_eq!(complement(b'U'), Some(b'A'));
        assert_eq!(complement(b'G'), Some(b'C'));
        assert_eq!(complement(b'c'), Some(b'g'));
        assert_eq!(complement(b'N'), None);
        assert_eq!(complement(b'T'), None);
    }

    #[test]
    fn complement_bytes_reports_position() {
        match complement_bytes(b"ACNU") {
            Err(BioError::InvalidChar { ch, pos }) => {
                assert_eq!(ch, 'N');
                assert_eq!(pos, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn reverse_then_complement() {
        assert_eq!(reverse(b"AUGC"), b"CGUA");
        assert_eq!(complement_bytes(b"AUGC").unwrap(), b"UACG");
        assert_eq!(reverse_complement(b"AUGC").unwrap(), b"GCAU");
        assert!(reverse_complement(b"").unwrap().is_empty());
    }
}
