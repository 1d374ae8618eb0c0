use crate::alphabets::Alphabet;

/// Standard residues plus IUPAC ambiguity letters, selenocysteine and pyrrolysine.
pub fn iupac_alphabet() -> Alphabet {
    Alphabet::new(b"ABCDEFGHIKLMNOPQRSTUVWXYZ")
}
