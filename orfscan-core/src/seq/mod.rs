pub mod peptide;
pub mod rna;
pub mod traits;

pub use peptide::Peptide;
pub use rna::RnaSeq;

use std::fmt;

/// Orientation a reading frame is read in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn symbol(self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Where translation begins: a strand plus an offset into the sequence as
/// read on that strand (so reverse offsets index the reverse complement).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReadingFrame {
    pub strand: Strand,
    pub offset: usize,
}

impl ReadingFrame {
    pub fn new(strand: Strand, offset: usize) -> Self {
        Self { strand, offset }
    }

    pub fn frame_index(&self) -> usize {
        self.offset % 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_wraps() {
        assert_eq!(ReadingFrame::new(Strand::Forward, 0).frame_index(), 0);
        assert_eq!(ReadingFrame::new(Strand::Forward, 4).frame_index(), 1);
        assert_eq!(ReadingFrame::new(Strand::Reverse, 8).frame_index(), 2);
    }

    #[test]
    fn strand_display() {
        assert_eq!(Strand::Forward.to_string(), "+");
        assert_eq!(Strand::Reverse.to_string(), "-");
    }
}
