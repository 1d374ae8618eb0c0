//! Start-codon scanning and six-frame longest peptide search.
//!
//! Every `AUG` is a start, whatever its offset, so one scan of a strand covers
//! its three reading frames. Scanning the reverse complement as well covers all
//! six.

use crate::code::{GeneticCode, START_CODON};
use crate::error::BioResult;
use crate::seq::{Peptide, ReadingFrame, RnaSeq, Strand};
use crate::translate::translate_bytes;

/// A start codon and the peptide translated from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Orf {
    pub frame: ReadingFrame,
    pub peptide: Peptide,
    /// False when the sequence ran out before a stop codon.
    pub stopped: bool,
}

impl Orf {
    /// Position of the start codon's first base on the forward strand.
    pub fn forward_start(&self, seq_len: usize) -> usize {
        match self.frame.strand {
            Strand::Forward => self.frame.offset,
            Strand::Reverse => seq_len - 1 - self.frame.offset,
        }
    }
}

/// One ORF per start codon in `seq`, in order of start position. `seq` is
/// taken as already oriented; `strand` only labels the results.
pub fn scan_orfs(seq: &RnaSeq, strand: Strand, code: &GeneticCode) -> BioResult<Vec<Orf>> {
    let bytes = seq.as_bytes();
    seq.find_iter(START_CODON)
        .map(|start| -> BioResult<Orf> {
            let translation = translate_bytes(&bytes[start..], code)?;
            Ok(Orf {
                frame: ReadingFrame::new(strand, start),
                peptide: translation.peptide,
                stopped: translation.stopped,
            })
        })
        .collect()
}

/// Forward ORFs followed by reverse-complement ORFs.
pub fn six_frame_orfs(seq: &RnaSeq, code: &GeneticCode) -> BioResult<Vec<Orf>> {
    let mut orfs = scan_orfs(seq, Strand::Forward, code)?;
    orfs.extend(scan_orfs(&seq.reverse_complement()?, Strand::Reverse, code)?);
    Ok(orfs)
}

/// The first ORF with the longest peptide.
pub fn longest<'a, I>(orfs: I) -> Option<&'a Orf>
where
    I: IntoIterator<Item = &'a Orf>,
{
    orfs.into_iter().fold(None, |best, orf| match best {
        Some(b) if b.peptide.len() >= orf.peptide.len() => Some(b),
        _ => Some(orf),
    })
}

pub fn find_longest_orf(seq: &RnaSeq, code: &GeneticCode) -> BioResult<Option<Orf>> {
    let orfs = six_frame_orfs(seq, code)?;
    Ok(longest(&orfs).cloned())
}

/// Peptides for every `AUG` in `sequence`, forward strand only.
pub fn scan_all_frames(sequence: &str, code: &GeneticCode) -> BioResult<Vec<Peptide>> {
    let seq: RnaSeq = sequence.parse()?;
    Ok(scan_orfs(&seq, Strand::Forward, code)?
        .into_iter()
        .map(|orf| orf.peptide)
        .collect())
}

/// Longest peptide over all six reading frames, or an empty peptide when
/// there is no start codon on either strand.
pub fn find_longest_peptide(sequence: &str, code: &GeneticCode) -> BioResult<Peptide> {
    let seq: RnaSeq = sequence.parse()?;
    Ok(find_longest_orf(&seq, code)?
        .map(|orf| orf.peptide)
        .unwrap_or_default())
}
