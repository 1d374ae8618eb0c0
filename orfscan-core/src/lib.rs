pub mod alphabets;
pub mod code;
pub mod error;
pub mod io;
pub mod orf;
pub mod seq;
pub mod translate;

pub use code::GeneticCode;
pub use error::{BioError, BioResult};
pub use orf::{find_longest_orf, find_longest_peptide, scan_all_frames, six_frame_orfs, Orf};
pub use seq::rna::{complement, reverse, reverse_complement};
pub use seq::{Peptide, ReadingFrame, RnaSeq, Strand};
pub use translate::{translate, translate_frame, Translation};
