use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioError {
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("invalid frame: {frame} (must be 0, 1, or 2)")]
    InvalidFrame { frame: usize },

    #[error("genetic code has no entry for codon {codon}")]
    IncompleteGeneticCode { codon: String },

    #[error("invalid codon {codon:?} (expected 3 bases from ACGU)")]
    InvalidCodon { codon: String },

    #[error("invalid amino acid {value:?} for codon {codon} (expected one letter or '*')")]
    InvalidAminoAcid { codon: String, value: String },

    #[error("codon {codon} is mapped more than once with different values")]
    DuplicateCodon { codon: String },

    #[error("csv missing column '{name}' in {path}. headers: {headers:?}")]
    CsvMissingColumn {
        name: String,
        headers: Vec<String>,
        path: String,
    },

    #[error("csv missing field at row {row} for column {column} in {path}")]
    CsvMissingField {
        row: usize,
        column: String,
        path: String,
    },

    #[error("csv invalid genetic code in {path}: {source}")]
    CsvInvalidCode {
        path: String,
        #[source]
        source: Box<BioError>,
    },

    #[error("csv parse error in {path}: {source}")]
    CsvParse {
        path: String,
        #[source]
        source: csv::Error,
    },
}

pub type BioResult<T> = Result<T, BioError>;
