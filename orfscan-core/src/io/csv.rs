use crate::code::GeneticCode;
use crate::error::{BioError, BioResult};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

pub const CODON_COLUMN: &str = "codon";
pub const AMINO_ACID_COLUMN: &str = "amino_acid";

/// Load a genetic code from a CSV file with `codon` and `amino_acid` columns.
pub fn read_genetic_code(path: impl AsRef<Path>) -> BioResult<GeneticCode> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();
    let file = File::open(path_ref).map_err(|e| BioError::CsvParse {
        path: path_str.clone(),
        source: csv::Error::from(e),
    })?;
    read_genetic_code_from(file, &path_str)
}

/// Same as [`read_genetic_code`]; `source` names the input in error messages.
pub fn read_genetic_code_from<R: Read>(reader: R, source: &str) -> BioResult<GeneticCode> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| BioError::CsvParse {
            path: source.to_string(),
            source: e,
        })?
        .clone();
    let codon_idx = resolve_column(CODON_COLUMN, &headers, source)?;
    let aa_idx = resolve_column(AMINO_ACID_COLUMN, &headers, source)?;

    let mut entries: Vec<(String, String)> = Vec::with_capacity(64);
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| BioError::CsvParse {
            path: source.to_string(),
            source: e,
        })?;
        let row = row_idx + 1;

        let field = |idx: usize, column: &str| {
            record
                .get(idx)
                .map(str::to_string)
                .ok_or_else(|| BioError::CsvMissingField {
                    row,
                    column: column.to_string(),
                    path: source.to_string(),
                })
        };
        entries.push((field(codon_idx, CODON_COLUMN)?, field(aa_idx, AMINO_ACID_COLUMN)?));
    }

    GeneticCode::new(entries).map_err(|e| BioError::CsvInvalidCode {
        path: source.to_string(),
        source: Box::new(e),
    })
}

/// Write `code` as CSV in ACGU codon order, readable by [`read_genetic_code_from`].
pub fn write_genetic_code<W: Write>(code: &GeneticCode, writer: W) -> BioResult<()> {
    let to_err = |e: csv::Error| BioError::CsvParse {
        path: "<output>".to_string(),
        source: e,
    };
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer
        .write_record([CODON_COLUMN, AMINO_ACID_COLUMN])
        .map_err(to_err)?;
    for (codon, residue) in code.entries() {
        writer
            .write_record([&codon[..], &[residue.as_byte()][..]])
            .map_err(to_err)?;
    }
    writer
        .flush()
        .map_err(|e| to_err(csv::Error::from(e)))
}

fn resolve_column(name: &str, headers: &StringRecord, path: &str) -> BioResult<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| BioError::CsvMissingColumn {
            name: name.to_string(),
            headers: headers.iter().map(|s| s.to_string()).collect(),
            path: path.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Residue;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn write_temp_csv(contents: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("orfscan_code_test_{nanos}.csv"));
        fs::write(&path, contents).unwrap();
        path
    }

    fn standard_csv() -> String {
        let mut out = Vec::new();
        write_genetic_code(&GeneticCode::standard(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn write_then_read_standard() {
        let text = standard_csv();
        assert!(text.starts_with("codon,amino_acid\nAAA,K\n"));
        assert_eq!(text.lines().count(), 65);
        let code = read_genetic_code_from(text.as_bytes(), "<memory>").unwrap();
        assert_eq!(code, GeneticCode::standard());
    }

    #[test]
    fn read_from_path() {
        let path = write_temp_csv(&standard_csv());
        let code = read_genetic_code(&path).unwrap();
        assert_eq!(code.get(b"AUG").unwrap(), Residue::AminoAcid(b'M'));
        fs::remove_file(path).ok();
    }

    #[test]
    fn columns_in_any_order_with_comments() {
        let mut text = String::from("# swapped columns\namino_acid,codon\n");
        for (codon, residue) in GeneticCode::standard().entries() {
            text.push_str(&format!(
                "{}, {}\n",
                residue.as_byte() as char,
                std::str::from_utf8(&codon).unwrap()
            ));
        }
        let code = read_genetic_code_from(text.as_bytes(), "<memory>").unwrap();
        assert_eq!(code, GeneticCode::standard());
    }

    #[test]
    fn missing_column_name() {
        let err = read_genetic_code_from("codon,aa\nAUG,M\n".as_bytes(), "<memory>").unwrap_err();
        match err {
            BioError::CsvMissingColumn { name, .. } => assert_eq!(name, "amino_acid"),
            other => panic!("expected missing column error, got {other:?}"),
        }
    }

    #[test]
    fn missing_field_error() {
        let err = read_genetic_code_from("codon,amino_acid\nAUG\n".as_bytes(), "<memory>")
            .unwrap_err();
        match err {
            BioError::CsvMissingField { row, .. } => assert_eq!(row, 1),
            other => panic!("expected missing field error, got {other:?}"),
        }
    }

    #[test]
    fn incomplete_table() {
        let text: String = standard_csv()
            .lines()
            .filter(|line| !line.starts_with("UGG"))
            .map(|line| format!("{line}\n"))
            .collect();
        let err = read_genetic_code_from(text.as_bytes(), "table.csv").unwrap_err();
        match err {
            BioError::CsvInvalidCode { path, source } => {
                assert_eq!(path, "table.csv");
                assert!(matches!(
                    *source,
                    BioError::IncompleteGeneticCode { ref codon } if codon == "UGG"
                ));
            }
            other => panic!("expected invalid code error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("orfscan_code_test_does_not_exist.csv");
        assert!(matches!(
            read_genetic_code(&path),
            Err(BioError::CsvParse { .. })
        ));
    }
}
