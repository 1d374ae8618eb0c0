use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use orfscan_core::io::csv::{read_genetic_code, write_genetic_code};
use orfscan_core::io::normalize_seq_bytes;
use orfscan_core::orf::{longest, six_frame_orfs};
use orfscan_core::translate::{translate_frame, translate_orf};
use orfscan_core::{GeneticCode, RnaSeq};

#[derive(Debug, Parser, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// RNA sequence (ACGU, either case). Whitespace is ignored.
    #[arg(required_unless_present = "dump_code")]
    pub sequence: Option<String>,

    /// CSV genetic code with `codon` and `amino_acid` columns. Defaults to the standard code.
    #[arg(long = "code")]
    pub code: Option<PathBuf>,

    /// Print every ORF on both strands before the longest peptide.
    #[arg(long = "all")]
    pub all: bool,

    /// Translate from the first base only instead of searching six frames.
    #[arg(long = "translate", conflicts_with = "all")]
    pub translate: bool,

    /// Translate a whole reading frame (0, 1 or 2), printing stop codons as `*`.
    #[arg(long = "frame", value_name = "N", conflicts_with_all = ["all", "translate"])]
    pub frame: Option<usize>,

    /// Write the genetic code in use as CSV and exit.
    #[arg(long = "dump-code")]
    pub dump_code: bool,
}

fn load_code(path: Option<&PathBuf>) -> Result<GeneticCode> {
    match path {
        Some(path) => read_genetic_code(path)
            .with_context(|| format!("loading genetic code from {}", path.display())),
        None => Ok(GeneticCode::standard()),
    }
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let code = load_code(cli.code.as_ref())?;

    if cli.dump_code {
        write_genetic_code(&code, &mut *out).context("writing genetic code")?;
        return Ok(());
    }

    let raw = cli.sequence.as_deref().unwrap_or_default();
    let seq = RnaSeq::new(normalize_seq_bytes(raw)).context("parsing RNA sequence")?;

    if cli.translate {
        let translation = translate_orf(&seq, &code)?;
        writeln!(out, "{}", translation.peptide)?;
        return Ok(());
    }

    if let Some(frame) = cli.frame {
        let protein = translate_frame(&seq, frame, &code).context("translating frame")?;
        writeln!(out, "{protein}")?;
        return Ok(());
    }

    let orfs = six_frame_orfs(&seq, &code)?;
    if cli.all {
        writeln!(out, "strand\toffset\tstart\tframe\tlength\tstopped\tpeptide")?;
        for orf in &orfs {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                orf.frame.strand,
                orf.frame.offset,
                orf.forward_start(seq.len()),
                orf.frame.frame_index(),
                orf.peptide.len(),
                orf.stopped,
                orf.peptide
            )?;
        }
    }

    match longest(&orfs) {
        Some(orf) => writeln!(out, "{}", orf.peptide)?,
        None => writeln!(out)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}
