use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::cli::OutputFormat;
use crate::core::mode::RunMode;
use crate::matching::engine::{LineMatch, MatchEngine, MatchingConfig, DEFAULT_EDIT_THRESHOLD};
use crate::parsing::lines::read_lines;

#[derive(Args)]
pub struct SearchArgs {
    /// Input file, one corpus line per line
    #[arg(required = true)]
    pub input_file: PathBuf,

    /// Pattern file, one pattern per line
    #[arg(required = true)]
    pub pattern_file: PathBuf,

    /// Run mode: 1 exact, 2 substring, 3 edit distance (others fall back to 1)
    #[arg(default_value = "1", allow_hyphen_values = true)]
    pub mode: String,

    /// Maximum edit distance accepted in mode 3
    #[arg(long, default_value_t = DEFAULT_EDIT_THRESHOLD)]
    pub max_distance: usize,

    /// Print the loaded inputs and patterns before the results (text format only)
    #[arg(long)]
    pub echo: bool,
}

/// Everything a run produced, in the shape written as JSON
#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    mode: RunMode,
    config: MatchingConfig,
    input_count: usize,
    pattern_count: usize,
    matches: Vec<LineMatch<'a>>,
}

pub fn run(args: SearchArgs, format: OutputFormat) -> anyhow::Result<()> {
    let corpus = read_lines(&args.input_file).with_context(|| {
        format!("Failed to read input file {}", args.input_file.display())
    })?;
    let patterns = read_lines(&args.pattern_file).with_context(|| {
        format!("Failed to read pattern file {}", args.pattern_file.display())
    })?;

    let mode = RunMode::from_arg(&args.mode);
    let config = MatchingConfig {
        edit_threshold: args.max_distance,
        ..MatchingConfig::default()
    };
    info!(
        %mode,
        inputs = corpus.len(),
        patterns = patterns.len(),
        "Matching"
    );

    let engine = MatchEngine::with_config(mode, config);
    let matches = engine.find_matches(&corpus, &patterns)?;
    info!(matches = matches.len(), "Done");

    let report = SearchReport {
        mode,
        config,
        input_count: corpus.len(),
        pattern_count: patterns.len(),
        matches,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            if args.echo {
                write_echo(&mut out, &corpus, &patterns)?;
            }
            write_text(&mut out, &report)?;
        }
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Tsv => write_tsv(&mut out, &report)?,
    }
    out.flush()?;

    Ok(())
}

fn write_echo<W: Write>(
    out: &mut W,
    corpus: &[Vec<u8>],
    patterns: &[Vec<u8>],
) -> anyhow::Result<()> {
    writeln!(out, "Inputs:")?;
    for (i, line) in corpus.iter().enumerate() {
        write!(out, "line{i}: ")?;
        out.write_all(line)?;
        writeln!(out)?;
    }
    writeln!(out, "Patterns:")?;
    for (i, line) in patterns.iter().enumerate() {
        write!(out, "line{i}: ")?;
        out.write_all(line)?;
        writeln!(out)?;
    }
    writeln!(out, "Results:")?;
    Ok(())
}

/// Matching lines, byte for byte as they appeared in the input file
fn write_text<W: Write>(out: &mut W, report: &SearchReport) -> anyhow::Result<()> {
    for m in &report.matches {
        out.write_all(m.line)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, report: &SearchReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

fn write_tsv<W: Write>(out: &mut W, report: &SearchReport) -> anyhow::Result<()> {
    writeln!(out, "pattern_index\tline_index\tpattern\tline\tdistance")?;
    for m in &report.matches {
        write!(out, "{}\t{}\t", m.pattern_index, m.line_index)?;
        write_tsv_field(out, m.pattern)?;
        out.write_all(b"\t")?;
        write_tsv_field(out, m.line)?;
        match m.distance {
            Some(d) => writeln!(out, "\t{d}")?,
            None => writeln!(out, "\t")?,
        }
    }
    Ok(())
}

/// Write one TSV cell, escaping backslash, tab, CR and LF as `\\`, `\t`, `\r`, `\n`
fn write_tsv_field<W: Write>(out: &mut W, field: &[u8]) -> std::io::Result<()> {
    let mut start = 0;
    for (i, &byte) in field.iter().enumerate() {
        let escaped: &[u8] = match byte {
            b'\\' => b"\\\\",
            b'\t' => b"\\t",
            b'\r' => b"\\r",
            b'\n' => b"\\n",
            _ => continue,
        };
        out.write_all(&field[start..i])?;
        out.write_all(escaped)?;
        start = i + 1;
    }
    out.write_all(&field[start..])
}
