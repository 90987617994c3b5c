pub mod cli;
pub mod config;
pub mod errors;
pub mod streams;

use std::fmt;
use std::io::{BufRead, Write};

use indicatif::{ProgressBar, ProgressStyle};

pub use crate::config::RenameConfig;
pub use crate::errors::RenameError;
use crate::streams::{open_input, open_output};

// Counts from one completed pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceSummary {
    pub headers_replaced: u64,
    pub content_lines: u64,
}

impl fmt::Display for ReplaceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Replaced {} headers, copied {} content lines",
            self.headers_replaced, self.content_lines
        )
    }
}

fn trim_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Copies `sequences` to `output`, writing the next line of `names` in place
/// of every line that starts with `sentinel`.
///
/// Lines are moved as raw bytes with their terminators, so content lines come
/// out byte-identical and replacement lines are written exactly as they appear
/// in `names`. `names` is only read when a header is met: surplus names are
/// left unread, and running out of names is an
/// [`RenameError::ExhaustedReplacementSource`] raised before anything is
/// written for the unmatched header.
pub fn replace_headers<S, N, W>(
    sequences: &mut S,
    names: &mut N,
    output: &mut W,
    sentinel: u8,
) -> Result<ReplaceSummary, RenameError>
where
    S: BufRead + ?Sized,
    N: BufRead + ?Sized,
    W: Write + ?Sized,
{
    replace_headers_with_progress(sequences, names, output, sentinel, &ProgressBar::hidden())
}

/// Same as [`replace_headers`], advancing `progress` once per replaced header.
pub fn replace_headers_with_progress<S, N, W>(
    sequences: &mut S,
    names: &mut N,
    output: &mut W,
    sentinel: u8,
    progress: &ProgressBar,
) -> Result<ReplaceSummary, RenameError>
where
    S: BufRead + ?Sized,
    N: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut summary = ReplaceSummary::default();
    let mut line: Vec<u8> = Vec::with_capacity(1024);
    let mut name: Vec<u8> = Vec::with_capacity(256);

    loop {
        line.clear();
        if sequences.read_until(b'\n', &mut line)? == 0 {
            break; // End of stream
        }

        if line.first() == Some(&sentinel) {
            name.clear();
            if names.read_until(b'\n', &mut name)? == 0 {
                return Err(RenameError::ExhaustedReplacementSource {
                    headers_replaced: summary.headers_replaced,
                });
            }
            log::trace!(
                "{} -> {}",
                String::from_utf8_lossy(trim_newline(&line)),
                String::from_utf8_lossy(trim_newline(&name))
            );
            output.write_all(&name)?;
            summary.headers_replaced += 1;
            progress.inc(1);
        } else {
            output.write_all(&line)?;
            summary.content_lines += 1;
        }
    }

    Ok(summary)
}

fn new_spinner() -> ProgressBar {
    let style = ProgressStyle::with_template("{spinner} {human_pos} headers replaced [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    ProgressBar::new_spinner().with_style(style)
}

/// Opens the three streams named by `config`, runs one pass and finalizes the
/// output. The streams live in this function and are released on every path.
pub fn run(config: &RenameConfig) -> Result<ReplaceSummary, RenameError> {
    config.validate()?;

    let mut sequences = open_input(config.sequence_source_path.as_deref())?;
    let mut names = open_input(Some(config.replacement_source_path.as_str()))?;
    let mut output = open_output(config.output_path.as_deref(), config.gzip_out)?;
    log::debug!(
        "Reading sequences from {}, names from {}, writing to {}",
        config.sequence_source_path.as_deref().unwrap_or("stdin"),
        config.replacement_source_path,
        config.output_path.as_deref().unwrap_or("stdout")
    );

    let progress = if config.progress { new_spinner() } else { ProgressBar::hidden() };

    match replace_headers_with_progress(&mut sequences, &mut names, &mut output, config.sentinel, &progress) {
        Ok(summary) => {
            output.finish()?;
            progress.finish_and_clear();
            Ok(summary)
        }
        Err(e) => {
            // Dropping the output keeps what was written before the failure.
            progress.abandon();
            Err(e)
        }
    }
}
