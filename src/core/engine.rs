use crate::config::GeneratorConfig;
use crate::core::{converter::code_point_to_char, parser::parse_body, types::PinyinDict};
use crate::error::{DictError, LineError, Result};
use crate::fetch::fetch_text;
use crate::persistence::save_to_disk;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Steps of a generation run, in order. There is no way back to an
/// earlier stage; a fatal error ends the run where it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Parsing,
    Writing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Fetching => "fetching",
            Stage::Parsing => "parsing",
            Stage::Writing => "writing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Result of folding a body into a dictionary.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub dict: PinyinDict,
    /// Data lines that were warned about and left out.
    pub skipped: usize,
}

/// Folds every data line of `body` into a dictionary. Later lines overwrite
/// earlier ones for the same character. Bad lines are logged and skipped.
pub fn build_dictionary(body: &str) -> BuildOutcome {
    let mut dict = PinyinDict::new();
    let mut skipped = 0;

    for item in parse_body(body) {
        let outcome = item.and_then(|record| {
            code_point_to_char(record.code_point)
                .map(|ch| (ch, record.variants))
                .ok_or(LineError::NotAScalarValue {
                    line: record.line,
                    code_point: record.code_point,
                })
        });

        match outcome {
            Ok((ch, variants)) => {
                if let Some(previous) = dict.insert(ch, variants) {
                    debug!("Overwriting {} (was {:?})", ch, previous);
                }
            }
            Err(e) => {
                report_line_error(&e);
                skipped += 1;
            }
        }
    }

    BuildOutcome { dict, skipped }
}

fn report_line_error(err: &LineError) {
    if err.is_malformed() {
        warn!(line = err.line(), "{}", err);
    } else {
        error!(line = err.line(), "{}", err);
    }
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub characters: usize,
    pub skipped_lines: usize,
    pub expected_min: usize,
    pub output_path: PathBuf,
}

impl GenerationSummary {
    /// Whether the dictionary reached the expected size.
    pub fn is_complete(&self) -> bool {
        self.characters >= self.expected_min
    }

    fn report(&self) {
        info!("Pinyin dictionary saved to {}", self.output_path.display());
        info!("Total characters processed: {}", self.characters);
        if self.skipped_lines > 0 {
            info!("Skipped {} bad lines", self.skipped_lines);
        }
        if self.is_complete() {
            info!("Pinyin dictionary generated successfully");
        } else {
            warn!(
                "Pinyin dictionary may be incomplete: {} characters, expected at least {}",
                self.characters, self.expected_min
            );
        }
    }
}

/// Runs the fetch -> parse -> write flow once.
pub struct DictGenerator {
    config: GeneratorConfig,
}

impl DictGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Fetches the configured source and regenerates the output file from it.
    pub async fn run(&self) -> Result<GenerationSummary> {
        enter(Stage::Fetching);
        let body = fetch_text(&self.config.source_url)
            .await
            .inspect_err(|e| abort(Stage::Fetching, e))?;
        self.generate_from_body(&body)
    }

    /// Parses `body`, writes the dictionary and reports the count. The size
    /// check runs after the write and never prevents it.
    pub fn generate_from_body(&self, body: &str) -> Result<GenerationSummary> {
        enter(Stage::Parsing);
        let BuildOutcome { dict, skipped } = build_dictionary(body);

        enter(Stage::Writing);
        save_to_disk(&dict, &self.config.output_path).inspect_err(|e| abort(Stage::Writing, e))?;

        let summary = GenerationSummary {
            characters: dict.len(),
            skipped_lines: skipped,
            expected_min: self.config.expected_min_characters,
            output_path: self.config.output_path.clone(),
        };
        summary.report();
        enter(Stage::Done);
        Ok(summary)
    }
}

fn enter(stage: Stage) {
    debug!(%stage, "entering stage");
}

fn abort(stage: Stage, err: &DictError) {
    error!(%stage, "Aborted: {}", err);
}
