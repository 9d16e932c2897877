use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use sense_engine::lexicon::{LexiconError, MemoryLexicon};
use sense_engine::settings::{Settings, SettingsError};
use sense_engine::{Assignment, BuildError, Disambiguator, Scheme};

use crate::text::read_sentences;

/// Command-line options for one `disambiguate` run.
#[derive(Debug, Clone, Default)]
pub struct DisambiguateOptions {
    pub lexicon: String,
    /// Read from standard input when absent.
    pub input: Option<String>,
    pub tagged: bool,
    pub window: Option<usize>,
    pub scheme: Option<Scheme>,
    pub scorer: String,
    pub scorer_config: Option<String>,
    pub pair_threshold: Option<f64>,
    pub context_threshold: Option<f64>,
    pub trace: Option<u8>,
    pub coerce: bool,
    pub stoplist: Option<String>,
    pub compounds: Option<String>,
    pub outfile: Option<String>,
    pub settings: Option<String>,
    /// `name=value` pairs applied on top of the settings file.
    pub overrides: Vec<String>,
    pub raw: bool,
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("lexicon: {0}")]
    Lexicon(#[from] LexiconError),
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Settings file (or defaults), then `--set` overrides, then dedicated flags.
pub fn resolve_settings(opts: &DisambiguateOptions) -> Result<Settings, SettingsError> {
    let mut s = match &opts.settings {
        Some(path) => Settings::open(Path::new(path))?,
        None => Settings::default(),
    };
    for assignment in &opts.overrides {
        s.set_pair(assignment)?;
    }

    let d = &mut s.disambiguation;
    if let Some(window) = opts.window {
        d.window = window;
    }
    if let Some(scheme) = opts.scheme {
        d.scheme = scheme;
    }
    if let Some(t) = opts.pair_threshold {
        d.pair_threshold = t;
    }
    if let Some(t) = opts.context_threshold {
        d.context_threshold = t;
    }
    if opts.coerce {
        d.coerce_pos = true;
    }
    if let Some(bits) = opts.trace {
        s.set("trace", &bits.to_string())?;
    }
    Ok(s)
}

pub fn build_engine(opts: &DisambiguateOptions) -> Result<Disambiguator, SetupError> {
    let lexicon = MemoryLexicon::open(Path::new(&opts.lexicon))?;
    let mut builder = Disambiguator::builder()
        .lexicon(Arc::new(lexicon))
        .scorer(&opts.scorer)
        .settings(resolve_settings(opts)?);
    if let Some(path) = &opts.scorer_config {
        builder = builder.scorer_config(path);
    }
    if let Some(path) = &opts.stoplist {
        builder = builder.stoplist_file(path);
    }
    if let Some(path) = &opts.compounds {
        builder = builder.compounds_file(path);
    }
    if let Some(path) = &opts.outfile {
        builder = builder.output(path);
    }
    Ok(builder.build()?)
}

/// One output line: space-separated, or a JSON array of strings.
pub fn format_assignments(
    assignments: &[Assignment],
    json: bool,
) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string(assignments);
    }
    Ok(assignments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" "))
}

pub fn disambiguate(opts: &DisambiguateOptions) {
    let mut engine = die!(build_engine(opts), "Error: {}");
    let content = match &opts.input {
        Some(path) => die!(fs::read_to_string(path), "Error reading {path}: {}"),
        None => die!(io::read_to_string(io::stdin()), "Error reading input: {}"),
    };
    let request = engine.request().tagged(opts.tagged);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for sentence in read_sentences(&content, opts.raw) {
        let result = die!(engine.disambiguate(&sentence, &request), "Error: {}");
        let line = die!(format_assignments(&result, opts.json), "Error: {}");
        die!(writeln!(out, "{line}"), "Error writing output: {}");
        let trace = engine.drain_trace();
        if !trace.is_empty() {
            eprint!("{trace}");
        }
    }
}
