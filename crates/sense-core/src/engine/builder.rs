use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::output::OutputLog;
use super::Disambiguator;
use crate::lexicon::LexicalDatabase;
use crate::preprocess::{CompoundList, PreprocessError, Stoplist};
use crate::relatedness::{Relatedness, RelatednessError, ScorerKind, UnknownScorer};
use crate::settings::{self, Settings, SettingsError};
use crate::wsd::{TraceLevel, TraceLog};

/// Configuration problems detected while building an engine.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("no lexical database supplied")]
    MissingLexicon,

    #[error("no relatedness scorer selected")]
    MissingScorer,

    #[error(transparent)]
    UnknownScorer(#[from] UnknownScorer),

    #[error("scorer {name}: {source}")]
    Scorer {
        name: &'static str,
        source: RelatednessError,
    },

    #[error(transparent)]
    Preprocess(#[from] PreprocessError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("cannot open output file {}: {source}", path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
}

enum ScorerChoice {
    Named {
        name: String,
        config: Option<PathBuf>,
    },
    Instance(Box<dyn Relatedness + Send>),
}

enum Source<T> {
    Loaded(T),
    File(PathBuf),
}

/// Collects engine configuration; every file is read in `build`.
#[derive(Default)]
pub struct EngineBuilder {
    lexicon: Option<Arc<dyn LexicalDatabase>>,
    scorer: Option<ScorerChoice>,
    compounds: Option<Source<CompoundList>>,
    stoplist: Option<Source<Stoplist>>,
    output: Option<PathBuf>,
    settings: Settings,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lexicon(mut self, lexicon: Arc<dyn LexicalDatabase>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Select a built-in scorer by registry name (`pairs`, `lesk`).
    pub fn scorer(mut self, name: &str) -> Self {
        let config = match self.scorer.take() {
            Some(ScorerChoice::Named { config, .. }) => config,
            _ => None,
        };
        self.scorer = Some(ScorerChoice::Named {
            name: name.to_string(),
            config,
        });
        self
    }

    /// Config file handed to the named scorer. Ignored for injected scorers.
    pub fn scorer_config(mut self, path: impl Into<PathBuf>) -> Self {
        let path = Some(path.into());
        match &mut self.scorer {
            Some(ScorerChoice::Named { config, .. }) => *config = path,
            Some(ScorerChoice::Instance(_)) => {}
            None => {
                self.scorer = Some(ScorerChoice::Named {
                    name: String::new(),
                    config: path,
                })
            }
        }
        self
    }

    pub fn with_scorer(mut self, scorer: Box<dyn Relatedness + Send>) -> Self {
        self.scorer = Some(ScorerChoice::Instance(scorer));
        self
    }

    pub fn compounds(mut self, list: CompoundList) -> Self {
        self.compounds = Some(Source::Loaded(list));
        self
    }

    pub fn compounds_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.compounds = Some(Source::File(path.into()));
        self
    }

    pub fn stoplist(mut self, list: Stoplist) -> Self {
        self.stoplist = Some(Source::Loaded(list));
        self
    }

    pub fn stoplist_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.stoplist = Some(Source::File(path.into()));
        self
    }

    /// Append one line per input token to `path` after every call.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Override one default by name, e.g. `set("pair_threshold", "1")`.
    pub fn set(mut self, name: &str, value: &str) -> Result<Self, SettingsError> {
        self.settings.set(name, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<Disambiguator, BuildError> {
        let lexicon = self.lexicon.ok_or(BuildError::MissingLexicon)?;
        settings::validate(&self.settings)?;

        let mut scorer = match self.scorer {
            None => return Err(BuildError::MissingScorer),
            Some(ScorerChoice::Named { name, .. }) if name.is_empty() => {
                return Err(BuildError::MissingScorer)
            }
            Some(ScorerChoice::Named { name, config }) => {
                let kind: ScorerKind = name.parse()?;
                kind.build(Arc::clone(&lexicon), config.as_deref())
                    .map_err(|source| BuildError::Scorer {
                        name: kind.name(),
                        source,
                    })?
            }
            Some(ScorerChoice::Instance(scorer)) => scorer,
        };

        let compounds = match self.compounds {
            Some(Source::Loaded(list)) => Some(list),
            Some(Source::File(path)) => Some(CompoundList::open(&path)?),
            None => None,
        };
        let stoplist = match self.stoplist {
            Some(Source::Loaded(list)) => Some(list),
            Some(Source::File(path)) => Some(Stoplist::open(&path)?),
            None => None,
        };
        let output = match self.output {
            Some(path) => Some(open_output(&path)?),
            None => None,
        };

        let d = &self.settings.disambiguation;
        let rng = match d.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        scorer.set_trace(d.trace.contains(TraceLevel::SCORER));
        let trace = TraceLog::new(d.trace);
        debug!(
            scorer = scorer.name(),
            compounds = compounds.as_ref().map_or(0, CompoundList::len),
            stoplist = stoplist.as_ref().map_or(0, Stoplist::len),
            "engine built"
        );

        Ok(Disambiguator {
            lexicon,
            scorer,
            compounds,
            stoplist,
            output,
            trace,
            settings: self.settings,
            rng,
        })
    }
}

fn open_output(path: &Path) -> Result<OutputLog, BuildError> {
    OutputLog::open(path).map_err(|source| BuildError::Output {
        path: path.to_path_buf(),
        source,
    })
}
