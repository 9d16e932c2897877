use std::path::PathBuf;

use clap::{Parser, Subcommand};

use sense_cli::commands::disambiguate_ops::{self, DisambiguateOptions};
use sense_cli::commands::{config_ops, lexicon_ops};
use sense_engine::Scheme;

#[derive(Parser)]
#[command(name = "senserelate", about = "Word-sense disambiguation by context relatedness")]
struct Cli {
    /// Write structured engine diagnostics to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assign a sense to every word of every input sentence
    Disambiguate {
        /// Path to the lexicon TOML file
        lexicon: String,
        /// Input file, one sentence per line (standard input if omitted)
        input: Option<String>,
        /// Tokens are word/TAG pairs
        #[arg(long)]
        tagged: bool,
        /// Context words on each side of the target
        #[arg(short, long)]
        window: Option<usize>,
        /// normal, sense1 or random
        #[arg(long)]
        scheme: Option<Scheme>,
        /// Relatedness scorer: pairs or lesk
        #[arg(long, default_value = "lesk")]
        scorer: String,
        /// Config file passed to the scorer
        #[arg(long)]
        scorer_config: Option<String>,
        /// Minimum pair score (exclusive) for a context word to contribute
        #[arg(long)]
        pair_threshold: Option<f64>,
        /// Minimum total (inclusive) for a sense to be chosen
        #[arg(long)]
        context_threshold: Option<f64>,
        /// Trace bitmask: 1 window, 2 winner, 4 all scores, 8 scorer
        #[arg(long)]
        trace: Option<u8>,
        /// Coerce context senses to the target's part of speech
        #[arg(long)]
        coerce: bool,
        /// File of regular expressions; matching words are skipped
        #[arg(long)]
        stoplist: Option<String>,
        /// File of multi-word expressions, one per line
        #[arg(long)]
        compounds: Option<String>,
        /// Append per-token results to this file
        #[arg(long)]
        outfile: Option<String>,
        /// Settings TOML file
        #[arg(long)]
        settings: Option<String>,
        /// Override a setting (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        overrides: Vec<String>,
        /// Input is running text; split it into sentences and tokens
        #[arg(long)]
        raw: bool,
        /// Print each sentence as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show the forms and numbered senses of a word
    Senses {
        /// Path to the lexicon TOML file
        lexicon: String,
        word: String,
        /// Restrict to one part of speech (n, v, a, r)
        #[arg(long)]
        pos: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Score two senses (word#pos#index) and print the scorer's trace
    Relate {
        /// Path to the lexicon TOML file
        lexicon: String,
        a: String,
        b: String,
        #[arg(long, default_value = "lesk")]
        scorer: String,
        #[arg(long)]
        scorer_config: Option<String>,
    },

    /// Print the default settings TOML
    SettingsExport,

    /// Check a settings TOML file
    SettingsValidate {
        /// Path to the settings TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _trace_guard = cli.log_dir.as_deref().map(sense_engine::init_tracing);

    match cli.command {
        Command::Disambiguate {
            lexicon,
            input,
            tagged,
            window,
            scheme,
            scorer,
            scorer_config,
            pair_threshold,
            context_threshold,
            trace,
            coerce,
            stoplist,
            compounds,
            outfile,
            settings,
            overrides,
            raw,
            json,
        } => disambiguate_ops::disambiguate(&DisambiguateOptions {
            lexicon,
            input,
            tagged,
            window,
            scheme,
            scorer,
            scorer_config,
            pair_threshold,
            context_threshold,
            trace,
            coerce,
            stoplist,
            compounds,
            outfile,
            settings,
            overrides,
            raw,
            json,
        }),
        Command::Senses {
            lexicon,
            word,
            pos,
            json,
        } => lexicon_ops::senses(&lexicon, &word, pos.as_deref(), json),
        Command::Relate {
            lexicon,
            a,
            b,
            scorer,
            scorer_config,
        } => lexicon_ops::relate(&lexicon, &scorer, scorer_config.as_deref(), &a, &b),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
