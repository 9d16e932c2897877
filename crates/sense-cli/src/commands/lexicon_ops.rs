use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use sense_engine::lexicon::{LexicalDatabase, MemoryLexicon};
use sense_engine::relatedness::ScorerKind;
use sense_engine::{Form, Pos, Sense};

#[derive(Debug, Serialize)]
pub struct SenseRow {
    pub sense: Sense,
    pub frequency: u32,
    pub gloss: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FormSenses {
    pub form: String,
    pub senses: Vec<SenseRow>,
}

/// Every valid form of `word` with its numbered senses.
pub fn lookup(lexicon: &dyn LexicalDatabase, word: &str, pos: Option<Pos>) -> Vec<FormSenses> {
    lexicon
        .valid_forms(word, pos)
        .into_iter()
        .map(|form: Form| FormSenses {
            senses: lexicon
                .query_senses(&form)
                .into_iter()
                .map(|sense| SenseRow {
                    frequency: lexicon.frequency(&sense),
                    gloss: lexicon.gloss(&sense).map(str::to_string),
                    sense,
                })
                .collect(),
            form: form.to_string(),
        })
        .collect()
}

pub fn format_lookup(forms: &[FormSenses]) -> String {
    let width = forms
        .iter()
        .flat_map(|f| &f.senses)
        .map(|r| r.sense.to_string().width())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for form in forms {
        out.push_str(&form.form);
        out.push('\n');
        for row in &form.senses {
            let label = row.sense.to_string();
            let pad = " ".repeat(width - label.width());
            out.push_str(&format!("  {label}{pad}  {:>6}", row.frequency));
            if let Some(gloss) = &row.gloss {
                out.push_str("  ");
                out.push_str(gloss);
            }
            out.push('\n');
        }
    }
    out
}

pub fn senses(lexicon_file: &str, word: &str, pos: Option<&str>, json: bool) {
    let lexicon = die!(
        MemoryLexicon::open(Path::new(lexicon_file)),
        "Error opening lexicon: {}"
    );
    let pos = pos.map(|code| {
        die!(
            Pos::from_code(code).ok_or(format!("{code:?} (expected n, v, a or r)")),
            "Unknown part of speech {}"
        )
    });
    let forms = lookup(&lexicon, word, pos);
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&forms), "Error: {}"));
    } else if forms.is_empty() {
        println!("{word}: not in lexicon");
    } else {
        print!("{}", format_lookup(&forms));
    }
}

pub fn relate(lexicon_file: &str, scorer: &str, config: Option<&str>, a: &str, b: &str) {
    let lexicon = die!(
        MemoryLexicon::open(Path::new(lexicon_file)),
        "Error opening lexicon: {}"
    );
    let a: Sense = die!(a.parse(), "Error: {}");
    let b: Sense = die!(b.parse(), "Error: {}");
    let kind: ScorerKind = die!(scorer.parse(), "Error: {}");
    let mut scorer = die!(
        kind.build(Arc::new(lexicon), config.map(Path::new)),
        "Error building scorer: {}"
    );
    scorer.set_trace(true);

    match scorer.relatedness(&a, &b) {
        Ok(score) => println!("{a} {b} {score:.4}"),
        Err(e) => println!("{a} {b} failed: {e}"),
    }
    let trace = scorer.trace_string();
    if !trace.is_empty() {
        println!("{trace}");
    }
}
