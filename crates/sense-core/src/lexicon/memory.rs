use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{morph, normalize_word, LexicalDatabase, LexiconError};
use crate::sense::{Form, Pos, Sense};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    #[serde(default, rename = "entry")]
    entries: Vec<EntryRecord>,
    /// pos code → inflected form → base forms
    #[serde(default)]
    exceptions: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryRecord {
    lemma: String,
    pos: String,
    #[serde(default, rename = "sense")]
    senses: Vec<SenseRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SenseRecord {
    #[serde(default)]
    count: u32,
    #[serde(default)]
    gloss: Option<String>,
    #[serde(default)]
    derived: Vec<Sense>,
}

#[derive(Debug, Clone, Default)]
struct SenseData {
    count: u32,
    gloss: Option<String>,
    derived: Vec<Sense>,
}

/// HashMap-backed lexical database.
///
/// Senses of a form are stored in insertion order, which is also their
/// index order (sense 1 first).
#[derive(Debug, Default)]
pub struct MemoryLexicon {
    forms: HashMap<Form, Vec<SenseData>>,
    exceptions: HashMap<(Pos, String), Vec<String>>,
}

fn parse_pos(lemma: &str, code: &str) -> Result<Pos, LexiconError> {
    Pos::from_code(code).ok_or_else(|| LexiconError::UnknownPos {
        lemma: lemma.to_string(),
        pos: code.to_string(),
    })
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a lexicon TOML file.
    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile =
            toml::from_str(content).map_err(|e| LexiconError::Parse(e.to_string()))?;

        let mut lex = Self::new();
        for entry in file.entries {
            let pos = parse_pos(&entry.lemma, &entry.pos)?;
            for record in entry.senses {
                let sense = lex.insert(&entry.lemma, pos, record.count, record.gloss.as_deref());
                for target in record.derived {
                    lex.add_derivation(&sense, target);
                }
            }
        }
        for (code, table) in file.exceptions {
            let pos = parse_pos("[exceptions]", &code)?;
            for (inflected, bases) in table {
                for base in bases {
                    lex.add_exception(pos, &inflected, &base);
                }
            }
        }
        Ok(lex)
    }

    /// Append a sense to `lemma#pos` and return its identifier.
    pub fn insert(&mut self, lemma: &str, pos: Pos, count: u32, gloss: Option<&str>) -> Sense {
        let lemma = normalize_word(lemma);
        let senses = self.forms.entry(Form::new(lemma.clone(), pos)).or_default();
        senses.push(SenseData {
            count,
            gloss: gloss.map(str::to_string),
            derived: Vec::new(),
        });
        Sense::new(lemma, pos, senses.len() as u32)
    }

    /// Register an irregular inflection, e.g. `is` → `be` for verbs.
    pub fn add_exception(&mut self, pos: Pos, inflected: &str, base: &str) {
        let bases = self
            .exceptions
            .entry((pos, normalize_word(inflected)))
            .or_default();
        let base = normalize_word(base);
        if !bases.contains(&base) {
            bases.push(base);
        }
    }

    /// Link `from` to a derivationally related sense. Returns `false` if
    /// `from` is not in the lexicon.
    pub fn add_derivation(&mut self, from: &Sense, to: Sense) -> bool {
        match self.sense_data_mut(from) {
            Some(data) => {
                if !data.derived.contains(&to) {
                    data.derived.push(to);
                }
                true
            }
            None => false,
        }
    }

    pub fn form_count(&self) -> usize {
        self.forms.len()
    }

    fn sense_data(&self, sense: &Sense) -> Option<&SenseData> {
        let senses = self.forms.get(&sense.form())?;
        senses.get((sense.index as usize).checked_sub(1)?)
    }

    fn sense_data_mut(&mut self, sense: &Sense) -> Option<&mut SenseData> {
        let senses = self.forms.get_mut(&sense.form())?;
        senses.get_mut((sense.index as usize).checked_sub(1)?)
    }

    fn push_if_known(&self, out: &mut Vec<Form>, lemma: &str, pos: Pos) {
        let form = Form::new(lemma, pos);
        if self.forms.contains_key(&form) && !out.contains(&form) {
            out.push(form);
        }
    }
}

impl LexicalDatabase for MemoryLexicon {
    fn valid_forms(&self, word: &str, pos: Option<Pos>) -> Vec<Form> {
        let word = normalize_word(word);
        if word.is_empty() {
            return Vec::new();
        }
        let parts: &[Pos] = match pos {
            Some(ref p) => std::slice::from_ref(p),
            None => &Pos::ALL,
        };

        let mut out = Vec::new();
        for &p in parts {
            if let Some(bases) = self.exceptions.get(&(p, word.clone())) {
                for base in bases {
                    self.push_if_known(&mut out, base, p);
                }
            }
            self.push_if_known(&mut out, &word, p);
            for candidate in morph::detach(&word, p) {
                self.push_if_known(&mut out, &candidate, p);
            }
        }
        out
    }

    fn query_senses(&self, form: &Form) -> Vec<Sense> {
        let Some(senses) = self.forms.get(form) else {
            return Vec::new();
        };
        (1..=senses.len() as u32)
            .map(|i| Sense::new(form.lemma.clone(), form.pos, i))
            .collect()
    }

    fn frequency(&self, sense: &Sense) -> u32 {
        self.sense_data(sense).map(|d| d.count).unwrap_or(0)
    }

    fn query_derivational(&self, form: &Form) -> Vec<Sense> {
        let Some(senses) = self.forms.get(form) else {
            return Vec::new();
        };
        let mut out: Vec<Sense> = Vec::new();
        for data in senses {
            for d in &data.derived {
                if !out.contains(d) {
                    out.push(d.clone());
                }
            }
        }
        out
    }

    fn gloss(&self, sense: &Sense) -> Option<&str> {
        self.sense_data(sense)?.gloss.as_deref()
    }
}
