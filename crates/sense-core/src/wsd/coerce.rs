use crate::lexicon::LexicalDatabase;
use crate::sense::{Pos, Sense};

/// Drop a `#pos` or `#pos#index` annotation, if any.
fn bare_word(word: &str) -> &str {
    word.split('#').next().unwrap_or(word)
}

/// Candidate senses of `word` restricted to `target`.
///
/// A form of the word already in `target` wins outright and contributes
/// all its senses. Otherwise the derivational links of every form are
/// searched for senses in `target`. Empty if neither route works.
pub fn coerce(lexicon: &dyn LexicalDatabase, word: &str, target: Pos) -> Vec<Sense> {
    let forms = lexicon.valid_forms(bare_word(word), None);

    if let Some(form) = forms.iter().find(|f| f.pos == target) {
        return lexicon.query_senses(form);
    }

    let mut out: Vec<Sense> = Vec::new();
    for form in &forms {
        for derived in lexicon.query_derivational(form) {
            if derived.pos == target && !out.contains(&derived) {
                out.push(derived);
            }
        }
    }
    out
}
