use tracing::debug;

use crate::lexicon::LexicalDatabase;
use crate::preprocess::Token;
use crate::sense::Sense;

/// Senses available for one token.
///
/// Every variant other than `Senses` means the token cannot be
/// disambiguated and contributes no context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SenseLookup {
    /// Matched the stoplist.
    Stopped,
    /// Punctuation or a word with no valid forms in the lexicon.
    Unknown,
    /// Forms exist but none has a sense.
    Empty,
    Senses(Vec<Sense>),
}

impl SenseLookup {
    pub fn senses(&self) -> Option<&[Sense]> {
        match self {
            SenseLookup::Senses(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.senses().is_none()
    }
}

/// All senses of all morphological forms of `token`, per form in the order
/// the forms were returned.
pub fn enumerate_senses(lexicon: &dyn LexicalDatabase, token: &Token) -> SenseLookup {
    if token.stopped {
        return SenseLookup::Stopped;
    }
    if !token.lookup {
        return SenseLookup::Unknown;
    }
    let forms = lexicon.valid_forms(&token.word, token.pos);
    if forms.is_empty() {
        return SenseLookup::Unknown;
    }
    let senses: Vec<Sense> = forms.iter().flat_map(|f| lexicon.query_senses(f)).collect();
    debug!(word = %token.word, forms = forms.len(), senses = senses.len());
    if senses.is_empty() {
        SenseLookup::Empty
    } else {
        SenseLookup::Senses(senses)
    }
}
