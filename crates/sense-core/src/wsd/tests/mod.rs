use super::*;
use crate::lexicon::LexicalDatabase;
use crate::preprocess::{preprocess, Token};

mod properties;

fn lookups(lexicon: &dyn LexicalDatabase, tokens: &[Token]) -> Vec<SenseLookup> {
    tokens.iter().map(|t| enumerate_senses(lexicon, t)).collect()
}

fn tagged(raw: &[&str]) -> Vec<Token> {
    preprocess(raw, true, None, None)
}
