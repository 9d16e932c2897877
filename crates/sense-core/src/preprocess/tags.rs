//! Penn Treebank tag table and contraction expansion.

use crate::sense::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    /// Content word carrying one of the four coarse categories.
    Open(Pos),
    /// Function word (determiner, pronoun, preposition, ...).
    Closed,
    Punctuation,
}

/// One row per tag. Tags not listed carry no information.
pub(crate) static PENN_TAGS: &[(&str, TagClass)] = &[
    ("NN", TagClass::Open(Pos::Noun)),
    ("NNS", TagClass::Open(Pos::Noun)),
    ("NNP", TagClass::Open(Pos::Noun)),
    ("NNPS", TagClass::Open(Pos::Noun)),
    ("VB", TagClass::Open(Pos::Verb)),
    ("VBD", TagClass::Open(Pos::Verb)),
    ("VBG", TagClass::Open(Pos::Verb)),
    ("VBN", TagClass::Open(Pos::Verb)),
    ("VBP", TagClass::Open(Pos::Verb)),
    ("VBZ", TagClass::Open(Pos::Verb)),
    ("JJ", TagClass::Open(Pos::Adjective)),
    ("JJR", TagClass::Open(Pos::Adjective)),
    ("JJS", TagClass::Open(Pos::Adjective)),
    ("RB", TagClass::Open(Pos::Adverb)),
    ("RBR", TagClass::Open(Pos::Adverb)),
    ("RBS", TagClass::Open(Pos::Adverb)),
    ("CC", TagClass::Closed),
    ("CD", TagClass::Closed),
    ("DT", TagClass::Closed),
    ("EX", TagClass::Closed),
    ("IN", TagClass::Closed),
    ("LS", TagClass::Closed),
    ("MD", TagClass::Closed),
    ("PDT", TagClass::Closed),
    ("POS", TagClass::Closed),
    ("PRP", TagClass::Closed),
    ("PRP$", TagClass::Closed),
    ("RP", TagClass::Closed),
    ("SYM", TagClass::Closed),
    ("TO", TagClass::Closed),
    ("UH", TagClass::Closed),
    ("WDT", TagClass::Closed),
    ("WP", TagClass::Closed),
    ("WP$", TagClass::Closed),
    ("WRB", TagClass::Closed),
    (".", TagClass::Punctuation),
    (",", TagClass::Punctuation),
    (":", TagClass::Punctuation),
    ("``", TagClass::Punctuation),
    ("''", TagClass::Punctuation),
    ("(", TagClass::Punctuation),
    (")", TagClass::Punctuation),
    ("-LRB-", TagClass::Punctuation),
    ("-RRB-", TagClass::Punctuation),
    ("#", TagClass::Punctuation),
    ("$", TagClass::Punctuation),
    ("HYPH", TagClass::Punctuation),
    ("NFP", TagClass::Punctuation),
];

/// Classify a source tag. `None` means the tag carries no information
/// (unknown tag, `FW`, `XX`, ...).
pub fn classify(tag: &str) -> Option<TagClass> {
    PENN_TAGS
        .iter()
        .find(|&&(t, _)| t == tag)
        .map(|&(_, class)| class)
}

/// Result of expanding a clitic such as `'re`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    Word(&'static str, Option<Pos>),
    /// The clitic is removed from the context.
    Dropped,
}

/// Expand a token that starts with an apostrophe. Returns `None` when the
/// token is not a known contraction.
pub fn expand_contraction(word: &str, tag: Option<&str>) -> Option<Expansion> {
    let verb = |w: &'static str| Some(Expansion::Word(w, Some(Pos::Verb)));
    match word.to_ascii_lowercase().as_str() {
        "'s" => {
            if tag.is_some_and(|t| t.starts_with('V')) {
                verb("is")
            } else {
                Some(Expansion::Dropped)
            }
        }
        "'re" => verb("are"),
        "'d" => verb("had"),
        "'ll" => verb("will"),
        "'ve" => verb("have"),
        "'m" => verb("am"),
        "'t" => Some(Expansion::Word("not", Some(Pos::Adverb))),
        "'em" => Some(Expansion::Dropped),
        _ => None,
    }
}
