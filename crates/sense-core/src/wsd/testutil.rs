//! Shared fixture: a small lexicon and a pair table under which
//! "my cat is a wise cat" resolves to fixed senses.

use std::sync::Arc;

use crate::lexicon::{LexicalDatabase, MemoryLexicon};
use crate::relatedness::PairTableScorer;

pub(crate) const TEST_LEXICON: &str = r#"
[[entry]]
lemma = "cat"
pos = "n"
[[entry.sense]]
count = 18
gloss = "feline mammal usually having thick soft fur"
[[entry.sense]]
count = 3
gloss = "an informal term for a youth or man"
[[entry.sense]]
count = 2
gloss = "a spiteful woman gossip"
[[entry.sense]]
count = 1
gloss = "any of several large cats typically able to roar"

[[entry]]
lemma = "cat"
pos = "v"
[[entry.sense]]
count = 1
gloss = "beat with a whip"

[[entry]]
lemma = "be"
pos = "v"
[[entry.sense]]
count = 10742
[[entry.sense]]
count = 4
[[entry.sense]]
count = 3

[[entry]]
lemma = "a"
pos = "n"
[[entry.sense]]
count = 4
gloss = "the blood group whose red cells carry the A antigen"
[[entry.sense]]
count = 2
gloss = "the 1st letter of the Roman alphabet"

[[entry]]
lemma = "wise"
pos = "a"
[[entry.sense]]
count = 12
gloss = "having or prompted by wisdom or discernment"
derived = ["wisdom#n#1"]
[[entry.sense]]
count = 3
[[entry.sense]]
count = 2
[[entry.sense]]
count = 1
gloss = "marked by the exercise of good judgment in practical matters"

[[entry]]
lemma = "wisdom"
pos = "n"
[[entry.sense]]
count = 7
gloss = "accumulated knowledge or erudition or enlightenment"

[[entry]]
lemma = "run"
pos = "v"
[[entry.sense]]
count = 20
[[entry.sense]]
count = 11

[[entry]]
lemma = "run"
pos = "n"
[[entry.sense]]
count = 9

[exceptions.v]
is = ["be"]
"#;

/// Scores 2.0 between every pair of the intended senses. The remaining
/// entries either sit at the pair threshold of 1.0 or lose on the total.
pub(crate) const TEST_PAIRS: &str = r#"
[[pair]]
a = "cat#n#4"
b = "be#v#3"
score = 2.0

[[pair]]
a = "cat#n#4"
b = "a#n#2"
score = 2.0

[[pair]]
a = "cat#n#4"
b = "wise#a#4"
score = 2.0

[[pair]]
a = "be#v#3"
b = "a#n#2"
score = 2.0

[[pair]]
a = "be#v#3"
b = "wise#a#4"
score = 2.0

[[pair]]
a = "a#n#2"
b = "wise#a#4"
score = 2.0

[[pair]]
a = "cat#n#1"
b = "be#v#1"
score = 1.0

[[pair]]
a = "cat#n#1"
b = "wise#a#1"
score = 1.5
"#;

pub(crate) const SCENARIO: [&str; 6] = [
    "my/PRP$", "cat/NN", "is/VBZ", "a/DT", "wise/JJ", "cat/NN",
];

pub(crate) const SCENARIO_EXPECTED: [&str; 6] =
    ["my", "cat#n#4", "be#v#3", "a#n#2", "wise#a#4", "cat#n#4"];

pub(crate) fn test_lexicon() -> MemoryLexicon {
    MemoryLexicon::from_toml_str(TEST_LEXICON).unwrap()
}

pub(crate) fn shared_lexicon() -> Arc<dyn LexicalDatabase> {
    Arc::new(test_lexicon())
}

pub(crate) fn test_pairs() -> PairTableScorer {
    PairTableScorer::from_toml_str(TEST_PAIRS).unwrap()
}
