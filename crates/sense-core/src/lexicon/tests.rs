use std::io::Write;

use super::*;

const LEXICON_TOML: &str = r#"
[[entry]]
lemma = "cat"
pos = "n"

  [[entry.sense]]
  count = 18
  gloss = "feline mammal usually having thick soft fur"

  [[entry.sense]]
  count = 1
  gloss = "an informal term for a youth or man"

[[entry]]
lemma = "be"
pos = "v"

  [[entry.sense]]
  count = 900

[[entry]]
lemma = "judge"
pos = "n"

  [[entry.sense]]
  count = 5
  derived = ["judge#v#1"]

[[entry]]
lemma = "judge"
pos = "v"

  [[entry.sense]]
  count = 3

[exceptions.v]
is = ["be"]
was = ["be"]
"#;

fn lexicon() -> MemoryLexicon {
    MemoryLexicon::from_toml_str(LEXICON_TOML).unwrap()
}

#[test]
fn load_from_toml() {
    let lex = lexicon();
    assert_eq!(lex.form_count(), 4);
    let senses = lex.query_senses(&Form::new("cat", Pos::Noun));
    assert_eq!(
        senses,
        vec![Sense::new("cat", Pos::Noun, 1), Sense::new("cat", Pos::Noun, 2)]
    );
}

#[test]
fn valid_forms_follow_exceptions() {
    let lex = lexicon();
    assert_eq!(
        lex.valid_forms("is", Some(Pos::Verb)),
        vec![Form::new("be", Pos::Verb)]
    );
    assert!(lex.valid_forms("is", Some(Pos::Noun)).is_empty());
}

#[test]
fn valid_forms_detach_suffixes() {
    let lex = lexicon();
    assert_eq!(lex.valid_forms("Cats", None), vec![Form::new("cat", Pos::Noun)]);
}

#[test]
fn valid_forms_across_all_pos_in_order() {
    let lex = lexicon();
    assert_eq!(
        lex.valid_forms("judge", None),
        vec![Form::new("judge", Pos::Noun), Form::new("judge", Pos::Verb)]
    );
}

#[test]
fn unknown_word_has_no_forms() {
    let lex = lexicon();
    assert!(lex.valid_forms("zyzzyva", None).is_empty());
    assert!(lex.valid_forms("", None).is_empty());
}

#[test]
fn frequency_and_gloss() {
    let lex = lexicon();
    assert_eq!(lex.frequency(&Sense::new("cat", Pos::Noun, 1)), 18);
    assert_eq!(lex.frequency(&Sense::new("cat", Pos::Noun, 9)), 0);
    assert!(lex
        .gloss(&Sense::new("cat", Pos::Noun, 1))
        .unwrap()
        .contains("feline"));
    assert_eq!(lex.gloss(&Sense::new("be", Pos::Verb, 1)), None);
}

#[test]
fn derivational_links() {
    let lex = lexicon();
    assert_eq!(
        lex.query_derivational(&Form::new("judge", Pos::Noun)),
        vec![Sense::new("judge", Pos::Verb, 1)]
    );
    assert!(lex
        .query_derivational(&Form::new("judge", Pos::Verb))
        .is_empty());
}

#[test]
fn programmatic_insert() {
    let mut lex = MemoryLexicon::new();
    let s1 = lex.insert("New York", Pos::Noun, 10, None);
    let s2 = lex.insert("new york", Pos::Noun, 2, None);
    assert_eq!(s1.to_string(), "new_york#n#1");
    assert_eq!(s2.index, 2);
    assert!(!lex.add_derivation(&Sense::new("missing", Pos::Noun, 1), s1));
}

#[test]
fn error_unknown_pos() {
    let toml = r#"
[[entry]]
lemma = "cat"
pos = "q"
"#;
    let err = MemoryLexicon::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, LexiconError::UnknownPos { .. }));
}

#[test]
fn error_unknown_field() {
    let err = MemoryLexicon::from_toml_str("colour = 1\n").unwrap_err();
    assert!(matches!(err, LexiconError::Parse(_)));
}

#[test]
fn error_bad_derived_sense() {
    let toml = r#"
[[entry]]
lemma = "cat"
pos = "n"
  [[entry.sense]]
  derived = ["not-a-sense"]
"#;
    assert!(matches!(
        MemoryLexicon::from_toml_str(toml),
        Err(LexiconError::Parse(_))
    ));
}

#[test]
fn open_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LEXICON_TOML.as_bytes()).unwrap();
    let lex = MemoryLexicon::open(file.path()).unwrap();
    assert_eq!(lex.form_count(), 4);
}

#[test]
fn open_missing_file() {
    let err = MemoryLexicon::open(std::path::Path::new("/nonexistent/lexicon.toml")).unwrap_err();
    assert!(matches!(err, LexiconError::Io(_)));
}
