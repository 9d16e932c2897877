use crate::sense::Pos;

/// Suffix detachment rules: (suffix, replacement).
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn rules(pos: Pos) -> &'static [(&'static str, &'static str)] {
    match pos {
        Pos::Noun => NOUN_RULES,
        Pos::Verb => VERB_RULES,
        Pos::Adjective => ADJECTIVE_RULES,
        Pos::Adverb => &[],
    }
}

/// Candidate base forms obtained by stripping regular inflectional suffixes.
///
/// Candidates are unchecked; the caller filters them against the lexicon.
pub(super) fn detach(word: &str, pos: Pos) -> Vec<String> {
    let mut out = Vec::new();
    for &(suffix, replacement) in rules(pos) {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.is_empty() {
                continue;
            }
            let candidate = format!("{stem}{replacement}");
            if !out.contains(&candidate) {
                out.push(candidate);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noun_plurals() {
        assert!(detach("cats", Pos::Noun).contains(&"cat".to_string()));
        assert!(detach("boxes", Pos::Noun).contains(&"box".to_string()));
        assert!(detach("ponies", Pos::Noun).contains(&"pony".to_string()));
        assert!(detach("women", Pos::Noun).contains(&"woman".to_string()));
    }

    #[test]
    fn verb_inflections() {
        let c = detach("baked", Pos::Verb);
        assert!(c.contains(&"bake".to_string()));
        assert!(c.contains(&"bak".to_string()));
        assert!(detach("walking", Pos::Verb).contains(&"walk".to_string()));
    }

    #[test]
    fn adverbs_have_no_rules() {
        assert!(detach("quickly", Pos::Adverb).is_empty());
    }

    #[test]
    fn bare_suffix_is_not_a_stem() {
        assert!(detach("s", Pos::Noun).is_empty());
    }
}
