//! Raw-text handling: tokenization and sentence boundaries.

/// Words whose trailing period belongs to the word, not the sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "inc", "ltd", "co",
    "corp", "no", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
    "dec", "e.g", "i.e", "u.s", "u.k",
];

/// Clitics split off the end of a word.
const CLITICS: &[&str] = &["'s", "'re", "'d", "'ll", "'ve", "'m"];

const OPENING: &[char] = &['"', '(', '[', '{', '`', '\''];
const CLOSING: &[char] = &['"', ')', ']', '}', ',', ';', ':', '.', '!', '?', '\''];

fn is_sentence_end(token: &str) -> bool {
    matches!(token, "." | "!" | "?")
}

fn is_abbreviation(word: &str) -> bool {
    let Some(stem) = word.strip_suffix('.') else {
        return false;
    };
    let lower = stem.to_lowercase();
    // initials such as "J."
    (stem.chars().count() == 1 && stem.chars().all(char::is_alphabetic))
        || ABBREVIATIONS.contains(&lower.as_str())
}

fn is_bare_clitic(word: &str) -> bool {
    CLITICS
        .iter()
        .chain(&["'t", "'em"])
        .any(|c| word.eq_ignore_ascii_case(c))
}

/// Split `word` into its stem and contraction clitics.
fn split_clitics(word: &str, out: &mut Vec<String>) {
    let lower = word.to_lowercase();
    if let Some(stem) = lower.strip_suffix("n't") {
        if !stem.is_empty() {
            let keep = word.len() - 3;
            let base = match stem {
                "ca" => "can".to_string(),
                "wo" => "will".to_string(),
                "sha" => "shall".to_string(),
                _ => word[..keep].to_string(),
            };
            out.push(base);
            out.push("'t".to_string());
            return;
        }
    }
    for clitic in CLITICS {
        if lower.len() > clitic.len() && lower.ends_with(clitic) {
            let split = word.len() - clitic.len();
            out.push(word[..split].to_string());
            out.push(word[split..].to_string());
            return;
        }
    }
    out.push(word.to_string());
}

/// Whitespace tokenization with surrounding punctuation split into tokens
/// of its own. Abbreviations keep their period.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for chunk in text.split_whitespace() {
        let mut rest = chunk;

        while let Some(c) = rest.chars().next().filter(|c| OPENING.contains(c)) {
            if c == '\'' && is_bare_clitic(rest) {
                break;
            }
            out.push(c.to_string());
            rest = &rest[c.len_utf8()..];
        }

        let mut trailing = Vec::new();
        while let Some(c) = rest.chars().next_back().filter(|c| CLOSING.contains(c)) {
            if c == '.' && is_abbreviation(rest) {
                break;
            }
            trailing.push(c.to_string());
            rest = &rest[..rest.len() - c.len_utf8()];
        }

        if !rest.is_empty() {
            split_clitics(rest, &mut out);
        }
        out.extend(trailing.into_iter().rev());
    }
    out
}

/// Tokenize `text` and cut it after every `.`, `!` or `?` token.
pub fn split_sentences(text: &str) -> Vec<Vec<String>> {
    let mut sentences = Vec::new();
    let mut current = Vec::new();
    for token in tokenize(text) {
        let end = is_sentence_end(&token);
        current.push(token);
        if end {
            sentences.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}

/// Input sentences: raw text is split into sentences, otherwise every
/// non-blank line is one sentence of whitespace-separated tokens.
pub fn read_sentences(content: &str, raw: bool) -> Vec<Vec<String>> {
    if raw {
        return split_sentences(content);
    }
    content
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|tokens| !tokens.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_is_split() {
        assert_eq!(
            tokenize("\"Hello, world!\" (really)."),
            ["\"", "Hello", ",", "world", "!", "\"", "(", "really", ")", "."]
        );
    }

    #[test]
    fn abbreviations_keep_period() {
        assert_eq!(
            tokenize("Dr. Smith met J. Doe."),
            ["Dr.", "Smith", "met", "J.", "Doe", "."]
        );
    }

    #[test]
    fn contractions_are_split() {
        assert_eq!(tokenize("it's"), ["it", "'s"]);
        assert_eq!(tokenize("They'll"), ["They", "'ll"]);
        assert_eq!(tokenize("don't"), ["do", "'t"]);
        assert_eq!(tokenize("can't"), ["can", "'t"]);
        assert_eq!(tokenize("won't"), ["will", "'t"]);
        assert_eq!(tokenize("'em"), ["'em"]);
    }

    #[test]
    fn sentences_end_at_terminators() {
        let s = split_sentences("The cat sat. Mr. Jones left! Did he? yes");
        assert_eq!(s.len(), 4);
        assert_eq!(s[0], ["The", "cat", "sat", "."]);
        assert_eq!(s[1], ["Mr.", "Jones", "left", "!"]);
        assert_eq!(s[3], ["yes"]);
    }

    #[test]
    fn empty_text_has_no_sentences() {
        assert!(split_sentences("  \n ").is_empty());
        assert!(read_sentences("\n\n", false).is_empty());
    }

    #[test]
    fn line_mode_keeps_tokens_verbatim() {
        let s = read_sentences("my/PRP$ cat/NN\n\nis/VBZ wise/JJ .\n", false);
        assert_eq!(s, vec![vec!["my/PRP$", "cat/NN"], vec!["is/VBZ", "wise/JJ", "."]]);
    }
}
