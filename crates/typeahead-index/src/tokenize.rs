//! Forward tokenization.
//!
//! Text is split into lowercase alphanumeric word tokens; at query time a
//! term matches any stored token that begins with it. No minimum token
//! length: suggestions must react from the first typed character.

/// Split text into lowercase word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect()
}

/// Clip a term to at most `resolution` characters, on a char boundary.
pub(crate) fn clip(term: &str, resolution: usize) -> &str {
    match term.char_indices().nth(resolution) {
        Some((i, _)) => &term[..i],
        None => term,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_and_lowercases() {
        let tokens = tokenize("Totoro Guide, part 2!");
        assert_eq!(tokens, vec!["totoro", "guide", "part", "2"]);
    }

    #[test]
    fn test_tokenize_keeps_single_characters() {
        assert_eq!(tokenize("a b"), vec!["a", "b"]);
    }

    #[test]
    fn test_tokenize_whitespace_only() {
        assert!(tokenize("   \t\n").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_clip_respects_char_boundaries() {
        assert_eq!(clip("tonari", 4), "tona");
        assert_eq!(clip("となりのトトロ", 3), "となり");
        assert_eq!(clip("cat", 9), "cat");
    }
}
