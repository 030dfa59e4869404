/// Local fallback tokenizer: split on anything that is not alphanumeric,
/// drop short tokens, lowercase the rest.
pub fn tokenize(text: &str, min_len: usize) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= min_len)
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_filters_short() {
        let tokens = tokenize("Change, change... it's NOT easy!", 3);
        assert_eq!(tokens, vec!["change", "change", "not", "easy"]);
    }

    #[test]
    fn length_counts_codepoints() {
        assert_eq!(tokenize("über ab", 3), vec!["über"]);
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("  ", 3).is_empty());
    }
}
