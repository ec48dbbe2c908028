/// Tokenize text into terms: lowercase, then split on runs of whitespace.
///
/// No punctuation stripping or stemming happens here, so `"dog."` and `"dog"` are distinct
/// terms. The same function runs at index-build time and at query time.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("The  Quick\tbrown\nFOX");
        assert_eq!(t, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn blank_input_has_no_terms() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t \n ").is_empty());
    }
}
