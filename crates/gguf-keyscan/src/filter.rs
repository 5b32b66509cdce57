//! Substring filter applied to metadata keys.

/// Substrings used when the caller supplies none.
pub const DEFAULT_FILTERS: [&str; 2] = ["rope", "bias"];

/// Case-sensitive "contains any of" matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFilter {
    substrings: Vec<String>,
}

impl KeyFilter {
    /// Build a filter from `substrings`, falling back to [`DEFAULT_FILTERS`]
    /// when the iterator yields nothing.
    pub fn new<I, S>(substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let substrings: Vec<String> = substrings.into_iter().map(Into::into).collect();
        if substrings.is_empty() {
            return Self::default();
        }
        Self { substrings }
    }

    pub fn substrings(&self) -> &[String] {
        &self.substrings
    }

    pub fn matches(&self, key: &str) -> bool {
        self.substrings.iter().any(|s| key.contains(s.as_str()))
    }
}

impl Default for KeyFilter {
    fn default() -> Self {
        Self {
            substrings: DEFAULT_FILTERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_falls_back_to_defaults() {
        let f = KeyFilter::new(Vec::<String>::new());
        assert_eq!(f.substrings(), ["rope", "bias"]);
        assert_eq!(f, KeyFilter::default());
    }

    #[test]
    fn explicit_filters_replace_defaults() {
        let f = KeyFilter::new(["head_count"]);
        assert!(f.matches("llama.attention.head_count"));
        assert!(!f.matches("llama.rope.freq_base"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let f = KeyFilter::new(["rope"]);
        assert!(f.matches("rope.dims"));
        let upper = KeyFilter::new(["ROPE"]);
        assert!(!upper.matches("rope.dims"));
    }

    #[test]
    fn any_substring_matches() {
        let f = KeyFilter::default();
        assert!(f.matches("qwen2.attention.bias"));
        assert!(f.matches("llama.rope.dimension_count"));
        assert!(!f.matches("general.architecture"));
    }
}
