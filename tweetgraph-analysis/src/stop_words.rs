//! Stop-word lists for the vectorizer

use ::stop_words::{get, LANGUAGE};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Stop-word list selected by language tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    #[default]
    English,
    None,
}

impl StopWords {
    /// Lowercase words filtered out before vectorizing
    pub fn words(&self) -> HashSet<String> {
        match self {
            StopWords::English => get(LANGUAGE::English)
                .iter()
                .map(|word| word.to_lowercase())
                .collect(),
            StopWords::None => HashSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_words() {
        let words = StopWords::English.words();
        assert!(words.contains("the"));
        assert!(words.contains("and"));
        assert!(!words.contains("rust"));
        assert!(!words.contains("sourdough"));
    }

    #[test]
    fn test_none_is_empty() {
        assert!(StopWords::None.words().is_empty());
    }

    #[test]
    fn test_language_tag() {
        let tag: StopWords = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(tag, StopWords::English);
        assert_eq!(serde_json::to_string(&StopWords::None).unwrap(), "\"none\"");
    }
}
