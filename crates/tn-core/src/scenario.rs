//! A single quiz level: an incident alert with lettered response options.

use serde::{Deserialize, Serialize};

/// One selectable response to an incident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionChoice {
    /// Single-letter key, unique within its scenario.
    pub key: char,
    /// Text shown to the player.
    pub label: String,
}

impl OptionChoice {
    /// Create an option.
    pub fn new(key: char, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }
}

/// An incident scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Ordinal id, "1" for the first level.
    pub id: String,
    /// Short headline.
    pub title: String,
    /// The alert describing what is happening.
    pub alert: String,
    /// Available responses in display order.
    pub options: Vec<OptionChoice>,
    /// Key of the right response.
    #[serde(alias = "correctKey")]
    pub correct_key: char,
    /// Why the right response is right; shown after answering.
    pub explanation: String,
}

impl Scenario {
    /// Look up an option by key.
    pub fn option(&self, key: char) -> Option<&OptionChoice> {
        self.options.iter().find(|o| o.key == key)
    }

    /// Whether `key` is the correct response.
    pub fn is_correct(&self, key: char) -> bool {
        self.correct_key == key
    }

    /// The correct option, if the scenario is well formed.
    pub fn correct_option(&self) -> Option<&OptionChoice> {
        self.option(self.correct_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Scenario {
        Scenario {
            id: "1".to_string(),
            title: "Test".to_string(),
            alert: "Something happened.".to_string(),
            options: vec![OptionChoice::new('A', "Pause"), OptionChoice::new('B', "Wait")],
            correct_key: 'B',
            explanation: "Waiting helps.".to_string(),
        }
    }

    #[test]
    fn option_lookup() {
        let s = sample();
        assert_eq!(s.option('A').map(|o| o.label.as_str()), Some("Pause"));
        assert!(s.option('C').is_none());
        assert_eq!(s.correct_option().map(|o| o.key), Some('B'));
    }

    #[test]
    fn correctness() {
        let s = sample();
        assert!(s.is_correct('B'));
        assert!(!s.is_correct('A'));
    }

    #[test]
    fn json_shape() {
        let json = r#"{
            "id": "7",
            "title": "T",
            "alert": "A",
            "options": [{"key": "A", "label": "x"}],
            "correct_key": "A",
            "explanation": "E"
        }"#;
        let s: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(s.id, "7");
        assert_eq!(s.options[0].key, 'A');
        assert_eq!(s.correct_key, 'A');
    }

    #[test]
    fn accepts_camel_case_correct_key() {
        let json = r#"{
            "id": "1",
            "title": "T",
            "alert": "A",
            "options": [{"key": "A", "label": "x"}, {"key": "B", "label": "y"}],
            "correctKey": "B",
            "explanation": "E"
        }"#;
        let s: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(s.correct_key, 'B');
    }
}
