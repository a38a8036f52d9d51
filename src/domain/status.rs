use std::fmt;

/// Card color understood by the webhook's adaptive-card renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Good,
    Warning,
}

impl CardColor {
    /// Only a service reporting exactly `Running` is rendered green; any
    /// other label (stopped, degraded, unknown) gets a warning card.
    pub fn for_status(status: &str) -> Self {
        if status == "Running" {
            CardColor::Good
        } else {
            CardColor::Warning
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardColor::Good => "Good",
            CardColor::Warning => "Warning",
        }
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_is_good() {
        assert_eq!(CardColor::for_status("Running"), CardColor::Good);
    }

    #[test]
    fn test_any_other_label_is_warning() {
        assert_eq!(CardColor::for_status("Stopped"), CardColor::Warning);
        assert_eq!(CardColor::for_status("running"), CardColor::Warning);
        assert_eq!(CardColor::for_status(""), CardColor::Warning);
    }

    #[test]
    fn test_serialized_names_match_the_card_contract() {
        assert_eq!(CardColor::Good.to_string(), "Good");
        assert_eq!(CardColor::Warning.to_string(), "Warning");
    }
}
