//! The fixed catalog of prompt generation features.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A generation mode offered by the front-end.
///
/// Wire names are matched exactly and case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    TextToPrompt,
    ImageToPrompt,
    MoodBoardGeneration,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown feature: {0}")]
pub struct UnknownFeature(pub String);

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::TextToPrompt,
        Feature::ImageToPrompt,
        Feature::MoodBoardGeneration,
    ];

    /// Name used by clients in the `feature` field.
    pub fn wire_name(self) -> &'static str {
        match self {
            Feature::TextToPrompt => "Text-to-Prompt",
            Feature::ImageToPrompt => "Image-to-Prompt",
            Feature::MoodBoardGeneration => "Mood Board Generation",
        }
    }

    /// Description embedded into the system instruction.
    pub fn description(self) -> &'static str {
        match self {
            Feature::TextToPrompt => "Generate a prompt based on the given text",
            Feature::ImageToPrompt => "Generate a prompt based on the given image description",
            Feature::MoodBoardGeneration => {
                "Generate a prompt based on the given mood board description"
            }
        }
    }

    /// Short label for metrics.
    pub fn metric_label(self) -> &'static str {
        match self {
            Feature::TextToPrompt => "text_to_prompt",
            Feature::ImageToPrompt => "image_to_prompt",
            Feature::MoodBoardGeneration => "mood_board_generation",
        }
    }
}

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.wire_name() == s)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_every_wire_name() {
        assert_eq!(
            "Text-to-Prompt".parse::<Feature>(),
            Ok(Feature::TextToPrompt)
        );
        assert_eq!(
            "Image-to-Prompt".parse::<Feature>(),
            Ok(Feature::ImageToPrompt)
        );
        assert_eq!(
            "Mood Board Generation".parse::<Feature>(),
            Ok(Feature::MoodBoardGeneration)
        );
    }

    #[test]
    fn test_rejects_unknown_and_differently_cased_names() {
        for name in ["Bogus", "text-to-prompt", "Text-to-Prompt ", ""] {
            assert_eq!(
                name.parse::<Feature>(),
                Err(UnknownFeature(name.to_string()))
            );
        }
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let descriptions: std::collections::HashSet<_> =
            Feature::ALL.iter().map(|f| f.description()).collect();
        assert_eq!(descriptions.len(), 3);
    }

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(
            Feature::MoodBoardGeneration.to_string(),
            "Mood Board Generation"
        );
    }
}
