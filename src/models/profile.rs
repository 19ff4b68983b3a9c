use serde::{Deserialize, Serialize};

pub const GRATITUDE_THRESHOLD: i32 = 20;
pub const DEVELOPING_THRESHOLD: i32 = 15;

/// Interpretation band for a completed quiz, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    IngratitudeLeaning,
    Developing,
    GratitudeOriented,
}

impl Profile {
    /// Lower bounds are inclusive; every integer falls in exactly one band.
    pub fn classify(score: i32) -> Self {
        if score >= GRATITUDE_THRESHOLD {
            Profile::GratitudeOriented
        } else if score >= DEVELOPING_THRESHOLD {
            Profile::Developing
        } else {
            Profile::IngratitudeLeaning
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Profile::GratitudeOriented => "Gratitude-oriented",
            Profile::Developing => "Developing",
            Profile::IngratitudeLeaning => "Ingratitude-leaning",
        }
    }

    pub fn tone(self) -> &'static str {
        match self {
            Profile::GratitudeOriented => "success",
            Profile::Developing => "warn",
            Profile::IngratitudeLeaning => "danger",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Profile::GratitudeOriented => "You naturally practise gratitude.",
            Profile::Developing => "You have a solid base to build on.",
            Profile::IngratitudeLeaning => "Working on your sense of gratitude would be beneficial.",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_lower_bounds() {
        assert_eq!(Profile::classify(14), Profile::IngratitudeLeaning);
        assert_eq!(Profile::classify(15), Profile::Developing);
        assert_eq!(Profile::classify(19), Profile::Developing);
        assert_eq!(Profile::classify(20), Profile::GratitudeOriented);
    }

    #[test]
    fn classify_is_total_and_monotonic() {
        let mut previous = Profile::classify(i32::MIN);
        assert_eq!(previous, Profile::IngratitudeLeaning);
        for score in -50..=50 {
            let current = Profile::classify(score);
            assert!(current >= previous, "band went down at {}", score);
            previous = current;
        }
        assert_eq!(Profile::classify(i32::MAX), Profile::GratitudeOriented);
    }

    #[test]
    fn labels() {
        assert_eq!(Profile::GratitudeOriented.label(), "Gratitude-oriented");
        assert_eq!(Profile::Developing.to_string(), "Developing");
        assert_eq!(Profile::IngratitudeLeaning.label(), "Ingratitude-leaning");
        assert_eq!(Profile::IngratitudeLeaning.tone(), "danger");
    }
}
