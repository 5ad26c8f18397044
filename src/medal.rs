//! End-of-run medal tiers

use serde::{Deserialize, Serialize};

use crate::tuning::MedalThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Medal {
    Bronze,
    Silver,
    Gold,
}

impl Medal {
    /// Highest medal the score reaches, if any
    pub fn for_score(score: u32, thresholds: &MedalThresholds) -> Option<Self> {
        if score >= thresholds.gold {
            Some(Medal::Gold)
        } else if score >= thresholds.silver {
            Some(Medal::Silver)
        } else if score >= thresholds.bronze {
            Some(Medal::Bronze)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Bronze => "Bronze",
            Medal::Silver => "Silver",
            Medal::Gold => "Gold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tiers() {
        let t = MedalThresholds::default();
        assert_eq!(Medal::for_score(0, &t), None);
        assert_eq!(Medal::for_score(19, &t), None);
        assert_eq!(Medal::for_score(20, &t), Some(Medal::Bronze));
        assert_eq!(Medal::for_score(29, &t), Some(Medal::Bronze));
        assert_eq!(Medal::for_score(30, &t), Some(Medal::Silver));
        assert_eq!(Medal::for_score(50, &t), Some(Medal::Gold));
        assert_eq!(Medal::for_score(500, &t), Some(Medal::Gold));
    }

    #[test]
    fn test_custom_thresholds() {
        let t = MedalThresholds {
            bronze: 1,
            silver: 2,
            gold: 3,
        };
        assert_eq!(Medal::for_score(2, &t), Some(Medal::Silver));
    }
}
