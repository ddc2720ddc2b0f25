use serde::{Deserialize, Serialize};
use std::fmt;

/// outcome of the strategy comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// keep paying the EMI and invest the freed-up capital
    ContinueEmi,
    /// pay off the outstanding balance now
    Preclose,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::ContinueEmi => {
                write!(f, "continue paying EMI and invest the difference")
            }
            Recommendation::Preclose => write!(f, "pre-close the loan"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_display() {
        assert_eq!(
            Recommendation::ContinueEmi.to_string(),
            "continue paying EMI and invest the difference"
        );
        assert_eq!(Recommendation::Preclose.to_string(), "pre-close the loan");
    }
}
