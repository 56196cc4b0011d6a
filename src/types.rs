//! Evaluation result types.

use std::fmt;

/// Number of satisfied strength criteria, always in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MIN: PasswordScore = PasswordScore(0);
    pub const MAX: PasswordScore = PasswordScore(5);

    /// Creates a score, clamping anything above [`PasswordScore::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX.0))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Categorical rating derived from a [`PasswordScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    /// `0..=2` is weak, `3..=4` moderate, `5` strong.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0..=2 => PasswordStrength::Weak,
            3..=4 => PasswordStrength::Moderate,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single evaluation.
///
/// `feedback` is ordered: suggestions appear in the order the criteria are
/// checked. A strong password carries exactly one affirmative message instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub feedback: Vec<String>,
    cancelled: bool,
}

impl PasswordEvaluation {
    pub fn new(score: PasswordScore, feedback: Vec<String>) -> Self {
        Self {
            score,
            feedback,
            cancelled: false,
        }
    }

    /// Evaluation that was abandoned before all criteria ran.
    pub fn cancelled() -> Self {
        Self {
            score: PasswordScore::MIN,
            feedback: vec!["Evaluation cancelled".to_string()],
            cancelled: true,
        }
    }

    /// `true` for results from [`PasswordEvaluation::cancelled`]; their score
    /// says nothing about the password.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }
}
