/// Scores at or above this are recommended for hiring.
pub const HIRE_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    MoveForward,
    NotAMatch,
}

impl Recommendation {
    pub fn from_score(score: f64) -> Self {
        if score >= HIRE_THRESHOLD {
            Recommendation::MoveForward
        } else {
            Recommendation::NotAMatch
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Recommendation::MoveForward)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::MoveForward => "Recommendation: Move forward with hiring.",
            Recommendation::NotAMatch => "Recommendation: Not a match.",
        }
    }
}
