//! Deterministic importance scoring from phase and priority markers.
//!
//! Both weight tables are fixed constants: identical inputs always produce
//! identical scores, and every missing or unrecognized marker degrades to a
//! defined minimum instead of failing.

/// Priority vocabulary recognized by the scorer. Tokens outside the
/// vocabulary are preserved verbatim in `Other` so filters can still match
/// them; they score at the low weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    Other(String),
}

impl Priority {
    /// Parse a priority token. Never fails: unrecognized words become
    /// `Other` with the token lower-cased.
    pub fn parse(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "critical" => Priority::Critical,
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            other => Priority::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Other(token) => token,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Priority::parse(s))
    }
}

/// Weight of a phase marker. Earlier phases weigh more; an absent or
/// unmapped phase falls back to the lowest entry.
pub fn phase_weight(phase: Option<u32>) -> u32 {
    match phase {
        Some(1) => 100,
        Some(2) | Some(3) => 80,
        Some(4) => 60,
        _ => 20,
    }
}

/// Weight of a priority marker. Absent or unrecognized tokens fall back
/// to the low weight.
pub fn priority_weight(priority: Option<&Priority>) -> u32 {
    match priority {
        Some(Priority::Critical) => 50,
        Some(Priority::High) => 40,
        Some(Priority::Medium) => 20,
        Some(Priority::Low) | Some(Priority::Other(_)) | None => 10,
    }
}

/// Combined importance score, higher is more important.
pub fn score(phase: Option<u32>, priority: Option<&Priority>) -> u32 {
    phase_weight(phase) + priority_weight(priority)
}
