/// Coarse priority bucket derived from a propensity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Tier::High
        } else if score >= 50 {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    /// Short label for table columns
    pub fn short_label(self) -> &'static str {
        match self {
            Tier::High => "High",
            Tier::Medium => "Medium",
            Tier::Low => "Low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::High => "High Priority",
            Tier::Medium => "Medium Priority",
            Tier::Low => "Low Priority",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            Tier::High => "Contact Immediately",
            Tier::Medium => "Nurture Campaign",
            Tier::Low => "Do Not Contact",
        }
    }

    /// Full recommendation, e.g. "High Priority - Contact Immediately"
    pub fn recommendation(self) -> String {
        format!("{} - {}", self.label(), self.action())
    }
}
