use super::config::{MatchCase, RuleSet, MAX_SCORE};
use crate::leads::{Lead, ScoredLead};

/// The five scoring rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    RoleFit,
    FundingIntent,
    TechFit,
    LocationHub,
    ScientificIntent,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::RoleFit,
        Rule::FundingIntent,
        Rule::TechFit,
        Rule::LocationHub,
        Rule::ScientificIntent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Rule::RoleFit => "High Fit Role",
            Rule::FundingIntent => "Recent Funding Series A/B",
            Rule::TechFit => "Uses Similar Tech",
            Rule::LocationHub => "Located in BioHub",
            Rule::ScientificIntent => "Published Relevant Paper",
        }
    }

    pub fn points(self, rules: &RuleSet) -> u32 {
        match self {
            Rule::RoleFit => rules.role_points,
            Rule::FundingIntent => rules.funding_points,
            Rule::TechFit => rules.tech_points,
            Rule::LocationHub => rules.hub_points,
            Rule::ScientificIntent => rules.paper_points,
        }
    }

    /// Reason string shown in the breakdown, e.g. "High Fit Role (+30)"
    pub fn reason(self, points: u32) -> String {
        format!("{} (+{})", self.label(), points)
    }

    pub fn matches(self, lead: &Lead, rules: &RuleSet) -> bool {
        match self {
            Rule::RoleFit => {
                let title = lead.title.to_lowercase();
                rules
                    .role_keywords
                    .iter()
                    .any(|keyword| contains(&title, keyword, rules.match_case))
            }
            Rule::FundingIntent => rules
                .funding_series
                .iter()
                .any(|series| *series == lead.funding_series),
            Rule::TechFit => contains(&lead.tech_stack, &rules.tech_keyword, rules.match_case),
            Rule::LocationHub => rules.hubs.iter().any(|hub| {
                contains(&lead.location, hub, rules.match_case)
                    || contains(&lead.hq_location, hub, rules.match_case)
            }),
            Rule::ScientificIntent => lead.published_paper,
        }
    }
}

fn contains(haystack: &str, needle: &str, match_case: MatchCase) -> bool {
    match match_case {
        MatchCase::Literal => haystack.contains(needle),
        MatchCase::Insensitive => haystack
            .to_lowercase()
            .contains(&needle.to_lowercase()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u8,
    /// One reason per triggered rule, in rule order
    pub breakdown: Vec<String>,
}

/// Score a single lead. Every rule is evaluated; the sum is capped at 100.
pub fn calculate_score(lead: &Lead, rules: &RuleSet) -> ScoreResult {
    let mut total: u32 = 0;
    let mut breakdown = Vec::new();

    for rule in Rule::ALL {
        if rule.matches(lead, rules) {
            let points = rule.points(rules);
            total = total.saturating_add(points);
            breakdown.push(rule.reason(points));
        }
    }

    // Cap at MAX_SCORE
    let capped = total.min(MAX_SCORE);

    ScoreResult {
        score: u8::try_from(capped).unwrap_or(u8::MAX),
        breakdown,
    }
}

/// Score every lead independently, returning a new collection in input order.
pub fn score_leads(leads: Vec<Lead>, rules: &RuleSet) -> Vec<ScoredLead> {
    leads
        .into_iter()
        .enumerate()
        .map(|(input_index, lead)| {
            let result = calculate_score(&lead, rules);
            ScoredLead {
                lead,
                propensity_score: result.score,
                score_breakdown: result.breakdown,
                input_index,
            }
        })
        .collect()
}
