use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLE_KEYWORDS: [&str; 8] = [
    "toxicology",
    "safety",
    "hepatic",
    "3d",
    "preclinical",
    "vp",
    "director",
    "head",
];
pub const DEFAULT_FUNDING_SERIES: [&str; 2] = ["Series A", "Series B"];
pub const DEFAULT_TECH_KEYWORD: &str = "in-vitro";
pub const DEFAULT_HUBS: [&str; 6] = [
    "Boston",
    "Cambridge",
    "San Francisco",
    "Bay Area",
    "Basel",
    "London",
];

pub const DEFAULT_ROLE_POINTS: u32 = 30;
pub const DEFAULT_FUNDING_POINTS: u32 = 20;
pub const DEFAULT_TECH_POINTS: u32 = 15;
pub const DEFAULT_HUB_POINTS: u32 = 10;
pub const DEFAULT_PAPER_POINTS: u32 = 25;

/// Upper bound for a propensity score.
pub const MAX_SCORE: u32 = 100;

/// How keyword, tech and hub substrings are compared.
///
/// `Literal` lowercases only the title before matching role keywords and
/// compares tech and hub substrings as-is. `Insensitive` lowercases both
/// sides for all three. Funding series is always an exact comparison.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchCase {
    #[default]
    Literal,
    Insensitive,
}

/// Rule-table overrides, read from the `scoring:` section of the config file.
///
/// Every field is optional; anything left out falls back to the built-in
/// table. Points are signed here so that validation can report negative
/// values instead of failing the whole parse.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   match_case: insensitive
///   hubs: ["Boston", "Cambridge", "San Diego"]
///   paper_points: 20
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub match_case: Option<MatchCase>,

    /// Substrings searched for in the lowercased job title
    #[serde(default)]
    pub role_keywords: Option<Vec<String>>,
    #[serde(default)]
    pub role_points: Option<i64>,

    /// Funding rounds matched by exact equality
    #[serde(default)]
    pub funding_series: Option<Vec<String>>,
    #[serde(default)]
    pub funding_points: Option<i64>,

    #[serde(default)]
    pub tech_keyword: Option<String>,
    #[serde(default)]
    pub tech_points: Option<i64>,

    /// Hub names searched for in both location and HQ location
    #[serde(default)]
    pub hubs: Option<Vec<String>>,
    #[serde(default)]
    pub hub_points: Option<i64>,

    #[serde(default)]
    pub paper_points: Option<i64>,
}

/// Fully resolved rule table consumed by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub match_case: MatchCase,
    pub role_keywords: Vec<String>,
    pub role_points: u32,
    pub funding_series: Vec<String>,
    pub funding_points: u32,
    pub tech_keyword: String,
    pub tech_points: u32,
    pub hubs: Vec<String>,
    pub hub_points: u32,
    pub paper_points: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            match_case: MatchCase::Literal,
            role_keywords: to_strings(&DEFAULT_ROLE_KEYWORDS),
            role_points: DEFAULT_ROLE_POINTS,
            funding_series: to_strings(&DEFAULT_FUNDING_SERIES),
            funding_points: DEFAULT_FUNDING_POINTS,
            tech_keyword: DEFAULT_TECH_KEYWORD.to_string(),
            tech_points: DEFAULT_TECH_POINTS,
            hubs: to_strings(&DEFAULT_HUBS),
            hub_points: DEFAULT_HUB_POINTS,
            paper_points: DEFAULT_PAPER_POINTS,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn points_or(value: Option<i64>, default: u32) -> u32 {
    value
        .and_then(|p| u32::try_from(p).ok())
        .unwrap_or(default)
}

impl ScoringConfig {
    /// Merge the overrides onto the built-in table.
    ///
    /// Call [`crate::scoring::validate_scoring`] first; an out-of-range
    /// points value that slips through falls back to the default.
    pub fn resolve(&self) -> RuleSet {
        let defaults = RuleSet::default();
        RuleSet {
            match_case: self.match_case.unwrap_or(defaults.match_case),
            role_keywords: self
                .role_keywords
                .clone()
                .unwrap_or(defaults.role_keywords),
            role_points: points_or(self.role_points, defaults.role_points),
            funding_series: self
                .funding_series
                .clone()
                .unwrap_or(defaults.funding_series),
            funding_points: points_or(self.funding_points, defaults.funding_points),
            tech_keyword: self
                .tech_keyword
                .clone()
                .unwrap_or(defaults.tech_keyword),
            tech_points: points_or(self.tech_points, defaults.tech_points),
            hubs: self.hubs.clone().unwrap_or(defaults.hubs),
            hub_points: points_or(self.hub_points, defaults.hub_points),
            paper_points: points_or(self.paper_points, defaults.paper_points),
        }
    }
}
