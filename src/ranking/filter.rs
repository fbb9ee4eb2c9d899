use crate::leads::ScoredLead;

/// Threshold used when neither the command line nor the config sets one.
pub const DEFAULT_MIN_SCORE: u8 = 50;

/// Keep only leads scoring at least `min_score`
pub fn filter_min_score(leads: Vec<ScoredLead>, min_score: u8) -> Vec<ScoredLead> {
    leads
        .into_iter()
        .filter(|s| s.propensity_score >= min_score)
        .collect()
}

/// Keep only leads whose location or HQ location contains `query`, ignoring case.
/// A blank query keeps everything.
pub fn filter_location(leads: Vec<ScoredLead>, query: &str) -> Vec<ScoredLead> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return leads;
    }
    leads
        .into_iter()
        .filter(|s| location_matches(s, &needle))
        .collect()
}

fn location_matches(scored: &ScoredLead, needle: &str) -> bool {
    scored.lead.location.to_lowercase().contains(needle)
        || scored.lead.hq_location.to_lowercase().contains(needle)
}

/// Current filter settings shared by the CLI and the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadFilter {
    pub min_score: u8,
    pub location: Option<String>,
}

impl Default for LeadFilter {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            location: None,
        }
    }
}

impl LeadFilter {
    /// Apply to a ranked collection, preserving its order.
    pub fn apply(&self, ranked: &[ScoredLead]) -> Vec<ScoredLead> {
        let kept = filter_min_score(ranked.to_vec(), self.min_score);
        match self.location.as_deref() {
            Some(query) => filter_location(kept, query),
            None => kept,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::{demo_leads, Lead};
    use crate::ranking::rank;
    use crate::scoring::{score_leads, RuleSet};

    fn ranked_demo() -> Vec<ScoredLead> {
        rank(score_leads(demo_leads(), &RuleSet::default()))
    }

    fn located(name: &str, location: &str, hq: &str, score: u8) -> ScoredLead {
        ScoredLead {
            lead: Lead {
                name: name.to_string(),
                location: location.to_string(),
                hq_location: hq.to_string(),
                ..Default::default()
            },
            propensity_score: score,
            score_breakdown: vec![],
            input_index: 0,
        }
    }

    #[test]
    fn test_filter_min_score_keeps_threshold_inclusive() {
        let filtered = filter_min_score(ranked_demo(), 60);
        let names: Vec<&str> = filtered.iter().map(|s| s.lead.name.as_str()).collect();
        assert_eq!(names, vec!["Dr. Sarah Chen", "David Kim", "Michael Ross"]);
    }

    #[test]
    fn test_filter_min_score_equals_predicate_for_all_thresholds() {
        let all = ranked_demo();
        for threshold in 0..=u8::MAX {
            let filtered = filter_min_score(all.clone(), threshold);
            let expected: Vec<ScoredLead> = all
                .iter()
                .filter(|s| s.propensity_score >= threshold)
                .cloned()
                .collect();
            assert_eq!(filtered, expected);
            assert!(filtered.iter().all(|s| all.contains(s)));
        }
    }

    #[test]
    fn test_filter_min_score_can_be_empty() {
        let filtered = filter_min_score(ranked_demo(), 101);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_location_case_insensitive() {
        let filtered = filter_location(ranked_demo(), "boston");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].lead.name, "David Kim");
    }

    #[test]
    fn test_filter_location_matches_either_field() {
        let leads = vec![
            located("person", "Basel", "Zurich", 10),
            located("hq", "Remote", "Basel", 10),
            located("neither", "Austin", "Denver", 10),
        ];
        let filtered = filter_location(leads, "BASEL");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].lead.name, "person");
        assert_eq!(filtered[1].lead.name, "hq");
    }

    #[test]
    fn test_filter_location_blank_keeps_all() {
        assert_eq!(filter_location(ranked_demo(), "   ").len(), 5);
        assert_eq!(filter_location(ranked_demo(), "").len(), 5);
    }

    #[test]
    fn test_lead_filter_combines_score_and_location() {
        let filter = LeadFilter {
            min_score: 50,
            location: Some("san francisco".to_string()),
        };
        let filtered = filter.apply(&ranked_demo());
        let names: Vec<&str> = filtered.iter().map(|s| s.lead.name.as_str()).collect();
        assert_eq!(names, vec!["Michael Ross"]);
    }

    #[test]
    fn test_lead_filter_threshold_equals_predicate_for_all_thresholds() {
        let all = ranked_demo();
        for threshold in 0..=u8::MAX {
            let filter = LeadFilter {
                min_score: threshold,
                location: None,
            };
            let expected: Vec<ScoredLead> = all
                .iter()
                .filter(|s| s.propensity_score >= threshold)
                .cloned()
                .collect();
            assert_eq!(filter.apply(&all), expected);
        }
    }

    #[test]
    fn test_lead_filter_blank_location_keeps_all() {
        let filter = LeadFilter {
            min_score: 0,
            location: Some("  ".to_string()),
        };
        assert_eq!(filter.apply(&ranked_demo()).len(), 5);
    }

    #[test]
    fn test_lead_filter_default_threshold() {
        let filtered = LeadFilter::default().apply(&ranked_demo());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_lead_filter_preserves_ranked_order() {
        let filter = LeadFilter {
            min_score: 0,
            location: None,
        };
        let all = ranked_demo();
        assert_eq!(filter.apply(&all), all);
    }
}
