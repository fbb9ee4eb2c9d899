use crate::leads::ScoredLead;

/// Scores strictly above this count as "hot" in the summary.
pub const HOT_LEAD_THRESHOLD: u8 = 80;

/// Sort by score descending. Ties keep input order.
pub fn rank(mut leads: Vec<ScoredLead>) -> Vec<ScoredLead> {
    leads.sort_by(|a, b| {
        b.propensity_score
            .cmp(&a.propensity_score)
            .then_with(|| a.input_index.cmp(&b.input_index))
    });
    leads
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub hot_leads: usize,
    /// Name and score of the first lead in the ranking
    pub top_candidate: Option<(String, u8)>,
}

/// Headline metrics over an already ranked collection.
pub fn summarize(ranked: &[ScoredLead]) -> Summary {
    Summary {
        total: ranked.len(),
        hot_leads: ranked
            .iter()
            .filter(|s| s.propensity_score > HOT_LEAD_THRESHOLD)
            .count(),
        top_candidate: ranked
            .first()
            .map(|s| (s.lead.name.clone(), s.propensity_score)),
    }
}
