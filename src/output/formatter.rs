use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::leads::ScoredLead;
use crate::ranking::{Summary, Tier, HOT_LEAD_THRESHOLD};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn colored_tier(text: &str, tier: Tier) -> String {
    match tier {
        Tier::High => text.green().bold().to_string(),
        Tier::Medium => text.yellow().to_string(),
        Tier::Low => text.red().to_string(),
    }
}

/// "Director of Toxicology @ BioSafe Therapeutics", dropping empty parts
fn role_line(scored: &ScoredLead) -> String {
    match (scored.lead.title.is_empty(), scored.lead.company.is_empty()) {
        (false, false) => format!("{} @ {}", scored.lead.title, scored.lead.company),
        (false, true) => scored.lead.title.clone(),
        (true, false) => scored.lead.company.clone(),
        (true, true) => String::new(),
    }
}

/// Format leads as ranked table with columns: Index, Score, Tier, Name, Role
/// No headers.
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column: 3 chars, right-aligned
/// Tier column: 6 chars (fits "Medium"), left-aligned
pub fn format_scored_table(leads: &[ScoredLead], use_colors: bool) -> String {
    if leads.is_empty() {
        return "No leads match the current filters.".to_string();
    }

    let term_width = get_terminal_width();
    let separator = "  ";
    // "99." + " " + "100" + sep + "Medium" + sep
    let fixed_width = 3 + 1 + 3 + separator.len() + 6 + separator.len();

    leads
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            // 1-based index, right-aligned with trailing dot
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>3}", scored.propensity_score);
            let tier = Tier::from_score(scored.propensity_score);
            let tier_str = format!("{:<6}", tier.short_label());

            let role = role_line(scored);
            let tail = if role.is_empty() {
                scored.lead.name.clone()
            } else {
                format!("{}{}{}", scored.lead.name, separator, role)
            };

            let tail = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_text(&tail, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_text(&tail, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                tail
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    colored_tier(&tier_str, tier),
                    separator,
                    tail
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_str, separator, tier_str, separator, tail
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format leads as tab-separated values for scripting
/// Columns: score, tier, name, title, company, breakdown (no headers, no colors)
pub fn format_tsv(leads: &[ScoredLead]) -> String {
    if leads.is_empty() {
        return String::new();
    }

    leads
        .iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                scored.propensity_score,
                Tier::from_score(scored.propensity_score).short_label(),
                scored.lead.name,
                scored.lead.title,
                scored.lead.company,
                scored.breakdown_text()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-line explanation of a single lead's score
pub fn format_lead_detail(scored: &ScoredLead, use_colors: bool) -> String {
    let lead = &scored.lead;
    let tier = Tier::from_score(scored.propensity_score);
    let factors = if scored.score_breakdown.is_empty() {
        "none".to_string()
    } else {
        scored.breakdown_text()
    };
    let location = if lead.hq_location.is_empty() || lead.hq_location == lead.location {
        lead.location.clone()
    } else {
        format!("{} (HQ: {})", lead.location, lead.hq_location)
    };

    if use_colors {
        format!(
            "Score Breakdown for {}:\n  Title: {}\n  Company: {}\n  Location: {}\n  Total Score: {}/100\n  Factors: {}\n  Recommendation: {}\n  Email: {}\n  LinkedIn: {}",
            lead.name.bold(),
            lead.title,
            lead.company.cyan(),
            location,
            scored.propensity_score.bold(),
            factors,
            colored_tier(&tier.recommendation(), tier),
            lead.email,
            lead.linkedin.underline()
        )
    } else {
        format!(
            "Score Breakdown for {}:\n  Title: {}\n  Company: {}\n  Location: {}\n  Total Score: {}/100\n  Factors: {}\n  Recommendation: {}\n  Email: {}\n  LinkedIn: {}",
            lead.name,
            lead.title,
            lead.company,
            location,
            scored.propensity_score,
            factors,
            tier.recommendation(),
            lead.email,
            lead.linkedin
        )
    }
}

/// One-line metrics header: totals over the full ranking, plus how many are shown
pub fn format_summary(summary: &Summary, shown: usize) -> String {
    let top = match &summary.top_candidate {
        Some((name, score)) => format!("{} ({} Points)", name, score),
        None => "-".to_string(),
    };
    format!(
        "Total Leads: {} | Hot Leads (>{} Score): {} | Top Candidate: {} | Showing: {}",
        summary.total, HOT_LEAD_THRESHOLD, summary.hot_leads, top, shown
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::Lead;

    fn sample_lead() -> ScoredLead {
        ScoredLead {
            lead: Lead {
                name: "Michael Ross".to_string(),
                title: "Head of Safety Assessment".to_string(),
                company: "NovaPharma".to_string(),
                location: "San Francisco, CA".to_string(),
                hq_location: "San Francisco, CA".to_string(),
                funding_series: "Series A".to_string(),
                tech_stack: "Unknown".to_string(),
                published_paper: false,
                email: "mross@novapharma.com".to_string(),
                linkedin: "linkedin.com/in/mross".to_string(),
            },
            propensity_score: 60,
            score_breakdown: vec![
                "High Fit Role (+30)".to_string(),
                "Recent Funding Series A/B (+20)".to_string(),
                "Located in BioHub (+10)".to_string(),
            ],
            input_index: 1,
        }
    }

    // truncate_text tests
    #[test]
    fn test_truncate_text_short() {
        assert_eq!(truncate_text("Short title", 20), "Short title");
    }

    #[test]
    fn test_truncate_text_long() {
        assert_eq!(truncate_text("This is a very long title", 15), "This is a ve...");
    }

    #[test]
    fn test_truncate_text_unicode() {
        assert_eq!(truncate_text("Zürich Biotech AG", 10), "Zürich ...");
    }

    #[test]
    fn test_truncate_text_very_narrow() {
        assert_eq!(truncate_text("Hello world", 3), "Hel");
    }

    // format_scored_table tests
    #[test]
    fn test_format_scored_table_empty() {
        let result = format_scored_table(&[], false);
        assert_eq!(result, "No leads match the current filters.");
    }

    #[test]
    fn test_format_scored_table_single() {
        let result = format_scored_table(&[sample_lead()], false);
        assert!(result.starts_with(" 1."));
        assert!(result.contains(" 60"));
        assert!(result.contains("Medium"));
        assert!(result.contains("Michael Ross"));
        assert!(result.contains("Head of Safety Assessment @ NovaPharma"));
    }

    #[test]
    fn test_format_scored_table_multiple() {
        let first = sample_lead();
        let mut second = sample_lead();
        second.lead.name = "Jessica Smith".to_string();
        second.propensity_score = 0;

        let result = format_scored_table(&[first, second], false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[1].starts_with(" 2."));
        assert!(lines[1].contains("  0  Low   "));
        assert!(lines[1].contains("Jessica Smith"));
    }

    #[test]
    fn test_format_scored_table_without_role() {
        let mut scored = sample_lead();
        scored.lead.title.clear();
        scored.lead.company.clear();
        let result = format_scored_table(&[scored], false);
        assert!(result.ends_with("Michael Ross"));
    }

    // format_tsv tests
    #[test]
    fn test_format_tsv_empty() {
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_format_tsv_single() {
        let result = format_tsv(&[sample_lead()]);
        assert_eq!(
            result,
            "60\tMedium\tMichael Ross\tHead of Safety Assessment\tNovaPharma\tHigh Fit Role (+30), Recent Funding Series A/B (+20), Located in BioHub (+10)"
        );
        assert_eq!(result.split('\t').count(), 6);
    }

    // format_lead_detail tests
    #[test]
    fn test_format_lead_detail() {
        let result = format_lead_detail(&sample_lead(), false);
        assert!(result.starts_with("Score Breakdown for Michael Ross:"));
        assert!(result.contains("Total Score: 60/100"));
        assert!(result.contains("Factors: High Fit Role (+30), Recent Funding Series A/B (+20), Located in BioHub (+10)"));
        assert!(result.contains("Recommendation: Medium Priority - Nurture Campaign"));
        assert!(result.contains("Location: San Francisco, CA\n"));
        assert!(result.contains("LinkedIn: linkedin.com/in/mross"));
    }

    #[test]
    fn test_format_lead_detail_no_factors() {
        let mut scored = sample_lead();
        scored.propensity_score = 0;
        scored.score_breakdown.clear();
        let result = format_lead_detail(&scored, false);
        assert!(result.contains("Factors: none"));
        assert!(result.contains("Recommendation: Low Priority - Do Not Contact"));
    }

    #[test]
    fn test_format_lead_detail_distinct_hq() {
        let mut scored = sample_lead();
        scored.lead.location = "Remote (CO)".to_string();
        scored.lead.hq_location = "Boston, MA".to_string();
        let result = format_lead_detail(&scored, false);
        assert!(result.contains("Location: Remote (CO) (HQ: Boston, MA)"));
    }

    // format_summary tests
    #[test]
    fn test_format_summary() {
        let summary = Summary {
            total: 5,
            hot_leads: 2,
            top_candidate: Some(("Dr. Sarah Chen".to_string(), 100)),
        };
        assert_eq!(
            format_summary(&summary, 3),
            "Total Leads: 5 | Hot Leads (>80 Score): 2 | Top Candidate: Dr. Sarah Chen (100 Points) | Showing: 3"
        );
    }

    #[test]
    fn test_format_summary_empty() {
        let summary = Summary {
            total: 0,
            hot_leads: 0,
            top_candidate: None,
        };
        assert!(format_summary(&summary, 0).contains("Top Candidate: -"));
    }
}
