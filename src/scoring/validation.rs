use super::config::{MatchCase, ScoringConfig, MAX_SCORE};

fn check_points(errors: &mut Vec<String>, field: &str, value: Option<i64>) {
    if let Some(points) = value {
        if points < 0 {
            errors.push(format!("scoring.{}: must be non-negative", field));
        } else if points > i64::from(MAX_SCORE) {
            errors.push(format!(
                "scoring.{}: must be at most {} (got {})",
                field, MAX_SCORE, points
            ));
        }
    }
}

fn check_list(errors: &mut Vec<String>, field: &str, value: Option<&Vec<String>>) {
    if let Some(items) = value {
        if items.is_empty() {
            errors.push(format!("scoring.{}: must not be empty", field));
        }
        for (i, item) in items.iter().enumerate() {
            if item.trim().is_empty() {
                errors.push(format!("scoring.{}[{}]: must not be blank", field, i));
            }
        }
    }
}

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_points(&mut errors, "role_points", config.role_points);
    check_points(&mut errors, "funding_points", config.funding_points);
    check_points(&mut errors, "tech_points", config.tech_points);
    check_points(&mut errors, "hub_points", config.hub_points);
    check_points(&mut errors, "paper_points", config.paper_points);

    // A blank needle would match every lead
    check_list(&mut errors, "role_keywords", config.role_keywords.as_ref());
    check_list(&mut errors, "funding_series", config.funding_series.as_ref());
    check_list(&mut errors, "hubs", config.hubs.as_ref());

    if let Some(ref keyword) = config.tech_keyword {
        if keyword.trim().is_empty() {
            errors.push("scoring.tech_keyword: must not be blank".to_string());
        }
    }

    // Titles are lowercased before matching, so an uppercase keyword never hits
    let match_case = config.match_case.unwrap_or_default();
    if match_case == MatchCase::Literal {
        if let Some(ref keywords) = config.role_keywords {
            for (i, keyword) in keywords.iter().enumerate() {
                if keyword.chars().any(char::is_uppercase) {
                    errors.push(format!(
                        "scoring.role_keywords[{}]: '{}' must be lowercase with match_case: literal",
                        i, keyword
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
