use serde::{Deserialize, Deserializer, Serialize};

/// A candidate contact record to be evaluated for outreach priority.
///
/// Every field is optional on input: missing or null strings become `""`
/// and a missing `published_paper` becomes `false`. Keys are accepted both
/// in snake_case and in the dashboard's column spelling (`HQ_Location`,
/// `Published_Paper`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Lead {
    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(alias = "Title", deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(alias = "Company", deserialize_with = "null_as_default")]
    pub company: String,

    #[serde(alias = "Location", deserialize_with = "null_as_default")]
    pub location: String,

    #[serde(alias = "HQ_Location", deserialize_with = "null_as_default")]
    pub hq_location: String,

    #[serde(alias = "Funding_Series", deserialize_with = "null_as_default")]
    pub funding_series: String,

    #[serde(alias = "Tech_Stack", deserialize_with = "null_as_default")]
    pub tech_stack: String,

    #[serde(alias = "Published_Paper", deserialize_with = "null_as_default")]
    pub published_paper: bool,

    #[serde(alias = "Email", deserialize_with = "null_as_default")]
    pub email: String,

    #[serde(alias = "LinkedIn", alias = "Linkedin", deserialize_with = "null_as_default")]
    pub linkedin: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A lead after it has been passed through the scorer. Read-only from here on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredLead {
    pub lead: Lead,
    pub propensity_score: u8,
    pub score_breakdown: Vec<String>,
    /// Position in the input collection, used as the ranking tie-break.
    pub input_index: usize,
}

impl ScoredLead {
    /// Breakdown joined for display, e.g. "High Fit Role (+30), Located in BioHub (+10)"
    pub fn breakdown_text(&self) -> String {
        self.score_breakdown.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_missing_fields_default() {
        let yaml = r#"
name: "Ada"
title: "Director"
"#;
        let lead: Lead = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(lead.name, "Ada");
        assert_eq!(lead.title, "Director");
        assert_eq!(lead.location, "");
        assert_eq!(lead.tech_stack, "");
        assert!(!lead.published_paper);
    }

    #[test]
    fn test_lead_null_fields_default() {
        let json = r#"{"name": "Ada", "title": null, "published_paper": null}"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.title, "");
        assert!(!lead.published_paper);
    }

    #[test]
    fn test_lead_dashboard_column_aliases() {
        let json = r#"{
            "Name": "Dr. Sarah Chen",
            "HQ_Location": "Cambridge, MA",
            "Funding_Series": "Series B",
            "Tech_Stack": "Uses in-vitro models",
            "Published_Paper": true,
            "LinkedIn": "linkedin.com/in/sarahchen"
        }"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.name, "Dr. Sarah Chen");
        assert_eq!(lead.hq_location, "Cambridge, MA");
        assert_eq!(lead.funding_series, "Series B");
        assert_eq!(lead.tech_stack, "Uses in-vitro models");
        assert!(lead.published_paper);
        assert_eq!(lead.linkedin, "linkedin.com/in/sarahchen");
    }

    #[test]
    fn test_breakdown_text_joins_with_comma() {
        let scored = ScoredLead {
            lead: Lead::default(),
            propensity_score: 40,
            score_breakdown: vec![
                "High Fit Role (+30)".to_string(),
                "Located in BioHub (+10)".to_string(),
            ],
            input_index: 0,
        };
        assert_eq!(
            scored.breakdown_text(),
            "High Fit Role (+30), Located in BioHub (+10)"
        );
    }

    #[test]
    fn test_breakdown_text_empty() {
        let scored = ScoredLead {
            lead: Lead::default(),
            propensity_score: 0,
            score_breakdown: vec![],
            input_index: 0,
        };
        assert_eq!(scored.breakdown_text(), "");
    }
}
