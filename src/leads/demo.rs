use super::types::Lead;

#[allow(clippy::too_many_arguments)]
fn lead(
    name: &str,
    title: &str,
    company: &str,
    location: &str,
    hq_location: &str,
    funding_series: &str,
    tech_stack: &str,
    published_paper: bool,
    email: &str,
    linkedin: &str,
) -> Lead {
    Lead {
        name: name.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        hq_location: hq_location.to_string(),
        funding_series: funding_series.to_string(),
        tech_stack: tech_stack.to_string(),
        published_paper,
        email: email.to_string(),
        linkedin: linkedin.to_string(),
    }
}

/// Built-in sample of already-enriched leads, used when no lead file is given.
pub fn demo_leads() -> Vec<Lead> {
    vec![
        lead(
            "Dr. Sarah Chen",
            "Director of Toxicology",
            "BioSafe Therapeutics",
            "Cambridge, MA",
            "Cambridge, MA",
            "Series B",
            "Uses in-vitro models",
            true,
            "sarah.c@biosafe.com",
            "linkedin.com/in/sarahchen",
        ),
        lead(
            "Michael Ross",
            "Head of Safety Assessment",
            "NovaPharma",
            "San Francisco, CA",
            "San Francisco, CA",
            "Series A",
            "Unknown",
            false,
            "mross@novapharma.com",
            "linkedin.com/in/mross",
        ),
        lead(
            "Jessica Smith",
            "Junior Scientist",
            "OldSchool Meds",
            "Austin, TX",
            "New York, NY",
            "Public",
            "None",
            false,
            "jessica@oldschool.com",
            "linkedin.com/in/jsmith",
        ),
        lead(
            "David Kim",
            "VP Preclinical",
            "HepatoLogic",
            "Remote (CO)",
            "Boston, MA",
            "Series B",
            "Uses in-vitro models",
            true,
            "d.kim@hepatologic.io",
            "linkedin.com/in/dkim",
        ),
        lead(
            "Emily White",
            "Lab Technician",
            "Generic Labs",
            "Chicago, IL",
            "Chicago, IL",
            "Seed",
            "None",
            false,
            "emily@genericlabs.com",
            "linkedin.com/in/ewhite",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_leads_count_and_order() {
        let leads = demo_leads();
        assert_eq!(leads.len(), 5);
        assert_eq!(leads[0].name, "Dr. Sarah Chen");
        assert_eq!(leads[4].name, "Emily White");
    }

    #[test]
    fn test_demo_leads_have_names() {
        assert!(demo_leads().iter().all(|l| !l.name.is_empty()));
    }
}
