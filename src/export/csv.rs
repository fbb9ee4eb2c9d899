use crate::leads::ScoredLead;
use anyhow::{Context, Result};
use ::csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

/// Default filename for exported rankings
pub const DEFAULT_EXPORT_FILE: &str = "ranked_leads.csv";

/// Lead fields in declaration order, then the two score columns
pub const CSV_HEADER: [&str; 12] = [
    "Name",
    "Title",
    "Company",
    "Location",
    "HQ_Location",
    "Funding_Series",
    "Tech_Stack",
    "Published_Paper",
    "Email",
    "LinkedIn",
    "Propensity_Score",
    "Score_Breakdown",
];

fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Minimal quoting (only fields with a delimiter, quote or line break), `\n` line endings
fn csv_writer<W: Write>(inner: W) -> Writer<W> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(inner)
}

fn write_row<W: Write>(writer: &mut Writer<W>, scored: &ScoredLead) -> ::csv::Result<()> {
    let lead = &scored.lead;
    let score = scored.propensity_score.to_string();
    let breakdown = scored.breakdown_text();
    let fields: [&str; 12] = [
        &lead.name,
        &lead.title,
        &lead.company,
        &lead.location,
        &lead.hq_location,
        &lead.funding_series,
        &lead.tech_stack,
        format_bool(lead.published_paper),
        &lead.email,
        &lead.linkedin,
        &score,
        &breakdown,
    ];
    writer.write_record(fields)
}

fn write_records<W: Write>(writer: &mut Writer<W>, leads: &[ScoredLead]) -> ::csv::Result<()> {
    writer.write_record(CSV_HEADER)?;
    for scored in leads {
        write_row(writer, scored)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render scored leads as CSV: header plus one row per lead.
pub fn to_csv(leads: &[ScoredLead]) -> Result<String> {
    let mut writer = csv_writer(Vec::new());
    write_records(&mut writer, leads).context("Failed to render CSV")?;
    let bytes = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("Failed to render CSV")?;
    Ok(String::from_utf8(bytes)?)
}

/// Write the CSV export atomically, so readers never see a half-written file.
pub fn write_csv(path: &Path, leads: &[ScoredLead]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    {
        let mut writer = csv_writer(&mut file);
        write_records(&mut writer, leads)
            .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
    }

    file.commit()
        .with_context(|| format!("Failed to save CSV export at {}", path.display()))?;

    tracing::debug!(rows = leads.len(), file = %path.display(), "exported leads");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::{demo_leads, Lead};
    use crate::ranking::rank;
    use crate::scoring::{score_leads, RuleSet};

    const HEADER_LINE: &str = "Name,Title,Company,Location,HQ_Location,Funding_Series,Tech_Stack,Published_Paper,Email,LinkedIn,Propensity_Score,Score_Breakdown";

    fn named(name: &str) -> ScoredLead {
        ScoredLead {
            lead: Lead {
                name: name.to_string(),
                ..Default::default()
            },
            propensity_score: 0,
            score_breakdown: vec![],
            input_index: 0,
        }
    }

    #[test]
    fn test_plain_field_unquoted() {
        let csv = to_csv(&[named("NovaPharma")]).unwrap();
        assert_eq!(csv.lines().nth(1).unwrap(), "NovaPharma,,,,,,,False,,,0,");
    }

    #[test]
    fn test_field_with_comma_quoted() {
        let csv = to_csv(&[named("Chen, Sarah")]).unwrap();
        assert!(csv.contains("\n\"Chen, Sarah\","));
    }

    #[test]
    fn test_field_with_quote_doubled() {
        let csv = to_csv(&[named("The \"Lab\"")]).unwrap();
        assert!(csv.contains("\n\"The \"\"Lab\"\"\","));
    }

    #[test]
    fn test_field_with_newline_quoted() {
        let csv = to_csv(&[named("a\nb")]).unwrap();
        assert!(csv.contains("\n\"a\nb\","));
    }

    #[test]
    fn test_to_csv_empty_has_header_only() {
        assert_eq!(to_csv(&[]).unwrap(), format!("{}\n", HEADER_LINE));
    }

    #[test]
    fn test_to_csv_row_format() {
        let scored = ScoredLead {
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
        };
        let csv = to_csv(&[scored]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], HEADER_LINE);
        assert_eq!(
            lines[1],
            "Michael Ross,Head of Safety Assessment,NovaPharma,\"San Francisco, CA\",\"San Francisco, CA\",Series A,Unknown,False,mross@novapharma.com,linkedin.com/in/mross,60,\"High Fit Role (+30), Recent Funding Series A/B (+20), Located in BioHub (+10)\""
        );
    }

    #[test]
    fn test_to_csv_empty_breakdown_is_blank_column() {
        let scored = ScoredLead {
            lead: Lead {
                name: "Jessica Smith".to_string(),
                ..Default::default()
            },
            propensity_score: 0,
            score_breakdown: vec![],
            input_index: 0,
        };
        let csv = to_csv(&[scored]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with(",False,,,0,"));
    }

    #[test]
    fn test_to_csv_keeps_ranked_order() {
        let ranked = rank(score_leads(demo_leads(), &RuleSet::default()));
        let csv = to_csv(&ranked).unwrap();
        let names: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "Dr. Sarah Chen",
                "David Kim",
                "Michael Ross",
                "Jessica Smith",
                "Emily White"
            ]
        );
    }

    #[test]
    fn test_write_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);
        let ranked = rank(score_leads(demo_leads(), &RuleSet::default()));

        write_csv(&path, &ranked).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_csv(&ranked).unwrap());
        assert!(written.starts_with(HEADER_LINE));
    }

    #[test]
    fn test_write_csv_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.csv");
        assert!(write_csv(&path, &[]).is_err());
    }
}
