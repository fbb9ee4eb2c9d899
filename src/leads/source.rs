use super::types::Lead;
use anyhow::{Context, Result};
use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::Path;

/// Wrapped form of a lead file: `leads: [...]`
#[derive(Debug, Deserialize)]
struct LeadDocument {
    leads: Vec<Lead>,
}

/// Top-level shape of a lead file, read without materializing any lead
enum Shape {
    Sequence,
    Mapping,
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ShapeVisitor;

        impl<'de> Visitor<'de> for ShapeVisitor {
            type Value = Shape;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a list of leads or a mapping with a `leads` key")
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Shape, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Shape::Sequence)
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Shape, A::Error>
            where
                A: MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(Shape::Mapping)
            }
        }

        deserializer.deserialize_any(ShapeVisitor)
    }
}

enum Format {
    Yaml,
    Json,
}

fn detect_format(path: &Path) -> Result<Format> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        Some(other) => anyhow::bail!(
            "Unsupported lead file extension '.{}' for {} (expected .yaml, .yml or .json)",
            other,
            path.display()
        ),
        None => anyhow::bail!(
            "Lead file {} has no extension (expected .yaml, .yml or .json)",
            path.display()
        ),
    }
}

// The shape is decided first so that a bad field reports its own error
fn parse_yaml(content: &str) -> Result<Vec<Lead>> {
    let leads = match serde_saphyr::from_str::<Shape>(content)? {
        Shape::Sequence => serde_saphyr::from_str::<Vec<Lead>>(content)?,
        Shape::Mapping => serde_saphyr::from_str::<LeadDocument>(content)?.leads,
    };
    Ok(leads)
}

fn parse_json(content: &str) -> Result<Vec<Lead>> {
    let leads = match serde_json::from_str::<Shape>(content)? {
        Shape::Sequence => serde_json::from_str::<Vec<Lead>>(content)?,
        Shape::Mapping => serde_json::from_str::<LeadDocument>(content)?.leads,
    };
    Ok(leads)
}

/// Load leads from a YAML or JSON file, preserving file order.
///
/// The file holds either a bare sequence of leads or a mapping with a
/// `leads:` key. Leads with an empty name are kept (scoring is permissive)
/// but logged.
///
/// # Errors
///
/// Returns an error if:
/// - The extension is not `.yaml`, `.yml` or `.json`
/// - The file cannot be read
/// - The content cannot be parsed as a list of leads
pub fn load_leads(path: &Path) -> Result<Vec<Lead>> {
    let format = detect_format(path)?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lead file at {}", path.display()))?;

    let leads = match format {
        Format::Yaml => parse_yaml(&content),
        Format::Json => parse_json(&content),
    }
    .with_context(|| format!("Failed to parse leads in {}", path.display()))?;

    for (index, lead) in leads.iter().enumerate() {
        if lead.name.trim().is_empty() {
            tracing::warn!(index, file = %path.display(), "lead has an empty name");
        }
    }

    tracing::debug!(count = leads.len(), file = %path.display(), "loaded leads");
    Ok(leads)
}
