mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/lead-rank/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("lead-rank"))
}

/// Get the default config file path (~/.config/lead-rank/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

fn read_config(path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let mut config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    // Relative lead paths are relative to the config file, not the working directory
    if let (Some(leads), Some(dir)) = (config.leads.as_mut(), path.parent()) {
        if leads.is_relative() {
            *leads = dir.join(&*leads);
        }
    }

    Ok(config)
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/lead-rank/config.yaml)
///
/// A missing file at the default path yields the built-in defaults; the
/// config file is optional.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(explicit) => {
            if !explicit.exists() {
                anyhow::bail!("Config file not found at {}", explicit.display());
            }
            read_config(&explicit)
        }
        None => match get_config_path() {
            Some(default_path) if default_path.exists() => read_config(&default_path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

/// Validate the whole config at startup, collecting every error.
pub fn validate_config(config: &Config) -> std::result::Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(min_score) = config.min_score {
        if u32::from(min_score) > crate::scoring::MAX_SCORE {
            errors.push(format!(
                "min_score: must be at most {} (got {})",
                crate::scoring::MAX_SCORE,
                min_score
            ));
        }
    }

    if let Some(ref scoring) = config.scoring {
        if let Err(scoring_errors) = crate::scoring::validate_scoring(scoring) {
            errors.extend(scoring_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_explicit_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(b"min_score: 80\n").unwrap();
        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.min_score, Some(80));
        assert!(config.scoring.is_none());
    }

    #[test]
    fn test_load_invalid_yaml_errors() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(b"min_score: [not, a, number]\n").unwrap();
        let err = load_config(Some(file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_config_path_ends_with_yaml() {
        if let Some(path) = get_config_path() {
            assert!(path.ends_with(".config/lead-rank/config.yaml"));
        }
    }

    #[test]
    fn test_validate_min_score_above_max() {
        let config = Config {
            min_score: Some(200),
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec!["min_score: must be at most 100 (got 200)"]);
    }

    #[test]
    fn test_validate_min_score_bounds_accepted() {
        for min_score in [0, 100] {
            let config = Config {
                min_score: Some(min_score),
                ..Default::default()
            };
            assert!(validate_config(&config).is_ok());
        }
    }

    #[test]
    fn test_validate_collects_min_score_and_scoring_errors() {
        let config: Config =
            serde_saphyr::from_str("min_score: 150\nscoring:\n  hub_points: -5\n").unwrap();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("min_score"));
        assert!(errors[1].starts_with("scoring.hub_points"));
    }

    #[test]
    fn test_relative_leads_path_resolved_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "leads: data/leads.yaml\n").unwrap();
        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.leads, Some(dir.path().join("data").join("leads.yaml")));
    }

    #[test]
    fn test_absolute_leads_path_kept() {
        let dir = tempfile::tempdir().unwrap();
        let leads = dir.path().join("elsewhere").join("leads.json");
        let path = dir.path().join("config.yaml");
        fs::write(&path, format!("leads: \"{}\"\n", leads.display())).unwrap();
        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.leads, Some(leads));
    }
}
