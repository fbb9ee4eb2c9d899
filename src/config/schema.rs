use crate::scoring::ScoringConfig;
use crate::tui::Theme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Lead file used when `--leads` is not given. A relative path is
    /// resolved against the directory holding the config file.
    #[serde(default)]
    pub leads: Option<PathBuf>,

    /// Threshold used when `--min-score` is not given
    #[serde(default)]
    pub min_score: Option<u8>,

    /// Dashboard palette: auto, dark or light
    #[serde(default)]
    pub theme: Option<Theme>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}
