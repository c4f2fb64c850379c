use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Folder listed on startup (CLI path overrides)
    #[serde(default)]
    pub root: Option<PathBuf>,
    #[serde(default = "default_sort")]
    pub default_sort: String,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    /// Mirror sort changes into the shareable location
    #[serde(default = "default_update_url")]
    pub update_url: bool,
    /// JSON or YAML translation file
    #[serde(default)]
    pub translations: Option<PathBuf>,
    /// Glob patterns of entry names to hide
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None,
            default_sort: default_sort(),
            vim_mode: false,
            icon_mode: default_icon_mode(),
            update_url: default_update_url(),
            translations: None,
            exclude: Vec::new(),
        }
    }
}

fn default_sort() -> String {
    crate::SortField::default().key().to_string()
}

fn default_icon_mode() -> String {
    "nerdfont".to_string()
}

fn default_update_url() -> bool {
    true
}
