use anyhow::{Context, Result};
use expo_core::ics::CalendarMetadata;
use expo_core::loader::DEFAULT_INPUT_CANDIDATES;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional config file, looked up in the working directory
pub const CONFIG_FILE: &str = "expo-build.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Events file locations, first existing one wins
    pub input_candidates: Vec<PathBuf>,

    /// Calendar file, overwritten on every run
    pub ics_output: PathBuf,

    /// Page holding the allEvents blob, rewritten in place
    pub html_path: PathBuf,

    /// `[calendar]` table: prodid, uid_domain
    pub calendar: CalendarMetadata,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            input_candidates: DEFAULT_INPUT_CANDIDATES.iter().map(PathBuf::from).collect(),
            ics_output: PathBuf::from("London_Expos.ics"),
            html_path: PathBuf::from("index.html"),
            calendar: CalendarMetadata::default(),
        }
    }
}

impl BuildConfig {
    /// Anchor relative paths at `root`
    fn resolve(mut self, root: &Path) -> Self {
        self.input_candidates = self
            .input_candidates
            .iter()
            .map(|p| root.join(p))
            .collect();
        self.ics_output = root.join(&self.ics_output);
        self.html_path = root.join(&self.html_path);
        self
    }
}

/// Load `expo-build.toml` from `root`, falling back to defaults when absent.
pub fn load_config(root: &Path) -> Result<BuildConfig> {
    let path = root.join(CONFIG_FILE);

    if !path.exists() {
        log::debug!("No {} in {}, using defaults", CONFIG_FILE, root.display());
        return Ok(BuildConfig::default().resolve(root));
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: BuildConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config.resolve(root))
}
