//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use mt_core::{ContainerGeometry, EntryCategory, Layers, Locale};

/// Rendered height of the day column when nothing else is configured.
const DEFAULT_CONTAINER_HEIGHT: f64 = 1440.0;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSON entry file.
    pub entries_path: PathBuf,

    /// Display language.
    pub locale: Locale,

    /// Height of the day column in pointer units, used by `replay`.
    pub container_height: f64,

    /// Categories hidden when a session starts.
    #[serde(default)]
    pub hidden_layers: Vec<EntryCategory>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            entries_path: data_dir.join("entries.json"),
            locale: Locale::default(),
            container_height: DEFAULT_CONTAINER_HEIGHT,
            hidden_layers: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // MT_ENTRIES_PATH, MT_LOCALE, ...
        figment = figment.merge(Env::prefixed("MT_"));

        figment.extract()
    }

    /// Session layers: configured hidden layers plus any hidden for this run.
    pub fn layers(&self, also_hidden: &[EntryCategory]) -> Layers {
        self.hidden_layers
            .iter()
            .chain(also_hidden)
            .fold(Layers::new(self.locale), |layers, category| {
                layers.with_visibility(*category, false)
            })
    }

    /// The day column as the pointer sees it.
    pub const fn geometry(&self) -> ContainerGeometry {
        ContainerGeometry::new(0.0, self.container_height)
    }
}

/// Returns the platform-specific config directory for mt.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("mt"))
}

/// Returns the platform-specific data directory for mt.
///
/// On Linux: `~/.local/share/mt`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("mt"))
}
