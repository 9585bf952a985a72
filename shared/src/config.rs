use std::path::{Path, PathBuf};

use config::{ConfigError, FileFormat};
use serde::{Deserialize, Serialize};

use indoc::indoc;

pub const CONFIG_FILE: &str = "update_images.toml";

/// Where the tool looks for its inputs. Every path is resolved against `root`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    pub root: PathBuf,
    /// Also the prefix written in front of every image path.
    pub images_dir: String,
    pub script_file: String,
    pub html_file: String,
    pub cache_busting: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            images_dir: "images".to_string(),
            script_file: "app.js".to_string(),
            html_file: "index.html".to_string(),
            cache_busting: true,
        }
    }
}

impl Config {
    /// Same defaults, rooted somewhere else.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Layers the optional TOML file at `path` over the defaults.
    /// A missing file leaves the defaults untouched.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let builder = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?)
            .add_source(
                config::File::new(&path.to_string_lossy(), FileFormat::Toml).required(false),
            );

        let config: Config = builder.build()?.try_deserialize()?;

        log::debug!("{}", config.summary());

        Ok(config)
    }

    /// Like [`Config::load`], but an unreadable or malformed file is logged
    /// and the defaults are used instead, so the update steps always run.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        Self::load(path).unwrap_or_else(|e| {
            log::warn!(
                "Ignoring '{}' ({}), using the built-in defaults.",
                path.display(),
                e
            );
            Self::default()
        })
    }

    pub fn summary(&self) -> String {
        let body = toml::to_string_pretty(self).unwrap_or_else(|e| format!("<{e}>"));

        format!(
            indoc!(
                "
                -------------
                Configuration
                -------------
                {}"
            ),
            body
        )
    }
}
