use std::fmt::Display;

use crate::{
    cache_bust::update_cache_busting, config::Config, error::UpdateError, scanner::image_paths,
    script::update_script,
};

#[derive(Debug)]
pub enum StepOutcome {
    Updated,
    Failed(UpdateError),
    /// An earlier step failed, so this one never ran.
    Skipped(String),
    Disabled,
}

impl StepOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, StepOutcome::Updated | StepOutcome::Disabled)
    }
}

impl Display for StepOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepOutcome::Updated => write!(f, "updated"),
            StepOutcome::Failed(e) => write!(f, "failed: {}", e),
            StepOutcome::Skipped(reason) => write!(f, "skipped: {}", reason),
            StepOutcome::Disabled => write!(f, "disabled"),
        }
    }
}

#[derive(Debug)]
pub struct Report {
    pub images_found: Option<usize>,
    pub script: StepOutcome,
    pub cache_busting: StepOutcome,
}

impl Report {
    pub fn success(&self) -> bool {
        self.script.is_ok() && self.cache_busting.is_ok()
    }
}

/// Runs the image list update and then, independently, the cache-busting
/// update. Failures are logged and recorded, never propagated.
pub fn run(config: &Config) -> Report {
    log::info!("Starting image library update...");

    let mut images_found = None;

    let script = match image_paths(&config.root, &config.images_dir) {
        Ok(paths) => {
            log::info!(
                "Found {} images in '{}'.",
                paths.len(),
                config.images_dir
            );
            log::debug!("images: {}", paths);

            images_found = Some(paths.len());

            match update_script(&config.root, &config.script_file, paths.as_slice()) {
                Ok(()) => {
                    log::info!("Successfully updated '{}'.", config.script_file);
                    StepOutcome::Updated
                }
                Err(e) => {
                    log::error!("{}", e);
                    log::error!("Failed to update '{}'.", config.script_file);
                    StepOutcome::Failed(e)
                }
            }
        }
        Err(e) => {
            log::error!("{}", e);
            log::error!(
                "Skipped updating '{}': no image list produced.",
                config.script_file
            );
            StepOutcome::Skipped(format!("no image list produced ({})", e))
        }
    };

    let cache_busting = if config.cache_busting {
        log::info!("Updating cache-busting strings...");

        match update_cache_busting(&config.root, &config.html_file) {
            Ok(()) => {
                log::info!(
                    "Successfully updated cache-busting strings in '{}'.",
                    config.html_file
                );
                StepOutcome::Updated
            }
            Err(e) => {
                log::error!("{}", e);
                log::error!(
                    "Failed to update cache-busting strings in '{}'.",
                    config.html_file
                );
                StepOutcome::Failed(e)
            }
        }
    } else {
        StepOutcome::Disabled
    };

    Report {
        images_found,
        script,
        cache_busting,
    }
}
