pub mod cache_bust;
pub mod config;
pub mod error;
pub mod run;
pub mod scanner;
pub mod script;

pub use cache_bust::{bump_versions, update_cache_busting, AssetKind};
pub use config::Config;
pub use error::UpdateError;
pub use run::{run, Report, StepOutcome};
pub use scanner::{image_paths, ImagePaths};
pub use script::{render_image_block, replace_image_block, update_script};
