use std::{fmt::Display, fs, ops::Deref, path::Path};

use crate::error::UpdateError;

/// Web paths of everything inside the images directory, sorted by entry name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePaths(pub Vec<String>);

impl Deref for ImagePaths {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ImagePaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Lists `root/directory` without recursing or filtering.
///
/// Each entry becomes `"{directory}/{name}"` with backslashes turned into
/// forward slashes, so the result can be dropped straight into a script.
pub fn image_paths(root: &Path, directory: &str) -> Result<ImagePaths, UpdateError> {
    let dir_path = root.join(directory);

    if !dir_path.is_dir() {
        return Err(UpdateError::DirectoryNotFound(directory.into()));
    }

    let mut names = Vec::new();

    for entry in fs::read_dir(&dir_path).map_err(|e| UpdateError::io(directory, e))? {
        let entry = entry.map_err(|e| UpdateError::io(directory, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        log::debug!("found entry {}", name);

        names.push(name);
    }

    names.sort();

    Ok(ImagePaths(
        names
            .into_iter()
            .map(|name| format!("{directory}/{name}").replace('\\', "/"))
            .collect(),
    ))
}
