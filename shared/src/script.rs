use std::{fs, path::Path, sync::LazyLock};

use regex::{NoExpand, Regex};

use crate::error::UpdateError;

static IMAGE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)const images = \[.*?\];").expect("image block pattern is valid")
});

const ENTRY_INDENT: &str = "        ";
const CLOSE_INDENT: &str = "    ";

/// Renders the `const images = [...]` literal for `paths`.
pub fn render_image_block<S: AsRef<str>>(paths: &[S]) -> String {
    let separator = format!(",\n{ENTRY_INDENT}");
    let entries = paths
        .iter()
        .map(|path| format!("'{}'", path.as_ref()))
        .collect::<Vec<_>>()
        .join(separator.as_str());

    format!("const images = [\n{ENTRY_INDENT}{entries}\n{CLOSE_INDENT}];")
}

/// Swaps the first image block in `content` for a freshly rendered one.
/// Returns `None` when the file has no such block.
pub fn replace_image_block<S: AsRef<str>>(content: &str, paths: &[S]) -> Option<String> {
    if !IMAGE_BLOCK.is_match(content) {
        return None;
    }

    let block = render_image_block(paths);

    Some(IMAGE_BLOCK.replace(content, NoExpand(&block)).into_owned())
}

/// Rewrites the image block of `root/script_file` in place.
pub fn update_script<S: AsRef<str>>(
    root: &Path,
    script_file: &str,
    paths: &[S],
) -> Result<(), UpdateError> {
    let path = root.join(script_file);

    if !path.is_file() {
        return Err(UpdateError::ScriptNotFound(script_file.into()));
    }

    let content = fs::read_to_string(&path).map_err(|e| UpdateError::io(script_file, e))?;

    let new_content = replace_image_block(&content, paths)
        .ok_or_else(|| UpdateError::PatternNotFound(script_file.into()))?;

    log::debug!(
        "writing {} image entries to {}",
        paths.len(),
        path.display()
    );

    fs::write(&path, new_content).map_err(|e| UpdateError::io(script_file, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::Result;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn renders_fixed_indentation() {
        let block = render_image_block(&["images/a.png", "images/b.jpg"]);
        assert_eq!(
            block,
            "const images = [\n        'images/a.png',\n        'images/b.jpg'\n    ];"
        );
    }

    #[test]
    fn renders_empty_list_like_an_empty_join() {
        let block = render_image_block::<&str>(&[]);
        assert_eq!(block, "const images = [\n        \n    ];");
    }

    #[test]
    fn replaces_multiline_block() {
        let content = "const images = [\n  'old.png'\n];";
        let updated = replace_image_block(content, &["images/a.png", "images/b.jpg"]);
        assert_eq!(
            updated.as_deref(),
            Some("const images = [\n        'images/a.png',\n        'images/b.jpg'\n    ];")
        );
    }

    #[test]
    fn keeps_surrounding_code() {
        let content = indoc! {"
            // gallery
            document.addEventListener('DOMContentLoaded', () => {
                const images = ['old.png', 'older.png'];
                const colors = ['red'];
            });
        "};

        let updated = replace_image_block(content, &["images/cat.svg"]).unwrap();
        assert_eq!(
            updated,
            indoc! {"
                // gallery
                document.addEventListener('DOMContentLoaded', () => {
                    const images = [
                        'images/cat.svg'
                    ];
                    const colors = ['red'];
                });
            "}
        );
    }

    #[test]
    fn stops_at_the_nearest_terminator() {
        let content = "const images = [\n'a'\n];\nconst more = [1];\n";
        let updated = replace_image_block(content, &["x"]).unwrap();
        assert_eq!(
            updated,
            "const images = [\n        'x'\n    ];\nconst more = [1];\n"
        );
    }

    #[test]
    fn only_first_block_is_replaced() {
        let content = "const images = [];\nconst images = [];\n";
        let updated = replace_image_block(content, &["x"]).unwrap();
        assert_eq!(
            updated,
            "const images = [\n        'x'\n    ];\nconst images = [];\n"
        );
    }

    #[test]
    fn dollar_signs_are_inserted_literally() {
        let updated = replace_image_block("const images = [];", &["images/$1.png"]).unwrap();
        assert!(updated.contains("'images/$1.png'"));
    }

    #[test]
    fn no_block_means_no_replacement() {
        assert_eq!(replace_image_block("const pictures = [];", &["x"]), None);
        assert_eq!(replace_image_block("const images = [ 'a'", &["x"]), None);
    }

    #[test]
    fn update_script_rewrites_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.js");
        fs::write(&path, "let x = 1;\nconst images = [\n  'old.png'\n];\n")?;

        update_script(dir.path(), "app.js", &["images/a.png"])?;

        assert_eq!(
            fs::read_to_string(&path)?,
            "let x = 1;\nconst images = [\n        'images/a.png'\n    ];\n"
        );
        Ok(())
    }

    #[test]
    fn update_script_without_block_leaves_file_alone() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.js");
        let original = "const pictures = [\n  'old.png'\n];\n";
        fs::write(&path, original)?;

        let err = update_script(dir.path(), "app.js", &["images/a.png"]).unwrap_err();
        assert!(matches!(err, UpdateError::PatternNotFound(_)));
        assert_eq!(
            err.to_string(),
            "Could not find the 'const images = [...]' array in 'app.js'."
        );
        assert_eq!(fs::read_to_string(&path)?, original);
        Ok(())
    }

    #[test]
    fn update_script_missing_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.js");

        let err = update_script(dir.path(), "app.js", &["images/a.png"]).unwrap_err();
        assert!(matches!(err, UpdateError::ScriptNotFound(_)));
        assert_eq!(err.to_string(), "Script file 'app.js' not found.");
        assert!(!path.exists());
        Ok(())
    }
}
