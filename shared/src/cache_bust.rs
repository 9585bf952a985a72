use std::{fs, path::Path};

use crate::error::UpdateError;

const VERSION_DELIMITER: &str = "?v=";

/// A reference line whose `?v=<N>` query gets bumped on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Stylesheet,
    Script,
}

impl AssetKind {
    pub fn marker(self) -> &'static str {
        match self {
            AssetKind::Stylesheet => r#"href="style.css?v="#,
            AssetKind::Script => r#"src="app.js?v="#,
        }
    }

    /// What follows the new version number. Anything the original line
    /// carried after the closing quote is not kept.
    pub fn closing(self) -> &'static str {
        match self {
            AssetKind::Stylesheet => "\">\n",
            AssetKind::Script => "\"></script>\n",
        }
    }

    pub fn detect(line: &str) -> Option<Self> {
        [AssetKind::Stylesheet, AssetKind::Script]
            .into_iter()
            .find(|kind| line.contains(kind.marker()))
    }
}

/// Reads the version out of a matched line: the first run of digits between
/// `?v=` and the next quote.
fn version_digits(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once(VERSION_DELIMITER)?;
    let field = rest.split('"').next().unwrap_or_default();

    let start = field.find(|c: char| c.is_ascii_digit())?;
    let digits = &field[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    Some(&digits[..end])
}

/// Adds one to a run of ASCII digits without any width limit. Leading zeros
/// are dropped, as an integer parse would.
fn increment_decimal(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');

    let mut bytes = trimmed.as_bytes().to_vec();
    let mut carry = true;

    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            carry = false;
            break;
        }
    }

    if carry {
        bytes.insert(0, b'1');
    }

    bytes.into_iter().map(char::from).collect()
}

fn bump_line(line: &str, kind: AssetKind, line_number: usize) -> Result<String, UpdateError> {
    let version = version_digits(line).ok_or_else(|| UpdateError::MalformedVersion {
        line: line_number,
        text: line.trim_end().to_string(),
    })?;
    let next = increment_decimal(version);

    let prefix = line
        .split_once(VERSION_DELIMITER)
        .map(|(prefix, _)| prefix)
        .unwrap_or(line);

    log::debug!("line {}: {:?} v{} -> v{}", line_number, kind, version, next);

    Ok(format!("{prefix}{VERSION_DELIMITER}{next}{}", kind.closing()))
}

/// Bumps every stylesheet and script version in `content`.
///
/// Lines without a marker come back untouched, line ending included. A
/// single unparsable version fails the whole document.
pub fn bump_versions(content: &str) -> Result<String, UpdateError> {
    let mut output = String::with_capacity(content.len() + 8);

    for (index, line) in content.split_inclusive('\n').enumerate() {
        match AssetKind::detect(line) {
            Some(kind) => output.push_str(&bump_line(line, kind, index + 1)?),
            None => output.push_str(line),
        }
    }

    Ok(output)
}

/// Rewrites `root/html_file` with bumped versions. Nothing is written unless
/// every line could be processed.
pub fn update_cache_busting(root: &Path, html_file: &str) -> Result<(), UpdateError> {
    let path = root.join(html_file);

    if !path.is_file() {
        return Err(UpdateError::HtmlNotFound(html_file.into()));
    }

    let content = fs::read_to_string(&path).map_err(|e| UpdateError::io(html_file, e))?;
    let new_content = bump_versions(&content)?;

    fs::write(&path, new_content).map_err(|e| UpdateError::io(html_file, e))
}
