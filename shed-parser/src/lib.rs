//! Implements dialect-aware extraction of function catalogs from shell
//! function files.
//!
//! Given the raw bytes of a user-authored function file and the dialect tag it
//! was written under, the extractor recovers the name and optional one-line
//! description of every callable function defined in it. It recognizes
//! headers only; it never parses function bodies, quoting, or control flow.

mod fish;
mod posix;
mod text;

/// A callable function discovered in a function file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Function {
    /// The function's invocable name, exactly as it appears in the source.
    pub name: String,
    /// Human-authored one-line annotation; empty when none was found.
    pub description: String,
}

/// Family of shell syntax a function file is written in.
///
/// The dialect set is closed; `sh`, `bash`, and `zsh` all share the
/// POSIX-style function header syntax.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dialect {
    /// POSIX-style syntax, shared by `sh`, `bash`, and `zsh`.
    Posix,
    /// The `fish` shell's own syntax.
    Fish,
}

impl Dialect {
    /// Resolves a dialect tag to a scanner family. Tags are matched exactly;
    /// anything outside `sh`/`bash`/`zsh`/`fish` resolves to `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "sh" | "bash" | "zsh" => Some(Self::Posix),
            "fish" => Some(Self::Fish),
            _ => None,
        }
    }
}

/// Extracts the function catalog from the given function file content.
///
/// Records are returned in source order. Content that does not match a
/// recognized function header simply contributes no record; there is no error
/// path. An unsupported dialect tag yields an empty catalog.
///
/// # Arguments
///
/// * `dialect` - The dialect tag the file was written under.
/// * `content` - The full byte content of the function file.
pub fn extract_functions(dialect: &str, content: &[u8]) -> Vec<Function> {
    tracing::debug!(
        target: "parse",
        dialect,
        len = content.len(),
        "extracting function catalog"
    );

    let Some(resolved) = Dialect::from_tag(dialect) else {
        return Vec::new();
    };

    let content = String::from_utf8_lossy(content);
    match resolved {
        Dialect::Posix => posix::scan(&content),
        Dialect::Fish => fish::scan(&content),
    }
}
