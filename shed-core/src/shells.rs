//! Supported shells and their dialect-specific behaviors.

use std::path::Path;

use crate::error::Error;

/// A shell supported by the workspace store.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Shell {
    /// POSIX sh.
    Sh,
    /// GNU bash.
    Bash,
    /// zsh.
    Zsh,
    /// fish.
    Fish,
}

impl Shell {
    /// Resolves the shell from the path of a shell binary (typically the
    /// value of `$SHELL`), keyed off its basename.
    pub fn from_bin(shell_bin: &str) -> Result<Self, Error> {
        let basename = Path::new(shell_bin)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        // Check fish/bash/zsh before sh; their names all contain "sh".
        for shell in [Self::Fish, Self::Bash, Self::Zsh, Self::Sh] {
            if basename.contains(shell.tag()) {
                return Ok(shell);
            }
        }

        Err(Error::UnsupportedShell(shell_bin.to_string()))
    }

    /// The dialect tag for this shell, as used in config files, file
    /// extensions, and catalog extraction.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Sh => "sh",
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Fish => "fish",
        }
    }

    /// Whether this shell belongs to the POSIX family.
    pub const fn is_posix(self) -> bool {
        !matches!(self, Self::Fish)
    }

    /// Builds the statement exporting an environment variable in this shell's
    /// syntax.
    pub fn export_statement(self, name: &str, value: &str) -> String {
        if self.is_posix() {
            format!("export {name}={value}")
        } else {
            format!("set -x -g {name} {value}")
        }
    }

    /// The dialect tags of all supported shells.
    pub fn supported_tags() -> Vec<&'static str> {
        use strum::IntoEnumIterator;
        Self::iter().map(Self::tag).collect()
    }
}
