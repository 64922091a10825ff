use std::path::PathBuf;

/// Monolithic error type for workspace operations.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No usable editor was found in the environment.
    #[error("no VISUAL or EDITOR environment variable found")]
    NoEditorConfigured,

    /// The user's home directory could not be determined.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// The given shell binary does not map to a supported shell.
    #[error("unsupported shell: {0}")]
    UnsupportedShell(String),

    /// The store was initialized under a different shell than the current one.
    #[error("the configured shell \"{0}\" is different from the one being used \"{1}\"")]
    ShellConfigMismatch(String, String),

    /// A reference was made to a workspace that does not exist.
    #[error("the workspace \"{0}\" does not exist")]
    WorkspaceNotFound(String),

    /// An attempt was made to create a workspace that already exists.
    #[error("the workspace \"{0}\" already exists")]
    WorkspaceAlreadyExists(String),

    /// A reference was made to an env that does not exist.
    #[error("the env \"{0}\" does not exist")]
    EnvNotFound(String),

    /// An attempt was made to create an env that already exists.
    #[error("the env \"{0}\" already exists")]
    EnvAlreadyExists(String),

    /// A reference was made to a function absent from the workspace catalog.
    #[error("the function \"{0}\" does not exist")]
    FunctionNotFound(String),

    /// The workspace's config file is missing required entries.
    #[error("the config file of the workspace \"{0}\" is corrupted")]
    CorruptedWorkspaceConfig(String),

    /// A required workspace file is missing.
    #[error("the {1} file of the workspace \"{0}\" is missing")]
    MissingWorkspaceFile(String, &'static str),

    /// The workspace was created under a different shell.
    #[error("the \"{0}\" shell is not supported for this workspace, it works with \"{1}\"")]
    WorkspaceShellMismatch(String, String),

    /// An unknown key was used with the workspace config.
    #[error("\"{0}\" is not a valid config key")]
    InvalidConfigKey(String),

    /// A configured path does not exist on disk.
    #[error("path \"{0}\" does not exist")]
    PathDoesNotExist(PathBuf),

    /// A spawned shell command exited with a non-zero status.
    #[error("command exited with status {0}")]
    CommandFailed(i32),

    /// An I/O error occurred.
    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),

    /// A config file could not be parsed.
    #[error("failed to read config: {0}")]
    ConfigReadError(#[from] toml::de::Error),

    /// A config file could not be serialized.
    #[error("failed to write config: {0}")]
    ConfigWriteError(#[from] toml::ser::Error),
}
