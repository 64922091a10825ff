//! Spawning command lines through the user's shell.

use std::path::Path;

use crate::error::Error;

/// Seam through which the store executes the user's shell. Tests substitute a
/// recording fake; production code uses [`ShellCommandRunner`].
pub trait CommandRunner {
    /// Runs the shell with the given arguments, optionally in a working
    /// directory, with stdio inherited from the calling process.
    fn run(&self, current_dir: Option<&Path>, args: &[String]) -> Result<(), Error>;
}

/// Executes the user's shell binary as a child process.
pub struct ShellCommandRunner {
    shell_bin: String,
}

impl ShellCommandRunner {
    /// Creates a runner for the given shell binary path.
    pub fn new(shell_bin: impl Into<String>) -> Self {
        Self {
            shell_bin: shell_bin.into(),
        }
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, current_dir: Option<&Path>, args: &[String]) -> Result<(), Error> {
        let mut command = std::process::Command::new(&self.shell_bin);
        command.args(args);
        if let Some(dir) = current_dir {
            command.current_dir(dir);
        }

        tracing::debug!(
            target: "commands",
            shell = %self.shell_bin,
            ?args,
            dir = ?current_dir,
            "spawning shell command"
        );

        let status = command.status()?;
        if !status.success() {
            return Err(Error::CommandFailed(status.code().unwrap_or(-1)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn runs_shell_with_arguments() -> anyhow::Result<()> {
        let runner = ShellCommandRunner::new("/bin/sh");
        runner.run(None, &["-c".to_string(), "true".to_string()])?;
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_an_error() {
        let runner = ShellCommandRunner::new("/bin/sh");
        let result = runner.run(None, &["-c".to_string(), "exit 3".to_string()]);
        assert!(matches!(result, Err(Error::CommandFailed(3))));
    }
}
