//! The on-disk workspace store.
//!
//! Layout, rooted at the store's config directory (`~/.config/shed` by
//! default):
//!
//! ```text
//! config.toml                        # shell the store was initialized under
//! .gitignore                         # keeps env files out of dotfile repos
//! workspaces/<name>/config.toml      # app + project path
//! workspaces/<name>/functions/functions.<ext>
//! workspaces/<name>/envs/<env>.<ext>
//! ```

use std::path::{Path, PathBuf};

use etcetera::BaseStrategy;

use crate::commands::{CommandRunner, ShellCommandRunner};
use crate::config::{StoreConfig, WorkspaceConfig};
use crate::error::Error;
use crate::shells::Shell;

const DEFAULT_ENV: &str = "default";
const ENV_VARIABLE_PREFIX: &str = "SHED";
const GITIGNORE_CONTENT: &str = "**/envs/**\n";

/// A fully loaded workspace.
#[derive(Clone, Debug)]
pub struct Workspace {
    /// The workspace's name.
    pub name: String,
    /// The function catalog advertised by the workspace, sorted by name.
    pub functions: Vec<shed_parser::Function>,
    /// Names of the workspace's envs, sorted.
    pub envs: Vec<String>,
    /// The workspace's configuration.
    pub config: WorkspaceConfig,
    dir: PathBuf,
    function_file: PathBuf,
}

impl Workspace {
    /// Path of the workspace's directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the workspace's function file.
    pub fn function_file(&self) -> &Path {
        &self.function_file
    }

    /// Whether the catalog contains a function with the given name.
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.iter().any(|f| f.name == name)
    }

    /// Whether the workspace has an env with the given name.
    pub fn has_env(&self, env: &str) -> bool {
        self.envs.iter().any(|e| e == env)
    }
}

/// Options used to construct a [`WorkspaceStore`].
#[derive(Clone, Debug, Default)]
pub struct StoreOptions {
    /// Path of the user's shell binary (usually `$SHELL`).
    pub shell_bin: String,
    /// Preferred editor (`$EDITOR`), if set.
    pub editor: Option<String>,
    /// Fallback editor (`$VISUAL`), if set.
    pub visual: Option<String>,
    /// Overrides the default config directory.
    pub config_dir: Option<PathBuf>,
}

/// Owns the on-disk store of workspaces and the shell context used to load
/// and run their functions.
pub struct WorkspaceStore {
    config_dir: PathBuf,
    editor: String,
    shell: Shell,
    runner: Box<dyn CommandRunner>,
}

impl WorkspaceStore {
    /// Creates a store from the given options, resolving the shell from the
    /// shell binary path and the editor from `$EDITOR`/`$VISUAL`.
    pub fn new(options: StoreOptions) -> Result<Self, Error> {
        let editor = options
            .editor
            .filter(|editor| !editor.is_empty())
            .or_else(|| options.visual.filter(|visual| !visual.is_empty()))
            .ok_or(Error::NoEditorConfigured)?;

        let shell = Shell::from_bin(&options.shell_bin)?;
        let config_dir = match options.config_dir {
            Some(dir) => dir,
            None => default_config_dir()?,
        };

        Ok(Self {
            config_dir,
            editor,
            shell,
            runner: Box::new(ShellCommandRunner::new(options.shell_bin)),
        })
    }

    /// Replaces the command runner. Used by tests to record spawned commands
    /// instead of executing them.
    pub fn with_runner(mut self, runner: Box<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// The store's config directory.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// The shell the store operates under.
    pub const fn shell(&self) -> Shell {
        self.shell
    }

    /// Lists all workspaces, fully loaded, sorted by name. A store with no
    /// workspaces directory yet is an empty list, not an error.
    pub fn list(&self) -> Result<Vec<Workspace>, Error> {
        let mut workspaces = Vec::new();

        let entries = match std::fs::read_dir(self.workspaces_dir()) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(workspaces),
            Err(e) => return Err(e.into()),
        };

        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if !entry.file_type()?.is_dir() || name.starts_with('.') {
                continue;
            }
            workspaces.push(self.get(&name)?);
        }

        workspaces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(workspaces)
    }

    /// Loads one workspace by name, validating its on-disk state and
    /// extracting its function catalog.
    pub fn get(&self, name: &str) -> Result<Workspace, Error> {
        let dir = self.workspace_dir(name);
        if !dir.is_dir() {
            return Err(Error::WorkspaceNotFound(name.to_string()));
        }

        let config = WorkspaceConfig::load(&self.workspace_config_file(name))
            .map_err(|_| Error::CorruptedWorkspaceConfig(name.to_string()))?;
        if config.app.is_empty() || config.path.as_os_str().is_empty() {
            return Err(Error::CorruptedWorkspaceConfig(name.to_string()));
        }
        if config.app != self.shell.tag() {
            return Err(Error::WorkspaceShellMismatch(
                config.app,
                self.shell.tag().to_string(),
            ));
        }

        if !self.env_file(name, DEFAULT_ENV).is_file() {
            return Err(Error::MissingWorkspaceFile(name.to_string(), "default env"));
        }

        let function_file = self.function_file(name);
        let content = std::fs::read(&function_file)
            .map_err(|_| Error::MissingWorkspaceFile(name.to_string(), "function"))?;

        let mut functions = shed_parser::extract_functions(self.shell.tag(), &content);
        functions.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Workspace {
            name: name.to_string(),
            functions,
            envs: self.list_envs(name)?,
            config,
            dir,
            function_file,
        })
    }

    /// Creates a workspace bound to the given project path, with an empty
    /// function file and a `default` env.
    pub fn create(&self, name: &str, path: &Path) -> Result<(), Error> {
        if self.workspace_dir(name).exists() {
            return Err(Error::WorkspaceAlreadyExists(name.to_string()));
        }
        if !path.exists() {
            return Err(Error::PathDoesNotExist(path.to_path_buf()));
        }

        self.ensure_store()?;
        self.create_workspace_dirs(name)?;
        touch(&self.function_file(name))?;
        touch(&self.env_file(name, DEFAULT_ENV))?;

        WorkspaceConfig {
            app: self.shell.tag().to_string(),
            path: path.to_path_buf(),
        }
        .save(&self.workspace_config_file(name))
    }

    /// Creates a new env file in a workspace.
    pub fn create_env(&self, name: &str, env: &str) -> Result<(), Error> {
        let workspace = self.get(name)?;
        if workspace.has_env(env) {
            return Err(Error::EnvAlreadyExists(env.to_string()));
        }
        touch(&self.env_file(name, env))
    }

    /// Opens a workspace's function file in the user's editor.
    pub fn edit(&self, name: &str) -> Result<(), Error> {
        let workspace = self.get(name)?;
        self.edit_file(workspace.function_file())
    }

    /// Opens one of a workspace's env files in the user's editor.
    pub fn edit_env(&self, name: &str, env: &str) -> Result<(), Error> {
        let workspace = self.get(name)?;
        if !workspace.has_env(env) {
            return Err(Error::EnvNotFound(env.to_string()));
        }
        self.edit_file(&self.env_file(name, env))
    }

    /// Runs a workspace function in the user's shell, with the workspace's
    /// env and function files sourced and its project path as the working
    /// directory.
    ///
    /// # Arguments
    ///
    /// * `name` - The workspace to run in.
    /// * `env` - The env to load; the `default` env when `None`.
    /// * `function_and_args` - The function name followed by its arguments.
    pub fn run_function(
        &self,
        name: &str,
        env: Option<&str>,
        function_and_args: &[String],
    ) -> Result<(), Error> {
        let workspace = self.get(name)?;
        let env = env.unwrap_or(DEFAULT_ENV);

        if !workspace.has_env(env) {
            return Err(Error::EnvNotFound(env.to_string()));
        }
        let Some(function) = function_and_args.first() else {
            return Err(Error::FunctionNotFound(String::new()));
        };
        if !workspace.has_function(function) {
            return Err(Error::FunctionNotFound(function.clone()));
        }

        let args = self.load_arguments(&workspace, env, function_and_args);
        self.runner.run(Some(&workspace.config.path), &args)
    }

    /// Deletes a workspace and everything in it.
    pub fn remove(&self, name: &str) -> Result<(), Error> {
        let workspace = self.get(name)?;
        std::fs::remove_dir_all(workspace.dir())?;
        Ok(())
    }

    /// Sets one entry of a workspace's config. The key set is closed: `app`
    /// (must be a supported shell tag) and `path` (must exist on disk).
    pub fn set_config(&self, name: &str, key: &str, value: &str) -> Result<(), Error> {
        if !self.workspace_dir(name).is_dir() {
            return Err(Error::WorkspaceNotFound(name.to_string()));
        }

        let file = self.workspace_config_file(name);
        let mut config = WorkspaceConfig::load(&file)
            .map_err(|_| Error::CorruptedWorkspaceConfig(name.to_string()))?;

        match key {
            "app" => {
                if !Shell::supported_tags().contains(&value) {
                    return Err(Error::UnsupportedShell(value.to_string()));
                }
                config.app = value.to_string();
            }
            "path" => {
                let path = PathBuf::from(value);
                if !path.exists() {
                    return Err(Error::PathDoesNotExist(path));
                }
                config.path = path;
            }
            _ => return Err(Error::InvalidConfigKey(key.to_string())),
        }

        config.save(&file)
    }

    /// Reads one entry of a workspace's config.
    pub fn get_config(&self, name: &str, key: &str) -> Result<String, Error> {
        if !self.workspace_dir(name).is_dir() {
            return Err(Error::WorkspaceNotFound(name.to_string()));
        }

        let config = WorkspaceConfig::load(&self.workspace_config_file(name))
            .map_err(|_| Error::CorruptedWorkspaceConfig(name.to_string()))?;

        match key {
            "app" => Ok(config.app),
            "path" => Ok(config.path.display().to_string()),
            _ => Err(Error::InvalidConfigKey(key.to_string())),
        }
    }

    /// Builds one cd-alias statement per workspace, for eval'ing in rc files.
    pub fn build_aliases(&self, prefix: &str) -> Result<Vec<String>, Error> {
        Ok(self
            .list()?
            .iter()
            .map(|workspace| {
                format!(
                    "alias {prefix}{}=\"cd {}\"",
                    workspace.name,
                    workspace.config.path.display()
                )
            })
            .collect())
    }

    /// Recreates any missing directories and files in existing workspace
    /// folders.
    pub fn fix(&self) -> Result<(), Error> {
        let entries = match std::fs::read_dir(self.workspaces_dir()) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        for entry in entries {
            let name = entry?.file_name().to_string_lossy().to_string();
            self.create_workspace_dirs(&name)?;
            touch(&self.function_file(&name))?;
            touch(&self.env_file(&name, DEFAULT_ENV))?;
        }
        Ok(())
    }

    /// Moves workspaces from the flat pre-`workspaces/` layout into the
    /// current layout. A store already using the current layout is left
    /// untouched.
    pub fn migrate(&self) -> Result<(), Error> {
        if self.workspaces_dir().is_dir() {
            return Ok(());
        }

        let entries = match std::fs::read_dir(&self.config_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        std::fs::create_dir_all(self.workspaces_dir())?;
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if !entry.file_type()?.is_dir() || name.starts_with('.') || name == "workspaces" {
                continue;
            }
            std::fs::rename(entry.path(), self.workspace_dir(&name))?;
            self.create_workspace_dirs(&name)?;
            touch(&self.env_file(&name, DEFAULT_ENV))?;
        }
        Ok(())
    }

    fn load_arguments(
        &self,
        workspace: &Workspace,
        env: &str,
        function_and_args: &[String],
    ) -> Vec<String> {
        let mut statements = vec![
            self.shell
                .export_statement(&format!("{ENV_VARIABLE_PREFIX}_NAME"), &workspace.name),
            self.shell
                .export_statement(&format!("{ENV_VARIABLE_PREFIX}_ENV"), env),
        ];

        let env_file = self.env_file(&workspace.name, env);
        if env_file.is_file() {
            statements.push(format!("source {}", env_file.display()));
        }
        statements.push(format!("source {}", workspace.function_file().display()));

        if self.shell.is_posix() {
            if !function_and_args.is_empty() {
                statements.push(function_and_args.join(" "));
            }
            vec!["-c".to_string(), statements.join(" && ")]
        } else {
            // fish takes each setup statement as its own -C flag.
            let mut args = Vec::new();
            for statement in statements {
                args.push("-C".to_string());
                args.push(statement);
            }
            if !function_and_args.is_empty() {
                args.push("-c".to_string());
                args.push(function_and_args.join(" "));
            }
            args
        }
    }

    fn edit_file(&self, path: &Path) -> Result<(), Error> {
        self.runner.run(
            None,
            &[
                "-c".to_string(),
                format!("{} {}", self.editor, path.display()),
            ],
        )
    }

    fn ensure_store(&self) -> Result<(), Error> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::write(self.gitignore_file(), GITIGNORE_CONTENT)?;

        let config_file = self.store_config_file();
        if config_file.is_file() {
            let config = StoreConfig::load(&config_file)?;
            if config.shell != self.shell.tag() {
                return Err(Error::ShellConfigMismatch(
                    config.shell,
                    self.shell.tag().to_string(),
                ));
            }
        } else {
            StoreConfig {
                shell: self.shell.tag().to_string(),
            }
            .save(&config_file)?;
        }
        Ok(())
    }

    fn create_workspace_dirs(&self, name: &str) -> Result<(), Error> {
        std::fs::create_dir_all(self.functions_dir(name))?;
        std::fs::create_dir_all(self.envs_dir(name))?;
        Ok(())
    }

    fn list_envs(&self, name: &str) -> Result<Vec<String>, Error> {
        let mut envs = Vec::new();
        for entry in std::fs::read_dir(self.envs_dir(name))? {
            let path = entry?.path();
            if let Some(stem) = path.file_stem() {
                envs.push(stem.to_string_lossy().to_string());
            }
        }
        envs.sort();
        Ok(envs)
    }

    fn store_config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    fn gitignore_file(&self) -> PathBuf {
        self.config_dir.join(".gitignore")
    }

    fn workspaces_dir(&self) -> PathBuf {
        self.config_dir.join("workspaces")
    }

    fn workspace_dir(&self, name: &str) -> PathBuf {
        self.workspaces_dir().join(name)
    }

    fn workspace_config_file(&self, name: &str) -> PathBuf {
        self.workspace_dir(name).join("config.toml")
    }

    fn functions_dir(&self, name: &str) -> PathBuf {
        self.workspace_dir(name).join("functions")
    }

    fn envs_dir(&self, name: &str) -> PathBuf {
        self.workspace_dir(name).join("envs")
    }

    fn function_file(&self, name: &str) -> PathBuf {
        self.functions_dir(name)
            .join(format!("functions.{}", self.shell.tag()))
    }

    fn env_file(&self, name: &str, env: &str) -> PathBuf {
        self.envs_dir(name)
            .join(format!("{env}.{}", self.shell.tag()))
    }
}

fn default_config_dir() -> Result<PathBuf, Error> {
    let strategy = etcetera::choose_base_strategy().map_err(|_| Error::NoHomeDirectory)?;
    Ok(strategy.config_dir().join("shed"))
}

fn touch(path: &Path) -> Result<(), Error> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(())
}
