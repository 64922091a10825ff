//! Completion candidate feeds consumed by shell completion scripts.

use crate::error::Error;
use crate::workspace::WorkspaceStore;

/// Workspace names beginning with the given prefix.
pub fn find_workspaces(store: &WorkspaceStore, prefix: &str) -> Result<Vec<String>, Error> {
    Ok(store
        .list()?
        .into_iter()
        .map(|workspace| workspace.name)
        .filter(|name| name.starts_with(prefix))
        .collect())
}

/// Function names in a workspace beginning with the given prefix. Functions
/// with a description carry it as a tab-separated display hint.
pub fn find_functions(
    store: &WorkspaceStore,
    workspace: &str,
    prefix: &str,
) -> Result<Vec<String>, Error> {
    Ok(store
        .get(workspace)?
        .functions
        .into_iter()
        .filter(|function| function.name.starts_with(prefix))
        .map(|function| {
            if function.description.is_empty() {
                function.name
            } else {
                format!("{}\t{}", function.name, function.description)
            }
        })
        .collect())
}

/// Env names in a workspace beginning with the given prefix.
pub fn find_envs(
    store: &WorkspaceStore,
    workspace: &str,
    prefix: &str,
) -> Result<Vec<String>, Error> {
    Ok(store
        .get(workspace)?
        .envs
        .into_iter()
        .filter(|env| env.starts_with(prefix))
        .collect())
}

#[expect(clippy::panic_in_result_fn)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::StoreOptions;
    use pretty_assertions::assert_eq;

    fn store_with_workspaces() -> anyhow::Result<(WorkspaceStore, tempfile::TempDir, tempfile::TempDir)> {
        let config_dir = tempfile::tempdir()?;
        let project_dir = tempfile::tempdir()?;
        let store = WorkspaceStore::new(StoreOptions {
            shell_bin: "/bin/bash".to_string(),
            editor: Some("vi".to_string()),
            visual: None,
            config_dir: Some(config_dir.path().to_path_buf()),
        })?;

        store.create("api", project_dir.path())?;
        store.create("frontend", project_dir.path())?;
        std::fs::write(
            config_dir
                .path()
                .join("workspaces/api/functions/functions.bash"),
            "# start the api\nserve() {\n true\n}\nsetup() {\n true\n}\nbuild() {\n true\n}\n",
        )?;
        store.create_env("api", "prod")?;

        Ok((store, config_dir, project_dir))
    }

    #[test]
    fn workspaces_filtered_by_prefix() -> anyhow::Result<()> {
        let (store, _config, _project) = store_with_workspaces()?;
        assert_eq!(find_workspaces(&store, "")?, vec!["api", "frontend"]);
        assert_eq!(find_workspaces(&store, "fr")?, vec!["frontend"]);
        assert!(find_workspaces(&store, "x")?.is_empty());
        Ok(())
    }

    #[test]
    fn functions_carry_description_hints() -> anyhow::Result<()> {
        let (store, _config, _project) = store_with_workspaces()?;
        assert_eq!(
            find_functions(&store, "api", "se")?,
            vec!["serve\tstart the api", "setup"]
        );
        Ok(())
    }

    #[test]
    fn envs_filtered_by_prefix() -> anyhow::Result<()> {
        let (store, _config, _project) = store_with_workspaces()?;
        assert_eq!(find_envs(&store, "api", "")?, vec!["default", "prod"]);
        assert_eq!(find_envs(&store, "api", "p")?, vec!["prod"]);
        Ok(())
    }
}
