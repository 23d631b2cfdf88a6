//! Performs a [`Plan`] against the filesystem and external processes
//!
//! Actions run strictly in order; the first failure stops the run and nothing
//! already done is undone. The working directory switch after scaffolding is
//! tracked here rather than via the process-wide current directory.

use crate::error::{ActionError, PreconditionError};
use crate::plan::{edit, ExternalAction, Plan};
use crate::runtime::process::{CommandRunner, CommandSpec, OutputMode};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Result of applying a single action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Nothing to do; the reason is meant for the user
    Skipped(String),
}

/// External command performed by an action, if it runs one
pub fn command_for(action: &ExternalAction) -> Option<CommandSpec> {
    match action {
        ExternalAction::Scaffold {
            project_name,
            variant,
        } => Some(CommandSpec::new(
            "npm",
            [
                "create",
                "vite@latest",
                project_name.as_str(),
                "--",
                "--template",
                variant.template(),
            ],
            OutputMode::Quiet,
        )),
        ExternalAction::Install {
            manager,
            packages,
            dev,
        } => {
            let mut args = vec![manager.add_subcommand()];
            if *dev {
                args.push(manager.dev_flag());
            }
            args.extend(packages.iter().copied());
            Some(CommandSpec::new(manager.command(), args, OutputMode::Stream))
        }
        ExternalAction::GitInit => Some(CommandSpec::new("git", ["init"], OutputMode::Quiet)),
        _ => None,
    }
}

pub struct Executor<R: CommandRunner> {
    runner: R,
    base_dir: PathBuf,
    cwd: PathBuf,
}

impl<R: CommandRunner> Executor<R> {
    /// Create an executor that scaffolds projects inside `base_dir`
    pub fn new(runner: R, base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            runner,
            cwd: base_dir.clone(),
            base_dir,
        }
    }

    /// Current working context for commands and relative paths
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Absolute location the plan scaffolds into
    pub fn target_dir(&self, plan: &Plan) -> PathBuf {
        self.base_dir.join(plan.project_dir())
    }

    /// Fail if the plan cannot start; performs no side effects
    pub fn preflight(&self, plan: &Plan) -> Result<(), PreconditionError> {
        if self.target_dir(plan).exists() {
            return Err(PreconditionError::DirectoryExists(
                plan.project_name().to_string(),
            ));
        }
        Ok(())
    }

    /// Run the whole plan: preflight, then every action in order
    pub async fn execute(&mut self, plan: &Plan) -> crate::error::Result<()> {
        self.preflight(plan)?;
        for action in plan.actions() {
            self.apply(action).await?;
        }
        Ok(())
    }

    /// Perform one action
    pub async fn apply(&mut self, action: &ExternalAction) -> Result<Outcome, ActionError> {
        tracing::debug!(%action, cwd = %self.cwd.display(), "applying");
        let outcome = self.perform(action).await?;
        if let Outcome::Skipped(reason) = &outcome {
            tracing::info!(%action, %reason, "skipped");
        }
        Ok(outcome)
    }

    async fn perform(&mut self, action: &ExternalAction) -> Result<Outcome, ActionError> {
        match action {
            ExternalAction::Scaffold { .. }
            | ExternalAction::Install { .. }
            | ExternalAction::GitInit => {
                if let Some(spec) = command_for(action) {
                    self.runner.run(&spec, &self.cwd).await?;
                }
                Ok(Outcome::Applied)
            }
            ExternalAction::EnterProject { dir } => {
                let dir = self.base_dir.join(dir);
                if !dir.is_dir() {
                    return Err(ActionError::io(
                        "enter",
                        dir,
                        std::io::Error::new(
                            std::io::ErrorKind::NotFound,
                            "scaffolded project directory is missing",
                        ),
                    ));
                }
                self.cwd = dir;
                Ok(Outcome::Applied)
            }
            ExternalAction::CreateDir { path } => {
                let path = self.cwd.join(path);
                fs::create_dir_all(&path)
                    .await
                    .map_err(|e| ActionError::io("create directory", &path, e))?;
                Ok(Outcome::Applied)
            }
            ExternalAction::WriteFile { path, content } => {
                self.write_file(path, content).await?;
                Ok(Outcome::Applied)
            }
            ExternalAction::EnsurePrelude { path, directive } => {
                let Some(existing) = self.read_existing(path).await? else {
                    return Ok(Outcome::Skipped(format!("{} not found", path.display())));
                };
                let updated = edit::with_prelude(&existing, directive);
                if updated == existing {
                    return Ok(Outcome::Skipped(format!(
                        "{} already imports it",
                        path.display()
                    )));
                }
                self.write_file(path, &updated).await?;
                Ok(Outcome::Applied)
            }
            ExternalAction::MergeScripts { path, entries } => {
                let Some(existing) = self.read_existing(path).await? else {
                    return Ok(Outcome::Skipped(format!("{} not found", path.display())));
                };
                let merged =
                    edit::merge_scripts(&existing, entries).map_err(|source| {
                        ActionError::Manifest {
                            path: self.cwd.join(path),
                            source,
                        }
                    })?;
                self.write_file(path, &merged).await?;
                Ok(Outcome::Applied)
            }
            ExternalAction::AppendIfExists { path, content } => {
                let full = self.cwd.join(path);
                if !self.exists(&full).await? {
                    return Ok(Outcome::Skipped(format!("{} not found", path.display())));
                }
                let mut file = fs::OpenOptions::new()
                    .append(true)
                    .open(&full)
                    .await
                    .map_err(|e| ActionError::io("open", &full, e))?;
                file.write_all(content.as_bytes())
                    .await
                    .map_err(|e| ActionError::io("append to", &full, e))?;
                file.flush()
                    .await
                    .map_err(|e| ActionError::io("append to", &full, e))?;
                Ok(Outcome::Applied)
            }
            ExternalAction::Done => Ok(Outcome::Applied),
        }
    }

    async fn exists(&self, path: &Path) -> Result<bool, ActionError> {
        fs::try_exists(path)
            .await
            .map_err(|e| ActionError::io("inspect", path, e))
    }

    async fn read_existing(&self, path: &Path) -> Result<Option<String>, ActionError> {
        let full = self.cwd.join(path);
        if !self.exists(&full).await? {
            return Ok(None);
        }
        fs::read_to_string(&full)
            .await
            .map(Some)
            .map_err(|e| ActionError::io("read", &full, e))
    }

    async fn write_file(&self, path: &Path, content: &str) -> Result<(), ActionError> {
        let full = self.cwd.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ActionError::io("create directory", parent, e))?;
        }
        fs::write(&full, content)
            .await
            .map_err(|e| ActionError::io("write", &full, e))
    }
}
