//! Spawning external commands
//!
//! The executor only talks to processes through [`CommandRunner`], so tests can
//! substitute a fake that records invocations instead of running them.

use crate::error::ActionError;
use async_trait::async_trait;
use colored::Colorize;
use std::fmt;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// What happens to a command's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Capture output; stderr is reported only if the command fails
    Quiet,
    /// Forward output to the user line by line
    Stream,
}

/// A fully specified external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub output: OutputMode,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I, output: OutputMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            output,
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external commands to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, spec: &CommandSpec, cwd: &Path) -> Result<(), ActionError>;
}

/// [`CommandRunner`] backed by real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    async fn run_quiet(&self, spec: &CommandSpec, cwd: &Path) -> Result<(), ActionError> {
        let output = TokioCommand::new(&spec.program)
            .args(&spec.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ActionError::Spawn {
                command: spec.to_string(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ActionError::command_failed(
                spec.to_string(),
                output.status.code(),
                &String::from_utf8_lossy(&output.stderr),
            ))
        }
    }

    async fn run_streaming(&self, spec: &CommandSpec, cwd: &Path) -> Result<(), ActionError> {
        let spawn_error = |source| ActionError::Spawn {
            command: spec.to_string(),
            source,
        };

        let mut child = TokioCommand::new(&spec.program)
            .args(&spec.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        if let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) {
            let mut stdout_reader = BufReader::new(stdout).lines();
            let mut stderr_reader = BufReader::new(stderr).lines();
            let mut stdout_open = true;
            let mut stderr_open = true;

            while stdout_open || stderr_open {
                tokio::select! {
                    line = stdout_reader.next_line(), if stdout_open => {
                        match line {
                            Ok(Some(line)) => println!("  {}", line),
                            Ok(None) => stdout_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stdout:".red(), e);
                                stdout_open = false;
                            }
                        }
                    }
                    line = stderr_reader.next_line(), if stderr_open => {
                        match line {
                            Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                            Ok(None) => stderr_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stderr:".red(), e);
                                stderr_open = false;
                            }
                        }
                    }
                }
            }
        }

        let status = child.wait().await.map_err(spawn_error)?;
        if status.success() {
            Ok(())
        } else {
            // stderr was already shown to the user
            Err(ActionError::command_failed(spec.to_string(), status.code(), ""))
        }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, spec: &CommandSpec, cwd: &Path) -> Result<(), ActionError> {
        tracing::debug!(command = %spec, cwd = %cwd.display(), "spawning");
        match spec.output {
            OutputMode::Quiet => self.run_quiet(spec, cwd).await,
            OutputMode::Stream => self.run_streaming(spec, cwd).await,
        }
    }
}
