//! Plan building: answers in, dependencies + files + ordered actions out
//!
//! This module does no I/O. A [`Plan`] is built once from a complete
//! [`AnswerSet`] and handed to the [`Executor`](crate::executor::Executor).

pub mod deps;
pub mod edit;
pub mod files;

use crate::answers::{AnswerSet, PackageManager, ProjectName, Testing, Variant};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// One externally visible effect, performed by the executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalAction {
    /// Run the scaffolding tool to create the base project
    Scaffold {
        project_name: ProjectName,
        variant: Variant,
    },
    /// Switch the working context into the freshly scaffolded project
    EnterProject { dir: PathBuf },
    Install {
        manager: PackageManager,
        packages: Vec<&'static str>,
        dev: bool,
    },
    CreateDir { path: PathBuf },
    /// Create or overwrite a text file
    WriteFile { path: PathBuf, content: String },
    /// Prepend a directive to an existing file unless already present
    EnsurePrelude {
        path: PathBuf,
        directive: &'static str,
    },
    /// Merge entries into the `scripts` table of a package manifest
    MergeScripts {
        path: PathBuf,
        entries: Vec<(&'static str, &'static str)>,
    },
    GitInit,
    /// Append to a file only when it already exists
    AppendIfExists { path: PathBuf, content: String },
    Done,
}

impl fmt::Display for ExternalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalAction::Scaffold {
                project_name,
                variant,
            } => write!(f, "scaffold {} from the {} template", project_name, variant),
            ExternalAction::EnterProject { dir } => write!(f, "enter {}", dir.display()),
            ExternalAction::Install {
                manager,
                packages,
                dev,
            } => {
                let kind = if *dev { "dev dependencies" } else { "dependencies" };
                write!(f, "install {} with {}: {}", kind, manager, packages.join(", "))
            }
            ExternalAction::CreateDir { path } => write!(f, "create {}/", path.display()),
            ExternalAction::WriteFile { path, .. } => write!(f, "write {}", path.display()),
            ExternalAction::EnsurePrelude { path, directive } => {
                write!(f, "add `{}` to {}", directive, path.display())
            }
            ExternalAction::MergeScripts { path, entries } => {
                let names: Vec<&str> = entries.iter().map(|(name, _)| *name).collect();
                write!(f, "add scripts {} to {}", names.join(", "), path.display())
            }
            ExternalAction::GitInit => write!(f, "initialize git repository"),
            ExternalAction::AppendIfExists { path, .. } => {
                write!(f, "append to {}", path.display())
            }
            ExternalAction::Done => write!(f, "done"),
        }
    }
}

/// Immutable description of a scaffold run
#[derive(Debug, Clone)]
pub struct Plan {
    project_name: ProjectName,
    variant: Variant,
    package_manager: PackageManager,
    testing: Testing,
    dependencies: Vec<&'static str>,
    dev_dependencies: Vec<&'static str>,
    actions: Vec<ExternalAction>,
}

impl Plan {
    pub fn project_name(&self) -> &ProjectName {
        &self.project_name
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn dependencies(&self) -> &[&'static str] {
        &self.dependencies
    }

    pub fn dev_dependencies(&self) -> &[&'static str] {
        &self.dev_dependencies
    }

    pub fn actions(&self) -> &[ExternalAction] {
        &self.actions
    }

    /// Directory the project is scaffolded into, relative to the base directory
    pub fn project_dir(&self) -> &Path {
        Path::new(self.project_name.as_str())
    }

    /// Files written by the plan, keyed by path relative to the project
    pub fn generated_files(&self) -> BTreeMap<&Path, &str> {
        self.actions
            .iter()
            .filter_map(|action| match action {
                ExternalAction::WriteFile { path, content } => {
                    Some((path.as_path(), content.as_str()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn package_count(&self) -> usize {
        self.dependencies.len() + self.dev_dependencies.len()
    }

    /// Commands to show the user once the project exists
    pub fn next_steps(&self) -> Vec<String> {
        let pm = self.package_manager;
        let mut steps = vec![
            format!("cd {}", self.project_name),
            format!("{} run dev", pm),
        ];
        if self.testing.is_enabled() {
            steps.push(format!("{} run test", pm));
        }
        steps
    }
}

fn write(path: impl Into<PathBuf>, content: impl Into<String>) -> ExternalAction {
    ExternalAction::WriteFile {
        path: path.into(),
        content: content.into(),
    }
}

/// Build the plan for a complete answer set
pub fn build_plan(answers: &AnswerSet) -> Plan {
    let dependencies = deps::dependencies(answers);
    let dev_dependencies = deps::dev_dependencies(answers);
    let variant = answers.variant;
    let mut actions = Vec::new();

    actions.push(ExternalAction::Scaffold {
        project_name: answers.project_name.clone(),
        variant,
    });
    actions.push(ExternalAction::EnterProject {
        dir: PathBuf::from(answers.project_name.as_str()),
    });

    if !dependencies.is_empty() {
        actions.push(ExternalAction::Install {
            manager: answers.package_manager,
            packages: dependencies.clone(),
            dev: false,
        });
    }
    if !dev_dependencies.is_empty() {
        actions.push(ExternalAction::Install {
            manager: answers.package_manager,
            packages: dev_dependencies.clone(),
            dev: true,
        });
    }

    if answers.tailwind || answers.alias.token().is_some() {
        actions.push(write(files::vite_config_path(variant), files::vite_config(answers)));
    }
    if answers.tailwind {
        actions.push(ExternalAction::EnsurePrelude {
            path: PathBuf::from(files::STYLESHEET_PATH),
            directive: files::TAILWIND_DIRECTIVE,
        });
    }

    for folder in &answers.folders {
        actions.push(ExternalAction::CreateDir {
            path: Path::new("src").join(folder.name()),
        });
        if let Some(index) = files::folder_index_path(*folder, variant) {
            actions.push(write(index, files::folder_index(*folder)));
        }
    }

    if answers.env {
        actions.push(write(".env", files::ENV_FILE));
        actions.push(write(".env.example", files::ENV_EXAMPLE_FILE));
    }

    if answers.testing.uses_vitest() {
        actions.push(write(
            files::vitest_config_path(variant),
            files::vitest_config(variant, answers.testing),
        ));
        if answers.testing == Testing::VitestRtl {
            actions.push(write(files::vitest_setup_path(variant), files::VITEST_SETUP_FILE));
        }
        actions.push(ExternalAction::MergeScripts {
            path: PathBuf::from("package.json"),
            entries: files::VITEST_SCRIPTS.to_vec(),
        });
    }

    if answers.eslint_prettier {
        actions.push(write(".prettierrc", files::prettier_config()));
    }

    if answers.readme {
        actions.push(write("README.md", files::readme(answers)));
    }

    if answers.git {
        actions.push(ExternalAction::GitInit);
        if answers.husky {
            actions.push(ExternalAction::AppendIfExists {
                path: PathBuf::from(".gitignore"),
                content: files::GITIGNORE_ADDITIONS.to_string(),
            });
        }
    }

    actions.push(ExternalAction::Done);

    Plan {
        project_name: answers.project_name.clone(),
        variant,
        package_manager: answers.package_manager,
        testing: answers.testing,
        dependencies,
        dev_dependencies,
        actions,
    }
}
