//! Answer presets loaded from YAML
//!
//! A preset supplies any subset of answers. In interactive mode its values
//! become the initial value of each prompt; with `--yes` they are the answers.
//!
//! ```yaml
//! variant: react-swc-ts
//! package-manager: pnpm
//! state-manager: jotai
//! testing: vitest
//! alias: "~"
//! folders: [components, hooks, utils]
//! git: false
//! ```

use crate::answers::{
    Alias, AnswerSet, Folder, HttpClient, PackageManager, ProjectName, StateManager, Testing,
    UiLibrary, Variant,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a preset file when `--preset` is not given
pub const PRESET_ENV: &str = "CREATE_VRX_PRESET";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Preset {
    #[serde(default)]
    pub project_name: Option<ProjectName>,
    #[serde(default)]
    pub variant: Option<Variant>,
    #[serde(default)]
    pub package_manager: Option<PackageManager>,
    #[serde(default)]
    pub tailwind: Option<bool>,
    #[serde(default)]
    pub router: Option<bool>,
    #[serde(default)]
    pub http_client: Option<HttpClient>,
    #[serde(default)]
    pub state_manager: Option<StateManager>,
    #[serde(default)]
    pub ui_library: Option<UiLibrary>,
    #[serde(default)]
    pub eslint_prettier: Option<bool>,
    #[serde(default)]
    pub testing: Option<Testing>,
    #[serde(default)]
    pub husky: Option<bool>,
    #[serde(default)]
    pub alias: Option<Alias>,
    #[serde(default)]
    pub folders: Option<Vec<Folder>>,
    #[serde(default)]
    pub env: Option<bool>,
    #[serde(default)]
    pub readme: Option<bool>,
    #[serde(default)]
    pub git: Option<bool>,
}

impl Preset {
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse preset")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid preset {}", path.display()))
    }

    /// Preset path from the explicit flag, else from [`PRESET_ENV`]
    pub fn locate(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| {
            std::env::var_os(PRESET_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
    }

    /// Fill every unanswered field with its default
    pub fn resolve(&self, project_name: ProjectName) -> AnswerSet {
        let variant = self.variant.unwrap_or(Variant::ReactTs);
        let defaults = AnswerSet::with_defaults(project_name, variant);

        AnswerSet {
            package_manager: self.package_manager.unwrap_or(defaults.package_manager),
            tailwind: self.tailwind.unwrap_or(defaults.tailwind),
            router: self.router.unwrap_or(defaults.router),
            http_client: self.http_client.unwrap_or(defaults.http_client),
            state_manager: self.state_manager.unwrap_or(defaults.state_manager),
            ui_library: self.ui_library.unwrap_or(defaults.ui_library),
            eslint_prettier: self.eslint_prettier.unwrap_or(defaults.eslint_prettier),
            testing: self.testing.unwrap_or(defaults.testing),
            husky: self.husky.unwrap_or(defaults.husky),
            alias: self.alias.unwrap_or(defaults.alias),
            folders: match &self.folders {
                Some(folders) => folders.iter().copied().collect(),
                None => defaults.folders.clone(),
            },
            env: self.env.unwrap_or(defaults.env),
            readme: self.readme.unwrap_or(defaults.readme),
            git: self.git.unwrap_or(defaults.git),
            ..defaults
        }
    }
}
