//! The answer set collected from the user and its enumerated choices

use crate::error::PreconditionError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Name used when the user does not provide one
pub const DEFAULT_PROJECT_NAME: &str = "my-vrx-app";

/// A project name restricted to `[A-Za-z0-9-_]+`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: impl Into<String>) -> Result<Self, PreconditionError> {
        let name = name.into();
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(name))
        } else {
            Err(PreconditionError::InvalidProjectName(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectName {
    type Error = PreconditionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// create-vite template variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    React,
    ReactTs,
    ReactSwc,
    ReactSwcTs,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::React,
        Variant::ReactTs,
        Variant::ReactSwc,
        Variant::ReactSwcTs,
    ];

    /// Template name passed to create-vite
    pub fn template(&self) -> &'static str {
        match self {
            Variant::React => "react",
            Variant::ReactTs => "react-ts",
            Variant::ReactSwc => "react-swc",
            Variant::ReactSwcTs => "react-swc-ts",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Variant::React => "JavaScript",
            Variant::ReactTs => "TypeScript",
            Variant::ReactSwc => "JavaScript + SWC",
            Variant::ReactSwcTs => "TypeScript + SWC",
        }
    }

    pub fn is_typescript(&self) -> bool {
        self.template().contains("ts")
    }

    pub fn is_swc(&self) -> bool {
        matches!(self, Variant::ReactSwc | Variant::ReactSwcTs)
    }

    /// Extension for generated script files
    pub fn script_ext(&self) -> &'static str {
        if self.is_typescript() {
            "ts"
        } else {
            "js"
        }
    }

    /// Extension of the generated App component
    pub fn component_ext(&self) -> &'static str {
        if self.is_typescript() {
            "tsx"
        } else {
            "jsx"
        }
    }

    /// Vite plugin package providing React support for this variant
    pub fn react_plugin(&self) -> &'static str {
        if self.is_swc() {
            "@vitejs/plugin-react-swc"
        } else {
            "@vitejs/plugin-react"
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm];

    /// Binary name
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Subcommand that adds packages to the manifest
    pub fn add_subcommand(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Yarn | PackageManager::Pnpm => "add",
        }
    }

    pub fn dev_flag(&self) -> &'static str {
        match self {
            PackageManager::Npm => "--save-dev",
            PackageManager::Yarn | PackageManager::Pnpm => "-D",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HttpClient {
    None,
    Axios,
    Ofetch,
}

impl HttpClient {
    pub const ALL: [HttpClient; 3] = [HttpClient::None, HttpClient::Axios, HttpClient::Ofetch];

    pub fn display_name(&self) -> &'static str {
        match self {
            HttpClient::None => "None",
            HttpClient::Axios => "Axios",
            HttpClient::Ofetch => "Fetch API wrapper",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateManager {
    None,
    Zustand,
    Redux,
    Jotai,
}

impl StateManager {
    pub const ALL: [StateManager; 4] = [
        StateManager::None,
        StateManager::Zustand,
        StateManager::Redux,
        StateManager::Jotai,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            StateManager::None => "None",
            StateManager::Zustand => "Zustand (Lightweight)",
            StateManager::Redux => "Redux Toolkit",
            StateManager::Jotai => "Jotai (Atomic)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UiLibrary {
    None,
    Lucide,
    Heroicons,
    ReactIcons,
}

impl UiLibrary {
    pub const ALL: [UiLibrary; 4] = [
        UiLibrary::None,
        UiLibrary::Lucide,
        UiLibrary::Heroicons,
        UiLibrary::ReactIcons,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            UiLibrary::None => "None",
            UiLibrary::Lucide => "Lucide React (Icons)",
            UiLibrary::Heroicons => "Heroicons",
            UiLibrary::ReactIcons => "React Icons",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Testing {
    None,
    Vitest,
    Jest,
    VitestRtl,
}

impl Testing {
    pub const ALL: [Testing; 4] = [
        Testing::None,
        Testing::Vitest,
        Testing::Jest,
        Testing::VitestRtl,
    ];

    /// Token as the user selects it, e.g. `vitest-rtl`
    pub fn as_str(&self) -> &'static str {
        match self {
            Testing::None => "none",
            Testing::Vitest => "vitest",
            Testing::Jest => "jest",
            Testing::VitestRtl => "vitest-rtl",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Testing::None => "None",
            Testing::Vitest => "Vitest",
            Testing::Jest => "Jest",
            Testing::VitestRtl => "Vitest + React Testing Library",
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Testing::None)
    }

    /// Whether the runner is vitest (with or without Testing Library)
    pub fn uses_vitest(&self) -> bool {
        matches!(self, Testing::Vitest | Testing::VitestRtl)
    }
}

/// Import alias mapped to `src/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alias {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "@")]
    At,
    #[serde(rename = "~")]
    Tilde,
}

impl Alias {
    pub const ALL: [Alias; 3] = [Alias::None, Alias::At, Alias::Tilde];

    pub fn token(&self) -> Option<&'static str> {
        match self {
            Alias::None => None,
            Alias::At => Some("@"),
            Alias::Tilde => Some("~"),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Alias::None => "None",
            Alias::At => "@ → src/ (Recommended)",
            Alias::Tilde => "~ → src/",
        }
    }
}

/// Folders that can be created under `src/`
///
/// Ordering follows declaration order, which is also the creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Folder {
    Components,
    Pages,
    Hooks,
    Utils,
    Services,
    Stores,
    Types,
    Constants,
    Contexts,
}

impl Folder {
    pub const ALL: [Folder; 9] = [
        Folder::Components,
        Folder::Pages,
        Folder::Hooks,
        Folder::Utils,
        Folder::Services,
        Folder::Stores,
        Folder::Types,
        Folder::Constants,
        Folder::Contexts,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Folder::Components => "components",
            Folder::Pages => "pages",
            Folder::Hooks => "hooks",
            Folder::Utils => "utils",
            Folder::Services => "services",
            Folder::Stores => "stores",
            Folder::Types => "types",
            Folder::Constants => "constants",
            Folder::Contexts => "contexts",
        }
    }

    /// Short description used in the generated README
    pub fn description(&self) -> &'static str {
        match self {
            Folder::Components => "Reusable UI components",
            Folder::Pages => "Route components",
            Folder::Hooks => "Custom React hooks",
            Folder::Utils => "Utility functions",
            Folder::Services => "API services",
            Folder::Stores => "State stores",
            Folder::Types => "TypeScript definitions",
            Folder::Constants => "Shared constants",
            Folder::Contexts => "React contexts",
        }
    }

    /// Only these folders get a placeholder `index` file
    pub fn has_index(&self) -> bool {
        matches!(self, Folder::Utils | Folder::Constants | Folder::Types)
    }

    /// Whether the folder is pre-selected in the folder prompt
    pub fn selected_by_default(&self, variant: Variant) -> bool {
        match self {
            Folder::Components
            | Folder::Pages
            | Folder::Hooks
            | Folder::Utils
            | Folder::Services => true,
            Folder::Types => variant.is_typescript(),
            Folder::Stores | Folder::Constants | Folder::Contexts => false,
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete set of user choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    pub project_name: ProjectName,
    pub variant: Variant,
    pub package_manager: PackageManager,
    pub tailwind: bool,
    pub router: bool,
    pub http_client: HttpClient,
    pub state_manager: StateManager,
    pub ui_library: UiLibrary,
    pub eslint_prettier: bool,
    pub testing: Testing,
    pub husky: bool,
    pub alias: Alias,
    pub folders: BTreeSet<Folder>,
    pub env: bool,
    pub readme: bool,
    pub git: bool,
}

impl AnswerSet {
    /// Answers a user gets by accepting every prompt default
    pub fn with_defaults(project_name: ProjectName, variant: Variant) -> Self {
        Self {
            project_name,
            variant,
            package_manager: PackageManager::Npm,
            tailwind: true,
            router: true,
            http_client: HttpClient::Axios,
            state_manager: StateManager::Zustand,
            ui_library: UiLibrary::Lucide,
            eslint_prettier: true,
            testing: Testing::VitestRtl,
            husky: true,
            alias: Alias::At,
            folders: Folder::ALL
                .into_iter()
                .filter(|f| f.selected_by_default(variant))
                .collect(),
            env: true,
            readme: true,
            git: true,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_accepts_valid_names() {
        for name in ["my-app", "my_app", "App42", "a"] {
            assert!(ProjectName::parse(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_project_name_rejects_invalid_names() {
        for name in ["", "my app", "../escape", "app/sub", "café"] {
            assert!(ProjectName::parse(name).is_err(), "{name} should be invalid");
        }
    }

    #[test]
    fn test_typescript_detection() {
        assert!(!Variant::React.is_typescript());
        assert!(Variant::ReactTs.is_typescript());
        assert!(!Variant::ReactSwc.is_typescript());
        assert!(Variant::ReactSwcTs.is_typescript());
        assert_eq!(Variant::ReactSwcTs.script_ext(), "ts");
        assert_eq!(Variant::ReactSwc.component_ext(), "jsx");
    }

    #[test]
    fn test_swc_variants_use_swc_plugin() {
        assert_eq!(Variant::ReactSwc.react_plugin(), "@vitejs/plugin-react-swc");
        assert_eq!(Variant::ReactTs.react_plugin(), "@vitejs/plugin-react");
    }

    #[test]
    fn test_folder_order_is_declaration_order() {
        let set: BTreeSet<Folder> = [Folder::Types, Folder::Components, Folder::Utils]
            .into_iter()
            .collect();
        let order: Vec<_> = set.into_iter().collect();
        assert_eq!(order, vec![Folder::Components, Folder::Utils, Folder::Types]);
    }

    #[test]
    fn test_default_folders_depend_on_language() {
        let name = ProjectName::parse("app").unwrap();
        let ts = AnswerSet::with_defaults(name.clone(), Variant::ReactTs);
        let js = AnswerSet::with_defaults(name, Variant::React);
        assert!(ts.folders.contains(&Folder::Types));
        assert!(!js.folders.contains(&Folder::Types));
        assert_eq!(js.folders.len(), 5);
    }

    #[test]
    fn test_enum_tokens_deserialize_from_yaml() {
        let alias: Alias = serde_yaml::from_str("\"@\"").unwrap();
        assert_eq!(alias, Alias::At);
        let testing: Testing = serde_yaml::from_str("vitest-rtl").unwrap();
        assert_eq!(testing, Testing::VitestRtl);
        let variant: Variant = serde_yaml::from_str("react-swc-ts").unwrap();
        assert_eq!(variant, Variant::ReactSwcTs);
        let ui: UiLibrary = serde_yaml::from_str("react-icons").unwrap();
        assert_eq!(ui, UiLibrary::ReactIcons);
    }
}
