//! Generated file contents
//!
//! Every function here is a pure rendering of the answers into text. Whether a
//! file is actually written is decided by the plan builder.

use crate::answers::{AnswerSet, Folder, PackageManager, Testing, Variant};
use serde_json::json;
use std::fmt::Write;

/// Directive that enables Tailwind in the main stylesheet
pub const TAILWIND_DIRECTIVE: &str = r#"@import "tailwindcss";"#;

/// Main stylesheet created by the Vite React templates
pub const STYLESHEET_PATH: &str = "src/index.css";

pub const ENV_FILE: &str = "VITE_API_URL=http://localhost:8000\n";
pub const ENV_EXAMPLE_FILE: &str = "VITE_API_URL=\n";

/// Lines appended to `.gitignore` when git hooks are set up
pub const GITIGNORE_ADDITIONS: &str = "
# Logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Runtime data
pids
*.pid
*.seed
*.pid.lock

# Coverage directory used by tools like istanbul
coverage/

# IDE
.vscode/
.idea/
";

/// Scripts merged into `package.json` when vitest is the test runner
pub const VITEST_SCRIPTS: &[(&str, &str)] = &[
    ("test", "vitest"),
    ("test:ui", "vitest --ui"),
    ("test:coverage", "vitest --coverage"),
];

pub fn vite_config_path(variant: Variant) -> String {
    format!("vite.config.{}", variant.script_ext())
}

/// Vite config with the React plugin, plus Tailwind and alias when selected
pub fn vite_config(answers: &AnswerSet) -> String {
    let mut out = String::new();
    out.push_str("import { defineConfig } from 'vite'\n");
    let _ = writeln!(out, "import react from '{}'", answers.variant.react_plugin());
    if answers.tailwind {
        out.push_str("import tailwindcss from '@tailwindcss/vite'\n");
    }

    let mut plugins = vec!["react()"];
    if answers.tailwind {
        plugins.push("tailwindcss()");
    }

    out.push_str("\nexport default defineConfig({\n  plugins: [\n    ");
    out.push_str(&plugins.join(",\n    "));
    out.push_str("\n  ],\n");

    if let Some(token) = answers.alias.token() {
        let _ = write!(
            out,
            "  resolve: {{\n    alias: {{\n      \"{}\": \"/src\",\n    }},\n  }},\n",
            token
        );
    }

    out.push_str("})\n");
    out
}

pub fn vitest_config_path(variant: Variant) -> String {
    format!("vitest.config.{}", variant.script_ext())
}

pub fn vitest_setup_path(variant: Variant) -> String {
    format!("src/test/setup.{}", variant.script_ext())
}

/// Vitest config with a jsdom environment and global test functions
pub fn vitest_config(variant: Variant, testing: Testing) -> String {
    let setup = if testing == Testing::VitestRtl {
        format!("\n    setupFiles: './{}',", vitest_setup_path(variant))
    } else {
        String::new()
    };

    format!(
        "import {{ defineConfig }} from 'vitest/config'
import react from '{plugin}'

export default defineConfig({{
  plugins: [react()],
  test: {{
    globals: true,
    environment: 'jsdom',{setup}
  }},
}})
",
        plugin = variant.react_plugin(),
    )
}

pub const VITEST_SETUP_FILE: &str = "import '@testing-library/jest-dom/vitest'\n";

/// Prettier config: semicolons, ES5 trailing commas, single quotes, width 80, indent 2
pub fn prettier_config() -> String {
    let config = json!({
        "semi": true,
        "trailingComma": "es5",
        "singleQuote": true,
        "printWidth": 80,
        "tabWidth": 2,
    });
    format!("{:#}\n", config)
}

/// Path of the placeholder index file for a folder, if it gets one
pub fn folder_index_path(folder: Folder, variant: Variant) -> Option<String> {
    folder
        .has_index()
        .then(|| format!("src/{}/index.{}", folder.name(), variant.script_ext()))
}

pub fn folder_index(folder: Folder) -> String {
    format!("// Export {} here\n", folder.name())
}

/// Features listed in the README, always in the same order
pub fn readme_features(answers: &AnswerSet) -> Vec<String> {
    let mut features = Vec::new();
    if answers.variant.is_typescript() {
        features.push("TypeScript".to_string());
    }
    if answers.tailwind {
        features.push("Tailwind CSS".to_string());
    }
    if answers.router {
        features.push("React Router".to_string());
    }
    if answers.testing.is_enabled() {
        features.push(format!("{} Testing", answers.testing.as_str()));
    }
    features
}

fn quick_start(pm: PackageManager, testing: Testing) -> String {
    let mut out = format!(
        "# Install dependencies
{pm} install

# Start development server
{pm} run dev

# Build for production
{pm} run build

# Preview production build
{pm} run preview
"
    );
    if testing.is_enabled() {
        let _ = write!(out, "\n# Run tests\n{pm} run test\n");
    }
    out
}

pub fn readme(answers: &AnswerSet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", answers.project_name);
    out.push_str("> Generated with 🚀 **create-vrx** - Modern React Project Generator\n\n");

    out.push_str("## ✨ Features\n\n");
    for feature in readme_features(answers) {
        let _ = writeln!(out, "- ✅ {}", feature);
    }

    out.push_str("\n## 🚀 Quick Start\n\n```bash\n");
    out.push_str(&quick_start(answers.package_manager, answers.testing));
    out.push_str("```\n\n");

    out.push_str("## 📂 Project Structure\n\n```\nsrc/\n");
    for folder in &answers.folders {
        let label = format!("{}/", folder.name());
        let _ = writeln!(out, "├── {:<15}# {}", label, folder.description());
    }
    let _ = writeln!(out, "└── App.{}", answers.variant.component_ext());
    out.push_str("```\n\n");

    out.push_str("## 🛠 Built With\n\n");
    out.push_str("- [Vite](https://vitejs.dev/) - Next Generation Frontend Tooling\n");
    out.push_str("- [React](https://react.dev/) - A JavaScript library for building user interfaces\n");
    if answers.tailwind {
        out.push_str("- [Tailwind CSS](https://tailwindcss.com/) - A utility-first CSS framework\n");
    }
    if answers.router {
        out.push_str("- [React Router](https://reactrouter.com/) - Declarative routing for React\n");
    }
    match answers.testing {
        Testing::None => {}
        Testing::Jest => out.push_str("- [Jest](https://jestjs.io/) - Testing Framework\n"),
        Testing::Vitest | Testing::VitestRtl => {
            out.push_str("- [Vitest](https://vitest.dev/) - Testing Framework\n")
        }
    }

    out.push_str("\n---\n\nMade with ❤️ using create-vrx\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::fixtures::{bare, defaults};
    use crate::answers::Alias;

    #[test]
    fn test_vite_config_plain() {
        let config = vite_config(&bare());
        assert!(config.contains("import react from '@vitejs/plugin-react'"));
        assert!(config.contains("    react()\n  ],"));
        assert!(!config.contains("tailwindcss"));
        assert!(!config.contains("resolve"));
    }

    #[test]
    fn test_vite_config_with_tailwind_and_alias() {
        let answers = AnswerSet {
            tailwind: true,
            alias: Alias::Tilde,
            ..bare()
        };
        let config = vite_config(&answers);
        assert!(config.contains("import tailwindcss from '@tailwindcss/vite'"));
        assert!(config.contains("    react(),\n    tailwindcss()\n"));
        assert!(config.contains("\"~\": \"/src\""));
        assert!(config.ends_with("})\n"));
    }

    #[test]
    fn test_vite_config_swc_plugin() {
        let answers = AnswerSet {
            variant: Variant::ReactSwcTs,
            ..bare()
        };
        assert!(vite_config(&answers).contains("'@vitejs/plugin-react-swc'"));
        assert_eq!(vite_config_path(Variant::ReactSwcTs), "vite.config.ts");
        assert_eq!(vite_config_path(Variant::React), "vite.config.js");
    }

    #[test]
    fn test_vitest_config_setup_only_for_rtl() {
        let plain = vitest_config(Variant::ReactTs, Testing::Vitest);
        assert!(plain.contains("environment: 'jsdom'"));
        assert!(plain.contains("globals: true"));
        assert!(!plain.contains("setupFiles"));

        let rtl = vitest_config(Variant::ReactTs, Testing::VitestRtl);
        assert!(rtl.contains("setupFiles: './src/test/setup.ts'"));
    }

    #[test]
    fn test_prettier_config_policy() {
        let config: serde_json::Value = serde_json::from_str(&prettier_config()).unwrap();
        assert_eq!(config["semi"], true);
        assert_eq!(config["trailingComma"], "es5");
        assert_eq!(config["singleQuote"], true);
        assert_eq!(config["printWidth"], 80);
        assert_eq!(config["tabWidth"], 2);
    }

    #[test]
    fn test_prettier_config_is_pretty_printed() {
        assert!(prettier_config().starts_with("{\n  \"semi\": true,"));
    }

    #[test]
    fn test_folder_index_only_for_designated_folders() {
        assert_eq!(
            folder_index_path(Folder::Utils, Variant::ReactTs).as_deref(),
            Some("src/utils/index.ts")
        );
        assert_eq!(
            folder_index_path(Folder::Constants, Variant::React).as_deref(),
            Some("src/constants/index.js")
        );
        assert!(folder_index_path(Folder::Components, Variant::ReactTs).is_none());
        assert!(folder_index_path(Folder::Hooks, Variant::React).is_none());
    }

    #[test]
    fn test_readme_feature_order() {
        let answers = defaults();
        assert_eq!(
            readme_features(&answers),
            vec!["TypeScript", "Tailwind CSS", "React Router", "vitest-rtl Testing"]
        );

        let js = AnswerSet {
            router: true,
            testing: Testing::Jest,
            ..bare()
        };
        assert_eq!(readme_features(&js), vec!["React Router", "jest Testing"]);
    }

    #[test]
    fn test_readme_commands_use_package_manager() {
        let answers = AnswerSet {
            package_manager: PackageManager::Pnpm,
            testing: Testing::Vitest,
            ..bare()
        };
        let readme = readme(&answers);
        assert!(readme.starts_with("# app\n"));
        assert!(readme.contains("pnpm install\n"));
        assert!(readme.contains("pnpm run dev\n"));
        assert!(readme.contains("# Run tests\npnpm run test\n"));
        assert!(readme.contains("[Vitest](https://vitest.dev/)"));
    }

    #[test]
    fn test_readme_without_tests_has_no_test_command() {
        let readme = readme(&bare());
        assert!(!readme.contains("run test"));
        assert!(readme.contains("└── App.jsx"));
    }

    #[test]
    fn test_readme_lists_selected_folders() {
        let readme = readme(&defaults());
        assert!(readme.contains("├── components/    # Reusable UI components"));
        assert!(readme.contains("├── types/         # TypeScript definitions"));
        assert!(!readme.contains("contexts/"));
    }
}
