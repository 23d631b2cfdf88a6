//! Package selection tables
//!
//! Each choice maps to a fixed, ordered list of packages. The overall order is
//! the order of the answers below and must stay stable for reproducible
//! installs.

use crate::answers::{AnswerSet, HttpClient, StateManager, Testing, UiLibrary};

impl HttpClient {
    pub fn packages(&self) -> &'static [&'static str] {
        match self {
            HttpClient::None => &[],
            HttpClient::Axios => &["axios"],
            HttpClient::Ofetch => &["ofetch"],
        }
    }
}

impl StateManager {
    pub fn packages(&self) -> &'static [&'static str] {
        match self {
            StateManager::None => &[],
            StateManager::Zustand => &["zustand"],
            StateManager::Redux => &["@reduxjs/toolkit", "react-redux"],
            StateManager::Jotai => &["jotai"],
        }
    }
}

impl UiLibrary {
    pub fn packages(&self) -> &'static [&'static str] {
        match self {
            UiLibrary::None => &[],
            UiLibrary::Lucide => &["lucide-react"],
            UiLibrary::Heroicons => &["@heroicons/react"],
            UiLibrary::ReactIcons => &["react-icons"],
        }
    }
}

impl Testing {
    pub fn dev_packages(&self) -> &'static [&'static str] {
        match self {
            Testing::None => &[],
            Testing::Vitest => &["vitest"],
            Testing::Jest => &["jest", "@types/jest"],
            Testing::VitestRtl => &[
                "vitest",
                "@testing-library/react",
                "@testing-library/jest-dom",
                "@testing-library/user-event",
            ],
        }
    }
}

const ROUTER_PACKAGES: &[&str] = &["react-router-dom"];
const TAILWIND_PACKAGES: &[&str] = &["tailwindcss", "@tailwindcss/vite"];
const PRETTIER_PACKAGES: &[&str] = &["prettier", "eslint-config-prettier", "eslint-plugin-prettier"];
const HUSKY_PACKAGES: &[&str] = &["husky", "lint-staged"];

fn when(enabled: bool, packages: &'static [&'static str]) -> &'static [&'static str] {
    if enabled {
        packages
    } else {
        &[]
    }
}

/// Runtime dependencies for the answers, in install order
pub fn dependencies(answers: &AnswerSet) -> Vec<&'static str> {
    [
        when(answers.router, ROUTER_PACKAGES),
        answers.http_client.packages(),
        answers.state_manager.packages(),
        answers.ui_library.packages(),
        when(answers.tailwind, TAILWIND_PACKAGES),
    ]
    .concat()
}

/// Development dependencies for the answers, in install order
pub fn dev_dependencies(answers: &AnswerSet) -> Vec<&'static str> {
    [
        when(answers.eslint_prettier, PRETTIER_PACKAGES),
        answers.testing.dev_packages(),
        when(answers.husky, HUSKY_PACKAGES),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::fixtures::bare;

    #[test]
    fn test_no_choices_no_packages() {
        let answers = bare();
        assert!(dependencies(&answers).is_empty());
        assert!(dev_dependencies(&answers).is_empty());
    }

    #[test]
    fn test_dependency_order_follows_choice_order() {
        let answers = AnswerSet {
            tailwind: true,
            router: true,
            http_client: HttpClient::Ofetch,
            state_manager: StateManager::Redux,
            ui_library: UiLibrary::Heroicons,
            ..bare()
        };
        assert_eq!(
            dependencies(&answers),
            vec![
                "react-router-dom",
                "ofetch",
                "@reduxjs/toolkit",
                "react-redux",
                "@heroicons/react",
                "tailwindcss",
                "@tailwindcss/vite",
            ]
        );
    }

    #[test]
    fn test_dev_dependency_order() {
        let answers = AnswerSet {
            eslint_prettier: true,
            testing: Testing::Jest,
            husky: true,
            ..bare()
        };
        assert_eq!(
            dev_dependencies(&answers),
            vec![
                "prettier",
                "eslint-config-prettier",
                "eslint-plugin-prettier",
                "jest",
                "@types/jest",
                "husky",
                "lint-staged",
            ]
        );
    }

    #[test]
    fn test_vitest_rtl_pulls_testing_library() {
        let answers = AnswerSet {
            testing: Testing::VitestRtl,
            ..bare()
        };
        assert_eq!(
            dev_dependencies(&answers),
            vec![
                "vitest",
                "@testing-library/react",
                "@testing-library/jest-dom",
                "@testing-library/user-event",
            ]
        );
    }

    #[test]
    fn test_jotai_and_react_icons() {
        let answers = AnswerSet {
            state_manager: StateManager::Jotai,
            ui_library: UiLibrary::ReactIcons,
            ..bare()
        };
        assert_eq!(dependencies(&answers), vec!["jotai", "react-icons"]);
    }
}
