//! Detection of the external tools a plan invokes

use crate::answers::{AnswerSet, PackageManager};
use crate::error::PreconditionError;
use std::process::Command;

/// A tool the scaffold run depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    pub binary: &'static str,
    pub name: &'static str,
    pub install_hint: &'static str,
}

pub const NODE: Tool = Tool {
    binary: "node",
    name: "Node.js",
    install_hint: "install from https://nodejs.org",
};

pub const NPM: Tool = Tool {
    binary: "npm",
    name: "npm",
    install_hint: "ships with Node.js, https://nodejs.org",
};

pub const YARN: Tool = Tool {
    binary: "yarn",
    name: "Yarn",
    install_hint: "install with `corepack enable` or from https://yarnpkg.com",
};

pub const PNPM: Tool = Tool {
    binary: "pnpm",
    name: "pnpm",
    install_hint: "install with `corepack enable` or from https://pnpm.io",
};

pub const GIT: Tool = Tool {
    binary: "git",
    name: "Git",
    install_hint: "install from https://git-scm.com",
};

impl PackageManager {
    pub fn tool(&self) -> Tool {
        match self {
            PackageManager::Npm => NPM,
            PackageManager::Yarn => YARN,
            PackageManager::Pnpm => PNPM,
        }
    }
}

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Probe a tool by running `<binary> --version`
pub fn probe(tool: Tool) -> RuntimeInfo {
    let output = Command::new(tool.binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: tool.name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: tool.name,
            version: None,
            available: false,
        },
    }
}

/// Tools needed for the answers, in check order and without duplicates
pub fn required_tools(answers: &AnswerSet) -> Vec<Tool> {
    // The scaffold step always goes through npm, whatever the chosen manager
    let mut tools = vec![NODE, NPM];
    let manager = answers.package_manager.tool();
    if !tools.contains(&manager) {
        tools.push(manager);
    }
    if answers.git {
        tools.push(GIT);
    }
    tools
}

/// Check every tool the answers need; fail listing all that are missing
pub fn check_toolchain(answers: &AnswerSet) -> Result<Vec<RuntimeInfo>, PreconditionError> {
    check_tools(&required_tools(answers), probe)
}

fn check_tools(
    tools: &[Tool],
    probe: impl Fn(Tool) -> RuntimeInfo,
) -> Result<Vec<RuntimeInfo>, PreconditionError> {
    let mut results = Vec::new();
    let mut missing = Vec::new();

    for tool in tools {
        let info = probe(*tool);
        if info.available {
            results.push(info);
        } else {
            missing.push(format!("{} ({})", tool.name, tool.install_hint));
        }
    }

    if !missing.is_empty() {
        return Err(PreconditionError::MissingTools(missing));
    }

    Ok(results)
}
