//! External tools: detection and process spawning
//!
//! This module provides:
//! - Toolchain detection (Node.js, package managers, Git)
//! - The [`CommandRunner`] seam used by the executor

pub mod check;
pub mod process;

pub use check::{check_toolchain, probe, required_tools, RuntimeInfo, Tool};
pub use process::{CommandRunner, CommandSpec, OutputMode, ProcessRunner};
