//! vrx-core - Plan builder and executor behind the `create-vrx` CLI
//!
//! The library turns a user's answers into a scaffolded Vite + React project.
//! Deciding what to do and doing it are kept apart so the decision logic can
//! be tested without touching processes or the filesystem.
//!
//! # Architecture
//!
//! - **Answers** - [`AnswerSet`], the complete set of user choices
//! - **Plan** - [`build_plan`], a pure mapping to dependencies, generated files
//!   and an ordered list of [`ExternalAction`]s
//! - **Executor** - [`Executor`], performs a plan through a [`CommandRunner`]
//! - **CLI/TUI** - optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use vrx_core::{build_plan, AnswerSet, Executor, ProcessRunner, ProjectName, Variant};
//!
//! let answers = AnswerSet::with_defaults(ProjectName::parse("shop")?, Variant::ReactTs);
//! let plan = build_plan(&answers);
//! Executor::new(ProcessRunner, std::env::current_dir()?)
//!     .execute(&plan)
//!     .await?;
//! ```

pub mod answers;
pub mod config;
pub mod error;
pub mod executor;
pub mod plan;
pub mod runtime;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{AnswerSet, PackageManager, ProjectName, Variant};
pub use config::Preset;
pub use error::{ActionError, Error, PreconditionError};
pub use executor::{Executor, Outcome};
pub use plan::{build_plan, ExternalAction, Plan};
pub use runtime::{CommandRunner, CommandSpec, ProcessRunner};

#[cfg(feature = "tui")]
pub use tui::run;
