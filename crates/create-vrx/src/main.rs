//! create-vrx - Interactive scaffolding for Vite + React projects

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vrx_core::tui::CreateArgs;
use vrx_core::{PackageManager, Variant};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "create-vrx")]
#[command(about = "Modern React project generator built on Vite")]
#[command(version)]
pub struct Args {
    /// Project name (letters, numbers, hyphens and underscores)
    pub name: Option<String>,

    /// create-vite template variant
    #[arg(short, long, value_enum)]
    pub template: Option<Variant>,

    /// Package manager used to install dependencies
    #[arg(long = "pm", value_enum)]
    pub package_manager: Option<PackageManager>,

    /// YAML file with default answers (falls back to $CREATE_VRX_PRESET)
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Accept defaults for every unanswered prompt (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Print the plan without running anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip detection of node, the package manager and git
    #[arg(long)]
    pub skip_checks: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            project_name: args.name,
            variant: args.template,
            package_manager: args.package_manager,
            preset: args.preset,
            yes: args.yes,
            dry_run: args.dry_run,
            skip_checks: args.skip_checks,
        }
    }
}

/// Diagnostics go to stderr, quiet unless RUST_LOG asks for more
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_tracing();

    let args = Args::parse();
    let result = vrx_core::run(args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        let _ = vrx_core::tui::report_error(&e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_flags_map_to_create_args() {
        let args = Args::parse_from([
            "create-vrx",
            "shop",
            "--template",
            "react-swc-ts",
            "--pm",
            "pnpm",
            "--yes",
            "--dry-run",
        ]);
        let create: CreateArgs = args.into();
        assert_eq!(create.project_name.as_deref(), Some("shop"));
        assert_eq!(create.variant, Some(Variant::ReactSwcTs));
        assert_eq!(create.package_manager, Some(PackageManager::Pnpm));
        assert!(create.yes);
        assert!(create.dry_run);
        assert!(!create.skip_checks);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        assert!(Args::try_parse_from(["create-vrx", "--template", "vue"]).is_err());
    }
}
