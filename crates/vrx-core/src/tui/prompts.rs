//! Charm-style CLI prompts using cliclack

use crate::answers::{
    Alias, AnswerSet, Folder, HttpClient, PackageManager, ProjectName, StateManager, Testing,
    UiLibrary, Variant, DEFAULT_PROJECT_NAME,
};
use crate::config::Preset;
use crate::error::PreconditionError;
use crate::executor::{command_for, Executor, Outcome};
use crate::plan::{build_plan, ExternalAction, Plan};
use crate::runtime::{check, CommandRunner, ProcessRunner};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; prompted for when absent
    pub project_name: Option<String>,

    /// create-vite template variant
    pub variant: Option<Variant>,

    /// Package manager used for installs
    pub package_manager: Option<PackageManager>,

    /// YAML preset with default answers
    pub preset: Option<PathBuf>,

    /// Accept defaults for every unanswered prompt (non-interactive mode)
    pub yes: bool,

    /// Print the plan without executing it
    pub dry_run: bool,

    /// Skip detection of node, the package manager and git
    pub skip_checks: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(format!("create-vrx v{}", cli_version))?;
    cliclack::log::remark("Modern React Project Generator")?;

    let preset = load_preset(&args)?;
    let base_dir = std::env::current_dir()?;

    // Step 1: Collect answers
    let answers = if args.yes {
        let name = non_interactive_name(&args, &preset)?;
        ensure_target_free(&base_dir, &name)?;
        let answers = preset.resolve(name);
        cliclack::log::info(format!(
            "Using {} ({}) with {}",
            answers.project_name,
            answers.variant.display_name(),
            answers.package_manager
        ))?;
        answers
    } else {
        collect_answers(&args, &preset, &base_dir)?
    };

    // Step 2: Build the plan
    let plan = build_plan(&answers);

    if args.dry_run {
        print_plan(&plan)?;
        cliclack::outro("Dry run: nothing was executed")?;
        return Ok(());
    }

    // Step 3: Check external tools
    if args.skip_checks {
        cliclack::log::info("Skipping toolchain check")?;
    } else {
        check_toolchain(&answers)?;
    }

    // Step 4: Execute
    let mut executor = Executor::new(ProcessRunner, &base_dir);
    executor.preflight(&plan)?;
    execute_plan(&mut executor, &plan).await?;

    // Step 5: Summary and next steps
    print_summary(&plan)?;

    Ok(())
}

/// Print a terminal error with its full cause chain
pub fn report_error(error: &anyhow::Error) -> std::io::Result<()> {
    cliclack::outro_cancel(format!("Error: {:#}", error))
}

fn load_preset(args: &CreateArgs) -> Result<Preset> {
    let mut preset = match Preset::locate(args.preset.clone()) {
        Some(path) => {
            cliclack::log::info(format!("Using preset {}", path.display()))?;
            Preset::load(&path)?
        }
        None => Preset::default(),
    };

    // Flags take precedence over the preset
    if args.variant.is_some() {
        preset.variant = args.variant;
    }
    if args.package_manager.is_some() {
        preset.package_manager = args.package_manager;
    }
    if let Some(name) = &args.project_name {
        preset.project_name = Some(ProjectName::parse(name.as_str())?);
    }

    Ok(preset)
}

fn non_interactive_name(args: &CreateArgs, preset: &Preset) -> Result<ProjectName> {
    match (&args.project_name, &preset.project_name) {
        (Some(name), _) => Ok(ProjectName::parse(name.as_str())?),
        (None, Some(name)) => Ok(name.clone()),
        (None, None) => Ok(ProjectName::parse(DEFAULT_PROJECT_NAME)?),
    }
}

/// Fail fast so no further questions are asked for a run that cannot succeed
fn ensure_target_free(base_dir: &Path, name: &ProjectName) -> Result<(), PreconditionError> {
    if base_dir.join(name.as_str()).exists() {
        return Err(PreconditionError::DirectoryExists(name.to_string()));
    }
    Ok(())
}

fn select_one<T: Clone + Eq + 'static>(
    prompt: &str,
    options: &[T],
    label: impl Fn(&T) -> &'static str,
    initial: T,
) -> Result<T> {
    let mut select = cliclack::select(prompt);
    for option in options {
        select = select.item(option.clone(), label(option), "");
    }
    Ok(select.initial_value(initial).interact()?)
}

fn confirm(prompt: &str, initial: bool) -> Result<bool> {
    Ok(cliclack::confirm(prompt).initial_value(initial).interact()?)
}

fn collect_answers(args: &CreateArgs, preset: &Preset, base_dir: &Path) -> Result<AnswerSet> {
    cliclack::log::step("Project configuration")?;

    let project_name = match &args.project_name {
        Some(name) => {
            let name = ProjectName::parse(name.as_str())?;
            cliclack::log::info(format!("Project name: {}", name))?;
            name
        }
        None => {
            let initial = preset
                .project_name
                .as_ref()
                .map(ProjectName::as_str)
                .unwrap_or(DEFAULT_PROJECT_NAME)
                .to_string();
            let input: String = cliclack::input("Project name")
                .placeholder(&initial)
                .default_input(&initial)
                .validate(|input: &String| {
                    ProjectName::parse(input.as_str())
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact()?;
            ProjectName::parse(input)?
        }
    };
    ensure_target_free(base_dir, &project_name)?;

    let variant = select_one(
        "Project variant",
        &Variant::ALL,
        Variant::display_name,
        preset.variant.unwrap_or(Variant::ReactTs),
    )?;
    let package_manager = select_one(
        "Package manager",
        &PackageManager::ALL,
        PackageManager::command,
        preset.package_manager.unwrap_or(PackageManager::Npm),
    )?;

    // Remaining prompts start from the preset, falling back to the defaults
    let seed = Preset {
        variant: Some(variant),
        package_manager: Some(package_manager),
        ..preset.clone()
    }
    .resolve(project_name);

    cliclack::log::step("Essential tools")?;
    let tailwind = confirm("Include Tailwind CSS?", seed.tailwind)?;
    let router = confirm("Include React Router?", seed.router)?;
    let http_client = select_one(
        "HTTP client",
        &HttpClient::ALL,
        HttpClient::display_name,
        seed.http_client,
    )?;
    let state_manager = select_one(
        "State management",
        &StateManager::ALL,
        StateManager::display_name,
        seed.state_manager,
    )?;
    let ui_library = select_one(
        "UI components",
        &UiLibrary::ALL,
        UiLibrary::display_name,
        seed.ui_library,
    )?;

    cliclack::log::step("Development tools")?;
    let eslint_prettier = confirm("Set up ESLint + Prettier?", seed.eslint_prettier)?;
    let testing = select_one(
        "Testing framework",
        &Testing::ALL,
        Testing::display_name,
        seed.testing,
    )?;
    let husky = confirm("Set up Git hooks (Husky)?", seed.husky)?;
    let alias = select_one("Import alias", &Alias::ALL, Alias::display_name, seed.alias)?;

    cliclack::log::step("Project structure")?;
    let mut multi = cliclack::multiselect("Folders to create under src/");
    for folder in Folder::ALL {
        multi = multi.item(folder, format!("{}/", folder), "");
    }
    let folders: Vec<Folder> = multi
        .initial_values(seed.folders.iter().copied().collect())
        .required(false)
        .interact()?;
    let env = confirm("Create environment files?", seed.env)?;
    let readme = confirm("Generate custom README?", seed.readme)?;
    let git = confirm("Initialize Git repository?", seed.git)?;

    Ok(AnswerSet {
        tailwind,
        router,
        http_client,
        state_manager,
        ui_library,
        eslint_prettier,
        testing,
        husky,
        alias,
        folders: folders.into_iter().collect(),
        env,
        readme,
        git,
        ..seed
    })
}

fn check_toolchain(answers: &AnswerSet) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking toolchain...");

    match check::check_toolchain(answers) {
        Ok(tools) => {
            let found: Vec<String> = tools
                .iter()
                .map(|t| format!("{} ({})", t.name, t.version.as_deref().unwrap_or("unknown")))
                .collect();
            spinner.stop(format!("Detected: {}", found.join(", ")));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing tools");
            Err(e.into())
        }
    }
}

fn print_plan(plan: &Plan) -> Result<()> {
    let list = |packages: &[&str]| {
        if packages.is_empty() {
            "none".to_string()
        } else {
            packages.join(", ")
        }
    };
    cliclack::log::info(format!("Dependencies: {}", list(plan.dependencies())))?;
    cliclack::log::info(format!("Dev dependencies: {}", list(plan.dev_dependencies())))?;

    let steps: Vec<String> = plan
        .actions()
        .iter()
        .enumerate()
        .map(|(i, action)| match command_for(action) {
            Some(command) => format!("{:>2}. {}  ({})", i + 1, action, command),
            None => format!("{:>2}. {}", i + 1, action),
        })
        .collect();
    cliclack::note("Plan", steps.join("\n"))?;
    Ok(())
}

/// Message shown once a file action has been applied
fn describe_applied(action: &ExternalAction) -> Option<String> {
    match action {
        ExternalAction::CreateDir { path } => Some(format!("Created {}/", path.display())),
        ExternalAction::WriteFile { path, .. } => Some(format!("Created {}", path.display())),
        ExternalAction::EnsurePrelude { path, .. } => {
            Some(format!("Tailwind configured in {}", path.display()))
        }
        ExternalAction::MergeScripts { path, .. } => {
            Some(format!("Test scripts added to {}", path.display()))
        }
        ExternalAction::AppendIfExists { path, .. } => {
            Some(format!("Ignore rules appended to {}", path.display()))
        }
        _ => None,
    }
}

async fn execute_plan<R: CommandRunner>(executor: &mut Executor<R>, plan: &Plan) -> Result<()> {
    for action in plan.actions() {
        match action {
            ExternalAction::Scaffold { .. } | ExternalAction::GitInit => {
                let (working, done) = match action {
                    ExternalAction::GitInit => ("Initializing Git repository...", "Git repository initialized"),
                    _ => ("Creating base Vite + React project...", "Base project created"),
                };
                let spinner = cliclack::spinner();
                spinner.start(working);
                match executor.apply(action).await {
                    Ok(_) => spinner.stop(done),
                    Err(e) => {
                        spinner.stop(format!("{} failed", working.trim_end_matches(".")));
                        return Err(e.into());
                    }
                }
            }
            ExternalAction::Install { packages, dev, .. } => {
                let kind = if *dev { "dev dependencies" } else { "dependencies" };
                cliclack::log::step(format!("Installing {}: {}", kind, packages.join(", ")))?;
                executor.apply(action).await?;
                cliclack::log::success(format!("Installed {}", kind))?;
            }
            _ => match executor.apply(action).await? {
                Outcome::Applied => {
                    if let Some(message) = describe_applied(action) {
                        cliclack::log::success(message)?;
                    }
                }
                Outcome::Skipped(reason) => cliclack::log::info(format!("Skipped: {}", reason))?,
            },
        }
    }
    Ok(())
}

fn print_summary(plan: &Plan) -> Result<()> {
    let summary = format!(
        "Name: {}\nVariant: {}\nPackage manager: {}\nPackages: {}",
        plan.project_name(),
        plan.variant(),
        plan.package_manager(),
        plan.package_count()
    );
    cliclack::note("Project created", summary)?;

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in plan.next_steps().iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
