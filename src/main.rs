use clap::Parser;
use rust_mod_creator::app::prompt::Prompter;
use rust_mod_creator::core::{ConfigProvider, ModuleRequest, ScaffoldPlan, SyncOutcome};
use rust_mod_creator::utils::{logger, validation::Validate};
use rust_mod_creator::{CliConfig, LocalFs, ModError, ModuleScaffolder, TerminalEditor, TomlConfig};
use std::path::PathBuf;

type Scaffolder = ModuleScaffolder<LocalFs, TomlConfig, TerminalEditor>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    if args.json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI args: {:?}", args);

    let mut config = match TomlConfig::discover(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    args.apply_overrides(&mut config);

    if let Err(e) = config
        .validate()
        .and_then(|_| rust_mod_creator::utils::validation::validate_path("path", &args.path))
    {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let scaffolder = ModuleScaffolder::new(LocalFs::default(), config, TerminalEditor::new());

    if let Err(e) = execute(&args, &scaffolder).await {
        if matches!(e, ModError::Cancelled) {
            tracing::debug!("Cancelled by user");
            return Ok(());
        }

        tracing::error!(
            "Failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        if e.is_partial_success() {
            eprintln!("⚠️  The module files were created; only the parent file is out of date");
        }
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn execute(args: &CliConfig, scaffolder: &Scaffolder) -> rust_mod_creator::Result<()> {
    let request = collect_request(args, scaffolder).await?;

    if args.dry_run {
        let plan = scaffolder.plan(&request).await?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            display_plan(&plan);
        }
        return Ok(());
    }

    let report = scaffolder.run(&request).await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let SyncOutcome::AlreadyPresent(path) = &report.sync {
        tracing::info!("{} already declared '{}'", path.display(), report.declaration);
    }

    Ok(())
}

/// Fills in whatever the command line left out by asking on the terminal.
async fn collect_request(
    args: &CliConfig,
    scaffolder: &Scaffolder,
) -> rust_mod_creator::Result<ModuleRequest> {
    let selected = PathBuf::from(&args.path);
    let mut prompter = Prompter::new(std::io::stdin().lock(), std::io::stderr());

    let name = match &args.name {
        Some(name) => name.clone(),
        None => {
            let dir = scaffolder.resolve_target_dir(&selected).await?;
            let is_submodule = scaffolder.is_submodule_dir(&dir).await;
            prompter.ask_name(is_submodule)?
        }
    };

    let visibility = match &args.visibility {
        Some(label) => label.clone(),
        None => {
            let options = scaffolder.config().visibility_options();
            prompter.ask_visibility(options)?.label.clone()
        }
    };

    Ok(ModuleRequest::new(selected, name, visibility))
}

fn display_plan(plan: &ScaffoldPlan) {
    println!("🔍 Dry run, nothing will be written");
    println!("  Module:      {} ({:?})", plan.identifier, plan.kind);
    println!("  Create:      {}", plan.entry_file.display());
    if plan.parent_exists {
        println!("  Update:      {}", plan.parent_file.display());
    } else {
        println!("  Create:      {}", plan.parent_file.display());
    }
    println!("  Declaration: {}", plan.declaration);
}
