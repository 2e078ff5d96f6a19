//! Command dispatch and the interactive analysis pipeline

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Run { output }) => _run(cli, output.as_deref()),
        // Bare invocation runs the interactive analysis
        None => _run(cli, None),
        Some(Commands::Layers) => _layers(cli),
        Some(Commands::Info) => _info(cli),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    Settings::load(cli.workspace.as_deref()).map_err(|e| {
        ApplicationError::Config {
            message: e.to_string(),
        }
        .into()
    })
}

/// The single forward path: collect, overlay, aggregate, report.
#[instrument(skip(cli))]
fn _run(cli: &Cli, output: Option<&str>) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let container = ServiceContainer::new(settings);
    let workspace = container.settings.workspace_dir.clone();

    output::header("Suitability analysis for polygon vector layers");
    output::detail(&format!("workspace: {}", workspace.display()));
    output::info("");

    let available = container.analysis.available_layers()?;
    if available.is_empty() {
        output::warning(&format!(
            "no .{} layer files found in {}",
            container.settings.layer_extension,
            workspace.display()
        ));
    } else {
        output::info("Layer files available in the workspace:");
        for path in &available {
            if let Some(stem) = path.file_stem() {
                output::detail(&stem.to_string_lossy());
            }
        }
    }
    output::info("");

    let layers = container.collector.collect_layers()?;
    debug!(layers = layers.len(), "input collection complete");

    // Echo every entry back before proceeding
    output::info("");
    output::info("Layers and weights for the suitability analysis:");
    output::info(&format!("{:<41}{}", "Layer", "Weight"));
    output::info(&"-".repeat(53));
    for layer in &layers {
        output::info(&format!("{:<41}{:<12.2}", layer.name, layer.weight));
    }
    output::info("");

    let output_name = match output {
        Some(name) => name.to_string(),
        None => container.collector.prompt_output_name()?,
    };

    output::info("");
    output::info("Calculating suitability analysis...");
    let report = container.analysis.run(&layers, &output_name)?;

    output::info("");
    output::success("Suitability analysis complete");
    output::action(
        "Output file",
        &format!(
            "{} has been created in: {}",
            report
                .output_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| report.output_path.display().to_string()),
            workspace.display()
        ),
    );
    output::detail(&format!(
        "{} fragments scored from layers: {}",
        report.fragment_count,
        layers.iter().map(|l| l.name.as_str()).join(", ")
    ));
    Ok(())
}

#[instrument(skip(cli))]
fn _layers(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let container = ServiceContainer::new(settings);

    let available = container.analysis.available_layers()?;
    debug!(count = available.len(), "listing workspace layers");
    for path in &available {
        output::info(&path.display());
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _info(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;

    output::header("polysuit settings");
    match toml::to_string_pretty(&settings) {
        Ok(rendered) => output::info(&rendered),
        Err(e) => output::warning(&format!("cannot render settings: {e}")),
    }
    if let Some(global) = Settings::global_config_path() {
        output::detail(&format!("global config: {}", global.display()));
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
