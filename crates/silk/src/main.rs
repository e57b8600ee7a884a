// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Silk - inspect plugin descriptors, parameters and enumerations.
//!
//! This is the binary entry point for the `silk` command.

mod complete;
mod enums;
mod loader;
mod plugins;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use silk_core::SilkError;

/// Silk - inspect plugin descriptors, parameters and enumerations.
#[derive(Parser, Debug)]
#[command(name = "silk", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered plugins.
    Plugins {
        /// Only list plugins in this category.
        #[arg(long)]
        category: Option<String>,
        /// Output JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show a plugin and its parameters.
    Show {
        id: String,
        /// Output the plugin details as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the Markdown documentation of a plugin.
    Docs { id: String },
    /// List the built-in enumerations.
    Enums {
        #[arg(long)]
        json: bool,
    },
    /// Check that an id is a valid value of an enumeration.
    CheckEnum {
        /// Enumeration type name, e.g. `DateUnit`.
        type_name: String,
        id: String,
    },
    /// Suggest values for a plugin parameter.
    Complete {
        id: String,
        parameter: String,
        /// Text typed so far.
        #[arg(long, default_value = "")]
        query: String,
        /// Directory whose files are offered as project resources.
        #[arg(long, default_value = ".")]
        resources: PathBuf,
        /// Current values of other parameters as `name=value`.
        values: Vec<String>,
    },
    /// Resolve and validate parameter values for a plugin.
    Validate {
        id: String,
        /// Directory whose files are accepted as project resources.
        #[arg(long, default_value = ".")]
        resources: PathBuf,
        /// Parameter values as `name=value`.
        values: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => silk_config::load_and_validate_path(path),
        None => silk_config::load_and_validate(),
    };
    let config = match config {
        Ok(config) => config,
        Err(errors) => {
            silk_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);

    if let Err(e) = run(cli, &config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &silk_config::SilkConfig) -> Result<(), SilkError> {
    let use_color = plugins::use_color(cli.plain);
    let registry = || loader::load_registry(config);

    let output = match cli.command {
        Commands::Plugins { category, json } => {
            plugins::render_plugin_list(&registry()?, category.as_deref(), json, use_color)?
        }
        Commands::Show { id, json } => plugins::render_plugin(&registry()?, &id, json)?,
        Commands::Docs { id } => silk_plugin::render_markdown(&*registry()?.lookup(&id)?),
        Commands::Enums { json } => enums::render_enumerations(json)?,
        Commands::CheckEnum { type_name, id } => {
            format!("{}\n", enums::check_enumeration(&type_name, &id)?)
        }
        Commands::Complete {
            id,
            parameter,
            query,
            resources,
            values,
        } => {
            let current = plugins::parse_assignments(&values)?;
            complete::render_completions(
                &registry()?,
                &complete::cli_providers(resources, &config.autocompletion),
                config.autocompletion.limit,
                &id,
                &parameter,
                &current,
                &query,
            )?
        }
        Commands::Validate { id, resources, values } => {
            let supplied = plugins::parse_assignments(&values)?;
            complete::render_validated(
                &registry()?,
                &complete::cli_providers(resources, &config.autocompletion),
                config.autocompletion.limit,
                &id,
                &supplied,
            )?
        }
    };
    print!("{output}");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
///
/// Logs go to stderr so that command output stays machine readable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("silk={log_level},silk_plugin={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
