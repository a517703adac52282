use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use clap::CommandFactory;
use pakt_core::{FlatOptions, UpdateDirective};
use pakt_engine::PlanEngine;

use crate::prefix::{config_path, default_user_prefix, global_package_dir};
use crate::render::{current_output_style, render_section_header, render_status_line, OutputStyle};
use crate::update::run_update;
use crate::{Cli, Commands};

pub(crate) fn run_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Update {
            packages,
            global,
            depth,
        } => {
            let user_prefix = default_user_prefix()?;
            let flat = load_flat_options(&config_path(&user_prefix), global, depth)?;
            let local_prefix = match cli.prefix {
                Some(prefix) => prefix,
                None => std::env::current_dir().context("failed to resolve current directory")?,
            };
            let package_dir = global_package_dir(&user_prefix);
            let style = current_output_style();

            run_update(
                &packages,
                &flat,
                &local_prefix,
                &package_dir,
                |options| PlanEngine::new(options),
                |category, message| {
                    eprintln!(
                        "{}",
                        render_status_line(style, "warn", &format!("{category}: {message}"))
                    );
                },
                |engine: &mut PlanEngine| {
                    if let Some(header) = render_section_header(style, "Update") {
                        println!();
                        println!("{header}");
                    }
                    println!("{}", format_update_summary(engine, style));
                    Ok(())
                },
            )?;
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "pakt", &mut std::io::stdout());
            Ok(())
        }
    }
}

pub(crate) fn load_flat_options(
    config_path: &Path,
    global_flag: bool,
    depth_flag: Option<u32>,
) -> Result<FlatOptions> {
    let mut flat = match fs::read_to_string(config_path) {
        Ok(content) => FlatOptions::from_toml_str(&content)
            .with_context(|| format!("invalid configuration file: {}", config_path.display()))?,
        Err(err) if err.kind() == ErrorKind::NotFound => FlatOptions::default(),
        Err(err) => {
            return Err(err).with_context(|| {
                format!("failed to read configuration file: {}", config_path.display())
            });
        }
    };

    if global_flag {
        flat.global = true;
    }
    if let Some(depth) = depth_flag {
        flat.depth = depth;
    }
    Ok(flat)
}

pub(crate) fn format_update_summary(engine: &PlanEngine, style: OutputStyle) -> String {
    let planned = match engine.last_request().map(|request| &request.update) {
        Some(UpdateDirective::All) => "planned update for all top-level packages".to_string(),
        Some(UpdateDirective::Packages(names)) => {
            format!("planned update for {}", names.join(", "))
        }
        None => "no update request was issued".to_string(),
    };
    render_status_line(
        style,
        "ok",
        &format!("{planned} (root = {})", engine.options().path.display()),
    )
}
