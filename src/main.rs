#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod cli;
mod config;
mod core;
mod error;
mod i18n;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{set_wallpaper_command, Cli};
use crate::config::settings::Settings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = Settings::load();
    cli.apply_to(&mut settings);

    if cli.set_wallpaper {
        let Some(path) = cli.path.as_deref() else {
            return ExitCode::FAILURE;
        };
        return match set_wallpaper_command(path, &settings) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    match app::run(settings, cli.path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("could not start the viewer: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();
}
