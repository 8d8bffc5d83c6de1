// src/main.rs

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

mod cli;
mod commands;
mod error;
mod models;
mod settings;
mod store;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init().ok();

    let result = match cli.command {
        Commands::Add { message } => commands::handle_add(message),
        Commands::Show => commands::handle_show(),
        Commands::Clear => commands::handle_clear(),
        Commands::Config { filename, storage } => commands::handle_config(filename, storage),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
