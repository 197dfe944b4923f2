//! gmcollage - GameMaker project module tool
//!
//! Takes resource folders of a GameMaker project out into self-contained modules and puts
//! them back in, moving the asset files along with the folders.

use clap::Parser;

mod cli;
mod commands;
mod document;
mod error;
mod logging;
mod module;
mod operations;
mod partition;
mod relocation;
mod resource;
mod transaction;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Out(args) => commands::split::run(args),
        Commands::In(args) => commands::merge::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        ui::report_error(&e);
        std::process::exit(1);
    }
}
