//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - split: `out` command arguments
//! - merge: `in` command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser, Subcommand};

pub mod completions;
pub mod merge;
pub mod split;

pub use completions::CompletionsArgs;
pub use merge::InArgs;
pub use split::OutArgs;

/// gmcollage - GameMaker project module tool
///
/// Take folders of a GameMaker project out into modules and put modules back in.
#[derive(Parser, Debug)]
#[command(
    name = "gmcollage",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Split GameMaker projects into modules and merge them back",
    long_about = "gmcollage takes resource folders (sprites, sounds, rooms, ...) out of a GameMaker \
                  project into self-contained modules, together with their asset files, and puts \
                  modules back into a project.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  gmcollage out game.project.gmx Enemies.moduleconfig   \x1b[90m# Take out a module\x1b[0m\n   \
                  gmcollage out game.project.gmx *.moduleconfig -o dist \x1b[90m# Several modules into dist/\x1b[0m\n   \
                  gmcollage in game.project.gmx modules/Enemies         \x1b[90m# Put a module back in\x1b[0m\n   \
                  gmcollage in game.project.gmx modules/Enemies -t      \x1b[90m# Only run the checks\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Log more details to stderr (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take folders out of a project into modules
    Out(OutArgs),

    /// Put modules back into a project
    #[command(name = "in")]
    In(InArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
