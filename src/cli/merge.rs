use clap::Parser;
use std::path::PathBuf;

/// Arguments for the in command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Put a module back in:\n    gmcollage in game.project.gmx modules/Enemies\n\n\
                  Put in several modules at once:\n    gmcollage in game.project.gmx modules/Enemies modules/Levels\n\n\
                  Keep the module's files where they are:\n    gmcollage in game.project.gmx modules/Enemies --copy\n\n\
                  Check for collisions without changing anything:\n    gmcollage in game.project.gmx modules/Enemies --dry-run")]
pub struct InArgs {
    /// GameMaker project file (*.project.gmx)
    pub project: PathBuf,

    /// Module directories created by `out`
    #[arg(required = true, value_name = "MODULE_DIR")]
    pub modules: Vec<PathBuf>,

    /// Run every check without moving files or writing documents
    #[arg(long, short = 't', visible_alias = "test")]
    pub dry_run: bool,

    /// Copy asset files into the project instead of moving them
    #[arg(long, short = 'c')]
    pub copy: bool,
}
