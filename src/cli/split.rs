use clap::Parser;
use std::path::PathBuf;

/// Arguments for the out command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Take out one module:\n    gmcollage out game.project.gmx Enemies.moduleconfig\n\n\
                  Take out several modules into another directory:\n    gmcollage out game.project.gmx Enemies.moduleconfig Levels.moduleconfig -o dist\n\n\
                  Check the declarations without changing anything:\n    gmcollage out game.project.gmx Enemies.moduleconfig --dry-run\n\n\
                  A declaration is a JSON list of [kind, path] pairs:\n    [[\"sprites\", \"Enemies\"], [\"rooms\", \"Levels/Forest\"]]")]
pub struct OutArgs {
    /// GameMaker project file (*.project.gmx)
    pub project: PathBuf,

    /// Module declaration files; each one becomes a module named after the file
    #[arg(required = true, value_name = "DECLARATION")]
    pub declarations: Vec<PathBuf>,

    /// Directory the modules are written to
    #[arg(
        long,
        short = 'o',
        env = "GMCOLLAGE_OUTPUT_DIR",
        default_value = "modules"
    )]
    pub output: PathBuf,

    /// Run every check without moving files or writing documents
    #[arg(long, short = 't', visible_alias = "test")]
    pub dry_run: bool,
}
