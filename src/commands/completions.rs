//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::CompletionsArgs;
use crate::error::Result;

fn parse_shell(name: &str) -> Option<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "elvish" => Some(Shell::Elvish),
        "fish" => Some(Shell::Fish),
        "powershell" | "pwsh" => Some(Shell::PowerShell),
        "zsh" => Some(Shell::Zsh),
        _ => None,
    }
}

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let Some(shell) = parse_shell(&args.shell) else {
        eprintln!("Unknown shell: {}", args.shell);
        eprintln!("Supported shells: bash, elvish, fish, powershell, zsh");
        std::process::exit(1);
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "gmcollage", &mut std::io::stdout().lock());

    Ok(())
}
