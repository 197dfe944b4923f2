use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    gmcollage completions bash > ~/.bash_completion.d/gmcollage\n\n\
                  Generate zsh completions:\n    gmcollage completions zsh > ~/.zfunc/_gmcollage\n\n\
                  Generate fish completions:\n    gmcollage completions fish > ~/.config/fish/completions/gmcollage.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
