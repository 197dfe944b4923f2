//! Version command implementation

use crate::error::Result;
use crate::resource::known_ids;

/// Run version command
pub fn run() -> Result<()> {
    println!("gmcollage {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Resource kinds: {}", known_ids());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
