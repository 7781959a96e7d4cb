//! # Info Command
//!
//! Prints the current date, the operating system and the program version.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use chrono::Local;

/// Builds the info lines.
pub fn lines() -> Vec<String> {
    vec![
        format!("Today's date: {}", Local::now().format("%Y-%m-%d")),
        format!(
            "Operating System: {} ({})",
            std::env::consts::OS,
            std::env::consts::ARCH
        ),
        format!("Version: {}", env!("CARGO_PKG_VERSION")),
    ]
}

/// Executes the info command.
pub fn execute() -> Result<()> {
    for line in lines() {
        println!("{line}");
    }
    Ok(())
}
