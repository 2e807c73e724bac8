// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - shows the effective configuration

use crate::config::Config;
use anyhow::Result;

/// Print the whole configuration, or one dotted key
pub fn run(config: &Config, key: Option<&str>) -> Result<()> {
    match key {
        Some(key) => println!("{}", config.get(key)?),
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}
