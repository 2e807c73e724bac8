// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Algorithms command - the catalogue of what the engine can run

use super::Style;
use crate::types::Algorithm;
use anyhow::Result;

/// List every algorithm, or describe the one named
pub fn run(name: Option<&str>, style: Style) -> Result<()> {
    let Some(name) = name else {
        println!("{}", style.heading("Algorithms:"));
        for algorithm in Algorithm::all() {
            println!(
                "  {:<10} {}",
                algorithm.code(),
                algorithm.display_name()
            );
        }
        return Ok(());
    };

    let algorithm: Algorithm = name.parse()?;
    println!("{}", style.heading(algorithm.display_name()));
    println!("{}", algorithm.description());
    println!();
    let shape = if algorithm.is_spanning_tree() {
        "spanning-tree edges"
    } else {
        "visited nodes"
    };
    println!("{}", style.dim(&format!("  result:   {shape}")));
    println!(
        "{}",
        style.dim(&format!(
            "  weighted: {}",
            if algorithm.is_weighted() { "yes" } else { "no" }
        ))
    );
    Ok(())
}
