//! The `engines` command

use colored::Colorize;
use serde_json::json;
use stackcfg_source::Mode;

use crate::error::Result;

fn engines_json() -> serde_json::Value {
    let modes: Vec<_> = Mode::ALL
        .iter()
        .map(|mode| {
            json!({
                "mode": mode.name(),
                "default": mode.default_sync_engine(),
                "engines": mode.sync_engines(),
            })
        })
        .collect();
    json!(modes)
}

/// List each operating mode with its default and accepted sync engines
pub fn run_engines(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&engines_json())?);
        return Ok(());
    }

    println!("{}", "Sync engines by mode".bold());
    println!();
    for mode in Mode::ALL {
        println!("  {}:", mode.name().cyan());
        for engine in mode.sync_engines() {
            if *engine == mode.default_sync_engine() {
                println!("    {} {} {}", "+".green(), engine, "(default)".dimmed());
            } else {
                println!("    {} {}", "+".green(), engine);
            }
        }
    }
    println!();
    println!("{}", "Other modes accept any engine.".dimmed());

    Ok(())
}
