use anyhow::{Context, Result};
use std::{env, fs, process};
use vue_curated_engine::parse_catalog;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <catalog.md>", args[0]);
        process::exit(1);
    }

    let path = &args[1];
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read catalog file '{path}'"))?;
    let catalog =
        parse_catalog(&source).with_context(|| format!("failed to parse catalog file '{path}'"))?;

    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}
