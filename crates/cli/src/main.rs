use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use detour_core::prelude::*;
use log::info;

mod cases;

/// Compute, per trip case, the cheapest route that uses two or more roads
/// and beats the direct road between its endpoints. Prints one line per
/// case: the route cost, or -1 when no such route exists.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// File with the trip cases; stdin is read when omitted
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let cases = cases::parse_cases(&input)?;
    info!("Read {} trip cases", cases.len());

    for (i, case) in cases.iter().enumerate() {
        let network = RoadNetwork::from_roads(case.locations, &case.roads)
            .with_context(|| format!("Case {}", i + 1))?;

        let mut search = DetourSearch::new(&network);
        match search.run() {
            Some(cost) => println!("{cost}"),
            None => println!("-1"),
        }
    }

    Ok(())
}
