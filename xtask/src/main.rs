// Copyright 2025 The Axvisor Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![cfg(not(target_os = "none"))]

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

mod input;
mod recorder;
mod report;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Tegra210 DVFS table inspection tool")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize DVFS for one SKU and print the resulting rails and tables
    Dump(DumpArgs),
    /// Initialize DVFS for every SKU covered by the Tegra210 tables
    Sweep(SweepArgs),
}

#[derive(Parser)]
struct DumpArgs {
    /// SKU fuse description (TOML)
    #[arg(long)]
    sku: PathBuf,
    /// Engine configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// DFLL frequency/voltage ladder (TOML); synthesized when omitted
    #[arg(long)]
    dfll: Option<PathBuf>,
    /// Print every core clock table
    #[arg(long)]
    core: bool,
}

#[derive(Parser)]
struct SweepArgs {
    /// Engine configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// GPU speedo value fed into the CVB polynomials
    #[arg(long, default_value_t = 2000)]
    gpu_speedo_value: i32,
    /// Print clean SKUs too
    #[arg(long)]
    all: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .context("Failed to install terminal logger")?;

    match cli.command {
        Commands::Dump(args) => {
            let sku = input::load_sku(&args.sku)?;
            let config = input::load_config(args.config.as_deref())?;
            let dfll = match args.dfll.as_deref() {
                Some(path) => input::load_dfll(path)?,
                None => input::synthetic_dfll(&sku),
            };
            report::dump(&sku, config, &dfll, args.core)?;
        }
        Commands::Sweep(args) => {
            let config = input::load_config(args.config.as_deref())?;
            report::sweep(config, args.gpu_speedo_value, args.all);
        }
    }

    Ok(())
}
