// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
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

use clap::Parser;
use log::{error, info};
use mipsim::core::config::SimConfig;
use mipsim::core::error::Result;
use mipsim::core::system::{RunOutcome, System};

/// MIPS I instruction-level simulator
#[derive(Parser)]
#[command(name = "mipsim")]
#[command(about = "MIPS I instruction-level simulator", long_about = None)]
struct Args {
    /// Path to a program listing (one 32-bit hex instruction word per line)
    program: String,

    /// Maximum number of instructions to execute (overrides the config)
    #[arg(short = 'n', long)]
    steps: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Print the final register file after the run
    #[arg(long)]
    dump_regs: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("mipsim v{}", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            SimConfig::from_file(path)?
        }
        None => SimConfig::default(),
    };
    let steps = args.steps.unwrap_or(config.step_limit);

    let mut system = System::with_config(config);

    info!("Loading program from: {}", args.program);
    if let Err(e) = system.load_program(&args.program) {
        error!("Failed to load program: {}", e);
        return Err(e);
    }

    info!("Starting simulation at PC=0x{:08X}", system.pc());

    match system.run(steps) {
        Ok(RunOutcome::Halted) => {
            info!(
                "Halted at PC=0x{:08X} after {} instructions",
                system.pc(),
                system.retired()
            );
        }
        Ok(RunOutcome::StepLimit) => {
            info!(
                "Step limit of {} reached at PC=0x{:08X}",
                steps,
                system.pc()
            );
        }
        Err(e) => {
            error!("Error at PC=0x{:08X}: {}", system.pc(), e);
            error!("Instruction count: {}", system.retired());
            system.cpu().dump_registers();
            return Err(e);
        }
    }

    if args.dump_regs {
        system.cpu().dump_registers();
    }

    Ok(())
}
