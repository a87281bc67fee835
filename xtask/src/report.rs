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

//! Human readable reports of an engine run.

use anyhow::{Context, Result};
use colored::*;
use tegra_dvfs::{
    DfllTable, DomainFault, DvfsConfig, DvfsEngine, DvfsError, DvfsTable, SkuInfo, tegra210,
};

use crate::{input, recorder::RecordingClocks};

/// Result of initializing the engine for one SKU.
#[derive(Debug)]
pub enum Outcome {
    Clean,
    Faulted(Vec<DomainFault>),
    Halted(DvfsError),
}

pub fn run(sku: &SkuInfo, config: DvfsConfig, dfll: &DfllTable) -> (DvfsEngine, RecordingClocks, Outcome) {
    let mut engine = DvfsEngine::tegra210(config);
    let mut clocks = RecordingClocks::default();
    let outcome = match engine.init(sku, dfll, &mut clocks, None) {
        Err(e) => Outcome::Halted(e),
        Ok(()) if engine.faults().is_empty() => Outcome::Clean,
        Ok(()) => Outcome::Faulted(engine.faults().to_vec()),
    };
    (engine, clocks, outcome)
}

fn print_table(title: &str, table: Option<&DvfsTable>) {
    let Some(table) = table else {
        println!("\n{} {}", title.bold().cyan(), "(none)".dimmed());
        return;
    };
    println!(
        "\n{} {} (Vmax {}mV)",
        title.bold().cyan(),
        table.clk_name.bold(),
        table.max_millivolts
    );
    for i in 0..table.num_freqs() {
        let mut line = format!(
            "  {:>10} kHz  {:>5} mV",
            table.rate_hz(i) / 1000,
            table.millivolts[i]
        );
        if let Some(dfll) = &table.dfll_millivolts {
            line.push_str(&format!("  dfll {:>5} mV", dfll[i]));
        }
        if let Some(thermal) = &table.thermal {
            let cols: Vec<String> = thermal.rows().map(|row| row[i].to_string()).collect();
            line.push_str(&format!("  ranges [{}]", cols.join(", ")));
        }
        println!("{line}");
    }
}

pub fn dump(sku: &SkuInfo, config: DvfsConfig, dfll: &DfllTable, core: bool) -> Result<()> {
    let (engine, clocks, outcome) = run(sku, config, dfll);
    if let Outcome::Halted(e) = outcome {
        return Err(e).context("DVFS initialization halted");
    }

    println!("{}", "=== Rails ===".bold().cyan());
    for summary in engine.summaries() {
        if summary.disabled {
            println!("  {}", summary.to_string().yellow());
        } else {
            println!("  {summary}");
        }
    }

    print_table("CPU", engine.cpu_table());
    print_table("CPU LP", engine.cpu_lp_table());
    print_table("GPU", engine.gpu_table());
    if !engine.gpu_thermal_trips().is_empty() {
        println!("  trips {:?}, vmin {:?}", engine.gpu_thermal_trips(), engine.gpu_vmin());
    }

    println!(
        "\n{} {} clocks, nominal index {}",
        "Core".bold().cyan(),
        engine.core_tables().len(),
        engine.core_nominal_index()
    );
    if core {
        for attached in clocks.attached() {
            println!(
                "  {:<16} Vmax {:>5}mV  fmax {:>10} Hz{}",
                attached.clk_name,
                attached.max_millivolts,
                attached.max_rate_hz.unwrap_or(0),
                if attached.alt_freqs { "  +alt" } else { "" }
            );
        }
    }

    if !engine.faults().is_empty() {
        println!("\n{}", "=== Faults ===".bold().yellow());
        for fault in engine.faults() {
            println!("  {}: {}", fault.domain.to_string().bold(), fault.error);
        }
    }
    Ok(())
}

/// Every fused id combination the Tegra210 tables can be asked about,
/// including one CPU and one GPU speedo id past the tables.
pub fn sweep_skus(gpu_speedo_value: i32) -> Vec<SkuInfo> {
    let mut skus = Vec::new();
    for cpu_speedo_id in 0..=tegra210::CPU_MAX_FREQ.len() as i32 {
        for cpu_process_id in 0..2 {
            for gpu_speedo_id in 0..=tegra210::GPU_CVB_TABLE.len() as i32 {
                for soc_process_id in 0..4 {
                    skus.push(SkuInfo {
                        revision: 2,
                        cpu_speedo_id,
                        cpu_process_id,
                        soc_process_id,
                        gpu_speedo_id,
                        gpu_speedo_value,
                        can_use_na_gpcpll: true,
                        ..SkuInfo::default()
                    });
                }
            }
        }
    }
    skus
}

fn describe(sku: &SkuInfo) -> String {
    format!(
        "cpu {}/{} gpu {}/{} soc {}/{}",
        sku.cpu_speedo_id,
        sku.cpu_process_id,
        sku.gpu_speedo_id,
        sku.gpu_process_id,
        sku.soc_speedo_id,
        sku.soc_process_id
    )
}

pub fn sweep(config: DvfsConfig, gpu_speedo_value: i32, all: bool) {
    let (mut clean, mut faulted, mut halted) = (0, 0, 0);
    for sku in sweep_skus(gpu_speedo_value) {
        let dfll = input::synthetic_dfll(&sku);
        let (_, _, outcome) = run(&sku, config, &dfll);
        match outcome {
            Outcome::Clean => {
                clean += 1;
                if all {
                    println!("  {} {}", describe(&sku), "ok".green());
                }
            }
            Outcome::Faulted(faults) => {
                faulted += 1;
                for fault in faults {
                    println!(
                        "  {} {}",
                        describe(&sku),
                        format!("{}: {}", fault.domain, fault.error).yellow()
                    );
                }
            }
            Outcome::Halted(e) => {
                halted += 1;
                println!("  {} {}", describe(&sku), e.to_string().red());
            }
        }
    }

    println!("\n{}", "=== Sweep Summary ===".bold().cyan());
    println!("Clean: {}", clean.to_string().green());
    println!("Faulted: {}", faulted.to_string().yellow());
    println!("Halted: {}", halted.to_string().red().bold());
}
