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

//! SKU, configuration and DFLL ladder inputs.

use anyhow::{Context, Result, ensure};
use log::{debug, info};
use std::fs;
use std::path::Path;
use tegra_dvfs::{DfllTable, DvfsConfig, SkuInfo, selector::select, tegra210};

/// Closed-loop headroom assumed when no DFLL ladder is supplied.
const DFLL_MARGIN_MV: i32 = 60;

fn read(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {what} file {}", path.display()))
}

pub fn load_sku(path: &Path) -> Result<SkuInfo> {
    info!("Loading SKU from {}", path.display());
    let raw = read(path, "SKU")?;
    parse_sku(&raw).with_context(|| format!("Invalid SKU file {}", path.display()))
}

pub fn parse_sku(raw: &str) -> Result<SkuInfo> {
    Ok(toml::from_str(raw)?)
}

pub fn load_config(path: Option<&Path>) -> Result<DvfsConfig> {
    let Some(path) = path else {
        return Ok(DvfsConfig::default());
    };
    let raw = read(path, "config")?;
    DvfsConfig::from_toml(&raw).with_context(|| format!("Invalid config file {}", path.display()))
}

pub fn load_dfll(path: &Path) -> Result<DfllTable> {
    info!("Loading DFLL ladder from {}", path.display());
    let raw = read(path, "DFLL")?;
    parse_dfll(&raw).with_context(|| format!("Invalid DFLL file {}", path.display()))
}

pub fn parse_dfll(raw: &str) -> Result<DfllTable> {
    let dfll: DfllTable = toml::from_str(raw)?;
    ensure!(
        dfll.freqs_hz.len() == dfll.microvolts.len(),
        "{} frequencies but {} voltages",
        dfll.freqs_hz.len(),
        dfll.microvolts.len()
    );
    ensure!(!dfll.freqs_hz.is_empty(), "empty DFLL ladder");
    Ok(dfll)
}

/// DFLL ladder following the PLL ladder of the SKU's CPU entry, a fixed
/// margin below it.
pub fn synthetic_dfll(sku: &SkuInfo) -> DfllTable {
    let entries = &tegra210::CPU_FV_TABLE;
    let entry = select(entries, sku.cpu_speedo_id, sku.cpu_process_id).unwrap_or(&entries[0]);
    debug!(
        "Synthesizing DFLL ladder from cpu fv entry {}/{}",
        entry.key.speedo_id, entry.key.process_id
    );
    DfllTable {
        freqs_hz: entry.fv_table.iter().map(|p| p.freq * 1000).collect(),
        microvolts: entry
            .fv_table
            .iter()
            .map(|p| (p.mv - DFLL_MARGIN_MV) * 1000)
            .collect(),
    }
}
