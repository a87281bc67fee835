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

//! Fast and slow (LP) CPU frequency/voltage table construction.
//!
//! The fast cluster can be clocked from the PLL (open loop) or the DFLL
//! (closed loop). Its characterization ladder gives the PLL voltage per
//! frequency; the DFLL driver publishes the same frequency ladder with the
//! closed-loop voltages. Both are merged into one table, clipped at the SKU
//! maximum frequency. The slow cluster only runs from the PLL.

use crate::{
    KHZ,
    clock::DfllLadder,
    error::{Domain, DvfsError, DvfsResult},
    rail::{Rail, RailId},
    selector::{Characterized, SpeedoKey},
    table::{DvfsTable, FvPoint, MvLadder, push_freq, push_mv},
};

/// Frequency/voltage characterization of one CPU SKU.
#[derive(Clone, Copy, Debug)]
pub struct CpuFvEntry {
    pub key: SpeedoKey,
    pub min_mv: i32,
    pub max_mv: i32,
    /// Ascending ladder, frequencies in kHz.
    pub fv_table: &'static [FvPoint],
}

impl Characterized for CpuFvEntry {
    fn key(&self) -> SpeedoKey {
        self.key
    }

    fn name(&self) -> &str {
        "cpu fv"
    }
}

/// Result of [`build_cpu_dvfs`].
#[derive(Clone, Debug)]
pub struct CpuDvfs {
    /// Frequencies in Hz, PLL voltages in `millivolts`, DFLL voltages in
    /// `dfll_millivolts`.
    pub table: DvfsTable,
    /// Nominal voltage for the CPU rail.
    pub nominal_millivolts: i32,
    /// Highest rate the DFLL reaches at its minimum voltage, in Hz.
    pub fmax_at_vmin: u64,
}

/// Builds the fast CPU table.
///
/// The PLL and DFLL ladders must list the same frequencies. Construction
/// stops at the first point out of order, above `max_freq` (kHz) or requiring
/// more than the rail maximum on the PLL.
pub fn build_cpu_dvfs(
    entry: &CpuFvEntry,
    max_freq: u64,
    dfll: &DfllLadder<'_>,
    rail: &Rail,
    clk_name: &'static str,
) -> DvfsResult<CpuDvfs> {
    let min_dfll_mv = rail.round_up(rail.clamp_min(entry.min_mv, "dfll"));
    let max_mv = rail.round_down(entry.max_mv.min(rail.max_millivolts));

    let mut table = DvfsTable::new(clk_name, RailId::Cpu, entry.key, 1);
    let mut dfll_millivolts = MvLadder::new();
    let mut fmax_at_vmin = 0;
    let mut fmin_use_dfll = 0;

    for i in 0..dfll.len() {
        let freq_hz = dfll.freqs_hz[i];
        let point = entry.fv_table.get(i).copied().unwrap_or(FvPoint::new(0, 0));
        if freq_hz / u64::from(KHZ) != point.freq {
            error!("Err: DFLL freq ladder does not match PLL's");
            return Err(DvfsError::LadderMismatch {
                index: i,
                dfll_khz: freq_hz / u64::from(KHZ),
                pll_khz: point.freq,
            });
        }

        if point.freq > max_freq || !ascends(&table, freq_hz) {
            break;
        }

        let mv = point.mv;
        if i == 0 && mv > max_mv {
            error!("Err: volt of 1st entry is higher than Vmax");
            return Err(DvfsError::FirstEntryAboveMax { mv, max_mv });
        }
        if mv > rail.max_millivolts {
            debug!(
                "tegra210_dvfs: {clk_name} {}kHz needs {mv}mV above rail max",
                point.freq
            );
            break;
        }

        // Highest rate at minimum DFLL voltage; if even the first entry is
        // above Vmin, the first entry is used as is.
        let dfll_mv = (dfll.microvolts[i] / 1000).max(min_dfll_mv);
        if dfll_mv > min_dfll_mv && fmax_at_vmin == 0 {
            fmax_at_vmin = if i == 0 {
                freq_hz
            } else {
                dfll.freqs_hz[i - 1]
            };
        }

        // Lowest rate at which the PLL voltage reaches the DFLL minimum
        if mv >= min_dfll_mv && fmin_use_dfll == 0 {
            fmin_use_dfll = freq_hz;
        }

        push_freq(&mut table.freqs, freq_hz, Domain::Cpu)?;
        push_mv(&mut table.millivolts, mv.max(rail.min_millivolts), Domain::Cpu)?;
        push_mv(&mut dfll_millivolts, dfll_mv.min(max_mv), Domain::Cpu)?;
    }

    let (Some(&last_freq), Some(&last_mv), Some(&last_dfll_mv)) = (
        table.freqs.last(),
        table.millivolts.last(),
        dfll_millivolts.last(),
    ) else {
        error!("tegra210_dvfs: invalid cpu dvfs table");
        return Err(DvfsError::EmptyTable(Domain::Cpu));
    };

    if fmax_at_vmin == 0 {
        fmax_at_vmin = last_freq;
    }
    // In the DFLL operating range the DFLL voltage at any rate must be
    // below the PLL voltage.
    if fmin_use_dfll == 0 || fmin_use_dfll > fmax_at_vmin {
        fmin_use_dfll = fmax_at_vmin;
    }

    table.dfll_millivolts = Some(dfll_millivolts);
    table.use_dfll_rate_min = fmin_use_dfll;

    Ok(CpuDvfs {
        table,
        nominal_millivolts: max_mv.min(last_mv.max(last_dfll_mv)),
        fmax_at_vmin,
    })
}

fn ascends(table: &DvfsTable, freq: u64) -> bool {
    table.freqs.last().is_none_or(|&last| freq > last)
}

/// Result of [`build_cpu_lp_dvfs`].
#[derive(Clone, Debug)]
pub struct CpuLpDvfs {
    /// Frequencies in kHz.
    pub table: DvfsTable,
    /// Rounded table maximum; the CPU rail nominal must cover it.
    pub max_millivolts: i32,
}

/// Builds the slow CPU table.
///
/// The LP cluster must reach its maximum frequency within nominal voltage, so
/// the ladder is cut at the first point out of order, above `max_freq` (kHz)
/// or above the table maximum voltage.
pub fn build_cpu_lp_dvfs(
    entry: &CpuFvEntry,
    max_freq: u64,
    rail: &Rail,
    clk_name: &'static str,
) -> DvfsResult<CpuLpDvfs> {
    let min_mv = rail.round_up(rail.clamp_min(entry.min_mv, "scpu"));
    let max_mv = rail.round_down(entry.max_mv);
    if max_mv > rail.max_millivolts {
        return Err(DvfsError::VmaxAboveRail {
            domain: Domain::CpuLp,
            max_mv,
            rail_max_mv: rail.max_millivolts,
        });
    }

    let mut table = DvfsTable::new(clk_name, RailId::Cpu, entry.key, KHZ);
    for point in entry.fv_table {
        if point.freq == 0 || point.freq > max_freq || !ascends(&table, point.freq) {
            break;
        }

        let mv = point.mv.max(min_mv);
        if mv > max_mv {
            warn!(
                "tegra210_dvfs: {mv}mV for {clk_name} rate {} above limit {max_mv}mV",
                point.freq
            );
            break;
        }

        push_freq(&mut table.freqs, point.freq, Domain::CpuLp)?;
        push_mv(&mut table.millivolts, mv, Domain::CpuLp)?;
    }

    if table.freqs.is_empty() {
        error!("tegra210_dvfs: invalid cpu lp dvfs table");
        return Err(DvfsError::EmptyTable(Domain::CpuLp));
    }

    Ok(CpuLpDvfs {
        table,
        max_millivolts: max_mv,
    })
}
