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

use alloc::string::String;

use derive_more::Display;

/// DVFS domains whose tables are built independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Domain {
    #[display("cpu")]
    Cpu,
    #[display("cpu lp")]
    CpuLp,
    #[display("gpu")]
    Gpu,
    #[display("core")]
    Core,
    #[display("clock")]
    Clock,
}

pub type DvfsResult<T = ()> = Result<T, DvfsError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DvfsError {
    #[error("no {domain} dvfs entry for speedo {speedo_id}, process {process_id}")]
    NoMatch {
        domain: Domain,
        speedo_id: i32,
        process_id: i32,
    },
    #[error("{domain} speedo id {speedo_id} has no maximum frequency")]
    SpeedoOutOfRange { domain: Domain, speedo_id: i32 },
    #[error("cpu DFLL frequency/voltage ladder is not available yet")]
    Deferred,
    #[error("DFLL freq ladder does not match PLL's at index {index}: {dfll_khz}kHz vs {pll_khz}kHz")]
    LadderMismatch {
        index: usize,
        dfll_khz: u64,
        pll_khz: u64,
    },
    #[error("volt of 1st entry {mv}mV is higher than Vmax {max_mv}mV")]
    FirstEntryAboveMax { mv: i32, max_mv: i32 },
    #[error("invalid {0} dvfs table: no frequency in range")]
    EmptyTable(Domain),
    #[error("{0} dvfs table exceeds the frequency or thermal limit capacity")]
    TableOverflow(Domain),
    #[error("invalid thermal dvfs entry {mv}mV at frequency index {freq_index}, range {range}")]
    InvalidThermalEntry {
        mv: i32,
        freq_index: usize,
        range: usize,
    },
    #[error("{domain} Vmax {max_mv}mV above rail limit {rail_max_mv}mV")]
    VmaxAboveRail {
        domain: Domain,
        max_mv: i32,
        rail_max_mv: i32,
    },
    #[error("un-supported Tegra210 core process id {0}")]
    UnsupportedCoreProcess(i32),
    #[error("failed to get core nominal index at {0}mV")]
    NoCoreStep(i32),
    #[error("thermal capping across {0} ranges is not supported")]
    ThermalCapsUnsupported(usize),
    #[error("failed to enable dvfs on {0}")]
    ClockSetup(&'static str),
    #[error("dvfs engine is already initialized")]
    AlreadyInitialized,
    #[error("invalid dvfs config: {0}")]
    Config(String),
}

impl DvfsError {
    /// Fatal errors halt initialization; all others only disable the domain
    /// they occurred in.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::NoMatch { .. }
                | Self::SpeedoOutOfRange { .. }
                | Self::Deferred
                | Self::AlreadyInitialized
        )
    }
}
