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

//! Collaborators the engine talks to: the clock framework, the CPU DFLL
//! driver and the EMC driver.

use alloc::vec::Vec;

use crate::{error::DvfsResult, table::DvfsTable};

/// Opaque handle of a clock owned by the clock framework.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::From, derive_more::Into,
)]
pub struct ClockHandle(usize);

pub trait ClockProvider {
    /// Looks a clock up by name.
    fn get(&mut self, name: &str) -> Option<ClockHandle>;

    /// Hands a finished DVFS table to the clock.
    fn setup_dvfs(&mut self, clk: ClockHandle, table: &DvfsTable) -> DvfsResult;

    /// Registers `table.alt_freqs` as an alternative frequency set.
    fn add_alt_freqs(&mut self, clk: ClockHandle, table: &DvfsTable) -> DvfsResult;
}

/// CPU frequency ladder and closed-loop voltages published by the DFLL driver.
#[derive(Clone, Copy, Debug)]
pub struct DfllLadder<'a> {
    pub freqs_hz: &'a [u64],
    pub microvolts: &'a [i32],
}

impl DfllLadder<'_> {
    pub fn len(&self) -> usize {
        self.freqs_hz.len().min(self.microvolts.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait CpuDfllSource {
    /// `None` until the DFLL driver has probed.
    fn cpu_fv_table(&self) -> Option<DfllLadder<'_>>;
}

/// Owned DFLL ladder, e.g. captured from a running system.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct DfllTable {
    pub freqs_hz: Vec<u64>,
    pub microvolts: Vec<i32>,
}

impl DfllTable {
    pub fn ladder(&self) -> DfllLadder<'_> {
        DfllLadder {
            freqs_hz: &self.freqs_hz,
            microvolts: &self.microvolts,
        }
    }
}

impl CpuDfllSource for DfllTable {
    fn cpu_fv_table(&self) -> Option<DfllLadder<'_>> {
        Some(self.ladder())
    }
}

impl<T: CpuDfllSource> CpuDfllSource for Option<T> {
    fn cpu_fv_table(&self) -> Option<DfllLadder<'_>> {
        self.as_ref().and_then(T::cpu_fv_table)
    }
}

/// Board specific EMC rate prediction.
pub trait EmcRatePredictor {
    fn is_ready(&self) -> bool;

    /// Predicted EMC rate in kHz achievable at `millivolts`. `Some(0)` keeps
    /// the static rate, `None` means no prediction is available.
    fn predict_rate(&self, millivolts: i32) -> Option<u64>;
}
