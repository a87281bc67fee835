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

//! Core rail clocks: fixed frequency ladders over the core voltage ladder.

use crate::{
    clock::EmcRatePredictor,
    error::{Domain, DvfsError, DvfsResult},
    rail::RailId,
    selector::{Characterized, SpeedoKey},
    table::{DvfsTable, push_freq, push_mv},
};

/// Maximum rate of one core clock at each step of the core voltage ladder.
#[derive(Clone, Copy, Debug)]
pub struct CoreDvfsEntry {
    pub clk_name: &'static str,
    pub key: SpeedoKey,
    pub auto_dvfs: bool,
    pub freqs_mult: u32,
    pub freqs: &'static [u64],
}

impl Characterized for CoreDvfsEntry {
    fn key(&self) -> SpeedoKey {
        self.key
    }

    fn name(&self) -> &str {
        self.clk_name
    }
}

/// `core_dvfs!(name, speedo, process, auto, [kHz, ...])`
macro_rules! core_dvfs {
    ($name:literal, $speedo:expr, $process:expr, $auto:expr, [$($freq:expr),* $(,)?]) => {
        $crate::core_dvfs::CoreDvfsEntry {
            clk_name: $name,
            key: $crate::selector::SpeedoKey::new($speedo, $process),
            auto_dvfs: $auto,
            freqs_mult: $crate::KHZ,
            freqs: &[$($freq),*],
        }
    };
}

pub(crate) use core_dvfs;

/// Index of the highest ladder step not above `mv`.
///
/// The ladder ends at its first zero entry.
pub fn core_nominal_index(ladder: &[i32], mv: i32) -> DvfsResult<usize> {
    ladder
        .iter()
        .take_while(|&&step| step != 0 && mv >= step)
        .count()
        .checked_sub(1)
        .ok_or_else(|| {
            error!("tegra210-dvfs: failed to get nominal idx at volt {mv}");
            DvfsError::NoCoreStep(mv)
        })
}

/// Pairs the entry's frequencies with the core voltage ladder.
pub fn build_core_table(entry: &CoreDvfsEntry, ladder: &[i32]) -> DvfsResult<DvfsTable> {
    let mut table = DvfsTable::new(entry.clk_name, RailId::Core, entry.key, entry.freqs_mult);
    table.auto_dvfs = entry.auto_dvfs;
    for (&freq, &mv) in entry.freqs.iter().zip(ladder) {
        push_freq(&mut table.freqs, freq, Domain::Core)?;
        push_mv(&mut table.millivolts, mv, Domain::Core)?;
    }
    Ok(table)
}

/// Replaces the EMC ladder with the rates the memory controller predicts at
/// each core voltage. A zero prediction keeps the static rate; a failed one
/// stops the adjustment.
pub fn adjust_emc_table(table: &mut DvfsTable, ladder: &[i32], emc: &dyn EmcRatePredictor) {
    for (i, &mv) in ladder.iter().enumerate() {
        if mv == 0 {
            return;
        }
        let Some(rate) = emc.predict_rate(mv) else {
            return;
        };
        if rate == 0 {
            continue;
        }
        if let Some(freq) = table.freqs.get_mut(i) {
            *freq = rate;
        }
    }
}
