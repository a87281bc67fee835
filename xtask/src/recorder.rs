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

//! Clock provider that accepts every clock and remembers what it was given.

use tegra_dvfs::{ClockHandle, ClockProvider, DvfsResult, DvfsTable};

#[derive(Debug, Default)]
pub struct RecordingClocks {
    lookups: usize,
    attached: Vec<Attached>,
}

/// Last table handed to one clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attached {
    pub clk_name: &'static str,
    pub max_millivolts: i32,
    pub max_rate_hz: Option<u64>,
    pub alt_freqs: bool,
}

impl RecordingClocks {
    pub fn attached(&self) -> &[Attached] {
        &self.attached
    }

    fn record(&mut self, table: &DvfsTable) {
        let entry = Attached {
            clk_name: table.clk_name,
            max_millivolts: table.max_millivolts,
            max_rate_hz: table.max_rate_hz(),
            alt_freqs: table.alt_freqs.is_some(),
        };
        match self.attached.iter_mut().find(|a| a.clk_name == table.clk_name) {
            Some(existing) => *existing = entry,
            None => self.attached.push(entry),
        }
    }
}

impl ClockProvider for RecordingClocks {
    fn get(&mut self, _name: &str) -> Option<ClockHandle> {
        self.lookups += 1;
        Some(ClockHandle::from(self.lookups))
    }

    fn setup_dvfs(&mut self, _clk: ClockHandle, table: &DvfsTable) -> DvfsResult {
        self.record(table);
        Ok(())
    }

    fn add_alt_freqs(&mut self, _clk: ClockHandle, table: &DvfsTable) -> DvfsResult {
        self.record(table);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tegra_dvfs::{RailId, selector::SpeedoKey};

    #[test]
    fn alt_freqs_update_the_same_clock() {
        let mut clocks = RecordingClocks::default();
        let mut table = DvfsTable::new("sor1", RailId::Core, SpeedoKey::ANY, 1000);
        table.freqs.push(148_500).unwrap();
        table.max_millivolts = 1125;

        let clk = clocks.get("sor1").unwrap();
        clocks.setup_dvfs(clk, &table).unwrap();
        table.alt_freqs = Some(table.freqs.clone());
        clocks.add_alt_freqs(clk, &table).unwrap();

        assert_eq!(
            clocks.attached(),
            &[Attached {
                clk_name: "sor1",
                max_millivolts: 1125,
                max_rate_hz: Some(148_500_000),
                alt_freqs: true,
            }]
        );
    }
}
