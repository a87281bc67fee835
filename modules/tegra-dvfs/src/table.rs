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

//! Per-clock DVFS tables and the fixed-capacity containers they are built in.

use crate::{
    error::{Domain, DvfsError, DvfsResult},
    rail::RailId,
    selector::SpeedoKey,
};

/// Maximum number of frequency points in one DVFS ladder.
pub const MAX_DVFS_FREQS: usize = 40;
/// Maximum number of thermal floor/cap entries of a rail.
pub const MAX_THERMAL_LIMITS: usize = 8;
/// Maximum number of thermal ranges of a thermal DVFS table.
pub const MAX_THERMAL_RANGES: usize = MAX_THERMAL_LIMITS + 1;

pub type FreqLadder = heapless::Vec<u64, MAX_DVFS_FREQS>;
pub type MvLadder = heapless::Vec<i32, MAX_DVFS_FREQS>;

/// Frequency/voltage characterization point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FvPoint {
    /// Frequency in kHz.
    pub freq: u64,
    pub mv: i32,
}

impl FvPoint {
    pub const fn new(freq: u64, mv: i32) -> Self {
        Self { freq, mv }
    }
}

pub(crate) fn push_freq(ladder: &mut FreqLadder, freq: u64, domain: Domain) -> DvfsResult {
    ladder
        .push(freq)
        .map_err(|_| DvfsError::TableOverflow(domain))
}

pub(crate) fn push_mv(ladder: &mut MvLadder, mv: i32, domain: Domain) -> DvfsResult {
    ladder.push(mv).map_err(|_| DvfsError::TableOverflow(domain))
}

/// Voltages of a thermal DVFS table, indexed `[range][frequency]`.
///
/// Range 0 is the coldest. The matrix is the transpose of the CVB input,
/// which is indexed by frequency first; columns are filled one frequency at a
/// time with [`ThermalMatrix::set`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThermalMatrix {
    ranges: usize,
    freqs: usize,
    millivolts: [[i32; MAX_DVFS_FREQS]; MAX_THERMAL_RANGES],
}

impl ThermalMatrix {
    pub fn new(ranges: usize) -> DvfsResult<Self> {
        if ranges == 0 || ranges > MAX_THERMAL_RANGES {
            return Err(DvfsError::TableOverflow(Domain::Gpu));
        }
        Ok(Self {
            ranges,
            freqs: 0,
            millivolts: [[0; MAX_DVFS_FREQS]; MAX_THERMAL_RANGES],
        })
    }

    pub fn ranges(&self) -> usize {
        self.ranges
    }

    /// Number of committed frequency columns.
    pub fn freqs(&self) -> usize {
        self.freqs
    }

    pub fn get(&self, range: usize, freq_index: usize) -> i32 {
        self.millivolts[range][freq_index]
    }

    pub(crate) fn set(&mut self, range: usize, freq_index: usize, mv: i32) {
        self.millivolts[range][freq_index] = mv;
    }

    /// Marks columns `0..freqs` as valid.
    pub(crate) fn commit(&mut self, freqs: usize) {
        self.freqs = freqs;
    }

    /// Voltage row of one thermal range over the committed frequencies.
    pub fn row(&self, range: usize) -> &[i32] {
        &self.millivolts[range][..self.freqs]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        (0..self.ranges).map(|range| self.row(range))
    }

    /// Checks every voltage is within `[min_mv, max_mv]` and non-decreasing in
    /// frequency, and returns the peak voltage across ranges per frequency.
    pub fn peak_millivolts(&self, min_mv: i32, max_mv: i32) -> DvfsResult<MvLadder> {
        let mut peak = MvLadder::new();
        for _ in 0..self.freqs {
            push_mv(&mut peak, 0, Domain::Gpu)?;
        }

        for (range, row) in self.rows().enumerate() {
            for (freq_index, &mv) in row.iter().enumerate() {
                if mv > max_mv || mv < min_mv || (freq_index > 0 && mv < row[freq_index - 1]) {
                    return Err(DvfsError::InvalidThermalEntry {
                        mv,
                        freq_index,
                        range,
                    });
                }
                if mv > peak[freq_index] {
                    peak[freq_index] = mv;
                }
            }
        }
        Ok(peak)
    }
}

/// DVFS table attached to one clock.
///
/// `millivolts[i]` is the voltage required to run at `freqs[i] * freqs_mult`
/// Hz. Thermal tables additionally carry one voltage row per thermal range.
#[derive(Clone, Debug)]
pub struct DvfsTable {
    pub clk_name: &'static str,
    pub rail: RailId,
    pub key: SpeedoKey,
    pub freqs: FreqLadder,
    pub freqs_mult: u32,
    pub millivolts: MvLadder,
    /// Closed-loop (DFLL) voltages, CPU only.
    pub dfll_millivolts: Option<MvLadder>,
    pub thermal: Option<ThermalMatrix>,
    pub peak_millivolts: Option<MvLadder>,
    /// Alternative frequency set for the same voltages (e.g. SOR1 in DP mode).
    pub alt_freqs: Option<FreqLadder>,
    pub max_millivolts: i32,
    pub auto_dvfs: bool,
    /// Lowest rate at which the DFLL clock source is preferred, in Hz.
    pub use_dfll_rate_min: u64,
    /// Highest rate safe at minimum voltage in every thermal range, in Hz.
    pub fmax_at_vmin_safe_t: u64,
    pub na_dvfs: bool,
}

impl DvfsTable {
    pub fn new(clk_name: &'static str, rail: RailId, key: SpeedoKey, freqs_mult: u32) -> Self {
        Self {
            clk_name,
            rail,
            key,
            freqs: FreqLadder::new(),
            freqs_mult,
            millivolts: MvLadder::new(),
            dfll_millivolts: None,
            thermal: None,
            peak_millivolts: None,
            alt_freqs: None,
            max_millivolts: 0,
            auto_dvfs: true,
            use_dfll_rate_min: 0,
            fmax_at_vmin_safe_t: 0,
            na_dvfs: false,
        }
    }

    pub fn num_freqs(&self) -> usize {
        self.freqs.len()
    }

    /// Rate of point `index` in Hz.
    pub fn rate_hz(&self, index: usize) -> u64 {
        self.freqs[index] * u64::from(self.freqs_mult)
    }

    /// Highest rate in Hz, if the table has any point.
    pub fn max_rate_hz(&self) -> Option<u64> {
        self.freqs.len().checked_sub(1).map(|i| self.rate_hz(i))
    }

    /// Whether this table has a distinct voltage row per thermal range.
    pub fn is_thermal(&self) -> bool {
        self.thermal.as_ref().is_some_and(|m| m.ranges() > 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[i32]]) -> ThermalMatrix {
        let mut m = ThermalMatrix::new(rows.len()).unwrap();
        for (range, row) in rows.iter().enumerate() {
            for (i, &mv) in row.iter().enumerate() {
                m.set(range, i, mv);
            }
        }
        m.commit(rows[0].len());
        m
    }

    #[test]
    fn peak_row_is_max_across_ranges() {
        let m = matrix(&[&[900, 950, 1000], &[850, 950, 1010]]);
        let peak = m.peak_millivolts(800, 1100).unwrap();
        assert_eq!(peak.as_slice(), &[900, 950, 1010]);
    }

    #[test]
    fn rejects_decreasing_voltage() {
        let m = matrix(&[&[900, 880]]);
        assert_eq!(
            m.peak_millivolts(800, 1100),
            Err(DvfsError::InvalidThermalEntry {
                mv: 880,
                freq_index: 1,
                range: 0
            })
        );
    }

    #[test]
    fn rejects_out_of_rail_voltage() {
        let m = matrix(&[&[900, 1200]]);
        assert!(m.peak_millivolts(800, 1100).is_err());
        let m = matrix(&[&[700, 900]]);
        assert!(m.peak_millivolts(800, 1100).is_err());
    }

    #[test]
    fn range_count_is_bounded() {
        assert!(ThermalMatrix::new(0).is_err());
        assert!(ThermalMatrix::new(MAX_THERMAL_RANGES + 1).is_err());
        assert_eq!(ThermalMatrix::new(2).unwrap().ranges(), 2);
    }

    #[test]
    fn rates() {
        let mut t = DvfsTable::new("gpcclk", RailId::Gpu, SpeedoKey::ANY, 1000);
        assert_eq!(t.max_rate_hz(), None);
        t.freqs.push(76_800).unwrap();
        t.freqs.push(153_600).unwrap();
        assert_eq!(t.rate_hz(0), 76_800_000);
        assert_eq!(t.max_rate_hz(), Some(153_600_000));
    }
}
