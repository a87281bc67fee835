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

//! GPU thermal DVFS table construction from CVB characterization.

use crate::{
    align::round_cvb_voltage,
    config::GpcPllMode,
    cvb::{CvbRow, CvbTable, cvb_t_voltage, cvb_voltage},
    error::{Domain, DvfsError, DvfsResult},
    rail::{Rail, RailId},
    selector::{Characterized, SpeedoKey},
    table::{DvfsTable, MAX_THERMAL_LIMITS, MAX_THERMAL_RANGES, ThermalMatrix, push_freq},
};

/// Voltage per thermal range at one frequency.
pub type RangeVoltages = heapless::Vec<i32, MAX_THERMAL_RANGES>;
/// Thermal trip points in degrees C.
pub type ThermalTrips = heapless::Vec<i32, MAX_THERMAL_LIMITS>;

/// CVB characterization of one GPU SKU.
#[derive(Clone, Copy, Debug)]
pub struct GpuCvbEntry {
    pub key: SpeedoKey,
    pub pll_min_millivolts: i32,
    pub max_millivolts: i32,
    /// Vmax when GPU voltage scaling is disabled, if it differs.
    pub max_millivolts_no_dvfs: Option<i32>,
    /// Highest frequency in kHz.
    pub max_freq: u64,
    /// Noise-aware GPCPLL table; `None` if the SKU only runs fixed.
    pub na_table: Option<&'static CvbTable>,
    pub fixed_table: &'static CvbTable,
    /// Boundaries between thermal ranges, coldest first. Empty for a single
    /// range.
    pub vts_trips: &'static [i32],
    /// Voltage floor per thermal range.
    pub therm_floors: &'static [i32],
}

impl GpuCvbEntry {
    pub fn cvb_table(&self, mode: GpcPllMode) -> &'static CvbTable {
        match (mode, self.na_table) {
            (GpcPllMode::Na, Some(na)) => na,
            _ => self.fixed_table,
        }
    }

    pub fn max_millivolts(&self, gpu_dvfs_enabled: bool) -> i32 {
        match self.max_millivolts_no_dvfs {
            Some(mv) if !gpu_dvfs_enabled => mv,
            _ => self.max_millivolts,
        }
    }
}

impl Characterized for GpuCvbEntry {
    fn key(&self) -> SpeedoKey {
        self.key
    }

    fn name(&self) -> &str {
        "gpu cvb"
    }
}

/// Result of [`build_gpu_dvfs`].
#[derive(Clone, Debug)]
pub struct GpuDvfs {
    pub table: DvfsTable,
    /// Minimum voltage safe at the maximum frequency in every range.
    pub nominal_millivolts: i32,
    /// Trip points separating the ranges, first trip shifted out.
    pub thermal_trips: ThermalTrips,
    pub thermal_ranges: usize,
    pub vmin: RangeVoltages,
}

/// Builds the GPU table for one SKU from `cvb` at chip speedo value `speedo`.
///
/// Frequencies are appended while they ascend and every range stays within
/// `max_mv`; the first row breaking either ends the table.
pub fn build_gpu_dvfs(
    entry: &GpuCvbEntry,
    cvb: &CvbTable,
    max_mv: i32,
    speedo: i32,
    rail: &Rail,
    clk_name: &'static str,
) -> DvfsResult<GpuDvfs> {
    let max_mv = rail.round_down(max_mv);
    let min_mv = rail.clamp_min(entry.pll_min_millivolts, "gpu");

    let ranges = entry.vts_trips.len().max(1);
    let mut vmin = RangeVoltages::new();
    for j in 0..ranges {
        let floor = entry.therm_floors.get(j).copied().unwrap_or(0);
        vmin.push(rail.round_up(min_mv.max(floor)))
            .map_err(|_| DvfsError::TableOverflow(Domain::Gpu))?;
    }

    let mut matrix = ThermalMatrix::new(ranges)?;
    let mut table = DvfsTable::new(clk_name, RailId::Gpu, entry.key, cvb.freqs_mult);
    for row in cvb.rows() {
        let ascending = table.freqs.last().is_none_or(|&last| row.freq > last);
        if row.freq > entry.max_freq || !ascending {
            break;
        }
        let Some(column) = thermal_column(row, cvb, speedo, entry.vts_trips, &vmin, max_mv, rail)
        else {
            break;
        };

        let index = table.freqs.len();
        push_freq(&mut table.freqs, row.freq, Domain::Gpu)?;
        for (range, &mv) in column.iter().enumerate() {
            matrix.set(range, index, mv);
        }
    }

    let freqs = table.freqs.len();
    matrix.commit(freqs);
    let peak = matrix
        .peak_millivolts(rail.min_millivolts, rail.max_millivolts)
        .and_then(|peak| {
            if freqs == 0 {
                Err(DvfsError::EmptyTable(Domain::Gpu))
            } else {
                Ok(peak)
            }
        })
        .inspect_err(|_| error!("tegra210_dvfs: invalid gpu dvfs table"))?;

    let vmin_at_fmax = matrix.rows().map(|row| row[freqs - 1]).max().unwrap_or(0);
    let fmax_at_vmin = matrix
        .rows()
        .chain(core::iter::once(peak.as_slice()))
        .map(|row| table.freqs[last_at_vmin(row)])
        .min()
        .unwrap_or(0);

    let mut thermal_trips = ThermalTrips::new();
    for &trip in entry.vts_trips.iter().skip(1) {
        thermal_trips
            .push(trip)
            .map_err(|_| DvfsError::TableOverflow(Domain::Gpu))?;
    }

    table.millivolts = peak.clone();
    table.peak_millivolts = Some(peak);
    table.thermal = Some(matrix);
    table.fmax_at_vmin_safe_t = u64::from(cvb.freqs_mult) * fmax_at_vmin;

    Ok(GpuDvfs {
        table,
        nominal_millivolts: max_mv.min(vmin_at_fmax),
        thermal_trips,
        thermal_ranges: ranges,
        vmin,
    })
}

/// Voltages of one CVB row in every thermal range, or `None` if any range
/// needs more than `max_mv`. A colder range never runs below a warmer one.
fn thermal_column(
    row: &CvbRow,
    cvb: &CvbTable,
    speedo: i32,
    trips: &[i32],
    vmin: &RangeVoltages,
    max_mv: i32,
    rail: &Rail,
) -> Option<RangeVoltages> {
    let base = cvb_voltage(speedo, cvb.speedo_scale, &row.pll);

    let mut column = RangeVoltages::new();
    for (range, &floor) in vmin.iter().enumerate() {
        let t = if vmin.len() > 1 { trips[range] } else { 0 };
        let mv = base.saturating_add(cvb_t_voltage(
            speedo,
            cvb.speedo_scale,
            t,
            cvb.thermal_scale,
            &row.pll,
        ));
        let mv = round_cvb_voltage(mv, cvb.voltage_scale, &rail.alignment).max(floor);
        if mv > max_mv {
            return None;
        }
        column.push(mv).ok()?;
    }

    for range in (1..column.len()).rev() {
        if column[range - 1] < column[range] {
            column[range - 1] = column[range];
        }
    }
    Some(column)
}

/// Index of the last frequency still at the row's first voltage.
fn last_at_vmin(row: &[i32]) -> usize {
    row.iter()
        .position(|&mv| mv > row[0])
        .unwrap_or(row.len())
        - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{align::RailAlignment, cvb::CvbCoefficients, tegra210};

    static FLAT: [CvbRow; 2] = [
        CvbRow::new(100, CvbCoefficients::speedo(850_000, 0, 0)),
        CvbRow::new(200, CvbCoefficients::speedo(1_000_000, 0, 0)),
    ];

    static FLAT_TABLE: CvbTable = CvbTable {
        freqs_mult: 1000,
        speedo_scale: 100,
        thermal_scale: 10,
        voltage_scale: 1000,
        rows: &FLAT,
    };

    const ENTRY: GpuCvbEntry = GpuCvbEntry {
        key: SpeedoKey::ANY,
        pll_min_millivolts: 800,
        max_millivolts: 1150,
        max_millivolts_no_dvfs: None,
        max_freq: 1_000_000,
        na_table: None,
        fixed_table: &FLAT_TABLE,
        vts_trips: &[],
        therm_floors: &[900],
    };

    fn gpu_rail() -> Rail {
        Rail::new(RailId::Gpu, 0, 1300, RailAlignment::new(6250))
    }

    #[test]
    fn floor_raises_cold_voltage() {
        let gpu = build_gpu_dvfs(&ENTRY, &FLAT_TABLE, 1150, 2000, &gpu_rail(), "gpcclk").unwrap();
        let thermal = gpu.table.thermal.as_ref().unwrap();
        assert_eq!(thermal.row(0), &[900, 1000]);
        assert_eq!(gpu.table.millivolts.as_slice(), &[900, 1000]);
        assert_eq!(gpu.nominal_millivolts, 1000);
        assert_eq!(gpu.table.fmax_at_vmin_safe_t, 100_000);
        assert_eq!(gpu.thermal_ranges, 1);
        assert!(gpu.thermal_trips.is_empty());
    }

    #[test]
    fn row_above_vmax_ends_table() {
        let gpu = build_gpu_dvfs(&ENTRY, &FLAT_TABLE, 950, 2000, &gpu_rail(), "gpcclk").unwrap();
        assert_eq!(gpu.table.freqs.as_slice(), &[100]);
        assert_eq!(gpu.nominal_millivolts, 900);
        assert_eq!(gpu.table.fmax_at_vmin_safe_t, 100_000);
    }

    #[test]
    fn nothing_below_vmax() {
        let err = build_gpu_dvfs(&ENTRY, &FLAT_TABLE, 850, 2000, &gpu_rail(), "gpcclk").unwrap_err();
        assert_eq!(err, DvfsError::EmptyTable(Domain::Gpu));
    }

    #[test]
    fn out_of_rail_voltage_is_rejected() {
        let rail = Rail::new(RailId::Gpu, 950, 1300, RailAlignment::new(6250));
        let entry = GpuCvbEntry {
            therm_floors: &[],
            ..ENTRY
        };
        // Rail minimum is applied to the floor, so the rows validate.
        assert!(build_gpu_dvfs(&entry, &FLAT_TABLE, 1150, 2000, &rail, "gpcclk").is_ok());

        let rail = Rail::new(RailId::Gpu, 0, 950, RailAlignment::new(6250));
        assert!(matches!(
            build_gpu_dvfs(&entry, &FLAT_TABLE, 1150, 2000, &rail, "gpcclk"),
            Err(DvfsError::InvalidThermalEntry { mv: 1000, .. })
        ));
    }

    #[test]
    fn thermal_ranges_stay_ordered() {
        // Voltage rises 2mV per degree.
        static WARM: [CvbRow; 3] = [
            CvbRow::new(100, CvbCoefficients::new(800_000, 0, 0, 0, 20_000, 0)),
            CvbRow::new(200, CvbCoefficients::new(850_000, 0, 0, 0, 20_000, 0)),
            CvbRow::new(300, CvbCoefficients::new(900_000, 0, 0, 0, 20_000, 0)),
        ];
        static WARM_TABLE: CvbTable = CvbTable {
            rows: &WARM,
            ..FLAT_TABLE
        };
        let entry = GpuCvbEntry {
            fixed_table: &WARM_TABLE,
            vts_trips: &[-10, 20, 50],
            therm_floors: &[950, 900, 850],
            ..ENTRY
        };

        let gpu = build_gpu_dvfs(&entry, &WARM_TABLE, 1150, 2000, &gpu_rail(), "gpcclk").unwrap();
        let thermal = gpu.table.thermal.as_ref().unwrap();
        assert_eq!(thermal.ranges(), 3);
        assert_eq!(thermal.freqs(), 3);
        for freq_index in 0..thermal.freqs() {
            for range in 1..thermal.ranges() {
                assert!(thermal.get(range - 1, freq_index) >= thermal.get(range, freq_index));
            }
        }
        for row in thermal.rows() {
            assert!(row.windows(2).all(|w| w[0] <= w[1]));
        }
        assert_eq!(gpu.table.millivolts.as_slice(), thermal.row(0));
        assert_eq!(gpu.thermal_trips.as_slice(), &[20, 50]);
        assert_eq!(gpu.vmin.as_slice(), &[950, 900, 850]);
        assert_eq!(gpu.nominal_millivolts, thermal.row(0)[2]);
    }

    #[test]
    fn fmax_at_vmin_is_the_most_conservative_range() {
        static STEPS: [CvbRow; 4] = [
            CvbRow::new(100, CvbCoefficients::speedo(850_000, 0, 0)),
            CvbRow::new(200, CvbCoefficients::speedo(900_000, 0, 0)),
            CvbRow::new(300, CvbCoefficients::speedo(950_000, 0, 0)),
            CvbRow::new(400, CvbCoefficients::speedo(1_000_000, 0, 0)),
        ];
        static STEPS_TABLE: CvbTable = CvbTable {
            rows: &STEPS,
            ..FLAT_TABLE
        };
        let entry = GpuCvbEntry {
            fixed_table: &STEPS_TABLE,
            vts_trips: &[-10, 50],
            therm_floors: &[925, 850],
            ..ENTRY
        };

        let gpu = build_gpu_dvfs(&entry, &STEPS_TABLE, 1150, 2000, &gpu_rail(), "gpcclk").unwrap();
        let thermal = gpu.table.thermal.as_ref().unwrap();
        assert_eq!(thermal.row(0), &[925, 925, 950, 1000]);
        assert_eq!(thermal.row(1), &[850, 900, 950, 1000]);
        // The cold row stays at Vmin up to 200, the warm row only at 100.
        assert_eq!(gpu.table.fmax_at_vmin_safe_t, 100_000);
        assert_eq!(gpu.nominal_millivolts, 1000);
        assert_eq!(gpu.thermal_ranges, 2);
        assert_eq!(gpu.thermal_trips.as_slice(), &[50]);
    }

    #[test]
    fn stops_at_out_of_order_row() {
        static UNORDERED: [CvbRow; 3] = [
            CvbRow::new(100, CvbCoefficients::speedo(850_000, 0, 0)),
            CvbRow::new(300, CvbCoefficients::speedo(900_000, 0, 0)),
            CvbRow::new(200, CvbCoefficients::speedo(950_000, 0, 0)),
        ];
        static UNORDERED_TABLE: CvbTable = CvbTable {
            rows: &UNORDERED,
            ..FLAT_TABLE
        };
        let entry = GpuCvbEntry {
            fixed_table: &UNORDERED_TABLE,
            ..ENTRY
        };

        let gpu =
            build_gpu_dvfs(&entry, &UNORDERED_TABLE, 1150, 2000, &gpu_rail(), "gpcclk").unwrap();
        assert_eq!(gpu.table.freqs.as_slice(), &[100, 300]);
        assert_eq!(gpu.table.millivolts.as_slice(), &[900, 900]);
    }

    #[test]
    fn fixed_table_only_for_speedo0() {
        let speedo0 = tegra210::GPU_CVB_TABLE
            .iter()
            .find(|e| e.key.speedo_id == 0)
            .unwrap();
        assert!(core::ptr::eq(
            speedo0.cvb_table(GpcPllMode::Na),
            speedo0.fixed_table
        ));
        assert_eq!(speedo0.max_millivolts(true), 1150);
        assert_eq!(speedo0.max_millivolts(false), 1000);
    }

    #[test]
    fn tegra210_tables_build() {
        let rail = gpu_rail();
        for entry in tegra210::GPU_CVB_TABLE.iter() {
            for mode in [GpcPllMode::Fixed, GpcPllMode::Na] {
                for speedo in [1700, 2000, 2300] {
                    let cvb = entry.cvb_table(mode);
                    let max_mv = entry.max_millivolts(true);
                    let gpu = build_gpu_dvfs(entry, cvb, max_mv, speedo, &rail, "gpcclk").unwrap();

                    assert!(gpu.nominal_millivolts <= max_mv);
                    assert!(gpu.table.freqs.windows(2).all(|w| w[0] < w[1]));
                    assert!(gpu.table.freqs.iter().all(|&f| f <= entry.max_freq));
                    assert!(gpu.table.fmax_at_vmin_safe_t <= gpu.table.max_rate_hz().unwrap());
                }
            }
        }
    }

    #[test]
    fn fixed_speedo2_ladder() {
        let entry = tegra210::GPU_CVB_TABLE
            .iter()
            .find(|e| e.key.speedo_id == 2)
            .unwrap();
        let gpu = build_gpu_dvfs(
            entry,
            entry.fixed_table,
            1150,
            2000,
            &gpu_rail(),
            "gpcclk",
        )
        .unwrap();
        assert_eq!(
            gpu.table.millivolts.as_slice(),
            &[818, 818, 818, 818, 843, 875, 918, 962, 1012, 1062, 1118]
        );
        assert_eq!(gpu.nominal_millivolts, 1118);
        assert_eq!(gpu.table.fmax_at_vmin_safe_t, 307_200_000);
    }
}
