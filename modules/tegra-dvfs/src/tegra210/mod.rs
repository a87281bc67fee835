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

//! Tegra210 rails and characterization data.

mod core_tables;
mod cpu_tables;
mod gpu_tables;

pub use core_tables::{
    CORE_DVFS_TABLE, CORE_MILLIVOLTS, QSPI_DDR_DVFS, QSPI_SDR_DVFS, SOR1_DP_DVFS,
};
pub use cpu_tables::{CPU_FV_TABLE, CPU_LP_FV_TABLE, CPU_LP_MAX_FREQ, CPU_MAX_FREQ};
pub use gpu_tables::GPU_CVB_TABLE;

use crate::{
    align::RailAlignment,
    engine::SocTables,
    error::{DvfsError, DvfsResult},
    fuse::SkuInfo,
    rail::{Rail, RailId, ThermLimit},
};

const VDD_SAFE_STEP: i32 = 100;
const VDD_STEP_UP: i32 = 1300;

static CORE_THERM_FLOORS: [ThermLimit; 1] = [ThermLimit::new(15, 950)];
static CORE_THERM_CAPS: [ThermLimit; 1] = [ThermLimit::new(86, 1132)];

/// Fresh `vdd-cpu`, `vdd-core` and `vdd-gpu` rails, in [`RailId::ALL`] order.
pub fn rails() -> [Rail; 3] {
    let mut cpu = Rail::new(RailId::Cpu, 800, 1300, RailAlignment::new(6250));
    cpu.reg_id = "vdd-cpu";
    cpu.step = VDD_SAFE_STEP;
    cpu.step_up = VDD_STEP_UP;
    cpu.jmp_to_zero = true;
    cpu.dfll_mode = true;

    let mut core = Rail::new(RailId::Core, 0, 1300, RailAlignment::new(12500));
    core.reg_id = "vdd-core";
    core.step = VDD_SAFE_STEP;
    core.step_up = VDD_STEP_UP;
    core.therm_floors = CORE_THERM_FLOORS.iter().copied().collect();
    core.therm_caps = CORE_THERM_CAPS.iter().copied().collect();

    let mut gpu = Rail::new(RailId::Gpu, 0, 1300, RailAlignment::new(6250));
    gpu.reg_id = "vdd-gpu";
    gpu.step = VDD_SAFE_STEP;
    gpu.step_up = VDD_STEP_UP;
    gpu.in_band_pm = true;

    [cpu, core, gpu]
}

/// Core nominal voltage by SoC process corner.
pub fn core_speedo_mv(sku: &SkuInfo) -> DvfsResult<i32> {
    match sku.soc_process_id {
        0 if sku.revision <= 1 => Ok(1000),
        0 => Ok(1125),
        1 => Ok(1075),
        2 => Ok(1000),
        process_id => {
            error!("Un-supported Tegra210 speedo {}", sku.soc_speedo_id);
            Err(DvfsError::UnsupportedCoreProcess(process_id))
        }
    }
}

pub static TEGRA210: SocTables = SocTables {
    name: "tegra210",
    rails,
    cpu_clk: "cclk_g",
    cpu_lp_clk: "cclk_lp",
    gpu_clk: "gpcclk",
    cpu_max_freq: &CPU_MAX_FREQ,
    cpu_fv: &CPU_FV_TABLE,
    cpu_lp_max_freq: &CPU_LP_MAX_FREQ,
    cpu_lp_fv: &CPU_LP_FV_TABLE,
    gpu_cvb: &GPU_CVB_TABLE,
    core_millivolts: &CORE_MILLIVOLTS,
    core_dvfs: &CORE_DVFS_TABLE,
    qspi_sdr: &QSPI_SDR_DVFS,
    qspi_ddr: &QSPI_DDR_DVFS,
    sor1_dp: &SOR1_DP_DVFS,
    core_speedo_mv,
};

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn sku(revision: i32, soc_process_id: i32) -> SkuInfo {
        SkuInfo {
            revision,
            soc_process_id,
            ..Default::default()
        }
    }

    #[test]
    fn core_voltage_by_process() {
        assert_eq!(core_speedo_mv(&sku(1, 0)), Ok(1000));
        assert_eq!(core_speedo_mv(&sku(2, 0)), Ok(1125));
        assert_eq!(core_speedo_mv(&sku(2, 1)), Ok(1075));
        assert_eq!(core_speedo_mv(&sku(0, 2)), Ok(1000));
        assert_eq!(
            core_speedo_mv(&sku(0, 3)),
            Err(DvfsError::UnsupportedCoreProcess(3))
        );
    }

    #[test]
    fn rails_are_in_id_order() {
        let rails = rails();
        for id in RailId::ALL {
            assert_eq!(rails[id.index()].id, id);
            assert_eq!(rails[id.index()].reg_id, id.to_string());
        }
        assert_eq!(rails[RailId::Core.index()].therm_floors.len(), 1);
        assert!(rails[RailId::Cpu.index()].dfll_mode);
        assert!(rails[RailId::Gpu.index()].in_band_pm);
    }

    #[test]
    fn core_ladders_cover_voltage_steps() {
        for entry in CORE_DVFS_TABLE
            .iter()
            .chain([&QSPI_SDR_DVFS, &QSPI_DDR_DVFS, &SOR1_DP_DVFS])
        {
            assert_eq!(entry.freqs.len(), CORE_MILLIVOLTS.len(), "{}", entry.clk_name);
        }
        assert!(CORE_MILLIVOLTS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn characterization_ladders_ascend() {
        for entry in CPU_FV_TABLE.iter().chain(CPU_LP_FV_TABLE.iter()) {
            assert!(entry.fv_table.windows(2).all(|w| w[0].freq < w[1].freq));
            assert!(entry.min_mv < entry.max_mv);
        }
        for entry in GPU_CVB_TABLE.iter() {
            assert!(entry.fixed_table.rows().count() > 0);
        }
    }
}
