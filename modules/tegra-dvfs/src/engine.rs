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

//! One-shot DVFS initialization.
//!
//! [`DvfsEngine::init`] resolves the characterization entries for the chip,
//! builds every table, reconciles the rail bounds and finally attaches the
//! tables to their clocks. A failure confined to one domain disables that
//! domain and is recorded as a [`DomainFault`]; only a missing
//! characterization entry or an unavailable DFLL ladder aborts.

use alloc::vec::Vec;

use crate::{
    clock::{ClockProvider, CpuDfllSource, EmcRatePredictor},
    config::{DvfsConfig, GpcPllMode, QspiMode},
    core_dvfs::{CoreDvfsEntry, adjust_emc_table, build_core_table, core_nominal_index},
    cpu::{CpuFvEntry, build_cpu_dvfs, build_cpu_lp_dvfs},
    error::{Domain, DvfsError, DvfsResult},
    fuse::SkuInfo,
    gpu::{GpuCvbEntry, RangeVoltages, ThermalTrips, build_gpu_dvfs},
    rail::{Rail, RailId, RailSummary},
    selector::{match_dvfs_one, select},
    table::{DvfsTable, FreqLadder, push_freq},
    tegra210::TEGRA210,
};

/// Characterization data and rail templates of one SoC.
pub struct SocTables {
    pub name: &'static str,
    pub rails: fn() -> [Rail; 3],
    pub cpu_clk: &'static str,
    pub cpu_lp_clk: &'static str,
    pub gpu_clk: &'static str,
    /// Fast CPU maximum frequency in kHz, indexed by CPU speedo id.
    pub cpu_max_freq: &'static [u64],
    pub cpu_fv: &'static [CpuFvEntry],
    /// Slow CPU maximum frequency in kHz, indexed by CPU speedo id.
    pub cpu_lp_max_freq: &'static [u64],
    pub cpu_lp_fv: &'static [CpuFvEntry],
    pub gpu_cvb: &'static [GpuCvbEntry],
    /// Core voltage ladder the core clock tables are indexed by.
    pub core_millivolts: &'static [i32],
    pub core_dvfs: &'static [CoreDvfsEntry],
    pub qspi_sdr: &'static CoreDvfsEntry,
    pub qspi_ddr: &'static CoreDvfsEntry,
    pub sor1_dp: &'static CoreDvfsEntry,
    pub core_speedo_mv: fn(&SkuInfo) -> DvfsResult<i32>,
}

/// A non-fatal initialization error and the domain it occurred in.
///
/// Most faults leave their domain unscaled. A
/// [`DvfsError::ThermalCapsUnsupported`] fault only means GPU thermal capping
/// was skipped; the GPU rail keeps scaling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainFault {
    pub domain: Domain,
    pub error: DvfsError,
}

pub struct DvfsEngine {
    soc: &'static SocTables,
    config: DvfsConfig,
    rails: [Rail; 3],
    cpu: Option<DvfsTable>,
    cpu_lp: Option<DvfsTable>,
    gpu: Option<DvfsTable>,
    gpu_thermal_trips: ThermalTrips,
    gpu_vmin: RangeVoltages,
    core: Vec<DvfsTable>,
    core_nominal_index: usize,
    faults: Vec<DomainFault>,
    /// Error that disabled each rail during init, by [`RailId::index`].
    rail_faults: [Option<DvfsError>; 3],
    initialized: bool,
}

impl DvfsEngine {
    pub fn new(soc: &'static SocTables, config: DvfsConfig) -> Self {
        Self {
            soc,
            config,
            rails: (soc.rails)(),
            cpu: None,
            cpu_lp: None,
            gpu: None,
            gpu_thermal_trips: ThermalTrips::new(),
            gpu_vmin: RangeVoltages::new(),
            core: Vec::new(),
            core_nominal_index: 0,
            faults: Vec::new(),
            rail_faults: [None, None, None],
            initialized: false,
        }
    }

    pub fn tegra210(config: DvfsConfig) -> Self {
        Self::new(&TEGRA210, config)
    }

    /// Builds all tables for `sku` and attaches them to `clocks`.
    ///
    /// Returns an error only when initialization cannot proceed at all; a
    /// [`DvfsError::Deferred`] init may be retried once the DFLL ladder is
    /// published.
    pub fn init(
        &mut self,
        sku: &SkuInfo,
        dfll: &dyn CpuDfllSource,
        clocks: &mut dyn ClockProvider,
        emc: Option<&dyn EmcRatePredictor>,
    ) -> DvfsResult {
        if self.initialized {
            return Err(DvfsError::AlreadyInitialized);
        }
        *self = Self::new(self.soc, self.config);

        // Core nominal first: its ladder index caps every core clock.
        self.init_core_nominal(sku);

        // Fast CPU before slow: the LP cluster can only raise the shared
        // rail nominal.
        self.init_cpu(sku, dfll)?;
        self.init_cpu_lp(sku);
        self.init_gpu(sku)?;

        self.init_rails();
        self.init_core_clocks(sku, clocks, emc);

        for table in [self.cpu.as_mut(), self.cpu_lp.as_mut(), self.gpu.as_mut()]
            .into_iter()
            .flatten()
        {
            let nominal = self.rails[table.rail.index()].nominal_millivolts;
            attach(clocks, table, nominal, &mut self.faults);
        }

        for rail in &self.rails {
            info!("tegra dvfs: {}", rail.summary());
        }
        self.initialized = true;
        Ok(())
    }

    fn init_core_nominal(&mut self, sku: &SkuInfo) {
        let ladder = self.soc.core_millivolts;
        let index = match (self.soc.core_speedo_mv)(sku)
            .and_then(|mv| core_nominal_index(ladder, mv))
        {
            Ok(index) => index,
            Err(err) => {
                self.fault(Domain::Core, Some(RailId::Core), err);
                0
            }
        };
        self.core_nominal_index = index;

        let rail = self.rail_mut(RailId::Core);
        if let Some(&mv) = ladder.get(index) {
            rail.nominal_millivolts = mv;
        }
        if let Some(&floor) = ladder.first() {
            rail.min_millivolts = rail.min_millivolts.max(floor);
        }
    }

    fn init_cpu(&mut self, sku: &SkuInfo, dfll: &dyn CpuDfllSource) -> DvfsResult {
        let soc = self.soc;
        let (speedo_id, process_id) = (sku.cpu_speedo_id, sku.cpu_process_id);
        let max_freq = max_freq(soc.cpu_max_freq, speedo_id).ok_or(
            DvfsError::SpeedoOutOfRange {
                domain: Domain::Cpu,
                speedo_id,
            },
        )?;
        let entry = select(soc.cpu_fv, speedo_id, process_id).ok_or(DvfsError::NoMatch {
            domain: Domain::Cpu,
            speedo_id,
            process_id,
        })?;
        let ladder = dfll.cpu_fv_table().ok_or(DvfsError::Deferred)?;

        match build_cpu_dvfs(entry, max_freq, &ladder, self.rail(RailId::Cpu), soc.cpu_clk) {
            Ok(cpu) => {
                debug!(
                    "tegra210_dvfs: cpu fmax at vmin {}Hz, dfll from {}Hz",
                    cpu.fmax_at_vmin, cpu.table.use_dfll_rate_min
                );
                self.rail_mut(RailId::Cpu).nominal_millivolts = cpu.nominal_millivolts;
                self.cpu = Some(cpu.table);
            }
            Err(err) => self.fault(Domain::Cpu, Some(RailId::Cpu), err),
        }
        Ok(())
    }

    fn init_cpu_lp(&mut self, sku: &SkuInfo) {
        let soc = self.soc;
        let (speedo_id, process_id) = (sku.cpu_speedo_id, sku.cpu_process_id);
        let Some(entry) = select(soc.cpu_lp_fv, speedo_id, process_id) else {
            info!("tegra210_dvfs: no cpu lp dvfs for speedo {speedo_id}, process {process_id}");
            return;
        };
        let Some(max_freq) = max_freq(soc.cpu_lp_max_freq, speedo_id) else {
            let err = DvfsError::SpeedoOutOfRange {
                domain: Domain::CpuLp,
                speedo_id,
            };
            self.fault(Domain::CpuLp, None, err);
            return;
        };

        match build_cpu_lp_dvfs(entry, max_freq, self.rail(RailId::Cpu), soc.cpu_lp_clk) {
            Ok(lp) => {
                let rail = self.rail_mut(RailId::Cpu);
                rail.nominal_millivolts = rail.nominal_millivolts.max(lp.max_millivolts);
                self.cpu_lp = Some(lp.table);
            }
            // The LP cluster shares the fast CPU rail, which stays enabled.
            Err(err) => self.fault(Domain::CpuLp, None, err),
        }
    }

    fn init_gpu(&mut self, sku: &SkuInfo) -> DvfsResult {
        let soc = self.soc;
        let (speedo_id, process_id) = (sku.gpu_speedo_id, sku.gpu_process_id);
        let entry = select(soc.gpu_cvb, speedo_id, process_id).ok_or(DvfsError::NoMatch {
            domain: Domain::Gpu,
            speedo_id,
            process_id,
        })?;

        let mode = self.config.gpcpll_mode;
        let result = build_gpu_dvfs(
            entry,
            entry.cvb_table(mode),
            entry.max_millivolts(self.config.gpu_dvfs_enabled),
            sku.gpu_speedo_value,
            self.rail(RailId::Gpu),
            soc.gpu_clk,
        );
        let mut gpu = match result {
            Ok(gpu) => gpu,
            Err(err) => {
                self.fault(Domain::Gpu, Some(RailId::Gpu), err);
                return Ok(());
            }
        };

        let rail = self.rail_mut(RailId::Gpu);
        rail.nominal_millivolts = gpu.nominal_millivolts;
        rail.thermal_scaling = gpu.thermal_ranges > 1;
        if gpu.thermal_ranges > 1 {
            warn!(
                "tegra210_dvfs: gpu thermal capping over {} ranges is not supported",
                gpu.thermal_ranges
            );
            let err = DvfsError::ThermalCapsUnsupported(gpu.thermal_ranges);
            self.faults.push(DomainFault {
                domain: Domain::Gpu,
                error: err,
            });
        }

        gpu.table.na_dvfs = mode == GpcPllMode::Na && sku.can_use_na_gpcpll;
        self.gpu_thermal_trips = gpu.thermal_trips;
        self.gpu_vmin = gpu.vmin;
        self.gpu = Some(gpu.table);
        Ok(())
    }

    /// Applies thermal limits, step defaults and scaling switches, and
    /// disables any rail left with an out-of-range nominal.
    fn init_rails(&mut self) {
        let config = self.config;
        for rail in self.rails.iter_mut() {
            rail.init_therm_limits();
            if rail.step == 0 {
                rail.step = rail.max_millivolts;
            }
            if rail.step_up == 0 {
                rail.step_up = rail.step;
            }

            let forced_off = match rail.id {
                RailId::Cpu => config.disable_cpu,
                RailId::Core => config.disable_core,
                RailId::Gpu => false,
            };
            if forced_off {
                info!("tegra_dvfs: {} scaling disabled by config", rail.reg_id);
                rail.disabled = true;
            }

            let bounds = rail.min_millivolts..=rail.max_millivolts;
            if !rail.disabled && !bounds.contains(&rail.nominal_millivolts) {
                warn!(
                    "tegra_dvfs: {} nominal {}mV outside [{}, {}]mV, scaling disabled",
                    rail.reg_id,
                    rail.nominal_millivolts,
                    rail.min_millivolts,
                    rail.max_millivolts
                );
                rail.disabled = true;
            }
        }
    }

    fn init_core_clocks(
        &mut self,
        sku: &SkuInfo,
        clocks: &mut dyn ClockProvider,
        emc: Option<&dyn EmcRatePredictor>,
    ) {
        let soc = self.soc;
        let (speedo_id, process_id) = (sku.soc_speedo_id, sku.soc_process_id);
        let ladder = soc.core_millivolts;
        let nominal = self.rail(RailId::Core).nominal_millivolts;
        let qspi = match self.config.qspi_mode {
            QspiMode::Sdr => soc.qspi_sdr,
            QspiMode::Ddr => soc.qspi_ddr,
        };

        let entries = soc.core_dvfs.iter().chain(core::iter::once(qspi));
        for entry in entries.filter(|e| match_dvfs_one(*e, speedo_id, process_id)) {
            let mut table = match build_core_table(entry, ladder) {
                Ok(table) => table,
                Err(err) => {
                    self.fault(Domain::Clock, None, err);
                    continue;
                }
            };

            // EMC scaling is board dependent; the EMC driver knows the rates.
            if entry.clk_name == "emc" {
                if let Some(emc) = emc.filter(|emc| emc.is_ready()) {
                    adjust_emc_table(&mut table, ladder, emc);
                }
            }

            if attach(clocks, &mut table, nominal, &mut self.faults) {
                self.core.push(table);
            }
        }

        self.init_sor1_alt_freqs(speedo_id, process_id, clocks);
    }

    fn init_sor1_alt_freqs(
        &mut self,
        speedo_id: i32,
        process_id: i32,
        clocks: &mut dyn ClockProvider,
    ) {
        let alt = self.soc.sor1_dp;
        let Some(clk) = clocks.get(alt.clk_name) else {
            debug!("init_sor1_dvfs: no clock found for {}", alt.clk_name);
            return;
        };
        if !match_dvfs_one(alt, speedo_id, process_id) {
            return;
        }
        let Some(table) = self.core.iter_mut().find(|t| t.clk_name == alt.clk_name) else {
            debug!("init_sor1_dvfs: {} has no dvfs table", alt.clk_name);
            return;
        };

        let mut alt_freqs = FreqLadder::new();
        for &freq in alt.freqs {
            if let Err(err) = push_freq(&mut alt_freqs, freq, Domain::Clock) {
                self.faults.push(DomainFault {
                    domain: Domain::Clock,
                    error: err,
                });
                return;
            }
        }
        table.alt_freqs = Some(alt_freqs);

        if clocks.add_alt_freqs(clk, table).is_err() {
            error!("tegra210_dvfs: failed to add alt freqs on {}", alt.clk_name);
            table.alt_freqs = None;
            self.faults.push(DomainFault {
                domain: Domain::Clock,
                error: DvfsError::ClockSetup(alt.clk_name),
            });
        }
    }

    fn fault(&mut self, domain: Domain, rail: Option<RailId>, error: DvfsError) {
        warn!("tegra210_dvfs: {domain} dvfs disabled: {error}");
        if let Some(id) = rail {
            self.rail_mut(id).disabled = true;
            self.rail_faults[id.index()].get_or_insert_with(|| error.clone());
        }
        self.faults.push(DomainFault { domain, error });
    }

    fn rail_mut(&mut self, id: RailId) -> &mut Rail {
        &mut self.rails[id.index()]
    }

    pub fn rail(&self, id: RailId) -> &Rail {
        &self.rails[id.index()]
    }

    pub fn rails(&self) -> &[Rail] {
        &self.rails
    }

    pub fn summaries(&self) -> impl Iterator<Item = RailSummary> + '_ {
        self.rails.iter().map(Rail::summary)
    }

    pub fn config(&self) -> &DvfsConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn cpu_table(&self) -> Option<&DvfsTable> {
        self.cpu.as_ref()
    }

    pub fn cpu_lp_table(&self) -> Option<&DvfsTable> {
        self.cpu_lp.as_ref()
    }

    pub fn gpu_table(&self) -> Option<&DvfsTable> {
        self.gpu.as_ref()
    }

    /// GPU trip points between thermal ranges, first trip shifted out.
    pub fn gpu_thermal_trips(&self) -> &[i32] {
        &self.gpu_thermal_trips
    }

    /// GPU voltage floor per thermal range.
    pub fn gpu_vmin(&self) -> &[i32] {
        &self.gpu_vmin
    }

    /// Core clock tables attached to an existing clock.
    pub fn core_tables(&self) -> &[DvfsTable] {
        &self.core
    }

    pub fn core_nominal_index(&self) -> usize {
        self.core_nominal_index
    }

    pub fn faults(&self) -> &[DomainFault] {
        &self.faults
    }

    /// Turns CPU rail scaling off or back on. A CPU rail disabled by an
    /// initialization fault stays off.
    pub fn set_cpu_disabled(&mut self, disabled: bool) -> DvfsResult {
        self.set_rail_disabled(RailId::Cpu, disabled)
    }

    /// Turns core rail scaling off or back on. A core rail disabled by an
    /// initialization fault stays off.
    pub fn set_core_disabled(&mut self, disabled: bool) -> DvfsResult {
        self.set_rail_disabled(RailId::Core, disabled)
    }

    fn set_rail_disabled(&mut self, id: RailId, disabled: bool) -> DvfsResult {
        if !disabled {
            if let Some(error) = &self.rail_faults[id.index()] {
                warn!("tegra_dvfs: {id} stays disabled: {error}");
                return Err(error.clone());
            }
        }

        match id {
            RailId::Cpu => self.config.disable_cpu = disabled,
            RailId::Core => self.config.disable_core = disabled,
            RailId::Gpu => {}
        }
        let rail = self.rail_mut(id);
        if rail.disabled != disabled {
            info!(
                "tegra_dvfs: {id} scaling {}",
                if disabled { "disabled" } else { "enabled" }
            );
        }
        rail.disabled = disabled;
        Ok(())
    }
}

fn max_freq(table: &[u64], speedo_id: i32) -> Option<u64> {
    usize::try_from(speedo_id)
        .ok()
        .and_then(|index| table.get(index))
        .copied()
}

/// Hands `table` to its clock with `nominal` as voltage ceiling. Returns
/// whether the clock exists.
fn attach(
    clocks: &mut dyn ClockProvider,
    table: &mut DvfsTable,
    nominal: i32,
    faults: &mut Vec<DomainFault>,
) -> bool {
    let Some(clk) = clocks.get(table.clk_name) else {
        info!("tegra210_dvfs: no clock found for {}", table.clk_name);
        return false;
    };

    table.max_millivolts = nominal;
    if clocks.setup_dvfs(clk, table).is_err() {
        error!("tegra210_dvfs: failed to enable dvfs on {}", table.clk_name);
        faults.push(DomainFault {
            domain: Domain::Clock,
            error: DvfsError::ClockSetup(table.clk_name),
        });
    }
    true
}

#[cfg(test)]
mod tests {
    use alloc::{
        string::{String, ToString},
        vec::Vec,
    };

    use super::*;
    use crate::{
        clock::{ClockHandle, DfllTable},
        cvb::{CvbCoefficients, CvbRow, CvbTable},
        selector::SpeedoKey,
        tegra210,
    };

    #[derive(Default)]
    struct FakeClocks {
        missing: &'static [&'static str],
        failing: &'static [&'static str],
        names: Vec<String>,
        attached: Vec<(String, i32, usize)>,
        alt: Vec<String>,
    }

    impl FakeClocks {
        fn attached(&self, name: &str) -> Option<i32> {
            self.attached
                .iter()
                .find(|(clk, ..)| clk == name)
                .map(|&(_, max_mv, _)| max_mv)
        }
    }

    impl ClockProvider for FakeClocks {
        fn get(&mut self, name: &str) -> Option<ClockHandle> {
            if self.missing.contains(&name) {
                return None;
            }
            let index = match self.names.iter().position(|clk| clk == name) {
                Some(index) => index,
                None => {
                    self.names.push(name.to_string());
                    self.names.len() - 1
                }
            };
            Some(ClockHandle::from(index))
        }

        fn setup_dvfs(&mut self, clk: ClockHandle, table: &DvfsTable) -> DvfsResult {
            let name = self.names[usize::from(clk)].clone();
            if self.failing.contains(&name.as_str()) {
                return Err(DvfsError::ClockSetup(table.clk_name));
            }
            self.attached.push((name, table.max_millivolts, table.num_freqs()));
            Ok(())
        }

        fn add_alt_freqs(&mut self, clk: ClockHandle, table: &DvfsTable) -> DvfsResult {
            assert!(table.alt_freqs.is_some());
            self.alt.push(self.names[usize::from(clk)].clone());
            Ok(())
        }
    }

    struct FixedEmc(u64);

    impl EmcRatePredictor for FixedEmc {
        fn is_ready(&self) -> bool {
            true
        }

        fn predict_rate(&self, millivolts: i32) -> Option<u64> {
            (millivolts >= 900).then_some(self.0)
        }
    }

    /// DFLL ladder matching the PLL ladder, 60mV below it.
    fn dfll() -> DfllTable {
        let fv = tegra210::CPU_FV_TABLE[0].fv_table;
        DfllTable {
            freqs_hz: fv.iter().map(|p| p.freq * 1000).collect(),
            microvolts: fv.iter().map(|p| (p.mv - 60) * 1000).collect(),
        }
    }

    fn sku() -> SkuInfo {
        SkuInfo {
            revision: 2,
            cpu_speedo_id: 2,
            cpu_process_id: 0,
            cpu_speedo_value: 2100,
            soc_speedo_id: 0,
            soc_process_id: 0,
            gpu_speedo_id: 2,
            gpu_process_id: 0,
            gpu_speedo_value: 2000,
            can_use_na_gpcpll: true,
        }
    }

    fn init_with(config: DvfsConfig, sku: &SkuInfo, clocks: &mut FakeClocks) -> DvfsEngine {
        let mut engine = DvfsEngine::tegra210(config);
        engine.init(sku, &dfll(), clocks, None).unwrap();
        engine
    }

    #[test]
    fn full_init() {
        let mut clocks = FakeClocks::default();
        let engine = init_with(DvfsConfig::default(), &sku(), &mut clocks);
        assert!(engine.is_initialized());
        assert!(engine.faults().is_empty());

        let cpu = engine.rail(RailId::Cpu);
        assert_eq!(cpu.nominal_millivolts, 1225);
        assert!(!cpu.disabled);
        let cpu_table = engine.cpu_table().unwrap();
        assert_eq!(cpu_table.num_freqs(), 18);
        assert_eq!(cpu_table.max_rate_hz(), Some(1_734_000_000));
        assert_eq!(clocks.attached("cclk_g"), Some(1225));

        let lp = engine.cpu_lp_table().unwrap();
        assert_eq!(lp.num_freqs(), 12);
        assert_eq!(lp.max_rate_hz(), Some(1_132_800_000));
        assert_eq!(lp.millivolts[0], 850);
        assert_eq!(clocks.attached("cclk_lp"), Some(1225));

        let gpu = engine.rail(RailId::Gpu);
        assert_eq!(gpu.nominal_millivolts, 1118);
        assert!(!gpu.thermal_scaling);
        let gpu_table = engine.gpu_table().unwrap();
        assert_eq!(gpu_table.num_freqs(), 11);
        assert!(!gpu_table.na_dvfs);
        assert!(engine.gpu_thermal_trips().is_empty());
        assert_eq!(engine.gpu_vmin(), &[818]);
        assert_eq!(clocks.attached("gpcclk"), Some(1118));

        let core = engine.rail(RailId::Core);
        assert_eq!(engine.core_nominal_index(), 14);
        assert_eq!(core.nominal_millivolts, 1125);
        assert_eq!(core.min_millivolts, 800);
        assert_eq!(core.therm_floors[0].mv, 950);
        assert_eq!(core.therm_caps[0].mv, 1125);
        assert_eq!(clocks.attached("emc"), Some(1125));
        assert_eq!(clocks.attached("qspi"), Some(1125));
        assert!(engine.core_tables().iter().all(|t| t.max_millivolts == 1125));
        assert!(engine.core_tables().iter().any(|t| t.clk_name == "pll_a"));

        let summaries: Vec<String> = engine.summaries().map(|s| s.to_string()).collect();
        assert_eq!(
            summaries,
            [
                "vdd-cpu: nominal 1225mV, offset 0uV, step 6250uV, scaling enabled",
                "vdd-core: nominal 1125mV, offset 0uV, step 12500uV, scaling enabled",
                "vdd-gpu: nominal 1118mV, offset 0uV, step 6250uV, scaling enabled",
            ]
        );
    }

    #[test]
    fn unknown_gpu_sku_halts() {
        let sku = SkuInfo {
            gpu_speedo_id: 99,
            gpu_process_id: 3,
            ..sku()
        };
        let mut engine = DvfsEngine::tegra210(DvfsConfig::default());
        let err = engine
            .init(&sku, &dfll(), &mut FakeClocks::default(), None)
            .unwrap_err();
        assert_eq!(
            err,
            DvfsError::NoMatch {
                domain: Domain::Gpu,
                speedo_id: 99,
                process_id: 3
            }
        );
        assert!(err.is_fatal());
        assert!(!engine.is_initialized());
    }

    #[test]
    fn cpu_speedo_beyond_table_halts() {
        let sku = SkuInfo {
            cpu_speedo_id: 11,
            ..sku()
        };
        let mut engine = DvfsEngine::tegra210(DvfsConfig::default());
        assert_eq!(
            engine.init(&sku, &dfll(), &mut FakeClocks::default(), None),
            Err(DvfsError::SpeedoOutOfRange {
                domain: Domain::Cpu,
                speedo_id: 11
            })
        );
    }

    #[test]
    fn missing_dfll_defers() {
        let mut engine = DvfsEngine::tegra210(DvfsConfig::default());
        let mut clocks = FakeClocks::default();
        assert_eq!(
            engine.init(&sku(), &None::<DfllTable>, &mut clocks, None),
            Err(DvfsError::Deferred)
        );
        assert!(clocks.attached.is_empty());

        engine.init(&sku(), &Some(dfll()), &mut clocks, None).unwrap();
        assert!(engine.cpu_table().is_some());
        assert_eq!(
            engine.init(&sku(), &dfll(), &mut clocks, None),
            Err(DvfsError::AlreadyInitialized)
        );
    }

    #[test]
    fn ladder_mismatch_disables_cpu_only() {
        let mut ladder = dfll();
        ladder.freqs_hz[2] += 1000;

        let mut engine = DvfsEngine::tegra210(DvfsConfig::default());
        let mut clocks = FakeClocks::default();
        engine.init(&sku(), &ladder, &mut clocks, None).unwrap();

        assert!(engine.cpu_table().is_none());
        assert!(engine.rail(RailId::Cpu).disabled);
        assert_eq!(engine.faults().len(), 1);
        assert_eq!(engine.faults()[0].domain, Domain::Cpu);
        assert!(matches!(
            engine.faults()[0].error,
            DvfsError::LadderMismatch { index: 2, .. }
        ));
        assert_eq!(clocks.attached("cclk_g"), None);

        // The LP cluster and the other rails are unaffected.
        assert!(engine.cpu_lp_table().is_some());
        assert_eq!(engine.rail(RailId::Cpu).nominal_millivolts, 1168);
        assert!(!engine.rail(RailId::Gpu).disabled);
        assert!(!engine.rail(RailId::Core).disabled);

        assert!(engine.set_cpu_disabled(false).is_err());
        assert!(engine.rail(RailId::Cpu).disabled);
    }

    #[test]
    fn unsupported_core_process_disables_core() {
        let sku = SkuInfo {
            soc_process_id: 3,
            ..sku()
        };
        let mut clocks = FakeClocks::default();
        let engine = init_with(DvfsConfig::default(), &sku, &mut clocks);

        let core = engine.rail(RailId::Core);
        assert!(core.disabled);
        assert_eq!(engine.core_nominal_index(), 0);
        assert_eq!(core.nominal_millivolts, 800);
        assert_eq!(
            engine.faults(),
            &[DomainFault {
                domain: Domain::Core,
                error: DvfsError::UnsupportedCoreProcess(3)
            }]
        );
        // Speedo 0 tables are process specific; wildcard entries still apply.
        assert_eq!(clocks.attached("emc"), None);
        assert_eq!(clocks.attached("pll_a"), Some(800));
        assert_eq!(clocks.attached("i2c1"), Some(800));
    }

    #[test]
    fn config_switches() {
        let config = DvfsConfig {
            gpcpll_mode: GpcPllMode::Na,
            qspi_mode: QspiMode::Ddr,
            disable_cpu: true,
            ..DvfsConfig::default()
        };
        let mut clocks = FakeClocks::default();
        let mut engine = init_with(config, &sku(), &mut clocks);

        assert!(engine.gpu_table().unwrap().na_dvfs);
        let qspi = engine
            .core_tables()
            .iter()
            .find(|t| t.clk_name == "qspi")
            .unwrap();
        assert!(qspi.freqs.iter().all(|&f| f == 81600));

        assert!(engine.rail(RailId::Cpu).disabled);
        assert!(engine.cpu_table().is_some());
        engine.set_cpu_disabled(false).unwrap();
        assert!(!engine.rail(RailId::Cpu).disabled);
        engine.set_core_disabled(true).unwrap();
        assert!(engine.rail(RailId::Core).disabled);
        assert!(engine.config().disable_core);
    }

    #[test]
    fn gpu_vmax_without_scaling() {
        let sku = SkuInfo {
            gpu_speedo_id: 0,
            ..sku()
        };
        let config = DvfsConfig {
            gpu_dvfs_enabled: false,
            ..DvfsConfig::default()
        };
        let engine = init_with(config, &sku, &mut FakeClocks::default());
        assert_eq!(engine.rail(RailId::Gpu).nominal_millivolts, 962);
        assert_eq!(engine.gpu_table().unwrap().num_freqs(), 8);
    }

    #[test]
    fn clock_problems_are_contained() {
        let mut clocks = FakeClocks {
            missing: &["gpcclk", "sor1"],
            failing: &["cclk_g"],
            ..Default::default()
        };
        let engine = init_with(DvfsConfig::default(), &sku(), &mut clocks);

        assert!(engine.gpu_table().is_some());
        assert_eq!(clocks.attached("gpcclk"), None);
        assert!(clocks.alt.is_empty());
        assert!(!engine.core_tables().iter().any(|t| t.clk_name == "sor1"));
        assert_eq!(
            engine.faults(),
            &[DomainFault {
                domain: Domain::Clock,
                error: DvfsError::ClockSetup("cclk_g")
            }]
        );
        assert!(!engine.rail(RailId::Cpu).disabled);
    }

    #[test]
    fn sor1_gets_dp_rates() {
        let mut clocks = FakeClocks::default();
        let engine = init_with(DvfsConfig::default(), &sku(), &mut clocks);
        assert_eq!(clocks.alt, ["sor1"]);
        let sor1 = engine
            .core_tables()
            .iter()
            .find(|t| t.clk_name == "sor1")
            .unwrap();
        assert_eq!(sor1.freqs[0], 148500);
        assert_eq!(sor1.alt_freqs.as_ref().unwrap()[0], 162000);
    }

    #[test]
    fn emc_rates_follow_prediction() {
        let mut engine = DvfsEngine::tegra210(DvfsConfig::default());
        let mut clocks = FakeClocks::default();
        engine
            .init(&sku(), &dfll(), &mut clocks, Some(&FixedEmc(1_600_000)))
            .unwrap();

        let emc = engine
            .core_tables()
            .iter()
            .find(|t| t.clk_name == "emc")
            .unwrap();
        // Prediction is unavailable below 900mV, which ends the adjustment.
        assert_eq!(emc.freqs[0], 1);
        assert_eq!(emc.freqs[14], 1_200_000);

        let mut engine = DvfsEngine::tegra210(DvfsConfig::default());
        engine
            .init(&sku(), &dfll(), &mut FakeClocks::default(), Some(&Always(1_600_000)))
            .unwrap();
        let emc = engine
            .core_tables()
            .iter()
            .find(|t| t.clk_name == "emc")
            .unwrap();
        assert!(emc.freqs.iter().all(|&f| f == 1_600_000));
    }

    struct Always(u64);

    impl EmcRatePredictor for Always {
        fn is_ready(&self) -> bool {
            true
        }

        fn predict_rate(&self, _millivolts: i32) -> Option<u64> {
            Some(self.0)
        }
    }

    static STEPS: [CvbRow; 4] = [
        CvbRow::new(100, CvbCoefficients::speedo(850_000, 0, 0)),
        CvbRow::new(200, CvbCoefficients::speedo(900_000, 0, 0)),
        CvbRow::new(300, CvbCoefficients::speedo(950_000, 0, 0)),
        CvbRow::new(400, CvbCoefficients::speedo(1_000_000, 0, 0)),
    ];

    static STEPS_TABLE: CvbTable = CvbTable {
        freqs_mult: 1000,
        speedo_scale: 100,
        thermal_scale: 10,
        voltage_scale: 1000,
        rows: &STEPS,
    };

    static TWO_RANGE_GPU: [GpuCvbEntry; 1] = [GpuCvbEntry {
        key: SpeedoKey::ANY,
        pll_min_millivolts: 800,
        max_millivolts: 1150,
        max_millivolts_no_dvfs: None,
        max_freq: 1_000_000,
        na_table: None,
        fixed_table: &STEPS_TABLE,
        vts_trips: &[-10, 50],
        therm_floors: &[925, 850],
    }];

    static TWO_RANGE_SOC: SocTables = SocTables {
        gpu_cvb: &TWO_RANGE_GPU,
        ..TEGRA210
    };

    #[test]
    fn gpu_thermal_caps_are_skipped() {
        let mut engine = DvfsEngine::new(&TWO_RANGE_SOC, DvfsConfig::default());
        let mut clocks = FakeClocks::default();
        engine.init(&sku(), &dfll(), &mut clocks, None).unwrap();

        assert_eq!(
            engine.faults(),
            &[DomainFault {
                domain: Domain::Gpu,
                error: DvfsError::ThermalCapsUnsupported(2)
            }]
        );
        let gpu = engine.rail(RailId::Gpu);
        assert!(gpu.thermal_scaling);
        assert!(!gpu.disabled);
        assert_eq!(gpu.nominal_millivolts, 1000);
        assert_eq!(engine.gpu_table().unwrap().num_freqs(), 4);
        assert_eq!(engine.gpu_thermal_trips(), &[50]);
        assert_eq!(engine.gpu_vmin(), &[925, 850]);
        assert_eq!(clocks.attached("gpcclk"), Some(1000));
    }

    static WIDE_MILLIVOLTS: [i32; 41] = {
        let mut mv = [0; 41];
        let mut i = 0;
        while i < mv.len() {
            mv[i] = 800 + 5 * i as i32;
            i += 1;
        }
        mv
    };

    static WIDE_CORE: [CoreDvfsEntry; 1] = [CoreDvfsEntry {
        clk_name: "vic03",
        key: SpeedoKey::ANY,
        auto_dvfs: true,
        freqs_mult: 1000,
        freqs: &[100_000; 41],
    }];

    static WIDE_SOC: SocTables = SocTables {
        core_millivolts: &WIDE_MILLIVOLTS,
        core_dvfs: &WIDE_CORE,
        ..TEGRA210
    };

    #[test]
    fn core_clock_table_error_keeps_core_rail() {
        let mut engine = DvfsEngine::new(&WIDE_SOC, DvfsConfig::default());
        let mut clocks = FakeClocks::default();
        engine.init(&sku(), &dfll(), &mut clocks, None).unwrap();

        assert_eq!(
            engine.faults(),
            &[DomainFault {
                domain: Domain::Clock,
                error: DvfsError::TableOverflow(Domain::Core)
            }]
        );
        assert_eq!(engine.core_nominal_index(), 40);
        assert!(!engine.rail(RailId::Core).disabled);
        assert_eq!(clocks.attached("vic03"), None);
        assert!(engine.core_tables().iter().any(|t| t.clk_name == "qspi"));

        engine.set_core_disabled(true).unwrap();
        engine.set_core_disabled(false).unwrap();
        assert!(!engine.rail(RailId::Core).disabled);
    }
}
