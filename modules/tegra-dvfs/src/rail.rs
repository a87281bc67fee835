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

//! Voltage rails.

use core::fmt;

use derive_more::Display;

use crate::{
    align::{RailAlignment, round_voltage},
    table::MAX_THERMAL_LIMITS,
};

/// Rails scaled by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum RailId {
    #[display("vdd-cpu")]
    Cpu,
    #[display("vdd-core")]
    Core,
    #[display("vdd-gpu")]
    Gpu,
}

impl RailId {
    pub const ALL: [RailId; 3] = [RailId::Cpu, RailId::Core, RailId::Gpu];

    pub(crate) const fn index(self) -> usize {
        match self {
            RailId::Cpu => 0,
            RailId::Core => 1,
            RailId::Gpu => 2,
        }
    }
}

/// Voltage limit that applies below (floors) or above (caps) a temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThermLimit {
    pub temperature: i32,
    pub mv: i32,
}

impl ThermLimit {
    pub const fn new(temperature: i32, mv: i32) -> Self {
        Self { temperature, mv }
    }
}

pub type ThermLimits = heapless::Vec<ThermLimit, MAX_THERMAL_LIMITS>;

/// A voltage regulator domain.
#[derive(Clone, Debug)]
pub struct Rail {
    pub id: RailId,
    pub reg_id: &'static str,
    pub min_millivolts: i32,
    pub max_millivolts: i32,
    pub nominal_millivolts: i32,
    /// Largest single voltage change.
    pub step: i32,
    pub step_up: i32,
    pub alignment: RailAlignment,
    pub therm_floors: ThermLimits,
    pub therm_caps: ThermLimits,
    pub disabled: bool,
    pub dfll_mode: bool,
    pub jmp_to_zero: bool,
    pub in_band_pm: bool,
    /// Thermal DVFS cooling device installed (more than one thermal range).
    pub thermal_scaling: bool,
}

impl Rail {
    pub fn new(id: RailId, min_millivolts: i32, max_millivolts: i32, alignment: RailAlignment) -> Self {
        Self {
            id,
            reg_id: "",
            min_millivolts,
            max_millivolts,
            nominal_millivolts: 0,
            step: 0,
            step_up: 0,
            alignment,
            therm_floors: ThermLimits::new(),
            therm_caps: ThermLimits::new(),
            disabled: false,
            dfll_mode: false,
            jmp_to_zero: false,
            in_band_pm: false,
            thermal_scaling: false,
        }
    }

    pub fn round_up(&self, mv: i32) -> i32 {
        round_voltage(mv, &self.alignment, true)
    }

    pub fn round_down(&self, mv: i32) -> i32 {
        round_voltage(mv, &self.alignment, false)
    }

    /// Raises a characterization minimum to the rail minimum.
    pub(crate) fn clamp_min(&self, mv: i32, what: &str) -> i32 {
        if mv < self.min_millivolts {
            debug!(
                "tegra210_dvfs: {what} min {mv}mV below rail min {}mV",
                self.min_millivolts
            );
            return self.min_millivolts;
        }
        mv
    }

    /// Snaps thermal floors up and caps down onto the rail grid, both within
    /// the rail limits.
    pub fn init_therm_limits(&mut self) {
        let (min, max) = (self.min_millivolts, self.max_millivolts);
        let align = self.alignment;

        for floor in self.therm_floors.iter_mut() {
            floor.mv = round_voltage(floor.mv, &align, true).clamp(min, max);
        }
        for cap in self.therm_caps.iter_mut() {
            cap.mv = round_voltage(cap.mv, &align, false).clamp(min, max);
        }
    }

    pub fn summary(&self) -> RailSummary {
        RailSummary {
            reg_id: self.reg_id,
            nominal_millivolts: self.nominal_millivolts,
            offset_uv: self.alignment.offset_uv,
            step_uv: self.alignment.step_uv,
            disabled: self.disabled,
        }
    }
}

/// One-line boot report of a rail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RailSummary {
    pub reg_id: &'static str,
    pub nominal_millivolts: i32,
    pub offset_uv: i32,
    pub step_uv: i32,
    pub disabled: bool,
}

impl fmt::Display for RailSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: nominal {}mV, offset {}uV, step {}uV, scaling {}",
            self.reg_id,
            self.nominal_millivolts,
            self.offset_uv,
            self.step_uv,
            if self.disabled { "disabled" } else { "enabled" }
        )
    }
}
