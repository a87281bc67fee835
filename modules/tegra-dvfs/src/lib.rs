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

//! DVFS table construction and rail initialization for Tegra210.
//!
//! The engine turns silicon characterization data (per-SKU frequency/voltage
//! ladders and CVB polynomial tables) plus fuse-derived speedo/process ids into
//! per-clock DVFS tables and per-rail voltage bounds. It runs once at boot:
//!
//! 1. [`selector`] picks the characterization entry for each domain.
//! 2. [`cpu`] and [`gpu`] build the frequency/voltage tables.
//! 3. [`engine::DvfsEngine`] aggregates the results into the [`rail::Rail`]s
//!    and attaches the tables to clocks through a [`clock::ClockProvider`].

#![no_std]

extern crate alloc;

#[macro_use]
extern crate log;

pub mod align;
pub mod clock;
pub mod config;
pub mod core_dvfs;
pub mod cpu;
pub mod cvb;
pub mod engine;
mod error;
pub mod fuse;
pub mod gpu;
pub mod rail;
pub mod selector;
pub mod table;
pub mod tegra210;

pub use clock::{ClockHandle, ClockProvider, CpuDfllSource, DfllLadder, DfllTable, EmcRatePredictor};
pub use config::{DvfsConfig, GpcPllMode, QspiMode};
pub use engine::{DomainFault, DvfsEngine, SocTables};
pub use error::{Domain, DvfsError, DvfsResult};
pub use fuse::SkuInfo;
pub use rail::{Rail, RailId};
pub use table::{DvfsTable, MAX_DVFS_FREQS, MAX_THERMAL_LIMITS, MAX_THERMAL_RANGES};

pub(crate) const KHZ: u32 = 1000;
