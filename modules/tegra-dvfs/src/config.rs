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

//! Engine configuration.
//!
//! Board and build options that select between characterization variants,
//! resolved once before table selection.

#[cfg(feature = "toml")]
use alloc::string::ToString;

use derive_more::Display;

#[cfg(feature = "toml")]
use crate::error::{DvfsError, DvfsResult};

/// GPCPLL operating mode, which selects the GPU CVB table variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GpcPllMode {
    /// Noise-aware mode, frequency-dependent CVB tables.
    #[display("na")]
    Na,
    #[default]
    #[display("fixed")]
    Fixed,
}

/// QSPI bus mode, which selects the QSPI clock table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum QspiMode {
    #[default]
    #[display("sdr")]
    Sdr,
    #[display("ddr")]
    Ddr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DvfsConfig {
    pub gpcpll_mode: GpcPllMode,
    /// GPU voltage scaling is supported by the board.
    pub gpu_dvfs_enabled: bool,
    pub qspi_mode: QspiMode,
    pub disable_cpu: bool,
    pub disable_core: bool,
}

impl Default for DvfsConfig {
    fn default() -> Self {
        Self {
            gpcpll_mode: GpcPllMode::Fixed,
            gpu_dvfs_enabled: true,
            qspi_mode: QspiMode::Sdr,
            disable_cpu: false,
            disable_core: false,
        }
    }
}

impl DvfsConfig {
    /// Parses a TOML config. Missing keys keep their defaults.
    #[cfg(feature = "toml")]
    pub fn from_toml(raw: &str) -> DvfsResult<Self> {
        toml::from_str(raw).map_err(|e| DvfsError::Config(e.to_string()))
    }
}
