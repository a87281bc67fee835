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

//! Fuse-derived chip identification.

/// Speedo/process identification of one chip, as read from fuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkuInfo {
    /// Speedo fuse revision.
    pub revision: i32,
    pub cpu_speedo_id: i32,
    pub cpu_process_id: i32,
    pub cpu_speedo_value: i32,
    pub soc_speedo_id: i32,
    pub soc_process_id: i32,
    pub gpu_speedo_id: i32,
    pub gpu_process_id: i32,
    /// Raw GPU silicon quality scalar fed into the CVB polynomials.
    pub gpu_speedo_value: i32,
    /// GPCPLL noise-aware mode is fused as usable.
    pub can_use_na_gpcpll: bool,
}
