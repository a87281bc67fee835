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

use crate::{
    cpu::CpuFvEntry,
    selector::{ANY, SpeedoKey},
    table::FvPoint,
};

/// Fast CPU maximum frequency in kHz, indexed by CPU speedo id.
pub static CPU_MAX_FREQ: [u64; 11] = [
    1912500, 1912500, 2218500, 1785000, 1632000, 1912500,
    2014500, 1734000, 1683000, 1555500, 1504500,
];

static CPU_FV: [FvPoint; 22] = [
    FvPoint::new(51000, 950),
    FvPoint::new(102000, 950),
    FvPoint::new(204000, 950),
    FvPoint::new(306000, 950),
    FvPoint::new(408000, 950),
    FvPoint::new(510000, 950),
    FvPoint::new(612000, 950),
    FvPoint::new(714000, 950),
    FvPoint::new(816000, 950),
    FvPoint::new(918000, 950),
    FvPoint::new(1020000, 950),
    FvPoint::new(1122000, 950),
    FvPoint::new(1224000, 950),
    FvPoint::new(1326000, 993),
    FvPoint::new(1428000, 1043),
    FvPoint::new(1530000, 1093),
    FvPoint::new(1632000, 1150),
    FvPoint::new(1734000, 1231),
    FvPoint::new(1836000, 1362),
    FvPoint::new(1912500, 1362),
    FvPoint::new(2014500, 1362),
    FvPoint::new(2218500, 1362),
];

macro_rules! cpu_entry {
    ($speedo:expr, $process:expr, $min_mv:expr, $max_mv:expr) => {
        CpuFvEntry {
            key: SpeedoKey::new($speedo, $process),
            min_mv: $min_mv,
            max_mv: $max_mv,
            fv_table: &CPU_FV,
        }
    };
}

pub static CPU_FV_TABLE: [CpuFvEntry; 21] = [
    cpu_entry!(10, 0, 840, 1120),
    cpu_entry!(10, 1, 840, 1120),
    cpu_entry!(9, 0, 900, 1162),
    cpu_entry!(9, 1, 900, 1162),
    cpu_entry!(8, 0, 900, 1195),
    cpu_entry!(8, 1, 900, 1195),
    cpu_entry!(7, 0, 841, 1227),
    cpu_entry!(7, 1, 841, 1227),
    cpu_entry!(6, 0, 870, 1150),
    cpu_entry!(6, 1, 870, 1150),
    cpu_entry!(5, 0, 818, 1227),
    cpu_entry!(5, 1, 818, 1227),
    cpu_entry!(4, ANY, 918, 1113),
    cpu_entry!(3, 0, 825, 1227),
    cpu_entry!(3, 1, 825, 1227),
    cpu_entry!(2, 0, 870, 1227),
    cpu_entry!(2, 1, 870, 1227),
    cpu_entry!(1, 0, 837, 1227),
    cpu_entry!(1, 1, 837, 1227),
    cpu_entry!(0, 0, 850, 1170),
    cpu_entry!(0, 1, 850, 1170),
];

/// Slow CPU maximum frequency in kHz, indexed by CPU speedo id.
pub static CPU_LP_MAX_FREQ: [u64; 6] = [
    1132800, 1132800, 1132800, 1132800, 940800, 1132800,
];

static CPU_LP_FV: [FvPoint; 13] = [
    FvPoint::new(51000, 850),
    FvPoint::new(102000, 850),
    FvPoint::new(204000, 850),
    FvPoint::new(307200, 850),
    FvPoint::new(403200, 850),
    FvPoint::new(518400, 850),
    FvPoint::new(614400, 868),
    FvPoint::new(710400, 912),
    FvPoint::new(825600, 962),
    FvPoint::new(921600, 1006),
    FvPoint::new(1036800, 1062),
    FvPoint::new(1132800, 1118),
    FvPoint::new(1228800, 1168),
];

macro_rules! cpu_lp_entry {
    ($speedo:expr, $min_mv:expr, $max_mv:expr) => {
        CpuFvEntry {
            key: SpeedoKey::new($speedo, ANY),
            min_mv: $min_mv,
            max_mv: $max_mv,
            fv_table: &CPU_LP_FV,
        }
    };
}

pub static CPU_LP_FV_TABLE: [CpuFvEntry; 4] = [
    cpu_lp_entry!(5, 818, 1227),
    cpu_lp_entry!(2, 804, 1170),
    cpu_lp_entry!(1, 837, 1227),
    cpu_lp_entry!(ANY, 850, 1170),
];
