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
    KHZ,
    cvb::{CvbCoefficients, CvbRow, CvbTable},
    gpu::GpuCvbEntry,
    selector::{ANY, SpeedoKey},
};

macro_rules! gpcpll_table {
    ($rows:expr) => {
        CvbTable {
            freqs_mult: KHZ,
            speedo_scale: 100,
            thermal_scale: 10,
            voltage_scale: 1000,
            rows: &$rows,
        }
    };
}

static NA_FREQ_ROWS: [CvbRow; 13] = [
    CvbRow::new(  76800, CvbCoefficients::new(  814294,    8144,  -940,   808,  -21583,  226)),
    CvbRow::new( 153600, CvbCoefficients::new(  856185,    8144,  -940,   808,  -21583,  226)),
    CvbRow::new( 230400, CvbCoefficients::new(  898077,    8144,  -940,   808,  -21583,  226)),
    CvbRow::new( 307200, CvbCoefficients::new(  939968,    8144,  -940,   808,  -21583,  226)),
    CvbRow::new( 384000, CvbCoefficients::new(  981860,    8144,  -940,   808,  -21583,  226)),
    CvbRow::new( 460800, CvbCoefficients::new( 1023751,    8144,  -940,   808,  -21583,  226)),
    CvbRow::new( 537600, CvbCoefficients::new( 1065642,    8144,  -940,   808,  -21583,  226)),
    CvbRow::new( 614400, CvbCoefficients::new( 1107534,    8144,  -940,   808,  -21583,  226)),
    CvbRow::new( 691200, CvbCoefficients::new( 1149425,    8144,  -940,   808,  -21583,  226)),
    CvbRow::new( 768000, CvbCoefficients::new( 1191317,    8144,  -940,   808,  -21583,  226)),
    CvbRow::new( 844800, CvbCoefficients::new( 1233208,    8144,  -940,   808,  -21583,  226)),
    CvbRow::new( 921600, CvbCoefficients::new( 1275100,    8144,  -940,   808,  -21583,  226)),
    CvbRow::new( 998400, CvbCoefficients::new( 1316991,    8144,  -940,   808,  -21583,  226)),
];

static NA_FREQ_ROWS_XA: [CvbRow; 11] = [
    CvbRow::new(  76800, CvbCoefficients::new( 1526811,  -59106,   963,   238,  -11292,  185)),
    CvbRow::new( 153600, CvbCoefficients::new( 1543573,  -57798,   910,   179,   -9918,  191)),
    CvbRow::new( 230400, CvbCoefficients::new( 1567838,  -56991,   869,    60,   -8545,  203)),
    CvbRow::new( 307200, CvbCoefficients::new( 1600241,  -56742,   841,     0,   -7019,  209)),
    CvbRow::new( 384000, CvbCoefficients::new( 1635184,  -56501,   813,     0,   -5493,  221)),
    CvbRow::new( 460800, CvbCoefficients::new( 1672308,  -56300,   787,  -119,   -3662,  226)),
    CvbRow::new( 537600, CvbCoefficients::new( 1712114,  -56093,   759,  -179,   -1526,  238)),
    CvbRow::new( 614400, CvbCoefficients::new( 1756009,  -56048,   737,  -298,     610,  244)),
    CvbRow::new( 691200, CvbCoefficients::new( 1790251,  -54860,   687,  -358,    3204,  238)),
    CvbRow::new( 768000, CvbCoefficients::new( 1783830,  -49449,   532,  -477,    6714,  197)),
    CvbRow::new( 844800, CvbCoefficients::new( 1819706,  -45928,   379,  -358,    7019,   89)),
];

static FIXED_FREQ_ROWS: [CvbRow; 12] = [
    CvbRow::new(  76800, CvbCoefficients::speedo( 1786666,  -85625,  1632)),
    CvbRow::new( 153600, CvbCoefficients::speedo( 1846729,  -87525,  1632)),
    CvbRow::new( 230400, CvbCoefficients::speedo( 1910480,  -89425,  1632)),
    CvbRow::new( 307200, CvbCoefficients::speedo( 1977920,  -91325,  1632)),
    CvbRow::new( 384000, CvbCoefficients::speedo( 2049049,  -93215,  1632)),
    CvbRow::new( 460800, CvbCoefficients::speedo( 2122872,  -95095,  1632)),
    CvbRow::new( 537600, CvbCoefficients::speedo( 2201331,  -96985,  1632)),
    CvbRow::new( 614400, CvbCoefficients::speedo( 2283479,  -98885,  1632)),
    CvbRow::new( 691200, CvbCoefficients::speedo( 2369315, -100785,  1632)),
    CvbRow::new( 768000, CvbCoefficients::speedo( 2458841, -102685,  1632)),
    CvbRow::new( 844800, CvbCoefficients::speedo( 2550821, -104555,  1632)),
    CvbRow::new( 921600, CvbCoefficients::speedo( 2647676, -106455,  1632)),
];

/// Noise-aware GPCPLL mode.
static NA_FREQ_CVB: CvbTable = gpcpll_table!(NA_FREQ_ROWS);
static NA_FREQ_CVB_XA: CvbTable = gpcpll_table!(NA_FREQ_ROWS_XA);
/// Fixed-frequency GPCPLL mode.
static FIXED_FREQ_CVB: CvbTable = gpcpll_table!(FIXED_FREQ_ROWS);

macro_rules! gpu_entry {
    ($speedo:expr, $pll_min:expr, $max_mv:expr, $max_freq:expr, $na:expr) => {
        GpuCvbEntry {
            key: SpeedoKey::new($speedo, ANY),
            pll_min_millivolts: $pll_min,
            max_millivolts: $max_mv,
            max_millivolts_no_dvfs: None,
            max_freq: $max_freq,
            na_table: $na,
            fixed_table: &FIXED_FREQ_CVB,
            vts_trips: &[],
            therm_floors: &[],
        }
    };
}

pub static GPU_CVB_TABLE: [GpuCvbEntry; 5] = [
    gpu_entry!(4, 918, 1113, 844800, Some(&NA_FREQ_CVB_XA)),
    gpu_entry!(3, 810, 1150, 921600, Some(&NA_FREQ_CVB)),
    gpu_entry!(2, 818, 1150, 998400, Some(&NA_FREQ_CVB)),
    gpu_entry!(1, 840, 1150, 998400, Some(&NA_FREQ_CVB)),
    GpuCvbEntry {
        max_millivolts_no_dvfs: Some(1000),
        ..gpu_entry!(0, 950, 1150, 921600, None)
    },
];
