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

//! Curve-Voltage-Bias (CVB) polynomial evaluation.
//!
//! A CVB row maps the chip's speedo value `s` and a temperature `t` to the
//! voltage required at one frequency:
//!
//! ```text
//! v(s, t) = c0 + c1*s + c2*s^2 + (c3*s + c4 + c5*t) * t
//! ```
//!
//! Coefficients are fixed point; `speedo_scale`, `thermal_scale` and
//! `voltage_scale` give the divisors, and every intermediate product is
//! rounded to the closest integer the same way the characterization tools do.

/// Polynomial coefficients of one CVB row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CvbCoefficients {
    pub c0: i32,
    pub c1: i32,
    pub c2: i32,
    pub c3: i32,
    pub c4: i32,
    pub c5: i32,
}

impl CvbCoefficients {
    pub const fn new(c0: i32, c1: i32, c2: i32, c3: i32, c4: i32, c5: i32) -> Self {
        Self {
            c0,
            c1,
            c2,
            c3,
            c4,
            c5,
        }
    }

    /// Speedo-only coefficients, no thermal dependency.
    pub const fn speedo(c0: i32, c1: i32, c2: i32) -> Self {
        Self::new(c0, c1, c2, 0, 0, 0)
    }
}

/// One frequency of a CVB table. A zero frequency terminates the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CvbRow {
    /// Frequency in units of [`CvbTable::freqs_mult`] Hz.
    pub freq: u64,
    pub pll: CvbCoefficients,
}

impl CvbRow {
    pub const fn new(freq: u64, pll: CvbCoefficients) -> Self {
        Self { freq, pll }
    }
}

/// CVB table indexed by frequency, ascending.
#[derive(Clone, Copy, Debug)]
pub struct CvbTable {
    pub freqs_mult: u32,
    pub speedo_scale: i32,
    pub thermal_scale: i32,
    pub voltage_scale: i32,
    pub rows: &'static [CvbRow],
}

impl CvbTable {
    /// Rows up to the first zero-frequency terminator.
    pub fn rows(&self) -> impl Iterator<Item = &CvbRow> {
        self.rows.iter().take_while(|row| row.freq != 0)
    }
}

/// Signed integer division rounding half away from zero.
pub(crate) fn div_round_closest(x: i128, d: i128) -> i128 {
    if (x > 0) == (d > 0) {
        (x + d / 2) / d
    } else {
        (x - d / 2) / d
    }
}

fn saturate(mv: i128) -> i32 {
    mv.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
}

/// Speedo-dependent part of the polynomial, in `mV * voltage_scale`.
pub fn cvb_voltage(speedo: i32, speedo_scale: i32, cvb: &CvbCoefficients) -> i32 {
    let s = i128::from(speedo);
    let s_scale = i128::from(speedo_scale.max(1));

    let mv = div_round_closest(i128::from(cvb.c2) * s, s_scale);
    let mv = div_round_closest((mv + i128::from(cvb.c1)) * s, s_scale) + i128::from(cvb.c0);
    saturate(mv)
}

/// Temperature correction at `t` degrees, in `mV * voltage_scale`.
pub fn cvb_t_voltage(
    speedo: i32,
    speedo_scale: i32,
    t: i32,
    thermal_scale: i32,
    cvb: &CvbCoefficients,
) -> i32 {
    let s = i128::from(speedo);
    let t = i128::from(t);
    let s_scale = i128::from(speedo_scale.max(1));
    let t_scale = i128::from(thermal_scale.max(1));

    let mv = div_round_closest(i128::from(cvb.c3) * s, s_scale)
        + i128::from(cvb.c4)
        + div_round_closest(i128::from(cvb.c5) * t, t_scale);
    saturate(div_round_closest(mv * t, t_scale))
}
