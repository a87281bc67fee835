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

//! Voltage grid alignment.
//!
//! Regulators can only produce voltages on a grid `offset_uv + n * step_uv`.
//! Everything the engine hands to a rail is snapped onto that grid first:
//! lower bounds are rounded up, upper bounds are rounded down.

/// Voltage grid of a rail, in microvolts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RailAlignment {
    pub offset_uv: i32,
    pub step_uv: i32,
}

impl RailAlignment {
    pub const fn new(step_uv: i32) -> Self {
        Self {
            offset_uv: 0,
            step_uv,
        }
    }

    pub const fn with_offset(step_uv: i32, offset_uv: i32) -> Self {
        Self { offset_uv, step_uv }
    }
}

/// Snaps `mv` onto the rail grid and returns the result in microvolts.
///
/// Values below the grid offset are pulled up to the offset. A zero step
/// disables alignment.
pub fn round_voltage_uv(mv: i32, align: &RailAlignment, up: bool) -> i64 {
    let uv = i64::from(mv) * 1000;
    if align.step_uv <= 0 {
        return uv;
    }

    let step = i64::from(align.step_uv);
    let offset = i64::from(align.offset_uv);
    let above = uv.max(offset) - offset;
    let steps = (above + if up { step - 1 } else { 0 }) / step;
    steps * step + offset
}

/// Snaps `mv` onto the rail grid, rounding up for floors and down for caps.
pub fn round_voltage(mv: i32, align: &RailAlignment, up: bool) -> i32 {
    (round_voltage_uv(mv, align, up) / 1000) as i32
}

/// Converts a scaled CVB result (`mV * v_scale`) into millivolts, rounding up
/// onto the rail grid.
pub fn round_cvb_voltage(mv: i32, v_scale: i32, align: &RailAlignment) -> i32 {
    let step_uv = i64::from(if align.step_uv > 0 { align.step_uv } else { 1000 });
    let v_scale = i64::from(v_scale.max(1));
    let step = step_uv * v_scale;
    let offset = i64::from(align.offset_uv) * v_scale;

    let uv = (i64::from(mv) * 1000).max(offset) - offset;
    let uv = (uv + step - 1) / step * step_uv + i64::from(align.offset_uv);
    (uv / 1000) as i32
}
