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

//! Characterization entry selection by fused speedo/process id.

/// Matches any id.
pub const ANY: i32 = -1;

/// `(speedo_id, process_id)` key of a characterization entry. `-1` in either
/// position is a wildcard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SpeedoKey {
    pub speedo_id: i32,
    pub process_id: i32,
}

impl SpeedoKey {
    pub const ANY: Self = Self::new(ANY, ANY);

    pub const fn new(speedo_id: i32, process_id: i32) -> Self {
        Self {
            speedo_id,
            process_id,
        }
    }

    pub fn matches(&self, speedo_id: i32, process_id: i32) -> bool {
        (self.speedo_id == ANY || self.speedo_id == speedo_id)
            && (self.process_id == ANY || self.process_id == process_id)
    }
}

/// Anything carrying a [`SpeedoKey`].
pub trait Characterized {
    fn key(&self) -> SpeedoKey;

    fn name(&self) -> &str;
}

/// Checks one entry, logging rejections the way boot logs expect them.
pub fn match_dvfs_one<T: Characterized + ?Sized>(
    entry: &T,
    speedo_id: i32,
    process_id: i32,
) -> bool {
    let key = entry.key();
    if !key.matches(speedo_id, process_id) {
        debug!(
            "tegra210_dvfs: rejected {} speedo {}, process {}",
            entry.name(),
            key.speedo_id,
            key.process_id
        );
        return false;
    }
    true
}

/// Returns the first entry matching the fused ids. Table order encodes
/// priority, so more specific entries must come before wildcards.
pub fn select<T: Characterized>(entries: &[T], speedo_id: i32, process_id: i32) -> Option<&T> {
    entries
        .iter()
        .find(|entry| match_dvfs_one(*entry, speedo_id, process_id))
}
