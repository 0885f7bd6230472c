// Copyright 2026 The Simplex Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License.You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

//! A partial bijection between two sets of `usize` indices.
//!
//! Used to track which column of `A` (if any) is the "principal column" of each
//! qubit. `BTreeMap` is used rather than `HashMap` so that iteration (in the
//! `Display` impl) is in ascending key order, matching the ordered `std::map`
//! this type is modeled on.

use std::collections::BTreeMap;
use std::fmt;

/// A partial, mutable bijection between `usize` keys `i` (forward) and `usize`
/// keys `j` (inverse).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bimap {
    fwd: BTreeMap<usize, usize>,
    inv: BTreeMap<usize, usize>,
}

impl Bimap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `i -> j`, if `i` currently has a forward match.
    #[must_use]
    pub fn fwd_at(&self, i: usize) -> Option<usize> {
        self.fwd.get(&i).copied()
    }

    /// `j -> i`, if `j` currently has an inverse match.
    #[must_use]
    pub fn inv_at(&self, j: usize) -> Option<usize> {
        self.inv.get(&j).copied()
    }

    /// Removes `i`'s forward match and the corresponding inverse entry, if any.
    pub fn fwd_erase(&mut self, i: usize) {
        if let Some(j) = self.fwd.remove(&i) {
            self.inv.remove(&j);
        }
    }

    /// Inserts the pair `i <-> j`, evicting whatever `i` or `j` were matched to
    /// beforehand. A no-op if `i <-> j` already holds.
    pub fn make_match(&mut self, i: usize, j: usize) {
        let prev_j = self.fwd_at(i);
        let prev_i = self.inv_at(j);
        if prev_j == Some(j) {
            return;
        }
        self.insert_pair(i, j);
        if let Some(stale_i) = prev_i {
            self.fwd.remove(&stale_i);
        }
        if let Some(stale_j) = prev_j {
            self.inv.remove(&stale_j);
        }
    }

    /// Swaps the forward images of `i1` and `i2`, handling either side being
    /// absent.
    pub fn swap_fwd(&mut self, i1: usize, i2: usize) {
        let j1 = self.fwd_at(i1);
        let j2 = self.fwd_at(i2);
        if let Some(j) = j1 {
            self.fwd.remove(&i1);
            self.inv.remove(&j);
        }
        if let Some(j) = j2 {
            self.fwd.remove(&i2);
            self.inv.remove(&j);
        }
        if let Some(j) = j1 {
            self.insert_pair(i2, j);
        }
        if let Some(j) = j2 {
            self.insert_pair(i1, j);
        }
    }

    fn insert_pair(&mut self, i: usize, j: usize) {
        self.fwd.insert(i, j);
        self.inv.insert(j, i);
    }
}

impl fmt::Display for Bimap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (&i, &j) in &self.fwd {
            writeln!(f, "{i} <--> {j}")?;
        }
        Ok(())
    }
}
