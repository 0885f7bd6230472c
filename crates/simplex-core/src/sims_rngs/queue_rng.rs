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

//! A deterministic random bit source that replays a fixed sequence of bits.
//!
//! Intended for tests that want to enumerate every coin sequence a circuit can
//! produce without depending on a PRNG seed happening to hit a given outcome.
//! Most measurement tests should prefer passing an explicit `coin` argument;
//! this generator exists for the handful of tests that exercise the plain
//! random path (no `coin` override) and still need reproducibility.

use rand::{RngCore, SeedableRng};

/// Replays `bits`, cycling back to the start once exhausted.
#[derive(Debug, Clone)]
pub struct QueueRng {
    bits: Vec<bool>,
    pos: usize,
}

impl QueueRng {
    #[must_use]
    pub fn new(bits: Vec<bool>) -> Self {
        assert!(!bits.is_empty(), "QueueRng requires at least one bit");
        Self { bits, pos: 0 }
    }

    fn next_bit(&mut self) -> bool {
        let bit = self.bits[self.pos];
        self.pos = (self.pos + 1) % self.bits.len();
        bit
    }
}

impl RngCore for QueueRng {
    fn next_u32(&mut self) -> u32 {
        u32::from(self.next_bit())
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_bit())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest {
            *byte = u8::from(self.next_bit());
        }
    }
}

impl SeedableRng for QueueRng {
    type Seed = [u8; 1];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(vec![seed[0] & 1 == 1])
    }
}

#[cfg(test)]
mod tests {
    use super::QueueRng;
    use rand::RngCore;

    #[test]
    fn replays_bits_in_order_and_wraps() {
        let mut rng = QueueRng::new(vec![true, false, true]);
        let bits: Vec<bool> = (0..6).map(|_| rng.next_u32() == 1).collect();
        assert_eq!(bits, vec![true, false, true, true, false, true]);
    }
}
