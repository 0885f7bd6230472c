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

use rand::{RngCore, SeedableRng};

/// Marker trait for generators usable as the simulator's random bit source.
///
/// Anything satisfying `RngCore + SeedableRng + Clone` qualifies; `Clone` is
/// required because the simulator itself must be deep-copyable, including its
/// generator's internal state.
pub trait SimRng: RngCore + SeedableRng + Clone {}

impl<T: RngCore + SeedableRng + Clone> SimRng for T {}

#[cfg(test)]
mod tests {
    use super::SimRng;
    use rand_chacha::ChaCha8Rng;

    fn assert_sim_rng<T: SimRng>() {}

    #[test]
    fn chacha8_satisfies_sim_rng() {
        assert_sim_rng::<ChaCha8Rng>();
    }
}
