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

//! Bit matrices, a column/qubit bimap, and the `Simulator` state tuple that
//! together implement a stabilizer-style simulator for Clifford circuits.
//!
//! [`Simulator`] is the public entry point: construct one with
//! [`Simulator::new`]/[`Simulator::with_seed`]/[`Simulator::with_rng`], apply
//! gates (`x`, `y`, `z`, `h`, `s`, `sdg`, `cx`, `cz`), and take measurements
//! (`meas_x`, `meas_y`, `meas_z`). [`AMatrix`], [`QMatrix`], and [`Bimap`] are
//! exposed for callers that want to inspect or serialize the underlying
//! tableau directly; ordinary circuit simulation never needs them.

pub mod a_matrix;
pub mod bimap;
pub mod q_matrix;
pub mod simulator;
pub mod sims_rngs;

pub use a_matrix::AMatrix;
pub use bimap::Bimap;
pub use q_matrix::QMatrix;
pub use simulator::Simulator;
pub use sims_rngs::queue_rng::QueueRng;
pub use sims_rngs::sim_rng::SimRng;
