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

//! The Simplex stabilizer-state tuple `(A, b, Q, R0, R1, p)` and the gate and
//! measurement algorithms that keep it in a valid, compact stabilizer
//! representation of an `n`-qubit Clifford state.
//!
//! Columns of `A` are the state's generators; column `h` is "live" while
//! `h < r`. `R0`/`R1` are the two-bit phase digit (`R = R0 + 2*R1`) that
//! conceptually occupies the zero diagonal of `Q`. A qubit with a "principal
//! column" `c` (tracked by the bimap `p`) is the unique row with `A[j, c] =
//! 1`; most of the bookkeeping here exists to keep that property true as
//! columns are added, merged, and eliminated.

use std::fmt;

use log::trace;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::a_matrix::AMatrix;
use crate::bimap::Bimap;
use crate::q_matrix::QMatrix;
use crate::sims_rngs::sim_rng::SimRng;

/// A stabilizer-state simulator for Clifford circuits on `n` qubits.
///
/// Construct with [`Simulator::new`] (entropy-seeded), [`Simulator::with_seed`]
/// (reproducible), or [`Simulator::with_rng`] (caller-supplied generator, e.g.
/// a [`crate::sims_rngs::queue_rng::QueueRng`] in tests). `Clone` performs a
/// full deep copy, including the generator's internal state, so a simulator
/// can be forked at a mid-circuit measurement to explore both outcomes.
#[derive(Clone, Debug)]
pub struct Simulator<R = ChaCha8Rng>
where
    R: SimRng,
{
    n: usize,
    a: AMatrix,
    b: Vec<bool>,
    q: QMatrix,
    r0: Vec<bool>,
    r1: Vec<bool>,
    p: Bimap,
    det: bool,
    phase: u8,
    rng: R,
}

impl Simulator {
    /// Creates a fresh `|0...0⟩` state for `n` qubits, seeded from entropy.
    #[must_use]
    #[inline]
    pub fn new(n: usize) -> Simulator<ChaCha8Rng> {
        Simulator::with_rng(n, ChaCha8Rng::from_entropy())
    }

    /// Creates a fresh `|0...0⟩` state for `n` qubits with a reproducible seed.
    #[must_use]
    #[inline]
    pub fn with_seed(n: usize, seed: u64) -> Simulator<ChaCha8Rng> {
        Simulator::with_rng(n, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R> Simulator<R>
where
    R: SimRng,
{
    /// Creates a fresh `|0...0⟩` state for `n` qubits, drawing non-deterministic
    /// measurement outcomes from the supplied generator.
    #[must_use]
    pub fn with_rng(n: usize, rng: R) -> Self {
        trace!("simplex: constructing simulator with n={n} qubits");
        Self {
            n,
            a: AMatrix::new(n),
            b: vec![false; n],
            q: QMatrix::new(n),
            r0: vec![false; n + 1],
            r1: vec![false; n + 1],
            p: Bimap::new(),
            det: true,
            phase: 0,
            rng,
        }
    }

    /// Number of qubits this simulator was constructed for.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Whether every measurement so far has been forced by the state (no
    /// random or caller-supplied coin has ever been consumed). Once cleared
    /// this never becomes `true` again.
    #[must_use]
    pub fn is_deterministic(&self) -> bool {
        self.det
    }

    /// Accumulated global phase, in units of `pi/4`, in `0..8`.
    ///
    /// No gate or measurement in this implementation mutates it (see
    /// `DESIGN.md`), so this always returns `0`; the accessor exists because
    /// the stabilizer state this type tracks does have a well-defined global
    /// phase, and a binding layer exposing this type may want the hook.
    #[must_use]
    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// `b[j] ^= 1`.
    ///
    /// # Panics
    /// Will panic if `j` is out of range for this simulator's qubit count.
    pub fn x(&mut self, j: usize) {
        self.check_qubit(j);
        self.b[j] ^= true;
    }

    /// `Y = Z` then `X`.
    ///
    /// # Panics
    /// Will panic if `j` is out of range for this simulator's qubit count.
    pub fn y(&mut self, j: usize) {
        self.check_qubit(j);
        self.z(j);
        self.x(j);
    }

    /// For each live column `h` supporting qubit `j`, flips `R1[h]`.
    ///
    /// # Panics
    /// Will panic if `j` is out of range for this simulator's qubit count.
    pub fn z(&mut self, j: usize) {
        self.check_qubit(j);
        for h in self.a.cols_where_one(j) {
            self.r1[h] ^= true;
        }
    }

    /// `S`: flips the `Q`-submatrix on qubit `j`'s columns, then advances each
    /// column's phase digit by one quarter-turn.
    ///
    /// # Panics
    /// Will panic if `j` is out of range for this simulator's qubit count.
    pub fn s(&mut self, j: usize) {
        self.check_qubit(j);
        let h = self.a.cols_where_one(j);
        self.q.flip_submatrix(&h);
        let z = self.b[j];
        for hh in h {
            self.r1[hh] ^= self.r0[hh] ^ z;
            self.r0[hh] ^= true;
        }
    }

    /// `S`-adjoint: the same submatrix flip as `s`, but the two `R` updates
    /// run in the opposite order, which is the only observable difference.
    ///
    /// # Panics
    /// Will panic if `j` is out of range for this simulator's qubit count.
    pub fn sdg(&mut self, j: usize) {
        self.check_qubit(j);
        let h = self.a.cols_where_one(j);
        self.q.flip_submatrix(&h);
        let z = self.b[j];
        for hh in h {
            self.r0[hh] ^= true;
            self.r1[hh] ^= self.r0[hh] ^ z;
        }
    }

    /// Hadamard: swaps the role of qubit `j`'s principal column (if any) with
    /// a fresh basis column, then eliminates the old column.
    ///
    /// # Panics
    /// Will panic if `j` is out of range for this simulator's qubit count.
    pub fn h(&mut self, j: usize) {
        self.check_qubit(j);
        let c = self.principate(j);
        let h = self.a.cols_where_one(j);
        let z = self.b[j];
        self.new_principal_column(j, false, z, c, &h);
    }

    /// `CX` with control `j`, target `k`.
    ///
    /// # Panics
    /// Will panic if `j` or `k` is out of range for this simulator's qubit
    /// count, or if `j == k`.
    pub fn cx(&mut self, j: usize, k: usize) {
        self.check_two_qubits(j, k);
        self.a.add_row(k, j);
        self.b[k] ^= self.b[j];
        if let Some(c) = self.p.inv_at(k) {
            self.reselect_principal_row(c, None);
        }
    }

    /// `CZ(j, k) = CZ(k, j)`.
    ///
    /// # Panics
    /// Will panic if `j` or `k` is out of range for this simulator's qubit
    /// count, or if `j == k`.
    pub fn cz(&mut self, j: usize, k: usize) {
        self.check_two_qubits(j, k);
        let h_j = self.a.cols_where_one(j);
        let h_k = self.a.cols_where_one(k);
        self.q.flip_submatrix_cross(&h_j, &h_k);
        let h_jk = self.a.cols_where_one_both(j, k);
        for h in h_jk {
            self.r1[h] ^= true;
        }
        let z_j = self.b[j];
        let z_k = self.b[k];
        for &h in &h_j {
            self.r1[h] ^= z_k;
        }
        for &h in &h_k {
            self.r1[h] ^= z_j;
        }
    }

    /// Measures qubit `j` in the X basis. `coin`, if supplied, overrides the
    /// random bit source and is used instead of a draw from the generator
    /// whenever the outcome is not already forced.
    ///
    /// # Panics
    /// Will panic if `j` is out of range for this simulator's qubit count.
    pub fn meas_x(&mut self, j: usize, coin: Option<bool>) -> bool {
        self.check_qubit(j);
        let c = self.principate(j);
        if let Some(c) = c {
            if self.q.rowcol_is_zero(c) {
                if !self.r0[c] {
                    return self.r1[c];
                }
                let beta = self.toss_coin(coin);
                self.r0[c] = false;
                self.r1[c] = beta;
                return beta;
            }
        }
        let beta = self.toss_coin(coin);
        for h in self.a.cols_where_one(j) {
            self.r1[h] ^= beta;
        }
        self.new_principal_column(j, false, beta, c, &[]);
        beta
    }

    /// Measures qubit `j` in the Y basis, symmetric to `meas_x` with `R0`
    /// playing the opposite role.
    ///
    /// # Panics
    /// Will panic if `j` is out of range for this simulator's qubit count.
    pub fn meas_y(&mut self, j: usize, coin: Option<bool>) -> bool {
        self.check_qubit(j);
        let c = self.principate(j);
        if let Some(c) = c {
            if self.q.rowcol_is_zero(c) {
                if self.r0[c] {
                    return self.r1[c] ^ self.b[j];
                }
                let beta = self.toss_coin(coin);
                self.r0[c] = true;
                self.r1[c] = beta;
                return beta;
            }
        }
        let beta = self.toss_coin(coin);
        let h = self.a.cols_where_one(j);
        self.q.flip_submatrix(&h);
        let z = self.b[j] ^ beta;
        for hh in h {
            self.r0[hh] ^= true;
            self.r1[hh] ^= self.r0[hh] ^ z;
        }
        self.new_principal_column(j, true, beta, c, &[]);
        beta
    }

    /// Measures qubit `j` in the Z (computational) basis.
    ///
    /// # Panics
    /// Will panic if `j` is out of range for this simulator's qubit count.
    /// Will also panic (via an internal `expect`) if `row_weight(j) > 0` yet
    /// no live column supports `j`, which the `A`/`p` invariants rule out.
    pub fn meas_z(&mut self, j: usize, coin: Option<bool>) -> bool {
        self.check_qubit(j);
        if self.a.row_weight(j) == 0 {
            return self.b[j];
        }
        let beta = self.toss_coin(coin);
        let h = self.a.cols_where_one(j);
        let k = h
            .into_iter()
            .min_by_key(|&h| self.a.col_weight(h))
            .expect("row_weight(j) > 0 implies cols_where_one(j) is non-empty");
        self.reindex_swap_column(k);
        let last = self.a.r() - 1;
        self.make_principal(last, j);
        let z = beta ^ self.b[j];
        self.fix_final_bit(z);
        beta
    }

    fn check_qubit(&self, j: usize) {
        assert!(j < self.n, "qubit index {j} out of range for n={}", self.n);
    }

    fn check_two_qubits(&self, j: usize, k: usize) {
        self.check_qubit(j);
        self.check_qubit(k);
        assert_ne!(j, k, "two-qubit gate requires distinct qubits, got {j}");
    }

    fn toss_coin(&mut self, coin: Option<bool>) -> bool {
        self.det = false;
        coin.unwrap_or_else(|| self.rng.next_u32() & 1 == 1)
    }

    /// Right-multiplies column `c` into column `k`, keeping `A`, `Q`, and `R1`
    /// consistent. This is the "minimal" variant from the reference source
    /// (see `DESIGN.md`): it does not touch `R0[k]`.
    fn reindex_subt_column(&mut self, k: usize, c: usize) {
        if k == c {
            return;
        }
        self.a.add_col(k, c);
        self.r1[k] ^= self.q.entry(c, k);
        self.q.add_rowcol(k, c);
    }

    /// Makes column `c` the principal column of qubit `j`, clearing every
    /// other column's support of `j` via `reindex_subt_column`.
    fn make_principal(&mut self, c: usize, j: usize) {
        if self.a.entry(j, c) {
            let h = self.a.cols_where_one(j);
            for k in h {
                if k != c {
                    self.reindex_subt_column(k, c);
                }
            }
            self.p.make_match(c, j);
        }
    }

    /// Among the qubits supported by column `c` (excluding `exclude`, if
    /// given), assigns `c` as the principal column of the one with smallest
    /// row weight, tie-breaking by smallest qubit index.
    fn reselect_principal_row(&mut self, c: usize, exclude: Option<usize>) {
        let mut best: Option<(usize, usize)> = None;
        for j1 in 0..self.n {
            if exclude == Some(j1) {
                continue;
            }
            if self.a.entry(j1, c) {
                let weight = self.a.row_weight(j1);
                let better = match best {
                    None => true,
                    Some((best_weight, _)) => weight < best_weight,
                };
                if better {
                    best = Some((weight, j1));
                }
            }
        }
        if let Some((_, j0)) = best {
            self.make_principal(c, j0);
        }
    }

    /// Tries to reassign qubit `j`'s principal column to another qubit.
    /// Returns the column `j` is about to lose (for the caller to eliminate)
    /// if no replacement owner was found, or `None` if ownership moved (the
    /// new owner has already taken over the column's bookkeeping) or `j` had
    /// no principal column to begin with.
    fn principate(&mut self, j: usize) -> Option<usize> {
        let c = self.p.inv_at(j)?;
        self.reselect_principal_row(c, Some(j));
        (self.p.fwd_at(c) == Some(j)).then_some(c)
    }

    /// Swaps column `k` with the last live column across `A`, `Q`, `R0`, `R1`,
    /// and `p`.
    fn reindex_swap_column(&mut self, k: usize) {
        let last = self.a.r() - 1;
        if k == last {
            return;
        }
        self.a.swap_col(k);
        self.r0.swap(k, last);
        self.r1.swap(k, last);
        self.q.swap_rowcol(k);
        self.p.swap_fwd(k, last);
    }

    /// Appends a fresh column (the `j`-th basis vector in `A`, `H` in `Q`),
    /// growing `r` by one.
    fn expand(&mut self, j: usize, h: &[usize]) {
        self.a.zero_append_basis_col(j);
        self.q.append_rowcol(h);
        trace!("simplex: expand, r -> {}", self.a.r());
    }

    /// Drops the last live column from `A`, `Q`, and `p`, shrinking `r` by
    /// one.
    fn contract(&mut self) {
        let last = self.a.r() - 1;
        self.a.drop_final_col();
        self.q.drop_final_rowcol();
        self.p.fwd_erase(last);
        trace!("simplex: contract, r -> {}", self.a.r());
    }

    /// Consumes the last live column as a classical offset: if `z`, folds its
    /// `A` column into `b` and its `Q` column into `R1`; then contracts
    /// unconditionally.
    fn fix_final_bit(&mut self, z: bool) {
        if z {
            let last = self.a.r() - 1;
            for j in 0..self.n {
                self.b[j] ^= self.a.entry(j, last);
            }
            for h in 0..last {
                self.r1[h] ^= self.q.entry(h, last);
            }
        }
        self.contract();
    }

    /// Eliminates column `c`, which no longer has a principal owner, folding
    /// its phase and coupling into the remaining live columns.
    fn zero_column_elim(&mut self, c: usize) {
        self.reindex_swap_column(c);
        let h = self.q.rows_with_terminal_1();
        let last = self.a.r() - 1;
        let u0 = self.r0[last];
        let u1 = self.r1[last];
        self.contract();
        if u0 {
            self.q.flip_submatrix(&h);
            for &hh in &h {
                self.r0[hh] ^= true;
                self.r1[hh] ^= self.r0[hh] ^ u1;
            }
        } else if !h.is_empty() {
            let l = h[0];
            for &hh in &h[1..] {
                self.reindex_subt_column(hh, l);
            }
            self.reindex_swap_column(l);
            self.fix_final_bit(u1);
        }
    }

    /// Expands a fresh principal column for qubit `j` with phase digit
    /// `(r0, r1)`, then, if `c` is given, eliminates `j`'s old principal
    /// column `c`.
    fn new_principal_column(&mut self, j: usize, r0: bool, r1: bool, c: Option<usize>, h: &[usize]) {
        self.expand(j, h);
        let last = self.a.r() - 1;
        self.b[j] = false;
        self.r0[last] = r0;
        self.r1[last] = r1;
        self.p.make_match(last, j);
        if let Some(c) = c {
            self.zero_column_elim(c);
        }
    }
}

impl<R> fmt::Display for Simulator<R>
where
    R: SimRng,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.a.r();
        writeln!(f, "n: {}", self.n)?;
        writeln!(f, "A:")?;
        for j in 0..self.n {
            write!(f, "[")?;
            for h in 0..r {
                if h > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", u8::from(self.a.entry(j, h)))?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "b: [")?;
        for (j, &bit) in self.b.iter().enumerate() {
            if j > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", u8::from(bit))?;
        }
        writeln!(f, "]")?;
        writeln!(f, "Q:")?;
        for h1 in 0..r {
            write!(f, "[")?;
            for h2 in 0..r {
                if h2 > 0 {
                    write!(f, " ")?;
                }
                let v = if h1 == h2 {
                    u8::from(self.r0[h1]) + 2 * u8::from(self.r1[h1])
                } else {
                    u8::from(self.q.entry(h1, h2))
                };
                write!(f, "{v}")?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "{}", self.p)
    }
}
