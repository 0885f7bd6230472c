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

//! Symmetric `(n+1) x (n+1)` bit matrix over GF(2) with a semantically-zero
//! diagonal; the diagonal cells are never read (the two-bit `R` phase digit that
//! conceptually occupies the diagonal is tracked separately, see the simulator
//! core) so toggling them is harmless and is not special-cased here.

/// A symmetric GF(2) matrix over `0..=n` row/column indices, of which the first
/// `r` are live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QMatrix {
    r: usize,
    data: Vec<Vec<bool>>,
}

impl QMatrix {
    /// Creates an all-zero matrix sized for up to `n+1` live rows/columns.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            r: 0,
            data: vec![vec![false; n + 1]; n + 1],
        }
    }

    #[must_use]
    pub fn r(&self) -> usize {
        self.r
    }

    /// Reads `Q[h1, h2]`.
    #[must_use]
    pub fn entry(&self, h1: usize, h2: usize) -> bool {
        self.data[h1][h2]
    }

    /// XORs row/column `k` into row/column `h`, preserving symmetry.
    pub fn add_rowcol(&mut self, h: usize, k: usize) {
        for j in 0..self.r {
            let v = self.data[k][j];
            self.data[h][j] ^= v;
        }
        for j in 0..self.r {
            let v = self.data[j][k];
            self.data[j][h] ^= v;
        }
    }

    /// Swaps row/column `h` with row/column `r-1` (no-op if `h == r-1`).
    pub fn swap_rowcol(&mut self, h: usize) {
        let last = self.r - 1;
        if h == last {
            return;
        }
        self.data.swap(h, last);
        for row in &mut self.data {
            row.swap(h, last);
        }
    }

    /// Ascending list of `h < r-1` with `Q[h, r-1] = 1`.
    #[must_use]
    pub fn rows_with_terminal_1(&self) -> Vec<usize> {
        if self.r == 0 {
            return Vec::new();
        }
        let last = self.r - 1;
        (0..last).filter(|&h| self.data[h][last]).collect()
    }

    /// XORs 1 into every `Q[h1, h2]` with `h1, h2 in H`, `h1 != h2`.
    pub fn flip_submatrix(&mut self, h: &[usize]) {
        for &h1 in h {
            for &h2 in h {
                if h1 != h2 {
                    self.data[h1][h2] ^= true;
                }
            }
        }
    }

    /// XORs 1 into every `Q[h1, h2]` and `Q[h2, h1]` with `h1 in h1s`, `h2 in h2s`,
    /// `h1 != h2`.
    pub fn flip_submatrix_cross(&mut self, h1s: &[usize], h2s: &[usize]) {
        for &h1 in h1s {
            for &h2 in h2s {
                if h1 != h2 {
                    self.data[h1][h2] ^= true;
                    self.data[h2][h1] ^= true;
                }
            }
        }
    }

    /// Appends a fresh row/column at index `r` whose 1-positions are exactly `h`
    /// (symmetrically), incrementing `r`.
    pub fn append_rowcol(&mut self, h: &[usize]) {
        for j in 0..self.r {
            self.data[self.r][j] = false;
            self.data[j][self.r] = false;
        }
        for &h1 in h {
            self.data[h1][self.r] = true;
            self.data[self.r][h1] = true;
        }
        self.r += 1;
    }

    /// Whether every off-diagonal entry in row/column `h` is zero.
    #[must_use]
    pub fn rowcol_is_zero(&self, h: usize) -> bool {
        (0..self.r).all(|j| j == h || !self.data[h][j])
    }

    /// Decrements `r`, dropping the last live row/column.
    pub fn drop_final_rowcol(&mut self) {
        self.r -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::QMatrix;

    #[test]
    fn add_rowcol_preserves_symmetry() {
        let mut q = QMatrix::new(2);
        q.append_rowcol(&[]);
        q.append_rowcol(&[0]);
        q.append_rowcol(&[]);
        q.add_rowcol(2, 1);
        assert!(q.entry(2, 0));
        assert!(q.entry(0, 2));
    }

    #[test]
    fn flip_submatrix_skips_self_pairs() {
        let mut q = QMatrix::new(1);
        q.append_rowcol(&[]);
        q.flip_submatrix(&[0]);
        assert!(!q.entry(0, 0));
    }

    #[test]
    fn flip_submatrix_is_symmetric() {
        let mut q = QMatrix::new(2);
        q.append_rowcol(&[]);
        q.append_rowcol(&[]);
        q.flip_submatrix(&[0, 1]);
        assert!(q.entry(0, 1));
        assert!(q.entry(1, 0));
    }

    #[test]
    fn rows_with_terminal_1_is_ascending_and_excludes_last() {
        let mut q = QMatrix::new(3);
        q.append_rowcol(&[]);
        q.append_rowcol(&[0]);
        q.append_rowcol(&[0, 1]);
        assert_eq!(q.rows_with_terminal_1(), vec![0, 1]);
    }

    #[test]
    fn rowcol_is_zero_ignores_diagonal() {
        let mut q = QMatrix::new(1);
        q.append_rowcol(&[]);
        q.flip_submatrix(&[0]);
        assert!(q.rowcol_is_zero(0));
    }
}
