use crate::complex::{self, C64, ONE, ZERO};
use std::ops::{Add, Index, IndexMut, Mul};

/// 2x2 complex matrix, indexed `[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat2(pub [[C64; 2]; 2]);

impl Mat2 {
    pub const fn new(m00: C64, m01: C64, m10: C64, m11: C64) -> Self {
        Self([[m00, m01], [m10, m11]])
    }

    pub const fn zero() -> Self {
        Self([[ZERO, ZERO], [ZERO, ZERO]])
    }

    pub const fn identity() -> Self {
        Self([[ONE, ZERO], [ZERO, ONE]])
    }

    pub const fn diag(d0: C64, d1: C64) -> Self {
        Self([[d0, ZERO], [ZERO, d1]])
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Self {
        let m = &self.0;
        Self([
            [m[0][0].conj(), m[1][0].conj()],
            [m[0][1].conj(), m[1][1].conj()],
        ])
    }

    pub fn scale(&self, s: f64) -> Self {
        let mut out = *self;
        for row in out.0.iter_mut() {
            for v in row.iter_mut() {
                *v *= s;
            }
        }
        out
    }

    pub fn trace(&self) -> C64 {
        self.0[0][0] + self.0[1][1]
    }

    /// `A · B · A†`, the shape of every Kraus term.
    pub fn sandwich(&self, inner: &Mat2) -> Mat2 {
        *self * *inner * self.dagger()
    }

    pub fn approx_eq(&self, other: &Mat2, tol: f64) -> bool {
        (0..2).all(|i| (0..2).all(|j| complex::approx_eq(self.0[i][j], other.0[i][j], tol)))
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::zero()
    }
}

impl Index<usize> for Mat2 {
    type Output = [C64; 2];

    fn index(&self, row: usize) -> &[C64; 2] {
        &self.0[row]
    }
}

impl IndexMut<usize> for Mat2 {
    fn index_mut(&mut self, row: usize) -> &mut [C64; 2] {
        &mut self.0[row]
    }
}

impl Add for Mat2 {
    type Output = Mat2;

    fn add(self, rhs: Mat2) -> Mat2 {
        let mut out = Mat2::zero();
        for i in 0..2 {
            for j in 0..2 {
                out.0[i][j] = self.0[i][j] + rhs.0[i][j];
            }
        }
        out
    }
}

impl Mul for Mat2 {
    type Output = Mat2;

    fn mul(self, rhs: Mat2) -> Mat2 {
        let mut out = Mat2::zero();
        for i in 0..2 {
            for j in 0..2 {
                let mut acc = ZERO;
                for k in 0..2 {
                    acc += self.0[i][k] * rhs.0[k][j];
                }
                out.0[i][j] = acc;
            }
        }
        out
    }
}

impl Mul<f64> for Mat2 {
    type Output = Mat2;

    fn mul(self, s: f64) -> Mat2 {
        self.scale(s)
    }
}
