//! ## 4 x 4 Matrices
//!
//! The **Matrix4** structure is an ordered sequence of exactly four
//! **Vector4** rows, stored row-major. It is the value type a
//! transform pipeline hands around for model, view, and projection
//! matrices.
//!
//! Multiplication follows the *row-vector* convention: `m * v`
//! computes `v.x * row0 + v.y * row1 + v.z * row2 + v.w * row3`,
//! i.e. `v' = v * M` with the vector on the left. Row i of a matrix
//! product `a * b` is `a * b[i]`, which keeps transform composition
//! in the same convention. An implication worth knowing: the
//! translation of an affine transform lives in row 3, not column 3.
//!
//! ```rust
//! use rs_mat4::core::geometry::Vector4;
//! use rs_mat4::core::matrix::Matrix4;
//!
//!     // translate by (2, 3, 4)
//!     let m = Matrix4::new(
//!         1.0, 0.0, 0.0, 0.0, //
//!         0.0, 1.0, 0.0, 0.0, //
//!         0.0, 0.0, 1.0, 0.0, //
//!         2.0, 3.0, 4.0, 1.0,
//!     );
//!     let origin = Vector4 {
//!         x: 0.0,
//!         y: 0.0,
//!         z: 0.0,
//!         w: 1.0,
//!     };
//!
//!     let moved = m * origin;
//!     assert_eq!(moved.x, 2.0);
//!     assert_eq!(moved.y, 3.0);
//!     assert_eq!(moved.z, 4.0);
//!     assert_eq!(moved.w, 1.0);
//! ```
//!
//! **Matrix4::inverse** uses the closed-form adjugate (cofactor
//! expansion) without pivoting and without a singularity check. A
//! singular matrix yields a result full of IEEE-754 infinities or
//! NaNs instead of an error; callers that care must test the inputs
//! for degeneracy or scan the result with `has_nans()`.

// std
use std::fmt;
use std::ops;
use std::ops::{Index, IndexMut};
// rs_mat4
use crate::core::geometry::{vec4_dotf, Vector4};
use crate::core::mat4::Float;

#[derive(Debug, Copy, Clone)]
pub struct Matrix4 {
    pub r: [Vector4; 4],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }
}

impl Matrix4 {
    pub fn new(
        t00: Float,
        t01: Float,
        t02: Float,
        t03: Float,
        t10: Float,
        t11: Float,
        t12: Float,
        t13: Float,
        t20: Float,
        t21: Float,
        t22: Float,
        t23: Float,
        t30: Float,
        t31: Float,
        t32: Float,
        t33: Float,
    ) -> Self {
        Matrix4 {
            r: [
                Vector4 {
                    x: t00,
                    y: t01,
                    z: t02,
                    w: t03,
                },
                Vector4 {
                    x: t10,
                    y: t11,
                    z: t12,
                    w: t13,
                },
                Vector4 {
                    x: t20,
                    y: t21,
                    z: t22,
                    w: t23,
                },
                Vector4 {
                    x: t30,
                    y: t31,
                    z: t32,
                    w: t33,
                },
            ],
        }
    }
    pub fn has_nans(&self) -> bool {
        self.r[0].has_nans() || self.r[1].has_nans() || self.r[2].has_nans() || self.r[3].has_nans()
    }
    /// Swaps rows and columns, `result[i][j] = m[j][i]`. Pure lane
    /// repositioning; no arithmetic is performed, so non-finite
    /// values keep their exact bit patterns.
    pub fn transpose(m: &Matrix4) -> Matrix4 {
        Matrix4 {
            r: [
                Vector4 {
                    x: m.r[0].x,
                    y: m.r[1].x,
                    z: m.r[2].x,
                    w: m.r[3].x,
                },
                Vector4 {
                    x: m.r[0].y,
                    y: m.r[1].y,
                    z: m.r[2].y,
                    w: m.r[3].y,
                },
                Vector4 {
                    x: m.r[0].z,
                    y: m.r[1].z,
                    z: m.r[2].z,
                    w: m.r[3].z,
                },
                Vector4 {
                    x: m.r[0].w,
                    y: m.r[1].w,
                    z: m.r[2].w,
                    w: m.r[3].w,
                },
            ],
        }
    }
    /// General inverse via Laplace expansion: 2x2 minors of rows 1-3
    /// are combined with rows 0 and 1 into the four cofactor rows,
    /// checkerboard signs are applied, and the result is scaled by
    /// the reciprocal of the determinant. The determinant is not
    /// tested against zero; inverting a singular matrix scales by
    /// `1.0 / 0.0` and the infinities/NaNs propagate to the caller.
    pub fn inverse(m: &Matrix4) -> Matrix4 {
        let coef00: Float = m.r[2].z * m.r[3].w - m.r[3].z * m.r[2].w;
        let coef02: Float = m.r[1].z * m.r[3].w - m.r[3].z * m.r[1].w;
        let coef03: Float = m.r[1].z * m.r[2].w - m.r[2].z * m.r[1].w;
        let coef04: Float = m.r[2].y * m.r[3].w - m.r[3].y * m.r[2].w;
        let coef06: Float = m.r[1].y * m.r[3].w - m.r[3].y * m.r[1].w;
        let coef07: Float = m.r[1].y * m.r[2].w - m.r[2].y * m.r[1].w;
        let coef08: Float = m.r[2].y * m.r[3].z - m.r[3].y * m.r[2].z;
        let coef10: Float = m.r[1].y * m.r[3].z - m.r[3].y * m.r[1].z;
        let coef11: Float = m.r[1].y * m.r[2].z - m.r[2].y * m.r[1].z;
        let coef12: Float = m.r[2].x * m.r[3].w - m.r[3].x * m.r[2].w;
        let coef14: Float = m.r[1].x * m.r[3].w - m.r[3].x * m.r[1].w;
        let coef15: Float = m.r[1].x * m.r[2].w - m.r[2].x * m.r[1].w;
        let coef16: Float = m.r[2].x * m.r[3].z - m.r[3].x * m.r[2].z;
        let coef18: Float = m.r[1].x * m.r[3].z - m.r[3].x * m.r[1].z;
        let coef19: Float = m.r[1].x * m.r[2].z - m.r[2].x * m.r[1].z;
        let coef20: Float = m.r[2].x * m.r[3].y - m.r[3].x * m.r[2].y;
        let coef22: Float = m.r[1].x * m.r[3].y - m.r[3].x * m.r[1].y;
        let coef23: Float = m.r[1].x * m.r[2].y - m.r[2].x * m.r[1].y;

        let fac0 = Vector4 {
            x: coef00,
            y: coef00,
            z: coef02,
            w: coef03,
        };
        let fac1 = Vector4 {
            x: coef04,
            y: coef04,
            z: coef06,
            w: coef07,
        };
        let fac2 = Vector4 {
            x: coef08,
            y: coef08,
            z: coef10,
            w: coef11,
        };
        let fac3 = Vector4 {
            x: coef12,
            y: coef12,
            z: coef14,
            w: coef15,
        };
        let fac4 = Vector4 {
            x: coef16,
            y: coef16,
            z: coef18,
            w: coef19,
        };
        let fac5 = Vector4 {
            x: coef20,
            y: coef20,
            z: coef22,
            w: coef23,
        };

        let vec0 = Vector4 {
            x: m.r[1].x,
            y: m.r[0].x,
            z: m.r[0].x,
            w: m.r[0].x,
        };
        let vec1 = Vector4 {
            x: m.r[1].y,
            y: m.r[0].y,
            z: m.r[0].y,
            w: m.r[0].y,
        };
        let vec2 = Vector4 {
            x: m.r[1].z,
            y: m.r[0].z,
            z: m.r[0].z,
            w: m.r[0].z,
        };
        let vec3 = Vector4 {
            x: m.r[1].w,
            y: m.r[0].w,
            z: m.r[0].w,
            w: m.r[0].w,
        };

        let inv0: Vector4 = vec1 * fac0 - vec2 * fac1 + vec3 * fac2;
        let inv1: Vector4 = vec0 * fac0 - vec2 * fac3 + vec3 * fac4;
        let inv2: Vector4 = vec0 * fac1 - vec1 * fac3 + vec3 * fac5;
        let inv3: Vector4 = vec0 * fac2 - vec1 * fac4 + vec2 * fac5;

        let sign_a = Vector4 {
            x: 1.0,
            y: -1.0,
            z: 1.0,
            w: -1.0,
        };
        let sign_b = Vector4 {
            x: -1.0,
            y: 1.0,
            z: -1.0,
            w: 1.0,
        };
        let inverse = Matrix4 {
            r: [inv0 * sign_a, inv1 * sign_b, inv2 * sign_a, inv3 * sign_b],
        };

        // determinant: row 0 of m against column 0 of the adjugate
        let col0 = Vector4 {
            x: inverse.r[0].x,
            y: inverse.r[1].x,
            z: inverse.r[2].x,
            w: inverse.r[3].x,
        };
        let det: Float = vec4_dotf(&m.r[0], &col0);

        inverse * (1.0 / det)
    }
}

impl PartialEq for Matrix4 {
    fn eq(&self, rhs: &Matrix4) -> bool {
        for i in 0..4 {
            if self.r[i] != rhs.r[i] {
                return false;
            }
        }
        true
    }
}

/// Row access. Indexing past row 3 panics (Rust's array bounds
/// check); callers are expected to stay in 0..4.
impl Index<usize> for Matrix4 {
    type Output = Vector4;
    fn index(&self, index: usize) -> &Vector4 {
        &self.r[index]
    }
}

impl IndexMut<usize> for Matrix4 {
    fn index_mut(&mut self, index: usize) -> &mut Vector4 {
        &mut self.r[index]
    }
}

impl_op_ex!(+|a: &Matrix4, b: &Matrix4| -> Matrix4 {
    let mut mat = Matrix4::default();
    for i in 0..4 {
        mat.r[i] = a.r[i] + b.r[i];
    }
    mat
});

impl_op_ex!(-|a: &Matrix4, b: &Matrix4| -> Matrix4 {
    let mut mat = Matrix4::default();
    for i in 0..4 {
        mat.r[i] = a.r[i] - b.r[i];
    }
    mat
});

// one lane of b broadcast against one full row of a, partial
// products summed pairwise
impl_op_ex!(*|a: &Matrix4, b: &Vector4| -> Vector4 {
    let mul0: Vector4 = a.r[0] * b.x;
    let mul1: Vector4 = a.r[1] * b.y;
    let mul2: Vector4 = a.r[2] * b.z;
    let mul3: Vector4 = a.r[3] * b.w;
    let add0: Vector4 = mul0 + mul1;
    let add1: Vector4 = mul2 + mul3;
    add0 + add1
});

impl_op_ex!(*|a: &Matrix4, b: &Matrix4| -> Matrix4 {
    let mut mat = Matrix4::default();
    for i in 0..4 {
        mat.r[i] = a * b.r[i];
    }
    mat
});

impl_op_ex!(*|a: &Matrix4, b: Float| -> Matrix4 {
    let mut mat = Matrix4::default();
    for i in 0..4 {
        mat.r[i] = a.r[i] * b;
    }
    mat
});

impl_op_ex!(/|a: &Matrix4, b: Float| -> Matrix4 {
    let mut mat = Matrix4::default();
    for i in 0..4 {
        mat.r[i] = a.r[i] / b;
    }
    mat
});

impl_op!(+= |a: &mut Matrix4, b: Matrix4| {
    for i in 0..4 {
        a.r[i] += b.r[i];
    }
});

impl_op!(-= |a: &mut Matrix4, b: Matrix4| {
    for i in 0..4 {
        a.r[i] -= b.r[i];
    }
});

impl_op!(*= |a: &mut Matrix4, b: Matrix4| {
    *a = *a * b;
});

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix4(")?;
        for i in 0..4 {
            write!(f, "\n\t{}", self.r[i])?;
            if i < 3 {
                write!(f, ", ")?;
            }
        }
        write!(f, "\n)")
    }
}
