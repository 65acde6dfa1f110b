//! The row vector all matrix math is built on.
//!
//! # Vectors
//!
//! A **Vector4** holds the four components (x, y, z, w) of one matrix
//! row. Addition, subtraction, multiplication, and division between
//! two vectors work elementwise, lane by lane; multiplication and
//! division by a scalar scale all four lanes. The struct is laid out
//! contiguously and aligned to a 16-byte boundary so a row can be
//! loaded into one SIMD register, but nothing in its behavior depends
//! on that alignment.
//!
//! ```rust
//! use rs_mat4::core::geometry::Vector4;
//!
//!     let a = Vector4 {
//!         x: 1.0,
//!         y: 2.0,
//!         z: 3.0,
//!         w: 4.0,
//!     };
//!     let b = Vector4 {
//!         x: 0.5,
//!         y: 0.5,
//!         z: 0.5,
//!         w: 0.5,
//!     };
//!
//!     println!("a * b = {}", a * b);
//! ```
//!
//! Division is raw IEEE-754 division. A zero divisor is not guarded
//! against; infinities and NaNs simply propagate into the result and
//! can be found later via `has_nans()`.

// std
use std::fmt;
use std::ops;
use std::ops::{Index, IndexMut};
// others
use strum_macros::EnumIter;
// rs_mat4
use crate::core::mat4::Float;

#[derive(EnumIter, Debug, Copy, Clone)]
#[repr(u8)]
pub enum XYZWEnum {
    X = 0,
    Y = 1,
    Z = 2,
    W = 3,
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[repr(C, align(16))]
pub struct Vector4 {
    pub x: Float,
    pub y: Float,
    pub z: Float,
    pub w: Float,
}

impl Vector4 {
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan()
    }
}

impl Index<XYZWEnum> for Vector4 {
    type Output = Float;
    fn index(&self, index: XYZWEnum) -> &Float {
        match index {
            XYZWEnum::X => &self.x,
            XYZWEnum::Y => &self.y,
            XYZWEnum::Z => &self.z,
            _ => &self.w,
        }
    }
}

impl IndexMut<XYZWEnum> for Vector4 {
    fn index_mut(&mut self, index: XYZWEnum) -> &mut Float {
        match index {
            XYZWEnum::X => &mut self.x,
            XYZWEnum::Y => &mut self.y,
            XYZWEnum::Z => &mut self.z,
            _ => &mut self.w,
        }
    }
}

impl_op!(-|a: Vector4| -> Vector4 {
    Vector4 {
        x: -a.x,
        y: -a.y,
        z: -a.z,
        w: -a.w,
    }
});

impl_op_ex!(+|a: &Vector4, b: &Vector4| -> Vector4 {
    Vector4 {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
        w: a.w + b.w,
    }
});

impl_op_ex!(-|a: &Vector4, b: &Vector4| -> Vector4 {
    Vector4 {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
        w: a.w - b.w,
    }
});

impl_op_ex!(*|a: &Vector4, b: &Vector4| -> Vector4 {
    Vector4 {
        x: a.x * b.x,
        y: a.y * b.y,
        z: a.z * b.z,
        w: a.w * b.w,
    }
});

impl_op_ex!(/|a: &Vector4, b: &Vector4| -> Vector4 {
    Vector4 {
        x: a.x / b.x,
        y: a.y / b.y,
        z: a.z / b.z,
        w: a.w / b.w,
    }
});

impl_op_ex!(*|a: &Vector4, b: Float| -> Vector4 {
    Vector4 {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
        w: a.w * b,
    }
});

// unguarded on purpose (zero divisors propagate IEEE infinities/NaNs)
impl_op_ex!(/|a: &Vector4, b: Float| -> Vector4 {
    Vector4 {
        x: a.x / b,
        y: a.y / b,
        z: a.z / b,
        w: a.w / b,
    }
});

impl_op!(+= |a: &mut Vector4, b: Vector4| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
    a.w += b.w;
});

impl_op!(-= |a: &mut Vector4, b: Vector4| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
    a.w -= b.w;
});

impl_op!(*= |a: &mut Vector4, b: Float| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
    a.w *= b;
});

impl_op!(/= |a: &mut Vector4, b: Float| {
    a.x /= b;
    a.y /= b;
    a.z /= b;
    a.w /= b;
});

/// Product of the Euclidean magnitudes of the two vectors and the
/// cosine of the angle between them, summed lane-pairwise as
/// `(x + y) + (z + w)`.
pub fn vec4_dotf(v1: &Vector4, v2: &Vector4) -> Float {
    let d: Vector4 = v1 * v2;
    (d.x + d.y) + (d.z + d.w)
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector4({}, {}, {}, {})",
            self.x, self.y, self.z, self.w
        )
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use crate::core::geometry::{vec4_dotf, Vector4, XYZWEnum};
    use crate::core::mat4::Float;

    #[test]
    fn elementwise_arithmetic() {
        let a = Vector4 {
            x: 1.0,
            y: -2.0,
            z: 4.0,
            w: 0.5,
        };
        let b = Vector4 {
            x: 2.0,
            y: 8.0,
            z: -1.0,
            w: 0.5,
        };
        assert_eq!(
            a + b,
            Vector4 {
                x: 3.0,
                y: 6.0,
                z: 3.0,
                w: 1.0,
            }
        );
        assert_eq!(
            a - b,
            Vector4 {
                x: -1.0,
                y: -10.0,
                z: 5.0,
                w: 0.0,
            }
        );
        assert_eq!(
            a * b,
            Vector4 {
                x: 2.0,
                y: -16.0,
                z: -4.0,
                w: 0.25,
            }
        );
        assert_eq!(
            a / b,
            Vector4 {
                x: 0.5,
                y: -0.25,
                z: -4.0,
                w: 1.0,
            }
        );
    }

    #[test]
    fn compound_assignment_matches_binary() {
        let a = Vector4 {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            w: 4.0,
        };
        let b = Vector4 {
            x: -0.5,
            y: 1.5,
            z: 0.0,
            w: 2.0,
        };
        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        let mut d = a;
        d -= b;
        assert_eq!(d, a - b);
        let mut e = a;
        e *= 3.0;
        assert_eq!(e, a * 3.0);
        let mut g = a;
        g /= 4.0;
        assert_eq!(g, a / 4.0);
    }

    #[test]
    fn division_by_zero_propagates() {
        let v = Vector4 {
            x: 1.0,
            y: -1.0,
            z: 0.0,
            w: 2.0,
        };
        let r = v / 0.0;
        assert_eq!(r.x, Float::INFINITY);
        assert_eq!(r.y, Float::NEG_INFINITY);
        assert!(r.z.is_nan());
        assert_eq!(r.w, Float::INFINITY);
        assert!(r.has_nans());
    }

    #[test]
    fn indexing_by_component() {
        let mut v = Vector4 {
            x: 10.0,
            y: 20.0,
            z: 30.0,
            w: 40.0,
        };
        let collected: Vec<Float> = XYZWEnum::iter().map(|i| v[i]).collect();
        assert_eq!(collected, vec![10.0, 20.0, 30.0, 40.0]);
        v[XYZWEnum::Z] = -30.0;
        assert_eq!(v.z, -30.0);
    }

    #[test]
    fn dot_product() {
        let a = Vector4 {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            w: 4.0,
        };
        let b = Vector4 {
            x: 4.0,
            y: 3.0,
            z: 2.0,
            w: 1.0,
        };
        assert_eq!(vec4_dotf(&a, &b), 20.0);
    }

    #[test]
    fn negation_and_display() {
        let v = Vector4 {
            x: 1.0,
            y: -2.5,
            z: 0.0,
            w: 1.0,
        };
        assert_eq!(
            -v,
            Vector4 {
                x: -1.0,
                y: 2.5,
                z: 0.0,
                w: -1.0,
            }
        );
        assert_eq!(format!("{}", v), "Vector4(1, -2.5, 0, 1)");
    }
}
