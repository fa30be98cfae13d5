// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 The quadra developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::array::from_fn;
use std::ops::{Add, Index, Neg, Sub};

use crate::geometry::error::{GeometryError, GeometryResult};
use crate::geometry::point::Point;
use crate::numeric::scalar::Scalar;

/// A displacement in N-dimensional space, sharing coordinate storage layout
/// with [`Point`]. Value semantics: the only mutating operations are
/// [`Vector::normalize`] and [`Vector::assign`].
///
/// The 3D cross product lives on `Vector<T, 3>` only. The 2D analogue is the
/// scalar [`Vector::perp_dot`], deliberately under a different name so that
/// asking a 2D vector for a vector-valued cross product is a type error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize>(pub Point<T, N>);

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn from_vals(coords: [T; N]) -> Self {
        Vector(Point { coords })
    }

    /// Bounds-checked component access.
    pub fn coord(&self, i: usize) -> GeometryResult<T> {
        self.0.coord(i)
    }

    pub fn assign(&mut self, coords: [T; N]) {
        self.0.coords = coords;
    }

    pub fn dot(&self, other: &Self) -> T {
        let mut acc = T::zero();
        for i in 0..N {
            acc = acc + self.0.coords[i] * other.0.coords[i];
        }
        acc
    }

    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    pub fn scale(&self, s: T) -> Self {
        Vector(Point {
            coords: from_fn(|i| self.0.coords[i] * s),
        })
    }

    pub fn is_zero(&self, eps: T) -> bool {
        self.norm() < eps
    }

    /// Unit vector with the same direction, or `DegenerateVector` when the
    /// magnitude is below the tight tolerance.
    pub fn normalized(&self) -> GeometryResult<Self> {
        let n = self.norm();
        if n < T::eps_tight() {
            return Err(GeometryError::DegenerateVector);
        }
        Ok(self.scale(T::one() / n))
    }

    /// In-place variant of [`Vector::normalized`].
    pub fn normalize(&mut self) -> GeometryResult<()> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Tolerance-based proportionality of components. The zero vector is
    /// parallel to everything.
    pub fn is_parallel_to(&self, other: &Self, eps: T) -> bool {
        for i in 0..N {
            let ui = self.0.coords[i];
            let vi = other.0.coords[i];
            if ui.abs() > eps {
                // first significant component fixes the scale factor
                let r = vi / ui;
                for j in 0..N {
                    if (other.0.coords[j] - self.0.coords[j] * r).abs() > eps {
                        return false;
                    }
                }
                return true;
            } else if vi.abs() > eps {
                return false;
            }
        }
        true
    }

    /// Componentwise equality within `eps`.
    pub fn approx_eq(&self, other: &Self, eps: T) -> bool {
        for i in 0..N {
            if (self.0.coords[i] - other.0.coords[i]).abs() >= eps {
                return false;
            }
        }
        true
    }
}

impl<T: Scalar> Vector<T, 2> {
    pub fn new(x: T, y: T) -> Self {
        Vector(Point::<T, 2>::new(x, y))
    }

    pub fn x(&self) -> T {
        self.0.coords[0]
    }

    pub fn y(&self) -> T {
        self.0.coords[1]
    }

    /// Scalar pseudo-cross `self.x * other.y - self.y * other.x`; zero iff
    /// the two directions are parallel.
    pub fn perp_dot(&self, other: &Self) -> T {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Counter-clockwise perpendicular.
    pub fn perp(&self) -> Self {
        Self::new(-self.y(), self.x())
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector(Point::<T, 3>::new(x, y, z))
    }

    pub fn x(&self) -> T {
        self.0.coords[0]
    }

    pub fn y(&self) -> T {
        self.0.coords[1]
    }

    pub fn z(&self) -> T {
        self.0.coords[2]
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0.coords[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Vector<T, N>;
    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        Vector(Point {
            coords: from_fn(|i| self.0.coords[i] + rhs.0.coords[i]),
        })
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        Vector(Point {
            coords: from_fn(|i| self.0.coords[i] - rhs.0.coords[i]),
        })
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;
    fn neg(self) -> Self::Output {
        Vector(Point {
            coords: from_fn(|i| -self.0.coords[i]),
        })
    }
}
