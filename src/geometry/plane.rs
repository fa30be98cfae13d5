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

use crate::geometry::error::{GeometryError, GeometryResult};
use crate::geometry::point::Point3;
use crate::geometry::vector::Vector3;
use crate::numeric::scalar::Scalar;

/// A plane in Hesse-like form: unit normal `n` and offset `d` with
/// `n . p = d` for every point `p` on the plane. The normal is unit length
/// by construction.
#[derive(Clone, Copy, Debug)]
pub struct Plane<T: Scalar> {
    normal: Vector3<T>,
    d: T,
}

impl<T: Scalar> Plane<T> {
    /// Plane through `point` with the given (not necessarily unit) normal.
    pub fn from_normal_point(normal: &Vector3<T>, point: &Point3<T>) -> GeometryResult<Self> {
        let n = normal.normalized()?;
        let d = n.dot(&point.as_vector());
        Ok(Plane { normal: n, d })
    }

    /// Plane through three points; fails when they are collinear.
    pub fn from_points(p1: &Point3<T>, p2: &Point3<T>, p3: &Point3<T>) -> GeometryResult<Self> {
        let u = p1.vector_to(p2);
        let v = p1.vector_to(p3);
        let c = u.cross(&v);
        if c.is_zero(T::eps_tight()) {
            return Err(GeometryError::DegenerateGeometry {
                what: "collinear points cannot define a plane",
            });
        }
        let n = c.normalized()?;
        let d = n.dot(&p1.as_vector());
        Ok(Plane { normal: n, d })
    }

    pub fn normal(&self) -> &Vector3<T> {
        &self.normal
    }

    pub fn offset(&self) -> T {
        self.d
    }

    pub fn signed_distance(&self, p: &Point3<T>) -> T {
        self.normal.dot(&p.as_vector()) - self.d
    }

    pub fn contains(&self, p: &Point3<T>, eps: T) -> bool {
        self.signed_distance(p).abs() < eps
    }
}
