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
use crate::geometry::point::Point;
use crate::geometry::vector::Vector;
use crate::numeric::scalar::Scalar;

/// An unbounded line: anchor point plus direction. The direction is non-zero
/// by construction.
#[derive(Clone, Copy, Debug)]
pub struct Line<T: Scalar, const N: usize> {
    anchor: Point<T, N>,
    direction: Vector<T, N>,
}

pub type Line2<T> = Line<T, 2>;
pub type Line3<T> = Line<T, 3>;

impl<T: Scalar, const N: usize> Line<T, N> {
    pub fn new(anchor: Point<T, N>, direction: Vector<T, N>) -> GeometryResult<Self> {
        if direction.is_zero(T::eps_tight()) {
            return Err(GeometryError::DegenerateGeometry {
                what: "line direction must be non-zero",
            });
        }
        Ok(Line { anchor, direction })
    }

    /// The line through `a` and `b`, directed from `a` to `b`.
    pub fn through(a: &Point<T, N>, b: &Point<T, N>) -> GeometryResult<Self> {
        Line::new(*a, a.vector_to(b))
    }

    pub fn anchor(&self) -> &Point<T, N> {
        &self.anchor
    }

    pub fn direction(&self) -> &Vector<T, N> {
        &self.direction
    }

    pub fn point_at(&self, t: T) -> Point<T, N> {
        self.anchor.add_vector(&self.direction.scale(t))
    }

    /// Same point set: parallel directions and an anchor offset that is
    /// itself parallel to the direction. Two lines with opposite directions
    /// are still coincident.
    pub fn coincident(&self, other: &Self, eps: T) -> bool {
        if !self.direction.is_parallel_to(&other.direction, eps) {
            return false;
        }
        let w = self.anchor.vector_to(&other.anchor);
        w.is_zero(eps) || w.is_parallel_to(&self.direction, eps)
    }

    /// Whether `p` lies on the line, within `eps`.
    pub fn contains(&self, p: &Point<T, N>, eps: T) -> bool {
        let w = self.anchor.vector_to(p);
        w.is_zero(eps) || w.is_parallel_to(&self.direction, eps)
    }
}
