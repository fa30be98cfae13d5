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

use crate::geometry::error::GeometryResult;
use crate::geometry::line::Line;
use crate::geometry::point::Point;
use crate::geometry::vector::Vector;
use crate::numeric::scalar::Scalar;

/// A bounded piece of a line between two endpoints.
///
/// The segment owns copies of its endpoints: mutating the points it was
/// built from is not reflected here. Callers that need endpoints shared
/// across several segments keep the points in their own storage and rebuild
/// segments from them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<T: Scalar, const N: usize> {
    pub a: Point<T, N>,
    pub b: Point<T, N>,
}

pub type Segment2<T> = Segment<T, 2>;
pub type Segment3<T> = Segment<T, 3>;

impl<T: Scalar, const N: usize> Segment<T, N> {
    pub fn new(a: &Point<T, N>, b: &Point<T, N>) -> Self {
        Segment { a: *a, b: *b }
    }

    pub fn length(&self) -> T {
        self.a.distance_to(&self.b)
    }

    pub fn midpoint(&self) -> Point<T, N> {
        self.a.midpoint(&self.b)
    }

    pub fn direction(&self) -> Vector<T, N> {
        self.a.vector_to(&self.b)
    }

    pub fn inverse(&self) -> Self {
        Segment::new(&self.b, &self.a)
    }

    /// The unbounded line through both endpoints; fails for a degenerate
    /// (zero-length) segment.
    pub fn carrier_line(&self) -> GeometryResult<Line<T, N>> {
        Line::through(&self.a, &self.b)
    }

    /// Whether `p` lies on the segment: a single parameter `t` in `[0, 1]`
    /// must explain every coordinate.
    pub fn is_point_on(&self, p: &Point<T, N>, eps: T) -> bool {
        let mut t_found: Option<T> = None;
        for i in 0..N {
            let da = p.coords[i] - self.a.coords[i];
            let db = self.b.coords[i] - self.a.coords[i];
            if db.abs() > eps {
                let t = da / db;
                match t_found {
                    Some(prev) if (t - prev).abs() > eps => return false,
                    Some(_) => {}
                    None => t_found = Some(t),
                }
            } else if da.abs() > eps {
                return false;
            }
        }
        match t_found {
            Some(t) => t >= -eps && t <= T::one() + eps,
            // a == b within eps; degenerate segment contains only itself
            None => true,
        }
    }
}

impl<T: Scalar> Segment<T, 2> {
    /// Parametric lookup of `x` for a given `y`. `None` when the segment is
    /// horizontal (no unique answer) or `y` is outside the spanned range.
    pub fn x_at_y(&self, y: T) -> Option<T> {
        let dy = self.b.y() - self.a.y();
        if dy.abs() < T::eps_tight() {
            return None;
        }
        let t = (y - self.a.y()) / dy;
        if t < -T::eps_medium() || t > T::one() + T::eps_medium() {
            return None;
        }
        Some(self.a.x() + t * (self.b.x() - self.a.x()))
    }

    /// Parametric lookup of `y` for a given `x`; mirror of
    /// [`Segment::x_at_y`].
    pub fn y_at_x(&self, x: T) -> Option<T> {
        let dx = self.b.x() - self.a.x();
        if dx.abs() < T::eps_tight() {
            return None;
        }
        let t = (x - self.a.x()) / dx;
        if t < -T::eps_medium() || t > T::one() + T::eps_medium() {
            return None;
        }
        Some(self.a.y() + t * (self.b.y() - self.a.y()))
    }
}
