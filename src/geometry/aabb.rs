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

use crate::geometry::point::{Point, Point2};
use crate::numeric::scalar::Scalar;

/// An axis-aligned bounding box in N dimensions. `min[i] <= max[i]` holds on
/// every axis because the only way to build one is from two corner points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb<T: Scalar, const N: usize> {
    min: Point<T, N>,
    max: Point<T, N>,
}

pub type Aabb2<T> = Aabb<T, 2>;

impl<T: Scalar, const N: usize> Aabb<T, N> {
    /// The smallest box containing both points.
    pub fn from_points(a: &Point<T, N>, b: &Point<T, N>) -> Self {
        Aabb {
            min: Point {
                coords: from_fn(|i| a.coords[i].min(b.coords[i])),
            },
            max: Point {
                coords: from_fn(|i| a.coords[i].max(b.coords[i])),
            },
        }
    }

    pub fn min(&self) -> &Point<T, N> {
        &self.min
    }

    pub fn max(&self) -> &Point<T, N> {
        &self.max
    }

    /// Closed containment test.
    pub fn contains(&self, p: &Point<T, N>) -> bool {
        for i in 0..N {
            if p.coords[i] < self.min.coords[i] || p.coords[i] > self.max.coords[i] {
                return false;
            }
        }
        true
    }

    pub fn center(&self) -> Point<T, N> {
        self.min.midpoint(&self.max)
    }

    pub fn union(&self, other: &Self) -> Self {
        Aabb {
            min: Point {
                coords: from_fn(|i| self.min.coords[i].min(other.min.coords[i])),
            },
            max: Point {
                coords: from_fn(|i| self.max.coords[i].max(other.max.coords[i])),
            },
        }
    }

    pub fn intersects(&self, other: &Self) -> bool {
        for i in 0..N {
            if self.max.coords[i] < other.min.coords[i]
                || other.max.coords[i] < self.min.coords[i]
            {
                return false;
            }
        }
        true
    }
}

impl<T: Scalar> Aabb<T, 2> {
    pub fn width(&self) -> T {
        self.max.x() - self.min.x()
    }

    pub fn height(&self) -> T {
        self.max.y() - self.min.y()
    }

    /// Corners in counter-clockwise order starting at the minimum corner.
    pub fn corners(&self) -> [Point2<T>; 4] {
        [
            Point2::new(self.min.x(), self.min.y()),
            Point2::new(self.max.x(), self.min.y()),
            Point2::new(self.max.x(), self.max.y()),
            Point2::new(self.min.x(), self.max.y()),
        ]
    }
}
