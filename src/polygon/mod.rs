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

pub mod monotone;
pub mod triangulate;

pub use monotone::{VertexKind, classify_vertex, partition_monotone};
pub use triangulate::{Triangle, triangulate, triangulate_ear_clipping};

use crate::geometry::error::{GeometryError, GeometryResult};
use crate::geometry::point::Point2;
use crate::numeric::scalar::Scalar;

#[derive(Clone, Copy, Debug)]
struct VertexNode<T: Scalar> {
    point: Point2<T>,
    next: usize,
    prev: usize,
}

/// A polygon boundary as a circular doubly-linked vertex list.
///
/// Vertices live in an arena and link to each other by index, so the whole
/// boundary is dropped together and the links can never dangle. Following
/// `next` as many times as there are vertices returns to the start.
#[derive(Clone, Debug)]
pub struct Polygon<T: Scalar> {
    verts: Vec<VertexNode<T>>,
    head: usize,
    last: usize,
}

impl<T: Scalar> Polygon<T> {
    /// Wire the cycle in one pass over an ordered vertex list.
    pub fn from_points(points: &[Point2<T>]) -> GeometryResult<Self> {
        if points.is_empty() {
            return Err(GeometryError::DegenerateGeometry {
                what: "polygon needs at least one vertex",
            });
        }
        let n = points.len();
        let verts = points
            .iter()
            .enumerate()
            .map(|(i, p)| VertexNode {
                point: *p,
                next: (i + 1) % n,
                prev: (i + n - 1) % n,
            })
            .collect();
        Ok(Polygon {
            verts,
            head: 0,
            last: n - 1,
        })
    }

    /// Splice a new vertex right after the last-inserted one.
    pub fn insert(&mut self, p: Point2<T>) {
        let idx = self.verts.len();
        let after = self.last;
        let before = self.verts[after].next;
        self.verts.push(VertexNode {
            point: p,
            next: before,
            prev: after,
        });
        self.verts[after].next = idx;
        self.verts[before].prev = idx;
        self.last = idx;
    }

    pub fn len(&self) -> usize {
        self.verts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Vertices in boundary order, starting at the first-inserted one.
    pub fn points(&self) -> Vec<Point2<T>> {
        let mut out = Vec::with_capacity(self.verts.len());
        let mut cur = self.head;
        for _ in 0..self.verts.len() {
            out.push(self.verts[cur].point);
            cur = self.verts[cur].next;
        }
        out
    }

    /// Shoelace area; positive for counter-clockwise boundaries.
    pub fn signed_area(&self) -> T {
        signed_area_of(&self.points())
    }

    pub fn is_ccw(&self) -> bool {
        self.signed_area() > T::zero()
    }
}

pub(crate) fn signed_area_of<T: Scalar>(pts: &[Point2<T>]) -> T {
    let n = pts.len();
    let mut acc = T::zero();
    for i in 0..n {
        let p = &pts[i];
        let q = &pts[(i + 1) % n];
        acc = acc + (p.x() * q.y() - q.x() * p.y());
    }
    acc * T::of(0.5)
}
