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

use crate::geometry::aabb::Aabb2;
use crate::geometry::error::GeometryResult;
use crate::geometry::point::Point2;
use crate::numeric::scalar::Scalar;
use crate::voronoi::{VoronoiCell, VoronoiDiagram, clip_cell, extract_edges, validate_sites};

/// Cut `poly` down to the half-plane of points closer to `keep` than to
/// `other` (Sutherland-Hodgman against the perpendicular bisector).
pub(crate) fn clip_halfplane<T: Scalar>(
    poly: &[Point2<T>],
    keep: &Point2<T>,
    other: &Point2<T>,
) -> Vec<Point2<T>> {
    let mid = keep.midpoint(other);
    let n = keep.vector_to(other);
    let f = |p: &Point2<T>| mid.vector_to(p).dot(&n);

    let len = poly.len();
    let mut out = Vec::with_capacity(len + 1);
    for k in 0..len {
        let cur = poly[k];
        let nxt = poly[(k + 1) % len];
        let fc = f(&cur);
        let fnx = f(&nxt);
        if fc <= T::zero() {
            out.push(cur);
        }
        if (fc < T::zero() && fnx > T::zero()) || (fc > T::zero() && fnx < T::zero()) {
            let t = fc / (fc - fnx);
            out.push(Point2::new(
                cur.x() + t * (nxt.x() - cur.x()),
                cur.y() + t * (nxt.y() - cur.y()),
            ));
        }
    }
    out
}

/// Naive Voronoi construction: every cell is the clip rectangle cut by the
/// bisector half-plane of every other site. Quadratic in the number of
/// sites, and the reference the sweep construction is checked against.
pub fn build_halfplane<T: Scalar>(
    sites: &[Point2<T>],
    clip: &Aabb2<T>,
    eps: T,
) -> GeometryResult<VoronoiDiagram<T>> {
    validate_sites(sites, eps)?;
    let cells: Vec<VoronoiCell<T>> = (0..sites.len())
        .map(|i| VoronoiCell {
            site: sites[i],
            vertices: clip_cell(i, sites, 0..sites.len(), clip, eps),
        })
        .collect();
    let edges = extract_edges(&cells, sites, clip, eps);
    Ok(VoronoiDiagram { cells, edges })
}
