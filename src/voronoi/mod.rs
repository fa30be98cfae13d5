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

pub mod fortune;
pub mod halfplane;

pub use fortune::build_fortune;
pub use halfplane::build_halfplane;

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::geometry::aabb::Aabb2;
use crate::geometry::error::{GeometryError, GeometryResult};
use crate::geometry::point::Point2;
use crate::kernel::predicates::are_equal;
use crate::numeric::scalar::Scalar;
use crate::voronoi::halfplane::clip_halfplane;

/// One Voronoi region: the convex polygon (counter-clockwise) of all points
/// closer to `site` than to any other site, clipped to the diagram's
/// rectangle. `vertices` is empty when the whole region falls outside the
/// clip rectangle.
#[derive(Clone, Debug)]
pub struct VoronoiCell<T: Scalar> {
    pub site: Point2<T>,
    pub vertices: Vec<Point2<T>>,
}

/// A piece of the perpendicular bisector separating the cells of two sites.
#[derive(Clone, Debug)]
pub struct VoronoiEdge<T: Scalar> {
    pub site_a: usize,
    pub site_b: usize,
    pub endpoints: (Point2<T>, Point2<T>),
}

#[derive(Clone, Debug)]
pub struct VoronoiDiagram<T: Scalar> {
    pub cells: Vec<VoronoiCell<T>>,
    pub edges: Vec<VoronoiEdge<T>>,
}

/// Duplicate sites have no cell of their own; reject them up front.
pub(crate) fn validate_sites<T: Scalar>(sites: &[Point2<T>], eps: T) -> GeometryResult<()> {
    let mut sorted: Vec<&Point2<T>> = sites.iter().collect();
    sorted.sort_by(|p, q| {
        p.x()
            .partial_cmp(&q.x())
            .unwrap_or(Ordering::Equal)
            .then(p.y().partial_cmp(&q.y()).unwrap_or(Ordering::Equal))
    });
    for w in sorted.windows(2) {
        if are_equal(w[0], w[1], eps) {
            return Err(GeometryError::DegenerateGeometry {
                what: "duplicate voronoi sites",
            });
        }
    }
    Ok(())
}

/// Drop consecutive near-equal ring vertices (clipping can pinch corners).
pub(crate) fn dedupe_ring<T: Scalar>(poly: &mut Vec<Point2<T>>, eps: T) {
    if poly.len() < 2 {
        return;
    }
    let mut out: Vec<Point2<T>> = Vec::with_capacity(poly.len());
    for &p in poly.iter() {
        if let Some(last) = out.last() {
            if are_equal(last, &p, eps) {
                continue;
            }
        }
        out.push(p);
    }
    while out.len() >= 2 {
        let first = out[0];
        let last = out[out.len() - 1];
        if are_equal(&first, &last, eps) {
            out.pop();
        } else {
            break;
        }
    }
    *poly = out;
}

/// The cell of `site_idx` as the clip rectangle cut by the bisector
/// half-plane of every site in `others`.
pub(crate) fn clip_cell<T: Scalar>(
    site_idx: usize,
    sites: &[Point2<T>],
    others: impl Iterator<Item = usize>,
    clip: &Aabb2<T>,
    eps: T,
) -> Vec<Point2<T>> {
    let mut poly: Vec<Point2<T>> = clip.corners().to_vec();
    for j in others {
        if j == site_idx {
            continue;
        }
        poly = clip_halfplane(&poly, &sites[site_idx], &sites[j]);
        if poly.len() < 3 {
            poly.clear();
            break;
        }
    }
    dedupe_ring(&mut poly, eps);
    if poly.len() < 3 {
        poly.clear();
    }
    poly
}

fn on_clip_border<T: Scalar>(v: &Point2<T>, w: &Point2<T>, clip: &Aabb2<T>, eps: T) -> bool {
    let sides = [
        (v.x(), w.x(), clip.min().x()),
        (v.x(), w.x(), clip.max().x()),
        (v.y(), w.y(), clip.min().y()),
        (v.y(), w.y(), clip.max().y()),
    ];
    sides
        .iter()
        .any(|&(a, b, s)| (a - s).abs() < eps && (b - s).abs() < eps)
}

/// Recover the bisector edges from the assembled cells: a cell edge that is
/// not on the clip border and whose endpoints are equidistant to a second
/// site separates the two cells.
pub(crate) fn extract_edges<T: Scalar>(
    cells: &[VoronoiCell<T>],
    sites: &[Point2<T>],
    clip: &Aabb2<T>,
    eps: T,
) -> Vec<VoronoiEdge<T>> {
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut out = Vec::new();
    for (i, cell) in cells.iter().enumerate() {
        let m = cell.vertices.len();
        for k in 0..m {
            let v = cell.vertices[k];
            let w = cell.vertices[(k + 1) % m];
            if on_clip_border(&v, &w, clip, eps) {
                continue;
            }
            for (j, sj) in sites.iter().enumerate() {
                if j == i {
                    continue;
                }
                let dvi = v.distance_to(&sites[i]);
                let dwi = w.distance_to(&sites[i]);
                let tol = eps * (T::one() + dvi + dwi);
                if (dvi - v.distance_to(sj)).abs() <= tol
                    && (dwi - w.distance_to(sj)).abs() <= tol
                {
                    let key = (i.min(j), i.max(j));
                    if seen.insert(key) {
                        out.push(VoronoiEdge {
                            site_a: key.0,
                            site_b: key.1,
                            endpoints: (v, w),
                        });
                    }
                    break;
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::aabb::Aabb;

    #[test]
    fn duplicate_sites_are_rejected() {
        let sites = [
            Point2::new(0.2, 0.2),
            Point2::new(0.8, 0.8),
            Point2::new(0.2, 0.2),
        ];
        assert!(validate_sites(&sites, 1e-9).is_err());
    }

    #[test]
    fn dedupe_ring_removes_pinched_corners() {
        let mut ring = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
        ];
        dedupe_ring(&mut ring, 1e-9);
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn clip_cell_of_two_sites_is_a_half_rectangle() {
        let sites = [Point2::new(0.25, 0.5), Point2::new(0.75, 0.5)];
        let clip = Aabb::from_points(&Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0));
        let cell = clip_cell(0, &sites, 0..sites.len(), &clip, 1e-9);
        assert_eq!(cell.len(), 4);
        for v in &cell {
            assert!(v.x() <= 0.5 + 1e-9);
        }
    }
}
