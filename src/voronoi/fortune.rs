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

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::geometry::aabb::Aabb2;
use crate::geometry::error::GeometryResult;
use crate::geometry::point::Point2;
use crate::kernel::orientation::orient2d;
use crate::numeric::scalar::Scalar;
use crate::voronoi::{VoronoiCell, VoronoiDiagram, clip_cell, extract_edges, validate_sites};

/// One parabolic arc of the beach line. Arcs get a fresh id on every
/// structural change around them, which is what invalidates stale circle
/// events.
#[derive(Clone, Copy, Debug)]
struct Arc {
    site: usize,
    id: u64,
}

#[derive(Clone, Copy, Debug)]
enum EventKind {
    Site { site: usize },
    /// Scheduled disappearance of the arc `arc`; `sites` is the neighbor
    /// triple it was computed for, re-checked at pop time.
    Circle { arc: u64, sites: [usize; 3] },
}

#[derive(Clone, Copy, Debug)]
struct SweepEvent<T: Scalar> {
    y: T,
    x: T,
    kind: EventKind,
}

impl<T: Scalar> PartialEq for SweepEvent<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Scalar> Eq for SweepEvent<T> {}

impl<T: Scalar> PartialOrd for SweepEvent<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Scalar> Ord for SweepEvent<T> {
    // max-heap: highest y first, ties to the smaller x
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.partial_cmp(&other.y) {
            Some(Ordering::Equal) | None => {
                other.x.partial_cmp(&self.x).unwrap_or(Ordering::Equal)
            }
            Some(o) => o,
        }
    }
}

/// x of the breakpoint between the arcs of `left` and `right` when the
/// sweep line is at `sweep`. Solves the two-parabola equation
/// `l2 (x - x1)^2 - l1 (x - x2)^2 + l1 l2 (y1 - y2) = 0` and picks the root
/// that keeps `left` on the left.
fn breakpoint_x<T: Scalar>(left: &Point2<T>, right: &Point2<T>, sweep: T) -> T {
    let l1 = left.y() - sweep;
    let l2 = right.y() - sweep;
    let xm = (left.x() + right.x()) * T::of(0.5);
    if l1.abs() < T::eps_tight() && l2.abs() < T::eps_tight() {
        return xm;
    }
    if l1.abs() < T::eps_tight() {
        // a degenerate arc is a vertical ray at its site
        return left.x();
    }
    if l2.abs() < T::eps_tight() {
        return right.x();
    }
    if (l1 - l2).abs() < T::eps_tight() {
        return xm; // equal heights: the vertical bisector
    }
    let a = l2 - l1;
    let b = T::of(2.0) * (l1 * right.x() - l2 * left.x());
    let c = l2 * left.x() * left.x() - l1 * right.x() * right.x()
        + l1 * l2 * (left.y() - right.y());
    let disc = (b * b - T::of(4.0) * a * c).max(T::zero());
    (-b + disc.sqrt()) / (T::of(2.0) * a)
}

/// Circumcenter of three points, `None` when collinear.
fn circumcenter<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Option<Point2<T>> {
    let d = T::of(2.0)
        * (a.x() * (b.y() - c.y()) + b.x() * (c.y() - a.y()) + c.x() * (a.y() - b.y()));
    if d.abs() < T::eps_tight() {
        return None;
    }
    let a2 = a.x() * a.x() + a.y() * a.y();
    let b2 = b.x() * b.x() + b.y() * b.y();
    let c2 = c.x() * c.x() + c.y() * c.y();
    let ux = (a2 * (b.y() - c.y()) + b2 * (c.y() - a.y()) + c2 * (a.y() - b.y())) / d;
    let uy = (a2 * (c.x() - b.x()) + b2 * (a.x() - c.x()) + c2 * (b.x() - a.x())) / d;
    Some(Point2::new(ux, uy))
}

/// The index of the arc vertically above `x` at sweep height `sweep`.
fn arc_above<T: Scalar>(beach: &[Arc], sites: &[Point2<T>], x: T, sweep: T) -> usize {
    for i in 0..beach.len() - 1 {
        let bx = breakpoint_x(&sites[beach[i].site], &sites[beach[i + 1].site], sweep);
        if x < bx {
            return i;
        }
    }
    beach.len() - 1
}

/// Schedule a circle event for the arc at `idx` if its neighbor triple
/// converges below the sweep line.
fn check_circle<T: Scalar>(
    beach: &[Arc],
    sites: &[Point2<T>],
    heap: &mut BinaryHeap<SweepEvent<T>>,
    idx: usize,
    sweep: T,
) {
    if idx == 0 || idx + 1 >= beach.len() {
        return;
    }
    let l = beach[idx - 1];
    let m = beach[idx];
    let r = beach[idx + 1];
    if l.site == r.site {
        return;
    }
    let pl = &sites[l.site];
    let pm = &sites[m.site];
    let pr = &sites[r.site];
    // breakpoints converge only when the triple turns clockwise
    if orient2d(pl, pm, pr) >= -T::eps_tight() {
        return;
    }
    let Some(center) = circumcenter(pl, pm, pr) else {
        return;
    };
    let event_y = center.y() - center.distance_to(pm);
    if event_y > sweep + T::eps_medium() {
        return;
    }
    heap.push(SweepEvent {
        y: event_y,
        x: center.x(),
        kind: EventKind::Circle {
            arc: m.id,
            sites: [l.site, m.site, r.site],
        },
    });
}

fn ordered(i: usize, j: usize) -> (usize, usize) {
    if i < j { (i, j) } else { (j, i) }
}

/// Fortune's sweep reduced to what the cell assembly needs: which pairs of
/// sites share a Voronoi edge. Every breakpoint born at a site event and
/// every breakpoint pair merged by a circle event is such an adjacency.
pub(crate) fn site_adjacency<T: Scalar>(sites: &[Point2<T>]) -> Vec<(usize, usize)> {
    let mut heap: BinaryHeap<SweepEvent<T>> = BinaryHeap::new();
    for (i, s) in sites.iter().enumerate() {
        heap.push(SweepEvent {
            y: s.y(),
            x: s.x(),
            kind: EventKind::Site { site: i },
        });
    }

    let mut beach: Vec<Arc> = Vec::new();
    let mut next_id: u64 = 0;
    let mut fresh = move || {
        next_id += 1;
        next_id
    };
    let mut adj: HashSet<(usize, usize)> = HashSet::new();

    while let Some(ev) = heap.pop() {
        match ev.kind {
            EventKind::Site { site } => {
                if beach.is_empty() {
                    beach.push(Arc { site, id: fresh() });
                    continue;
                }
                let x = sites[site].x();
                let idx = arc_above(&beach, sites, x, ev.y);
                let old = beach[idx];
                adj.insert(ordered(old.site, site));

                if (sites[old.site].y() - ev.y).abs() < T::eps_medium() {
                    // the arc above is degenerate (its site is still on the
                    // sweep line): the new arc sits beside it, no split
                    let pos = if sites[old.site].x() < x { idx + 1 } else { idx };
                    beach.insert(pos, Arc { site, id: fresh() });
                    for m in [pos.saturating_sub(1), pos, pos + 1] {
                        check_circle(&beach, sites, &mut heap, m, ev.y);
                    }
                } else {
                    // split the covering arc into left piece, new arc,
                    // right piece; fresh ids retire its pending events
                    beach[idx] = Arc {
                        site: old.site,
                        id: fresh(),
                    };
                    beach.insert(idx + 1, Arc { site, id: fresh() });
                    beach.insert(
                        idx + 2,
                        Arc {
                            site: old.site,
                            id: fresh(),
                        },
                    );
                    check_circle(&beach, sites, &mut heap, idx, ev.y);
                    check_circle(&beach, sites, &mut heap, idx + 2, ev.y);
                }
            }
            EventKind::Circle { arc, sites: trip } => {
                let Some(idx) = beach.iter().position(|a| a.id == arc) else {
                    continue; // the arc is gone
                };
                if idx == 0 || idx + 1 >= beach.len() {
                    continue;
                }
                if beach[idx - 1].site != trip[0]
                    || beach[idx].site != trip[1]
                    || beach[idx + 1].site != trip[2]
                {
                    continue; // the neighborhood changed since scheduling
                }
                beach.remove(idx);
                beach[idx - 1].id = fresh();
                beach[idx].id = fresh();
                adj.insert(ordered(trip[0], trip[2]));
                check_circle(&beach, sites, &mut heap, idx - 1, ev.y);
                check_circle(&beach, sites, &mut heap, idx, ev.y);
            }
        }
    }

    let mut pairs: Vec<(usize, usize)> = adj.into_iter().collect();
    pairs.sort();
    pairs
}

/// Sweep-line Voronoi construction. The sweep determines which sites are
/// neighbors; each cell is then the intersection of the clip rectangle with
/// the bisector half-planes of its neighbors only, so the geometry matches
/// [`crate::voronoi::build_halfplane`] while the all-pairs scan is avoided.
pub fn build_fortune<T: Scalar>(
    sites: &[Point2<T>],
    clip: &Aabb2<T>,
    eps: T,
) -> GeometryResult<VoronoiDiagram<T>> {
    validate_sites(sites, eps)?;
    let n = sites.len();
    let pairs = site_adjacency(sites);
    let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, j) in pairs {
        neighbors[i].push(j);
        neighbors[j].push(i);
    }
    let cells: Vec<VoronoiCell<T>> = (0..n)
        .map(|i| VoronoiCell {
            site: sites[i],
            vertices: clip_cell(i, sites, neighbors[i].iter().copied(), clip, eps),
        })
        .collect();
    let edges = extract_edges(&cells, sites, clip, eps);
    Ok(VoronoiDiagram { cells, edges })
}
