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
use std::collections::HashSet;

use crate::geometry::error::{GeometryError, GeometryResult};
use crate::geometry::point::Point2;
use crate::geometry::segment::{Segment, Segment2};
use crate::kernel::orientation::orient2d;
use crate::numeric::scalar::Scalar;

/// Sweep classification of a polygon vertex. The polygon is assumed
/// counter-clockwise and the sweep runs top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexKind {
    /// Both neighbors below, convex corner: a component opens here.
    Start,
    /// Both neighbors above, convex corner: a component closes here.
    End,
    /// Both neighbors below, reflex corner: needs a diagonal upward.
    Split,
    /// Both neighbors above, reflex corner: needs a diagonal downward.
    Merge,
    Regular,
}

/// Sweep order: `p` comes before `q` when it is higher, or at the same
/// height further left.
pub(crate) fn above<T: Scalar>(p: &Point2<T>, q: &Point2<T>) -> bool {
    p.y() > q.y() || (p.y() == q.y() && p.x() < q.x())
}

pub fn classify_vertex<T: Scalar>(pts: &[Point2<T>], i: usize, eps: T) -> VertexKind {
    let n = pts.len();
    let prev = &pts[(i + n - 1) % n];
    let cur = &pts[i];
    let next = &pts[(i + 1) % n];
    let prev_below = above(cur, prev);
    let next_below = above(cur, next);
    let turn = orient2d(prev, cur, next);
    if prev_below && next_below {
        if turn > eps {
            VertexKind::Start
        } else {
            VertexKind::Split
        }
    } else if !prev_below && !next_below {
        if turn > eps {
            VertexKind::End
        } else {
            VertexKind::Merge
        }
    } else {
        VertexKind::Regular
    }
}

/// An edge of the polygon currently crossed by the sweep line, with the
/// helper vertex a split vertex would connect to.
struct StatusEdge<T: Scalar> {
    edge: usize,
    helper: usize,
    helper_kind: VertexKind,
    seg: Segment2<T>,
}

fn edge_x<T: Scalar>(e: &StatusEdge<T>, y: T) -> T {
    // the x(y) lookup fails only for horizontal edges; their left endpoint
    // stands in for them
    e.seg.x_at_y(y).unwrap_or_else(|| e.seg.a.x().min(e.seg.b.x()))
}

/// The status edge directly left of `p`.
fn edge_left_of<T: Scalar>(status: &[StatusEdge<T>], p: &Point2<T>) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (k, e) in status.iter().enumerate() {
        let ex = edge_x(e, p.y());
        if ex <= p.x() {
            match best {
                Some((_, bx)) if ex <= bx => {}
                _ => best = Some((k, ex)),
            }
        }
    }
    best.map(|(k, _)| k)
}

fn remove_edge<T: Scalar>(status: &mut Vec<StatusEdge<T>>, edge: usize) {
    if let Some(k) = status.iter().position(|e| e.edge == edge) {
        status.swap_remove(k);
    }
}

/// Diagonal to the stored helper when that helper is a merge vertex.
fn fix_up<T: Scalar>(
    diagonals: &mut Vec<(usize, usize)>,
    status: &[StatusEdge<T>],
    edge: usize,
    v: usize,
) {
    if let Some(e) = status.iter().find(|e| e.edge == edge) {
        if e.helper_kind == VertexKind::Merge {
            diagonals.push((v, e.helper));
        }
    }
}

/// Decompose a simple counter-clockwise polygon into y-monotone pieces.
///
/// Downward sweep over the vertices; split and merge vertices are connected
/// to helpers with diagonals, and the vertex cycle is then cut along the
/// (pairwise non-crossing) diagonals. Each returned piece is a cycle of
/// indices into `pts`.
pub fn partition_monotone<T: Scalar>(
    pts: &[Point2<T>],
    eps: T,
) -> GeometryResult<Vec<Vec<usize>>> {
    let n = pts.len();
    if n < 3 {
        return Err(GeometryError::DegenerateGeometry {
            what: "polygon needs at least three vertices",
        });
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| {
        if above(&pts[i], &pts[j]) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    });

    let push_edge = |status: &mut Vec<StatusEdge<T>>, i: usize, kind: VertexKind| {
        status.push(StatusEdge {
            edge: i,
            helper: i,
            helper_kind: kind,
            seg: Segment::new(&pts[i], &pts[(i + 1) % n]),
        });
    };

    let mut status: Vec<StatusEdge<T>> = Vec::new();
    let mut diagonals: Vec<(usize, usize)> = Vec::new();

    for &i in &order {
        let kind = classify_vertex(pts, i, eps);
        let prev_edge = (i + n - 1) % n;
        match kind {
            VertexKind::Start => push_edge(&mut status, i, VertexKind::Start),
            VertexKind::End => {
                fix_up(&mut diagonals, &status, prev_edge, i);
                remove_edge(&mut status, prev_edge);
            }
            VertexKind::Split => {
                if let Some(k) = edge_left_of(&status, &pts[i]) {
                    diagonals.push((i, status[k].helper));
                    status[k].helper = i;
                    status[k].helper_kind = VertexKind::Split;
                }
                push_edge(&mut status, i, VertexKind::Split);
            }
            VertexKind::Merge => {
                fix_up(&mut diagonals, &status, prev_edge, i);
                remove_edge(&mut status, prev_edge);
                if let Some(k) = edge_left_of(&status, &pts[i]) {
                    if status[k].helper_kind == VertexKind::Merge {
                        diagonals.push((i, status[k].helper));
                    }
                    status[k].helper = i;
                    status[k].helper_kind = VertexKind::Merge;
                }
            }
            VertexKind::Regular => {
                if above(&pts[prev_edge], &pts[i]) {
                    // interior lies to the right: the chain descends here
                    fix_up(&mut diagonals, &status, prev_edge, i);
                    remove_edge(&mut status, prev_edge);
                    push_edge(&mut status, i, VertexKind::Regular);
                } else if let Some(k) = edge_left_of(&status, &pts[i]) {
                    if status[k].helper_kind == VertexKind::Merge {
                        diagonals.push((i, status[k].helper));
                    }
                    status[k].helper = i;
                    status[k].helper_kind = VertexKind::Regular;
                }
            }
        }
    }

    // normalize and drop accidental duplicates before cutting
    let mut seen = HashSet::new();
    diagonals.retain(|&(a, b)| a != b && seen.insert((a.min(b), a.max(b))));

    Ok(split_cycle(n, &diagonals))
}

/// Cut the cycle `0..n` along non-crossing diagonals, with an explicit
/// stack instead of recursion.
fn split_cycle(n: usize, diagonals: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let full: Vec<usize> = (0..n).collect();
    let mut out = Vec::with_capacity(diagonals.len() + 1);
    let mut stack: Vec<(Vec<usize>, Vec<(usize, usize)>)> = vec![(full, diagonals.to_vec())];

    while let Some((cycle, mut diags)) = stack.pop() {
        let Some((a, b)) = diags.pop() else {
            out.push(cycle);
            continue;
        };
        let (Some(pa), Some(pb)) = (
            cycle.iter().position(|&v| v == a),
            cycle.iter().position(|&v| v == b),
        ) else {
            // a diagonal that lost its cycle; nothing to cut
            stack.push((cycle, diags));
            continue;
        };
        let (pa, pb) = if pa < pb { (pa, pb) } else { (pb, pa) };

        let side1: Vec<usize> = cycle[pa..=pb].to_vec();
        let mut side2: Vec<usize> = cycle[pb..].to_vec();
        side2.extend_from_slice(&cycle[..=pa]);

        let set1: HashSet<usize> = side1.iter().copied().collect();
        let mut d1 = Vec::new();
        let mut d2 = Vec::new();
        for d in diags {
            if set1.contains(&d.0) && set1.contains(&d.1) {
                d1.push(d);
            } else {
                d2.push(d);
            }
        }
        stack.push((side1, d1));
        stack.push((side2, d2));
    }
    out
}
