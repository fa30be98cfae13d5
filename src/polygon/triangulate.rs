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

use crate::geometry::error::{GeometryError, GeometryResult};
use crate::geometry::point::Point2;
use crate::kernel::orientation::orient2d;
use crate::kernel::predicates::point_in_triangle;
use crate::numeric::scalar::Scalar;
use crate::polygon::monotone::{above, partition_monotone};
use crate::polygon::{Polygon, signed_area_of};

/// A triangle of a polygon triangulation, counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle<T: Scalar> {
    pub a: Point2<T>,
    pub b: Point2<T>,
    pub c: Point2<T>,
}

impl<T: Scalar> Triangle<T> {
    pub fn new(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Self {
        Triangle { a, b, c }
    }

    pub fn area(&self) -> T {
        orient2d(&self.a, &self.b, &self.c).abs() * T::of(0.5)
    }

    pub fn contains_point(&self, p: &Point2<T>, eps: T) -> bool {
        point_in_triangle(p, &self.a, &self.b, &self.c, eps)
    }
}

fn oriented<T: Scalar>(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Triangle<T> {
    if orient2d(&a, &b, &c) < T::zero() {
        Triangle::new(a, c, b)
    } else {
        Triangle::new(a, b, c)
    }
}

/// Ear clipping: repeatedly cut off a convex corner whose triangle contains
/// no other vertex. Quadratic, but free of any sweep machinery; a simple
/// n-gon yields exactly n - 2 triangles.
pub fn triangulate_ear_clipping<T: Scalar>(
    poly: &Polygon<T>,
    eps: T,
) -> GeometryResult<Vec<Triangle<T>>> {
    let mut pts = poly.points();
    if pts.len() < 3 {
        return Err(GeometryError::DegenerateGeometry {
            what: "polygon needs at least three vertices",
        });
    }
    if signed_area_of(&pts) < T::zero() {
        pts.reverse();
    }

    let mut out = Vec::with_capacity(pts.len() - 2);
    while pts.len() > 3 {
        let m = pts.len();
        let mut clipped = false;
        for i in 0..m {
            let prev = pts[(i + m - 1) % m];
            let cur = pts[i];
            let next = pts[(i + 1) % m];
            if orient2d(&prev, &cur, &next) <= eps {
                continue; // reflex or flat corner, not an ear
            }
            let mut blocked = false;
            for (k, p) in pts.iter().enumerate() {
                if k == i || k == (i + m - 1) % m || k == (i + 1) % m {
                    continue;
                }
                if point_in_triangle(p, &prev, &cur, &next, eps) {
                    blocked = true;
                    break;
                }
            }
            if !blocked {
                out.push(Triangle::new(prev, cur, next));
                pts.remove(i);
                clipped = true;
                break;
            }
        }
        if !clipped {
            return Err(GeometryError::DegenerateGeometry {
                what: "no ear found; polygon may be self-intersecting",
            });
        }
    }
    out.push(oriented(pts[0], pts[1], pts[2]));
    Ok(out)
}

/// Triangulate one y-monotone cycle by merging its two chains with a stack.
fn triangulate_monotone_cycle<T: Scalar>(
    pts: &[Point2<T>],
    cycle: &[usize],
    eps: T,
    out: &mut Vec<Triangle<T>>,
) {
    let k = cycle.len();
    if k < 3 {
        return;
    }
    let tri = |i: usize, j: usize, l: usize| {
        oriented(pts[cycle[i]], pts[cycle[j]], pts[cycle[l]])
    };
    if k == 3 {
        out.push(tri(0, 1, 2));
        return;
    }

    // positions in sweep order
    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by(|&a, &b| {
        if above(&pts[cycle[a]], &pts[cycle[b]]) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    });
    let top = order[0];
    let bottom = order[k - 1];

    // the chain walked forward from top to bottom; the rest is the other one
    let mut first_chain = vec![false; k];
    let mut p = (top + 1) % k;
    while p != bottom {
        first_chain[p] = true;
        p = (p + 1) % k;
    }

    let mut stack: Vec<usize> = vec![order[0], order[1]];
    for j in 2..k - 1 {
        let vj = order[j];
        let Some(&stack_top) = stack.last() else {
            break;
        };
        if first_chain[vj] != first_chain[stack_top] {
            // opposite chain: fan out to the whole stack
            while stack.len() > 1 {
                let Some(v1) = stack.pop() else {
                    break;
                };
                if let Some(&v2) = stack.last() {
                    out.push(tri(vj, v1, v2));
                }
            }
            stack.pop();
            stack.push(order[j - 1]);
            stack.push(vj);
        } else {
            // same chain: cut off corners while the diagonal stays inside
            let Some(mut v_last) = stack.pop() else {
                break;
            };
            while let Some(&v_top) = stack.last() {
                let turn = orient2d(
                    &pts[cycle[v_top]],
                    &pts[cycle[v_last]],
                    &pts[cycle[vj]],
                );
                let inside = if first_chain[vj] {
                    turn > eps
                } else {
                    turn < -eps
                };
                if !inside {
                    break;
                }
                out.push(tri(vj, v_last, v_top));
                v_last = v_top;
                stack.pop();
            }
            stack.push(v_last);
            stack.push(vj);
        }
    }

    // the bottom vertex closes whatever remains on the stack
    let vj = order[k - 1];
    if let Some(mut v_last) = stack.pop() {
        while let Some(v_top) = stack.pop() {
            out.push(tri(vj, v_last, v_top));
            v_last = v_top;
        }
    }
}

/// Triangulate a simple polygon: monotone partition first, then a
/// linear-time chain merge per piece. Exactly n - 2 triangles using only
/// the input vertices.
pub fn triangulate<T: Scalar>(poly: &Polygon<T>, eps: T) -> GeometryResult<Vec<Triangle<T>>> {
    let mut pts = poly.points();
    if pts.len() < 3 {
        return Err(GeometryError::DegenerateGeometry {
            what: "polygon needs at least three vertices",
        });
    }
    if signed_area_of(&pts) < T::zero() {
        pts.reverse();
    }
    let pieces = partition_monotone(&pts, eps)?;
    let mut out = Vec::with_capacity(pts.len() - 2);
    for cycle in &pieces {
        triangulate_monotone_cycle(&pts, cycle, eps, &mut out);
    }
    Ok(out)
}
