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

use crate::geometry::line::Line;
use crate::geometry::plane::Plane;
use crate::geometry::point::{Point2, Point3};
use crate::geometry::segment::{Segment, Segment2};
use crate::kernel::orientation::{Orientation, classify, left, orient2d};
use crate::kernel::predicates::are_collinear;
use crate::numeric::scalar::{Scalar, lxor};

/// Result of intersecting two coplanar segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<T: Scalar> {
    None,
    Point(Point2<T>),
    Overlapping(Segment2<T>),
}

/// Intersection of two unbounded 2D lines.
///
/// Full-line semantics: a solution behind either anchor is still a
/// solution. Parallel or coincident lines report `None`.
pub fn line_line_2<T: Scalar>(l1: &Line<T, 2>, l2: &Line<T, 2>, eps: T) -> Option<Point2<T>> {
    let d1 = *l1.direction();
    let d2 = *l2.direction();
    let denom = d1.perp_dot(&d2);
    if denom.abs() < eps {
        return None;
    }
    // a1 + t*d1 = a2 + s*d2, crossed with d2 to eliminate s
    let w = l1.anchor().vector_to(l2.anchor());
    let t = w.perp_dot(&d2) / denom;
    Some(l1.point_at(t))
}

/// Whether two segments have at least one common point, without computing
/// it: either some endpoint sits on the other segment, or the endpoints of
/// each segment straddle the other.
pub fn segments_intersect<T: Scalar>(s1: &Segment2<T>, s2: &Segment2<T>, eps: T) -> bool {
    let touching = |a: &Point2<T>, b: &Point2<T>, c: &Point2<T>| {
        matches!(
            classify(a, b, c, eps),
            Orientation::Between | Orientation::Origin | Orientation::Destination
        )
    };
    if touching(&s1.a, &s1.b, &s2.a)
        || touching(&s1.a, &s1.b, &s2.b)
        || touching(&s2.a, &s2.b, &s1.a)
        || touching(&s2.a, &s2.b, &s1.b)
    {
        return true;
    }
    lxor(left(&s1.a, &s1.b, &s2.a, eps), left(&s1.a, &s1.b, &s2.b, eps))
        && lxor(left(&s2.a, &s2.b, &s1.a, eps), left(&s2.a, &s2.b, &s1.b, eps))
}

/// Point-computing segment intersection via the normal-to-direction
/// projection: `None` for parallel or collinear segments even when they
/// overlap (use [`segment_segment_2`] to recover the overlap).
pub fn segment_intersection_point<T: Scalar>(
    s1: &Segment2<T>,
    s2: &Segment2<T>,
    eps: T,
) -> Option<Point2<T>> {
    let d1 = s1.direction();
    let n2 = s2.direction().perp();
    let denom = n2.dot(&d1);
    if denom.abs() < eps {
        return None;
    }
    let t = n2.dot(&s1.a.vector_to(&s2.a)) / denom;
    if t < -eps || t > T::one() + eps {
        return None;
    }
    let p = s1.a.add_vector(&d1.scale(t));
    // the hit must also fall inside the second segment's span
    let d2 = s2.direction();
    let u = d2.dot(&s2.a.vector_to(&p)) / d2.norm_squared();
    if u < -eps || u > T::one() + eps {
        return None;
    }
    Some(p)
}

/// Full segment-segment intersection, distinguishing a single crossing
/// point from a collinear overlap.
pub fn segment_segment_2<T: Scalar>(
    s1: &Segment2<T>,
    s2: &Segment2<T>,
    eps: T,
) -> SegmentIntersection<T> {
    let a = &s1.a;
    let b = &s1.b;
    let c = &s2.a;
    let d = &s2.b;

    let o1 = orient2d(a, b, c);
    let o2 = orient2d(a, b, d);
    let o3 = orient2d(c, d, a);
    let o4 = orient2d(c, d, b);

    let intersecting = o1 * o2 <= T::zero() && o3 * o4 <= T::zero();
    if !intersecting {
        return SegmentIntersection::None;
    }

    if o1.abs() > eps || o2.abs() > eps || o3.abs() > eps || o4.abs() > eps {
        // proper crossing
        match segment_intersection_point(s1, s2, eps) {
            Some(p) => return SegmentIntersection::Point(p),
            None => return SegmentIntersection::None,
        }
    }

    // all four areas vanish: the segments are collinear
    if are_collinear(a, b, c, eps) {
        let mut pts = [*a, *b, *c, *d];
        pts.sort_by(|p, q| {
            p.x()
                .partial_cmp(&q.x())
                .unwrap_or(Ordering::Equal)
                .then(p.y().partial_cmp(&q.y()).unwrap_or(Ordering::Equal))
        });
        if pts[1].distance_to(&pts[2]) < eps {
            return SegmentIntersection::Point(pts[1]);
        }
        return SegmentIntersection::Overlapping(Segment::new(&pts[1], &pts[2]));
    }

    SegmentIntersection::None
}

/// Line against segment: intersect the carrier line, then require the hit
/// to lie on the segment.
pub fn line_segment_2<T: Scalar>(
    line: &Line<T, 2>,
    seg: &Segment2<T>,
    eps: T,
) -> Option<Point2<T>> {
    let carrier = seg.carrier_line().ok()?;
    let p = line_line_2(line, &carrier, eps)?;
    if seg.is_point_on(&p, T::eps_medium().max(eps)) {
        Some(p)
    } else {
        None
    }
}

/// Intersection of a plane and a 3D line: solve `n . (a + t*d) = dist` for
/// `t`; `None` when the line is parallel to the plane.
pub fn plane_line<T: Scalar>(plane: &Plane<T>, line: &Line<T, 3>, eps: T) -> Option<Point3<T>> {
    let n = plane.normal();
    let denom = n.dot(line.direction());
    if denom.abs() < eps {
        return None;
    }
    let t = (plane.offset() - n.dot(&line.anchor().as_vector())) / denom;
    Some(line.point_at(t))
}

/// Intersection line of two planes.
///
/// The direction is the normalized cross product of the normals. The anchor
/// solves `{n1 . p = d1, n2 . p = d2}` within the span of the two (unit)
/// normals: writing `p = a*n1 + b*n2` and `k = n1 . n2`,
/// `a = (d1 - d2*k) / (1 - k^2)` and `b = (d2 - d1*k) / (1 - k^2)`.
pub fn plane_plane<T: Scalar>(p1: &Plane<T>, p2: &Plane<T>, eps: T) -> Option<Line<T, 3>> {
    let n1 = p1.normal();
    let n2 = p2.normal();
    let cross = n1.cross(n2);
    if cross.is_zero(eps) {
        return None;
    }
    let direction = cross.normalized().ok()?;
    let k = n1.dot(n2);
    let denom = T::one() - k * k;
    let a = (p1.offset() - p2.offset() * k) / denom;
    let b = (p2.offset() - p1.offset() * k) / denom;
    let anchor = Point3::new(
        a * n1.x() + b * n2.x(),
        a * n1.y() + b * n2.y(),
        a * n1.z() + b * n2.z(),
    );
    Line::new(anchor, direction).ok()
}
