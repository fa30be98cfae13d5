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

use crate::geometry::point::{Point, Point2};
use crate::geometry::segment::Segment;
use crate::kernel::orientation::orient2d;
use crate::numeric::scalar::Scalar;

/// Componentwise tolerance equality.
pub fn are_equal<T: Scalar, const N: usize>(p1: &Point<T, N>, p2: &Point<T, N>, eps: T) -> bool {
    for i in 0..N {
        if (p1.coords[i] - p2.coords[i]).abs() >= eps {
            return false;
        }
    }
    true
}

/// Whether `a`, `b`, `c` lie on one line, by proportionality of the edge
/// vectors.
pub fn are_collinear<T: Scalar, const N: usize>(
    a: &Point<T, N>,
    b: &Point<T, N>,
    c: &Point<T, N>,
    eps: T,
) -> bool {
    for i in 0..N {
        let ui = b.coords[i] - a.coords[i];
        let vi = c.coords[i] - a.coords[i];

        if ui.abs() > eps {
            // first non-zero component gives the candidate scale factor
            let r = vi / ui;
            for j in (i + 1)..N {
                let uj = b.coords[j] - a.coords[j];
                let vj = c.coords[j] - a.coords[j];
                if (vj - uj * r).abs() > eps {
                    return false;
                }
            }
            return true;
        } else if vi.abs() > eps {
            return false;
        }
    }
    // a and b coincide; collinear iff c coincides too
    true
}

/// Whether `p` lies on `seg` (collinear and inside the coordinate range on
/// every axis).
pub fn is_point_on_segment<T: Scalar, const N: usize>(
    p: &Point<T, N>,
    seg: &Segment<T, N>,
    eps: T,
) -> bool {
    if !are_collinear(p, &seg.a, &seg.b, eps) {
        return false;
    }
    for i in 0..N {
        let lo = seg.a.coords[i].min(seg.b.coords[i]) - eps;
        let hi = seg.a.coords[i].max(seg.b.coords[i]) + eps;
        if p.coords[i] < lo || p.coords[i] > hi {
            return false;
        }
    }
    true
}

/// Whether `p` lies inside (or on the border of) triangle `(a, b, c)`: the
/// three signed areas must not disagree in sign beyond tolerance.
pub fn point_in_triangle<T: Scalar>(
    p: &Point2<T>,
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    eps: T,
) -> bool {
    let d1 = orient2d(a, b, p);
    let d2 = orient2d(b, c, p);
    let d3 = orient2d(c, a, p);
    let has_neg = d1 < -eps || d2 < -eps || d3 < -eps;
    let has_pos = d1 > eps || d2 > eps || d3 > eps;
    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point3;

    const EPS: f64 = 1e-9;

    #[test]
    fn equality_within_tolerance() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(1.0 + 1e-10, 2.0 - 1e-10);
        assert!(are_equal(&a, &b, EPS));
        assert!(!are_equal(&a, &Point2::new(1.1, 2.0), EPS));
    }

    #[test]
    fn collinearity_in_three_dimensions() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 2.0, 3.0);
        let c = Point3::new(2.0, 4.0, 6.0);
        let d = Point3::new(2.0, 4.0, 6.5);
        assert!(are_collinear(&a, &b, &c, EPS));
        assert!(!are_collinear(&a, &b, &d, EPS));
    }

    #[test]
    fn point_on_segment_requires_range() {
        let seg = Segment::new(&Point2::new(0.0, 0.0), &Point2::new(2.0, 2.0));
        assert!(is_point_on_segment(&Point2::new(1.0, 1.0), &seg, EPS));
        // collinear but past the end
        assert!(!is_point_on_segment(&Point2::new(3.0, 3.0), &seg, EPS));
    }

    #[test]
    fn triangle_containment_includes_borders() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(2.0, 0.0);
        let c = Point2::new(0.0, 2.0);
        assert!(point_in_triangle(&Point2::new(0.5, 0.5), &a, &b, &c, EPS));
        assert!(point_in_triangle(&Point2::new(1.0, 0.0), &a, &b, &c, EPS));
        assert!(!point_in_triangle(&Point2::new(1.5, 1.5), &a, &b, &c, EPS));
    }
}
