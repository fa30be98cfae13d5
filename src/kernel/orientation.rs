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

use crate::geometry::point::Point2;
use crate::kernel::predicates::are_equal;
use crate::numeric::scalar::Scalar;

/// Signed double area of the triangle `(a, b, c)`.
///
/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x())
}

/// Position of a point relative to the directed segment `a -> b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Left,
    Right,
    /// Collinear, past `b`.
    Beyond,
    /// Collinear, before `a`.
    Behind,
    /// Collinear, strictly between the endpoints.
    Between,
    Origin,
    Destination,
}

/// Classify `c` against the directed segment `a -> b`.
///
/// The signed area decides Left/Right; the collinear cases are resolved by
/// the projection of `c` onto the segment direction. Swapping `a` and `b`
/// flips Left and Right, swaps Origin and Destination, swaps Beyond and
/// Behind, and preserves Between.
pub fn classify<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, eps: T) -> Orientation {
    let area = orient2d(a, b, c);
    if area > eps {
        return Orientation::Left;
    }
    if area < -eps {
        return Orientation::Right;
    }
    if are_equal(c, a, eps) {
        return Orientation::Origin;
    }
    if are_equal(c, b, eps) {
        return Orientation::Destination;
    }
    let ab = a.vector_to(b);
    let ac = a.vector_to(c);
    let t = ac.dot(&ab);
    if t < -eps {
        Orientation::Behind
    } else if t > ab.norm_squared() + eps {
        Orientation::Beyond
    } else {
        Orientation::Between
    }
}

/// `c` strictly left of `a -> b`.
pub fn left<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, eps: T) -> bool {
    classify(a, b, c, eps) == Orientation::Left
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    const EPS: f64 = 1e-9;

    #[test]
    fn ccw_is_positive() {
        assert!(orient2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0)) > 0.0);
    }

    #[test]
    fn all_seven_classes() {
        let a = p(0.0, 0.0);
        let b = p(2.0, 0.0);
        assert_eq!(classify(&a, &b, &p(1.0, 1.0), EPS), Orientation::Left);
        assert_eq!(classify(&a, &b, &p(1.0, -1.0), EPS), Orientation::Right);
        assert_eq!(classify(&a, &b, &p(3.0, 0.0), EPS), Orientation::Beyond);
        assert_eq!(classify(&a, &b, &p(-1.0, 0.0), EPS), Orientation::Behind);
        assert_eq!(classify(&a, &b, &p(1.0, 0.0), EPS), Orientation::Between);
        assert_eq!(classify(&a, &b, &p(0.0, 0.0), EPS), Orientation::Origin);
        assert_eq!(classify(&a, &b, &p(2.0, 0.0), EPS), Orientation::Destination);
    }

    #[test]
    fn antisymmetric_under_endpoint_swap() {
        let a = p(0.0, 0.0);
        let b = p(2.0, 1.0);
        let cases = [
            (p(0.5, 1.5), Orientation::Left, Orientation::Right),
            (p(1.5, -0.5), Orientation::Right, Orientation::Left),
            (p(1.0, 0.5), Orientation::Between, Orientation::Between),
            (p(0.0, 0.0), Orientation::Origin, Orientation::Destination),
            (p(2.0, 1.0), Orientation::Destination, Orientation::Origin),
            (p(4.0, 2.0), Orientation::Beyond, Orientation::Behind),
            (p(-2.0, -1.0), Orientation::Behind, Orientation::Beyond),
        ];
        for (c, forward, reverse) in cases {
            assert_eq!(classify(&a, &b, &c, EPS), forward);
            assert_eq!(classify(&b, &a, &c, EPS), reverse);
        }
    }

    #[test]
    fn near_zero_area_falls_back_to_collinear_classes() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        // well below the tolerance: treated as exactly on the line
        let c = p(0.5, 1e-12);
        assert_eq!(classify(&a, &b, &c, EPS), Orientation::Between);
    }
}
