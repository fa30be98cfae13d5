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

use quadra::geometry::Point2;
use quadra::kernel::{Orientation, classify, orient2d};

const EPS: f64 = 1e-9;

fn p(x: f64, y: f64) -> Point2<f64> {
    Point2::new(x, y)
}

#[test]
fn orient2d_sign_flips_with_the_base() {
    let a = p(0.3, -1.2);
    let b = p(2.1, 0.4);
    let c = p(-0.7, 2.2);
    let fwd = orient2d(&a, &b, &c);
    let rev = orient2d(&b, &a, &c);
    assert!((fwd + rev).abs() < 1e-12);
}

#[test]
fn antisymmetry_over_a_point_grid() {
    // non-degenerate base segment, probes on a grid around it
    let a = p(-1.0, -0.5);
    let b = p(2.0, 1.0);
    for ix in -4..=6 {
        for iy in -4..=6 {
            let c = p(ix as f64 * 0.5, iy as f64 * 0.5);
            let fwd = classify(&a, &b, &c, EPS);
            let rev = classify(&b, &a, &c, EPS);
            let expected = match fwd {
                Orientation::Left => Orientation::Right,
                Orientation::Right => Orientation::Left,
                Orientation::Beyond => Orientation::Behind,
                Orientation::Behind => Orientation::Beyond,
                Orientation::Between => Orientation::Between,
                Orientation::Origin => Orientation::Destination,
                Orientation::Destination => Orientation::Origin,
            };
            assert_eq!(rev, expected, "probe {c:?}");
        }
    }
}

#[test]
fn collinear_probes_resolve_by_projection() {
    let a = p(0.0, 0.0);
    let b = p(2.0, 2.0);
    assert_eq!(classify(&a, &b, &p(1.0, 1.0), EPS), Orientation::Between);
    assert_eq!(classify(&a, &b, &p(3.0, 3.0), EPS), Orientation::Beyond);
    assert_eq!(classify(&a, &b, &p(-1.0, -1.0), EPS), Orientation::Behind);
    assert_eq!(classify(&a, &b, &a, EPS), Orientation::Origin);
    assert_eq!(classify(&a, &b, &b, EPS), Orientation::Destination);
}

#[test]
fn tolerance_decides_the_left_right_boundary() {
    let a = p(0.0, 0.0);
    let b = p(1.0, 0.0);
    // far below the tolerance: collinear
    assert_eq!(classify(&a, &b, &p(0.5, 1e-12), EPS), Orientation::Between);
    // well above: a proper left turn
    assert_eq!(classify(&a, &b, &p(0.5, 1e-6), EPS), Orientation::Left);
}
