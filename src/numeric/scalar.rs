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

use std::fmt::Debug;

use num_traits::{Float, FromPrimitive};

/// Coordinate type of the kernel.
///
/// All predicates and constructions are tolerance-based; the three epsilon
/// tiers are the single point of control for the "how close is equal"
/// boundary. `eps_tight` guards degeneracy checks (zero vectors, parallel
/// directions), `eps_medium` guards intermediate constructions and
/// `eps_loose` guards derived quantities that accumulate several rounding
/// steps (sweep events, cell assembly).
pub trait Scalar: Float + FromPrimitive + Debug + Default + 'static {
    /// Literal conversion; `f64` literals are the source of every constant
    /// in this crate.
    fn of(x: f64) -> Self;

    fn eps_tight() -> Self;
    fn eps_medium() -> Self;
    fn eps_loose() -> Self;
}

impl Scalar for f64 {
    fn of(x: f64) -> Self {
        x
    }

    fn eps_tight() -> Self {
        1e-12
    }

    fn eps_medium() -> Self {
        1e-9
    }

    fn eps_loose() -> Self {
        1e-6
    }
}

impl Scalar for f32 {
    fn of(x: f64) -> Self {
        x as f32
    }

    fn eps_tight() -> Self {
        1e-6
    }

    fn eps_medium() -> Self {
        1e-5
    }

    fn eps_loose() -> Self {
        1e-3
    }
}

/// `|x - y| < eps`.
pub fn is_equal<T: Scalar>(x: T, y: T, eps: T) -> bool {
    (x - y).abs() < eps
}

/// Logical exclusive-or, spelled out for the segment straddle test.
pub fn lxor(a: bool, b: bool) -> bool {
    a != b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(f64::eps_tight() < f64::eps_medium());
        assert!(f64::eps_medium() < f64::eps_loose());
        assert!(f32::eps_tight() < f32::eps_medium());
    }

    #[test]
    fn equality_is_strict_at_the_boundary() {
        assert!(is_equal(1.0, 1.0 + 1e-10, 1e-9));
        assert!(!is_equal(1.0, 1.0 + 1e-9, 1e-9));
    }

    #[test]
    fn lxor_truth_table() {
        assert!(!lxor(false, false));
        assert!(lxor(true, false));
        assert!(lxor(false, true));
        assert!(!lxor(true, true));
    }
}
