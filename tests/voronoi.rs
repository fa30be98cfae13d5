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

use quadra::geometry::{Aabb, Aabb2, GeometryError, Point2};
use quadra::voronoi::{VoronoiDiagram, build_fortune, build_halfplane};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPS: f64 = 1e-9;

fn unit_clip() -> Aabb2<f64> {
    Aabb::from_points(&Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0))
}

fn ring_area(pts: &[Point2<f64>]) -> f64 {
    let n = pts.len();
    let mut acc = 0.0;
    for i in 0..n {
        let q = pts[(i + 1) % n];
        acc += pts[i].x() * q.y() - q.x() * pts[i].y();
    }
    (acc * 0.5).abs()
}

fn edge_pairs(d: &VoronoiDiagram<f64>) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = d.edges.iter().map(|e| (e.site_a, e.site_b)).collect();
    pairs.sort();
    pairs
}

#[test]
fn two_sites_are_separated_by_the_perpendicular_bisector() {
    let sites = [Point2::new(0.25, 0.5), Point2::new(0.75, 0.5)];
    for diagram in [
        build_halfplane(&sites, &unit_clip(), EPS).unwrap(),
        build_fortune(&sites, &unit_clip(), EPS).unwrap(),
    ] {
        assert_eq!(diagram.cells.len(), 2);
        assert!((ring_area(&diagram.cells[0].vertices) - 0.5).abs() < 1e-9);
        assert!((ring_area(&diagram.cells[1].vertices) - 0.5).abs() < 1e-9);
        assert_eq!(edge_pairs(&diagram), vec![(0, 1)]);
    }
}

#[test]
fn duplicate_sites_are_rejected_by_both_builders() {
    let sites = [Point2::new(0.5, 0.5), Point2::new(0.5, 0.5)];
    for r in [
        build_halfplane(&sites, &unit_clip(), EPS),
        build_fortune(&sites, &unit_clip(), EPS),
    ] {
        assert!(matches!(r, Err(GeometryError::DegenerateGeometry { .. })));
    }
}

#[test]
fn cells_are_clipped_to_the_rectangle_and_cover_it() {
    let mut rng = StdRng::seed_from_u64(7);
    let sites: Vec<Point2<f64>> = (0..9)
        .map(|_| Point2::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
        .collect();
    for diagram in [
        build_halfplane(&sites, &unit_clip(), EPS).unwrap(),
        build_fortune(&sites, &unit_clip(), EPS).unwrap(),
    ] {
        let mut total = 0.0;
        for cell in &diagram.cells {
            total += ring_area(&cell.vertices);
            for v in &cell.vertices {
                assert!(v.x() >= -1e-9 && v.x() <= 1.0 + 1e-9);
                assert!(v.y() >= -1e-9 && v.y() <= 1.0 + 1e-9);
            }
        }
        assert!((total - 1.0).abs() < 1e-6, "cells must tile the rectangle");
    }
}

#[test]
fn every_cell_contains_its_own_site() {
    let sites = [
        Point2::new(0.15, 0.2),
        Point2::new(0.8, 0.3),
        Point2::new(0.5, 0.75),
        Point2::new(0.3, 0.55),
    ];
    let diagram = build_fortune(&sites, &unit_clip(), EPS).unwrap();
    for cell in &diagram.cells {
        // the site is strictly closer to every cell vertex than any other site
        for v in &cell.vertices {
            let own = v.distance_to(&cell.site);
            for other in &sites {
                assert!(own <= v.distance_to(other) + 1e-6);
            }
        }
    }
}

#[test]
fn sweep_and_halfplane_construction_agree() {
    for seed in 0..6_u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = 4 + (seed as usize % 3) * 3;
        let sites: Vec<Point2<f64>> = (0..count)
            .map(|_| Point2::new(rng.random_range(0.05..0.95), rng.random_range(0.05..0.95)))
            .collect();
        let naive = build_halfplane(&sites, &unit_clip(), EPS).unwrap();
        let sweep = build_fortune(&sites, &unit_clip(), EPS).unwrap();

        assert_eq!(naive.cells.len(), sweep.cells.len());
        for (a, b) in naive.cells.iter().zip(sweep.cells.iter()) {
            assert_eq!(
                a.vertices.len(),
                b.vertices.len(),
                "seed {seed}: cell vertex counts differ"
            );
            assert!(
                (ring_area(&a.vertices) - ring_area(&b.vertices)).abs() < 1e-6,
                "seed {seed}: cell areas differ"
            );
        }
        assert_eq!(
            edge_pairs(&naive),
            edge_pairs(&sweep),
            "seed {seed}: edge topology differs"
        );
    }
}
