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

use approx::assert_relative_eq;
use quadra::geometry::{
    Line, Plane, Point2, Point3, Segment, SegmentIntersection, Vector2, Vector3, line_line_2,
    line_segment_2, plane_line, plane_plane, segment_segment_2, segments_intersect,
};

const EPS: f64 = 1e-9;

#[test]
fn axis_lines_cross_at_the_origin() {
    let a = Line::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0)).unwrap();
    let b = Line::new(Point2::new(0.0, -1.0), Vector2::new(0.0, 1.0)).unwrap();
    let p = line_line_2(&a, &b, EPS).unwrap();
    assert_relative_eq!(p.x(), 0.0);
    assert_relative_eq!(p.y(), 0.0);
}

#[test]
fn parallel_lines_have_no_intersection() {
    let a = Line::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0)).unwrap();
    let b = Line::new(Point2::new(0.0, 5.0), Vector2::new(1.0, 0.0)).unwrap();
    assert_eq!(line_line_2(&a, &b, EPS), None);
}

#[test]
fn full_line_semantics_reach_behind_the_anchor() {
    // the crossing lies at negative parameter on both lines
    let a = Line::new(Point2::new(1.0, 1.0), Vector2::new(1.0, 0.0)).unwrap();
    let b = Line::new(Point2::new(0.0, 2.0), Vector2::new(0.0, 1.0)).unwrap();
    let p = line_line_2(&a, &b, EPS).unwrap();
    assert_relative_eq!(p.x(), 0.0);
    assert_relative_eq!(p.y(), 1.0);
}

#[test]
fn intersection_point_substitutes_back_into_both_lines() {
    let a = Line::new(Point2::new(-0.3, 1.7), Vector2::new(2.5, 0.4)).unwrap();
    let b = Line::new(Point2::new(4.0, -2.0), Vector2::new(-1.0, 3.0)).unwrap();
    let p = line_line_2(&a, &b, EPS).unwrap();
    assert!(a.contains(&p, 1e-6));
    assert!(b.contains(&p, 1e-6));
}

#[test]
fn segment_straddle_test_and_point_variant_agree() {
    let s1 = Segment::new(&Point2::new(0.0, 0.0), &Point2::new(4.0, 4.0));
    let s2 = Segment::new(&Point2::new(0.0, 4.0), &Point2::new(4.0, 0.0));
    assert!(segments_intersect(&s1, &s2, EPS));
    assert_eq!(
        segment_segment_2(&s1, &s2, EPS),
        SegmentIntersection::Point(Point2::new(2.0, 2.0))
    );

    let s3 = Segment::new(&Point2::new(5.0, 0.0), &Point2::new(6.0, 1.0));
    assert!(!segments_intersect(&s1, &s3, EPS));
    assert_eq!(segment_segment_2(&s1, &s3, EPS), SegmentIntersection::None);
}

#[test]
fn touching_endpoint_counts_as_intersecting() {
    let s1 = Segment::new(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0));
    let s2 = Segment::new(&Point2::new(2.0, 0.0), &Point2::new(3.0, 5.0));
    assert!(segments_intersect(&s1, &s2, EPS));
}

#[test]
fn line_against_segment_respects_the_bounds() {
    let line = Line::new(Point2::new(0.0, 1.0), Vector2::new(1.0, 0.0)).unwrap();
    let hit = Segment::new(&Point2::new(2.0, 0.0), &Point2::new(2.0, 3.0));
    let miss = Segment::new(&Point2::new(2.0, 2.0), &Point2::new(2.0, 3.0));
    assert_eq!(line_segment_2(&line, &hit, EPS), Some(Point2::new(2.0, 1.0)));
    assert_eq!(line_segment_2(&line, &miss, EPS), None);
}

#[test]
fn plane_line_solves_the_parametric_equation() {
    let plane = Plane::from_points(
        &Point3::new(1.0, 0.0, 0.0),
        &Point3::new(0.0, 1.0, 0.0),
        &Point3::new(0.0, 0.0, 1.0),
    )
    .unwrap();
    let line = Line::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0)).unwrap();
    let p = plane_line(&plane, &line, EPS).unwrap();
    for i in 0..3 {
        assert_relative_eq!(p.coord(i).unwrap(), 1.0 / 3.0, epsilon = 1e-9);
    }
}

#[test]
fn plane_plane_intersection_lies_on_both_planes() {
    let p1 = Plane::from_normal_point(&Vector3::new(1.0, 2.0, -1.0), &Point3::new(1.0, 0.0, 0.0))
        .unwrap();
    let p2 = Plane::from_normal_point(&Vector3::new(0.0, 1.0, 1.0), &Point3::new(0.0, 2.0, 1.0))
        .unwrap();
    let line = plane_plane(&p1, &p2, EPS).unwrap();
    for t in [-2.0, 0.0, 0.5, 3.0] {
        let p = line.point_at(t);
        assert!(p1.contains(&p, 1e-6), "t={t}: not on plane 1");
        assert!(p2.contains(&p, 1e-6), "t={t}: not on plane 2");
    }
    // the direction is orthogonal to both normals
    assert!(line.direction().dot(p1.normal()).abs() < 1e-9);
    assert!(line.direction().dot(p2.normal()).abs() < 1e-9);
}

#[test]
fn parallel_planes_do_not_intersect() {
    let p1 = Plane::from_normal_point(&Vector3::new(0.0, 0.0, 1.0), &Point3::new(0.0, 0.0, 0.0))
        .unwrap();
    let p2 = Plane::from_normal_point(&Vector3::new(0.0, 0.0, 2.0), &Point3::new(0.0, 0.0, 4.0))
        .unwrap();
    assert!(plane_plane(&p1, &p2, EPS).is_none());
}
