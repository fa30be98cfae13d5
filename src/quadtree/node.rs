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

use crate::geometry::aabb::{Aabb, Aabb2};
use crate::geometry::error::{GeometryError, GeometryResult};
use crate::geometry::point::Point2;
use crate::geometry::segment::{Segment, Segment2};
use crate::numeric::scalar::Scalar;

/// Index of a node in the tree's arena. All nodes live in one `Vec` and are
/// dropped together with the tree; parent/child links are indices, so there
/// is nothing to leak or dangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Child position inside a parent box. The order is the build's first-match
/// assignment order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    Nw,
    Ne,
    Sw,
    Se,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::Nw, Quadrant::Ne, Quadrant::Sw, Quadrant::Se];

    pub(crate) fn index(self) -> usize {
        match self {
            Quadrant::Nw => 0,
            Quadrant::Ne => 1,
            Quadrant::Sw => 2,
            Quadrant::Se => 3,
        }
    }

    /// Whether this quadrant touches the parent's border in `dir`.
    pub(crate) fn on_side(self, dir: Direction) -> bool {
        match dir {
            Direction::North => matches!(self, Quadrant::Nw | Quadrant::Ne),
            Direction::South => matches!(self, Quadrant::Sw | Quadrant::Se),
            Direction::East => matches!(self, Quadrant::Ne | Quadrant::Se),
            Direction::West => matches!(self, Quadrant::Nw | Quadrant::Sw),
        }
    }

    /// Reflection across the border perpendicular to `dir`.
    pub(crate) fn mirrored(self, dir: Direction) -> Quadrant {
        match dir {
            Direction::North | Direction::South => match self {
                Quadrant::Nw => Quadrant::Sw,
                Quadrant::Ne => Quadrant::Se,
                Quadrant::Sw => Quadrant::Nw,
                Quadrant::Se => Quadrant::Ne,
            },
            Direction::East | Direction::West => match self {
                Quadrant::Nw => Quadrant::Ne,
                Quadrant::Ne => Quadrant::Nw,
                Quadrant::Sw => Quadrant::Se,
                Quadrant::Se => Quadrant::Sw,
            },
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub(crate) fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T: Scalar> {
    pub(crate) bounds: Aabb2<T>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) quadrant: Option<Quadrant>,
    pub(crate) children: Option<[NodeId; 4]>,
    pub(crate) site: Option<Point2<T>>,
    pub(crate) depth: u32,
}

/// A point-region quadtree over a rectangular domain.
///
/// A node is a leaf iff it has no children; an internal node has exactly
/// four children whose boxes quarter its own. The tree is built top-down by
/// recursive partition (driven by an explicit worklist) and repaired to the
/// 2:1 rule by [`QuadTree::balance`].
#[derive(Clone, Debug)]
pub struct QuadTree<T: Scalar> {
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) root: NodeId,
}

pub(crate) fn quadrant_box<T: Scalar>(b: &Aabb2<T>, q: Quadrant) -> Aabb2<T> {
    let c = b.center();
    match q {
        Quadrant::Nw => Aabb::from_points(
            &Point2::new(b.min().x(), c.y()),
            &Point2::new(c.x(), b.max().y()),
        ),
        Quadrant::Ne => Aabb::from_points(&c, b.max()),
        Quadrant::Sw => Aabb::from_points(b.min(), &c),
        Quadrant::Se => Aabb::from_points(
            &Point2::new(c.x(), b.min().y()),
            &Point2::new(b.max().x(), c.y()),
        ),
    }
}

impl<T: Scalar> QuadTree<T> {
    /// Partition `points` inside `bounds`: zero points make an empty leaf,
    /// one point a site leaf, and more than one a four-way split at the box
    /// midpoint. Every quadrant is materialized even when it receives no
    /// points. Points on a splitting line go to the first matching quadrant
    /// in `Nw, Ne, Sw, Se` order.
    ///
    /// Points outside `bounds` and exactly coincident points are rejected;
    /// the latter would never separate, no matter how deep the partition.
    pub fn build(bounds: Aabb2<T>, points: &[Point2<T>]) -> GeometryResult<Self> {
        for p in points {
            if !bounds.contains(p) {
                return Err(GeometryError::DegenerateGeometry {
                    what: "point outside the quadtree domain",
                });
            }
        }
        let mut sorted: Vec<&Point2<T>> = points.iter().collect();
        sorted.sort_by(|p, q| {
            p.x()
                .partial_cmp(&q.x())
                .unwrap_or(Ordering::Equal)
                .then(p.y().partial_cmp(&q.y()).unwrap_or(Ordering::Equal))
        });
        for w in sorted.windows(2) {
            if w[0] == w[1] {
                return Err(GeometryError::DegenerateGeometry {
                    what: "coincident points cannot be partitioned",
                });
            }
        }

        let mut tree = QuadTree {
            nodes: vec![Node {
                bounds,
                parent: None,
                quadrant: None,
                children: None,
                site: None,
                depth: 0,
            }],
            root: NodeId(0),
        };

        let mut work: Vec<(NodeId, Vec<Point2<T>>)> = vec![(tree.root, points.to_vec())];
        while let Some((id, pts)) = work.pop() {
            if pts.len() <= 1 {
                tree.nodes[id.0].site = pts.into_iter().next();
                continue;
            }
            let children = tree.split(id);
            let mut buckets: [Vec<Point2<T>>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
            for p in pts {
                for (k, &cid) in children.iter().enumerate() {
                    if tree.nodes[cid.0].bounds.contains(&p) {
                        buckets[k].push(p);
                        break;
                    }
                }
            }
            for (k, bucket) in buckets.into_iter().enumerate() {
                if !bucket.is_empty() {
                    work.push((children[k], bucket));
                }
            }
        }
        Ok(tree)
    }

    /// Turn a leaf into an internal node with four fresh leaf children; a
    /// site payload moves into the child whose box contains it.
    pub(crate) fn split(&mut self, id: NodeId) -> [NodeId; 4] {
        let bounds = self.nodes[id.0].bounds;
        let depth = self.nodes[id.0].depth;
        let site = self.nodes[id.0].site.take();

        let mut children = [NodeId(0); 4];
        for (k, q) in Quadrant::ALL.iter().enumerate() {
            children[k] = NodeId(self.nodes.len());
            self.nodes.push(Node {
                bounds: quadrant_box(&bounds, *q),
                parent: Some(id),
                quadrant: Some(*q),
                children: None,
                site: None,
                depth: depth + 1,
            });
        }
        if let Some(p) = site {
            for &cid in &children {
                if self.nodes[cid.0].bounds.contains(&p) {
                    self.nodes[cid.0].site = Some(p);
                    break;
                }
            }
        }
        self.nodes[id.0].children = Some(children);
        children
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.0].children.is_none()
    }

    pub fn depth(&self, id: NodeId) -> u32 {
        self.nodes[id.0].depth
    }

    pub fn bounds(&self, id: NodeId) -> &Aabb2<T> {
        &self.nodes[id.0].bounds
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> Option<[NodeId; 4]> {
        self.nodes[id.0].children
    }

    pub fn site(&self, id: NodeId) -> Option<&Point2<T>> {
        self.nodes[id.0].site.as_ref()
    }

    pub(crate) fn child_of(&self, id: NodeId, q: Quadrant) -> NodeId {
        match self.nodes[id.0].children {
            Some(ch) => ch[q.index()],
            // the parent of an existing child is always subdivided
            None => id,
        }
    }

    pub fn leaves(&self) -> Vec<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|id| self.nodes[id.0].children.is_none())
            .collect()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// The leaf whose box contains `p`, or `None` outside the domain.
    pub fn locate(&self, p: &Point2<T>) -> Option<NodeId> {
        if !self.nodes[self.root.0].bounds.contains(p) {
            return None;
        }
        let mut cur = self.root;
        while let Some(ch) = self.nodes[cur.0].children {
            let mut next = None;
            for &cid in &ch {
                if self.nodes[cid.0].bounds.contains(p) {
                    next = Some(cid);
                    break;
                }
            }
            cur = next?;
        }
        Some(cur)
    }

    /// Mesh-support output: the outer box edges once, plus the vertical and
    /// horizontal bisector of every subdivided box.
    pub fn boundaries(&self) -> Vec<Segment2<T>> {
        let outer = self.nodes[self.root.0].bounds;
        let [c0, c1, c2, c3] = outer.corners();
        let mut out = vec![
            Segment::new(&c0, &c1),
            Segment::new(&c1, &c2),
            Segment::new(&c2, &c3),
            Segment::new(&c3, &c0),
        ];
        for node in &self.nodes {
            if node.children.is_some() {
                let b = &node.bounds;
                let c = b.center();
                out.push(Segment::new(
                    &Point2::new(c.x(), b.min().y()),
                    &Point2::new(c.x(), b.max().y()),
                ));
                out.push(Segment::new(
                    &Point2::new(b.min().x(), c.y()),
                    &Point2::new(b.max().x(), c.y()),
                ));
            }
        }
        out
    }
}
