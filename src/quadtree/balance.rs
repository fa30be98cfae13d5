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

use crate::numeric::scalar::Scalar;
use crate::quadtree::node::{Direction, NodeId, QuadTree, Quadrant};

impl<T: Scalar> QuadTree<T> {
    /// The adjacent node in direction `dir`, at the same depth or shallower,
    /// or `None` at the domain boundary.
    ///
    /// Classic neighbor-finding: walk toward the root while the current node
    /// sits on the `dir` border of its parent, step to the mirrored sibling,
    /// then walk the recorded path back down mirrored, stopping early where
    /// the subdivision ends.
    pub fn neighbor(&self, id: NodeId, dir: Direction) -> Option<NodeId> {
        let mut path: Vec<Quadrant> = Vec::new();
        let mut cur = id;
        loop {
            let node = &self.nodes[cur.0];
            let (parent, q) = match (node.parent, node.quadrant) {
                (Some(p), Some(q)) => (p, q),
                _ => return None, // reached the root: no neighbor on this side
            };
            if q.on_side(dir) {
                path.push(q);
                cur = parent;
            } else {
                cur = self.child_of(parent, q.mirrored(dir));
                break;
            }
        }
        while let Some(q) = path.pop() {
            match self.nodes[cur.0].children {
                Some(ch) => cur = ch[q.mirrored(dir).index()],
                None => break,
            }
        }
        Some(cur)
    }

    /// A leaf violates the 2:1 rule in `dir` when its same-depth neighbor
    /// has a border-facing child that is itself subdivided, i.e. some
    /// adjacent leaf is at least two levels deeper.
    fn needs_split(&self, leaf: NodeId, dir: Direction) -> bool {
        let Some(n) = self.neighbor(leaf, dir) else {
            return false;
        };
        if self.nodes[n.0].depth < self.nodes[leaf.0].depth {
            return false;
        }
        let Some(ch) = self.nodes[n.0].children else {
            return false;
        };
        let facing = dir.opposite();
        Quadrant::ALL.iter().any(|q| {
            q.on_side(facing) && self.nodes[ch[q.index()].0].children.is_some()
        })
    }

    /// Enforce the 2:1 rule: after this returns, the depths of any two
    /// geometrically adjacent leaves differ by at most one.
    ///
    /// Worklist fixed point: every leaf is examined; splitting a leaf puts
    /// its four fresh children and its four directional neighbors back on
    /// the list, because a split may introduce new violations one box away.
    pub fn balance(&mut self) {
        let mut work: Vec<NodeId> = self.leaves();
        while let Some(id) = work.pop() {
            if self.nodes[id.0].children.is_some() {
                continue; // split since it was enqueued
            }
            if !Direction::ALL.iter().any(|&d| self.needs_split(id, d)) {
                continue;
            }
            let children = self.split(id);
            work.extend(children);
            for d in Direction::ALL {
                if let Some(n) = self.neighbor(id, d) {
                    work.push(n);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::aabb::Aabb;
    use crate::geometry::point::Point2;

    fn unit_box() -> Aabb<f64, 2> {
        Aabb::from_points(&Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0))
    }

    #[test]
    fn neighbors_of_depth_one_quadrants() {
        let points = [
            Point2::new(0.1, 0.1),
            Point2::new(0.9, 0.1),
            Point2::new(0.1, 0.9),
            Point2::new(0.9, 0.9),
        ];
        let tree = QuadTree::build(unit_box(), &points).unwrap();
        let sw = tree.locate(&Point2::new(0.1, 0.1)).unwrap();
        let nw = tree.locate(&Point2::new(0.1, 0.9)).unwrap();
        let se = tree.locate(&Point2::new(0.9, 0.1)).unwrap();
        assert_eq!(tree.neighbor(sw, Direction::North), Some(nw));
        assert_eq!(tree.neighbor(sw, Direction::East), Some(se));
        assert_eq!(tree.neighbor(sw, Direction::South), None);
        assert_eq!(tree.neighbor(sw, Direction::West), None);
        assert_eq!(tree.neighbor(nw, Direction::South), Some(sw));
    }

    #[test]
    fn neighbor_walks_across_subtree_borders() {
        // cluster in the south-west corner forces a deep subtree there
        let points = [
            Point2::new(0.01, 0.01),
            Point2::new(0.05, 0.05),
            Point2::new(0.9, 0.9),
        ];
        let tree = QuadTree::build(unit_box(), &points).unwrap();
        let deep = tree.locate(&Point2::new(0.01, 0.01)).unwrap();
        assert!(tree.depth(deep) >= 2);
        // walking east repeatedly stays inside the domain until the border
        let mut cur = deep;
        let mut hops = 0;
        while let Some(n) = tree.neighbor(cur, Direction::East) {
            assert!(tree.bounds(n).min().x() >= tree.bounds(cur).min().x());
            cur = n;
            hops += 1;
            assert!(hops < 16);
        }
    }

    #[test]
    fn balanced_four_corner_tree_is_a_fixed_point() {
        let points = [
            Point2::new(0.1, 0.1),
            Point2::new(0.9, 0.1),
            Point2::new(0.1, 0.9),
            Point2::new(0.9, 0.9),
        ];
        let mut tree = QuadTree::build(unit_box(), &points).unwrap();
        let before = tree.node_count();
        tree.balance();
        assert_eq!(tree.node_count(), before);
        assert_eq!(tree.leaf_count(), 4);
    }

    #[test]
    fn deep_corner_cluster_forces_neighbor_splits() {
        let points = [
            Point2::new(0.001, 0.001),
            Point2::new(0.002, 0.003),
            Point2::new(0.9, 0.9),
        ];
        let mut tree = QuadTree::build(unit_box(), &points).unwrap();
        tree.balance();
        // every adjacent leaf pair differs by at most one level
        let leaves = tree.leaves();
        for &a in &leaves {
            for d in Direction::ALL {
                if let Some(n) = tree.neighbor(a, d) {
                    if tree.is_leaf(n) {
                        let da = tree.depth(a) as i64;
                        let db = tree.depth(n) as i64;
                        assert!((da - db).abs() <= 1, "unbalanced neighbors");
                    }
                }
            }
        }
    }
}
