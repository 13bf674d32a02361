use crate::{
    distance::squared_euclidean,
    error::{Error, InputError, Result},
    node::Node,
    orthotope::Orthotope,
};
use ordered_float::OrderedFloat;
use tracing::{debug, trace};

/// A static KD-tree over points of a fixed dimensionality.
///
/// Nodes are kept in an arena in pre-order; child links are slot ids, with
/// `usize::MAX` standing for an empty subtree. The tree never changes after
/// [`KdTree::new`] returns, so it can be shared freely between threads.
pub struct KdTree {
    dimensions: usize,
    height: usize,
    root: usize,
    nodes: Vec<Node>,
}

// Pending work of the nearest neighbor search. A far subtree is only entered
// if its splitting plane is still closer than the best distance at the time
// it is popped, i.e. after the near subtree has been fully explored.
enum Visit {
    Near(usize),
    Far { slot_id: usize, plane_distance: f64 },
}

impl KdTree {
    /// Builds the tree from a non-empty set of points that all share the
    /// dimensionality of the first one.
    ///
    /// Each level splits on `depth % k` at the lower median. Points with equal
    /// coordinates on the splitting axis keep their relative input order, so
    /// building twice from the same input yields the same tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `points` is empty, zero-dimensional,
    /// mixes dimensionalities or contains a NaN coordinate.
    pub fn new<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Vec<f64>>,
    {
        let mut points: Vec<Vec<f64>> = points.into_iter().map(Into::into).collect();
        let dimensions = validate(&points)?;

        let mut tree = KdTree {
            dimensions,
            height: 0,
            root: usize::MAX,
            nodes: Vec::with_capacity(points.len()),
        };
        let mut order: Vec<usize> = (0..points.len()).collect();
        tree.root = tree.build(&mut points, &mut order, 0);

        debug!(
            points = tree.nodes.len(),
            dimensions,
            height = tree.height,
            "built kd-tree"
        );
        Ok(tree)
    }

    /// Finds the stored point closest to `query` in Euclidean distance.
    ///
    /// When several points are equally close, the first one visited by the
    /// search is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `query` does not have the
    /// tree's dimensionality.
    pub fn nearest_neighbor(&self, query: &[f64]) -> Result<&[f64]> {
        self.check_dimensions("query point", query.len())?;
        let (slot_id, _) = self.nearest(query);
        Ok(self.nodes[slot_id].point.as_slice())
    }

    /// Same as [`KdTree::nearest_neighbor`], also returning the Euclidean
    /// distance between `query` and the neighbor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `query` does not have the
    /// tree's dimensionality.
    pub fn nearest_neighbor_with_distance(&self, query: &[f64]) -> Result<(&[f64], f64)> {
        self.check_dimensions("query point", query.len())?;
        let (slot_id, distance) = self.nearest(query);
        Ok((self.nodes[slot_id].point.as_slice(), distance.sqrt()))
    }

    /// Collects every point `p` with `lower[i] <= p[i] <= upper[i]` on all axes.
    ///
    /// Points are returned in traversal order; treat the result as unordered.
    /// Bounds with `lower[i] > upper[i]` on some axis match nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if either bound does not have the
    /// tree's dimensionality.
    pub fn points_in_orthotope(&self, lower: &[f64], upper: &[f64]) -> Result<Vec<&[f64]>> {
        self.check_dimensions("lower bound", lower.len())?;
        self.check_dimensions("upper bound", upper.len())?;

        let orthotope = Orthotope::new(lower, upper);
        let mut result = Vec::new();
        let mut stack = vec![self.root];
        while let Some(slot_id) = stack.pop() {
            let node = &self.nodes[slot_id];
            if orthotope.contains(&node.point) {
                result.push(node.point.as_slice());
            }

            // Push right first so the left subtree is reported before it.
            let split = node.split();
            if node.right != usize::MAX && orthotope.reaches_above(node.axis, split) {
                stack.push(node.right);
            }
            if node.left != usize::MAX && orthotope.reaches_below(node.axis, split) {
                stack.push(node.left);
            }
        }

        trace!(matches = result.len(), "orthotope query");
        Ok(result)
    }

    /// Number of stored points. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree cannot be built from an empty point set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of levels in the tree, `floor(log2(len)) + 1`.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Iterates over the stored points in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.nodes.iter().map(|node| node.point.as_slice())
    }

    fn build(&mut self, points: &mut [Vec<f64>], order: &mut [usize], depth: usize) -> usize {
        if order.is_empty() {
            return usize::MAX;
        }

        // Sort along the splitting axis, breaking ties by input position
        let axis = depth % self.dimensions;
        order.sort_unstable_by_key(|&i| (OrderedFloat(points[i][axis]), i));

        let median = order.len() / 2;
        let point = std::mem::take(&mut points[order[median]]);
        let slot_id = self.nodes.len();
        self.nodes.push(Node::new(point, axis));
        self.height = self.height.max(depth + 1);

        let (left, rest) = order.split_at_mut(median);
        let left = self.build(points, left, depth + 1);
        let right = self.build(points, &mut rest[1..], depth + 1);
        self.nodes[slot_id].left = left;
        self.nodes[slot_id].right = right;

        slot_id
    }

    // Returns the slot id of the nearest node and its squared distance.
    fn nearest(&self, query: &[f64]) -> (usize, f64) {
        let mut best = self.root;
        let mut best_distance = squared_euclidean(query, &self.nodes[self.root].point);
        let mut visited = 0_usize;

        let mut stack = vec![Visit::Near(self.root)];
        while let Some(visit) = stack.pop() {
            let slot_id = match visit {
                Visit::Near(slot_id) => slot_id,
                Visit::Far {
                    slot_id,
                    plane_distance,
                } if plane_distance < best_distance => slot_id,
                Visit::Far { .. } => continue,
            };
            visited += 1;

            let node = &self.nodes[slot_id];
            let distance = squared_euclidean(query, &node.point);
            if distance < best_distance {
                best = slot_id;
                best_distance = distance;
            }

            let split = node.split();
            let (near, far) = if query[node.axis] < split {
                (node.left, node.right)
            } else {
                (node.right, node.left)
            };
            if far != usize::MAX {
                stack.push(Visit::Far {
                    slot_id: far,
                    plane_distance: (query[node.axis] - split).powi(2),
                });
            }
            if near != usize::MAX {
                stack.push(Visit::Near(near));
            }
        }

        trace!(visited, distance = best_distance, "nearest neighbor search");
        (best, best_distance)
    }

    fn check_dimensions(&self, argument: &'static str, actual: usize) -> Result<()> {
        if actual == self.dimensions {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                argument,
                expected: self.dimensions,
                actual,
            })
        }
    }
}

// Returns the common dimensionality of the points.
fn validate(points: &[Vec<f64>]) -> Result<usize> {
    let dimensions = points.first().ok_or(InputError::Empty)?.len();
    if dimensions == 0 {
        return Err(InputError::ZeroDimensional.into());
    }
    for (index, point) in points.iter().enumerate() {
        if point.len() != dimensions {
            return Err(InputError::InconsistentDimensions {
                index,
                expected: dimensions,
                actual: point.len(),
            }
            .into());
        }
        if let Some(axis) = point.iter().position(|x| x.is_nan()) {
            return Err(InputError::NanCoordinate { index, axis }.into());
        }
    }
    Ok(dimensions)
}
