pub struct Node {
    pub point: Vec<f64>,
    pub axis: usize,
    pub left: usize,
    pub right: usize,
}

impl Node {
    #[must_use]
    pub fn new(point: Vec<f64>, axis: usize) -> Node {
        Node {
            point,
            axis,
            left: usize::MAX,
            right: usize::MAX,
        }
    }

    // Coordinate of the splitting hyperplane.
    #[must_use]
    pub fn split(&self) -> f64 {
        self.point[self.axis]
    }
}
