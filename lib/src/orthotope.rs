/// Closed axis-aligned box `[lower, upper]`.
///
/// Both bounds are expected to have the same length and `lower[i] <= upper[i]`;
/// an inverted axis simply contains nothing.
#[derive(Clone, Copy)]
pub struct Orthotope<'a> {
    pub lower: &'a [f64],
    pub upper: &'a [f64],
}

impl<'a> Orthotope<'a> {
    pub fn new(lower: &'a [f64], upper: &'a [f64]) -> Orthotope<'a> {
        Orthotope { lower, upper }
    }

    pub fn contains(&self, point: &[f64]) -> bool {
        point
            .iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(x, (lo, hi))| lo <= x && x <= hi)
    }

    // The box may overlap the half-space below `split` on `axis`.
    pub fn reaches_below(&self, axis: usize, split: f64) -> bool {
        self.lower[axis] <= split
    }

    // The box may overlap the half-space above `split` on `axis`.
    pub fn reaches_above(&self, axis: usize, split: f64) -> bool {
        self.upper[axis] >= split
    }
}
