use crate::pixel::Rgba;

/// 8-neighborhood offsets `(dx, dy)` in row-major scan order: the row above
/// left to right, then left and right, then the row below.
pub const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct GridPoint {
    pub x: usize,
    pub y: usize,
}

impl GridPoint {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// True when `other` is one of the eight neighbors of `self`.
    pub fn is_adjacent_8(self, other: GridPoint) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

impl From<(usize, usize)> for GridPoint {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Ordered run of grid points drawn in a single color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyline {
    pub points: Vec<GridPoint>,
    pub color: Rgba,
}

impl Polyline {
    pub fn new(start: GridPoint, color: Rgba) -> Self {
        Self {
            points: vec![start],
            color,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A single-point polyline has no segments.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }
}
