use crate::Error;

/// Axis-aligned pixel rectangle with half-open extents `[x1, x2) x [y1, y2)`.
///
/// Construction guarantees `x1 <= x2` and `y1 <= y2`; zero-area boxes are
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    x1: usize,
    y1: usize,
    x2: usize,
    y2: usize,
}

impl BoundingBox {
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Result<Self, Error> {
        if x2 < x1 || y2 < y1 {
            return Err(Error::InvalidBoundingBox { x1, y1, x2, y2 });
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Box covering a whole `side x side` grid.
    pub fn full(side: usize) -> Self {
        Self {
            x1: 0,
            y1: 0,
            x2: side,
            y2: side,
        }
    }

    pub fn x1(&self) -> usize {
        self.x1
    }

    pub fn y1(&self) -> usize {
        self.y1
    }

    pub fn x2(&self) -> usize {
        self.x2
    }

    pub fn y2(&self) -> usize {
        self.y2
    }

    pub fn width(&self) -> usize {
        self.x2 - self.x1
    }

    pub fn height(&self) -> usize {
        self.y2 - self.y1
    }

    pub fn has_area(&self) -> bool {
        self.x1 < self.x2 && self.y1 < self.y2
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }
}
