use crate::Error;

/// Side length of the reference digit bitmaps.
pub const DIGIT_SIDE: usize = 28;
/// Pixel count of a reference digit bitmap.
pub const DIGIT_PIXELS: usize = DIGIT_SIDE * DIGIT_SIDE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    data: Vec<u8>,
}

impl Grid {
    pub fn from_vec(side: usize, data: Vec<u8>) -> Result<Self, Error> {
        let expected = side.checked_mul(side).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { side, data })
    }

    pub fn blank(side: usize) -> Self {
        let len = side.checked_mul(side).expect("grid size overflow");
        Self {
            side,
            data: vec![0; len],
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major pixel buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.side + x
    }

    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.side, "row index out of bounds");
        let start = y * self.side;
        &self.data[start..start + self.side]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.side || y >= self.side {
            return None;
        }
        self.data.get(self.index_of(x, y)).copied()
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut u8> {
        if x >= self.side || y >= self.side {
            return None;
        }
        let idx = self.index_of(x, y);
        self.data.get_mut(idx)
    }

    /// Reads `(x, y)`, returning `0` for any coordinate outside the grid.
    #[inline]
    pub fn get_or_zero(&self, x: isize, y: isize) -> u8 {
        if x < 0 || y < 0 {
            return 0;
        }
        self.get(x as usize, y as usize).unwrap_or(0)
    }

    /// Binarises in place: `1` where `value >= threshold`, else `0`.
    pub fn apply_threshold(&mut self, threshold: u8) -> Result<(), Error> {
        if threshold == 0 {
            return Err(Error::ZeroThreshold);
        }
        for px in &mut self.data {
            *px = u8::from(*px >= threshold);
        }
        Ok(())
    }

    pub fn is_discrete(&self) -> bool {
        self.data.iter().all(|&v| v <= 1)
    }

    /// Fails with the first pixel that is neither `0` nor `1`.
    pub fn assert_discrete(&self) -> Result<(), Error> {
        match self.data.iter().position(|&v| v > 1) {
            Some(index) => Err(Error::NotDiscrete {
                index,
                value: self.data[index],
            }),
            None => Ok(()),
        }
    }

    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Copy of the buffer suitable for writing as an 8-bit raster.
    ///
    /// Binary grids are stretched to `{0, 255}`; anything else is returned
    /// verbatim.
    pub fn to_visual(&self) -> Vec<u8> {
        if self.is_discrete() {
            self.data.iter().map(|&v| v * 255).collect()
        } else {
            self.data.clone()
        }
    }
}

impl AsRef<Grid> for Grid {
    fn as_ref(&self) -> &Grid {
        self
    }
}
