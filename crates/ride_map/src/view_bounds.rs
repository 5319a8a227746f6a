use geo::Coord;

/// Fraction of the width/height added on each side when fitting the viewport.
pub const DEFAULT_PADDING_RATIO: f64 = 0.1;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewBounds {
    min: Coord<f64>,
    max: Coord<f64>,
}

impl ViewBounds {
    pub fn extend<C>(&mut self, coord: C)
    where
        C: Into<Coord<f64>>,
    {
        let coord = coord.into();
        self.min.x = self.min.x.min(coord.x);
        self.min.y = self.min.y.min(coord.y);
        self.max.x = self.max.x.max(coord.x);
        self.max.y = self.max.y.max(coord.y);
    }

    /// True until at least one coordinate was added. Fitting a viewport to an
    /// empty region is invalid.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn contains<C>(&self, coord: C) -> bool
    where
        C: Into<Coord<f64>>,
    {
        let coord = coord.into();
        self.min.x <= coord.x
            && coord.x <= self.max.x
            && self.min.y <= coord.y
            && coord.y <= self.max.y
    }

    /// Grows every side by `ratio` times the span on that axis.
    pub fn padded(&self, ratio: f64) -> ViewBounds {
        if self.is_empty() {
            return *self;
        }

        let width_buffer = (self.max.x - self.min.x) * ratio;
        let height_buffer = (self.max.y - self.min.y) * ratio;

        ViewBounds {
            min: Coord {
                x: self.min.x - width_buffer,
                y: self.min.y - height_buffer,
            },
            max: Coord {
                x: self.max.x + width_buffer,
                y: self.max.y + height_buffer,
            },
        }
    }

    pub fn min(&self) -> Coord<f64> {
        self.min
    }

    pub fn max(&self) -> Coord<f64> {
        self.max
    }

    /// GeoJSON bbox order: `[west, south, east, north]`.
    pub fn to_bbox(&self) -> Vec<f64> {
        vec![self.min.x, self.min.y, self.max.x, self.max.y]
    }
}

impl Default for ViewBounds {
    fn default() -> Self {
        ViewBounds {
            min: Coord {
                x: f64::MAX,
                y: f64::MAX,
            },
            max: Coord {
                x: f64::MIN,
                y: f64::MIN,
            },
        }
    }
}

impl<C> FromIterator<C> for ViewBounds
where
    C: Into<Coord<f64>>,
{
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        let mut bounds = ViewBounds::default();
        for coord in iter {
            bounds.extend(coord);
        }
        bounds
    }
}
