use crate::types::Coordinate;

/// Latitude/longitude rectangle, in degrees
///
/// Used by front-ends to fit a map view around a path.
///
/// # Limitations
///
/// **Anti-meridian handling**: simple min/max logic is used, so a path
/// crossing the ±180° longitude line produces a box spanning nearly the
/// whole globe instead of the smaller region on the other side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub left: f64,   // west longitude
    pub top: f64,    // north latitude
    pub right: f64,  // east longitude
    pub bottom: f64, // south latitude
}

impl BoundingBox {
    /// Create a bounding box from a slice of coordinates
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[Coordinate]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;

        let mut bbox = Self::from(first);
        for &point in rest {
            bbox.extend(point);
        }
        Some(bbox)
    }

    /// Grow the box if necessary to include `point`
    pub fn extend(&mut self, point: Coordinate) {
        self.left = self.left.min(point.lon);
        self.right = self.right.max(point.lon);
        self.top = self.top.max(point.lat);
        self.bottom = self.bottom.min(point.lat);
    }

    /// Grow the box if necessary to include `other`
    pub fn merge(&mut self, other: BoundingBox) {
        self.left = self.left.min(other.left);
        self.right = self.right.max(other.right);
        self.top = self.top.max(other.top);
        self.bottom = self.bottom.min(other.bottom);
    }

    /// Arithmetic mean of the latitude and longitude bounds
    ///
    /// This is a map-centering aid, not a geodesic midpoint; use
    /// [`crate::midpoint`] for the point halfway along a great circle.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.top + self.bottom) / 2.0,
            (self.left + self.right) / 2.0,
        )
    }

    /// Whether `point` lies inside the box or on its edge
    pub fn contains(&self, point: Coordinate) -> bool {
        (self.bottom..=self.top).contains(&point.lat)
            && (self.left..=self.right).contains(&point.lon)
    }
}

impl From<Coordinate> for BoundingBox {
    fn from(point: Coordinate) -> Self {
        Self {
            left: point.lon,
            top: point.lat,
            right: point.lon,
            bottom: point.lat,
        }
    }
}
