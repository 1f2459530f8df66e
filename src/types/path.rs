use crate::types::{BoundingBox, Coordinate};

/// Ordered points sampled along a great-circle arc
///
/// Samples are spaced uniformly by angle along the arc, which is not the same
/// as uniform spacing on a projected map. A path always has at least two
/// points: the first is the start and the last is the end coordinate exactly
/// as they were passed in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GreatCirclePath {
    points: Vec<Coordinate>,
}

impl GreatCirclePath {
    /// Callers guarantee `points.len() >= 2`
    pub(crate) fn from_points(points: Vec<Coordinate>) -> Self {
        debug_assert!(points.len() >= 2);
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; provided for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Coordinate {
        self.points[0]
    }

    pub fn last(&self) -> Coordinate {
        self.points[self.points.len() - 1]
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.points.iter()
    }

    pub fn into_inner(self) -> Vec<Coordinate> {
        self.points
    }

    /// Smallest latitude/longitude rectangle containing every sample
    ///
    /// See [`BoundingBox`] for the anti-meridian limitation.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::from(self.first());
        for &point in &self.points[1..] {
            bbox.extend(point);
        }
        bbox
    }
}

impl<'a> IntoIterator for &'a GreatCirclePath {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for GreatCirclePath {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl AsRef<[Coordinate]> for GreatCirclePath {
    fn as_ref(&self) -> &[Coordinate] {
        &self.points
    }
}
