//! Seam for place-name resolution
//!
//! This crate does not talk to any geocoding service. Front-ends bring their
//! own [`Geocoder`] and use [`resolve_pair`] to obtain the two inputs for the
//! geodesy functions.

use crate::types::Coordinate;
use tracing::debug;

/// Resolves a free-form place name to a coordinate
///
/// Returning `None` means the place could not be found. Implemented for any
/// `Fn(&str) -> Option<Coordinate>`.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> Option<Coordinate>;
}

impl<F> Geocoder for F
where
    F: Fn(&str) -> Option<Coordinate>,
{
    fn geocode(&self, query: &str) -> Option<Coordinate> {
        self(query)
    }
}

/// Resolve both endpoints of a route
///
/// Returns `None` if either name is not found, so that no computation is ever
/// attempted with a missing coordinate. Both names are always looked up.
pub fn resolve_pair<G: Geocoder + ?Sized>(
    geocoder: &G,
    from: &str,
    to: &str,
) -> Option<(Coordinate, Coordinate)> {
    let resolved_from = geocoder.geocode(from);
    if resolved_from.is_none() {
        debug!(query = from, "Geocoder found no match");
    }

    let resolved_to = geocoder.geocode(to);
    if resolved_to.is_none() {
        debug!(query = to, "Geocoder found no match");
    }

    resolved_from.zip(resolved_to)
}
