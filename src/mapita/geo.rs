//! Geocoding and directions boundaries. Both services live outside this
//! crate (HTTP APIs of whichever mapping vendor the host uses); mapita only
//! defines the contracts it consumes and leaves transport to the host.

use crate::error::Result;
use crate::model::LngLat;

/// One geocoding result.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeHit {
    /// Short display name ("Museo Nacional").
    pub label: String,
    /// Full formatted address.
    pub address: String,
    pub coords: LngLat,
}

/// Forward geocoding: free text → candidate places.
///
/// An empty result vector is a valid answer ("nothing found"); transport
/// failures surface as `MapitaError::Service`.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> Result<Vec<GeocodeHit>>;
}

/// Point-to-point routing. Returns the route polyline.
pub trait Directions {
    fn route(&self, start: LngLat, end: LngLat) -> Result<Vec<LngLat>>;
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::MapitaError;

    /// Serves a canned hit list for any query.
    pub struct CannedGeocoder {
        pub hits: Vec<GeocodeHit>,
    }

    impl Geocoder for CannedGeocoder {
        fn geocode(&self, _query: &str) -> Result<Vec<GeocodeHit>> {
            Ok(self.hits.clone())
        }
    }

    /// Always fails, for exercising the no-mutation-on-failure paths.
    pub struct FailingGeocoder;

    impl Geocoder for FailingGeocoder {
        fn geocode(&self, _query: &str) -> Result<Vec<GeocodeHit>> {
            Err(MapitaError::Service("geocoding unavailable".to_string()))
        }
    }

    /// Routes everything as a straight two-point polyline.
    pub struct StraightLineDirections;

    impl Directions for StraightLineDirections {
        fn route(&self, start: LngLat, end: LngLat) -> Result<Vec<LngLat>> {
            Ok(vec![start, end])
        }
    }

    /// Always reports no route.
    pub struct NoRouteDirections;

    impl Directions for NoRouteDirections {
        fn route(&self, _start: LngLat, _end: LngLat) -> Result<Vec<LngLat>> {
            Err(MapitaError::Service("no route found".to_string()))
        }
    }
}
