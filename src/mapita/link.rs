//! Shareable view links: `lng`, `lat` and `z` query parameters on the
//! hosting page URL. Parsing is tolerant — malformed or missing values fall
//! back to the configured defaults instead of failing.

use crate::model::LngLat;

/// The view a link asks for. `None` fields mean "use the default".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewLink {
    pub center: Option<LngLat>,
    pub zoom: Option<f64>,
}

impl ViewLink {
    /// Parses a query string (`lng=-74.07&lat=4.71&z=13`, with or without a
    /// leading `?`). A center is only adopted when both `lng` and `lat`
    /// parse to an in-range pair; a zoom only when `z` parses to a sane
    /// level. Anything else is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut lng = None;
        let mut lat = None;
        let mut zoom = None;

        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "lng" => lng = value.parse::<f64>().ok(),
                "lat" => lat = value.parse::<f64>().ok(),
                "z" => zoom = value.parse::<f64>().ok(),
                _ => {}
            }
        }

        let center = match (lng, lat) {
            (Some(lng), Some(lat)) => {
                let coords = LngLat::new(lng, lat);
                coords.is_valid().then_some(coords)
            }
            _ => None,
        };

        let zoom = zoom.filter(|z| z.is_finite() && (0.0..=22.0).contains(z));

        Self { center, zoom }
    }

    /// Resolves against defaults, yielding the initial map view.
    pub fn resolve(&self, default_center: LngLat, default_zoom: f64) -> (LngLat, f64) {
        (
            self.center.unwrap_or(default_center),
            self.zoom.unwrap_or(default_zoom),
        )
    }

    /// Formats a view as a shareable query string.
    pub fn to_query(center: LngLat, zoom: f64) -> String {
        format!("lng={}&lat={}&z={}", center.lng, center.lat, zoom)
    }
}
