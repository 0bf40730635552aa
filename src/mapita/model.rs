use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Map center used when nothing else is configured: downtown Bogotá.
pub const BOGOTA_CENTER: LngLat = LngLat {
    lng: -74.0721,
    lat: 4.7110,
};

/// Default zoom level for the initial view.
pub const DEFAULT_ZOOM: f64 = 12.0;

/// A WGS84 position, serialized as a `[lng, lat]` pair.
///
/// Deserialization rejects non-finite or out-of-range values, so any
/// `LngLat` that came through serde is well-formed. Values constructed
/// directly in code should be checked with [`LngLat::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn is_valid(&self) -> bool {
        self.lng.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lng)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

impl TryFrom<[f64; 2]> for LngLat {
    type Error = String;

    fn try_from(pair: [f64; 2]) -> std::result::Result<Self, Self::Error> {
        let coords = Self {
            lng: pair[0],
            lat: pair[1],
        };
        if coords.is_valid() {
            Ok(coords)
        } else {
            Err(format!("coordinates out of range: [{}, {}]", pair[0], pair[1]))
        }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(coords: LngLat) -> Self {
        [coords.lng, coords.lat]
    }
}

/// A point of interest on the map.
///
/// `id` and `category` are immutable after creation; title, description and
/// coordinates change through [`PoiPatch`] updates on the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub coords: LngLat,
}

impl Poi {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        coords: LngLat,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            coords,
        }
    }

    /// Shape predicate applied at every external-data ingress (persisted
    /// load, import, replace-all). Returns the reason for rejection.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("POI id must not be empty".to_string());
        }
        if self.title.trim().is_empty() {
            return Err(format!("POI '{}' has an empty title", self.id));
        }
        if !self.coords.is_valid() {
            return Err(format!(
                "POI '{}' has invalid coordinates [{}, {}]",
                self.id, self.coords.lng, self.coords.lat
            ));
        }
        Ok(())
    }
}

/// A partial update to an existing POI. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PoiPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub coords: Option<LngLat>,
}

impl PoiPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn coords(coords: LngLat) -> Self {
        Self {
            coords: Some(coords),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.coords.is_none()
    }
}

static ICONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("viewpoint", "⛰️"),
        ("plaza", "🏛️"),
        ("museum", "🏺"),
        ("church", "⛪"),
        ("park", "🌳"),
        ("garden", "🌿"),
        ("neighborhood", "🏘️"),
        ("user", "🖊️"),
    ])
});

/// Icon for a category, with a generic pin fallback for unknown categories.
pub fn category_icon(category: &str) -> &'static str {
    ICONS.get(category).copied().unwrap_or("📍")
}

/// Derives a URL-safe slug from free text: lowercased, with runs of
/// non-alphanumeric characters collapsed to a single dash.
pub fn slugify(seed: &str) -> String {
    let mut slug = String::with_capacity(seed.len());
    let mut pending_dash = false;
    for c in seed.to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("poi");
    }
    slug
}

/// The built-in Bogotá collection, used when no persisted data exists.
pub fn default_pois() -> Vec<Poi> {
    vec![
        Poi::new(
            "monserrate",
            "Cerro de Monserrate",
            "Mirador icónico con iglesia y teleférico.",
            "viewpoint",
            LngLat::new(-74.05639, 4.60583),
        ),
        Poi::new(
            "plaza-bolivar",
            "Plaza de Bolívar",
            "Plaza principal del centro histórico.",
            "plaza",
            LngLat::new(-74.07600, 4.59815),
        ),
        Poi::new(
            "museo-oro",
            "Museo del Oro",
            "Gran colección precolombina de oro.",
            "museum",
            LngLat::new(-74.07200, 4.60192),
        ),
        Poi::new(
            "museo-botero",
            "Museo Botero",
            "Colección de Fernando Botero y arte internacional.",
            "museum",
            LngLat::new(-74.07323, 4.59665),
        ),
        Poi::new(
            "chorro-quevedo",
            "Chorro de Quevedo",
            "Plazoleta histórica en La Candelaria.",
            "plaza",
            LngLat::new(-74.069693, 4.597726),
        ),
        Poi::new(
            "catedral",
            "Catedral Primada",
            "Catedral frente a la Plaza de Bolívar.",
            "church",
            LngLat::new(-74.07515, 4.597842),
        ),
        Poi::new(
            "parque-simon",
            "Parque Simón Bolívar",
            "El parque metropolitano más grande de Bogotá.",
            "park",
            LngLat::new(-74.09389, 4.65806),
        ),
        Poi::new(
            "jardin-botanico",
            "Jardín Botánico",
            "Jardín Botánico José Celestino Mutis.",
            "garden",
            LngLat::new(-74.100198, 4.668211),
        ),
        Poi::new(
            "parque-93",
            "Parque de la 93",
            "Zona gastronómica y de eventos.",
            "park",
            LngLat::new(-74.04835, 4.67677),
        ),
        Poi::new(
            "usaquen",
            "Plaza de Usaquén",
            "Zona colonial con mercado y restaurantes.",
            "neighborhood",
            LngLat::new(-74.03106, 4.69682),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lnglat_validity_ranges() {
        assert!(LngLat::new(-74.07, 4.71).is_valid());
        assert!(LngLat::new(-180.0, 90.0).is_valid());
        assert!(!LngLat::new(-180.1, 0.0).is_valid());
        assert!(!LngLat::new(0.0, 90.5).is_valid());
        assert!(!LngLat::new(f64::NAN, 0.0).is_valid());
        assert!(!LngLat::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_lnglat_serializes_as_pair() {
        let json = serde_json::to_string(&LngLat::new(-74.07, 4.71)).unwrap();
        assert_eq!(json, "[-74.07,4.71]");

        let parsed: LngLat = serde_json::from_str("[-74.05639, 4.60583]").unwrap();
        assert_eq!(parsed, LngLat::new(-74.05639, 4.60583));
    }

    #[test]
    fn test_lnglat_rejects_out_of_range_on_parse() {
        assert!(serde_json::from_str::<LngLat>("[200.0, 4.7]").is_err());
        assert!(serde_json::from_str::<LngLat>("[-74.0, 91.0]").is_err());
    }

    #[test]
    fn test_poi_storage_shape() {
        let poi = Poi::new(
            "museo-oro",
            "Museo del Oro",
            "Gran colección precolombina de oro.",
            "museum",
            LngLat::new(-74.072, 4.60192),
        );
        let json = serde_json::to_value(&poi).unwrap();
        assert_eq!(json["id"], "museo-oro");
        assert_eq!(json["title"], "Museo del Oro");
        assert_eq!(json["category"], "museum");
        assert_eq!(json["coords"][0], -74.072);
        assert_eq!(json["coords"][1], 4.60192);

        let back: Poi = serde_json::from_value(json).unwrap();
        assert_eq!(back, poi);
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let mut poi = Poi::new("x", "Title", "", "user", LngLat::new(0.0, 0.0));
        assert!(poi.validate().is_ok());

        poi.title = "   ".to_string();
        assert!(poi.validate().is_err());

        poi.title = "Title".to_string();
        poi.id = String::new();
        assert!(poi.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_coords() {
        let poi = Poi::new("x", "Title", "", "user", LngLat::new(-200.0, 4.7));
        assert!(poi.validate().is_err());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Museo del Oro"), "museo-del-oro");
        assert_eq!(slugify("  Café--de---la 93!  "), "café-de-la-93");
        assert_eq!(slugify("Chorro de Quevedo"), "chorro-de-quevedo");
        assert_eq!(slugify("!!!"), "poi");
        assert_eq!(slugify(""), "poi");
    }

    #[test]
    fn test_default_pois_are_well_formed() {
        let pois = default_pois();
        assert_eq!(pois.len(), 10);

        let ids: HashSet<_> = pois.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), pois.len());

        for poi in &pois {
            assert!(poi.validate().is_ok(), "default POI {} invalid", poi.id);
        }
    }

    #[test]
    fn test_category_icon_fallback() {
        assert_eq!(category_icon("museum"), "🏺");
        assert_eq!(category_icon("park"), "🌳");
        assert_eq!(category_icon("something-else"), "📍");
    }
}
