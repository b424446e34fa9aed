//! Map markers for an institution and its map children.
//!
//! Only the root institution's map visibility flag decides whether a map is
//! shown at all. Each institution then gets a marker if it has both
//! coordinates; a coordinate of exactly `0.0` counts as missing.

use nkc_config::MapConfig;
use nkc_core::entities::Institution;
use schemars::JsonSchema;
use serde::Serialize;

use crate::assets::AssetFiles;
use crate::template::{MapInfoView, RenderError};

/// Marker keyword used when a type has no mapping or its icon is missing.
pub const DEFAULT_ICON_KEYWORD: &str = "default";

/// One marker as consumed by the map frontend.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct MapMarker {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Rendered info snippet.
    pub info: String,
    #[serde(rename = "type")]
    pub marker_type: String,
    pub icon: String,
}

/// Coordinates usable for a marker.
#[must_use]
pub fn marker_position(institution: &Institution) -> Option<(f64, f64)> {
    let address = institution.address.as_ref()?;
    let latitude = address.latitude.filter(|v| *v != 0.0)?;
    let longitude = address.longitude.filter(|v| *v != 0.0)?;
    Some((latitude, longitude))
}

/// Builds markers from institutions using the map configuration.
pub struct MarkerFactory<'a> {
    config: &'a MapConfig,
    assets: &'a dyn AssetFiles,
    info: &'a MapInfoView<'a>,
}

impl<'a> MarkerFactory<'a> {
    #[must_use]
    pub fn new(
        config: &'a MapConfig,
        assets: &'a dyn AssetFiles,
        info: &'a MapInfoView<'a>,
    ) -> Self {
        Self {
            config,
            assets,
            info,
        }
    }

    /// Marker for `institution`, or `None` if it has no usable coordinates.
    ///
    /// The visibility flag is not consulted here.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the info snippet fails to render.
    pub fn create(&self, institution: &Institution) -> Result<Option<MapMarker>, RenderError> {
        let Some((latitude, longitude)) = marker_position(institution) else {
            return Ok(None);
        };

        Ok(Some(MapMarker {
            title: institution.name.clone(),
            latitude,
            longitude,
            info: self.info.render(institution)?,
            marker_type: format!("institution-{}", institution.type_id()),
            icon: self.icon(institution.type_id()),
        }))
    }

    /// Icon url for an institution type.
    ///
    /// Falls back to the default icon when the mapped file does not exist.
    #[must_use]
    pub fn icon(&self, type_id: i64) -> String {
        let keyword = self.config.icon_keyword(type_id);
        let icon = self.icon_url(keyword);
        if keyword == DEFAULT_ICON_KEYWORD || self.assets.exists(icon.trim_start_matches('/')) {
            return icon;
        }

        tracing::warn!(type_id, icon = %icon, "marker icon missing; using default");
        self.icon_url(DEFAULT_ICON_KEYWORD)
    }

    fn icon_url(&self, keyword: &str) -> String {
        self.config.icon_template.replacen("%s", keyword, 1)
    }
}

/// Markers for `root` followed by its map children, in order.
///
/// A root that is not map-visible yields no markers at all. With
/// `include_children` unset only the root is considered.
///
/// # Errors
///
/// Returns [`RenderError`] if any info snippet fails to render.
pub fn extract_markers(
    factory: &MarkerFactory<'_>,
    root: &Institution,
    include_children: bool,
) -> Result<Vec<MapMarker>, RenderError> {
    if !root.map_visibility {
        return Ok(Vec::new());
    }

    let children: &[Institution] = if include_children {
        &root.map_children
    } else {
        &[]
    };

    let mut markers = Vec::with_capacity(1 + children.len());
    for institution in std::iter::once(root).chain(children) {
        if let Some(marker) = factory.create(institution)? {
            markers.push(marker);
        }
    }
    Ok(markers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::ViewPaths;
    use nkc_config::NkcConfig;
    use nkc_core::entities::{Address, InstitutionType};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use std::collections::BTreeMap;

    struct Present(&'static [&'static str]);

    impl AssetFiles for Present {
        fn exists(&self, path: &str) -> bool {
            self.0.iter().any(|present| *present == path)
        }
    }

    fn renderer(_: &ViewPaths, _: &str, context: &Value) -> Result<String, RenderError> {
        Ok(format!("info {}", context["institution"]["id"]))
    }

    fn placed(id: i64, latitude: f64, longitude: f64) -> Institution {
        let mut institution = Institution::new(id, format!("inst {id}"));
        institution.map_visibility = true;
        institution.address = Some(Address {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Address::default()
        });
        institution
    }

    fn map_config() -> MapConfig {
        MapConfig {
            icon_mapping: BTreeMap::from([
                ("1".to_string(), "church".to_string()),
                ("2".to_string(), "kita".to_string()),
            ]),
            ..MapConfig::default()
        }
    }

    fn with_factory<T>(assets: &dyn AssetFiles, f: impl FnOnce(&MarkerFactory<'_>) -> T) -> T {
        let config = NkcConfig::default();
        let info = MapInfoView::new(&renderer, &config, 1).unwrap();
        let map = map_config();
        let factory = MarkerFactory::new(&map, assets, &info);
        f(&factory)
    }

    #[test]
    fn visible_root_with_coordinates_gets_marker() {
        let mut root = placed(1, 54.3, 10.1);
        root.institution_type = Some(InstitutionType {
            id: 1,
            name: "Kirchengemeinde".into(),
        });

        let markers = with_factory(&Present(&["assets/icons/institution-church.png"]), |f| {
            extract_markers(f, &root, false).unwrap()
        });
        assert_eq!(
            markers,
            vec![MapMarker {
                title: "inst 1".into(),
                latitude: 54.3,
                longitude: 10.1,
                info: "info 1".into(),
                marker_type: "institution-1".into(),
                icon: "/assets/icons/institution-church.png".into(),
            }]
        );
    }

    #[test]
    fn invisible_root_yields_nothing() {
        let mut root = placed(1, 54.3, 10.1);
        root.map_visibility = false;
        let markers = with_factory(&Present(&[]), |f| extract_markers(f, &root, true).unwrap());
        assert!(markers.is_empty());
    }

    #[test]
    fn zero_coordinate_counts_as_missing() {
        let root = placed(1, 0.0, 10.1);
        let markers = with_factory(&Present(&[]), |f| extract_markers(f, &root, false).unwrap());
        assert!(markers.is_empty());

        let mut root = placed(1, 54.3, 10.1);
        root.address.as_mut().unwrap().longitude = None;
        assert_eq!(marker_position(&root), None);
    }

    #[test]
    fn children_follow_root_and_skip_unplaceable() {
        let mut root = placed(1, 54.3, 10.1);
        let mut unflagged = placed(3, 54.0, 10.0);
        unflagged.map_visibility = false;
        root.map_children = vec![
            placed(2, 54.1, 10.2),
            unflagged,
            placed(4, 0.0, 10.3),
            placed(5, 54.2, 10.3),
        ];

        let titles = with_factory(&Present(&[]), |f| {
            extract_markers(f, &root, true)
                .unwrap()
                .into_iter()
                .map(|m| m.title)
                .collect::<Vec<_>>()
        });
        assert_eq!(titles, vec!["inst 1", "inst 2", "inst 3", "inst 5"]);

        let only_root = with_factory(&Present(&[]), |f| extract_markers(f, &root, false).unwrap());
        assert_eq!(only_root.len(), 1);
    }

    #[test]
    fn child_visibility_flag_is_ignored() {
        let mut root = placed(1, 54.3, 10.1);
        let mut child = Institution::new(2, "Kita Arche");
        child.address = Some(Address {
            latitude: Some(54.33),
            longitude: Some(10.14),
            ..Address::default()
        });
        root.map_children = vec![child];

        let titles = with_factory(&Present(&[]), |f| {
            extract_markers(f, &root, true)
                .unwrap()
                .into_iter()
                .map(|m| m.title)
                .collect::<Vec<_>>()
        });
        assert_eq!(titles, vec!["inst 1", "Kita Arche"]);
    }

    #[test]
    fn hidden_root_suppresses_visible_children() {
        let mut root = placed(1, 54.3, 10.1);
        root.map_visibility = false;
        root.map_children = vec![placed(2, 54.1, 10.2)];
        let markers = with_factory(&Present(&[]), |f| extract_markers(f, &root, true).unwrap());
        assert!(markers.is_empty());
    }

    #[test]
    fn missing_icon_file_falls_back_to_default() {
        let icon = with_factory(&Present(&["assets/icons/institution-church.png"]), |f| {
            f.icon(2)
        });
        assert_eq!(icon, "/assets/icons/institution-default.png");
    }

    #[test]
    fn unmapped_type_uses_default_without_lookup() {
        let icon = with_factory(&Present(&[]), |f| f.icon(99));
        assert_eq!(icon, "/assets/icons/institution-default.png");
    }

    #[test]
    fn marker_serializes_type_field() {
        let marker = MapMarker {
            title: "Dom".into(),
            latitude: 1.0,
            longitude: 2.0,
            info: String::new(),
            marker_type: "institution-0".into(),
            icon: "/x.png".into(),
        };
        let value = serde_json::to_value(&marker).unwrap();
        assert_eq!(value["type"], "institution-0");
        assert!(value.get("marker_type").is_none());
    }
}
