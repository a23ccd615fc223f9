use std::io::{self, Write};

use scenario_schema::{
    LocationDisplayAttributes, NamedLocation, SimulationSnapshot, DELIMITED_HEADER,
};
use serde::Serialize;
use thiserror::Error;

use crate::map_style::MapStyle;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode export: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{locations} locations but {attributes} display attributes")]
    LengthMismatch { locations: usize, attributes: usize },
}

/// Write the header row followed by one row per snapshot, in order.
pub fn write_delimited<W: Write>(
    writer: &mut W,
    snapshots: &[SimulationSnapshot],
) -> Result<(), ExportError> {
    writeln!(writer, "{DELIMITED_HEADER}")?;
    for snapshot in snapshots {
        writeln!(writer, "{}", snapshot.delimited_row())?;
    }
    Ok(())
}

pub fn to_delimited_text(snapshots: &[SimulationSnapshot]) -> String {
    let mut text = String::with_capacity(DELIMITED_HEADER.len() + 1 + snapshots.len() * 48);
    text.push_str(DELIMITED_HEADER);
    text.push('\n');
    for snapshot in snapshots {
        text.push_str(&snapshot.delimited_row());
        text.push('\n');
    }
    text
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    pub geometry: PointGeometry,
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    kind: &'static str,
    /// `[lon, lat]`
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureProperties {
    pub name: String,
    pub value: i64,
    pub growth: i64,
    pub radius: f64,
    pub color: String,
}

impl FeatureCollection {
    pub fn to_json_string(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Pair each location with its projected attributes as a GeoJSON point
/// feature, styled with `style`.
pub fn feature_collection(
    locations: &[NamedLocation],
    attributes: &[LocationDisplayAttributes],
    style: &MapStyle,
) -> Result<FeatureCollection, ExportError> {
    if locations.len() != attributes.len() {
        return Err(ExportError::LengthMismatch {
            locations: locations.len(),
            attributes: attributes.len(),
        });
    }

    let features = locations
        .iter()
        .zip(attributes)
        .map(|(location, display)| Feature {
            kind: "Feature",
            geometry: PointGeometry {
                kind: "Point",
                coordinates: [location.lon, location.lat],
            },
            properties: FeatureProperties {
                name: location.name.clone(),
                value: display.value,
                growth: display.growth,
                radius: style.radius_for(display.value),
                color: style.color_for(display.growth).to_string(),
            },
        })
        .collect();

    Ok(FeatureCollection {
        kind: "FeatureCollection",
        features,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::simulate;
    use scenario_schema::ScenarioParameters;

    fn three_months() -> Vec<SimulationSnapshot> {
        simulate(&ScenarioParameters {
            horizon_months: 3,
            ..ScenarioParameters::default()
        })
    }

    #[test]
    fn delimited_export_of_default_run() {
        insta::assert_snapshot!(to_delimited_text(&three_months()).trim_end(), @r"
        t,population,employed,unemployed,migration
        0,145983939,89079399,10189679,12500
        1,145967881,90631457,8626702,12500
        2,145951826,92236595,7010646,12500
        ");
    }

    #[test]
    fn writer_and_string_exports_agree() {
        let snapshots = three_months();
        let mut buffer = Vec::new();
        write_delimited(&mut buffer, &snapshots).expect("write");
        assert_eq!(
            String::from_utf8(buffer).expect("utf8"),
            to_delimited_text(&snapshots)
        );
    }

    #[test]
    fn empty_sequence_exports_header_only() {
        assert_eq!(to_delimited_text(&[]), format!("{DELIMITED_HEADER}\n"));
    }

    #[test]
    fn features_carry_style_and_lon_lat_order() {
        let locations = vec![NamedLocation::new("Kazan", 55.7963, 49.1088, 1.0)];
        let attributes = vec![LocationDisplayAttributes {
            name: "Kazan".to_string(),
            value: 300_000,
            growth: -20_000,
        }];
        let collection =
            feature_collection(&locations, &attributes, &MapStyle::builtin()).expect("features");
        let json = serde_json::to_value(&collection).expect("json");

        assert_eq!(json["type"], "FeatureCollection");
        let feature = &json["features"][0];
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["geometry"]["type"], "Point");
        assert_eq!(feature["geometry"]["coordinates"][0], 49.1088);
        assert_eq!(feature["geometry"]["coordinates"][1], 55.7963);
        assert_eq!(feature["properties"]["value"], 300_000);
        assert_eq!(feature["properties"]["radius"], 10.0);
        assert_eq!(feature["properties"]["color"], "#d7191c");
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let locations = vec![NamedLocation::new("A", 0.0, 0.0, 1.0)];
        assert!(matches!(
            feature_collection(&locations, &[], &MapStyle::builtin()),
            Err(ExportError::LengthMismatch {
                locations: 1,
                attributes: 0
            })
        ));
    }
}
