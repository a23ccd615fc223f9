mod common;

use anyhow::Result;
use scenario_core::{
    builtin_locations, feature_collection, project, simulate, to_delimited_text, MapStyle,
};
use scenario_schema::DELIMITED_HEADER;

#[test]
fn delimited_text_has_one_row_per_month() {
    let snapshots = simulate(&common::params_with_horizon(18));
    let text = to_delimited_text(&snapshots);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], DELIMITED_HEADER);
    assert_eq!(lines.len(), 19);
    for (index, line) in lines[1..].iter().enumerate() {
        let fields: Vec<i64> = line
            .split(',')
            .map(|field| field.parse().expect("integer field"))
            .collect();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0], index as i64);
        assert_eq!(fields[1], snapshots[index].population);
    }
}

#[test]
fn geojson_overlay_for_default_run() -> Result<()> {
    let snapshots = simulate(&common::params_with_horizon(12));
    let locations = builtin_locations();
    let attributes = project(&snapshots, &locations)?;
    let collection = feature_collection(&locations, &attributes, &MapStyle::builtin())?;

    let json: serde_json::Value = serde_json::from_str(&collection.to_json_string()?)?;
    let features = json["features"].as_array().expect("features");
    assert_eq!(features.len(), locations.len());

    for (feature, location) in features.iter().zip(locations.iter()) {
        assert_eq!(feature["properties"]["name"], location.name.as_str());
        let radius = feature["properties"]["radius"].as_f64().expect("radius");
        assert!((4.0..=26.0).contains(&radius));
        let color = feature["properties"]["color"].as_str().expect("color");
        assert!(color.starts_with('#') && color.len() == 7);
    }
    Ok(())
}
