//! Marker styling for the map overlay.
//!
//! Radius is driven by a location's apportioned employment value and colour by
//! its growth. Both are linear ramps between fixed stops, clamped to the first
//! and last stop outside the covered range.

use std::{
    env, fmt, fs, io,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

use serde::Deserialize;
use thiserror::Error;

pub const BUILTIN_MAP_STYLE_CONFIG: &str = include_str!("data/map_style_config.json");

/// Validated ramp stops. Only constructed through [`MapStyle::from_json_str`],
/// so both ramps are non-empty and strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct MapStyle {
    radius_stops: Vec<(f64, f64)>,
    color_stops: Vec<(f64, Rgb)>,
}

#[derive(Deserialize)]
struct MapStyleDocument {
    radius_stops: Vec<(f64, f64)>,
    color_stops: Vec<(f64, Rgb)>,
}

impl MapStyle {
    pub fn builtin() -> Arc<Self> {
        Arc::new(
            MapStyle::from_json_str(BUILTIN_MAP_STYLE_CONFIG)
                .expect("builtin map style config should parse"),
        )
    }

    pub fn from_json_str(json: &str) -> Result<Self, MapStyleConfigError> {
        let document: MapStyleDocument = serde_json::from_str(json)?;
        check_stops("radius_stops", document.radius_stops.iter().map(|(at, _)| *at))?;
        check_stops("color_stops", document.color_stops.iter().map(|(at, _)| *at))?;
        Ok(MapStyle {
            radius_stops: document.radius_stops,
            color_stops: document.color_stops,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, MapStyleConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| MapStyleConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        MapStyle::from_json_str(&contents)
    }

    pub fn radius_stops(&self) -> &[(f64, f64)] {
        &self.radius_stops
    }

    pub fn color_stops(&self) -> &[(f64, Rgb)] {
        &self.color_stops
    }

    /// Marker radius for an employment value.
    pub fn radius_for(&self, value: i64) -> f64 {
        let keys: Vec<f64> = self.radius_stops.iter().map(|(at, _)| *at).collect();
        let (lo, hi, t) = locate(&keys, value as f64);
        let (_, from) = self.radius_stops[lo];
        let (_, to) = self.radius_stops[hi];
        from + (to - from) * t
    }

    /// Marker colour for a growth delta.
    pub fn color_for(&self, growth: i64) -> Rgb {
        let keys: Vec<f64> = self.color_stops.iter().map(|(at, _)| *at).collect();
        let (lo, hi, t) = locate(&keys, growth as f64);
        self.color_stops[lo].1.lerp(self.color_stops[hi].1, t)
    }
}

fn check_stops(
    name: &'static str,
    keys: impl Iterator<Item = f64>,
) -> Result<(), MapStyleConfigError> {
    let keys: Vec<f64> = keys.collect();
    if keys.is_empty() {
        return Err(MapStyleConfigError::EmptyStops { name });
    }
    if keys.windows(2).any(|pair| !(pair[0] < pair[1])) {
        return Err(MapStyleConfigError::UnorderedStops { name });
    }
    Ok(())
}

/// Bracketing stop indices and the interpolation fraction between them.
fn locate(keys: &[f64], x: f64) -> (usize, usize, f64) {
    let last = keys.len() - 1;
    if x <= keys[0] {
        return (0, 0, 0.0);
    }
    if x >= keys[last] {
        return (last, last, 0.0);
    }
    let hi = keys.iter().position(|at| *at > x).unwrap_or(last);
    let lo = hi - 1;
    let t = (x - keys[lo]) / (keys[hi] - keys[lo]);
    (lo, hi, t)
}

#[derive(Debug, Error)]
pub enum MapStyleConfigError {
    #[error("failed to parse map style config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read map style config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{name} must contain at least one stop")]
    EmptyStops { name: &'static str },
    #[error("{name} must be strictly increasing")]
    UnorderedStops { name: &'static str },
}

/// 8-bit sRGB colour written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let channel = |from: u8, to: u8| {
            let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid colour {0:?}, expected #rrggbb")]
pub struct ColorParseError(pub String);

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.is_ascii())
            .ok_or_else(|| ColorParseError(s.to_string()))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError(s.to_string()))
        };
        Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Env var naming an optional map style document.
pub const MAP_STYLE_PATH_ENV: &str = "SCENARIO_MAP_STYLE_PATH";

pub fn load_map_style_from_env() -> Arc<MapStyle> {
    let Some(path) = env::var(MAP_STYLE_PATH_ENV).ok().map(PathBuf::from) else {
        tracing::debug!(target: "scenario::config", "map_style.loaded=builtin");
        return MapStyle::builtin();
    };

    match MapStyle::from_file(&path) {
        Ok(style) => {
            tracing::info!(
                target: "scenario::config",
                path = %path.display(),
                "map_style.loaded=file"
            );
            Arc::new(style)
        }
        Err(err) => {
            tracing::warn!(
                target: "scenario::config",
                path = %path.display(),
                error = %err,
                "map_style.load_failed"
            );
            MapStyle::builtin()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_parses() {
        let style = MapStyle::builtin();
        assert_eq!(style.radius_stops().len(), 4);
        assert_eq!(style.color_stops().len(), 3);
    }

    #[test]
    fn radius_hits_stops_and_clamps() {
        let style = MapStyle::builtin();
        assert_eq!(style.radius_for(50_000), 4.0);
        assert_eq!(style.radius_for(1_000_000), 16.0);
        assert_eq!(style.radius_for(10), 4.0);
        assert_eq!(style.radius_for(80_000_000), 26.0);
        assert_eq!(style.radius_for(175_000), 7.0);
        assert_eq!(style.radius_for(3_000_000), 21.0);
    }

    #[test]
    fn color_ramp_passes_through_light_blue() {
        let style = MapStyle::builtin();
        assert_eq!(style.color_for(0).to_string(), "#abd9e9");
        assert_eq!(style.color_for(-50_000).to_string(), "#d7191c");
        assert_eq!(style.color_for(10_000).to_string(), "#1a9641");
        assert_eq!(style.color_for(5_000), Rgb::new(0x63, 0xb8, 0x95));
    }

    #[test]
    fn rejects_unordered_stops() {
        let err = MapStyle::from_json_str(
            r##"{"radius_stops":[[10,1],[5,2]],"color_stops":[[0,"#000000"]]}"##,
        )
        .expect_err("unordered");
        assert!(matches!(
            err,
            MapStyleConfigError::UnorderedStops {
                name: "radius_stops"
            }
        ));
    }

    #[test]
    fn rejects_empty_stops() {
        let err = MapStyle::from_json_str(r#"{"radius_stops":[],"color_stops":[]}"#)
            .expect_err("empty");
        assert!(matches!(
            err,
            MapStyleConfigError::EmptyStops {
                name: "radius_stops"
            }
        ));
    }

    #[test]
    fn env_path_overrides_builtin_and_falls_back() {
        let path = env::temp_dir().join(format!(
            "scenario_map_style_env_{}.json",
            std::process::id()
        ));
        fs::write(
            &path,
            r##"{"radius_stops":[[0,2],[100,8]],"color_stops":[[0,"#000000"]]}"##,
        )
        .expect("write fixture");

        env::set_var(MAP_STYLE_PATH_ENV, &path);
        let style = load_map_style_from_env();
        assert_eq!(style.radius_stops(), &[(0.0, 2.0), (100.0, 8.0)]);
        assert_eq!(style.radius_for(50), 5.0);

        fs::write(&path, r#"{"radius_stops":[],"color_stops":[]}"#).expect("write fixture");
        assert_eq!(load_map_style_from_env(), MapStyle::builtin());

        env::remove_var(MAP_STYLE_PATH_ENV);
        assert_eq!(load_map_style_from_env(), MapStyle::builtin());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn rejects_bad_colour() {
        assert!(MapStyle::from_json_str(
            r#"{"radius_stops":[[0,1]],"color_stops":[[0,"blue"]]}"#
        )
        .is_err());
        assert_eq!(
            "#12345".parse::<Rgb>(),
            Err(ColorParseError("#12345".to_string()))
        );
    }
}
