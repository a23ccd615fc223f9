use scenario_schema::{LocationDisplayAttributes, NamedLocation, SimulationSnapshot};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("projection requires at least one snapshot")]
    NoSnapshots,
}

/// Apportion the latest employed total, and its change since the previous
/// month, across `locations` by weight share.
///
/// A single snapshot is compared against itself, so every growth is zero. A
/// non-positive total weight assigns every location a zero share.
pub fn project(
    snapshots: &[SimulationSnapshot],
    locations: &[NamedLocation],
) -> Result<Vec<LocationDisplayAttributes>, ProjectionError> {
    let last = snapshots.last().ok_or(ProjectionError::NoSnapshots)?;
    let previous = match snapshots.len() {
        1 => last,
        len => &snapshots[len - 2],
    };

    let employed = last.employed as f64;
    let employed_change = (last.employed - previous.employed) as f64;
    let total_weight: f64 = locations.iter().map(|location| location.weight).sum();

    let attributes = locations
        .iter()
        .map(|location| {
            let share = if total_weight > 0.0 {
                location.weight / total_weight
            } else {
                0.0
            };
            LocationDisplayAttributes {
                name: location.name.clone(),
                value: (share * employed).round() as i64,
                growth: (share * employed_change).round() as i64,
            }
        })
        .collect();

    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(t: u32, employed: i64) -> SimulationSnapshot {
        SimulationSnapshot {
            t,
            population: employed * 2,
            employed,
            unemployed: 0,
            migration: 0,
        }
    }

    fn locations() -> Vec<NamedLocation> {
        vec![
            NamedLocation::new("North", 60.0, 30.0, 3.0),
            NamedLocation::new("South", 45.0, 39.0, 1.0),
        ]
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(
            project(&[], &locations()),
            Err(ProjectionError::NoSnapshots)
        );
    }

    #[test]
    fn single_snapshot_has_zero_growth() {
        let attributes = project(&[snapshot(0, 1_000_000)], &locations()).expect("projection");
        assert_eq!(attributes.len(), 2);
        assert!(attributes.iter().all(|a| a.growth == 0));
        assert_eq!(attributes[0].value, 750_000);
        assert_eq!(attributes[1].value, 250_000);
    }

    #[test]
    fn growth_uses_last_two_snapshots() {
        let snapshots = [snapshot(0, 500), snapshot(1, 1_000), snapshot(2, 1_400)];
        let attributes = project(&snapshots, &locations()).expect("projection");
        assert_eq!(attributes[0].name, "North");
        assert_eq!(attributes[0].value, 1_050);
        assert_eq!(attributes[0].growth, 300);
        assert_eq!(attributes[1].value, 350);
        assert_eq!(attributes[1].growth, 100);
    }

    #[test]
    fn declining_employment_gives_negative_growth() {
        let snapshots = [snapshot(0, 2_000), snapshot(1, 1_200)];
        let attributes = project(&snapshots, &locations()).expect("projection");
        assert_eq!(attributes[0].growth, -600);
        assert_eq!(attributes[1].growth, -200);
    }

    #[test]
    fn zero_total_weight_yields_zero_shares() {
        let locations = vec![NamedLocation::new("Nowhere", 0.0, 0.0, 0.0)];
        let attributes = project(&[snapshot(0, 100), snapshot(1, 200)], &locations)
            .expect("projection");
        assert_eq!(attributes[0].value, 0);
        assert_eq!(attributes[0].growth, 0);
    }

    #[test]
    fn no_locations_gives_empty_output() {
        let attributes = project(&[snapshot(0, 100)], &[]).expect("projection");
        assert!(attributes.is_empty());
    }
}
