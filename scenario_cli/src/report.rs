use std::io::{self, Write};

use scenario_core::ScenarioSession;

/// Human-readable digest of a run: headline figures for the first and last
/// month plus any out-of-range parameters.
pub fn write_summary<W: Write>(writer: &mut W, session: &ScenarioSession) -> io::Result<()> {
    let params = session.params();
    let snapshots = session.snapshots();

    writeln!(writer, "months simulated: {}", snapshots.len())?;

    let (Some(first), Some(last)) = (snapshots.first(), snapshots.last()) else {
        writeln!(writer, "no snapshots (horizon {})", params.horizon_months)?;
        return Ok(());
    };

    writeln!(writer, "{:<12} {:>14} {:>14}", "", "first", "last")?;
    writeln!(writer, "{:<12} {:>14} {:>14}", "month", first.t, last.t)?;
    writeln!(
        writer,
        "{:<12} {:>14} {:>14}",
        "population", first.population, last.population
    )?;
    writeln!(
        writer,
        "{:<12} {:>14} {:>14}",
        "employed", first.employed, last.employed
    )?;
    writeln!(
        writer,
        "{:<12} {:>14} {:>14}",
        "unemployed", first.unemployed, last.unemployed
    )?;

    let net_migration: i64 = snapshots.iter().map(|snapshot| snapshot.migration).sum();
    writeln!(writer, "net migration over horizon: {net_migration}")?;
    writeln!(
        writer,
        "population change: {:+}",
        last.population - first.population
    )?;

    let violations = params.range_violations();
    if !violations.is_empty() {
        writeln!(writer, "out-of-range parameters:")?;
        for violation in violations {
            writeln!(writer, "  {violation}")?;
        }
    }

    Ok(())
}
