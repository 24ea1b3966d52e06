//! Plain-text congestion report.

use std::fmt::Write;

use rn_congestion::{Congestion, CongestionRecord, CongestionSummary, Severity, Stats};

const RULE_WIDTH: usize = 80;

/// Render the report for one snapshot.  `source` is only used in the
/// heading.
pub fn render(source: &str, assessments: &[Congestion]) -> Result<String, std::fmt::Error> {
    let summary = CongestionSummary::from_assessments(assessments);
    let mut out = String::new();
    write_report(&mut out, source, assessments, &summary)?;
    Ok(out)
}

fn write_report(
    out: &mut String,
    source: &str,
    assessments: &[Congestion],
    summary: &CongestionSummary,
) -> std::fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "Congestion analysis: {source}")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Roads: {}  (measured {})", summary.road_count, summary.measured_count())?;
    writeln!(out)?;

    let (Some(mult), Some(vc)) = (summary.multiplier, summary.vc_ratio) else {
        writeln!(out, "No road has a finite congestion multiplier.")?;
        write_unbounded(out, assessments)?;
        return Ok(());
    };

    writeln!(out, "Congestion multiplier")?;
    write_stats(out, &mult, 6)?;
    writeln!(out, "  spread:  {:.1}%", mult.spread_pct())?;
    writeln!(out)?;

    writeln!(out, "Volume / capacity")?;
    write_stats(out, &vc, 4)?;
    writeln!(out)?;

    let delay = Stats::from_values(
        assessments.iter().filter_map(Congestion::as_finite).map(|r| r.time_increase_pct),
    );
    if let Some(delay) = delay {
        writeln!(out, "Travel-time increase (%)")?;
        write_stats(out, &delay, 2)?;
        writeln!(out)?;
    }

    if let Some(r) = &summary.most_congested {
        write_road(out, "Most congested", r)?;
    }
    if let Some(r) = &summary.least_congested {
        write_road(out, "Least congested", r)?;
    }

    writeln!(out, "Severity bands")?;
    for sev in Severity::ALL {
        writeln!(
            out,
            "  {:<20} {:>10}  {:>5} road(s)  {:>5.1}%",
            sev.as_str(),
            sev.range_label(),
            summary.bands.get(sev),
            summary.bands.share_pct(sev),
        )?;
    }

    write_unbounded(out, assessments)
}

fn write_stats(out: &mut String, s: &Stats, precision: usize) -> std::fmt::Result {
    writeln!(out, "  min:     {:.*}", precision, s.min)?;
    writeln!(out, "  max:     {:.*}", precision, s.max)?;
    writeln!(out, "  mean:    {:.*}", precision, s.mean)
}

fn write_road(out: &mut String, heading: &str, r: &CongestionRecord) -> std::fmt::Result {
    writeln!(out, "{heading}: {} ({} → {})", r.road_id, r.start, r.end)?;
    writeln!(out, "  lanes {}, vehicles {}, capacity {:.0} veh/h", r.lanes, r.vehicles, r.capacity_vph)?;
    writeln!(out, "  V/C {:.4}, multiplier {:.6}", r.vc_ratio, r.multiplier)?;
    writeln!(
        out,
        "  free-flow {:.1}s, actual {:.1}s (+{:.2}%)",
        r.free_flow_secs, r.actual_secs, r.time_increase_pct
    )?;
    writeln!(out)
}

fn write_unbounded(out: &mut String, assessments: &[Congestion]) -> std::fmt::Result {
    let unbounded: Vec<_> = assessments
        .iter()
        .filter_map(|c| match c {
            Congestion::Unbounded { road_id, reason } => Some((road_id, reason)),
            Congestion::Finite(_) => None,
        })
        .collect();
    if unbounded.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Unbounded roads (excluded from the figures above)")?;
    for (id, reason) in unbounded {
        writeln!(out, "  {id}: {reason}")?;
    }
    Ok(())
}
