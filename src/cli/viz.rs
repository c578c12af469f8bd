//! Terminal charts using braille graphics
//!
//! One chart per metric series for multi-test runs: the per-test polyline
//! with point markers, plus a dashed line at the series average.

use drawille::Canvas;

use crate::sim::SimulationRun;

/// Default canvas size for a series chart, in braille pixels
pub const CHART_WIDTH: u32 = 120;
pub const CHART_HEIGHT: u32 = 40;

/// Render all seven per-metric charts for a run, in report order
pub fn run_charts(run: &SimulationRun) -> Vec<String> {
    vec![
        render_series("Full-scale speed", "knots", &run.speeds),
        render_series("Mean time between failures", "hours", &run.mtbfs),
        render_series("Full-scale cargo storage space", "cuft", &run.cargoes),
        render_series("Full-scale vehicle storage space", "sqft", &run.vehicles),
        render_series("Full-scale fuel storage capacity", "gallons", &run.fuels),
        render_series("Full-scale range", "nm", &run.ranges),
        render_series("Operational availability", "fraction", &run.aos),
    ]
}

/// Render one series as a braille line chart with a dashed average line
pub fn render_series(label: &str, units: &str, values: &[f64]) -> String {
    let n = values.len();
    if n < 2 {
        let value = values.first().copied().unwrap_or(0.0);
        return format!("{label} ({units}): {value:.2}");
    }

    let avg = values.iter().sum::<f64>() / n as f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }

    // Pad the vertical range so the extremes stay off the frame edges; a flat
    // series still gets a visible band.
    let pad = if max > min {
        (max - min) * 0.1
    } else {
        max.abs().max(1.0) * 0.05
    };
    let hi = max + pad;
    let lo = min - pad;
    let span = hi - lo;

    let mut canvas = Canvas::new(CHART_WIDTH, CHART_HEIGHT);
    let x_at = |i: usize| (i as f64 / (n - 1) as f64 * (CHART_WIDTH - 1) as f64).round() as u32;
    let y_at = |v: f64| ((hi - v) / span * (CHART_HEIGHT - 1) as f64).round() as u32;

    for i in 1..n {
        canvas.line(x_at(i - 1), y_at(values[i - 1]), x_at(i), y_at(values[i]));
    }

    // Cross markers at each test point
    for (i, &v) in values.iter().enumerate() {
        let (x, y) = (x_at(i), y_at(v));
        canvas.set(x, y);
        canvas.set(x + 1, y);
        canvas.set(x, y + 1);
        if x > 0 {
            canvas.set(x - 1, y);
        }
        if y > 0 {
            canvas.set(x, y - 1);
        }
    }

    // Dashed average line
    let avg_y = y_at(avg);
    let mut x = 0;
    while x < CHART_WIDTH {
        canvas.set(x, avg_y);
        canvas.set(x + 1, avg_y);
        x += 6;
    }

    format!(
        "{label} ({units})\n{}\n  tests 1-{n}   high {max:.2}   low {min:.2}   avg {avg:.2} (dashed)\n",
        canvas.frame()
    )
}
