/// X and Y axis bounds for the wpm-over-time chart: the last sample's
/// second (at least 1, so the axis never collapses) and the peak wpm.
pub fn compute_chart_params(wpm_samples: &[(f64, f64)]) -> (f64, f64) {
    let highest_wpm = wpm_samples.iter().map(|&(_, wpm)| wpm).fold(0.0, f64::max);

    let overall_duration = wpm_samples
        .last()
        .map_or(1.0, |&(secs, _)| secs)
        .max(1.0);

    (overall_duration, highest_wpm.round())
}

/// Axis label text: whole numbers drop the fraction, the rest keep two places.
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}
