// File: crates/passchart-core/src/grid.rs
// Summary: Tick layout helpers (nice linear steps, log10 decades).

/// Round `range` to a "nice" number (1, 2, 5 or 10 times a power of ten).
pub fn nice_num(range: f64, round: bool) -> f64 {
    if range <= 0.0 || !range.is_finite() { return 1.0; }
    let exponent = range.log10().floor();
    let fraction = range / 10f64.powf(exponent);
    let nice = if round {
        if fraction < 1.5 { 1.0 } else if fraction < 3.0 { 2.0 } else if fraction < 7.0 { 5.0 } else { 10.0 }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * 10f64.powf(exponent)
}

/// Linear ticks between `min` and `max`, at most `max_ticks` of them.
/// `fixed_max` pins the top tick to exactly that value instead of a rounded one.
/// Ranges that overflow or are finer than the float step at `min` get just
/// the two endpoints.
pub fn linear_ticks(min: f64, max: f64, max_ticks: usize, fixed_max: Option<f64>) -> Vec<f64> {
    let max_ticks = max_ticks.max(2);
    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        return vec![min, max];
    }
    let spacing = nice_num(nice_num(range, false) / (max_ticks as f64 - 1.0), true);
    let nice_min = (min / spacing).floor() * spacing;
    if !nice_min.is_finite() || nice_min + spacing == nice_min {
        return vec![min, max];
    }
    let nice_max = match fixed_max {
        Some(m) => m,
        None => (max / spacing).ceil() * spacing,
    };

    // float drift: count against a slightly relaxed bound
    let steps = ((nice_max - nice_min) / spacing - 1e-6).ceil();
    if !steps.is_finite() {
        return vec![min, max];
    }
    let steps = (steps.max(0.0) as usize).min(max_ticks * 2);
    let mut ticks: Vec<f64> = (0..steps).map(|i| round_to(nice_min + i as f64 * spacing, spacing)).collect();
    ticks.push(nice_max);
    ticks
}

/// Log10 ticks: each decade's 1..9 multiples between `min` and `max`.
pub fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    let lo = min.max(f64::MIN_POSITIVE).log10().floor() as i32;
    let hi = max.max(f64::MIN_POSITIVE).log10().ceil() as i32;
    let mut ticks = Vec::new();
    for exp in lo..=hi {
        let base = 10f64.powi(exp);
        for m in 1..10 {
            let v = base * m as f64;
            if v >= min * (1.0 - 1e-9) && v <= max * (1.0 + 1e-9) {
                ticks.push(v);
            }
        }
    }
    if ticks.last().map_or(true, |&t| (t - max).abs() > max * 1e-9) {
        ticks.push(max);
    }
    ticks
}

/// Whether a log tick is a major one (1, 2, 5 times a power of ten).
pub fn is_major_log_tick(v: f64) -> bool {
    let m = v / 10f64.powf(v.log10().floor());
    let m = m.round() as i64;
    m == 1 || m == 2 || m == 5
}

fn round_to(v: f64, spacing: f64) -> f64 {
    let digits = (-spacing.log10().floor()).max(0.0) as i32;
    let f = 10f64.powi(digits);
    let scaled = (v * f).round();
    if scaled.is_finite() { scaled / f } else { v }
}

/// Tick label text: integers without decimals, others trimmed.
pub fn format_tick(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.6}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
