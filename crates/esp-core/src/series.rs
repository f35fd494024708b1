//! Sampled curve helpers.
//!
//! Every curve in the sizing chain is a sampled series over a flow axis. Lookups
//! between samples use piecewise-linear interpolation clamped to the end values.

/// Interpolate `ys` at `target` over the abscissa `xs`.
///
/// Targets outside the sampled range return the nearest end value. Segments with
/// coincident abscissae are skipped. Returns `None` for empty or mismatched
/// series, or when `xs` is not ordered around `target`.
pub fn interpolate(xs: &[f64], ys: &[f64], target: f64) -> Option<f64> {
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }

    let last = xs.len() - 1;
    if target <= xs[0] {
        return Some(ys[0]);
    }
    if target >= xs[last] {
        return Some(ys[last]);
    }

    for (x, y) in xs.windows(2).zip(ys.windows(2)) {
        let (x1, x2) = (x[0], x[1]);
        if x2 == x1 {
            continue;
        }
        let inside = (x1 <= target && target <= x2) || (x2 <= target && target <= x1);
        if inside {
            let fraction = (target - x1) / (x2 - x1);
            return Some(y[0] + fraction * (y[1] - y[0]));
        }
    }
    None
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn interpolation_stays_within_sample_bounds(
            ys in prop::collection::vec(-1.0e3_f64..1.0e3_f64, 2..20),
            t in 0.0_f64..1.0_f64,
        ) {
            let xs = linspace(0.0, 100.0, ys.len());
            let target = t * 100.0;
            let v = interpolate(&xs, &ys, target).unwrap();
            let lo = ys.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
        }
    }
}
