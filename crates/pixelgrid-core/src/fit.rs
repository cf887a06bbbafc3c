//! PeriodicityFitter (§4.3): fits a single dominant fundamental frequency to
//! an edge signal.

use rayon::prelude::*;

use crate::consts::{FLAT_ENERGY_EPSILON, PARALLEL_SIGNAL_THRESHOLD, PEAK_THRESHOLD_RATIO};
use crate::dft::probe;
use crate::edge::EdgeSignal;
use crate::refine::refine_bin;

/// Result of fitting one axis: scale, offset (mod scale), and a comparative
/// confidence ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisEstimate {
    pub scale: f64,
    pub offset: f64,
    pub confidence: f64,
}

impl AxisEstimate {
    fn degenerate() -> Self {
        Self {
            scale: 1.0,
            offset: 0.0,
            confidence: 0.0,
        }
    }
}

/// Fit `signal` against a search band covering scales in `[2, max_scale]`.
///
/// Never panics or returns an error: degenerate and no-peak cases degrade to
/// best-effort estimates with a low or zero `confidence` (§4.3, §7).
pub fn fit(signal: &EdgeSignal, max_scale: u32) -> AxisEstimate {
    let n = signal.len();
    if n == 0 {
        return AxisEstimate::degenerate();
    }

    let total_energy = signal.total_energy();
    if total_energy < FLAT_ENERGY_EPSILON {
        return AxisEstimate::degenerate();
    }

    let max_scale = max_scale.max(2) as usize;
    let min_k = (n / max_scale).max(1);
    let max_k = n / 2;
    if min_k > max_k {
        return AxisEstimate::degenerate();
    }

    let magnitudes = magnitude_sweep(signal, min_k, max_k);
    let global_max = magnitudes
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let (k_refined, no_peak) = select_and_refine(&magnitudes, min_k, max_k, global_max);

    let (peak_magnitude, phase) = probe(signal, k_refined);
    let scale = n as f64 / k_refined;
    let offset = normalize_offset(-phase * scale / std::f64::consts::TAU, scale);

    let mean_per_period_energy = total_energy / scale;
    let confidence = if mean_per_period_energy > 0.0 {
        peak_magnitude / mean_per_period_energy
    } else {
        0.0
    };

    if no_peak {
        tracing::warn!(scale, confidence, "no bin cleared the peak threshold, using global max");
    }

    AxisEstimate {
        scale,
        offset,
        confidence,
    }
}

/// `m[k]` for every integer `k` in `[min_k, max_k]`, indexed from `min_k`.
fn magnitude_sweep(signal: &EdgeSignal, min_k: usize, max_k: usize) -> Vec<f64> {
    let ks: Vec<usize> = (min_k..=max_k).collect();
    if ks.len() >= PARALLEL_SIGNAL_THRESHOLD {
        ks.par_iter()
            .map(|&k| probe(signal, k as f64).0)
            .collect()
    } else {
        ks.iter().map(|&k| probe(signal, k as f64).0).collect()
    }
}

/// Returns `(k_refined, fell_back_to_global_max)`.
///
/// Scans `k` from `min_k+1` upward (the endpoint guard in §9 "Parabolic
/// refinement near endpoints") for the first local peak clearing the
/// threshold; refines it. Falls back to the single largest bin, unrefined,
/// if no bin in the scan band qualifies.
fn select_and_refine(magnitudes: &[f64], min_k: usize, max_k: usize, global_max: f64) -> (f64, bool) {
    let threshold = PEAK_THRESHOLD_RATIO * global_max;

    for k in (min_k + 1)..max_k {
        let idx = k - min_k;
        let m_prev = magnitudes[idx - 1];
        let m_curr = magnitudes[idx];
        let m_next = magnitudes[idx + 1];
        if m_curr > m_prev && m_curr > m_next && m_curr > threshold {
            return (refine_bin(k, m_prev, m_curr, m_next), false);
        }
    }

    // Fallback: largest magnitude, ties broken toward the smallest k.
    let mut best_idx = 0usize;
    let mut best_val = f64::NEG_INFINITY;
    for (idx, &m) in magnitudes.iter().enumerate() {
        if m > best_val {
            best_val = m;
            best_idx = idx;
        }
    }
    ((min_k + best_idx) as f64, true)
}

fn normalize_offset(raw_offset: f64, scale: f64) -> f64 {
    let mut offset = raw_offset % scale;
    if offset < 0.0 {
        offset += scale;
    }
    // Guard the (scale == exactly 0) boundary case, unreachable in practice
    // since scale = n / k_refined with k_refined drawn from a finite bin range.
    if offset >= scale && scale > 0.0 {
        offset -= scale;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn comb(n: usize, period: usize, offset: usize) -> EdgeSignal {
        let mut values = vec![0.0f64; n];
        let mut pos = offset;
        while pos < n {
            values[pos] = 1.0;
            pos += period;
        }
        EdgeSignal::new(values)
    }

    #[test]
    fn flat_signal_is_degenerate() {
        let signal = EdgeSignal::new(vec![0.0; 64]);
        let est = fit(&signal, 16);
        assert_eq!(est, AxisEstimate::degenerate());
    }

    #[test]
    fn empty_signal_is_degenerate() {
        let signal = EdgeSignal::new(vec![]);
        let est = fit(&signal, 16);
        assert_eq!(est, AxisEstimate::degenerate());
    }

    #[test]
    fn offset_is_always_in_range() {
        for offset in 0..8 {
            let signal = comb(64, 8, offset);
            let est = fit(&signal, 16);
            assert!(est.offset >= 0.0 && est.offset < est.scale);
        }
    }

    #[test]
    fn recovers_integer_period_and_offset() {
        let signal = comb(128, 8, 2);
        let est = fit(&signal, 16);
        assert_relative_eq!(est.scale, 8.0, epsilon = 1e-2);
        assert_relative_eq!(est.offset, 2.0, epsilon = 1e-1);
    }

    #[test]
    fn scale_stays_within_search_band() {
        let signal = comb(200, 14, 3);
        let est = fit(&signal, 16);
        assert!(est.scale >= 2.0 && est.scale <= 16.0);
    }
}
