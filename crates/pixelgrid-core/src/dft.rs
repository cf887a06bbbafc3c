//! DFTProbe (§4.2): a single complex Fourier coefficient at arbitrary real k.

use crate::edge::EdgeSignal;

/// `(magnitude, phase)` of the coefficient. Phase is in `(-pi, pi]`.
pub type Probe = (f64, f64);

/// Evaluate `Sum_{n=0..N-1} signal[n] * e^{-i*2*pi*k*n/N}` in double precision.
///
/// `k` may be any real number, including non-integer bins produced by
/// parabolic refinement — this rules out a bare FFT, which only evaluates
/// integer bins.
pub fn probe(signal: &EdgeSignal, k: f64) -> Probe {
    let n = signal.len() as f64;
    if n == 0.0 {
        return (0.0, 0.0);
    }

    let mut re = 0.0f64;
    let mut im = 0.0f64;
    for (idx, &value) in signal.as_slice().iter().enumerate() {
        let angle = -std::f64::consts::TAU * k * idx as f64 / n;
        re += value * angle.cos();
        im += value * angle.sin();
    }

    (re.hypot(im), im.atan2(re))
}
