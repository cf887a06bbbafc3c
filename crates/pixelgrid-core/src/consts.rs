/// Minimum pixel count (W*H) to use Rayon parallelism for edge projection.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Minimum signal length to use Rayon parallelism for the magnitude sweep.
pub const PARALLEL_SIGNAL_THRESHOLD: usize = 512;

/// Fraction of the global peak magnitude a bin must clear to be accepted
/// as the fundamental (see §4.3 peak selection).
pub const PEAK_THRESHOLD_RATIO: f64 = 0.4;

/// Below this total edge energy a signal is considered flat (§4.3).
pub const FLAT_ENERGY_EPSILON: f64 = 1e-4;

/// Half-extent of the box-average sampling window, as a fraction of scale.
pub const BOX_SAMPLE_RADIUS_FRACTION: f64 = 0.3;

/// Default `max_scale` used by [`crate::pipeline::config::AnalysisConfig`].
pub const DEFAULT_MAX_SCALE: u32 = 16;
