//! Well-log generator

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::draw;
use crate::format::round_to;
use crate::types::{FormationBand, WellLogSample};

/// Confidence is drawn from `[0.85, 0.97)` before scaling to a percentage.
const CONFIDENCE_MIN: f64 = 0.85;
const CONFIDENCE_MAX: f64 = 0.97;

/// Produce one sample per `step_ft` per band, bands in the given order.
///
/// Depths run from `depth_start_ft` up to but excluding `depth_end_ft`,
/// computed as `start + i * step` so they never drift.
/// Gamma and porosity are rounded to 0.1, resistivity to 0.01.
pub fn generate_well_log<R: Rng + ?Sized>(
    rng: &mut R,
    bands: &[FormationBand],
) -> Vec<WellLogSample> {
    let confidence = Uniform::new(CONFIDENCE_MIN, CONFIDENCE_MAX);
    let mut samples = Vec::with_capacity(bands.iter().map(|b| b.depths().len()).sum());

    for band in bands {
        for depth in band.depths() {
            let gamma = draw(rng, &band.gamma);
            let resistivity = draw(rng, &band.resistivity);
            let porosity = draw(rng, &band.porosity);
            let score = confidence.sample(rng);

            samples.push(WellLogSample {
                depth,
                gamma_ray: round_to(gamma, 1),
                resistivity: round_to(resistivity, 2),
                porosity: round_to(porosity, 1),
                formation: band.formation,
                // Bounded to 85..=97 by the draw above
                confidence: (score * 100.0).round() as u8,
            });
        }
    }

    samples
}

/// Every `stride`-th sample, starting with the first
pub fn table_sample(
    samples: &[WellLogSample],
    stride: usize,
) -> impl Iterator<Item = &WellLogSample> {
    samples.iter().step_by(stride.max(1))
}
