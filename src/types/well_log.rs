//! Well-log types: formation bands and the samples synthesized from them

use serde::{Deserialize, Serialize};

use crate::config::defaults::MAX_SAMPLES_PER_BAND;

/// Lithology label attached to every well-log sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Formation {
    Sandstone,
    Shale,
    Limestone,
}

impl std::fmt::Display for Formation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formation::Sandstone => write!(f, "Sandstone"),
            Formation::Shale => write!(f, "Shale"),
            Formation::Limestone => write!(f, "Limestone"),
        }
    }
}

/// Inclusive `[min, max]` range a measurement is drawn from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MeasurementRange {
    pub min: f64,
    pub max: f64,
}

impl MeasurementRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the range (`max - min`)
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A depth interval with the measurement ranges used to synthesize readings.
///
/// Samples are produced for `depth_start <= depth < depth_end` every `step_ft`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormationBand {
    pub formation: Formation,
    pub depth_start_ft: f64,
    pub depth_end_ft: f64,
    #[serde(default = "default_step_ft")]
    pub step_ft: f64,
    /// Gamma ray (API units)
    pub gamma: MeasurementRange,
    /// Resistivity (ohm-m)
    pub resistivity: MeasurementRange,
    /// Porosity (%)
    pub porosity: MeasurementRange,
}

fn default_step_ft() -> f64 {
    crate::config::defaults::WELL_LOG_STEP_FT
}

impl FormationBand {
    /// Whether a depth falls inside this band's half-open interval
    pub fn covers(&self, depth_ft: f64) -> bool {
        depth_ft >= self.depth_start_ft && depth_ft < self.depth_end_ft
    }

    /// Number of depths in `[depth_start_ft, depth_end_ft)` at `step_ft` spacing.
    ///
    /// Saturates at `usize::MAX` for unbounded bands.
    pub fn sample_count(&self) -> usize {
        let span = self.depth_end_ft - self.depth_start_ft;
        if !(self.step_ft > 0.0 && span > 0.0) {
            return 0;
        }
        // Float-to-int casts saturate
        let mut count = (span / self.step_ft).ceil() as usize;
        if count > 0 && self.depth_at(count - 1) >= self.depth_end_ft {
            count -= 1;
        }
        count
    }

    /// Sample depths, capped at `MAX_SAMPLES_PER_BAND`
    pub fn depths(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        let count = self.sample_count().min(MAX_SAMPLES_PER_BAND);
        (0..count).map(|i| self.depth_at(i))
    }

    fn depth_at(&self, index: usize) -> f64 {
        self.depth_start_ft + index as f64 * self.step_ft
    }
}

/// One synthesized well-log reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellLogSample {
    /// Measured depth (ft)
    pub depth: f64,
    /// Gamma ray (API units), rounded to 0.1
    pub gamma_ray: f64,
    /// Resistivity (ohm-m), rounded to 0.01
    pub resistivity: f64,
    /// Porosity (%), rounded to 0.1
    pub porosity: f64,
    pub formation: Formation,
    /// Identification confidence (0-100)
    pub confidence: u8,
}
