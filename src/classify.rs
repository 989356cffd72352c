//! Nearest-centroid classification of measurement batches
//!
//! A classification window yields an ordered batch of raw RGB samples. Each
//! valid sample is normalized, the batch is averaged into a single observed
//! point, and the label of the nearest reference centroid is returned.
//!
//! Degenerate samples follow the same policy as training: dropout and
//! zero-norm readings are skipped silently, and classification fails only
//! when the whole batch is degenerate. Division by a zero norm therefore
//! never propagates a NaN into the observed point.

use itertools::Itertools;

use crate::color::Color;
use crate::error::{Result, SortError};
use crate::model::{Centroid, ReferenceModel};
use crate::sample::RgbSample;

/// Classifier over an immutable reference model.
///
/// A pure function of its inputs: safe to call concurrently from multiple
/// threads, and calling it never mutates the model.
pub struct CubeClassifier {
    model: ReferenceModel,
}

impl CubeClassifier {
    pub fn new(model: ReferenceModel) -> Self {
        Self { model }
    }

    /// The reference model this classifier compares against
    pub fn model(&self) -> &ReferenceModel {
        &self.model
    }

    /// Classify one measurement batch.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error when the batch is empty, contains a
    /// non-finite or negative channel, or consists entirely of degenerate
    /// (zero-norm) samples. The result is always one of the six known
    /// colors; there is no fallback label.
    pub fn classify(&self, measurements: &[RgbSample]) -> Result<Color> {
        let observed = average_normalized(measurements)?;
        Ok(self.model.nearest(observed))
    }
}

/// Collapse a measurement batch into one observed point.
///
/// Each sample is normalized onto the unit sphere and the batch is averaged
/// per channel. The result is not necessarily unit-norm, but stays close to
/// the sphere since every contributing sample lies on it.
pub fn average_normalized(measurements: &[RgbSample]) -> Result<Centroid> {
    if measurements.is_empty() {
        return Err(SortError::invalid_input("empty measurement batch"));
    }

    if let Some(bad) = measurements.iter().find(|s| !s.is_well_formed()) {
        return Err(SortError::invalid_input(format!(
            "malformed sample in batch: ({}, {}, {})",
            bad.red, bad.green, bad.blue
        )));
    }

    let units = measurements
        .iter()
        .filter_map(RgbSample::normalized)
        .collect_vec();

    if units.is_empty() {
        return Err(SortError::invalid_input(
            "every sample in the batch is degenerate (zero norm)",
        ));
    }

    let n = units.len() as f64;
    let mut sum = [0.0; 3];
    for unit in &units {
        sum[0] += unit[0];
        sum[1] += unit[1];
        sum[2] += unit[2];
    }

    Ok([sum[0] / n, sum[1] / n, sum[2] / n])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Centroids measured on the physical rig; also exercised end to end in
    // tests/integration_test.rs via the bundled sample files.
    fn rig_model() -> ReferenceModel {
        let map: std::collections::BTreeMap<Color, Centroid> = [
            (Color::Red, [0.9833, 0.1334, 0.1200]),
            (Color::Blue, [0.2970, 0.5686, 0.7657]),
            (Color::Green, [0.1839, 0.9456, 0.2652]),
            (Color::Yellow, [0.7937, 0.5967, 0.1169]),
            (Color::Orange, [0.9341, 0.2988, 0.1946]),
            (Color::Purple, [0.5751, 0.4602, 0.6758]),
        ]
        .into_iter()
        .collect();
        ReferenceModel::try_from(map).unwrap()
    }

    #[test]
    fn test_classifies_points_at_each_centroid() {
        let classifier = CubeClassifier::new(rig_model());
        for color in Color::ALL {
            let [r, g, b] = classifier.model().centroid(color);
            let got = classifier.classify(&[RgbSample::new(r, g, b)]).unwrap();
            assert_eq!(got, color);
        }
    }

    #[test]
    fn test_scale_invariance() {
        let classifier = CubeClassifier::new(rig_model());
        let base = RgbSample::new(0.983, 0.133, 0.12);
        let scaled = RgbSample::new(base.red * 340.0, base.green * 340.0, base.blue * 340.0);

        assert_eq!(
            classifier.classify(&[base]).unwrap(),
            classifier.classify(&[scaled]).unwrap()
        );
    }

    #[test]
    fn test_dropouts_within_batch_are_skipped() {
        let classifier = CubeClassifier::new(rig_model());
        let batch = [
            RgbSample::new(0.0, 0.0, 0.0),
            RgbSample::new(262.0, 35.0, 31.0),
            RgbSample::new(0.0, 0.0, 0.0),
        ];
        assert_eq!(classifier.classify(&batch).unwrap(), Color::Red);
    }

    #[test]
    fn test_empty_batch_is_invalid_input() {
        let classifier = CubeClassifier::new(rig_model());
        let err = classifier.classify(&[]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_fully_degenerate_batch_is_invalid_input() {
        let classifier = CubeClassifier::new(rig_model());
        let batch = [RgbSample::new(0.0, 0.0, 0.0); 3];
        let err = classifier.classify(&batch).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_malformed_sample_is_invalid_input() {
        let classifier = CubeClassifier::new(rig_model());
        for bad in [
            RgbSample::new(f64::NAN, 1.0, 1.0),
            RgbSample::new(1.0, f64::INFINITY, 1.0),
            RgbSample::new(1.0, 1.0, -3.0),
        ] {
            let err = classifier.classify(&[bad]).unwrap_err();
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn test_average_normalized_stays_near_unit_sphere() {
        let batch = [
            RgbSample::new(262.0, 35.0, 31.0),
            RgbSample::new(255.0, 38.0, 29.0),
            RgbSample::new(270.0, 33.0, 34.0),
        ];
        let point = average_normalized(&batch).unwrap();
        let norm = (point[0] * point[0] + point[1] * point[1] + point[2] * point[2]).sqrt();
        assert_relative_eq!(norm, 1.0, epsilon = 1e-3);
    }
}
