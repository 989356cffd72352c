//! Reference model construction and nearest-centroid lookup
//!
//! The model holds one centroid per color: the per-channel mean of that
//! color's normalized training samples. Because every surviving sample lies
//! on the unit sphere, the centroid is intensity-free and sits on or very
//! near the sphere itself. The model is immutable once built; rebuilding
//! from unchanged sources yields bit-identical centroids.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::SorterConfig;
use crate::error::{Result, SortError};
use crate::sample::RgbSample;

/// A color's reference point: mean normalized RGB signature
pub type Centroid = [f64; 3];

/// The color-to-centroid mapping used for nearest-neighbor classification.
///
/// Always contains exactly the six known colors; construction and
/// deserialization both fail rather than produce a partial model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<Color, Centroid>",
    try_from = "BTreeMap<Color, Centroid>"
)]
pub struct ReferenceModel {
    centroids: [Centroid; Color::COUNT],
}

impl ReferenceModel {
    /// Build the model from one sample source file per color.
    ///
    /// Each file is an ordered sequence of `(r, g, b)` records. Dropout
    /// sentinels and zero-norm records are skipped; the survivors are
    /// normalized and averaged per channel.
    ///
    /// # Errors
    ///
    /// Returns a `Data` error if any color has no configured source, a
    /// source is missing or unreadable, a record does not parse, or a color
    /// ends up with zero valid samples.
    pub fn build<P: AsRef<Path>>(sources: &BTreeMap<Color, P>) -> Result<Self> {
        let mut centroids = [[0.0; 3]; Color::COUNT];

        for color in Color::ALL {
            let path = sources.get(&color).ok_or_else(|| {
                SortError::data(format!("no sample source configured for {color}"))
            })?;
            let samples = read_sample_file(path.as_ref())?;
            centroids[color.index()] = color_centroid(&samples).map_err(|_| {
                SortError::data(format!(
                    "{}: no valid samples for {color}",
                    path.as_ref().display()
                ))
            })?;
        }

        Ok(Self { centroids })
    }

    /// Build the model from the sample sources named in a configuration
    pub fn from_config(config: &SorterConfig) -> Result<Self> {
        Self::build(&config.sample_sources)
    }

    /// Reference centroid for one color
    pub fn centroid(&self, color: Color) -> Centroid {
        self.centroids[color.index()]
    }

    /// Iterate centroids in the fixed [`Color::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Color, Centroid)> + '_ {
        Color::ALL
            .into_iter()
            .map(move |color| (color, self.centroids[color.index()]))
    }

    /// Color whose centroid is nearest to `point` in Euclidean distance.
    ///
    /// Ties are broken by the fixed [`Color::ALL`] order: the first color
    /// reaching the minimum distance wins. Exact floating-point ties are
    /// possible but rare in practice.
    pub fn nearest(&self, point: Centroid) -> Color {
        let mut best = Color::ALL[0];
        let mut best_dist = euclidean_distance(point, self.centroid(best));

        for (color, centroid) in self.iter().skip(1) {
            let dist = euclidean_distance(point, centroid);
            if dist < best_dist {
                best = color;
                best_dist = dist;
            }
        }

        best
    }

    /// Approximate display rendering of a centroid.
    ///
    /// Centroid channels lie in [0, 1], so they are shown directly as sRGB
    /// components, clamped to gamut. This is a visual aid for calibration
    /// reports, not a colorimetric conversion.
    pub fn display_srgb(&self, color: Color) -> Srgb {
        let [r, g, b] = self.centroid(color);
        Srgb::new(
            r.clamp(0.0, 1.0) as f32,
            g.clamp(0.0, 1.0) as f32,
            b.clamp(0.0, 1.0) as f32,
        )
    }

    /// Hex string of [`ReferenceModel::display_srgb`] (e.g. `#FB2220`)
    pub fn display_hex(&self, color: Color) -> String {
        let srgb = self.display_srgb(color);
        let r = (srgb.red * 255.0).round() as u8;
        let g = (srgb.green * 255.0).round() as u8;
        let b = (srgb.blue * 255.0).round() as u8;
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl From<ReferenceModel> for BTreeMap<Color, Centroid> {
    fn from(model: ReferenceModel) -> Self {
        model.iter().collect()
    }
}

impl TryFrom<BTreeMap<Color, Centroid>> for ReferenceModel {
    type Error = SortError;

    fn try_from(map: BTreeMap<Color, Centroid>) -> Result<Self> {
        let mut centroids = [[0.0; 3]; Color::COUNT];
        for color in Color::ALL {
            centroids[color.index()] = *map
                .get(&color)
                .ok_or_else(|| SortError::data(format!("model is missing centroid for {color}")))?;
        }
        Ok(Self { centroids })
    }
}

/// Compute one color's centroid from its raw training samples.
///
/// Dropout sentinels and zero-norm samples are skipped; the rest are
/// normalized and averaged per channel.
///
/// # Errors
///
/// Returns a `Data` error when no valid samples remain, since the mean of
/// an empty set is undefined.
pub fn color_centroid(samples: &[RgbSample]) -> Result<Centroid> {
    let mut sum = [0.0; 3];
    let mut count = 0usize;

    for sample in samples {
        if sample.is_dropout() {
            continue;
        }
        let Some(unit) = sample.normalized() else {
            continue;
        };
        sum[0] += unit[0];
        sum[1] += unit[1];
        sum[2] += unit[2];
        count += 1;
    }

    if count == 0 {
        return Err(SortError::data(
            "no valid samples: every record was a dropout or had zero norm",
        ));
    }

    let n = count as f64;
    Ok([sum[0] / n, sum[1] / n, sum[2] / n])
}

pub(crate) fn euclidean_distance(a: Centroid, b: Centroid) -> f64 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Read an ordered sequence of sample records from a source file.
///
/// Blank lines are ignored; any other unparseable line is a `Data` error
/// carrying the file and line number.
fn read_sample_file(path: &Path) -> Result<Vec<RgbSample>> {
    let content = fs::read_to_string(path)
        .map_err(|e| SortError::data_with(format!("cannot read sample source {}", path.display()), e))?;

    let mut samples = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let sample = line.parse::<RgbSample>().map_err(|e| {
            SortError::data_with(format!("{}:{}: bad sample record", path.display(), lineno + 1), e)
        })?;
        samples.push(sample);
    }

    Ok(samples)
}
