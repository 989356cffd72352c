//! # Cube Sorter
//!
//! Color classification core for a robotic foam-cube sorting rig.
//!
//! A downward-facing RGB light sensor reports noisy, brightness-dependent
//! triples while a cube passes the scanning bay. This library turns those
//! readings into a stable color label by:
//! - Normalizing every sample onto the unit sphere to remove intensity
//! - Building one reference centroid per color from labeled sample data
//! - Averaging a measurement batch and picking the nearest centroid
//! - Mapping the label to the carousel angle of its bin
//!
//! ## Example
//!
//! ```rust,no_run
//! use cube_sorter::{CubeClassifier, ReferenceModel, RgbSample, SorterConfig};
//!
//! let model = ReferenceModel::from_config(&SorterConfig::default_rig())?;
//! let classifier = CubeClassifier::new(model);
//!
//! let color = classifier.classify(&[RgbSample::new(262.0, 35.0, 31.0)])?;
//! println!("{color} -> {} deg", color.drop_angle());
//! # Ok::<(), cube_sorter::SortError>(())
//! ```

pub mod classify;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod rig;
pub mod routing;
pub mod sample;

pub use classify::{CubeClassifier, average_normalized};
pub use color::Color;
pub use config::SorterConfig;
pub use error::{Result, SortError};
pub use model::{Centroid, ReferenceModel, color_centroid};
pub use rig::{Carousel, ColorSensor, Piston, SortingRig};
pub use routing::drop_angle_for_name;
pub use sample::{ParseSampleError, RgbSample};
