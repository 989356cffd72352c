//! Hardware-agnostic choreography of the sorting rig
//!
//! The classification core never touches motors or sensors directly; the
//! hardware layer implements three narrow traits and the rig object drives
//! one sorting cycle at a time. Tests run the same choreography against
//! mock hardware.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crate::classify::CubeClassifier;
use crate::color::Color;
use crate::error::Result;
use crate::sample::RgbSample;

/// One RGB poll of the downward-facing color sensor
pub trait ColorSensor {
    fn sample(&mut self) -> RgbSample;
}

/// The piston that pushes a scanned cube onto the conveyor belt
pub trait Piston {
    fn push_cube(&mut self);
}

/// The rotating conveyor assembly that carries a cube to its bin.
///
/// `turn_and_drop` rotates to the given angle, drops the cube, and returns
/// to the home position before the call completes.
pub trait Carousel: Send {
    fn turn_and_drop(&mut self, angle_deg: i32);
}

/// An explicitly constructed sorting session.
///
/// Owns the sensor and piston; the carousel is shared because its moves are
/// dispatched to a background thread so the next cube can be scanned while
/// the previous one is still in flight.
pub struct SortingRig<S, P> {
    sensor: S,
    piston: P,
    carousel: Arc<Mutex<dyn Carousel>>,
    classifier: CubeClassifier,
    window: Duration,
}

impl<S: ColorSensor, P: Piston> SortingRig<S, P> {
    pub fn new(
        sensor: S,
        piston: P,
        carousel: Arc<Mutex<dyn Carousel>>,
        classifier: CubeClassifier,
        window: Duration,
    ) -> Self {
        Self {
            sensor,
            piston,
            carousel,
            classifier,
            window,
        }
    }

    /// Poll the sensor for one measurement window.
    ///
    /// Always returns at least one sample, even for a zero window.
    pub fn collect_batch(&mut self) -> Vec<RgbSample> {
        let deadline = Instant::now() + self.window;
        let mut batch = Vec::new();
        loop {
            batch.push(self.sensor.sample());
            if Instant::now() >= deadline {
                return batch;
            }
        }
    }

    /// Run one sorting cycle: scan, classify, push, dispatch the drop.
    ///
    /// The carousel move runs on a spawned thread whose handle is dropped;
    /// the rig has never joined it or checked its outcome, and the possible
    /// overlap with the next cycle's scan is accepted behavior. A
    /// classification failure propagates before any motor is actuated.
    pub fn sort_one(&mut self) -> Result<Color> {
        let batch = self.collect_batch();
        let color = self.classifier.classify(&batch)?;

        self.piston.push_cube();

        let angle = color.drop_angle();
        let carousel = Arc::clone(&self.carousel);
        thread::spawn(move || {
            if let Ok(mut carousel) = carousel.lock() {
                carousel.turn_and_drop(angle);
            }
        });

        Ok(color)
    }
}
