//! Rig constants: bin drop angles and sensing parameters
//!
//! Values are calibrated to the physical build of the sorting rig (bin
//! positions around the carousel, sensor mounting distance) and change only
//! when the rig is rebuilt.

/// Carousel drop angles, one bin per color
///
/// Angles are in degrees relative to the carousel home position; negative
/// values rotate away from the loading chimney.
pub mod angles {
    /// Red bin
    pub const RED_DEG: i32 = 20;

    /// Blue bin
    pub const BLUE_DEG: i32 = -40;

    /// Green bin
    pub const GREEN_DEG: i32 = -100;

    /// Yellow bin
    pub const YELLOW_DEG: i32 = -145;

    /// Orange bin
    pub const ORANGE_DEG: i32 = -185;

    /// Purple bin
    pub const PURPLE_DEG: i32 = -65;
}

/// Sensor polling parameters
pub mod sensing {
    use std::time::Duration;

    /// How long one classification window polls the color sensor
    pub const MEASUREMENT_WINDOW: Duration = Duration::from_millis(1500);
}

/// Training sample source conventions
pub mod sources {
    /// Default directory holding one sample file per color
    pub const DEFAULT_SAMPLE_DIR: &str = "data";

    /// Sample file name suffix; files are named `<color>_data.csv`
    pub const SAMPLE_FILE_SUFFIX: &str = "_data.csv";
}
