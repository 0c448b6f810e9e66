//! Demo configuration
//!
//! Loaded from TOML; every section is optional and falls back to the values
//! the original console demo used.
//!
//! ```toml
//! [list]
//! values = [5, 3, 8, 1]
//!
//! [stack]
//! depth = 8
//!
//! [volume]
//! x = 5
//! y = 5
//! z = 5
//! default = 0
//!
//! [[figures]]
//! kind = "circle"
//! radius = 15.0
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::constants::{demo, sparse::MAX_AXIS_EXTENT};
use crate::error::{LabError, LabResult};
use crate::figures::Figure;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub list: ListConfig,
    pub stack: StackConfig,
    pub volume: VolumeConfig,
    pub figures: Vec<FigureConfig>,
}

/// Values appended to a list and sorted
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub values: Vec<i64>,
}

/// Number of values pushed onto (and popped from) the stack
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    pub depth: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub default: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FigureConfig {
    Rectangle { height: f64, width: f64 },
    Square { side: f64 },
    Circle { radius: f64 },
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            list: ListConfig::default(),
            stack: StackConfig::default(),
            volume: VolumeConfig::default(),
            figures: vec![
                FigureConfig::Rectangle { height: 10.0, width: 20.0 },
                FigureConfig::Square { side: 20.0 },
                FigureConfig::Circle { radius: 15.0 },
            ],
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            values: demo::LIST_VALUES.to_vec(),
        }
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            depth: demo::STACK_DEPTH,
        }
    }
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            x: demo::VOLUME_EXTENT,
            y: demo::VOLUME_EXTENT,
            z: demo::VOLUME_EXTENT,
            default: demo::VOLUME_DEFAULT,
        }
    }
}

impl FigureConfig {
    pub fn to_figure(&self) -> Figure {
        match *self {
            FigureConfig::Rectangle { height, width } => Figure::rectangle(height, width),
            FigureConfig::Square { side } => Figure::square(side),
            FigureConfig::Circle { radius } => Figure::circle(radius),
        }
    }

    fn measurements(&self) -> Vec<(&'static str, f64)> {
        match *self {
            FigureConfig::Rectangle { height, width } => vec![("height", height), ("width", width)],
            FigureConfig::Square { side } => vec![("side", side)],
            FigureConfig::Circle { radius } => vec![("radius", radius)],
        }
    }
}

impl LabConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> LabResult<Self> {
        let config: LabConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> LabResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        log::info!("Loaded config: {}", path.display());
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> LabResult<()> {
        let VolumeConfig { x, y, z, .. } = self.volume;
        for (axis, extent) in [("x", x), ("y", y), ("z", z)] {
            if extent == 0 || extent > MAX_AXIS_EXTENT {
                return Err(config_error(format!(
                    "volume.{} must be in 1..={}, got {}",
                    axis, MAX_AXIS_EXTENT, extent
                )));
            }
        }

        for (i, figure) in self.figures.iter().enumerate() {
            for (field, value) in figure.measurements() {
                if !value.is_finite() || value < 0.0 {
                    return Err(config_error(format!(
                        "figures[{}].{} must be a finite non-negative number, got {}",
                        i, field, value
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn figures(&self) -> Vec<Figure> {
        self.figures.iter().map(FigureConfig::to_figure).collect()
    }
}

fn config_error(message: String) -> LabError {
    LabError::Config { message }
}
