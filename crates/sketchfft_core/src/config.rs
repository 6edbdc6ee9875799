use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Args;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Args))]
pub struct SketchConfig {
    /// Raster edge length in pixels; the canvas is always square
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 256))]
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_size() -> u32 {
    256
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
        }
    }
}

impl SketchConfig {
    /// Reject sizes the raster cannot represent.
    pub fn validate(&self) -> Result<(), crate::SketchError> {
        if self.size == 0 {
            return Err(crate::SketchError::InvalidSize(self.size));
        }
        Ok(())
    }
}
