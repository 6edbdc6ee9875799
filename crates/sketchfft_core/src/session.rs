//! Event boundary between a UI host and the sketch core.
//!
//! Pointer handling stays in the host; whatever widget toolkit sits on top
//! reduces drags to stroke segments and forwards them here, either as direct
//! method calls or as queued [`SketchEvent`] values.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SketchConfig;
use crate::raster::StrokeBuffer;
use crate::spectrum::{SpectrumOutput, SpectrumTransform};
use crate::SketchError;

/// One input request from the host. Serializable so queued events can cross
/// thread or process boundaries when a host offloads computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SketchEvent {
    /// Stroke segment in raster coordinates, endpoints inclusive.
    Stroke {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        width: u32,
    },
    /// Wipe the raster back to blank.
    Clear,
    /// Snapshot the raster and run the spectrum pipeline.
    Compute,
}

/// One drawing surface plus one transform engine, driven by events.
pub struct SketchSession {
    buffer: StrokeBuffer,
    transform: SpectrumTransform,
}

impl SketchSession {
    /// Validate the configuration and allocate a blank session.
    pub fn new(config: &SketchConfig) -> Result<Self, SketchError> {
        config.validate()?;
        debug!("new sketch session, raster size {}", config.size);
        Ok(Self {
            buffer: StrokeBuffer::new(config.size),
            transform: SpectrumTransform::new(),
        })
    }

    /// Stamp a stroke segment onto the raster.
    pub fn stroke(&mut self, p0: (i32, i32), p1: (i32, i32), width: u32) {
        self.buffer.draw_line(p0, p1, width);
    }

    /// Wipe the raster.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Run the spectrum pipeline on a snapshot of the current drawing.
    pub fn compute(&mut self) -> SpectrumOutput {
        let snapshot = self.buffer.snapshot();
        self.transform.compute(&snapshot)
    }

    /// Dispatch one event. Only [`SketchEvent::Compute`] produces output.
    pub fn apply(&mut self, event: SketchEvent) -> Option<SpectrumOutput> {
        match event {
            SketchEvent::Stroke {
                x0,
                y0,
                x1,
                y1,
                width,
            } => {
                self.stroke((x0, y0), (x1, y1), width);
                None
            }
            SketchEvent::Clear => {
                self.clear();
                None
            }
            SketchEvent::Compute => Some(self.compute()),
        }
    }

    /// Read access to the drawing surface, e.g. for rendering the sketch.
    pub fn buffer(&self) -> &StrokeBuffer {
        &self.buffer
    }
}
