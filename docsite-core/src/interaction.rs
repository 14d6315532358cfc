//! Pointer micro-interactions: ripple, card tilt, floating cards.
//!
//! Everything here is a pure function of the current pointer event and the
//! element's bounding box.

use serde::{Deserialize, Serialize};

/// An element's bounding box in client coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Create a rect.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Placement of a ripple overlay relative to its host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ripple {
    /// Diameter.
    pub size: f64,
    /// Left offset inside the host.
    pub left: f64,
    /// Top offset inside the host.
    pub top: f64,
}

impl Ripple {
    /// Circle covering the host, centered on the click.
    #[must_use]
    pub fn at(rect: &Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    /// Inline style for the overlay span.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s linear; pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top,
        )
    }
}

/// Rotation of a card under the pointer, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tilt {
    /// Rotation around the horizontal axis.
    pub rotate_x: f64,
    /// Rotation around the vertical axis.
    pub rotate_y: f64,
    /// Uniform scale.
    pub scale: f64,
}

impl Tilt {
    /// The resting transform.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
        }
    }

    /// Tilt toward the pointer: one degree per `divisor` pixels from center.
    #[must_use]
    pub fn toward(rect: &Rect, client_x: f64, client_y: f64, divisor: f64, scale: f64) -> Self {
        if divisor.abs() < f64::EPSILON {
            return Self::neutral();
        }
        let (cx, cy) = rect.center();
        Self {
            rotate_x: -(client_y - cy) / divisor,
            rotate_y: (client_x - cx) / divisor,
            scale,
        }
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s})",
            self.rotate_x,
            self.rotate_y,
            s = self.scale,
        )
    }
}

/// CSS `animation-delay` for the `index`-th floating card.
#[must_use]
pub fn float_delay(index: usize, stagger_s: f64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let delay = index as f64 * stagger_s;
    format!("{delay}s")
}
