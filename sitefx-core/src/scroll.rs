//! Scroll geometry readouts.
//!
//! Each function is a direct readout of the current viewport; no state is kept
//! between scroll events.

use crate::constants::DEFAULT_PARALLAX_SPEED;

/// One reading of the page's scroll geometry, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Viewport-relative bounding box of a single element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

impl ScrollSnapshot {
    #[must_use]
    pub const fn new(scroll_y: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_y,
            viewport_height,
            document_height,
        }
    }

    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.scroll_y, self.document_height, self.viewport_height)
    }

    #[must_use]
    pub fn back_to_top_visible(&self, threshold: f64) -> bool {
        self.scroll_y > threshold
    }

    #[must_use]
    pub fn fade_in_visible(&self, element: ElementBox) -> bool {
        fade_in_visible(element, self.viewport_height)
    }
}

/// Parse a `data-speed` attribute, falling back to the default factor.
#[must_use]
pub fn parse_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite())
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

#[must_use]
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// An element fades in once its top edge has risen above the point where half
/// of it would be on screen.
#[must_use]
pub fn fade_in_visible(element: ElementBox, viewport_height: f64) -> bool {
    element.top < viewport_height - element.height / 2.0
}

/// Percentage of the scrollable range already travelled.
///
/// Documents no taller than the viewport yield a non-finite value; callers
/// write it through to the progress bar unchanged.
#[must_use]
pub fn progress_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    scroll_y / (document_height - viewport_height) * 100.0
}

/// CSS `transform` value for a parallax element at the given offset.
#[must_use]
pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({offset}px)")
}

/// CSS `width` value for the progress bar.
#[must_use]
pub fn progress_width(percent: f64) -> String {
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_defaults_when_missing_or_garbage() {
        assert!((parse_speed(None) - 0.5).abs() < f64::EPSILON);
        assert!((parse_speed(Some("fast")) - 0.5).abs() < f64::EPSILON);
        assert!((parse_speed(Some("NaN")) - 0.5).abs() < f64::EPSILON);
        assert!((parse_speed(Some(" 0.25 ")) - 0.25).abs() < f64::EPSILON);
        assert!((parse_speed(Some("-1")) + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parallax_scales_scroll_position() {
        assert!((parallax_offset(400.0, 0.5) - 200.0).abs() < f64::EPSILON);
        assert!((parallax_offset(400.0, parse_speed(None)) - 200.0).abs() < f64::EPSILON);
        assert_eq!(parallax_transform(200.0), "translateY(200px)");
        assert_eq!(parallax_transform(12.5), "translateY(12.5px)");
    }

    #[test]
    fn fade_in_threshold_is_strict() {
        let viewport = 800.0;
        let element = ElementBox {
            top: 700.0,
            height: 200.0,
        };
        assert!(!fade_in_visible(element, viewport));
        assert!(fade_in_visible(
            ElementBox {
                top: 699.9,
                ..element
            },
            viewport
        ));
    }

    #[test]
    fn progress_spans_scrollable_range() {
        let top = ScrollSnapshot::new(0.0, 800.0, 2800.0);
        let middle = ScrollSnapshot::new(1000.0, 800.0, 2800.0);
        let bottom = ScrollSnapshot::new(2000.0, 800.0, 2800.0);
        assert!(top.progress_percent().abs() < f64::EPSILON);
        assert!((middle.progress_percent() - 50.0).abs() < f64::EPSILON);
        assert!((bottom.progress_percent() - 100.0).abs() < f64::EPSILON);
        assert_eq!(progress_width(50.0), "50%");
    }

    #[test]
    fn progress_is_not_finite_for_short_documents() {
        assert!(!progress_percent(0.0, 800.0, 800.0).is_finite());
    }

    #[test]
    fn back_to_top_appears_past_threshold() {
        let threshold = crate::constants::BACK_TO_TOP_THRESHOLD_PX;
        assert!(!ScrollSnapshot::new(0.0, 800.0, 2000.0).back_to_top_visible(threshold));
        assert!(!ScrollSnapshot::new(300.0, 800.0, 2000.0).back_to_top_visible(threshold));
        assert!(ScrollSnapshot::new(300.5, 800.0, 2000.0).back_to_top_visible(threshold));
        assert!(ScrollSnapshot::new(150.0, 800.0, 2000.0).back_to_top_visible(100.0));
    }
}
