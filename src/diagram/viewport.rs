use serde::Serialize;
use crate::constants::{MAX_TIME_MINUTES, VISIBLE_RANGE_MINUTES, WIDTH_DIVISOR};

/// Canvas sizing for the horizontally scrollable diagram
///
/// The first [`VISIBLE_RANGE_MINUTES`] fit the rendering surface's native
/// width; every further hour up to [`MAX_TIME_MINUTES`] adds
/// `base_width / 20` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub base_width: f64,
    pub total_width: f64,
    pub max_time: f64,
    pub max_km: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(base_width: f64, max_km: f64) -> Self {
        Self {
            base_width,
            total_width: total_width(base_width),
            max_time: MAX_TIME_MINUTES,
            max_km,
        }
    }

    /// Pixels per minute past the natively scaled range
    #[must_use]
    pub fn overflow_scale(&self) -> f64 {
        (self.base_width / WIDTH_DIVISOR) / 60.0
    }
}

#[must_use]
pub fn total_width(base_width: f64) -> f64 {
    let extra_hours = (MAX_TIME_MINUTES - VISIBLE_RANGE_MINUTES) / 60.0;
    let extra_width_per_hour = base_width / WIDTH_DIVISOR;
    base_width + extra_hours * extra_width_per_hour
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_width_for_1000px() {
        assert_eq!(total_width(1000.0), 1200.0);
    }

    #[test]
    fn test_zero_width_surface() {
        assert_eq!(total_width(0.0), 0.0);
    }

    #[test]
    fn test_viewport_bounds() {
        let viewport = Viewport::new(1920.0, 176.83);
        assert_eq!(viewport.total_width, 2304.0);
        assert_eq!(viewport.max_time, 1440.0);
        assert_eq!(viewport.max_km, 176.83);
    }
}
