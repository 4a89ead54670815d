//! Screen geometry aggregation
//!
//! The overlay window spans every connected display. At startup the host's
//! display regions are folded into one aggregate: total width (sum of all
//! region widths), the leftmost origin (which can be negative when a
//! monitor sits left of the primary), and the minimum region height. The
//! aggregate is computed once and held immutable for the process lifetime.

use thiserror::Error;

/// Fallback aggregate when the host reports no displays.
pub const FALLBACK_WIDTH: f32 = 1280.0;
pub const FALLBACK_HEIGHT: f32 = 800.0;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("no display regions reported by the host")]
    NoDisplays,
}

/// One display's working area as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRegion {
    /// Horizontal offset of the region's left edge, in pixels.
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

/// The immutable startup aggregate of all display regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry {
    /// Sum of all region widths.
    pub total_width: f32,
    /// Left edge of the leftmost region.
    pub leftmost: f32,
    /// Height of the shortest region; the overlay window uses this height
    /// so it fits on every display it spans.
    pub min_height: f32,
}

impl ScreenGeometry {
    pub fn from_regions(regions: &[DisplayRegion]) -> Result<Self, GeometryError> {
        let mut iter = regions.iter();
        let first = iter.next().ok_or(GeometryError::NoDisplays)?;

        let mut geometry = Self {
            total_width: first.width,
            leftmost: first.left,
            min_height: first.height,
        };
        for region in iter {
            geometry.total_width += region.width;
            geometry.leftmost = geometry.leftmost.min(region.left);
            geometry.min_height = geometry.min_height.min(region.height);
        }
        Ok(geometry)
    }

    /// Degraded layout used when display enumeration fails.
    pub fn fallback() -> Self {
        Self {
            total_width: FALLBACK_WIDTH,
            leftmost: 0.0,
            min_height: FALLBACK_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_region() {
        let geometry = ScreenGeometry::from_regions(&[DisplayRegion {
            left: 0.0,
            width: 1920.0,
            height: 1080.0,
        }])
        .unwrap();
        assert_eq!(geometry.total_width, 1920.0);
        assert_eq!(geometry.leftmost, 0.0);
        assert_eq!(geometry.min_height, 1080.0);
    }

    #[test]
    fn test_aggregates_multiple_regions() {
        // A 1080p monitor left of the primary, plus a shorter laptop panel.
        let geometry = ScreenGeometry::from_regions(&[
            DisplayRegion { left: 0.0, width: 1920.0, height: 1080.0 },
            DisplayRegion { left: -1920.0, width: 1920.0, height: 1080.0 },
            DisplayRegion { left: 1920.0, width: 1440.0, height: 900.0 },
        ])
        .unwrap();
        assert_eq!(geometry.total_width, 5280.0);
        assert_eq!(geometry.leftmost, -1920.0);
        assert_eq!(geometry.min_height, 900.0);
    }

    #[test]
    fn test_no_regions_is_an_error() {
        assert!(matches!(
            ScreenGeometry::from_regions(&[]),
            Err(GeometryError::NoDisplays)
        ));
    }

    #[test]
    fn test_fallback() {
        let geometry = ScreenGeometry::fallback();
        assert_eq!(geometry.total_width, FALLBACK_WIDTH);
        assert_eq!(geometry.leftmost, 0.0);
        assert_eq!(geometry.min_height, FALLBACK_HEIGHT);
    }
}
