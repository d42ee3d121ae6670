use crate::config::config::{DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};

/// Box the scaled variant of an image has to fit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleBounds {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl ScaleBounds {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width: max_width.max(1),
            max_height: max_height.max(1),
        }
    }

    /// Width of the scaled variant: the smaller of the width-bound and the
    /// height-bound fit.
    pub fn scaled_width(&self, src_width: u32, src_height: u32) -> u32 {
        let by_width = u64::from(self.max_width);
        let by_height = u64::from(self.max_height) * u64::from(src_width)
            / u64::from(src_height.max(1));
        clamp_to_pixels(by_width.min(by_height))
    }

    /// Scaled width plus the height that keeps the source aspect ratio.
    ///
    /// The height is capped at `max_height`: for sources so tall that the
    /// width rounds up to a single pixel, the ratio can no longer be kept.
    pub fn scaled_dimensions(&self, src_width: u32, src_height: u32) -> (u32, u32) {
        let width = self.scaled_width(src_width, src_height);
        let height = u64::from(src_height) * u64::from(width) / u64::from(src_width.max(1));
        (width, clamp_to_pixels(height).min(self.max_height))
    }
}

fn clamp_to_pixels(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX).max(1)
}
