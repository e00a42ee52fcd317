// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

use kurbo::Size;

/// Presentation-level viewport configuration.
///
/// `width` and `height` describe the logical canvas the slides were designed
/// for; `min_scale`/`max_scale` bound the window-fit scale, where `0` means
/// "no bound". `perspective` is the depth in pixels used for the root element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Logical canvas width in pixels.
    pub width: f64,
    /// Logical canvas height in pixels.
    pub height: f64,
    /// Upper bound on the window scale; `0` disables the bound.
    pub max_scale: f64,
    /// Lower bound on the window scale; `0` disables the bound.
    pub min_scale: f64,
    /// Perspective depth in pixels.
    pub perspective: f64,
}

impl ViewportConfig {
    /// Defaults used when the presentation root does not say otherwise.
    pub const DEFAULT: Self = Self {
        width: 1024.0,
        height: 768.0,
        max_scale: 1.0,
        min_scale: 0.0,
        perspective: 1000.0,
    };

    /// Scale that fits the logical canvas into `viewport` without cropping.
    ///
    /// Takes the smaller of the height and width ratios, then clamps it into
    /// `[min_scale, max_scale]` for whichever bounds are non-zero.
    ///
    /// ```
    /// use impressionist_pose::ViewportConfig;
    /// use kurbo::Size;
    ///
    /// let config = ViewportConfig { min_scale: 0.0, ..ViewportConfig::DEFAULT };
    /// assert_eq!(config.window_scale(Size::new(512.0, 384.0)), 0.5);
    /// assert_eq!(config.window_scale(Size::new(2048.0, 1536.0)), 1.0);
    /// ```
    #[must_use]
    pub fn window_scale(&self, viewport: Size) -> f64 {
        let h_scale = viewport.height / self.height;
        let w_scale = viewport.width / self.width;
        let mut scale = if h_scale > w_scale { w_scale } else { h_scale };
        if self.max_scale != 0.0 && scale > self.max_scale {
            scale = self.max_scale;
        }
        if self.min_scale != 0.0 && scale < self.min_scale {
            scale = self.min_scale;
        }
        scale
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Free-function form of [`ViewportConfig::window_scale`].
#[must_use]
pub fn compute_window_scale(config: &ViewportConfig, viewport: Size) -> f64 {
    config.window_scale(viewport)
}
