// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (surface sizes, margins).

/// Default surface width in pixels.
pub const WIDTH: u32 = 600;
/// Default surface height in pixels (dashboard chart cards use 200).
pub const HEIGHT: u32 = 200;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(40, 20, 20, 30)
    }
}

/// Logical drawing area owned by one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawSurface {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
}

impl DrawSurface {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height, insets: Insets::new(40, 20, 20, 30) }
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Width left for the plot once margins are removed; never negative.
    pub fn inner_width(&self) -> f32 {
        self.width.saturating_sub(self.insets.hsum()) as f32
    }

    pub fn inner_height(&self) -> f32 {
        self.height.saturating_sub(self.insets.vsum()) as f32
    }

    pub fn plot_left(&self) -> f32 { self.insets.left as f32 }
    pub fn plot_top(&self) -> f32 { self.insets.top as f32 }
    pub fn plot_right(&self) -> f32 { self.plot_left() + self.inner_width() }
    pub fn plot_bottom(&self) -> f32 { self.plot_top() + self.inner_height() }
}

impl Default for DrawSurface {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
