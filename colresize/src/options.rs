//! Extension configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{px_ceil, ResizePolicy};

/// Floor applied to every column width unless overridden.
pub const DEFAULT_MIN_COLUMN_WIDTH: i32 = 20;

/// Vertical scroll viewport configuration.
///
/// Enabling this wraps the table body in a fixed-height viewport with a
/// mirrored scrollbar overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollY {
    #[default]
    Disabled,
    /// Fixed viewport height in pixels.
    Px(i32),
}

impl ScrollY {
    pub fn is_enabled(&self) -> bool {
        matches!(self, ScrollY::Px(_))
    }

    pub fn height(&self) -> Option<i32> {
        match self {
            ScrollY::Disabled => None,
            ScrollY::Px(h) => Some(*h),
        }
    }
}

/// Error parsing a css-length string into a [`ScrollY`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid scroll height: {0:?}")]
pub struct ParseScrollYError(pub String);

impl FromStr for ScrollY {
    type Err = ParseScrollYError;

    /// Accepts `""`/`"false"` (disabled), a bare number, or a px-suffixed
    /// css length. Fractional lengths round up to a whole pixel.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("false") {
            return Ok(ScrollY::Disabled);
        }
        let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
        number
            .parse::<f64>()
            .ok()
            .filter(|h| h.is_finite() && *h >= 0.0)
            .map(|h| ScrollY::Px(px_ceil(h)))
            .ok_or_else(|| ParseScrollYError(s.to_string()))
    }
}

/// Caller-facing configuration, builder-style.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Minimum column width in pixels.
    pub min_column_width: i32,
    /// Vertical scroll viewport; disabled by default.
    pub scroll_y: ScrollY,
    /// When true, growing a column grows the table instead of squeezing
    /// the right neighbor.
    pub resize_table: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_column_width: DEFAULT_MIN_COLUMN_WIDTH,
            scroll_y: ScrollY::Disabled,
            resize_table: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_column_width(mut self, width: i32) -> Self {
        self.min_column_width = width;
        self
    }

    pub fn scroll_y(mut self, scroll_y: ScrollY) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    pub fn resize_table(mut self, resize_table: bool) -> Self {
        self.resize_table = resize_table;
        self
    }

    pub fn policy(&self) -> ResizePolicy {
        if self.resize_table {
            ResizePolicy::ExpandTable
        } else {
            ResizePolicy::Squeeze
        }
    }
}
