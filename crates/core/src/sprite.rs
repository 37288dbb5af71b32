//! Sprite module - positioned character art with viewport clipping
//!
//! A sprite carries a continuous position and velocity plus a rectangular
//! character image. Positions are only snapped to the grid when drawing.
//!
//! Spaces in the image are transparent: drawing never overwrites a cell with a
//! space, so sprites can overlap without erasing each other.

use crate::surface::Surface;
use crate::types::{Vector2, VectorUpdate};

/// Rectangular character art.
///
/// Rows may differ in length; they are left-aligned and padded with
/// transparent space up to the widest row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Image {
    /// Build an image from multi-line art.
    ///
    /// Leading and trailing blank lines are dropped; leading spaces on the
    /// remaining rows are kept.
    pub fn parse(art: &str) -> Self {
        let trimmed = art.trim_matches(|c| c == '\n' || c == '\r');
        let rows: Vec<Vec<char>> = trimmed
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();
        Self::from_rows(rows)
    }

    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    /// `(height, width)` in cells.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.width)
    }

    /// Character at `(row, col)`; cells past the end of a short row are spaces.
    pub fn get(&self, row: usize, col: usize) -> char {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(' ')
    }
}

/// Snap a continuous coordinate to a grid cell, rounding half away from zero.
#[inline]
pub fn snap(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5) as i32
    } else {
        (v + 0.5) as i32
    }
}

/// Visible `[start, end)` range of a sprite along one axis, plus the on-screen
/// anchor cell for `start`.
///
/// Works in `i64` so saturated far-off coordinates clip away instead of
/// overflowing.
#[inline]
fn clip_axis(coord: i64, extent: i64, viewport: i64) -> (i64, i64, i64) {
    let start = if coord < 0 { (-coord).min(extent) } else { 0 };
    let end = if coord + extent > viewport {
        (viewport - coord).max(start)
    } else {
        extent
    };
    let anchor = if coord < 0 {
        coord.max(0)
    } else {
        coord.min(viewport - 1)
    };
    (start, end, anchor)
}

/// A positioned, moving piece of character art.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sprite {
    position: Vector2,
    velocity: Vector2,
    image: Image,
}

impl Sprite {
    /// Create a sprite at the origin, at rest.
    pub fn new(art: &str) -> Self {
        Self::from_image(Image::parse(art))
    }

    pub fn from_image(image: Image) -> Self {
        Self {
            position: Vector2::ZERO,
            velocity: Vector2::ZERO,
            image,
        }
    }

    pub fn with_position(mut self, position: Vector2) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub(crate) fn position_mut(&mut self) -> &mut Vector2 {
        &mut self.position
    }

    pub(crate) fn velocity_mut(&mut self) -> &mut Vector2 {
        &mut self.velocity
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Swap the art (e.g. an animation frame). The shape follows the new image.
    pub fn set_image(&mut self, image: Image) {
        self.image = image;
    }

    /// `(height, width)` in cells.
    pub fn shape(&self) -> (usize, usize) {
        self.image.shape()
    }

    pub fn height(&self) -> f64 {
        self.image.shape().0 as f64
    }

    pub fn width(&self) -> f64 {
        self.image.shape().1 as f64
    }

    /// Bottom edge in world coordinates (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.position.y + self.height()
    }

    /// Right edge in world coordinates (`x + width`).
    pub fn right(&self) -> f64 {
        self.position.x + self.width()
    }

    pub fn move_by(&mut self, delta: Vector2) {
        self.position += delta;
    }

    pub fn accelerate(&mut self, delta: Vector2) {
        self.velocity += delta;
    }

    /// Replace the position, fully or per axis.
    pub fn set_position(&mut self, update: impl Into<VectorUpdate>) {
        update.into().apply_to(&mut self.position);
    }

    /// Replace the velocity, fully or per axis.
    pub fn set_velocity(&mut self, update: impl Into<VectorUpdate>) {
        update.into().apply_to(&mut self.velocity);
    }

    /// Grid cell the sprite's top-left corner snaps to, as `(row, col)`.
    pub fn grid_position(&self) -> (i32, i32) {
        (snap(self.position.y), snap(self.position.x))
    }

    /// Draw into `surface`, clipped to its extent.
    ///
    /// Spaces are transparent. Writes the surface rejects are skipped.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (row, col) = self.grid_position();
        let (rows, cols) = surface.extent();
        let (height, width) = self.image.shape();

        let (y_min, y_max, y) = clip_axis(row.into(), height as i64, rows.into());
        let (x_min, x_max, x) = clip_axis(col.into(), width as i64, cols.into());

        for i in 0..(y_max - y_min) {
            for j in 0..(x_max - x_min) {
                let ch = self.image.get((i + y_min) as usize, (j + x_min) as usize);
                if ch == ' ' {
                    continue;
                }
                // Clipped cells sit inside the viewport, so they fit in i32.
                let _ = surface.write_cell((y + i) as i32, (x + j) as i32, ch);
            }
        }
    }
}
