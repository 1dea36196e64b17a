use serde::{Deserialize, Serialize};

use crate::foundation::core::{Rect, Vec2};

/// A rectangular glass area in millimetres.
///
/// Coordinates are relative to whatever origin produced the pane: the opening's inner
/// top-left for decomposition, the sash glass top-left for subdivision, or the item
/// origin once a plan has been composed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pane {
    /// `"row-col"` identifier; renderers match placed sashes on it string-for-string.
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Pane {
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_rect(id: impl Into<String>, rect: Rect) -> Self {
        Self::new(id, rect.x0, rect.y0, rect.width(), rect.height())
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The same pane moved by `delta`.
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            id: self.id.clone(),
            x: self.x + delta.x,
            y: self.y + delta.y,
            width: self.width,
            height: self.height,
        }
    }
}

pub(crate) fn pane_id(row: usize, col: usize) -> String {
    format!("{row}-{col}")
}
