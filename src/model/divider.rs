use serde::{Deserialize, Serialize};

use crate::foundation::core::Span;

/// Orientation of a divider or glazing bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividerKind {
    /// Runs top to bottom (a mullion); `offset` is measured along X.
    Vertical,
    /// Runs left to right (a transom); `offset` is measured along Y.
    Horizontal,
}

/// A structural mullion or transom inside an opening.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Divider {
    /// Stable identifier supplied by the data owner.
    pub id: String,
    /// Mullion (vertical) or transom (horizontal).
    pub kind: DividerKind,
    /// Centreline position, measured from the inner top-left origin.
    pub offset: f64,
    /// Start of the extent along the divider's own length; defaults to `0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span_start: Option<f64>,
    /// End of the extent along the divider's own length; defaults to the opening extent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span_end: Option<f64>,
    /// Member thickness override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    /// Instance this divider belongs to in a ganged item; `None` applies to all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

impl Divider {
    /// A full-height mullion at `offset`.
    pub fn mullion(id: impl Into<String>, offset: f64) -> Self {
        Self::new(id, DividerKind::Vertical, offset)
    }

    /// A full-width transom at `offset`.
    pub fn transom(id: impl Into<String>, offset: f64) -> Self {
        Self::new(id, DividerKind::Horizontal, offset)
    }

    fn new(id: impl Into<String>, kind: DividerKind, offset: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            offset,
            span_start: None,
            span_end: None,
            thickness: None,
            instance_id: None,
        }
    }

    /// Override the member thickness.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    /// Limit the divider's extent along its own length.
    pub fn with_span(mut self, start: f64, end: f64) -> Self {
        self.span_start = Some(start);
        self.span_end = Some(end);
        self
    }

    /// Attach the divider to one instance of a ganged item.
    pub fn for_instance(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    /// Whether an explicit span limit was given on either end.
    pub fn has_span(&self) -> bool {
        self.span_start.is_some() || self.span_end.is_some()
    }

    /// Effective thickness: the override, or the default for this kind.
    pub fn thickness_or(&self, defaults: MemberThickness) -> f64 {
        self.thickness.unwrap_or(match self.kind {
            DividerKind::Vertical => defaults.mullion_thickness,
            DividerKind::Horizontal => defaults.transom_thickness,
        })
    }

    /// Extent along the divider's own length, clamped to `[0, length]`.
    ///
    /// `None` when the clamped span is degenerate.
    pub fn span_within(&self, length: f64) -> Option<Span> {
        Span::new(
            self.span_start.unwrap_or(0.0),
            self.span_end.unwrap_or(length),
        )
        .clamp_to(0.0, length)
    }

    /// Whether this divider applies to the instance with `instance_id`.
    pub fn applies_to(&self, instance_id: &str) -> bool {
        self.instance_id.as_deref().is_none_or(|id| id == instance_id)
    }
}

/// Default member thickness per divider kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberThickness {
    /// Used for vertical dividers without an override.
    pub mullion_thickness: f64,
    /// Used for horizontal dividers without an override.
    pub transom_thickness: f64,
}

impl MemberThickness {
    /// Same thickness for both kinds.
    pub fn uniform(thickness: f64) -> Self {
        Self {
            mullion_thickness: thickness,
            transom_thickness: thickness,
        }
    }
}

/// A glazing bar inside one sash's glass area.
///
/// Only the count and kind of bars affect geometry: lights are always spaced
/// evenly across the glass. `offset` is kept for ordering and round-tripping and is
/// not used as a position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlazingBar {
    /// Stable identifier supplied by the data owner.
    pub id: String,
    /// Vertical or horizontal bar.
    pub kind: DividerKind,
    /// Stored bar position; orders bars of the same kind.
    #[serde(default)]
    pub offset: f64,
}

impl GlazingBar {
    /// A vertical glazing bar.
    pub fn vertical(id: impl Into<String>, offset: f64) -> Self {
        Self {
            id: id.into(),
            kind: DividerKind::Vertical,
            offset,
        }
    }

    /// A horizontal glazing bar.
    pub fn horizontal(id: impl Into<String>, offset: f64) -> Self {
        Self {
            id: id.into(),
            kind: DividerKind::Horizontal,
            offset,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/divider.rs"]
mod tests;
