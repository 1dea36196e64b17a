use serde::{Deserialize, Serialize};

use crate::model::divider::GlazingBar;

/// What kind of leaf occupies a pane opening.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SashType {
    /// Side- or top-hung opening sash.
    Casement,
    /// Door leaf.
    DoorLeaf,
    /// Vertical sliding sash; placed implicitly above and below a meeting rail.
    Sliding,
    /// Glass glazed directly into the frame; has no sash profile of its own.
    FixedGlazing,
}

impl SashType {
    /// Whether the leaf has its own sash profile around the glass.
    pub fn has_sash_frame(self) -> bool {
        !matches!(self, Self::FixedGlazing)
    }
}

/// Which side the leaf is hung on, as seen from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HingeSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// A sash placed into one decomposed pane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedSash {
    /// Id of the pane produced by decomposition.
    pub pane_id: String,
    #[serde(rename = "type")]
    pub sash_type: SashType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hinge_side: Option<HingeSide>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub glazing_bars: Vec<GlazingBar>,
    /// Instance of a ganged item; `None` places the sash in every instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

impl PlacedSash {
    pub fn new(pane_id: impl Into<String>, sash_type: SashType) -> Self {
        Self {
            pane_id: pane_id.into(),
            sash_type,
            hinge_side: None,
            glazing_bars: Vec::new(),
            instance_id: None,
        }
    }

    pub fn hinged(mut self, side: HingeSide) -> Self {
        self.hinge_side = Some(side);
        self
    }

    pub fn with_bars(mut self, bars: Vec<GlazingBar>) -> Self {
        self.glazing_bars = bars;
        self
    }

    pub fn for_instance(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    pub fn applies_to(&self, instance_id: &str) -> bool {
        self.instance_id.as_deref().is_none_or(|id| id == instance_id)
    }
}
