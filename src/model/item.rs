use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{SashgridError, SashgridResult};
use crate::model::divider::{Divider, GlazingBar};
use crate::model::sash::{PlacedSash, SashType};
use crate::model::settings::LayoutSettings;
use crate::schema::validate::validate_item;

/// A quoted joinery item: one or more ganged units sharing a divider layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteItem {
    pub id: String,
    /// Units laid out left to right, top-aligned.
    pub instances: Vec<Instance>,
    /// Mullions and transoms; unscoped dividers apply to every instance.
    #[serde(default)]
    pub dividers: Vec<Divider>,
    pub kind: ItemKind,
}

/// One physical unit of a ganged item, by its overall frame size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,
    pub width: f64,
    pub height: f64,
}

impl Instance {
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// Item-type specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "item_type", rename_all = "snake_case")]
pub enum ItemKind {
    /// Hinged window; sashes are casements or fixed glazing.
    Casement {
        #[serde(default)]
        sashes: Vec<PlacedSash>,
    },
    /// Door set; leaves are door leaves or fixed glazing (side/top lights).
    Door {
        #[serde(default)]
        leaves: Vec<PlacedSash>,
        /// Bottom frame member width; the frame thickness when unset.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        threshold: Option<f64>,
    },
    /// Vertical sliding sash window split by a meeting rail.
    Sash {
        #[serde(default)]
        upper_bars: Vec<GlazingBar>,
        #[serde(default)]
        lower_bars: Vec<GlazingBar>,
    },
    /// Fixed screen with no opening leaves.
    Screen,
}

impl ItemKind {
    /// Explicitly placed sashes (empty for kinds that place them implicitly).
    pub fn placements(&self) -> &[PlacedSash] {
        match self {
            Self::Casement { sashes } => sashes,
            Self::Door { leaves, .. } => leaves,
            Self::Sash { .. } | Self::Screen => &[],
        }
    }

    /// Whether a sash of `ty` may be placed explicitly in this kind of item.
    pub fn allows(&self, ty: SashType) -> bool {
        match self {
            Self::Casement { .. } => matches!(ty, SashType::Casement | SashType::FixedGlazing),
            Self::Door { .. } => matches!(ty, SashType::DoorLeaf | SashType::FixedGlazing),
            Self::Sash { .. } | Self::Screen => false,
        }
    }

    /// Name used in messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Casement { .. } => "casement",
            Self::Door { .. } => "door",
            Self::Sash { .. } => "sash",
            Self::Screen => "screen",
        }
    }

    /// Bottom frame member width for this kind.
    pub fn sill_thickness(&self, settings: &LayoutSettings) -> f64 {
        match self {
            Self::Door {
                threshold: Some(t), ..
            } => *t,
            _ => settings.frame_thickness,
        }
    }
}

impl QuoteItem {
    /// A single-instance item.
    pub fn single(id: impl Into<String>, width: f64, height: f64, kind: ItemKind) -> Self {
        let id = id.into();
        Self {
            instances: vec![Instance::new(format!("{id}.1"), width, height)],
            id,
            dividers: Vec::new(),
            kind,
        }
    }

    pub fn with_dividers(mut self, dividers: Vec<Divider>) -> Self {
        self.dividers = dividers;
        self
    }

    /// Parse an item from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SashgridResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SashgridError::serde(format!("parse quote item JSON: {e}")))
    }

    /// Parse an item from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SashgridResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SashgridError::validation(format!("open quote item JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the item's structure against `settings`.
    pub fn validate(&self, settings: &LayoutSettings) -> SashgridResult<()> {
        validate_item(self, settings).map_err(|e| {
            SashgridError::validation(format!("quote item '{}' is invalid:\n{e}", self.id))
        })
    }

    /// Dividers that apply to the instance with `instance_id`.
    pub fn dividers_for<'a>(&'a self, instance_id: &'a str) -> impl Iterator<Item = &'a Divider> {
        self.dividers.iter().filter(move |d| d.applies_to(instance_id))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/item.rs"]
mod tests;
