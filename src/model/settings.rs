use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{SashgridError, SashgridResult};
use crate::model::divider::MemberThickness;

/// Profile dimensions and engine options, passed explicitly to every layout call.
///
/// All lengths are millimetres. Missing JSON fields take the [`Default`] values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Outer frame member width (head, jambs, sill).
    pub frame_thickness: f64,
    /// Default mullion width.
    pub mullion_thickness: f64,
    /// Default transom width.
    pub transom_thickness: f64,
    /// Meeting rail width for vertical sliding sash items.
    pub meeting_rail_thickness: f64,
    /// Sash profile width around the glass of opening leaves.
    pub sash_thickness: f64,
    /// Glazing bar width inside a sash.
    pub glazing_bar_thickness: f64,
    /// Cut lines closer than this are merged; `0.0` means exact equality.
    pub coord_tolerance: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            frame_thickness: 70.0,
            mullion_thickness: 80.0,
            transom_thickness: 80.0,
            meeting_rail_thickness: 50.0,
            sash_thickness: 55.0,
            glazing_bar_thickness: 20.0,
            coord_tolerance: 0.0,
        }
    }
}

impl LayoutSettings {
    /// Parse settings from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SashgridResult<Self> {
        let settings: Self = serde_json::from_reader(r)
            .map_err(|e| SashgridError::serde(format!("parse settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SashgridResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SashgridError::validation(format!("open settings JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject negative or non-finite dimensions.
    pub fn validate(&self) -> SashgridResult<()> {
        let fields = [
            ("frame_thickness", self.frame_thickness),
            ("mullion_thickness", self.mullion_thickness),
            ("transom_thickness", self.transom_thickness),
            ("meeting_rail_thickness", self.meeting_rail_thickness),
            ("sash_thickness", self.sash_thickness),
            ("glazing_bar_thickness", self.glazing_bar_thickness),
            ("coord_tolerance", self.coord_tolerance),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(SashgridError::validation(format!(
                    "settings.{name} must be a finite, non-negative number (got {v})"
                )));
            }
        }
        Ok(())
    }

    /// Default mullion/transom thickness for decomposition.
    pub fn member_thickness(&self) -> MemberThickness {
        MemberThickness {
            mullion_thickness: self.mullion_thickness,
            transom_thickness: self.transom_thickness,
        }
    }
}
