//! sashgrid computes the drawable geometry of joinery items: windows, doors and
//! screens made of frames, mullions, transoms, sashes and glazing bars.
//!
//! # Pipeline overview
//!
//! 1. **Decompose**: opening size + dividers -> glass panes ([`decompose`])
//! 2. **Subdivide**: a sash's glass area + glazing bars -> lights ([`subdivide`])
//! 3. **Compose**: a [`QuoteItem`] -> [`LayoutPlan`] with every pane, light and member
//! 4. **Map**: a [`Viewport`] rescales a plan for a preview surface or a printed page
//!
//! All lengths are millimetres as `f64`. The geometry steps are pure and never fail:
//! degenerate input produces fewer (or no) panes rather than an error. Fallible work
//! (parsing JSON, loading settings, validation) returns [`SashgridResult`].
#![forbid(unsafe_code)]

mod compose;
mod foundation;
mod layout;
mod model;
mod schema;

pub use compose::fingerprint::{LayoutFingerprint, fingerprint_plan};
pub use compose::opening::MEETING_RAIL_ID;
pub use compose::plan::{
    InstanceLayout, LayoutPlan, Member, MemberKind, PaneLayout, SashLayout, compose,
};
pub use compose::viewport::Viewport;
pub use foundation::core::{Affine, Rect, Span, Vec2, rect_from_spans};
pub use foundation::error::{SashgridError, SashgridResult};
pub use layout::decompose::{decompose, decompose_with_tolerance, divider_rects};
pub use layout::subdivide::{BarRect, glazing_bar_rects, subdivide};
pub use model::divider::{Divider, DividerKind, GlazingBar, MemberThickness};
pub use model::item::{Instance, ItemKind, QuoteItem};
pub use model::pane::Pane;
pub use model::sash::{HingeSide, PlacedSash, SashType};
pub use model::settings::LayoutSettings;
pub use schema::validate::{PathElem, ValidationErrors, ValidationIssue, validate_item};
