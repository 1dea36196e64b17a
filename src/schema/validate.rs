use std::collections::HashSet;
use std::fmt;

use crate::compose::opening::{InstanceOpening, MEETING_RAIL_ID, instance_openings};
use crate::layout::decompose::decompose_with_tolerance;
use crate::model::divider::{Divider, DividerKind};
use crate::model::item::{ItemKind, QuoteItem};
use crate::model::settings::LayoutSettings;

/// One step of a JSON path into a quote item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathElem {
    Field(&'static str),
    Index(usize),
}

impl fmt::Display for PathElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, ".{name}"),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// A single problem found in a quote item.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub path: Vec<PathElem>,
    pub message: String,
}

impl ValidationIssue {
    fn at(path: &[PathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }

    /// JSON path of the offending value, e.g. `$.kind.sashes[1].pane_id`.
    pub fn path_string(&self) -> String {
        self.path.iter().fold(String::from("$"), |mut s, elem| {
            s.push_str(&elem.to_string());
            s
        })
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path_string(), self.message)
        }
    }
}

/// Every problem found in a quote item, in discovery order.
#[derive(Debug, Clone)]
pub struct ValidationErrors {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.issues.iter().map(ToString::to_string).collect();
        f.write_str(&lines.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

/// Structural check of a quote item before layout.
///
/// Layout itself tolerates everything reported here; this exists so data owners can
/// catch mistakes instead of silently drawing less.
pub fn validate_item(item: &QuoteItem, settings: &LayoutSettings) -> Result<(), ValidationErrors> {
    let mut issues = Vec::new();

    let instance_ids = validate_instances(item, settings, &mut issues);
    let openings = instance_openings(item, settings);
    validate_dividers(item, &openings, &instance_ids, settings, &mut issues);
    validate_kind(item, &openings, &instance_ids, settings, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { issues })
    }
}

fn validate_instances<'a>(
    item: &'a QuoteItem,
    settings: &LayoutSettings,
    issues: &mut Vec<ValidationIssue>,
) -> HashSet<&'a str> {
    let mut ids = HashSet::new();
    if item.instances.is_empty() {
        issues.push(ValidationIssue::at(
            &[PathElem::Field("instances")],
            "at least one instance is required",
        ));
    }

    let frame_h = 2.0 * settings.frame_thickness;
    let frame_v = settings.frame_thickness + item.kind.sill_thickness(settings);
    for (i, inst) in item.instances.iter().enumerate() {
        let path = [PathElem::Field("instances"), PathElem::Index(i)];
        if !ids.insert(inst.id.as_str()) {
            issues.push(ValidationIssue::at(
                &path,
                format!("duplicate instance id '{}'", inst.id),
            ));
        }
        for (field, v, limit) in [("width", inst.width, frame_h), ("height", inst.height, frame_v)] {
            let mut p = path.to_vec();
            p.push(PathElem::Field(field));
            if !v.is_finite() || v <= 0.0 {
                issues.push(ValidationIssue::at(&p, "must be a positive number"));
            } else if v <= limit {
                issues.push(ValidationIssue::at(
                    &p,
                    format!("{v} leaves no opening inside {limit} of frame"),
                ));
            }
        }
    }
    ids
}

fn validate_dividers(
    item: &QuoteItem,
    openings: &[InstanceOpening<'_>],
    instance_ids: &HashSet<&str>,
    settings: &LayoutSettings,
    issues: &mut Vec<ValidationIssue>,
) {
    let defaults = settings.member_thickness();
    let mut seen = HashSet::new();
    for (i, d) in item.dividers.iter().enumerate() {
        let path = [PathElem::Field("dividers"), PathElem::Index(i)];
        let field = |name| {
            let mut p = path.to_vec();
            p.push(PathElem::Field(name));
            p
        };

        if !seen.insert(d.id.as_str()) {
            issues.push(ValidationIssue::at(
                &field("id"),
                format!("duplicate divider id '{}'", d.id),
            ));
        }
        if d.id == MEETING_RAIL_ID && matches!(item.kind, ItemKind::Sash { .. }) {
            issues.push(ValidationIssue::at(
                &field("id"),
                format!("'{MEETING_RAIL_ID}' is reserved for the sash meeting rail"),
            ));
        }
        if let Some(inst) = &d.instance_id
            && !instance_ids.contains(inst.as_str())
        {
            issues.push(ValidationIssue::at(
                &field("instance_id"),
                format!("unknown instance '{inst}'"),
            ));
        }
        let thickness = d.thickness_or(defaults);
        if !thickness.is_finite() || thickness <= 0.0 {
            issues.push(ValidationIssue::at(
                &field("thickness"),
                "must be a positive number",
            ));
        }

        for opening in openings.iter().filter(|o| d.applies_to(&o.instance.id)) {
            validate_divider_in(d, opening, &path, issues);
        }
    }
}

fn validate_divider_in(
    d: &Divider,
    opening: &InstanceOpening<'_>,
    path: &[PathElem],
    issues: &mut Vec<ValidationIssue>,
) {
    let (across, along) = match d.kind {
        DividerKind::Vertical => (opening.inner.width(), opening.inner.height()),
        DividerKind::Horizontal => (opening.inner.height(), opening.inner.width()),
    };
    if across <= 0.0 || along <= 0.0 {
        return;
    }

    if !(d.offset > 0.0 && d.offset < across) {
        let mut p = path.to_vec();
        p.push(PathElem::Field("offset"));
        issues.push(ValidationIssue::at(
            &p,
            format!(
                "{} lies outside (0, {across}) in instance '{}'",
                d.offset, opening.instance.id
            ),
        ));
    }
    if d.has_span() && d.span_within(along).is_none() {
        issues.push(ValidationIssue::at(
            path,
            format!("span is empty within instance '{}'", opening.instance.id),
        ));
    }
}

fn validate_kind(
    item: &QuoteItem,
    openings: &[InstanceOpening<'_>],
    instance_ids: &HashSet<&str>,
    settings: &LayoutSettings,
    issues: &mut Vec<ValidationIssue>,
) {
    let list_field = match &item.kind {
        ItemKind::Casement { .. } => "sashes",
        ItemKind::Door { threshold, .. } => {
            if let Some(t) = threshold
                && (!t.is_finite() || *t < 0.0)
            {
                issues.push(ValidationIssue::at(
                    &[PathElem::Field("kind"), PathElem::Field("threshold")],
                    "must be a finite, non-negative number",
                ));
            }
            "leaves"
        }
        ItemKind::Sash { .. } | ItemKind::Screen => return,
    };

    let pane_ids: Vec<(String, HashSet<String>)> = openings
        .iter()
        .map(|o| {
            let panes = decompose_with_tolerance(
                o.inner.width(),
                o.inner.height(),
                &o.dividers,
                settings.member_thickness(),
                settings.coord_tolerance,
            );
            (
                o.instance.id.clone(),
                panes.into_iter().map(|p| p.id).collect(),
            )
        })
        .collect();

    let mut occupied = HashSet::<(String, String)>::new();
    for (i, placed) in item.kind.placements().iter().enumerate() {
        let path = [
            PathElem::Field("kind"),
            PathElem::Field(list_field),
            PathElem::Index(i),
        ];
        let field = |name| {
            let mut p = path.to_vec();
            p.push(PathElem::Field(name));
            p
        };

        if !item.kind.allows(placed.sash_type) {
            issues.push(ValidationIssue::at(
                &field("type"),
                format!(
                    "{:?} cannot be placed in a {} item",
                    placed.sash_type,
                    item.kind.name()
                ),
            ));
        }
        if let Some(inst) = &placed.instance_id
            && !instance_ids.contains(inst.as_str())
        {
            issues.push(ValidationIssue::at(
                &field("instance_id"),
                format!("unknown instance '{inst}'"),
            ));
            continue;
        }

        for (inst, panes) in pane_ids.iter().filter(|(id, _)| placed.applies_to(id)) {
            if !panes.contains(&placed.pane_id) {
                issues.push(ValidationIssue::at(
                    &field("pane_id"),
                    format!("no pane '{}' in instance '{inst}'", placed.pane_id),
                ));
            } else if !occupied.insert((inst.clone(), placed.pane_id.clone())) {
                issues.push(ValidationIssue::at(
                    &field("pane_id"),
                    format!(
                        "pane '{}' in instance '{inst}' already holds a sash",
                        placed.pane_id
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
