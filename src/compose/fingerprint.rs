use crate::compose::plan::LayoutPlan;
use crate::foundation::core::Rect;
use crate::foundation::math::Fnv1a64;
use crate::model::pane::Pane;
use crate::model::sash::{HingeSide, SashType};

/// 128-bit digest of a plan's ids and exact coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct LayoutFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for LayoutFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Deterministic digest of `plan`; two renderers drawing from plans with equal
/// fingerprints draw identical geometry.
pub fn fingerprint_plan(plan: &LayoutPlan) -> LayoutFingerprint {
    let mut h = Pair::new();
    h.str(&plan.item_id);
    h.str(plan.item_type);
    h.rect(plan.bounds);
    h.u64(plan.instances.len() as u64);
    for inst in &plan.instances {
        h.str(&inst.instance_id);
        h.rect(inst.outer);
        h.rect(inst.inner);

        h.u64(inst.members.len() as u64);
        for m in &inst.members {
            h.u8(m.kind.tag());
            h.str(&m.source_id);
            h.rect(m.rect);
        }

        h.u64(inst.panes.len() as u64);
        for p in &inst.panes {
            h.pane(&p.pane);
            match &p.sash {
                Some(s) => {
                    h.u8(1);
                    h.u8(sash_type_tag(s.sash_type));
                    h.u8(s.hinge_side.map_or(0, hinge_tag));
                    h.rect(s.glass);
                    h.u64(s.lights.len() as u64);
                    for l in &s.lights {
                        h.pane(l);
                    }
                }
                None => h.u8(0),
            }
        }
    }
    h.finish()
}

fn sash_type_tag(t: SashType) -> u8 {
    match t {
        SashType::Casement => 0,
        SashType::DoorLeaf => 1,
        SashType::Sliding => 2,
        SashType::FixedGlazing => 3,
    }
}

fn hinge_tag(side: HingeSide) -> u8 {
    match side {
        HingeSide::Left => 1,
        HingeSide::Right => 2,
        HingeSide::Top => 3,
        HingeSide::Bottom => 4,
    }
}

struct Pair {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl Pair {
    fn new() -> Self {
        Self {
            a: Fnv1a64::new(Fnv1a64::OFFSET_BASIS),
            b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
        }
    }

    fn u8(&mut self, v: u8) {
        self.a.write_u8(v);
        self.b.write_u8(v);
    }

    fn u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn str(&mut self, s: &str) {
        self.a.write_str(s);
        self.b.write_str(s);
    }

    fn f64(&mut self, v: f64) {
        self.a.write_f64(v);
        self.b.write_f64(v);
    }

    fn rect(&mut self, r: Rect) {
        for v in [r.x0, r.y0, r.x1, r.y1] {
            self.f64(v);
        }
    }

    fn pane(&mut self, p: &Pane) {
        self.str(&p.id);
        for v in [p.x, p.y, p.width, p.height] {
            self.f64(v);
        }
    }

    fn finish(self) -> LayoutFingerprint {
        LayoutFingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/fingerprint.rs"]
mod tests;
