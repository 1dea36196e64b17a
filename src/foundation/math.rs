#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_f64(&mut self, v: f64) {
        // -0.0 and 0.0 hash alike.
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Sort cut-line coordinates ascending and drop duplicates.
///
/// With `tolerance == 0.0` duplicates are removed by exact equality only. A positive
/// tolerance drops any value within `tolerance` of the last kept one, so the smallest
/// value of each cluster survives. Non-finite values are discarded.
pub(crate) fn dedup_cut_lines(mut coords: Vec<f64>, tolerance: f64) -> Vec<f64> {
    coords.retain(|v| v.is_finite());
    coords.sort_by(f64::total_cmp);
    let tolerance = if tolerance.is_finite() {
        tolerance.max(0.0)
    } else {
        0.0
    };
    let mut out: Vec<f64> = Vec::with_capacity(coords.len());
    for v in coords {
        match out.last() {
            Some(&last) if tolerance == 0.0 && v == last => {}
            Some(&last) if tolerance > 0.0 && v - last <= tolerance => {}
            _ => out.push(v),
        }
    }
    out
}

pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}
