// Shared numeric helpers for the height field and the classifier.

// Clamp `value` into [lo, hi].
//
// Requires lo <= hi. The result is always inside the range: NaN maps to `lo`,
// infinities map to the nearer bound.
#[inline]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    debug_assert!(lo <= hi, "clamp range is inverted: [{lo}, {hi}]");
    if value.is_nan() {
        lo
    } else if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

// Linearly map `value` from `from` onto `to`, clamping to `from` first.
// The lower endpoint maps exactly; the upper one does for every band range in use.
#[inline]
pub fn remap(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let (a, b) = from;
    let (c, d) = to;
    let v = clamp(value, a, b);
    // Operation order is part of the color contract: channels are truncated afterwards
    c + (v - a) * (d - c) / (b - a)
}
