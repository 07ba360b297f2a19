//! Handling of values the platform could not report.
//!
//! A field can be missing for two different reasons and they are kept apart:
//! the running platform may not have the accessor at all (capability gate), or
//! the accessor exists but returned the "unavailable" sentinel (mask). Gating
//! always happens first.

/// Platform sentinel for integer fields that were not reported.
pub const UNAVAILABLE: i32 = i32::MAX;

/// Platform sentinel for 64-bit fields that were not reported.
pub const UNAVAILABLE_LONG: i64 = i64::MAX;

/// Returns `None` if `raw` is the sentinel.
pub fn mask_unavailable<T: PartialEq>(raw: T, sentinel: T) -> Option<T> {
    if raw == sentinel {
        None
    } else {
        Some(raw)
    }
}

/// Only calls `accessor` if the platform supports the field.
pub fn capability_gate<T>(supported: bool, accessor: impl FnOnce() -> T) -> Option<T> {
    supported.then(accessor)
}

/// Gate, then mask. Shorthand for the common case of a gated `i32` field.
pub fn gated(supported: bool, raw: i32) -> Option<i32> {
    capability_gate(supported, || raw).and_then(|x| mask_unavailable(x, UNAVAILABLE))
}

/// Masks a 32-bit platform cell id and widens it.
pub fn cell_id(raw: i32) -> Option<i64> {
    mask_unavailable(raw, UNAVAILABLE).map(i64::from)
}
