//! Two-phase counted fetch.
//!
//! Several vendor queries share one shape: a probe call with a null
//! destination reports how many elements exist, then a second call
//! fills a buffer of exactly that many slots. The helper owns the slot
//! buffer for the duration of the exchange and hands each filled slot
//! to a decoder, so callers never duplicate the two-call sequence.

use std::ptr;

use gencam_sys::status::StatusCode;

use crate::error::{check, Result};

/// Run a counted two-phase query.
///
/// `call` is invoked as `call(null, 0, &mut count)` to discover the
/// element count, then as `call(buf, count, null)` to fill `count`
/// slots initialized to `empty`. Each filled slot is passed to `decode`
/// in order. A zero count short-circuits to an empty result without a
/// second call. Either phase failing surfaces its status verbatim.
pub(crate) fn fetch_counted<E, T, C, D>(empty: E, mut call: C, mut decode: D) -> Result<Vec<T>>
where
    E: Copy,
    C: FnMut(*mut E, u32, *mut u32) -> StatusCode,
    D: FnMut(usize, E) -> Result<T>,
{
    let mut count: u32 = 0;
    check(call(ptr::null_mut(), 0, &mut count))?;

    if count == 0 {
        return Ok(Vec::new());
    }

    let mut slots = vec![empty; count as usize];
    check(call(slots.as_mut_ptr(), count, ptr::null_mut()))?;

    let mut out = Vec::with_capacity(slots.len());
    for (index, slot) in slots.into_iter().enumerate() {
        out.push(decode(index, slot)?);
    }
    Ok(out)
}
