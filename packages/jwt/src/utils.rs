//! Timing-safe comparison and clock helpers

use subtle::{Choice, ConstantTimeEq};

/// Compare two byte strings without short-circuiting on the first difference.
///
/// Every position up to the longer length is visited, with missing bytes read as zero,
/// and the result is combined with an explicit length-equality term.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    scan(a, b).0.into()
}

/// Comparison result plus the number of positions visited
pub(crate) fn scan(a: &[u8], b: &[u8]) -> (Choice, usize) {
    let len = a.len().max(b.len());
    let mut equal = Choice::from(1);
    let mut visited = 0;
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        equal &= x.ct_eq(&y);
        visited += 1;
    }

    let same_len = (a.len() as u64).ct_eq(&(b.len() as u64));
    (equal & same_len, visited)
}

/// Current time in whole seconds since the Unix epoch
#[inline]
#[must_use]
pub fn unix_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
