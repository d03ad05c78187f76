//! Levenshtein edit distance
//!
//! The distance is computed with the classic dynamic-programming table over
//! characters. Only two rows are kept alive at a time; the result is the same
//! as filling the full `(|a|+1) x (|b|+1)` table.

/// Minimum number of single-character insertions, deletions or
/// substitutions needed to turn `a` into `b`.
///
/// # Example
/// ```
/// use wordlang_core::distance::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // prev[j] = distance between a[..i-1] and b[..j]
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j + 1].min(curr[j]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Whether the length difference alone already puts the distance above
/// `limit`. Lengths are in characters.
#[inline]
pub fn length_gap_exceeds(a_len: usize, b_len: usize, limit: usize) -> bool {
    a_len.abs_diff(b_len) > limit
}
