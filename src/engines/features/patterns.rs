// src/engines/features/patterns.rs
//
// Window predicates for the local-pattern features. Every predicate takes a
// window of exactly the width it was registered with.

/// Faces of both symbols add up to an odd number.
pub fn odd_even_pair(w: &[u8]) -> bool {
    (w[0] + w[1]) % 2 == 1
}

/// Every symbol equals the first one.
pub fn streak(w: &[u8]) -> bool {
    w.iter().all(|&s| s == w[0])
}

/// Two distinct symbols, each appearing twice (XXYY, XYXY, XYYX).
pub fn two_pairs(w: &[u8]) -> bool {
    split_counts(w) == Some((2, 2))
}

/// Two distinct symbols split two and three, in any arrangement.
pub fn full_house(w: &[u8]) -> bool {
    matches!(split_counts(w), Some((2, 3)) | Some((3, 2)))
}

/// The window opens and closes with the same symbol X and holds exactly
/// `inner` further copies of X between them.
pub fn bracketed(w: &[u8], inner: usize) -> bool {
    let (first, last) = (w[0], w[w.len() - 1]);
    first == last && w[1..w.len() - 1].iter().filter(|&&s| s == first).count() == inner
}

/// Occurrences of the first symbol and of the single other symbol, or
/// `None` when the window holds a number of distinct symbols other than two.
fn split_counts(w: &[u8]) -> Option<(usize, usize)> {
    let x = w[0];
    let y = w.iter().copied().find(|&s| s != x)?;
    if w.iter().any(|&s| s != x && s != y) {
        return None;
    }
    let xs = w.iter().filter(|&&s| s == x).count();
    Some((xs, w.len() - xs))
}
