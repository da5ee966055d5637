//! Table-independent subsequence tests.
//!
//! These answer "is `z` a subsequence of `s`?" with a greedy two-pointer walk,
//! so they work before any length table exists.

/// Returns `true` if `z` is a (not necessarily contiguous) subsequence of `s`.
///
/// Walks `s` left to right, consuming the next character of `z` whenever it
/// matches. The empty `z` is a subsequence of everything.
pub fn is_subsequence<I>(z: I, s: &[char]) -> bool
where
    I: IntoIterator<Item = char>,
{
    let mut rest = s.iter();
    z.into_iter().all(|c| rest.any(|&sc| sc == c))
}

/// Returns `true` if `z` is a subsequence of both `x` and `y`.
pub fn is_common_subsequence(z: &str, x: &[char], y: &[char]) -> bool {
    is_subsequence(z.chars(), x) && is_subsequence(z.chars(), y)
}
