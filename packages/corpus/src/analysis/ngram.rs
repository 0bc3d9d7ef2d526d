//! Contiguous n-grams within a single token sequence.

/// All contiguous windows of `n` tokens, each joined with a single space.
///
/// Empty when `n` is zero or longer than `tokens`.
pub fn ngrams(tokens: &[String], n: usize) -> impl Iterator<Item = String> + '_ {
    let windows = if n == 0 { &tokens[..0] } else { tokens };
    windows.windows(n.max(1)).map(|window| window.join(" "))
}
