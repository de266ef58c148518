//! Normalized string similarity.

/// Similarity ratio in `[0,1]` between two strings.
///
/// Longest-common-subsequence ratio `2·L / (|a|+|b|)` over lowercased
/// characters. Symmetric; 1.0 for identical strings, 0.0 when either side is
/// empty or nothing aligns.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let lcs = lcs_len(&a, &b);
    2.0 * lcs as f64 / (a.len() + b.len()) as f64
}

/// Longest common subsequence length, two-row dynamic programming.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
