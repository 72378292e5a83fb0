//! Benchmark support for convfx.
//!
//! Run with: `cargo bench -p convfx-bench`

/// Builds an `n` x `n` matrix string with a ramp of weights.
pub fn ramp_matrix(n: usize) -> String {
    (0..n)
        .map(|row| {
            (0..n)
                .map(|col| ((row * n + col) % 7) as f32 - 3.0)
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join(";")
}
