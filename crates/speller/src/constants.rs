/// Consecutive like observations beyond this count trigger a commit.
///
/// A commit therefore takes `STABILITY_THRESHOLD + 1` matching frames,
/// about a quarter second at typical webcam rates. Raising it rejects more
/// single-frame misclassifications at the cost of slower spelling.
pub const STABILITY_THRESHOLD: u32 = 6;
