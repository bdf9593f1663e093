/// Maps a numeric budget onto the dataset's budget tiers (0-5)
///
/// The checks run in order and the first match wins. The first two ranges
/// overlap: anything in (0, 1000) lands in tier 0, so tier 1 is reached only at
/// exactly 1000 or by a non-positive budget, which also satisfies `<= 1000`.
pub fn classify(budget: f64) -> u8 {
    if 0.0 < budget && budget < 1000.0 {
        return 0;
    }
    if budget <= 1000.0 {
        1
    } else if 1000.0 < budget && budget <= 2000.0 {
        2
    } else if 2000.0 < budget && budget <= 3000.0 {
        3
    } else if 3000.0 < budget && budget <= 4000.0 {
        4
    } else {
        5
    }
}
