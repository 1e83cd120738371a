//! Retention planning: which page indices survive, and in what order.

/// Case-insensitive substring match of the right-to-left marker against a
/// document's file name.
pub fn keyword_matches(name: &str, keyword: &str) -> bool {
    !keyword.is_empty() && name.to_lowercase().contains(&keyword.to_lowercase())
}

/// Ascending indices of the non-blank pages, reversed wholesale when the
/// right-to-left rule fires. This is the complete policy; there is no
/// per-section reversal.
pub fn retained_indices(blank: &[bool], reverse: bool) -> Vec<usize> {
    let mut keep: Vec<usize> = blank
        .iter()
        .enumerate()
        .filter(|&(_, &is_blank)| !is_blank)
        .map(|(index, _)| index)
        .collect();
    if reverse {
        keep.reverse();
    }
    keep
}
