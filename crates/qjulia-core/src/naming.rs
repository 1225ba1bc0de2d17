//! Slice file naming.
//!
//! Slice indices are right-aligned with spaces to one more than the digit
//! count of the largest index, matching the printf field width declared in
//! the manifest pattern (`slice%4d.png` for 101 slices).

/// Returns the number of decimal digits in `n` (1 for 0).
#[must_use]
pub fn digit_count(n: u32) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Returns the field width used for slice numbers of a volume with `z_res` slices.
#[must_use]
pub fn slice_number_width(z_res: u32) -> usize {
    digit_count(z_res.saturating_sub(1)) + 1
}

/// Returns the file name of slice `index`, e.g. `"slice   0.png"` for width 4.
#[must_use]
pub fn slice_file_name(index: u32, width: usize) -> String {
    format!("slice{index:>width$}.png")
}

/// Returns the printf-style pattern matching [`slice_file_name`].
#[must_use]
pub fn slice_pattern(width: usize) -> String {
    format!("slice%{width}d.png")
}
