//! Phone number lookup in shared contact cards.

/// Line prefix of the mobile number property in a vCard.
pub const VCARD_CELL_MARKER: &str = "TEL;CELL:";

/// Find the raw mobile number in a vCard payload.
///
/// Lines are trimmed before matching. The first line starting with
/// [`VCARD_CELL_MARKER`] wins; the text after the marker is returned as-is.
pub fn extract_vcard_number(payload: &str) -> Option<&str> {
    payload
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(VCARD_CELL_MARKER))
}
