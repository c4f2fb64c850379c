//! UI state transition logic
//!
//! Pure functions for menu cursor movement and toast expiry.

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Move the menu cursor down, wrapping to the top
///
/// # Examples
/// ```
/// use folderview::logic::ui::next_index;
///
/// assert_eq!(next_index(0, 5), 1);
/// assert_eq!(next_index(4, 5), 0);
/// ```
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Move the menu cursor up, wrapping to the bottom
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        (current - 1).min(len - 1)
    }
}

/// Move a list selection by `delta`, clamped to the list bounds
pub fn move_selection(current: Option<usize>, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.unwrap_or(0) as isize;
    let next = (current + delta).clamp(0, len as isize - 1);
    Some(next as usize)
}

pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}
