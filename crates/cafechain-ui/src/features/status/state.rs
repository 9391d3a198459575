//! Presentation of the owner's open/closed flag.

/// Badge text for the current flag.
#[must_use]
pub const fn status_label(is_open: bool) -> &'static str {
    if is_open { "Open" } else { "Closed" }
}

/// Badge CSS class for the current flag.
#[must_use]
pub const fn status_class(is_open: bool) -> &'static str {
    if is_open { "status-open" } else { "status-closed" }
}

/// Button text offering the opposite state.
#[must_use]
pub const fn toggle_label(is_open: bool) -> &'static str {
    if is_open {
        "Close for orders"
    } else {
        "Open for orders"
    }
}
