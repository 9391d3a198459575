//! Shared presentation components.
pub(crate) mod avatar;
pub(crate) mod navbar;
pub(crate) mod search_box;
