//! Pure request validation shared by all handlers.
//!
//! Runs before any data access. Partial-update operations never come through
//! here with their optional fields: an absent or empty field is a sparse
//! patch, not a validation failure.

use crate::error::ServiceError;

/// Default page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Check `(name, present)` pairs and fail with every missing name at once.
pub fn require_fields(fields: &[(&str, bool)]) -> Result<(), ServiceError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::MissingRequiredField(missing.join(", ")))
    }
}

/// LIMIT/OFFSET for a 1-based page. Page 0 behaves as page 1; page_size 0
/// takes the default. No upper bound is enforced on page_size.
pub fn page_window(page: u32, page_size: u32) -> (i64, i64) {
    let size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    let page = page.max(1);
    let offset = i64::from(page - 1) * i64::from(size);

    (i64::from(size), offset)
}

/// Sparse-patch helper: an empty wire string means "leave unchanged".
pub fn patch_field(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
