pub mod add;
pub mod delete;
pub mod get;
pub mod update;
pub mod variant;

/// Component ids arrive as opaque path strings; anything that does not parse
/// as a stored id resolves to "not found" rather than a malformed-request
/// error.
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok()
}
