pub mod add;
pub mod delete;
pub mod update;

use uuid::Uuid;

/// Variant ids are UUIDs scoped to one component's array; a malformed id can
/// never match, so it reads as "not found".
pub(crate) fn parse_variant_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
