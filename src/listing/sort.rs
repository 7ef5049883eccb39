use crate::models::user::UserRecord;
use crate::models::view::SortKey;
use crate::utils::text::locale_cmp;

/// Return a copy of `records` ordered by `key`.
///
/// The sort is stable, so records with equal keys keep their relative
/// order. `SortKey::None` returns the records unchanged.
pub fn apply_sort(records: &[UserRecord], key: SortKey) -> Vec<UserRecord> {
    let mut sorted = records.to_vec();

    match key {
        SortKey::None => {}
        SortKey::Id => sorted.sort_by_key(|user| user.id),
        SortKey::Newest => sorted.sort_by(|a, b| b.id.cmp(&a.id)),
        SortKey::Name => sorted.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
        SortKey::Email => sorted.sort_by(|a, b| locale_cmp(&a.email, &b.email)),
    }

    sorted
}
