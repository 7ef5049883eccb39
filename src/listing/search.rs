use crate::models::user::UserRecord;
use crate::models::view::SearchMode;
use crate::utils::text::{fold_alphanumeric, is_subsequence};

/// Return the records whose name or email matches `query`, in their
/// original relative order. A blank query matches everything.
pub fn apply_filter(records: &[UserRecord], query: &str, mode: SearchMode) -> Vec<UserRecord> {
    if query.trim().is_empty() {
        return records.to_vec();
    }

    match mode {
        SearchMode::Substring => {
            let needle = query.to_lowercase();
            records
                .iter()
                .filter(|user| matches_substring(user, &needle))
                .cloned()
                .collect()
        }
        SearchMode::Fuzzy => {
            let tokens = fuzzy_tokens(query);
            if tokens.is_empty() {
                return records.to_vec();
            }
            records
                .iter()
                .filter(|user| matches_fuzzy(user, &tokens))
                .cloned()
                .collect()
        }
    }
}

/// Whether a single record passes the filter for `query`
pub fn record_matches(user: &UserRecord, query: &str, mode: SearchMode) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    match mode {
        SearchMode::Substring => matches_substring(user, &query.to_lowercase()),
        SearchMode::Fuzzy => {
            let tokens = fuzzy_tokens(query);
            tokens.is_empty() || matches_fuzzy(user, &tokens)
        }
    }
}

/// `needle` must already be lower-cased
fn matches_substring(user: &UserRecord, needle: &str) -> bool {
    user.name.to_lowercase().contains(needle) || user.email.to_lowercase().contains(needle)
}

/// Whitespace-separated query tokens, folded. Tokens that fold to nothing
/// (pure punctuation) are dropped.
fn fuzzy_tokens(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(fold_alphanumeric)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Every token has to match at least one field
fn matches_fuzzy(user: &UserRecord, tokens: &[String]) -> bool {
    let fields = [fold_alphanumeric(&user.name), fold_alphanumeric(&user.email)];

    tokens.iter().all(|token| {
        fields
            .iter()
            .any(|field| field.contains(token.as_str()) || is_subsequence(token, field))
    })
}
