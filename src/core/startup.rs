use crate::api::client::UserSourceClient;
use crate::core::config::SourceConfig;
use crate::core::error::FetchError;
use crate::models::user::UserRecord;
use crate::utils::synthetic::{generate_users, rng_from_seed};
use tracing::{info, warn};

/// Fetch the remote users and pad them with synthetic records.
///
/// Synthetic ids start right after the highest remote id. Nothing is
/// generated when the fetch fails.
pub async fn load_seed(
    client: &UserSourceClient,
    source: &SourceConfig,
) -> Result<Vec<UserRecord>, FetchError> {
    info!(endpoint = %client.endpoint(), "Fetching users");

    let mut users = match client.fetch_users().await {
        Ok(users) => users,
        Err(e) => {
            warn!(endpoint = %client.endpoint(), error = %e, "Failed to fetch users");
            return Err(e);
        }
    };

    let remote = users.len();
    let max_id = users.iter().map(|user| user.id).max().unwrap_or(0);

    match max_id.checked_add(1) {
        Some(start_id) => {
            let mut rng = rng_from_seed(source.rng_seed);
            users.extend(generate_users(&mut rng, source.synthetic_count, start_id));
        }
        None => {
            warn!(max_id, "No ids left for synthetic users, skipping generation");
        }
    }

    info!(
        remote_users = remote,
        synthetic_users = users.len() - remote,
        "Seed users loaded"
    );

    Ok(users)
}
