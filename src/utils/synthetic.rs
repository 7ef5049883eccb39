//! Synthetic user records used to pad the remote seed list.

use crate::models::user::UserRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "David", "Emma", "Frank", "Grace", "Henry", "Ivy", "Jack",
    "Kate", "Liam", "Mia", "Noah", "Olivia", "Peter", "Quinn", "Rachel", "Sam", "Tara",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Clark", "Davis", "Evans", "Foster", "Garcia", "Harris", "Ingram",
    "Jones", "King", "Lee", "Miller", "Nelson", "Ortiz", "Parker", "Quinn", "Roberts", "Smith",
    "Taylor",
];

/// RNG for the generator: deterministic when a seed is given, OS-seeded otherwise
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generate `count` records with ids `start_id, start_id + 1, ...`.
///
/// Ids are only unique within the batch; the caller picks `start_id` past
/// the ids it already holds. Ids that would overflow `u32` are not produced.
pub fn generate_users<R: Rng + ?Sized>(rng: &mut R, count: usize, start_id: u32) -> Vec<UserRecord> {
    (0..count)
        .map_while(|offset| {
            let id = u32::try_from(offset).ok()?.checked_add(start_id)?;
            Some(random_user(rng, id))
        })
        .collect()
}

fn random_user<R: Rng + ?Sized>(rng: &mut R, id: u32) -> UserRecord {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let first_lower = first.to_lowercase();
    let last_lower = last.to_lowercase();

    UserRecord {
        id,
        name: format!("{first} {last}"),
        username: format!("{first_lower}{last_lower}"),
        email: format!("{first_lower}.{last_lower}@example.com"),
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}
