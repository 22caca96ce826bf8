//! Profile store contract.

use crate::model::profile::{Profile, ProfileId};
use crate::store::StoreResult;

/// Store contract for account profiles.
pub trait ProfileStore {
    /// Looks up the profile for an auth-service account id.
    fn find_by_user(&self, user_id: &str) -> StoreResult<Option<Profile>>;

    /// Inserts or replaces the profile record, keyed by its id.
    fn upsert_profile(&self, profile: &Profile) -> StoreResult<ProfileId>;
}
