//! Latest-version resolution for registry modules

use super::models::VersionStatus;

/// Pick the latest version from a module's recorded versions.
///
/// "Latest" is the maximal `version` string under plain ordinal
/// comparison, matching how the registry itself orders them; note that
/// this puts "1.9.0" above "1.10.0". Ties keep the first-seen entry.
/// An empty list yields `None`.
pub fn latest_version(versions: &[VersionStatus]) -> Option<&VersionStatus> {
    versions.iter().fold(None, |best, candidate| match best {
        None => Some(candidate),
        Some(current) if candidate.version > current.version => Some(candidate),
        Some(_) => best,
    })
}
