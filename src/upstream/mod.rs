/// Upstream API access
///
/// The kids surface exposes two undocumented JSON POST endpoints, search
/// and browse. Both take a client-identification context block and return
/// arbitrarily shaped JSON documents that the extraction pipeline scans.

pub mod client;

pub use client::{KidsApiClient, KIDS_HOME_BROWSE_ID, MAX_QUERY_LENGTH};
