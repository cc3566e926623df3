/// Extraction and normalization pipeline
///
/// Turns the upstream API's schema-unstable JSON trees into normalized
/// stream items. The upstream format is unversioned and drifts, so nothing
/// here deserializes into fixed structs; every lookup treats a missing
/// field as "absent" and degrades to a sentinel instead of failing.

pub mod fields;
pub mod numeric;
pub mod renderer;
pub mod scan;

pub use renderer::{decode, DecodeError};
pub use scan::{collect_renderers, scan_videos, search_result_videos, RENDERER_KEY};
