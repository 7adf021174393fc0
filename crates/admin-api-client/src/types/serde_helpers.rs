/*
[INPUT]:  Field-level serde needs not covered by derive
[OUTPUT]: Deserializer helpers shared by type definitions
[POS]:    Data layer - serde plumbing
[UPDATE]: When a new field encoding is needed
*/

use serde::{Deserialize, Deserializer};

/// Keep "present but null" apart from "absent".
///
/// Pair with `#[serde(default)]`: a missing field stays `None`, an explicit
/// `null` becomes `Some(None)`.
pub fn deserialize_double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
