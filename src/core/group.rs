use crate::core::Ping;
use std::collections::HashMap;

/// Pings of one object, ordered ascending by timestamp
pub type PathGroup = HashMap<String, Vec<Ping>>;

/// Partition pings by object identifier and sort each partition by timestamp
///
/// The sort is stable: pings with equal timestamps keep their input order.
/// Pings with an empty object identifier are excluded; the caller is
/// responsible for warning about them. Empty input yields an empty mapping.
pub fn group(pings: &[Ping]) -> PathGroup {
    let mut groups: PathGroup = HashMap::new();

    for ping in pings {
        if ping.object_id.is_empty() {
            continue;
        }
        groups
            .entry(ping.object_id.clone())
            .or_default()
            .push(ping.clone());
    }

    for sequence in groups.values_mut() {
        // Vec::sort_by is stable; total_cmp keeps NaN timestamps from
        // poisoning the order
        sequence.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
    }

    groups
}

/// Ordered ping sequence for a single object, empty when the id is unknown
pub fn group_for(pings: &[Ping], object_id: &str) -> Vec<Ping> {
    group(pings).remove(object_id).unwrap_or_default()
}
