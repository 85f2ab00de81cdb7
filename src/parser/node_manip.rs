use std::collections::HashSet;

use crate::models::ProxyRecord;

/// Make every node name unique, keeping node order.
///
/// A name already in `seen` gets ` 1`, ` 2`, ... appended until the
/// candidate is unused. The updated set is handed back to the caller.
pub fn dedup_names(
    nodes: Vec<ProxyRecord>,
    mut seen: HashSet<String>,
) -> (Vec<ProxyRecord>, HashSet<String>) {
    let nodes = nodes
        .into_iter()
        .map(|mut node| {
            if seen.contains(&node.name) {
                let mut counter = 1usize;
                let mut candidate = format!("{} {}", node.name, counter);
                while seen.contains(&candidate) {
                    counter += 1;
                    candidate = format!("{} {}", node.name, counter);
                }
                node.name = candidate;
            }
            seen.insert(node.name.clone());
            node
        })
        .collect();
    (nodes, seen)
}
