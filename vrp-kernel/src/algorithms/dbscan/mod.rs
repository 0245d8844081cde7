//! This module contains an implementation of Density-Based Spatial Clustering of Applications with
//! Noise (DBSCAN)

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/dbscan/dbscan_test.rs"]
mod dbscan_test;

use crate::utils::Float;
use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;

/// Represents a cluster of items.
pub type Cluster<'a, T> = Vec<&'a T>;

/// Creates clusters of items using DBSCAN algorithm.
/// `neighborhood_fn` returns items within `eps` distance of given one, the item itself excluded.
/// Items which have less than `min_items` neighbours and are not reachable from a dense item are noise
/// and are not returned.
pub fn create_clusters<'a, T, IS, FN, IR>(items: IS, eps: Float, min_items: usize, neighborhood_fn: FN) -> Vec<Cluster<'a, T>>
where
    T: Hash + Eq + 'a,
    IS: IntoIterator<Item = &'a T>,
    FN: Fn(&'a T, Float) -> IR,
    IR: Iterator<Item = &'a T>,
{
    let mut item_types = FxHashMap::<&T, ItemType>::default();
    let mut clusters = Vec::new();

    for item in items {
        if item_types.contains_key(item) {
            continue;
        }

        let mut neighbors = neighborhood_fn(item, eps).collect::<Vec<_>>();
        if neighbors.len() < min_items {
            item_types.insert(item, ItemType::Noise);
            continue;
        }

        let mut neighbors_index = neighbors.iter().cloned().collect::<FxHashSet<_>>();
        let mut cluster = vec![item];
        item_types.insert(item, ItemType::Clustered);

        let mut index = 0;
        while index < neighbors.len() {
            let neighbor = neighbors[index];
            let item_type = item_types.get(neighbor).copied();

            if item_type.is_none() {
                let other_neighbors = neighborhood_fn(neighbor, eps).collect::<Vec<_>>();
                if other_neighbors.len() >= min_items {
                    other_neighbors.into_iter().for_each(|other| {
                        if neighbors_index.insert(other) {
                            neighbors.push(other);
                        }
                    });
                }
            }

            if item_type != Some(ItemType::Clustered) {
                item_types.insert(neighbor, ItemType::Clustered);
                cluster.push(neighbor);
            }

            index += 1;
        }

        clusters.push(cluster);
    }

    clusters
}

#[derive(Clone, Copy, Eq, PartialEq)]
enum ItemType {
    Noise,
    Clustered,
}
