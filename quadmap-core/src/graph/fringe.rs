//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::cmp::Ordering;

/// Search frontier entry keyed by cumulative path distance.
///
/// Ordered by `distance` only (`f64::total_cmp`), entries with equal distance
/// are equal regardless of `id`. `BinaryHeap` is a max-heap, wrap entries in
/// `std::cmp::Reverse` to pop the closest one first.
#[derive(Clone, Copy, Debug)]
pub struct FringeEntry {
    pub id: i64,
    pub distance: f64,
}

impl FringeEntry {
    pub fn new(id: i64, distance: f64) -> FringeEntry {
        FringeEntry { id, distance }
    }
}

/// Ascending distance ordering for generic priority queues
pub fn by_distance(a: &FringeEntry, b: &FringeEntry) -> Ordering {
    a.distance.total_cmp(&b.distance)
}

impl PartialEq for FringeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FringeEntry {}

impl PartialOrd for FringeEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FringeEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        by_distance(self, other)
    }
}

#[test]
fn ordering() {
    let near = FringeEntry::new(1, 3.0);
    let far = FringeEntry::new(2, 5.0);
    assert!(near < far);
    assert_eq!(near.cmp(&far), Ordering::Less);
    assert_eq!(far.cmp(&near), Ordering::Greater);
    assert_eq!(by_distance(&near, &far), Ordering::Less);

    // equal distance, different vertices
    let a = FringeEntry::new(3, 4.0);
    let b = FringeEntry::new(4, 4.0);
    assert_eq!(a.cmp(&b), Ordering::Equal);
    assert_eq!(a, b);
    assert!(!(a < b) && !(b < a));

    // irreflexive
    assert!(!(near < near));
}

#[test]
fn min_heap() {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    let mut heap = BinaryHeap::new();
    for (id, distance) in &[(1, 7.5), (2, 0.0), (3, 2.25), (4, 2.25), (5, 100.0)] {
        heap.push(Reverse(FringeEntry::new(*id, *distance)));
    }
    let distances: Vec<f64> = std::iter::from_fn(|| heap.pop())
        .map(|Reverse(entry)| entry.distance)
        .collect();
    assert_eq!(distances, vec![0.0, 2.25, 2.25, 7.5, 100.0]);
}

#[test]
fn sort_by_distance() {
    let mut entries = vec![
        FringeEntry::new(1, 9.0),
        FringeEntry::new(2, -1.0),
        FringeEntry::new(3, 4.5),
    ];
    entries.sort_by(by_distance);
    let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}
