//! A one-dimensional interval index, used by the validity engine's
//! alternative (sweepline-based) nested-ring test. Kept as a distinct
//! component alongside the quadtree per the spatial-index component's
//! charter, even though the engine itself picks the quadtree for its
//! default nested-ring check (see crate-level design notes).

#[derive(Clone, Copy, Debug)]
enum EventKind {
    Insert,
    Delete,
}

struct Event {
    x: f64,
    kind: EventKind,
    item_index: usize,
}

/// A batch of `[min, max]` x-intervals, each tagged with a caller-chosen
/// item. Built once; `compute_overlaps` reports every pair of intervals
/// that overlap.
pub struct SweepLineIndex<T> {
    intervals: Vec<(f64, f64)>,
    items: Vec<T>,
}

impl<T> SweepLineIndex<T> {
    pub fn new() -> Self {
        SweepLineIndex {
            intervals: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, min_x: f64, max_x: f64, item: T) {
        debug_assert!(min_x <= max_x);
        self.intervals.push((min_x, max_x));
        self.items.push(item);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Visits every pair of item indices whose x-intervals overlap.
    /// Insert events are ordered before delete events at the same `x`
    /// so that two intervals touching at a single point are still
    /// reported as overlapping.
    pub fn compute_overlaps(&self, mut visit: impl FnMut(usize, usize)) {
        let mut events = Vec::with_capacity(self.intervals.len() * 2);
        for (i, (min_x, max_x)) in self.intervals.iter().enumerate() {
            events.push(Event {
                x: *min_x,
                kind: EventKind::Insert,
                item_index: i,
            });
            events.push(Event {
                x: *max_x,
                kind: EventKind::Delete,
                item_index: i,
            });
        }
        events.sort_by(|a, b| {
            a.x.partial_cmp(&b.x)
                .unwrap()
                .then_with(|| event_order(a.kind).cmp(&event_order(b.kind)))
        });

        let mut active: Vec<usize> = Vec::new();
        for event in &events {
            match event.kind {
                EventKind::Insert => {
                    for &other in &active {
                        visit(other, event.item_index);
                    }
                    active.push(event.item_index);
                }
                EventKind::Delete => {
                    active.retain(|&i| i != event.item_index);
                }
            }
        }
    }
}

impl<T> Default for SweepLineIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn event_order(kind: EventKind) -> u8 {
    match kind {
        EventKind::Insert => 0,
        EventKind::Delete => 1,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn overlapping_intervals_are_reported() {
        let mut index = SweepLineIndex::new();
        index.add(0.0, 5.0, "a");
        index.add(3.0, 8.0, "b");
        index.add(10.0, 12.0, "c");

        let mut pairs = Vec::new();
        index.compute_overlaps(|i, j| pairs.push((i, j)));
        assert_eq!(pairs, vec![(0, 1)]);
    }

    #[test]
    fn touching_at_a_point_counts_as_overlap() {
        let mut index = SweepLineIndex::new();
        index.add(0.0, 5.0, "a");
        index.add(5.0, 8.0, "b");

        let mut pairs = Vec::new();
        index.compute_overlaps(|i, j| pairs.push((i, j)));
        assert_eq!(pairs, vec![(0, 1)]);
    }
}
