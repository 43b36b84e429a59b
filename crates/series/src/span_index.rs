//! A deterministic interval index over event lifespans.
//!
//! Timeline scrubbing asks "which events cover this year" every frame, and
//! range selection asks "which events touch this window". A center-split
//! tree answers both without scanning every span.
//!
//! Ordering contract:
//! - `events_at` and `events_overlapping` return event indices in ascending
//!   order, deduplicated.

use foundation::total_cmp_f64;

/// One event's lifespan on the time axis. `event` is the caller's index
/// into its own event list; point events have `start == end`. Endpoints are
/// inclusive on both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventInterval {
    pub event: u32,
    pub start: f64,
    pub end: f64,
}

impl EventInterval {
    pub fn new(event: u32, start: f64, end: f64) -> Self {
        EventInterval { event, start, end }
    }

    fn contains(&self, t: f64) -> bool {
        t >= self.start && t <= self.end
    }

    fn overlaps(&self, start: f64, end: f64) -> bool {
        !(self.end < start || self.start > end)
    }
}

#[derive(Debug, Clone)]
struct Node {
    center: f64,
    items: Vec<EventInterval>,
    left: Option<usize>,
    right: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct EventSpanIndex {
    nodes: Vec<Node>,
}

impl EventSpanIndex {
    pub fn build(intervals: Vec<EventInterval>) -> Self {
        let mut nodes = Vec::new();
        if !intervals.is_empty() {
            let _ = build_node(&mut nodes, intervals);
        }
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All events whose span covers `t`.
    pub fn events_at(&self, t: f64) -> Vec<u32> {
        if self.nodes.is_empty() {
            return Vec::new();
        }
        let mut hits = Vec::new();
        stab(&self.nodes, 0, t, &mut hits);
        hits.sort_unstable();
        hits.dedup();
        hits
    }

    /// All events whose span touches `[start, end]`.
    pub fn events_overlapping(&self, start: f64, end: f64) -> Vec<u32> {
        if self.nodes.is_empty() {
            return Vec::new();
        }
        let mut hits = Vec::new();
        sweep(&self.nodes, 0, start, end, &mut hits);
        hits.sort_unstable();
        hits.dedup();
        hits
    }
}

fn build_node(nodes: &mut Vec<Node>, intervals: Vec<EventInterval>) -> usize {
    let center = choose_center(&intervals);

    let mut left_items: Vec<EventInterval> = Vec::new();
    let mut right_items: Vec<EventInterval> = Vec::new();
    let mut here: Vec<EventInterval> = Vec::new();

    for interval in intervals {
        if interval.end < center {
            left_items.push(interval);
        } else if interval.start > center {
            right_items.push(interval);
        } else {
            here.push(interval);
        }
    }

    // Stable ordering for deterministic traversal.
    here.sort_by(|a, b| {
        total_cmp_f64(a.start, b.start)
            .then_with(|| total_cmp_f64(a.end, b.end))
            .then_with(|| a.event.cmp(&b.event))
    });

    let idx = nodes.len();
    nodes.push(Node {
        center,
        items: here,
        left: None,
        right: None,
    });

    if !left_items.is_empty() {
        let child = build_node(nodes, left_items);
        nodes[idx].left = Some(child);
    }
    if !right_items.is_empty() {
        let child = build_node(nodes, right_items);
        nodes[idx].right = Some(child);
    }

    idx
}

fn choose_center(intervals: &[EventInterval]) -> f64 {
    let mut endpoints: Vec<f64> = Vec::with_capacity(intervals.len() * 2);
    for interval in intervals {
        endpoints.push(interval.start);
        endpoints.push(interval.end);
    }
    endpoints.sort_by(|a, b| total_cmp_f64(*a, *b));
    endpoints[endpoints.len() / 2]
}

fn stab(nodes: &[Node], idx: usize, t: f64, out: &mut Vec<u32>) {
    let node = &nodes[idx];

    for item in &node.items {
        if item.contains(t) {
            out.push(item.event);
        }
    }

    if t < node.center {
        if let Some(left) = node.left {
            stab(nodes, left, t, out);
        }
    } else if let Some(right) = node.right {
        stab(nodes, right, t, out);
    }
}

fn sweep(nodes: &[Node], idx: usize, start: f64, end: f64, out: &mut Vec<u32>) {
    let node = &nodes[idx];

    for item in &node.items {
        if item.overlaps(start, end) {
            out.push(item.event);
        }
    }

    if start < node.center
        && let Some(left) = node.left
    {
        sweep(nodes, left, start, end, out);
    }
    if end > node.center
        && let Some(right) = node.right
    {
        sweep(nodes, right, start, end, out);
    }
}
