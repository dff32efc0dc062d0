use crate::build::*;
use std::ops::Range;

struct Intersect {
    g1: Virtual,
    g2: Virtual,
    n: usize,
}

/// The first run of consecutive neighbors `w >= a` of `v`.
fn find(g: &dyn Adjacency, v: usize, a: usize) -> Range<usize> {
    let (mut start, mut end) = (None, 0);
    g.visit(v, a, &mut |w, _| match start {
        None => {
            start = Some(w);
            end = w + 1;
            false
        }
        Some(_) if w == end => {
            end += 1;
            false
        }
        Some(_) => true,
    });
    start.map_or(0..0, |start| start..end)
}

/// The first run of consecutive vertices `w >= a` that are neighbors of `v` in both graphs.
fn find_both(v: usize, a: usize, g1: &dyn Adjacency, g2: &dyn Adjacency) -> Range<usize> {
    let mut r1 = find(g1, v, a);
    let mut r2 = find(g2, v, a);
    while !r1.is_empty() && !r2.is_empty() {
        if r1.end <= r2.start {
            r1 = find(g1, v, r2.start);
        } else if r2.end <= r1.start {
            r2 = find(g2, v, r1.start);
        } else {
            return r1.start.max(r2.start)..r1.end.min(r2.end);
        }
    }
    0..0
}

impl Adjacency for Intersect {
    fn order(&self) -> usize {
        self.n
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        self.g1.adj.edge(v, w) && self.g2.adj.edge(v, w)
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let (g1, g2) = (&*self.g1.adj, &*self.g2.adj);
        let mut run = find_both(v, a, g1, g2);
        while !run.is_empty() {
            let end = run.end;
            if run.any(|w| f(w, 0)) {
                return true;
            }
            run = find_both(v, end, g1, g2);
        }
        false
    }
}

impl Virtual {
    /// Returns the graph intersection of this graph and `other`.
    /// Its order is the smaller of the two orders, and its edges,
    /// those present in both graphs, have zero cost.
    pub fn intersect(&self, other: &Virtual) -> Virtual {
        match self.order().min(other.order()) {
            0 => null(),
            1 => singleton(),
            n => Virtual::new(Intersect {
                g1: self.clone(),
                g2: other.clone(),
                n,
            }),
        }
    }
}
