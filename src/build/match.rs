use crate::build::*;

/// Like a join, but the bridge pairs `s1` and `s2` rank for rank.
struct Matching {
    g1: Virtual,
    g2: Virtual,
    t: usize,
    n: usize,
    s1: VertexSet,
    s2: VertexSet,
    bridge: EdgeSet,
}

impl Matching {
    /// The vertex across the bridge from `v`, if it has one.
    fn partner(&self, v: usize) -> Option<usize> {
        let w = if v < self.t {
            self.s1.rank(v).and_then(|r| self.s2.get(r))
        } else {
            self.s2.rank(v).and_then(|r| self.s1.get(r))
        };
        w.filter(|&w| self.bridge.keeps(v, w))
    }
}

impl Adjacency for Matching {
    fn order(&self) -> usize {
        self.n
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        let t = self.t;
        match (v < t, w < t) {
            (true, true) => self.g1.adj.edge(v, w),
            (false, false) => self.g2.adj.edge(v - t, w - t),
            _ => self.partner(v) == Some(w),
        }
    }

    fn cost(&self, v: usize, w: usize) -> i64 {
        let t = self.t;
        match (v < t, w < t) {
            (true, true) => self.g1.adj.cost(v, w),
            (false, false) => self.g2.adj.cost(v - t, w - t),
            _ => self.bridge.cost_of(v, w),
        }
    }

    fn degree(&self, v: usize) -> usize {
        let own = if v < self.t {
            self.g1.adj.degree(v)
        } else {
            self.g2.adj.degree(v - self.t)
        };
        own + usize::from(self.partner(v).is_some())
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let t = self.t;
        let partner = self.partner(v).filter(|&w| w >= a);
        if v < t {
            if self.g1.adj.visit(v, a, f) {
                return true;
            }
            return partner.map_or(false, |w| f(w, self.bridge.cost_of(v, w)));
        }
        if let Some(w) = partner {
            if f(w, self.bridge.cost_of(v, w)) {
                return true;
            }
        }
        self.g2
            .adj
            .visit(v - t, a.saturating_sub(t), &mut |w, c| f(w + t, c))
    }
}

impl Virtual {
    /// Returns a graph with the vertices and edges of this graph followed by
    /// those of `other`, whose vertices are renumbered from `self.order()` on,
    /// plus a perfect matching between the two.
    ///
    /// The matching pairs the vertices of this graph in `bridge.from` with the
    /// renumbered vertices of `other` in `bridge.to`, in increasing order.
    /// Unpaired vertices, and pairs rejected by `bridge.keep`, get no edge.
    pub fn matching(&self, other: &Virtual, bridge: EdgeSet) -> Result<Virtual> {
        let (t, m) = (self.order(), other.order());
        let n = t.checked_add(m).ok_or(BuildError::TooLarge { m: t, n: m })?;
        let g = match (t, m) {
            (0, 0) => null(),
            (0, _) => other.clone(),
            (_, 0) => self.clone(),
            _ => Virtual::new(Matching {
                g1: self.clone(),
                g2: other.clone(),
                t,
                n,
                s1: bridge.from.and(&VertexSet::range(0, t)),
                s2: bridge.to.and(&VertexSet::range(t, n)),
                bridge,
            }),
        };
        Ok(g)
    }
}
