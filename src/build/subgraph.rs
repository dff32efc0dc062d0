use crate::build::*;

/// Vertex `i` of the subgraph is `s.get(i)` in `g`.
struct Subgraph {
    g: Virtual,
    s: VertexSet,
    m: usize,
}

impl Adjacency for Subgraph {
    fn order(&self) -> usize {
        self.m
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        match (self.s.get(v), self.s.get(w)) {
            (Some(v0), Some(w0)) => self.g.adj.edge(v0, w0),
            _ => false,
        }
    }

    fn cost(&self, v: usize, w: usize) -> i64 {
        match (self.s.get(v), self.s.get(w)) {
            (Some(v0), Some(w0)) => self.g.adj.cost(v0, w0),
            _ => 0,
        }
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let (v0, a0) = match (self.s.get(v), self.s.get(a)) {
            (Some(v0), Some(a0)) => (v0, a0),
            _ => return false,
        };
        // Walk g one run of s at a time, renumbering as we go.
        for x in self.s.clipped(a0, usize::MAX) {
            let mut more = false;
            if self.g.adj.visit(v0, x.a, &mut |w0, c| {
                if w0 >= x.b {
                    more = true;
                    return true;
                }
                f(x.index + w0 - x.a, c)
            }) && !more
            {
                return true;
            }
        }
        false
    }
}

impl Virtual {
    /// Returns the subgraph induced by the vertices in `s` that belong to this graph.
    /// Vertex `v` of `s` gets a new number: the number of smaller vertices in `s`.
    pub fn subgraph(&self, s: &VertexSet) -> Virtual {
        let n = self.order();
        let s = s.and(&VertexSet::range(0, n));
        match s.len() {
            0 => null(),
            1 => singleton(),
            m if m == n => self.clone(),
            m => Virtual::new(Subgraph {
                g: self.clone(),
                s,
                m,
            }),
        }
    }
}
