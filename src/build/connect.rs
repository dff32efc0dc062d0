use crate::build::*;

/// Vertex 0 of `g2` is glued onto `v1`; its other vertices `w` become `w + t`.
struct Connect {
    g1: Virtual,
    g2: Virtual,
    v1: usize,
    t: usize,
    n: usize,
}

impl Adjacency for Connect {
    fn order(&self) -> usize {
        self.n
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        let t = self.t;
        match (v <= t, w <= t) {
            (true, true) => self.g1.adj.edge(v, w),
            (false, false) => self.g2.adj.edge(v - t, w - t),
            (true, false) => v == self.v1 && self.g2.adj.edge(0, w - t),
            (false, true) => w == self.v1 && self.g2.adj.edge(v - t, 0),
        }
    }

    fn cost(&self, v: usize, w: usize) -> i64 {
        let t = self.t;
        match (v <= t, w <= t) {
            (true, true) => self.g1.adj.cost(v, w),
            (false, false) => self.g2.adj.cost(v - t, w - t),
            (true, false) if v == self.v1 => self.g2.adj.cost(0, w - t),
            (false, true) if w == self.v1 => self.g2.adj.cost(v - t, 0),
            _ => 0,
        }
    }

    fn degree(&self, v: usize) -> usize {
        if v == self.v1 {
            self.g1.adj.degree(v) + self.g2.adj.degree(0)
        } else if v <= self.t {
            self.g1.adj.degree(v)
        } else {
            self.g2.adj.degree(v - self.t)
        }
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let (t, v1) = (self.t, self.v1);
        if v > t {
            return self.g2.adj.visit(v - t, a.saturating_sub(t), &mut |w, c| {
                if w == 0 {
                    v1 >= a && f(v1, c)
                } else {
                    f(w + t, c)
                }
            });
        }
        if self.g1.adj.visit(v, a, f) {
            return true;
        }
        v == v1
            && self
                .g2
                .adj
                .visit(0, a.saturating_sub(t), &mut |w, c| f(w + t, c))
    }
}

impl Virtual {
    /// Returns a graph where vertex `v1` of this graph and vertex 0 of `other`
    /// are the same vertex. The other vertices `w` of `other` become `w + self.order() - 1`.
    pub fn connect(&self, v1: usize, other: &Virtual) -> Result<Virtual> {
        let (m, k) = (self.order(), other.order());
        if m == 0 || k == 0 {
            return Err(BuildError::EmptyOperand);
        }
        if v1 >= m {
            return Err(BuildError::VertexOutOfRange { v: v1, order: m });
        }
        let t = m - 1;
        let n = t.checked_add(k).ok_or(BuildError::TooLarge { m, n: k })?;
        if n == 1 {
            return Ok(singleton());
        }
        Ok(Virtual::new(Connect {
            g1: self.clone(),
            g2: other.clone(),
            v1,
            t,
            n,
        }))
    }
}
