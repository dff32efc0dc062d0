use crate::build::*;

struct Cartesian {
    g1: Virtual,
    g2: Virtual,
    n: usize,
    order: usize,
}

impl Adjacency for Cartesian {
    fn order(&self) -> usize {
        self.order
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        let n = self.n;
        let (v1, v2) = (v / n, v % n);
        let (w1, w2) = (w / n, w % n);
        v1 == w1 && self.g2.adj.edge(v2, w2) || v2 == w2 && self.g1.adj.edge(v1, w1)
    }

    fn degree(&self, v: usize) -> usize {
        let n = self.n;
        self.g1.adj.degree(v / n) + self.g2.adj.degree(v % n)
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let n = self.n;
        let (g1, g2) = (&self.g1.adj, &self.g2.adj);
        let (v1, v2) = (v / n, v % n);
        let a1 = a / n;
        // Rows above v1, same column.
        if a1 < v1 {
            let mut more = false;
            if g1.visit(v1, a1, &mut |w1, _| {
                if w1 >= v1 {
                    more = true;
                    return true;
                }
                let w = n * w1 + v2;
                w >= a && f(w, 0)
            }) && !more
            {
                return true;
            }
        }
        // Row v1.
        if a1 <= v1 {
            let a2 = if a1 == v1 { a % n } else { 0 };
            if g2.visit(v2, a2, &mut |w2, _| f(n * v1 + w2, 0)) {
                return true;
            }
        }
        // Rows below v1, same column.
        g1.visit(v1, a1.max(v1 + 1), &mut |w1, _| {
            let w = n * w1 + v2;
            w >= a && f(w, 0)
        })
    }
}

impl Virtual {
    /// Returns the cartesian product of this graph and `other`.
    ///
    /// Vertex `(v1, v2)` of the product, numbered `n·v1 + v2` with `n = other.order()`,
    /// is adjacent to `(v1, w2)` for each edge `(v2, w2)` of `other`,
    /// and to `(w1, v2)` for each edge `(v1, w1)` of this graph.
    /// The edges have zero cost.
    pub fn cartesian(&self, other: &Virtual) -> Result<Virtual> {
        let (m, n) = (self.order(), other.order());
        if m == 0 || n == 0 {
            return Ok(null());
        }
        let order = m.checked_mul(n).ok_or(BuildError::TooLarge { m, n })?;
        Ok(Virtual::new(Cartesian {
            g1: self.clone(),
            g2: other.clone(),
            n,
            order,
        }))
    }
}
