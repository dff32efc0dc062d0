use crate::build::*;

/// `g2` follows `g1`, its vertices shifted up by `t`.
struct Join {
    g1: Virtual,
    g2: Virtual,
    t: usize,
    n: usize,
    // Bridge ends: s1 within g1, s2 within the shifted g2.
    s1: VertexSet,
    s2: VertexSet,
    bridge: EdgeSet,
}

impl Join {
    fn bridge_visit(
        &self,
        v: usize,
        targets: &VertexSet,
        a: usize,
        f: &mut dyn FnMut(usize, i64) -> bool,
    ) -> bool {
        for x in targets.clipped(a, self.n) {
            for w in x.a..x.b {
                if self.bridge.keeps(v, w) && f(w, self.bridge.cost_of(v, w)) {
                    return true;
                }
            }
        }
        false
    }
}

impl Adjacency for Join {
    fn order(&self) -> usize {
        self.n
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        let t = self.t;
        match (v < t, w < t) {
            (true, true) => self.g1.adj.edge(v, w),
            (false, false) => self.g2.adj.edge(v - t, w - t),
            _ if !self.bridge.keeps(v, w) => false,
            _ => {
                self.s1.contains(v) && self.s2.contains(w)
                    || self.s1.contains(w) && self.s2.contains(v)
            }
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
        if self.bridge.keep.is_some() {
            return count_neighbors(self, v);
        }
        let t = self.t;
        if v < t {
            let bridged = if self.s1.contains(v) { self.s2.len() } else { 0 };
            self.g1.adj.degree(v) + bridged
        } else {
            let bridged = if self.s2.contains(v) { self.s1.len() } else { 0 };
            self.g2.adj.degree(v - t) + bridged
        }
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let t = self.t;
        if v < t {
            if self.g1.adj.visit(v, a, f) {
                return true;
            }
            return self.s1.contains(v) && self.bridge_visit(v, &self.s2, a, f);
        }
        if self.s2.contains(v) && self.bridge_visit(v, &self.s1, a, f) {
            return true;
        }
        self.g2
            .adj
            .visit(v - t, a.saturating_sub(t), &mut |w, c| f(w + t, c))
    }
}

impl Virtual {
    /// Returns a graph with the vertices and edges of this graph followed by
    /// those of `other`, whose vertices are renumbered from `self.order()` on.
    ///
    /// The `bridge` edges connect the two graphs: those of its edges that go from
    /// a vertex of this graph in `bridge.from` to a renumbered vertex of `other`
    /// in `bridge.to` are added, in both directions.
    pub fn join(&self, other: &Virtual, bridge: EdgeSet) -> Result<Virtual> {
        let (t, m) = (self.order(), other.order());
        let n = t.checked_add(m).ok_or(BuildError::TooLarge { m: t, n: m })?;
        let g = match (t, m) {
            (0, 0) => null(),
            (0, _) => other.clone(),
            (_, 0) => self.clone(),
            _ => Virtual::new(Join {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::consistency::consistent;

    fn weight(v: usize, w: usize) -> i64 {
        (10 * v + w) as i64
    }

    fn directed() -> EdgeSet {
        EdgeSet::all().with_keep(|v, w| v < w)
    }

    #[test]
    fn empty_operands() {
        let b = EdgeSet::between(VertexSet::range(0, 4), VertexSet::range(0, 4))
            .with_keep(|_, _| true)
            .with_cost(cost(8));
        let g = grid(2, 2).unwrap();
        let expected = "4 [{0 1} {0 2} {1 3} {2 3}]";
        assert_eq!(g.join(&empty(0), b.clone()).unwrap().to_string(), expected);
        assert_eq!(empty(0).join(&g, b).unwrap().to_string(), expected);
        assert_eq!(
            empty(0).join(&empty(0), EdgeSet::all()).unwrap().to_string(),
            "0 []"
        );
    }

    #[test]
    fn joins() {
        let b = EdgeSet::between(VertexSet::vertex(1), VertexSet::vertex(3))
            .with_keep(|v, w| v < w)
            .with_cost(cost(8));
        let g = grid(1, 2).unwrap().add_cost_func(weight);
        let res = g.join(&g, b).unwrap();
        assert_eq!(
            res.to_string(),
            "4 [(0 1):1 (1 0):10 (1 3):8 (2 3):1 (3 2):10]"
        );
        consistent("join", &res);

        let res = empty(2).join(&empty(3), EdgeSet::all()).unwrap();
        assert_eq!(res.to_string(), kmn(2, 3).unwrap().to_string());
        consistent("join", &res);

        let res = empty(2).join(&empty(3), directed()).unwrap();
        assert_eq!(
            res.to_string(),
            kmn(2, 3).unwrap().keep(|v, w| v < w).to_string()
        );
        consistent("join", &res);

        let res = kn(2)
            .add_cost(1)
            .join(&kn(2).add_cost(2), directed().with_cost(cost(3)))
            .unwrap();
        assert_eq!(
            res.to_string(),
            "4 [{0 1}:1 (0 2):3 (0 3):3 (1 2):3 (1 3):3 {2 3}:2]"
        );
        consistent("join", &res);

        let res = kn(1)
            .add_cost(1)
            .join(&kn(1).add_cost(2), EdgeSet::all().with_cost(cost(3)))
            .unwrap();
        assert_eq!(res.to_string(), "2 [{0 1}:3]");
        consistent("join", &res);

        let res = kn(1)
            .add_cost(8)
            .join(
                &grid(1, 2).unwrap().add_cost_func(weight),
                directed().with_cost(cost(9)),
            )
            .unwrap();
        assert_eq!(res.to_string(), "3 [(0 1):9 (0 2):9 (1 2):1 (2 1):10]");
        consistent("join", &res);

        let b = EdgeSet::between(VertexSet::range(0, 1), VertexSet::range(3, 4));
        let res = empty(2).join(&empty(3), b).unwrap();
        assert_eq!(res.to_string(), "5 [{0 3}]");
        consistent("join", &res);

        let b = EdgeSet::between(VertexSet::range(0, 1), VertexSet::range(2, 3));
        let res = kn(2).add_cost(1).join(&kn(2).add_cost(2), b).unwrap();
        assert_eq!(res.to_string(), "4 [{0 1}:1 {0 2} {2 3}:2]");
        consistent("join", &res);
    }

    #[test]
    fn joins_are_consistent() {
        for m in 0..4 {
            for n in 0..4 {
                let b = EdgeSet::between(
                    VertexSet::range(m, n),
                    VertexSet::range(m.saturating_sub(n), m + n),
                );
                let g1 = kn(m).add_cost_func(weight);
                let g2 = grid(m, m + n).unwrap().add_cost_func(weight);
                consistent("join", &g1.join(&g2, b.clone()).unwrap());
                consistent("join", &g2.join(&g1, b.clone()).unwrap());
                consistent(
                    "join",
                    &g2.join(&g1, b.with_keep(|v, w| (v + w) % 2 == 1)).unwrap(),
                );
            }
        }
    }
}
