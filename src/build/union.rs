use crate::build::*;

struct Union {
    g1: Virtual,
    g2: Virtual,
    // Use the operands' costs, g1's where both have the edge.
    keep_cost: bool,
}

impl Union {
    fn in1(&self, v: usize, w: usize) -> bool {
        let n = self.g1.order();
        v < n && w < n && self.g1.adj.edge(v, w)
    }

    fn in2(&self, v: usize, w: usize) -> bool {
        let n = self.g2.order();
        v < n && w < n && self.g2.adj.edge(v, w)
    }
}

impl Adjacency for Union {
    fn order(&self) -> usize {
        self.g1.order().max(self.g2.order())
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        self.in1(v, w) || self.in2(v, w)
    }

    fn cost(&self, v: usize, w: usize) -> i64 {
        if !self.keep_cost {
            0
        } else if self.in1(v, w) {
            self.g1.adj.cost(v, w)
        } else {
            self.g2.adj.cost(v, w)
        }
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let (g1, g2) = (&self.g1.adj, &self.g2.adj);
        let in2 = v < g2.order();
        let keep_cost = self.keep_cost;
        let mut next = a;
        if v < g1.order()
            && g1.visit(v, a, &mut |w, c| {
                // First the neighbors from g2 that come before w...
                if in2 && next < w {
                    let mut more = false;
                    if g2.visit(v, next, &mut |w2, c2| {
                        if w2 >= w {
                            more = true;
                            return true;
                        }
                        f(w2, if keep_cost { c2 } else { 0 })
                    }) && !more
                    {
                        return true;
                    }
                }
                // ...then w itself.
                next = w + 1;
                f(w, if keep_cost { c } else { 0 })
            })
        {
            return true;
        }
        // Leftovers from g2.
        in2 && g2.visit(v, next, &mut |w, c| f(w, if keep_cost { c } else { 0 }))
    }
}

impl Virtual {
    /// Returns the graph union of this graph and `other`: the union of their
    /// vertex sets and of their edge sets. The edges of the union have zero cost.
    pub fn union(&self, other: &Virtual) -> Virtual {
        self.merge(other, false)
    }

    /// Like [union](Self::union), but edges keep their cost,
    /// taken from this graph when both graphs have the edge.
    pub(crate) fn union_keep_cost(&self, other: &Virtual) -> Virtual {
        self.merge(other, true)
    }

    fn merge(&self, other: &Virtual, keep_cost: bool) -> Virtual {
        let only = match (self.order(), other.order()) {
            (0, _) => other,
            (_, 0) => self,
            _ => {
                return Virtual::new(Union {
                    g1: self.clone(),
                    g2: other.clone(),
                    keep_cost,
                })
            }
        };
        if keep_cost {
            only.clone()
        } else {
            only.add_cost(0)
        }
    }
}
