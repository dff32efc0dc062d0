use crate::build::*;
use std::rc::Rc;

struct Complement {
    g: Virtual,
}

impl Adjacency for Complement {
    fn order(&self) -> usize {
        self.g.order()
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        v != w && !self.g.adj.edge(v, w)
    }

    fn degree(&self, v: usize) -> usize {
        self.order() - 1 - self.g.adj.degree(v)
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        // Emit the gaps between consecutive neighbors in g.
        let mut prev = a;
        if self.g.adj.visit(v, a, &mut |w0, _| {
            if (prev..w0).any(|w| w != v && f(w, 0)) {
                return true;
            }
            prev = w0 + 1;
            false
        }) {
            return true;
        }
        (prev..self.order()).any(|w| w != v && f(w, 0))
    }
}

struct Keep {
    g: Virtual,
    keep: FilterFunc,
}

impl Adjacency for Keep {
    fn order(&self) -> usize {
        self.g.order()
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        (self.keep)(v, w) && self.g.adj.edge(v, w)
    }

    fn cost(&self, v: usize, w: usize) -> i64 {
        self.g.adj.cost(v, w)
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        self.g
            .adj
            .visit(v, a, &mut |w, c| (self.keep)(v, w) && f(w, c))
    }
}

struct Recost {
    g: Virtual,
    cost: CostFunc,
}

impl Adjacency for Recost {
    fn order(&self) -> usize {
        self.g.order()
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        self.g.adj.edge(v, w)
    }

    fn cost(&self, v: usize, w: usize) -> i64 {
        (self.cost)(v, w)
    }

    fn degree(&self, v: usize) -> usize {
        self.g.adj.degree(v)
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        self.g.adj.visit(v, a, &mut |w, _| f(w, (self.cost)(v, w)))
    }
}

impl Virtual {
    /// Returns the complement graph: the same vertices,
    /// and an edge `(v, w)`, `v != w`, wherever this graph has none.
    /// The edges of the complement have zero cost.
    pub fn complement(&self) -> Virtual {
        match self.order() {
            0 => null(),
            1 => singleton(),
            _ => Virtual::new(Complement { g: self.clone() }),
        }
    }

    /// Returns a graph with the edges `(v, w)` of this graph for which `keep(v, w)` holds.
    pub fn keep<F>(&self, keep: F) -> Virtual
    where
        F: Fn(usize, usize) -> bool + 'static,
    {
        match self.order() {
            0 => null(),
            1 => singleton(),
            _ => Virtual::new(Keep {
                g: self.clone(),
                keep: Rc::new(keep),
            }),
        }
    }

    /// Returns a copy of this graph where every edge costs `c`.
    pub fn add_cost(&self, c: i64) -> Virtual {
        self.add_cost_func(cost(c))
    }

    /// Returns a copy of this graph where edge `(v, w)` costs `cost(v, w)`.
    pub fn add_cost_func<F>(&self, cost: F) -> Virtual
    where
        F: Fn(usize, usize) -> i64 + 'static,
    {
        Virtual::new(Recost {
            g: self.clone(),
            cost: Rc::new(cost),
        })
    }
}
