use crate::build::*;
use std::rc::Rc;
use tracing::trace;

/// `n` vertices, no edges.
struct NoEdges {
    n: usize,
}

impl Adjacency for NoEdges {
    fn order(&self) -> usize {
        self.n
    }

    fn edge(&self, _v: usize, _w: usize) -> bool {
        false
    }

    fn degree(&self, _v: usize) -> usize {
        0
    }

    fn visit(&self, _v: usize, _a: usize, _f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        false
    }
}

/// The graph with no vertices.
pub(crate) fn null() -> Virtual {
    Virtual::new(NoEdges { n: 0 })
}

/// The graph with one vertex.
pub(crate) fn singleton() -> Virtual {
    Virtual::new(NoEdges { n: 1 })
}

/// Two vertices and the edges `(0, 1)` and `(1, 0)`.
struct SingleEdge;

impl Adjacency for SingleEdge {
    fn order(&self) -> usize {
        2
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        v != w
    }

    fn degree(&self, _v: usize) -> usize {
        1
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let w = 1 - v;
        w >= a && f(w, 0)
    }
}

pub(crate) fn single_edge() -> Virtual {
    Virtual::new(SingleEdge)
}

struct Line {
    n: usize,
}

impl Adjacency for Line {
    fn order(&self) -> usize {
        self.n
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        v.abs_diff(w) == 1
    }

    fn degree(&self, v: usize) -> usize {
        if v == 0 || v == self.n - 1 {
            1
        } else {
            2
        }
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        if v > 0 && v - 1 >= a && f(v - 1, 0) {
            return true;
        }
        v + 1 >= a && v + 1 < self.n && f(v + 1, 0)
    }
}

/// Returns the path `{0, 1}, {1, 2}, ..., {n-2, n-1}` with `n` vertices.
pub fn line(n: usize) -> Virtual {
    match n {
        0 => null(),
        1 => singleton(),
        2 => single_edge(),
        _ => Virtual::new(Line { n }),
    }
}

struct Generic {
    n: usize,
    edge: FilterFunc,
}

impl Adjacency for Generic {
    fn order(&self) -> usize {
        self.n
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        v != w && (self.edge)(v, w)
    }
}

/// Returns a virtual graph with `n` vertices; its edge set consists of
/// all edges `(v, w)`, `v != w`, for which `edge(v, w)` returns true.
pub fn generic<F>(n: usize, edge: F) -> Virtual
where
    F: Fn(usize, usize) -> bool + 'static,
{
    match n {
        0 => return null(),
        1 => return singleton(),
        _ => {}
    }
    trace!(order = n, "generic graph; neighbors are found by testing every vertex");
    Virtual::new(Generic {
        n,
        edge: Rc::new(edge),
    })
}

/// Returns a virtual graph with `n` vertices and no edges.
pub fn empty(n: usize) -> Virtual {
    match n {
        0 => null(),
        1 => singleton(),
        _ => Virtual::new(NoEdges { n }),
    }
}

struct Complete {
    n: usize,
}

impl Adjacency for Complete {
    fn order(&self) -> usize {
        self.n
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        v != w
    }

    fn degree(&self, _v: usize) -> usize {
        self.n - 1
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        (a..self.n).any(|w| w != v && f(w, 0))
    }
}

/// Returns a complete simple graph with `n` vertices.
pub fn kn(n: usize) -> Virtual {
    match n {
        0 => null(),
        1 => singleton(),
        _ => Virtual::new(Complete { n }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::consistency::consistent;

    #[test]
    fn degenerate_sizes() {
        assert_eq!(null().to_string(), "0 []");
        assert_eq!(singleton().to_string(), "1 []");
        assert_eq!(single_edge().to_string(), "2 [{0 1}]");
        assert_eq!(empty(0).to_string(), "0 []");
        assert_eq!(kn(1).to_string(), "1 []");
        assert_eq!(generic(1, |_, _| true).to_string(), "1 []");
    }

    #[test]
    fn lines() {
        assert_eq!(line(2).to_string(), "2 [{0 1}]");
        assert_eq!(line(4).to_string(), "4 [{0 1} {1 2} {2 3}]");
        for n in 0..6 {
            consistent(&format!("line({})", n), &line(n));
        }
    }

    #[test]
    fn empty_graphs() {
        assert_eq!(empty(3).to_string(), "3 []");
        for n in 0..5 {
            consistent(&format!("empty({})", n), &empty(n));
        }
    }

    #[test]
    fn complete_graphs() {
        assert_eq!(kn(2).to_string(), "2 [{0 1}]");
        assert_eq!(kn(3).to_string(), "3 [{0 1} {0 2} {1 2}]");
        for n in 0..6 {
            let g = kn(n);
            consistent(&format!("kn({})", n), &g);
            for v in 0..n {
                assert_eq!(g.degree(v), n - 1);
            }
        }
    }

    #[test]
    fn generic_graphs() {
        let g = generic(4, |v, w| v < w);
        assert_eq!(g.to_string(), "4 [(0 1) (0 2) (0 3) (1 2) (1 3) (2 3)]");
        consistent("generic", &g);

        // Self-loops are ignored.
        let g = generic(3, |_, _| true);
        assert_eq!(g.to_string(), kn(3).to_string());
        consistent("generic", &g);
    }
}
