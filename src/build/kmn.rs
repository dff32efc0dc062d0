use crate::build::*;

struct Kmn {
    m: usize,
    n: usize,
}

impl Adjacency for Kmn {
    fn order(&self) -> usize {
        self.m + self.n
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        (v < self.m) != (w < self.m)
    }

    fn degree(&self, v: usize) -> usize {
        if v < self.m {
            self.n
        } else {
            self.m
        }
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let m = self.m;
        if v < m {
            (a.max(m)..m + self.n).any(|w| f(w, 0))
        } else {
            (a..m).any(|w| f(w, 0))
        }
    }
}

/// Returns a complete bipartite graph with parts `0..m` and `m..m+n`.
pub fn kmn(m: usize, n: usize) -> Result<Virtual> {
    let g = match (m, n) {
        (0, 0) => null(),
        (0, 1) | (1, 0) => singleton(),
        (1, 1) => single_edge(),
        _ => {
            m.checked_add(n).ok_or(BuildError::TooLarge { m, n })?;
            Virtual::new(Kmn { m, n })
        }
    };
    Ok(g)
}
