use crate::build::*;

struct Circulant {
    n: usize,
    // Sorted jumps in 1..n; j is present iff n - j is.
    t: Vec<usize>,
}

impl Adjacency for Circulant {
    fn order(&self) -> usize {
        self.n
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        self.t.binary_search(&v.abs_diff(w)).is_ok()
    }

    fn degree(&self, _v: usize) -> usize {
        self.t.len()
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let n = self.n;
        let t = &self.t;
        // Jumps that wrap around land below v.
        let start = t.partition_point(|&j| j < (n - v).saturating_add(a));
        if t[start..].iter().any(|&j| f(v + j - n, 0)) {
            return true;
        }
        let start = t.partition_point(|&j| j < a.saturating_sub(v));
        let stop = t.partition_point(|&j| j < n - v);
        t[start.min(stop)..stop].iter().any(|&j| f(v + j, 0))
    }
}

/// Returns the circulant graph with `n` vertices, in which vertex `i`
/// is adjacent to `(i + j) mod n` and `(i - j) mod n` for each `j` in `s`.
/// Negative and out-of-range jumps are taken modulo `n`.
pub fn circulant(n: usize, s: &[isize]) -> Virtual {
    match n {
        0 => return null(),
        1 => return singleton(),
        _ => {}
    }
    let mut t: Vec<usize> = s
        .iter()
        .flat_map(|&j| {
            let r = j.unsigned_abs() % n;
            let j = if j < 0 { (n - r) % n } else { r };
            [j, n - j]
        })
        .filter(|&j| j != 0 && j != n)
        .collect();
    t.sort_unstable();
    t.dedup();
    match t.len() {
        0 => empty(n),
        1 if t[0] == 1 => cycle(n),
        deg if deg == n - 1 => kn(n),
        _ => Virtual::new(Circulant { n, t }),
    }
}
