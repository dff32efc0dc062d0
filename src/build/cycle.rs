use crate::build::*;

struct Cycle {
    n: usize,
}

impl Adjacency for Cycle {
    fn order(&self) -> usize {
        self.n
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        let d = v.abs_diff(w);
        d == 1 || d == self.n - 1
    }

    fn degree(&self, _v: usize) -> usize {
        2
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let n = self.n;
        let ws = match v {
            0 => [1, n - 1],
            _ if v == n - 1 => [0, n - 2],
            _ => [v - 1, v + 1],
        };
        ws.into_iter().any(|w| w >= a && f(w, 0))
    }
}

/// Returns a cycle graph with `n` vertices.
pub fn cycle(n: usize) -> Virtual {
    match n {
        0 => null(),
        1 => singleton(),
        2 => single_edge(),
        _ => Virtual::new(Cycle { n }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::consistency::consistent;

    #[test]
    fn small_cycles() {
        assert_eq!(cycle(0).to_string(), "0 []");
        assert_eq!(cycle(1).to_string(), "1 []");
        assert_eq!(cycle(2).to_string(), "2 [{0 1}]");
        assert_eq!(cycle(3).to_string(), "3 [{0 1} {0 2} {1 2}]");
        assert_eq!(cycle(5).to_string(), "5 [{0 1} {0 4} {1 2} {2 3} {3 4}]");
        for n in 0..7 {
            consistent(&format!("cycle({})", n), &cycle(n));
        }
    }
}
