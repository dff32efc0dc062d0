use crate::build::*;

/// Vertex `(v1, v2)` of the product is `n·v1 + v2`, where `n` is the order of `g2`.
struct Tensor {
    g1: Virtual,
    g2: Virtual,
    n: usize,
    order: usize,
}

impl Adjacency for Tensor {
    fn order(&self) -> usize {
        self.order
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        let n = self.n;
        self.g1.adj.edge(v / n, w / n) && self.g2.adj.edge(v % n, w % n)
    }

    fn degree(&self, v: usize) -> usize {
        let n = self.n;
        self.g1.adj.degree(v / n) * self.g2.adj.degree(v % n)
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let n = self.n;
        let (v1, v2) = (v / n, v % n);
        let (a1, a2) = (a / n, a % n);
        let g2 = &self.g2.adj;
        self.g1.adj.visit(v1, a1, &mut |w1, _| {
            // Only the first row can start in the middle.
            let start = if w1 == a1 { a2 } else { 0 };
            g2.visit(v2, start, &mut |w2, _| f(n * w1 + w2, 0))
        })
    }
}

impl Virtual {
    /// Returns the tensor product of this graph and `other`.
    ///
    /// Vertex `(v1, v2)` of the product, numbered `n·v1 + v2` with `n = other.order()`,
    /// is adjacent to `(w1, w2)` if `(v1, w1)` is an edge of this graph
    /// and `(v2, w2)` is an edge of `other`. The edges have zero cost.
    pub fn tensor(&self, other: &Virtual) -> Result<Virtual> {
        let (m, n) = (self.order(), other.order());
        if m == 0 || n == 0 {
            return Ok(null());
        }
        let order = m.checked_mul(n).ok_or(BuildError::TooLarge { m, n })?;
        Ok(Virtual::new(Tensor {
            g1: self.clone(),
            g2: other.clone(),
            n,
            order,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::consistency::consistent;

    #[test]
    fn tensor_products() {
        let cases = [
            (empty(4), grid(1, 2).unwrap(), "8 []"),
            (kn(1), grid(1, 2).unwrap(), "2 []"),
            (grid(1, 2).unwrap(), grid(1, 2).unwrap(), "4 [{0 3} {1 2}]"),
            (
                grid(1, 3).unwrap(),
                grid(1, 2).unwrap(),
                "6 [{0 3} {1 2} {2 5} {3 4}]",
            ),
            (empty(0), kn(3), "0 []"),
        ];
        for (g1, g2, expected) in cases {
            let g = g1.tensor(&g2).unwrap();
            assert_eq!(g.to_string(), expected);
            consistent("tensor", &g);
        }
    }

    #[test]
    fn tensor_products_are_consistent() {
        for m in 0..4 {
            for n in 0..4 {
                let g = grid(m, m + n).unwrap();
                consistent("tensor", &kn(m).tensor(&kn(n)).unwrap());
                consistent("tensor", &kn(m).tensor(&g).unwrap());
                consistent("tensor", &g.tensor(&kn(m)).unwrap());
                consistent("tensor", &cycle(n).add_cost(3).tensor(&line(m)).unwrap());
            }
        }
    }

    #[test]
    fn too_large() {
        let g = hyper(40).unwrap();
        assert_eq!(
            g.tensor(&g).unwrap_err(),
            BuildError::TooLarge {
                m: 1 << 40,
                n: 1 << 40
            }
        );
    }
}
