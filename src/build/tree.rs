use crate::build::*;

/// A full `k`-ary tree stored level by level;
/// the parent of `v` is `(v-1)/k` and its children are `kv+1 ..= kv+k`.
struct Tree {
    k: usize,
    size: usize,
    // Vertices below this one are not leaves.
    last_row: usize,
}

impl Tree {
    fn children(&self, v: usize) -> std::ops::RangeInclusive<usize> {
        self.k * v + 1..=self.k * v + self.k
    }
}

impl Adjacency for Tree {
    fn order(&self) -> usize {
        self.size
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        let parent = v != 0 && w == (v - 1) / self.k;
        parent || v < self.last_row && self.children(v).contains(&w)
    }

    fn degree(&self, v: usize) -> usize {
        let mut deg = 0;
        if v != 0 {
            deg += 1;
        }
        if v < self.last_row {
            deg += self.k;
        }
        deg
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        if v != 0 {
            let w = (v - 1) / self.k;
            if w >= a && f(w, 0) {
                return true;
            }
        }
        if v < self.last_row {
            let children = self.children(v);
            let start = a.max(*children.start());
            return (start..=*children.end()).any(|w| f(w, 0));
        }
        false
    }
}

/// Returns a full `k`-ary tree with `n` levels and `(kⁿ-1)/(k-1)` vertices.
///
/// The root is vertex 0, the parent of `v` is `(v-1)/k`,
/// and its children are `kv+1, ..., kv+k`.
pub fn tree(k: usize, n: usize) -> Result<Virtual> {
    if k == 0 {
        return Err(BuildError::InvalidArgument("a tree needs k >= 1"));
    }
    let g = match (k, n) {
        (_, 0) => null(),
        (_, 1) => singleton(),
        (1, _) => line(n),
        _ => {
            let mut size: usize = 1;
            for _ in 0..n {
                size = size
                    .checked_mul(k)
                    .ok_or(BuildError::TooLarge { m: k, n })?;
            }
            let size = (size - 1) / (k - 1);
            Virtual::new(Tree {
                k,
                size,
                last_row: 1 + (size - 2) / k,
            })
        }
    };
    Ok(g)
}
