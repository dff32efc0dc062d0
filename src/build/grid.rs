use crate::build::*;

/// `m` rows of `n` columns; point `(x, y)` is vertex `n·x + y`.
struct Grid {
    n: usize,
    order: usize,
}

impl Adjacency for Grid {
    fn order(&self) -> usize {
        self.order
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        let n = self.n;
        let (vx, vy) = (v / n, v % n);
        let (wx, wy) = (w / n, w % n);
        vx == wx && vy.abs_diff(wy) == 1 || vy == wy && vx.abs_diff(wx) == 1
    }

    fn degree(&self, v: usize) -> usize {
        let n = self.n;
        let y = v % n;
        usize::from(v >= n)
            + usize::from(y != 0)
            + usize::from(y != n - 1)
            + usize::from(v < self.order - n)
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let n = self.n;
        if a > v && a - v > n {
            return false;
        }
        // up
        if v >= n && v - n >= a && f(v - n, 0) {
            return true;
        }
        let y = v % n;
        // left
        if y != 0 && v - 1 >= a && f(v - 1, 0) {
            return true;
        }
        // right
        if y != n - 1 && v + 1 >= a && f(v + 1, 0) {
            return true;
        }
        // down
        v < self.order - n && f(v + n, 0)
    }
}

/// Returns a grid graph with `m` rows and `n` columns.
/// The point `(x, y)` of the grid is vertex `n·x + y`.
pub fn grid(m: usize, n: usize) -> Result<Virtual> {
    let g = match (m, n) {
        (0, _) | (_, 0) => null(),
        (1, 1) => singleton(),
        (1, 2) | (2, 1) => single_edge(),
        (1, _) => line(n),
        (_, 1) => line(m),
        _ => {
            let order = m.checked_mul(n).ok_or(BuildError::TooLarge { m, n })?;
            Virtual::new(Grid { n, order })
        }
    };
    Ok(g)
}
