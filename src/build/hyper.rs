use crate::build::*;

struct Hyper {
    n: usize,
}

impl Adjacency for Hyper {
    fn order(&self) -> usize {
        1 << self.n
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        (v ^ w).is_power_of_two()
    }

    fn degree(&self, _v: usize) -> usize {
        self.n
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let top: usize = 1 << self.n;
        // Clearing a bit, the highest first.
        if v >= a {
            let mut b = top >> 1;
            while b > 0 {
                if v & b != 0 && v ^ b >= a && f(v ^ b, 0) {
                    return true;
                }
                b >>= 1;
            }
        }
        // Setting a bit, the lowest first.
        let mut b = 1;
        while b < top {
            if v & b == 0 && v ^ b >= a && f(v ^ b, 0) {
                return true;
            }
            b <<= 1;
        }
        false
    }
}

/// Returns the `n`-dimensional hypercube: `2ⁿ` vertices,
/// with an edge between two vertices that differ in exactly one bit.
pub fn hyper(n: usize) -> Result<Virtual> {
    let max = usize::BITS as usize - 2;
    let g = match n {
        0 => singleton(),
        1 => single_edge(),
        _ if n > max => return Err(BuildError::DimensionTooLarge { n, max }),
        _ => Virtual::new(Hyper { n }),
    };
    Ok(g)
}
