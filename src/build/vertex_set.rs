use std::ops::Range;

/// A run `[a, b)` of vertices, of which `a` is the `index`:th member of its set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Interval {
    pub(crate) a: usize,
    pub(crate) b: usize,
    pub(crate) index: usize,
}

const UNIVERSE: &[Interval] = &[Interval {
    a: 0,
    b: usize::MAX,
    index: 0,
}];

/// A set of vertices, kept as a sorted list of disjoint, non-adjacent runs.
///
/// The default value is the universe of all vertices `0..usize::MAX`.
/// Two sets are equal exactly when they have the same members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexSet {
    // None is the universe.
    set: Option<Vec<Interval>>,
}

impl Default for VertexSet {
    fn default() -> Self {
        Self::all()
    }
}

impl VertexSet {
    /// The set of all vertices.
    pub fn all() -> Self {
        Self { set: None }
    }

    pub fn empty() -> Self {
        Self { set: Some(Vec::new()) }
    }

    /// The set of vertices `v` with `a <= v < b`; empty if `a >= b`.
    pub fn range(a: usize, b: usize) -> Self {
        if a >= b {
            return Self::empty();
        }
        Self::from_runs([(a, b)])
    }

    /// The set containing only `v`.
    pub fn vertex(v: usize) -> Self {
        Self::range(v, v.saturating_add(1))
    }

    fn from_runs<I>(runs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut index = 0;
        let set: Vec<_> = runs
            .into_iter()
            .map(|(a, b)| {
                let x = Interval { a, b, index };
                index += b - a;
                x
            })
            .collect();
        if set.as_slice() == UNIVERSE {
            return Self::all();
        }
        Self { set: Some(set) }
    }

    fn intervals(&self) -> &[Interval] {
        self.set.as_deref().unwrap_or(UNIVERSE)
    }

    pub fn is_all(&self) -> bool {
        self.set.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.set.as_ref().map_or(false, |s| s.is_empty())
    }

    /// Number of members, or `None` for the universe.
    pub fn size(&self) -> Option<usize> {
        let set = self.set.as_ref()?;
        Some(set.last().map_or(0, |x| x.index + x.b - x.a))
    }

    /// Number of members, saturating at `usize::MAX`.
    pub(crate) fn len(&self) -> usize {
        self.size().unwrap_or(usize::MAX)
    }

    /// The `i`:th member in increasing order, if any.
    pub fn get(&self, i: usize) -> Option<usize> {
        let set = match &self.set {
            None => return Some(i),
            Some(set) => set,
        };
        if i >= self.len() {
            return None;
        }
        let j = set.partition_point(|x| x.index <= i);
        let x = &set[j - 1];
        Some(x.a + i - x.index)
    }

    /// The number of members smaller than `v`, if `v` is a member.
    pub fn rank(&self, v: usize) -> Option<usize> {
        let set = match &self.set {
            None => return Some(v),
            Some(set) => set,
        };
        let j = set.partition_point(|x| x.a <= v);
        if j == 0 {
            return None;
        }
        let x = &set[j - 1];
        (v < x.b).then(|| x.index + v - x.a)
    }

    pub fn contains(&self, v: usize) -> bool {
        self.rank(v).is_some()
    }

    /// The members in increasing order, as runs of consecutive vertices.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.intervals().iter().map(|x| x.a..x.b)
    }

    /// The runs of this set that fall within `[a, b)`, cut to fit.
    /// Each run keeps the rank of its first member.
    pub(crate) fn clipped(&self, a: usize, b: usize) -> impl Iterator<Item = Interval> + '_ {
        let set = self.intervals();
        let start = set.partition_point(|x| x.b <= a);
        set[start..]
            .iter()
            .take_while(move |x| x.a < b)
            .map(move |x| {
                let lo = x.a.max(a);
                Interval {
                    a: lo,
                    b: x.b.min(b),
                    index: x.index + lo - x.a,
                }
            })
            .filter(|x| x.a < x.b)
    }

    /// Intersection.
    pub fn and(&self, other: &VertexSet) -> VertexSet {
        sweep(self.intervals(), other.intervals(), |x, y| x && y)
    }

    /// Union.
    pub fn or(&self, other: &VertexSet) -> VertexSet {
        sweep(self.intervals(), other.intervals(), |x, y| x || y)
    }

    /// Difference: the members of this set that are not in `other`.
    pub fn and_not(&self, other: &VertexSet) -> VertexSet {
        sweep(self.intervals(), other.intervals(), |x, y| x && !y)
    }

    pub fn complement(&self) -> VertexSet {
        VertexSet::all().and_not(self)
    }
}

/// Walks the boundaries of two sets in order,
/// keeping the points where `op` holds for their memberships.
fn sweep<F>(s1: &[Interval], s2: &[Interval], op: F) -> VertexSet
where
    F: Fn(bool, bool) -> bool,
{
    let mut p1 = s1.iter().flat_map(|x| [x.a, x.b]).peekable();
    let mut p2 = s2.iter().flat_map(|x| [x.a, x.b]).peekable();
    let (mut in1, mut in2) = (false, false);
    let mut start = None;
    let mut runs = Vec::new();
    loop {
        let x = match (p1.peek(), p2.peek()) {
            (None, None) => break,
            (Some(&x), None) | (None, Some(&x)) => x,
            (Some(&x), Some(&y)) => x.min(y),
        };
        while p1.next_if_eq(&x).is_some() {
            in1 = !in1;
        }
        while p2.next_if_eq(&x).is_some() {
            in2 = !in2;
        }
        match (start, op(in1, in2)) {
            (None, true) => start = Some(x),
            (Some(a), false) => {
                runs.push((a, x));
                start = None;
            }
            _ => {}
        }
    }
    VertexSet::from_runs(runs)
}
