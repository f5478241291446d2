/// Union-find over the indices `0..len`.
///
/// `find` walks parent links without path compression. For digit-sized grids
/// (a few hundred elements) the chains stay short; larger inputs would want
/// compression or union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<Option<usize>>,
}

impl DisjointSet {
    pub fn new(len: usize) -> Self {
        Self {
            parent: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the group containing `a`.
    pub fn find(&self, mut a: usize) -> usize {
        while let Some(p) = self.parent[a] {
            a = p;
        }
        a
    }

    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges the groups of `a` and `b`. The root of `a` is linked under the
    /// root of `b`; already-joined pairs are left untouched.
    pub fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[ra] = Some(rb);
        }
    }

    pub fn is_root(&self, a: usize) -> bool {
        self.parent[a].is_none()
    }
}
