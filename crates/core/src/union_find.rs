//! Disjoint-set forest used to track maze connectivity during generation.
//!
//! Union is by tree height only; there is no path compression. Which
//! representative survives a union is observable through `find`, and the
//! maze generator depends on it being reproducible for a given seed.

#[derive(Debug, Clone)]
pub struct UnionFind {
    /// Parent link per element; a root links to itself.
    parent: Vec<usize>,
    /// Height counter per root.
    height: Vec<u32>,
    sets: usize,
}

impl UnionFind {
    /// `size` singleton sets.
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            height: vec![1; size],
            sets: size,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `p`.
    ///
    /// `p` must be `< len()`.
    pub fn find(&self, mut p: usize) -> usize {
        while self.parent[p] != p {
            p = self.parent[p];
        }
        p
    }

    /// Merge two sets given their representatives.
    ///
    /// The shorter tree goes under the taller one; on a tie `s1` goes under
    /// `s2`. The surviving root's height counter is incremented.
    pub fn union(&mut self, s1: usize, s2: usize) {
        if s1 == s2 {
            return;
        }
        self.sets -= 1;
        if self.height[s1] > self.height[s2] {
            self.parent[s2] = s1;
            self.height[s1] += 1;
        } else {
            self.parent[s1] = s2;
            self.height[s2] += 1;
        }
    }

    /// Merge the sets containing `p` and `q`.
    pub fn union_of(&mut self, p: usize, q: usize) {
        let (a, b) = (self.find(p), self.find(q));
        self.union(a, b);
    }

    pub fn connected(&self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_singletons() {
        let uf = UnionFind::new(5);
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.set_count(), 5);
        for i in 0..5 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn tie_goes_to_second_argument() {
        let mut uf = UnionFind::new(2);
        uf.union(0, 1);
        assert_eq!(uf.find(0), 1);
        assert_eq!(uf.find(1), 1);
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn taller_tree_keeps_its_root() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1); // root 1, height 2
        uf.union(uf.find(1), 2); // 1 is taller: 2 goes under 1
        assert_eq!(uf.find(2), 1);

        let mut uf = UnionFind::new(3);
        uf.union(0, 1);
        uf.union(2, uf.find(0)); // 2 is shorter: 2 goes under 1
        assert_eq!(uf.find(2), 1);
    }

    #[test]
    fn union_of_same_set_is_noop() {
        let mut uf = UnionFind::new(4);
        uf.union_of(0, 1);
        uf.union_of(1, 0);
        assert_eq!(uf.set_count(), 3);
        assert!(uf.connected(0, 1));
        assert!(!uf.connected(0, 2));
    }

    #[test]
    fn chain_merges_to_one_set() {
        let mut uf = UnionFind::new(10);
        for i in 0..9 {
            uf.union_of(i, i + 1);
        }
        assert_eq!(uf.set_count(), 1);
        let root = uf.find(0);
        assert!((0..10).all(|i| uf.find(i) == root));
    }

    #[test]
    fn no_path_compression() {
        // 0 -> 1, then {0,1} under 3 via a taller tree at 3.
        let mut uf = UnionFind::new(5);
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(4, 3);
        uf.union(1, 3);
        assert_eq!(uf.find(0), 3);
        // find takes &self, so the parent chain is untouched
        assert_eq!(uf.parent[0], 1);
    }
}
