//! Label-array partition, linear time per operation.

pub struct DisjointSet(Vec<usize>);

impl DisjointSet {
    pub fn new(n: usize) -> Self { Self((0..n).collect()) }
    pub fn unite(&mut self, u: usize, v: usize) -> bool {
        let (from, to) = (self.0[u], self.0[v]);
        if from == to {
            return false;
        }
        for label in &mut self.0 {
            if *label == from {
                *label = to;
            }
        }
        true
    }
    pub fn same(&self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }
    pub fn find(&self, u: usize) -> usize { self.0[u] }
    pub fn size(&self, u: usize) -> usize {
        self.0.iter().filter(|&&label| label == self.0[u]).count()
    }
}

#[test]
fn sanity_check() {
    let mut ds = DisjointSet::new(5);
    assert!(ds.unite(0, 1));
    assert!(ds.unite(4, 1));
    assert!(!ds.unite(0, 4));
    assert!(ds.same(0, 4));
    assert!(!ds.same(2, 3));
    assert_eq!(ds.size(1), 3);
    assert_eq!(ds.size(3), 1);
}
