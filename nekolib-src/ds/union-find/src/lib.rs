//! Disjoint-set union with path compression and union by size.
//!
//! # Examples
//! ```
//! use union_find::UnionFind;
//!
//! let mut uf = UnionFind::new(5);
//! assert!(uf.unite(0, 1));
//! assert!(uf.unite(3, 4));
//! assert!(!uf.unite(1, 0));
//!
//! assert!(uf.same(0, 1));
//! assert!(!uf.same(1, 3));
//! assert_eq!(uf.size(4), 2);
//! assert_eq!(uf.partition_len(), 3);
//! ```

use std::fmt;

/// Returned by the `try_*` operations when an index is not an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("index out of range: the len is {len} but the index is {index}")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

#[derive(Clone, Default)]
pub struct UnionFind {
    parent: Vec<usize>,
    // only meaningful at representatives
    size: Vec<usize>,
    count: usize,
}

#[track_caller]
fn or_panic<T>(res: Result<T, OutOfRange>) -> T {
    match res {
        Ok(x) => x,
        Err(e) => panic!("{e}"),
    }
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self { parent: (0..n).collect(), size: vec![1; n], count: n }
    }

    pub fn len(&self) -> usize { self.parent.len() }
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Number of disjoint sets.
    pub fn partition_len(&self) -> usize { self.count }

    fn check(&self, u: usize) -> Result<(), OutOfRange> {
        if u < self.len() {
            Ok(())
        } else {
            Err(OutOfRange { index: u, len: self.len() })
        }
    }

    fn root(&self, mut u: usize) -> usize {
        while self.parent[u] != u {
            u = self.parent[u];
        }
        u
    }

    /// Returns the representative of `u`, pointing every node on the way
    /// directly at it.
    ///
    /// # Panics
    /// Panics if `u >= self.len()`.
    #[track_caller]
    pub fn find(&mut self, u: usize) -> usize { or_panic(self.try_find(u)) }

    /// Merges the sets containing `u` and `v`. Returns `false` if they were
    /// already the same set.
    ///
    /// The root of the larger set survives; on a tie, the root of `u`'s set.
    #[track_caller]
    pub fn unite(&mut self, u: usize, v: usize) -> bool {
        or_panic(self.try_unite(u, v))
    }

    #[track_caller]
    pub fn same(&mut self, u: usize, v: usize) -> bool {
        or_panic(self.try_same(u, v))
    }

    /// Number of elements in the set containing `u`.
    #[track_caller]
    pub fn size(&mut self, u: usize) -> usize { or_panic(self.try_size(u)) }

    pub fn try_find(&mut self, u: usize) -> Result<usize, OutOfRange> {
        self.check(u)?;
        let root = self.root(u);
        let mut cur = u;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        Ok(root)
    }

    pub fn try_unite(
        &mut self,
        u: usize,
        v: usize,
    ) -> Result<bool, OutOfRange> {
        self.check(u)?;
        self.check(v)?;
        let mut u = self.try_find(u)?;
        let mut v = self.try_find(v)?;
        if u == v {
            return Ok(false);
        }
        if self.size[u] < self.size[v] {
            std::mem::swap(&mut u, &mut v);
        }
        self.parent[v] = u;
        self.size[u] += self.size[v];
        self.count -= 1;
        Ok(true)
    }

    pub fn try_same(
        &mut self,
        u: usize,
        v: usize,
    ) -> Result<bool, OutOfRange> {
        self.check(u)?;
        self.check(v)?;
        Ok(self.try_find(u)? == self.try_find(v)?)
    }

    pub fn try_size(&mut self, u: usize) -> Result<usize, OutOfRange> {
        let root = self.try_find(u)?;
        Ok(self.size[root])
    }

    /// Like [`find`](Self::find), without compressing.
    #[track_caller]
    pub fn leader(&self, u: usize) -> usize {
        or_panic(self.check(u));
        self.root(u)
    }

    /// `partition()[r]` holds the members of the set represented by `r`, in
    /// ascending order, and is empty unless `r` is a representative.
    pub fn partition(&self) -> Vec<Vec<usize>> {
        let len = self.len();
        let mut ptn = vec![vec![]; len];
        for i in 0..len {
            ptn[self.root(i)].push(i);
        }
        ptn
    }
}

struct AsSet<'a>(&'a [usize]);
impl fmt::Debug for AsSet<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.0.iter()).finish()
    }
}

impl fmt::Debug for UnionFind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptn = self.partition();
        fmt.debug_map()
            .entries(
                ptn.iter()
                    .enumerate()
                    .filter(|(_, set)| !set.is_empty())
                    .map(|(i, set)| (i, AsSet(set))),
            )
            .finish()
    }
}

impl fmt::Display for UnionFind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptn = self.partition();
        fmt.debug_set()
            .entries(
                ptn.iter().filter(|set| !set.is_empty()).map(|set| AsSet(set)),
            )
            .finish()
    }
}
