use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use union_find::UnionFind;

fn rand_pairs<R>(n: usize, len: usize, rng: &mut R) -> Vec<(usize, usize)>
where
    R: Rng + ?Sized,
{
    (0..len).map(|_| (rng.gen_range(0..n), rng.gen_range(0..n))).collect()
}

fn bench_unite(c: &mut Criterion) {
    let mut group = c.benchmark_group("union-find");

    let mut rng = ChaCha20Rng::from_seed([
        0x3A, 0x91, 0x0C, 0xE7, 0x55, 0x28, 0xB4, 0x6F, 0x19, 0xD2, 0x80, 0x4B,
        0xC6, 0x07, 0x7E, 0xA3, 0x62, 0xF8, 0x1D, 0x94, 0x2B, 0xE0, 0x5C, 0x36,
        0x8F, 0x71, 0xAA, 0x03, 0xD9, 0x4E, 0xB7, 0x10,
    ]);

    for n in [1_000, 100_000, 1_000_000] {
        let unite_query = rand_pairs(n, n, &mut rng);
        let same_query = rand_pairs(n, n, &mut rng);

        group
            .bench_function(BenchmarkId::new("unite", n), |b| {
                b.iter(|| {
                    let mut uf = UnionFind::new(n);
                    for &(u, v) in &unite_query {
                        black_box(uf.unite(u, v));
                    }
                })
            })
            .bench_function(BenchmarkId::new("unite_same", n), |b| {
                b.iter(|| {
                    let mut uf = UnionFind::new(n);
                    let query = unite_query.iter().zip(&same_query);
                    for (&(u, v), &(x, y)) in query {
                        uf.unite(u, v);
                        black_box(uf.same(x, y));
                    }
                })
            });
    }

    group.finish();
}

criterion_group!(benches, bench_unite);
criterion_main!(benches);
