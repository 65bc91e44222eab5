use std::io::{self, Write};

use anyhow::Context;
use tracing::{debug, info};
use union_find::UnionFind;

const N: usize = 7;

fn unite(uf: &mut UnionFind, u: usize, v: usize) -> bool {
    let merged = uf.unite(u, v);
    debug!(u, v, merged, sets = uf.partition_len(), "unite");
    merged
}

fn run<W: Write>(out: &mut W) -> io::Result<()> {
    info!(n = N, "starting");
    let mut uf = UnionFind::new(N);

    unite(&mut uf, 0, 1);
    unite(&mut uf, 1, 2);
    unite(&mut uf, 3, 4);
    unite(&mut uf, 5, 6);
    unite(&mut uf, 2, 4); // {0, 1, 2} and {3, 4}

    writeln!(out, "same(0, 4) = {}", uf.same(0, 4))?;
    writeln!(out, "same(0, 6) = {}", uf.same(0, 6))?;
    writeln!(out, "size(0) = {}", uf.size(0))?;
    writeln!(out, "size(6) = {}", uf.size(6))?;

    if unite(&mut uf, 4, 6) {
        writeln!(out, "Merged sets of 4 and 6")?;
    }
    writeln!(out, "same(0, 6) = {}", uf.same(0, 6))?;
    writeln!(out, "size(0) = {}", uf.size(0))?;

    debug!(partition = %uf, "done");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out).context("failed to write to stdout")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

#[test]
fn output() {
    let mut buf = vec![];
    run(&mut buf).unwrap();
    let expected = "\
same(0, 4) = true
same(0, 6) = false
size(0) = 5
size(6) = 2
Merged sets of 4 and 6
same(0, 6) = true
size(0) = 7
";
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}
