// Merkle reduction and block assembly benchmarks.
//
// Covers the root computation at a range of batch sizes (odd and even, so
// the carry-forward path is exercised) and full block assembly.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use aurum_ledger::crypto::{merkle_root, Digest};
use aurum_ledger::{Block, ChainTip, Transaction};

fn leaves(n: usize) -> Vec<Digest> {
    (0..n).map(|i| Digest::of(format!("tx-{i}"))).collect()
}

fn bench_merkle_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("merkle/root");

    for size in [1usize, 2, 7, 64, 255, 1024] {
        let input = leaves(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| merkle_root(input));
        });
    }

    group.finish();
}

fn bench_block_assemble(c: &mut Criterion) {
    let tip = ChainTip::genesis();
    let txs: Vec<Transaction> = (0..100)
        .map(|i| Transaction::from_payload(format!("price:{i}"), i))
        .collect();

    c.bench_function("block/assemble_100_tx", |b| {
        b.iter(|| Block::next(&tip, 1_700_000_000, txs.clone()));
    });
}

criterion_group!(benches, bench_merkle_root, bench_block_assemble);
criterion_main!(benches);
