//! Range query walkthrough over `[1, 10]`.
//!
//! Run with `--features tracing` and `RUST_LOG=segtree=trace` to see tree events.

use anyhow::{Context, Result};
use segtree::{AggregateKind, MultiSegmentTree};

fn main() -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Segment Tree Range Queries");
    println!("==========================");

    let data: Vec<i64> = (1..=10).collect();
    let mut trees = MultiSegmentTree::with_all_kinds(&data).context("building trees")?;
    println!("Data: {data:?}");

    let sum = trees.query(AggregateKind::Sum, 1, 5)?;
    println!("  sum [1, 5]: {sum}");
    for kind in AggregateKind::ALL.into_iter().skip(1) {
        let value = trees
            .query(kind, 1, 4)
            .with_context(|| format!("{kind} query over [1, 4]"))?;
        println!("  {kind} [1, 4]: {value}");
    }

    trees.update(2, 10).context("updating index 2")?;
    println!("After setting index 2 to 10:");
    println!("  sum [1, 4]: {}", trees.query(AggregateKind::Sum, 1, 4)?);

    Ok(())
}
