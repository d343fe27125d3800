use anyhow::Context;
use clap::Parser;
use log::{debug, info, warn, LevelFilter};
use simple_logger::SimpleLogger;

use inorder_bst::Tree;

/// Builds a binary search tree from the given values, optionally keeps a
/// deep copy part way through, then prints the tree, the copy, and every
/// value in order.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Values to insert. The first one becomes the root.
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Take a deep copy once this many values have been added.
    #[arg(long, value_name = "N")]
    snapshot_after: Option<usize>,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Builds the tree from `values`, taking a deep copy once `snapshot_after`
/// values have been added. Warns if that point is never reached.
fn build(
    values: &[i64],
    snapshot_after: Option<usize>,
) -> anyhow::Result<(Tree<i64>, Option<Tree<i64>>)> {
    let (&first, rest) = values
        .split_first()
        .context("at least one value is required")?;

    let mut tree = Tree::new(first);
    let mut snapshot = None;
    if snapshot_after == Some(1) {
        snapshot = Some(tree.clone());
    }

    for (added, &value) in rest.iter().enumerate() {
        if !tree.insert(value) {
            info!("{} is already in the tree", value);
        }
        if snapshot_after == Some(added + 2) {
            info!("taking snapshot after {} values", added + 2);
            snapshot = Some(tree.clone());
        }
    }

    if let (Some(n), None) = (snapshot_after, &snapshot) {
        warn!(
            "no snapshot taken: --snapshot-after {} is outside 1..={}",
            n,
            values.len()
        );
    }

    Ok((tree, snapshot))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    SimpleLogger::new()
        .with_level(level(args.verbose))
        .init()
        .context("failed to install logger")?;
    debug!("{:?}", args);

    let (tree, snapshot) = build(&args.values, args.snapshot_after)?;

    println!("{}", tree);
    if let Some(snapshot) = &snapshot {
        println!("{}", snapshot);
    }
    for value in &tree {
        println!("{}", value);
    }

    Ok(())
}
