//! Random minimum spanning tree experiments.
//!
//! Estimates the expected MST weight of random graphs by Monte-Carlo
//! simulation. Each trial draws a complete graph whose edge weights are
//! either independent uniform values or Euclidean distances between random
//! points in a unit hypercube of up to four dimensions, optionally prunes
//! edges that are almost surely absent from the MST, and sums the MST with
//! Prim's algorithm over a binary min-heap.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod experiment;
mod graph;
mod heap;
mod mst;
#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{ExperimentError, ExperimentErrorCode, Result},
    experiment::{
        ExecutionStrategy, Experiment, ExperimentBuilder, ExperimentConfig, ExperimentSummary,
        SeedPolicy, TrialOutcome, run_trial,
    },
    graph::{
        Dimension, Edge, Graph, GraphError, GraphErrorCode, GraphGenerator, Point,
        pruning_threshold,
    },
    heap::{HeapEntry, HeapError, HeapErrorCode, MinHeap},
    mst::{MstError, MstErrorCode, prim_mst_weight},
};
