//! Random weighted graph construction.
//!
//! A [`GraphGenerator`] draws one complete random graph per trial, either
//! with independent uniform edge weights or with Euclidean distances between
//! random points in the unit hypercube, and optionally discards every edge
//! heavier than the [`pruning_threshold`] so the stored edge count stays
//! close to linear in the vertex count.

mod dimension;
mod error;
mod generator;
mod point;
mod threshold;
mod types;

pub use self::{
    dimension::Dimension,
    error::{GraphError, GraphErrorCode},
    generator::GraphGenerator,
    point::Point,
    threshold::pruning_threshold,
    types::{Edge, Graph},
};

#[cfg(test)]
mod tests;
