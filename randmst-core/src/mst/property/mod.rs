//! Property-based tests for the Prim MST solver.
//!
//! Compares Prim's algorithm against a sequential Kruskal oracle on random
//! graphs with varied topologies, and checks that disconnected inputs are
//! always reported rather than summed.

mod oracle;
mod strategies;
