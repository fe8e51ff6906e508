//! Integration flows

pub mod fixtures;

mod construction_flow;
mod query_flow;
mod runtime_flow;
