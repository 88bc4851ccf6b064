//! The pricing-display experiment: counterbalanced A/B flow, behavior
//! tracking, report assembly, and optional remote mirroring.

pub mod catalog;
pub mod config;
pub mod flow;
pub mod report;
pub mod sink;
pub mod tracker;

mod observers;
mod screens;

mod view;
pub use view::ExperimentView;
