//! Terminal facing side of the collector: argument parsing in `cli`,
//! progress and summary printing in `output`.

pub mod cli;
pub mod output;
