pub mod counters;
pub mod registry;
