pub mod capacity;
pub mod link_budget;
pub mod reuse;
