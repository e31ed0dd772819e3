pub mod backend;

// Chart adapters, one per chart widget
pub mod allocation;
pub mod growth;
