mod allocation_world;
mod steps;

pub use allocation_world::AllocationWorld;
