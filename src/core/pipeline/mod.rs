pub mod detecting;
pub mod dispatching;
