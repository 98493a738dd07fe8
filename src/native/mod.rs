/// Native module contains implementations of core traits
/// on top of `std::process`, without any external tooling.
pub mod launcher;
