pub mod multiplexer;
pub mod registry;
