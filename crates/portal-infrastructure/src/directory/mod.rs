//! User directory adapters

pub mod memory;

pub use memory::InMemoryUserRepository;
