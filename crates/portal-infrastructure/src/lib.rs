//! # Portal Infrastructure
//! 
//! Directory implementations (adapters).

pub mod directory;

pub use directory::InMemoryUserRepository;
