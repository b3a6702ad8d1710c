#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

pub use factory::CoreFactory;

#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::SqlitePokemonRepository;

pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
