//! Command implementations.
//!
//! Each command module exposes an `execute` function taking the shared
//! project arguments and its own parsed arguments.

pub mod generate;
pub mod preload;
pub mod run;
pub(crate) mod utils;

pub use generate::execute as generate_execute;
pub use preload::execute as preload_execute;
pub use run::execute as run_execute;
