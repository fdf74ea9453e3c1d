//! Configuration loading and resolution.
//!
//! Settings come from default config files, explicit `--config` files,
//! `SCOUR__SECTION__KEY` environment variables and finally CLI flags, in that
//! order of precedence. `load` is the entry point and returns a validated
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
