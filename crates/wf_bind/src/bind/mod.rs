//! Binding a whole request onto a target.
//!
//! A [`Binder`] takes the request as a [`ParamMap`] and applies every
//! parameter to the target bean on its own. Nothing stops the pass: each
//! parameter that cannot be bound becomes a [`BindingFailure`] in the
//! returned [`BindingErrors`].
//!
//! Per parameter the binder
//!
//! 1. skips names listed in [`BinderConfig::ignored_parameters`];
//! 2. rejects names under a reserved path, such as `context.eventName`;
//! 3. parses the name into a [`ParsedPath`](crate::path::ParsedPath);
//! 4. resolves the declared type at the end of the path;
//! 5. converts the raw values to that type;
//! 6. creates whatever is missing along the path and stores the value.

// -----------------------------------------------------------------------------
// Modules

mod config;
mod driver;
mod failure;
mod params;
mod reserved;

// -----------------------------------------------------------------------------
// Exports

pub use config::BinderConfig;
pub use driver::Binder;
pub use failure::{BindStage, BindingErrors, BindingFailure};
pub use params::ParamMap;
pub use reserved::ReservedPaths;
