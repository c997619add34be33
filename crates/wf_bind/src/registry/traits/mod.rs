// -----------------------------------------------------------------------------
// Modules

mod coerce;
mod construct;

// -----------------------------------------------------------------------------
// Exports

pub use coerce::TypeTraitCoerce;
pub use construct::TypeTraitConstruct;
