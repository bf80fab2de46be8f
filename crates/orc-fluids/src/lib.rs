//! orc-fluids: thermophysical property resolution for the ORC pump model.
//!
//! Provides:
//! - `Property` / `Known` identifiers for two-property state lookups
//! - `PropertyProvider` trait: resolve one property from two known ones for a named fluid
//! - CoolProp backend (via `rfluids`) for real working fluids
//! - Incompressible-liquid backend with closed-form properties
//! - Working-fluid catalog (`Species`)
//! - Unit-aware text parsing for user inputs
//!
//! # Architecture
//!
//! The pump model only ever talks to `PropertyProvider`, which keeps it free
//! of backend dependencies. Providers are stateless and referentially
//! transparent, so one instance can serve many evaluations in parallel.
//!
//! # Example
//!
//! ```no_run
//! use orc_fluids::{CoolPropProvider, Known, Property, PropertyProvider};
//!
//! let provider = CoolPropProvider::new();
//! let rho = provider
//!     .resolve(
//!         Property::Density,
//!         Known::pressure(4.0e5),
//!         Known::enthalpy(2.6676e5),
//!         "R245fa",
//!     )
//!     .unwrap();
//! println!("Density: {} kg/m³", rho);
//! ```

pub mod coolprop;
pub mod error;
pub mod incompressible;
pub mod property;
pub mod provider;
pub mod species;
pub mod units;

// Re-exports for ergonomics
pub use coolprop::CoolPropProvider;
pub use error::{FluidError, FluidResult};
pub use incompressible::{IncompressibleParameters, IncompressibleProvider};
pub use property::{Known, Property, SpecEnthalpy, SpecEntropy};
pub use provider::PropertyProvider;
pub use species::Species;
pub use units::{Quantity, UnitError, parse_quantity};
