//! Umbrella crate for the `varid-*` family.
//!
//! ```rust,no_run
//! use varid::resolve::Resolver;
//! use varid::services::VariationClient;
//!
//! # fn main() -> varid::core::Result<()> {
//! let resolver = Resolver::new(VariationClient::builder().finish()?);
//! let resolution = resolver.resolve_str("NC_000008.11:g.19962213C>G")?;
//! println!("{:?}", resolution.as_rsid_list());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "core")]
#[doc(inline)]
pub use varid_core as core;

#[cfg(feature = "services")]
#[doc(inline)]
pub use varid_services as services;

#[cfg(feature = "resolve")]
#[doc(inline)]
pub use varid_resolve as resolve;
