//! Module loading as an injected capability.
//!
//! ruta never imports, compiles, or executes a route module itself. The host
//! supplies an [`ExportLoader`] that turns a scanned path into that module's
//! exported symbols; ruta only cares that loading is deterministic per path
//! and fails fatally on error. What a "module" is — an embedded scripting
//! runtime, a WASM component, a static table built at compile time — is the
//! host's business.
//!
//! # Why a boxed future
//!
//! The trait must be object-safe-ish across arbitrary host loaders, and each
//! loader has its own concrete future type. The same type-erasure trick used
//! for handlers everywhere in async Rust applies: return
//! `Pin<Box<dyn Future>>` and pay one allocation per load, which is nothing
//! next to the I/O the load itself performs.

use std::future::Future;
use std::pin::Pin;

use indexmap::IndexMap;

use crate::error::Error;

/// The export key middleware modules must use for their handler.
pub const DEFAULT_EXPORT: &str = "default";

/// One module's exports: key → handler, in the module's own declaration
/// order. The order matters — bindings are emitted per export in map order,
/// and registration order is part of the crate's determinism contract.
pub type ExportMap<H> = IndexMap<String, H>;

/// A heap-allocated, type-erased future resolving to one module's exports.
pub type LoadFuture<'a, H> = Pin<Box<dyn Future<Output = Result<ExportMap<H>, Error>> + Send + 'a>>;

/// Turns a file path into the module's exported symbols.
///
/// Implementations must be deterministic per path for the duration of one
/// setup pass. A load failure aborts the whole pass — there is no
/// partial-registration recovery.
pub trait ExportLoader<H> {
    fn load_exports<'a>(&'a self, path: &'a str) -> LoadFuture<'a, H>;
}
