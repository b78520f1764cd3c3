//! Middleware index.
//!
//! A `_middleware` file applies to its own directory and every descendant.
//! The index holds one descriptor per middleware file, ordered by
//! *specificity*: ascending character length of the applicability prefix, so
//! outer middleware (closer to the tree root) sits before deeper, more
//! specific middleware regardless of discovery order. Equal-length prefixes
//! keep their relative scan order — the sort is stable.
//!
//! Selection for a concrete route is a second, independent ordering layer:
//! the matching subset is re-sorted alphabetically by middleware *name*. The
//! authoritative chain order is therefore: select by string-prefix match,
//! then sort by name. The specificity order decides how the index is built
//! and traversed, not the final chain order — same-named ties discard the
//! prefix-length ordering on purpose. Both stages are contractual; do not
//! collapse them into one sort.

use tracing::warn;

use crate::classify::ScannedFile;
use crate::config::RouterConfig;
use crate::error::Error;
use crate::loader::{DEFAULT_EXPORT, ExportLoader};
use crate::translate::translate;

/// One middleware file, translated and ready for selection.
#[derive(Clone, Debug)]
pub(crate) struct MiddlewareDescriptor<H> {
    /// Base name of the translated route, e.g. `_middleware.auth`.
    pub name: String,
    /// Pattern of the containing directory; applies to every route it
    /// string-prefixes.
    pub prefix: String,
    pub handler: H,
}

/// All middleware descriptors, in specificity order.
pub(crate) struct MiddlewareIndex<H> {
    entries: Vec<MiddlewareDescriptor<H>>,
}

impl<H> MiddlewareIndex<H> {
    /// Loads every middleware file and builds the specificity-ordered index.
    ///
    /// The handler is the module's `default` export; a middleware module
    /// without one violates the convention and is skipped with a warning.
    /// A load failure is fatal.
    pub async fn build<L>(
        files: &[ScannedFile],
        loader: &L,
        config: &RouterConfig,
    ) -> Result<Self, Error>
    where
        L: ExportLoader<H>,
    {
        let mut entries = Vec::with_capacity(files.len());

        for file in files {
            let route = translate(&file.absolute, &config.routes_dir);
            let (prefix, name) = split_route(&route);

            let mut exports = loader.load_exports(&file.absolute).await?;
            let Some(handler) = exports.shift_remove(DEFAULT_EXPORT) else {
                warn!(
                    path = %file.absolute,
                    "middleware module has no `default` export, ignoring"
                );
                continue;
            };

            entries.push(MiddlewareDescriptor {
                name: name.to_owned(),
                prefix: prefix.to_owned(),
                handler,
            });
        }

        // Stable: equal-length prefixes keep discovery order.
        entries.sort_by_key(|d| d.prefix.len());
        Ok(Self { entries })
    }

    /// Selects the chain for `route`: every descriptor whose prefix
    /// string-prefixes the route, re-sorted alphabetically by name.
    pub fn select(&self, route: &str) -> Vec<H>
    where
        H: Clone,
    {
        let mut selected: Vec<&MiddlewareDescriptor<H>> = self
            .entries
            .iter()
            .filter(|d| route.starts_with(&d.prefix))
            .collect();
        selected.sort_by(|a, b| a.name.cmp(&b.name));
        selected.into_iter().map(|d| d.handler.clone()).collect()
    }
}

/// Splits a translated route into `(dirname, basename)`.
///
/// `/users/_middleware.auth` → `("/users", "_middleware.auth")`; a file at
/// the root keeps the root itself as its prefix: `/_middleware` → `("/",
/// "_middleware")`. A route with no separator at all gets the empty prefix,
/// which applies globally.
fn split_route(route: &str) -> (&str, &str) {
    match route.rfind('/') {
        Some(0) => ("/", &route[1..]),
        Some(idx) => (&route[..idx], &route[idx + 1..]),
        None => ("", route),
    }
}
