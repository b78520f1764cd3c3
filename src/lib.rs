//! # ruta
//!
//! Your directory tree already is a route table. ruta just reads it out
//! loud.
//!
//! Point it at a directory and it derives HTTP routes from the layout: each
//! file becomes routes, its path becomes the URL pattern, and `_middleware`
//! files become cross-cutting handlers for everything beneath them. ruta
//! computes *which* handler runs for *which* method and path, in *what*
//! middleware context — and registers exactly that on a server interface you
//! provide. It does not serve requests, load modules, or bootstrap your
//! process; those stay behind the [`ServerBackend`] and [`ExportLoader`]
//! seams.
//!
//! ## The conventions
//!
//! | On disk | Registered |
//! |---|---|
//! | `routes/items.ts` exporting `"GET"` | `GET /items` |
//! | `routes/items.ts` exporting `"POST create"` | `POST /items` |
//! | `routes/blog/[slug].ts` | `… /blog/:slug` |
//! | `routes/users/index.ts` | `… /users/index` **and** `… /users` |
//! | `routes/users/_middleware.auth.ts` | in the chain of every `/users/…` route |
//! | `routes/items.ts` exporting `"middlewares"` | mounted blanket handler at `/items` |
//!
//! Export keys carry the method in their first space-delimited token; the
//! rest is free-text description. Unknown tokens are skipped silently, so
//! route modules can hold auxiliary exports. A middleware module exposes its
//! handler under the `default` key.
//!
//! Middleware chain order is contractual: applicable middleware is the set
//! whose directory prefix string-prefixes the route, ordered alphabetically
//! by file name. See [`setup`] for the pipeline's ordering guarantees.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use ruta::{ExportLoader, ExportMap, LoadFuture, Router, RouterConfig};
//!
//! // The host decides what a handler is. Here: plain labels.
//! struct TableLoader;
//!
//! impl ExportLoader<&'static str> for TableLoader {
//!     fn load_exports<'a>(&'a self, path: &'a str) -> LoadFuture<'a, &'static str> {
//!         let exports = match path {
//!             "routes/items.ts" => ExportMap::from_iter([
//!                 ("GET".to_owned(), "list items"),
//!                 ("POST create".to_owned(), "create item"),
//!             ]),
//!             _ => ExportMap::new(),
//!         };
//!         Box::pin(async move { Ok(exports) })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ruta::Error> {
//!     let mut app: Router<&'static str> = Router::new();
//!     ruta::setup(&mut app, &TableLoader, &RouterConfig::new("routes")).await?;
//!     Ok(())
//! }
//! ```

mod backend;
mod classify;
mod config;
mod error;
mod loader;
mod method;
mod middleware;
mod register;
mod resolve;
mod router;
mod scan;
mod translate;

pub use backend::Router;
pub use config::RouterConfig;
pub use error::Error;
pub use loader::{DEFAULT_EXPORT, ExportLoader, ExportMap, LoadFuture};
pub use method::RouteMethod;
pub use register::ServerBackend;
pub use resolve::RouteBinding;
pub use router::setup;
pub use translate::translate;
