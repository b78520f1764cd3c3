//! The setup pipeline.
//!
//! One pass, strictly ordered: scan, classify, index every middleware file,
//! then resolve and register route files one at a time in scan order. Each
//! route file is fully handled (translate → select middleware → load exports
//! → emit bindings → register) before the next begins, so the sequence of
//! calls hitting the server backend is deterministic and reproducible for a
//! fixed directory snapshot. Nothing built here outlives the pass — the
//! index and intermediate lists are dropped on return.

use tracing::info;

use crate::classify::classify;
use crate::config::RouterConfig;
use crate::error::Error;
use crate::loader::ExportLoader;
use crate::middleware::MiddlewareIndex;
use crate::register::{ServerBackend, register};
use crate::resolve::resolve_file;
use crate::scan::scan;

/// Derives the route table from `config.routes_dir` and registers it on
/// `server`.
///
/// Fatal failures — the directory being unreadable, any module failing to
/// load — abort the whole pass; there is no partial-registration recovery
/// and no retry. Files outside the routes directory are skipped with a
/// warning.
///
/// ```rust,no_run
/// # use ruta::{ExportLoader, LoadFuture, Router, RouterConfig};
/// # struct MyLoader;
/// # impl ExportLoader<&'static str> for MyLoader {
/// #     fn load_exports<'a>(&'a self, _: &'a str) -> LoadFuture<'a, &'static str> {
/// #         Box::pin(async { Ok(ruta::ExportMap::new()) })
/// #     }
/// # }
/// # async fn demo() -> Result<(), ruta::Error> {
/// let mut app: Router<&'static str> = Router::new();
/// ruta::setup(&mut app, &MyLoader, &RouterConfig::new("routes")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup<H, S, L>(server: &mut S, loader: &L, config: &RouterConfig) -> Result<(), Error>
where
    H: Clone,
    S: ServerBackend<H>,
    L: ExportLoader<H>,
{
    let files = scan(&config.routes_dir).await?;
    let classified = classify(files, config);

    // Every middleware file is loaded and indexed before the first route
    // file is resolved.
    let index = MiddlewareIndex::build(&classified.middleware, loader, config).await?;

    let mut registered = 0usize;
    for file in &classified.routes {
        for binding in resolve_file(file, &index, loader, config).await? {
            register(server, binding);
            registered += 1;
        }
    }

    info!(
        routes_dir = %config.routes_dir,
        route_files = classified.routes.len(),
        middleware_files = classified.middleware.len(),
        bindings = registered,
        "route table registered"
    );
    Ok(())
}
