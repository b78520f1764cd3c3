//! Route-file resolution.
//!
//! For one route file, work out everything the registrar needs: the URL
//! pattern, the applicable middleware chain, and one binding per
//! (export, method) pair. Bindings are emitted in export-map order and
//! consumed immediately — nothing here is cached across files.

use crate::classify::ScannedFile;
use crate::config::RouterConfig;
use crate::error::Error;
use crate::loader::ExportLoader;
use crate::method::RouteMethod;
use crate::middleware::MiddlewareIndex;
use crate::translate::translate;

/// One (method, pattern, chain, handler) registration, ready for the
/// abstract server interface.
#[derive(Clone, Debug)]
pub struct RouteBinding<H> {
    pub method: RouteMethod,
    pub pattern: String,
    /// Middleware to run before `handler`, already in execution order.
    pub chain: Vec<H>,
    pub handler: H,
}

/// Resolves one route file into its bindings.
///
/// Exports whose method token is outside the allowed set are skipped
/// silently — route modules may carry auxiliary exports. A route ending in
/// `/index` additionally emits an alias binding at the bare directory path,
/// directly after the primary binding for the same export.
pub(crate) async fn resolve_file<H, L>(
    file: &ScannedFile,
    index: &MiddlewareIndex<H>,
    loader: &L,
    config: &RouterConfig,
) -> Result<Vec<RouteBinding<H>>, Error>
where
    H: Clone,
    L: ExportLoader<H>,
{
    let route = translate(&file.absolute, &config.routes_dir);
    let chain = index.select(&route);
    let exports = loader.load_exports(&file.absolute).await?;

    let mut bindings = Vec::new();
    for (key, handler) in exports {
        let Some(method) = RouteMethod::from_export_key(&key) else {
            continue;
        };

        bindings.push(RouteBinding {
            method,
            pattern: format!("{}{}", config.route_prefix, route),
            chain: chain.clone(),
            handler: handler.clone(),
        });

        // Index alias: a directory's `index` file also answers at the bare
        // directory path. `/index` alone aliases to the prefix itself.
        if let Some(bare) = route.strip_suffix("/index") {
            bindings.push(RouteBinding {
                method,
                pattern: format!("{}{}", config.route_prefix, bare),
                chain: chain.clone(),
                handler,
            });
        }
    }

    Ok(bindings)
}
