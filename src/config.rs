//! Router configuration.

/// Where to scan and what to prepend.
///
/// Supplied once to [`setup`](crate::setup) and never mutated. `routes_dir`
/// is compared and stripped textually, so pass it exactly as you want it
/// matched against scanned paths — a relative `"routes"` and an absolute
/// `"/srv/app/routes"` both work, as long as you stay consistent.
///
/// ```rust
/// use ruta::RouterConfig;
///
/// let config = RouterConfig::new("routes");
/// let api = RouterConfig::new("routes").prefix("/api/v1");
/// ```
#[derive(Clone, Debug)]
pub struct RouterConfig {
    pub(crate) routes_dir: String,
    pub(crate) route_prefix: String,
}

impl RouterConfig {
    /// Configuration with no route prefix.
    pub fn new(routes_dir: impl Into<String>) -> Self {
        Self { routes_dir: routes_dir.into(), route_prefix: String::new() }
    }

    /// Prepends `prefix` verbatim to every emitted pattern.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.route_prefix = prefix.into();
        self
    }

    /// The directory being scanned.
    pub fn routes_dir(&self) -> &str {
        &self.routes_dir
    }
}
