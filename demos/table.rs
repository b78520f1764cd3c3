//! Minimal ruta example — derive a route table from `demos/routes/` and
//! print every registration as it happens.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example table
//!
//! The tree:
//!   demos/routes/
//!   ├── _middleware.ts      → in every chain
//!   ├── hello.ts            → GET /hello
//!   └── users/
//!       ├── [id].ts         → GET /users/:id
//!       └── index.ts        → GET /users/index and GET /users

use ruta::{ExportLoader, ExportMap, LoadFuture, RouteMethod, Router, RouterConfig, ServerBackend};

/// Handlers are plain labels here. A real host would hand out function
/// references, script objects, whatever its runtime calls.
struct DemoLoader;

impl ExportLoader<&'static str> for DemoLoader {
    fn load_exports<'a>(&'a self, path: &'a str) -> LoadFuture<'a, &'static str> {
        let exports: &[(&str, &'static str)] = match path {
            "demos/routes/_middleware.ts" => &[("default", "request-log")],
            "demos/routes/hello.ts" => &[("GET say hello", "hello")],
            "demos/routes/users/[id].ts" => &[("GET", "show-user")],
            "demos/routes/users/index.ts" => &[("GET", "list-users")],
            _ => &[],
        };
        let exports: ExportMap<&'static str> =
            exports.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect();
        Box::pin(async move { Ok(exports) })
    }
}

/// Wraps the default backend and narrates each registration.
struct Narrated(Router<&'static str>);

impl Narrated {
    fn report(op: &str, pattern: &str, handlers: &[&'static str]) {
        println!("{op:<7} {pattern:<24} {}", handlers.join(" → "));
    }
}

impl ServerBackend<&'static str> for Narrated {
    fn mount(&mut self, p: &str, h: &[&'static str]) { Self::report("mount", p, h); self.0.mount(p, h) }
    fn get(&mut self, p: &str, h: &[&'static str]) { Self::report("get", p, h); self.0.get(p, h) }
    fn post(&mut self, p: &str, h: &[&'static str]) { Self::report("post", p, h); self.0.post(p, h) }
    fn put(&mut self, p: &str, h: &[&'static str]) { Self::report("put", p, h); self.0.put(p, h) }
    fn delete(&mut self, p: &str, h: &[&'static str]) { Self::report("delete", p, h); self.0.delete(p, h) }
    fn patch(&mut self, p: &str, h: &[&'static str]) { Self::report("patch", p, h); self.0.patch(p, h) }
    fn options(&mut self, p: &str, h: &[&'static str]) { Self::report("options", p, h); self.0.options(p, h) }
    fn head(&mut self, p: &str, h: &[&'static str]) { Self::report("head", p, h); self.0.head(p, h) }
}

#[tokio::main]
async fn main() -> Result<(), ruta::Error> {
    tracing_subscriber::fmt::init();

    let mut app = Narrated(Router::new());
    ruta::setup(&mut app, &DemoLoader, &RouterConfig::new("demos/routes")).await?;

    let (stack, params) = app.0.lookup(RouteMethod::Get, "/users/42").unwrap();
    println!("\nGET /users/42 → {} (id = {})", stack.join(" → "), params["id"]);
    Ok(())
}
