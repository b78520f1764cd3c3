//! Binding → server registration.
//!
//! The final pipeline stage: take one [`RouteBinding`] and issue exactly one
//! call against the abstract server interface. The chain order in the
//! binding is the argument order of that call, and argument order is
//! execution order — middleware runs left to right, then the final handler.

use tracing::debug;

use crate::method::RouteMethod;
use crate::resolve::RouteBinding;

/// The abstract server interface ruta registers against.
///
/// `H` is the host's handler representation — ruta treats it as opaque. The
/// last element of `handlers` is always the final handler; anything before
/// it is the middleware chain, in execution order.
///
/// Implement this for whatever actually serves requests. The crate ships
/// [`Router`](crate::Router) as a ready-made implementation.
pub trait ServerBackend<H> {
    /// Mounts blanket handlers at a path prefix (the `use` analogue):
    /// they apply to every method and every path below `pattern`.
    fn mount(&mut self, pattern: &str, handlers: &[H]);

    fn get(&mut self, pattern: &str, handlers: &[H]);
    fn post(&mut self, pattern: &str, handlers: &[H]);
    fn put(&mut self, pattern: &str, handlers: &[H]);
    fn delete(&mut self, pattern: &str, handlers: &[H]);
    fn patch(&mut self, pattern: &str, handlers: &[H]);
    fn options(&mut self, pattern: &str, handlers: &[H]);
    fn head(&mut self, pattern: &str, handlers: &[H]);
}

/// Registers one binding on `server`.
///
/// Pure method-to-operation dispatch; the `middlewares` pseudo-method maps
/// to [`ServerBackend::mount`], every real verb to its registration method.
pub(crate) fn register<H, S>(server: &mut S, binding: RouteBinding<H>)
where
    S: ServerBackend<H>,
{
    let RouteBinding { method, pattern, mut chain, handler } = binding;
    chain.push(handler);

    debug!(%method, pattern = %pattern, handlers = chain.len(), "registering");

    let op: fn(&mut S, &str, &[H]) = match method {
        RouteMethod::Middlewares => S::mount,
        RouteMethod::Get         => S::get,
        RouteMethod::Post        => S::post,
        RouteMethod::Put         => S::put,
        RouteMethod::Delete      => S::delete,
        RouteMethod::Patch       => S::patch,
        RouteMethod::Options     => S::options,
        RouteMethod::Head        => S::head,
    };
    op(server, &pattern, &chain);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Recorder {
        fn record(&mut self, op: &str, pattern: &str, handlers: &[&'static str]) {
            self.calls.push(format!("{op} {pattern} [{}]", handlers.join(", ")));
        }
    }

    impl ServerBackend<&'static str> for Recorder {
        fn mount(&mut self, p: &str, h: &[&'static str]) { self.record("mount", p, h) }
        fn get(&mut self, p: &str, h: &[&'static str]) { self.record("get", p, h) }
        fn post(&mut self, p: &str, h: &[&'static str]) { self.record("post", p, h) }
        fn put(&mut self, p: &str, h: &[&'static str]) { self.record("put", p, h) }
        fn delete(&mut self, p: &str, h: &[&'static str]) { self.record("delete", p, h) }
        fn patch(&mut self, p: &str, h: &[&'static str]) { self.record("patch", p, h) }
        fn options(&mut self, p: &str, h: &[&'static str]) { self.record("options", p, h) }
        fn head(&mut self, p: &str, h: &[&'static str]) { self.record("head", p, h) }
    }

    #[test]
    fn verb_dispatch_appends_handler_to_chain() {
        let mut server = Recorder::default();
        register(&mut server, RouteBinding {
            method: RouteMethod::Post,
            pattern: "/items".to_owned(),
            chain: vec!["auth", "log"],
            handler: "create",
        });
        assert_eq!(server.calls, ["post /items [auth, log, create]"]);
    }

    #[test]
    fn middlewares_pseudo_method_mounts() {
        let mut server = Recorder::default();
        register(&mut server, RouteBinding {
            method: RouteMethod::Middlewares,
            pattern: "/admin".to_owned(),
            chain: vec![],
            handler: "guard",
        });
        assert_eq!(server.calls, ["mount /admin [guard]"]);
    }
}
