//! Default in-crate server backend.
//!
//! One radix tree per HTTP verb plus an ordered mount list. This is the
//! shippable [`ServerBackend`] implementation for hosts that do not already
//! have a route table of their own: registrations go in during setup,
//! [`Router::lookup`] answers (handler stack, path params) questions at
//! request time. What to *do* with the handlers — call them, schedule them,
//! hand them to an executor — stays with the host.

use std::collections::HashMap;

use matchit::Router as MatchitRouter;

use crate::method::RouteMethod;
use crate::register::ServerBackend;

/// The default route table.
///
/// `H` is the host's opaque handler type. Patterns use `/:param` segments;
/// they are converted to the underlying tree's `{param}` syntax on insert.
/// Only whole-segment parameters are supported here — a mixed segment such
/// as `:a-:b` is stored as a literal.
pub struct Router<H> {
    verbs: HashMap<RouteMethod, MatchitRouter<Vec<H>>>,
    /// `(prefix pattern, handlers)` in registration order.
    mounts: Vec<(String, Vec<H>)>,
}

impl<H> Router<H> {
    pub fn new() -> Self {
        Self { verbs: HashMap::new(), mounts: Vec::new() }
    }

    /// Looks up the full handler stack for one request.
    ///
    /// The stack is: every matching mount's handlers in registration order,
    /// then the route's own chain, final handler last. Returns `None` when
    /// no route matches the method + path pair.
    pub fn lookup(&self, method: RouteMethod, path: &str) -> Option<(Vec<H>, HashMap<String, String>)>
    where
        H: Clone,
    {
        let tree = self.verbs.get(&method)?;
        let matched = tree.at(path).ok()?;

        let mut stack: Vec<H> = self
            .mounts
            .iter()
            .filter(|(prefix, _)| mount_matches(prefix, path))
            .flat_map(|(_, handlers)| handlers.iter().cloned())
            .collect();
        stack.extend(matched.value.iter().cloned());

        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((stack, params))
    }

    fn add(&mut self, method: RouteMethod, pattern: &str, handlers: &[H])
    where
        H: Clone,
    {
        self.verbs
            .entry(method)
            .or_default()
            .insert(to_matchit(pattern), handlers.to_vec())
            .unwrap_or_else(|e| panic!("invalid route `{pattern}`: {e}"));
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self { Self::new() }
}

impl<H: Clone> ServerBackend<H> for Router<H> {
    fn mount(&mut self, pattern: &str, handlers: &[H]) {
        self.mounts.push((pattern.to_owned(), handlers.to_vec()));
    }

    fn get(&mut self, pattern: &str, handlers: &[H]) {
        self.add(RouteMethod::Get, pattern, handlers)
    }
    fn post(&mut self, pattern: &str, handlers: &[H]) {
        self.add(RouteMethod::Post, pattern, handlers)
    }
    fn put(&mut self, pattern: &str, handlers: &[H]) {
        self.add(RouteMethod::Put, pattern, handlers)
    }
    fn delete(&mut self, pattern: &str, handlers: &[H]) {
        self.add(RouteMethod::Delete, pattern, handlers)
    }
    fn patch(&mut self, pattern: &str, handlers: &[H]) {
        self.add(RouteMethod::Patch, pattern, handlers)
    }
    fn options(&mut self, pattern: &str, handlers: &[H]) {
        self.add(RouteMethod::Options, pattern, handlers)
    }
    fn head(&mut self, pattern: &str, handlers: &[H]) {
        self.add(RouteMethod::Head, pattern, handlers)
    }
}

/// `/users/:id` → `/users/{id}`. Whole-segment params only.
fn to_matchit(pattern: &str) -> String {
    pattern
        .split('/')
        .map(|seg| match seg.strip_prefix(':') {
            Some(name) if !name.is_empty() && !name.contains(':') => format!("{{{name}}}"),
            _ => seg.to_owned(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Segment-aware prefix match for mounts: every pattern segment must match
/// the corresponding path segment, `:param` segments match anything. An
/// empty or `/` pattern matches every path.
fn mount_matches(pattern: &str, path: &str) -> bool {
    let pat: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let got: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    pat.len() <= got.len()
        && pat.iter().zip(&got).all(|(p, g)| p.starts_with(':') || p == g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_conversion() {
        assert_eq!(to_matchit("/users/:id/posts"), "/users/{id}/posts");
        assert_eq!(to_matchit("/plain"), "/plain");
        assert_eq!(to_matchit("/odd/:a-:b"), "/odd/:a-:b");
    }

    #[test]
    fn lookup_extracts_params() {
        let mut router: Router<&'static str> = Router::new();
        router.get("/blog/:slug", &["show"]);

        let (stack, params) = router.lookup(RouteMethod::Get, "/blog/hello").unwrap();
        assert_eq!(stack, ["show"]);
        assert_eq!(params["slug"], "hello");
        assert!(router.lookup(RouteMethod::Post, "/blog/hello").is_none());
    }

    #[test]
    fn mounts_compose_before_route_chain() {
        let mut router: Router<&'static str> = Router::new();
        router.mount("/", &["log"]);
        router.mount("/admin", &["guard"]);
        router.get("/admin/users", &["auth", "list"]);
        router.get("/public", &["page"]);

        let (stack, _) = router.lookup(RouteMethod::Get, "/admin/users").unwrap();
        assert_eq!(stack, ["log", "guard", "auth", "list"]);

        let (stack, _) = router.lookup(RouteMethod::Get, "/public").unwrap();
        assert_eq!(stack, ["log", "page"]);
    }

    #[test]
    fn param_mounts_match_any_segment() {
        let mut router: Router<&'static str> = Router::new();
        router.mount("/users/:id", &["owner"]);
        router.get("/users/:id/settings", &["edit"]);

        let (stack, _) = router.lookup(RouteMethod::Get, "/users/7/settings").unwrap();
        assert_eq!(stack, ["owner", "edit"]);
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn duplicate_registration_panics() {
        let mut router: Router<&'static str> = Router::new();
        router.get("/dup", &["a"]);
        router.get("/dup", &["b"]);
    }
}
