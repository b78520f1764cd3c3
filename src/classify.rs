//! Middleware-file / route-file partitioning.
//!
//! A file is a middleware file iff its base name is `_middleware`, optionally
//! followed by a dotted qualifier, and then a recognized source extension:
//! `_middleware.ts`, `_middleware.auth.ts`. Everything else scanned is a
//! route file.

use tracing::warn;

use crate::config::RouterConfig;
use crate::translate::SOURCE_EXTENSIONS;

/// One scanned file, verified to live under the routes directory.
#[derive(Clone, Debug)]
pub(crate) struct ScannedFile {
    /// The path as produced by the scanner.
    pub absolute: String,
    /// `absolute` with the routes directory stripped from the front.
    pub relative: String,
}

/// The scanner's output, split into the two populations the pipeline
/// processes in separate phases.
pub(crate) struct Classified {
    pub middleware: Vec<ScannedFile>,
    pub routes: Vec<ScannedFile>,
}

/// Partitions `paths`, preserving scan order within each population.
///
/// Re-verifies the scanner's containment contract: a path that does not start
/// with `routes_dir` should be unreachable, but if one shows up it is dropped
/// with a warning rather than registered somewhere it was never meant to be.
pub(crate) fn classify(paths: Vec<String>, config: &RouterConfig) -> Classified {
    let mut middleware = Vec::new();
    let mut routes = Vec::new();

    for absolute in paths {
        let Some(relative) = absolute.strip_prefix(&config.routes_dir) else {
            warn!(
                path = %absolute,
                routes_dir = %config.routes_dir,
                "scanned file is outside the routes directory, ignoring"
            );
            continue;
        };
        let relative = relative.to_owned();
        let file = ScannedFile { absolute, relative };

        if is_middleware_file(&file.relative) {
            middleware.push(file);
        } else {
            routes.push(file);
        }
    }

    Classified { middleware, routes }
}

fn is_middleware_file(relative: &str) -> bool {
    let base = relative.rsplit('/').next().unwrap_or(relative);

    let Some(stem) = SOURCE_EXTENSIONS.iter().find_map(|ext| base.strip_suffix(ext))
    else {
        return false;
    };
    match stem.strip_prefix("_middleware") {
        // `_middleware.ts` or a qualified `_middleware.auth.ts`; a longer
        // name like `_middlewarex.ts` is an ordinary route file.
        Some(rest) => rest.is_empty() || rest.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(paths: &[&str]) -> Classified {
        let config = RouterConfig::new("routes");
        classify(paths.iter().map(|p| (*p).to_owned()).collect(), &config)
    }

    #[test]
    fn middleware_marker_is_recognized() {
        assert!(is_middleware_file("/users/_middleware.ts"));
        assert!(is_middleware_file("/users/_middleware.auth.ts"));
        assert!(is_middleware_file("/_middleware.js"));
    }

    #[test]
    fn near_misses_are_route_files() {
        assert!(!is_middleware_file("/users/_middlewarex.ts"));
        assert!(!is_middleware_file("/users/middleware.ts"));
        assert!(!is_middleware_file("/users/_middleware"));
        assert!(!is_middleware_file("/users/_middleware.txt"));
    }

    #[test]
    fn populations_keep_scan_order() {
        let classified = split(&[
            "routes/_middleware.ts",
            "routes/items.ts",
            "routes/users/_middleware.auth.ts",
            "routes/users/index.ts",
        ]);
        let rel = |files: &[ScannedFile]| -> Vec<String> {
            files.iter().map(|f| f.relative.clone()).collect()
        };
        assert_eq!(rel(&classified.middleware), ["/_middleware.ts", "/users/_middleware.auth.ts"]);
        assert_eq!(rel(&classified.routes), ["/items.ts", "/users/index.ts"]);
    }

    #[test]
    fn out_of_root_files_are_dropped() {
        let classified = split(&["/etc/passwd", "routes/items.ts"]);
        assert!(classified.middleware.is_empty());
        assert_eq!(classified.routes.len(), 1);
        assert_eq!(classified.routes[0].absolute, "routes/items.ts");
    }
}
