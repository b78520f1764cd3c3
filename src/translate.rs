//! File path → URL pattern translation.
//!
//! Pure string transformation, no I/O. The grammar is small:
//!
//! | On disk | Pattern |
//! |---|---|
//! | `/users/profile.ts` | `/users/profile` |
//! | `/blog/[slug].ts` | `/blog/:slug` |
//! | `/files/[a]-[b].ts` | `/files/:a-:b` |
//!
//! `..` is stripped wherever it appears — a crafted filename must never be
//! able to translate into a pattern that escapes upward.

/// Extensions recognized as route source files, stripped from the pattern.
/// Case-sensitive on the extension only.
pub(crate) const SOURCE_EXTENSIONS: &[&str] = &[".ts", ".js"];

/// Translates a scanned file path into a route pattern.
///
/// Steps, in order: strip `prefix` from the front, strip every literal `..`,
/// strip one trailing source extension, rewrite each `[name]` group to
/// `:name`. Duplicate slashes are not normalized — callers pass in
/// already-normalized filesystem paths.
pub fn translate(path: &str, prefix: &str) -> String {
    let rel = path.strip_prefix(prefix).unwrap_or(path);
    let rel = rel.replace("..", "");

    let rel = match SOURCE_EXTENSIONS.iter().find_map(|ext| rel.strip_suffix(ext)) {
        Some(stem) => stem.to_owned(),
        None => rel,
    };

    rewrite_brackets(&rel)
}

/// Rewrites every non-empty `[name]` group to `:name`.
///
/// Applies to all groups, including several within one segment. An
/// unterminated `[` or an empty `[]` is copied through literally.
fn rewrite_brackets(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(']') {
            Some(close) if close > 0 => {
                out.push(':');
                out.push_str(&after[..close]);
                rest = &after[close + 1..];
            }
            _ => {
                // No closing bracket, or `[]` with nothing inside.
                out.push('[');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path_only_loses_its_extension() {
        assert_eq!(translate("/users/profile.ts", ""), "/users/profile");
        assert_eq!(translate("/healthz.js", ""), "/healthz");
    }

    #[test]
    fn prefix_is_stripped_from_the_front() {
        assert_eq!(translate("routes/users/index.ts", "routes"), "/users/index");
    }

    #[test]
    fn bracket_segment_becomes_param() {
        assert_eq!(translate("/blog/[slug].ts", ""), "/blog/:slug");
    }

    #[test]
    fn multiple_brackets_in_one_segment() {
        assert_eq!(translate("/files/[a]-[b].ts", ""), "/files/:a-:b");
    }

    #[test]
    fn malformed_brackets_pass_through() {
        assert_eq!(translate("/x/[open.ts", ""), "/x/[open");
        assert_eq!(translate("/x/[].ts", ""), "/x/[]");
    }

    #[test]
    fn traversal_segments_are_removed() {
        let pattern = translate("/../etc/passwd.ts", "");
        assert!(!pattern.contains(".."));
        assert_eq!(pattern, "//etc/passwd");
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        assert_eq!(translate("/a/b.TS", ""), "/a/b.TS");
    }

    #[test]
    fn only_a_trailing_extension_is_stripped() {
        assert_eq!(translate("/a/b.ts.bak", ""), "/a/b.ts.bak");
        assert_eq!(translate("/a/b.test.ts", ""), "/a/b.test");
    }
}
