//! Repository-slug derivation from assignment names.

/// Maximum slug length, bounded by remote-host repository naming limits.
pub const MAX_SLUG_LEN: usize = 100;

/// Derive a filesystem- and repository-safe slug from an assignment name.
///
/// Lowercases ASCII alphanumerics and collapses every other run of
/// characters into a single hyphen, trims edge hyphens, and truncates to
/// [`MAX_SLUG_LEN`]. Idempotent: slugging a slug returns it unchanged.
///
/// Returns `None` when nothing alphanumeric survives (purely symbolic
/// names like `"???"`).
pub fn repo_slug(name: &str) -> Option<String> {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}
