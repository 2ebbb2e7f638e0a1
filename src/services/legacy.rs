//! WordPress content detection.

/// Marker that WordPress-served assets carry in their URLs.
pub const WORDPRESS_MARKER: &[u8] = b"wp-content";

/// True if the raw body contains `wp-content` anywhere.
///
/// A plain case-sensitive substring test over the bytes: it matches in
/// comments, scripts and text as well as in asset URLs.
pub fn has_wordpress_content(body: &[u8]) -> bool {
    body.windows(WORDPRESS_MARKER.len())
        .any(|window| window == WORDPRESS_MARKER)
}
