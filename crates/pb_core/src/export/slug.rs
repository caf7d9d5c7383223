//! File-name slugs

/// Lowercase ASCII slug: every run of characters outside `[a-z0-9]` becomes a
/// single `-`, and leading/trailing dashes are dropped.
///
/// Returns an empty string when nothing alphanumeric survives; callers pick
/// their own fallback.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars().map(|c| c.to_ascii_lowercase()) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// `slugify(input)`, or `fallback()` when the slug comes out empty
pub fn slug_or_else(input: &str, fallback: impl FnOnce() -> String) -> String {
    let slug = slugify(input);
    if slug.is_empty() {
        fallback()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Trips Right"), "trips-right");
        assert_eq!(slugify("  Red Zone -- 2025!  "), "red-zone-2025");
        assert_eq!(slugify("Cover_3 / Sky"), "cover-3-sky");
        assert_eq!(slugify("ALLCAPS"), "allcaps");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("Jugada Ñandú"), "jugada-and");
        assert_eq!(slugify("전술"), "");
    }

    #[test]
    fn test_empty_slug_uses_fallback() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ---"), "");
        assert_eq!(slug_or_else("???", || "custom-playbook".to_string()), "custom-playbook");
        assert_eq!(slug_or_else("Mesh", String::new), "mesh");
    }
}
