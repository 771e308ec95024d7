/// Bang translation table, applied between parsing and serialization.
///
/// Left column is the inbound bang, right column its replacement:
/// - `en` was the go-to prefix to stop browsers from URL-detecting a query;
///   the target engine needs no marker for its default language, so it is
///   dropped entirely.
/// - the target engine only understands regional bangs, so ISO language
///   codes that differ from their region code get remapped.
///
/// Anything not listed passes through unchanged. New translations belong
/// here, not in the parser or serializer.
pub(crate) const BANG_REWRITES: &[(&str, &str)] = &[
    ("en", ""),
    ("ja", "jp"),
];

pub(crate) fn rewrite(bang: &str) -> &str {
    BANG_REWRITES
        .iter()
        .find(|(from, _)| *from == bang)
        .map(|(_, to)| *to)
        .unwrap_or(bang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_applies() {
        for (from, to) in BANG_REWRITES {
            assert_eq!(rewrite(from), *to, "entry {from:?} -> {to:?}");
        }
    }

    #[test]
    fn unknown_bang_passes_through() {
        assert_eq!(rewrite("fr"), "fr");
        assert_eq!(rewrite("maps"), "maps");
    }

    #[test]
    fn empty_bang_passes_through() {
        assert_eq!(rewrite(""), "");
    }

    #[test]
    fn table_has_no_cycles() {
        // Rewriting a replacement must be a no-op, otherwise normalize
        // would not be idempotent.
        for (_, to) in BANG_REWRITES {
            assert_eq!(rewrite(to), *to, "replacement {to:?} maps onward");
        }
    }
}
