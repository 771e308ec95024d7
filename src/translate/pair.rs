use std::fmt;

use super::bangs;

/// A raw query decomposed into its search text and optional bang token.
///
/// `bang` is either empty ("no bang") or a single whitespace-free token;
/// the introducing colon is never part of either field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPair {
    pub query: String,
    pub bang: String,
}

/// Splits a raw input string into a [`SearchPair`].
///
/// Returns `None` for empty input — there is nothing to translate and the
/// caller picks the fallback. Every non-empty input parses. The grammar is
/// anchored at the start, first match wins:
///
/// - `": query"` — colon followed by one whitespace character. Habitual
///   stand-in for the old `:en` prefix that also keeps browsers from
///   URL-detecting the input; yields no bang. Leading whitespace of the
///   query is trimmed, trailing is kept.
/// - `":bang query"` — colon followed by a non-whitespace run; the run is
///   the bang, the rest (trimmed on both sides) is the query.
/// - anything else — the whole input is the query. A colon anywhere past
///   position 0, and a lone `":"`, are ordinary query text.
pub fn parse(raw: &str) -> Option<SearchPair> {
    if raw.is_empty() {
        return None;
    }

    if let Some(rest) = raw.strip_prefix(':') {
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => {
                return Some(SearchPair {
                    query: chars.as_str().trim_start().to_string(),
                    bang: String::new(),
                });
            }
            Some(_) => {
                let bang_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                let (bang, tail) = rest.split_at(bang_end);
                return Some(SearchPair {
                    query: tail.trim().to_string(),
                    bang: bang.to_string(),
                });
            }
            None => {}
        }
    }

    Some(SearchPair {
        query: raw.to_string(),
        bang: String::new(),
    })
}

impl SearchPair {
    /// Rewrites the bang through the translation table; the query is left
    /// untouched. Unknown bangs pass through. Idempotent, since no table
    /// entry maps onto another entry's key.
    pub fn normalize(self) -> Self {
        Self {
            bang: bangs::rewrite(&self.bang).to_string(),
            query: self.query,
        }
    }
}

/// Serializes into the target engine's syntax: the bare query when there is
/// no bang, otherwise `!bang query`.
///
/// A query that itself begins with `!` comes out indistinguishable from a
/// bang on the target side. Accepted quirk, deliberately left unescaped.
impl fmt::Display for SearchPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bang.is_empty() {
            write!(f, "{}", self.query)
        } else {
            write!(f, "!{} {}", self.bang, self.query)
        }
    }
}
