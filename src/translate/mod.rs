//! Query translation: SearXNG-style colon bangs in, Kagi-style `!` bangs out.

mod bangs;
mod pair;

pub use pair::{SearchPair, parse};
