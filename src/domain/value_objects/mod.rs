//! Value objects - Immutable objects defined by their attributes

mod classification;
mod ids;
mod style_context;
mod teaser;

pub use classification::Classification;
#[allow(unused_imports)]
pub use ids::{InvalidSessionId, SessionId, MAX_SESSION_ID_CHARS};
#[allow(unused_imports)]
pub use style_context::{palette_for_mood, StyleContext, DARK_PALETTE, NATURAL_PALETTE};
#[allow(unused_imports)]
pub use teaser::{Teaser, TeaserError, MAX_TEASER_WORDS, MIN_TEASER_CHARS};
