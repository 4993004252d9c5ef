pub mod club;
pub mod dump;
pub mod fetch;
pub mod fotbal;
pub mod ident;
pub mod involvement;
pub mod is_portal;
pub mod logo;
pub mod names;
pub mod pipeline;
pub mod reconcile;
pub mod search;
pub mod standings;
pub mod urls;
pub mod util;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use fetch::{HttpFetcher, PageFetcher};
pub use involvement::ClubFilter;
pub use logo::{LogoCache, LogoResolver};
pub use search::{ClubSearch, FotbalSearch};
