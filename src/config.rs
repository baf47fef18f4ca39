mod loader;
mod types;

pub use loader::{default_config_path, load};
pub use types::{
    ClipboardBackend, ClipboardConfig, Config, MarkerRule, SiteConfig, SuggestionsConfig,
    ValidateConfig,
};
