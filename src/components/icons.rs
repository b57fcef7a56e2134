//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.

use icondata::Icon;

use crate::config::IconTheme;

mod lucide {
    pub use icondata::{LuExternalLink as ExternalLink, LuSearch as Search, LuX as Close};
}

mod bootstrap {
    pub use icondata::{BsBoxArrowUpRight as ExternalLink, BsSearch as Search, BsXLg as Close};
}

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(SEARCH, Search);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
