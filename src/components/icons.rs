//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as Brand, LuHeart as Wishlist, LuLogOut as Logout, LuMoon as Moon,
        LuSearch as Search, LuShoppingBag as Cart, LuSun as Sun, LuUser as SignIn, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBag as Cart, BsBook as Brand, BsBoxArrowRight as Logout, BsHeart as Wishlist,
        BsMoon as Moon, BsPersonCircle as SignIn, BsSearch as Search, BsSun as Sun,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BRAND, Brand);
themed_icon!(SEARCH, Search);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(WISHLIST, Wishlist);
themed_icon!(CART, Cart);
themed_icon!(SIGN_IN, SignIn);
themed_icon!(LOGOUT, Logout);
themed_icon!(CLOSE, Close);
