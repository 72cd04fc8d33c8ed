//! Shared UI crate for Beelbe. All logic, views and components live here; the
//! `web` and `desktop` crates only provide routing and launch configuration.

pub mod core;
pub mod forms;
pub mod game;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod countdown;
    pub use countdown::Countdown;
}
