// TUI components
//
// Each component exposes `render(f, area, app)` and reads what it needs
// from `App`.

pub mod filter_bar;
pub mod logs_panel;
pub mod status_bar;
pub mod table_panel;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
