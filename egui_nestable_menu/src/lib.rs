//! egui presentation for drill-down menus.
//!
//! [`NestableMenuButton`] owns a [`nestable_menu::MenuNavigator`], draws its
//! current view in a popup and forwards clicks back into it. The navigation
//! rules themselves live in `nestable_menu`.

pub mod button;
pub mod render;
pub mod style;

pub use button::NestableMenuButton;
pub use render::{MenuEvent, menu_item, show_menu_contents, sub_menu_title};
pub use style::MenuStyle;
