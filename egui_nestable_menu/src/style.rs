//! Styling pass-through for the menu. None of it affects navigation.

use egui::RichText;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuStyle {
    /// Minimum popup width in points.
    pub min_width: f32,
    /// Item label size; `None` keeps the theme's body size.
    pub item_label_size: Option<f32>,
    /// Subtext size; `None` uses the theme's small text.
    pub subtext_size: Option<f32>,
    pub title_size: f32,
    /// Icon drawn after the button label.
    pub button_icon: Option<String>,
    /// Text of the back control shown next to the breadcrumb title.
    pub back_icon: String,
    /// Marker drawn after items that open a sub-menu.
    pub submenu_icon: String,
    /// Fade-out length in seconds. The navigation path is reset once it ends.
    pub exit_duration: f32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            min_width: 180.0,
            item_label_size: None,
            subtext_size: None,
            title_size: 15.0,
            button_icon: None,
            back_icon: "⏴".to_string(),
            submenu_icon: "⏵".to_string(),
            exit_duration: 0.15,
        }
    }
}

impl MenuStyle {
    pub(crate) fn item_label(&self, label: &str) -> RichText {
        let text = RichText::new(label);
        match self.item_label_size {
            Some(size) => text.size(size),
            None => text,
        }
    }

    pub(crate) fn subtext(&self, subtext: &str) -> RichText {
        let text = RichText::new(subtext).weak();
        match self.subtext_size {
            Some(size) => text.size(size),
            None => text.small(),
        }
    }

    pub(crate) fn title(&self, title: &str) -> RichText {
        RichText::new(title).size(self.title_size).strong()
    }
}
