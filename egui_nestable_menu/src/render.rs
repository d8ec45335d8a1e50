use egui::{Button, Response, Ui};
use nestable_menu::{MenuOption, MenuView};

use crate::style::MenuStyle;

/// Raw interaction collected while drawing one frame of the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Select {
        group_index: usize,
        item_index: usize,
    },
    Back,
}

/// Render the visible part of a menu.
/// Returns the event the user triggered this frame, if any.
pub fn show_menu_contents(
    ui: &mut Ui,
    view: &MenuView<'_>,
    style: &MenuStyle,
) -> Option<MenuEvent> {
    let mut event = None;

    if let Some(title) = view.breadcrumb_title {
        if sub_menu_title(ui, title, style).clicked() {
            event = Some(MenuEvent::Back);
        }
        ui.separator();
    }

    let mut first_group = true;
    for (group_index, group) in view.visible_options.iter().enumerate() {
        if group.is_empty() {
            continue;
        }
        if !first_group {
            ui.separator();
        }
        first_group = false;
        for (item_index, option) in group.iter().enumerate() {
            if menu_item(ui, option, style).clicked() {
                event = Some(MenuEvent::Select {
                    group_index,
                    item_index,
                });
            }
        }
    }

    event
}

/// Back control followed by the breadcrumb title. Returns the back button's
/// response.
pub fn sub_menu_title(ui: &mut Ui, title: &str, style: &MenuStyle) -> Response {
    ui.horizontal(|ui| {
        let back = ui
            .add(Button::new(style.back_icon.as_str()))
            .on_hover_text("Back");
        ui.label(style.title(title));
        back
    })
    .inner
}

/// One option: clickable label, sub-menu marker and optional subtext.
pub fn menu_item(ui: &mut Ui, option: &MenuOption, style: &MenuStyle) -> Response {
    ui.vertical(|ui| {
        let response = ui
            .horizontal(|ui| {
                let response = ui.add(Button::new(style.item_label(option.label())));
                if option.has_children() {
                    ui.label(egui::RichText::new(style.submenu_icon.as_str()).weak());
                }
                response
            })
            .inner;
        if let Some(subtext) = option.subtext() {
            ui.label(style.subtext(subtext));
        }
        response
    })
    .inner
}
