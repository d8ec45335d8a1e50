//! Menu button owning one navigator and its popup.

use egui::{Key, Order, Pos2, Response, Ui};
use log::{debug, error};
use nestable_menu::{MenuNavigator, MenuPhase};

use crate::render::{MenuEvent, show_menu_contents};
use crate::style::MenuStyle;

/// A button that opens a drill-down menu anchored below itself.
///
/// The popup stays on screen while it fades out after a close; the
/// navigator's path is only reset once the fade has finished, so the
/// vanishing menu keeps showing the level the user left it at.
pub struct NestableMenuButton {
    label: String,
    navigator: MenuNavigator,
    style: MenuStyle,
    /// Screen position the popup is pinned to while it is visible.
    anchor: Option<Pos2>,
}

impl NestableMenuButton {
    pub fn new(label: impl Into<String>, navigator: MenuNavigator) -> Self {
        Self {
            label: label.into(),
            navigator,
            style: MenuStyle::default(),
            anchor: None,
        }
    }

    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn navigator(&self) -> &MenuNavigator {
        &self.navigator
    }

    pub fn is_open(&self) -> bool {
        self.navigator.phase() == MenuPhase::Open
    }

    /// Draws the button and, while open or fading out, its popup.
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let id = ui.make_persistent_id(&self.label);
        let button = match &self.style.button_icon {
            Some(icon) => ui.button(format!("{} {}", self.label, icon)),
            None => ui.button(self.label.as_str()),
        };

        if button.clicked() {
            if self.is_open() {
                self.navigator.close();
            } else {
                self.anchor = Some(button.rect.left_bottom());
                self.navigator.open();
            }
        }

        let openness = self.openness(ui, id);
        if self.navigator.phase() == MenuPhase::Closing && openness <= 0.0 {
            self.navigator.on_exit_complete();
            self.anchor = None;
        }

        let Some(anchor) = self.anchor else {
            return button;
        };

        // A fading popup is drawn but no longer takes input.
        let interactive = self.is_open();
        let style = &self.style;
        let navigator = &self.navigator;
        let area = egui::Area::new(id.with("popup"))
            .order(Order::Foreground)
            .fixed_pos(anchor)
            .show(ui.ctx(), |ui| {
                ui.multiply_opacity(openness);
                egui::Frame::menu(ui.style())
                    .show(ui, |ui| {
                        ui.set_min_width(style.min_width);
                        ui.add_enabled_ui(interactive, |ui| {
                            navigator
                                .current_view()
                                .map(|view| show_menu_contents(ui, &view, style))
                        })
                        .inner
                    })
                    .inner
            });

        match area.inner {
            Ok(Some(event)) if interactive => self.handle_event(event),
            Ok(_) => {}
            Err(err) => {
                error!("Closing menu '{}': {}", self.label, err);
                self.navigator.close();
            }
        }

        if self.is_open() {
            let dismissed = ui.input(|i| i.key_pressed(Key::Escape))
                || (area.response.clicked_elsewhere() && !button.clicked());
            if dismissed {
                debug!("Menu '{}' dismissed", self.label);
                self.navigator.close();
            }
        }

        if self.navigator.phase() == MenuPhase::Closing {
            ui.ctx().request_repaint();
        }

        button
    }

    fn handle_event(&mut self, event: MenuEvent) {
        match event {
            MenuEvent::Back => self.navigator.back(),
            MenuEvent::Select {
                group_index,
                item_index,
            } => {
                // Indices come from the view drawn this frame.
                if let Err(err) = self.navigator.select(group_index, item_index) {
                    error!("Menu '{}' rejected a selection: {}", self.label, err);
                }
            }
        }
    }

    fn openness(&self, ui: &Ui, id: egui::Id) -> f32 {
        let visible = self.is_open();
        if self.style.exit_duration <= 0.0 {
            return if visible { 1.0 } else { 0.0 };
        }
        ui.ctx()
            .animate_bool_with_time(id.with("openness"), visible, self.style.exit_duration)
    }
}
