use eframe::egui::{self, Visuals};
use egui_nestable_menu::NestableMenuButton;
use log::error;
use nestable_menu::{ActionRegistry, MenuNavigator};

use crate::activity::{self, ActivityLog};
use crate::config::{self, MenuConfig};
use crate::utils;

pub struct MenuDemoApp {
    settings_menu: NestableMenuButton,
    activity: ActivityLog,
}

impl MenuDemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(Visuals::dark());
        utils::setup_fonts(&cc.egui_ctx);
        Self::from_config(config::load_config())
    }

    pub fn from_config(config: MenuConfig) -> Self {
        let activity = ActivityLog::default();
        let actions = activity::demo_actions(&activity);
        let navigator = build_navigator(&config, &actions);
        Self {
            settings_menu: NestableMenuButton::new(config.button_label, navigator)
                .with_style(config.style),
            activity,
        }
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Nestable menu");
            self.settings_menu.show(ui);
        });
        ui.separator();

        let entries = self.activity.entries();
        if entries.is_empty() {
            ui.weak("Pick an option from the menu.");
        }
        for entry in entries.iter().rev() {
            ui.label(entry);
        }
    }
}

/// Falls back to the built-in menu, then to an empty one, if the configured
/// menu cannot be built.
fn build_navigator(config: &MenuConfig, actions: &ActionRegistry) -> MenuNavigator {
    MenuNavigator::from_definition(&config.options, actions)
        .or_else(|e| {
            error!("Invalid menu in config, using the default menu: {}", e);
            MenuNavigator::from_definition(&config::default_options(), actions)
        })
        .unwrap_or_else(|e| {
            error!("Default menu is invalid: {}", e);
            MenuNavigator::default()
        })
}

impl eframe::App for MenuDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| self.ui(ui));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::kittest::Queryable;
    use egui_kittest::Harness;
    use nestable_menu::{OptionDef, OptionsDef};

    fn harness(mut app: MenuDemoApp) -> Harness<'static> {
        Harness::builder()
            .with_size(egui::vec2(640.0, 480.0))
            .build_ui(move |ui| app.ui(ui))
    }

    fn instant_config() -> MenuConfig {
        let mut config = MenuConfig::default();
        config.style.exit_duration = 0.0;
        config.style.button_icon = None;
        config
    }

    #[test]
    fn shows_hint_before_any_action() {
        let harness = harness(MenuDemoApp::from_config(instant_config()));
        assert!(harness.query_by_label("Settings").is_some());
        assert!(harness.query_by_label("Pick an option from the menu.").is_some());
    }

    #[test]
    fn nested_action_is_logged() {
        let mut harness = harness(MenuDemoApp::from_config(instant_config()));

        harness.get_by_label("Settings").click();
        harness.run();
        harness.get_by_label("Privacy and safety").click();
        harness.run();
        harness.get_by_label("Personal Data").click();
        harness.run();
        harness.get_by_label("Cookies").click();
        harness.run();

        assert!(harness.query_by_label("Cleared cookies").is_some());
        assert!(harness.query_by_label("Personal Data").is_none());
    }

    #[test]
    fn invalid_config_menu_falls_back_to_default() {
        let mut config = instant_config();
        config.options = OptionsDef::Flat(vec![
            OptionDef::new("Broken")
                .with_action("log-out")
                .with_children(OptionsDef::Flat(vec![OptionDef::new("Child")])),
        ]);
        let mut harness = harness(MenuDemoApp::from_config(config));

        harness.get_by_label("Settings").click();
        harness.run();

        assert!(harness.query_by_label("Broken").is_none());
        assert!(harness.query_by_label("Log Out").is_some());
    }
}
