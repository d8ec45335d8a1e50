use egui::Context;

/// Installs the phosphor icon font used for the menu's back and sub-menu
/// markers.
pub fn setup_fonts(ctx: &Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}
