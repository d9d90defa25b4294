use egui::{Frame, Margin, Ui};
use userboard_business::User;

/// Address and company summary of the expanded user, below the table.
pub fn render_details(ui: &mut Ui, user: &User) {
    ui.add_space(8.0);
    Frame::group(ui.style())
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.strong(format!("Details: {}", user.name));
            ui.label(format!("Address: {}", user.address.one_line()));
            ui.label(format!("Company: {}", user.company.summary()));
        });
}
