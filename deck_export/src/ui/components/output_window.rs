use eframe::egui;

/// Read-only text window with a copy button, used for the missing-card report
pub struct OutputWindow<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub show: &'a mut bool,
}

impl<'a> OutputWindow<'a> {
    pub fn new(title: &'a str, content: &'a str, show: &'a mut bool) -> Self {
        Self {
            title,
            content,
            show,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        egui::Window::new(self.title)
            .default_size([360.0, 420.0])
            .collapsible(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(ui.available_height() - 40.0)
                    .show(ui, |ui| {
                        ui.label(self.content);
                    });

                ui.horizontal(|ui| {
                    if ui.button("Close").clicked() {
                        *self.show = false;
                    }
                    if ui.button("Copy").clicked() {
                        ui.ctx().copy_text(self.content.to_string());
                    }
                });
            });
    }
}
