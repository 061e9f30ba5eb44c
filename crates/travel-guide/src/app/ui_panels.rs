//! Screens of the application
//!
//! Every function here only reads state and returns the [`UiAction`] the user
//! triggered, if any.

use crate::app::state::{AppState, StatusMessage, UiAction};
use egui::{Color32, CornerRadius, Margin, RichText, Stroke, Ui};
use travel_lib::{Attraction, Catalog, DetailsPayload, ImageRef, Route};

const CARD_IMAGE_HEIGHT: f32 = 200.0;
const DETAILS_IMAGE_HEIGHT: f32 = 300.0;
const BORDER: Stroke = Stroke {
    width: 5.0,
    color: Color32::LIGHT_GRAY,
};

/// Placeholder color for a picture, stable for a given reference
pub fn image_color(image: ImageRef) -> Color32 {
    if image.is_none() {
        return Color32::DARK_GRAY;
    }
    // Golden-ratio steps keep neighbouring ids far apart on the hue wheel.
    let hue = (image.0 as f32 * 0.618_034).fract();
    egui::ecolor::Hsva::new(hue, 0.45, 0.7, 1.0).into()
}

/// Draw the picture area for an attraction (asset loading is not part of the app)
fn image_placeholder(ui: &mut Ui, image: ImageRef, height: f32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, CornerRadius::same(4), image_color(image));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "🏞",
        egui::FontId::proportional(height / 4.0),
        Color32::from_white_alpha(200),
    );
}

/// Title bar with the back and About buttons
pub fn top_bar(ctx: &egui::Context, state: &AppState) -> Option<UiAction> {
    let mut action = None;
    let route = state.current_route();

    egui::TopBottomPanel::top("top_bar")
        .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(Margin::symmetric(12, 10)))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if matches!(route, Route::Details(_)) && ui.button("⬅").on_hover_text("Back").clicked() {
                    action = Some(UiAction::Back);
                }
                let title = match route {
                    Route::List => "Tourist Attractions",
                    Route::Details(_) => "Attraction Details",
                };
                ui.heading(title);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("ℹ").on_hover_text("About (F1)").clicked() {
                        action = Some(UiAction::ToggleAbout);
                    }
                });
            });
        });

    action
}

/// Status line at the bottom, dismissible
pub fn status_bar(ctx: &egui::Context, status: &StatusMessage) -> Option<UiAction> {
    let mut action = None;

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let text = if status.is_error {
                RichText::new(format!("⚠ {}", status.text)).color(ui.visuals().error_fg_color)
            } else {
                RichText::new(&status.text)
            };
            ui.label(text);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✕").clicked() {
                    action = Some(UiAction::DismissStatus);
                }
            });
        });
    });

    action
}

/// The list screen: one card per attraction
pub fn attractions_list(ctx: &egui::Context, catalog: &Catalog) -> Option<UiAction> {
    let mut action = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        if catalog.is_empty() {
            ui.centered_and_justified(|ui| ui.label("No attractions available."));
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, attraction) in catalog.iter().enumerate() {
                    if attraction_item(ui, attraction).clicked() {
                        action = Some(UiAction::Select(index));
                    }
                }
            });
    });

    action
}

fn attraction_item(ui: &mut Ui, attraction: &Attraction) -> egui::Response {
    let frame = egui::Frame::group(ui.style())
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::ZERO)
        .outer_margin(Margin::same(8));

    frame
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            image_placeholder(ui, attraction.image, CARD_IMAGE_HEIGHT);
            egui::Frame::new()
                .inner_margin(Margin::same(16))
                .show(ui, |ui| {
                    ui.label(RichText::new(&attraction.name).size(20.0));
                    ui.label(
                        RichText::new(&attraction.short_description)
                            .size(16.0)
                            .color(Color32::GRAY),
                    );
                });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn bordered(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::new()
        .stroke(BORDER)
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

/// The details screen for the selected attraction
pub fn attraction_details(ctx: &egui::Context, payload: &DetailsPayload) -> Option<UiAction> {
    let mut action = None;

    egui::CentralPanel::default()
        .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(Margin::same(16)))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    egui::Frame::new()
                        .outer_margin(Margin::same(8))
                        .stroke(BORDER)
                        .show(ui, |ui| {
                            image_placeholder(ui, payload.image, DETAILS_IMAGE_HEIGHT);
                        });

                    ui.add_space(32.0);
                    bordered(ui, |ui| {
                        ui.label(RichText::new(&payload.name).size(20.0));
                    });

                    ui.add_space(32.0);
                    bordered(ui, |ui| {
                        ui.label(
                            RichText::new(&payload.short_description)
                                .size(20.0)
                                .italics()
                                .color(Color32::GRAY),
                        );
                    });

                    ui.add_space(16.0);
                    bordered(ui, |ui| {
                        ui.label(RichText::new(&payload.long_description).size(20.0));
                    });

                    ui.add_space(32.0);
                    ui.vertical_centered(|ui| {
                        let button = ui.add_enabled(
                            !payload.map_url.is_empty(),
                            egui::Button::new(RichText::new("View on Map").size(18.0)),
                        );
                        if button.clicked() {
                            action = Some(UiAction::OpenMap(payload.map_url.clone()));
                        }
                    });
                    ui.add_space(16.0);
                });
        });

    action
}

/// About window with build info and the profiling toggle
pub fn about_window(ctx: &egui::Context, open: &mut bool) {
    let mut close_clicked = false;

    egui::Window::new("About")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(open)
        .show(ctx, |ui| {
            ui.heading("Travel Guide");
            ui.label(eframe_entrypoints::short_version_info("Travel Guide"));
            ui.add_space(8.0);

            ui.label("Tap an attraction to see its details, then 'View on Map' to open it.");
            ui.add_space(8.0);

            ui.label(RichText::new("Keyboard Shortcuts").strong());
            ui.label("• Esc - Back to the list");
            ui.label("• F1 - Toggle this window");
            ui.add_space(8.0);

            ui.collapsing("Profiling", |ui| {
                eframe_entrypoints::profiling_ui(ui);
            });
            ui.add_space(12.0);

            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if close_clicked {
        *open = false;
    }
}
