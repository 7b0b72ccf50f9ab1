use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};

use crate::action::{ActionRequestQueue, ConfirmKind, UiAction};

struct DialogResult {
    should_close: bool,
}

fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> DialogResult
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });

    DialogResult {
        should_close: modal.should_close(),
    }
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

struct ConfirmDialogSpec {
    id: Id,
    heading: &'static str,
    label: &'static str,
    confirm_label: &'static str,
}

impl ConfirmKind {
    fn spec(self) -> ConfirmDialogSpec {
        match self {
            ConfirmKind::ClearAll => ConfirmDialogSpec {
                id: Id::new("clear_all_confirm"),
                heading: "Erase All Letters?",
                label: "Every letter in the grid will be removed. This cannot be undone.",
                confirm_label: "🗑 Erase all",
            },
        }
    }
}

pub(crate) fn show_confirm(ctx: &Context, action_queue: &mut ActionRequestQueue, kind: ConfirmKind) {
    let spec = kind.spec();
    let DialogResult { should_close } = show_dialog(
        ctx,
        spec.id,
        spec.heading,
        |ui: &mut Ui| {
            ui.label(spec.label);
        },
        |ui: &mut Ui| {
            let confirm = ui.button(spec.confirm_label);
            request_focus_if_none(ui, &confirm);
            if confirm.clicked() {
                action_queue.request(kind.confirmed_action());
                ui.close();
            }

            if ui.button("✖ Cancel").clicked() {
                ui.close();
            }
        },
    );

    if should_close {
        action_queue.request(UiAction::CloseModal.into());
    }
}
