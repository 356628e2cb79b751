// src/gui/actions/print.rs
use crate::{gui::app::App, print};

pub fn print(app: &mut App) {
    let Some(shown) = app.card.as_ref() else {
        logd!("Print: Clicked, but there's no card on screen");
        app.status("Nothing to print");
        return;
    };

    let msg = match print::print_card(&shown.card, app.state.options.export.out_dir()) {
        Ok(path) => format!("Sent to print: {}", path.display()),
        Err(e) => {
            loge!("Print: Error: {}", e);
            format!("Print error: {e}")
        }
    };
    app.status(msg);
}
