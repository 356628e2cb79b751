// src/gui/actions/search.rs
use crate::{
    gui::app::App,
    lookup::{self, PanelChange, SearchFeedback},
};

pub fn search(app: &mut App) {
    let feedback = {
        let gui = &app.state.gui;
        let outcome = lookup::search(&app.dataset, &gui.grade, &gui.id_text);
        SearchFeedback::from_outcome(&outcome)
    };
    apply(app, feedback);
}

fn apply(app: &mut App, feedback: SearchFeedback) {
    app.clear_errors();
    for e in feedback.errors {
        app.show_error(e);
    }

    match feedback.panel {
        PanelChange::Show(card) => {
            logf!("Search: Showing card rows={} total={}", card.rows.len(), card.total.final_text());
            app.status(format!("Result: {}", card.name));
            app.show_card(card);
        }
        PanelChange::Hide => app.hide_card(),
        PanelChange::Keep => {}
    }
}
