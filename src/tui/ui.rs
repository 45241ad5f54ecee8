use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::ItemList;
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Span;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, list_area, input_area] = layout.areas(frame.area());

    // Title bar
    let counts = format!("{} open / {} total", app.open_count(), app.items.len());
    let title_text = if app.status_message.is_empty() {
        format!("Jot ({})", counts)
    } else {
        format!("Jot ({}) | {}", counts, app.status_message)
    };
    frame.render_widget(Span::raw(title_text), title_area);

    // Checklist body
    let focused = matches!(tui.input_mode, InputMode::List);
    ItemList::new(&app.items, &mut tui.item_list, focused).render(frame, list_area);

    // Input area
    tui.input_box.render(frame, input_area);
}
