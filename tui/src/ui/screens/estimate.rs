use crossterm::event::KeyCode;
use estimator::Session;
use ratatui::{
    widgets::{Block, ListState},
    Frame,
};

use crate::{
    state::form::{Field, FormState},
    ui::{layout, theme::Theme, widgets},
};

use super::{menu::MenuState, Action, Screen};

const OVERVIEW_ROWS: usize = 10;
const PAGE: f64 = 10.0;

pub struct EstimateState {
    pub form: FormState,
}

impl EstimateState {
    pub fn new(form: FormState) -> Self {
        Self { form }
    }
}

pub fn handle_key(state: &mut EstimateState, key: KeyCode, session: &Session) -> Action {
    let form = &mut state.form;
    let inputs = &session.config().inputs;

    match key {
        KeyCode::Esc | KeyCode::Char('q') => {
            return Action::Transition(Screen::Menu(MenuState::new()));
        }
        KeyCode::Tab => form.focus_next(),
        KeyCode::BackTab => form.focus_prev(),
        KeyCode::Up | KeyCode::Char('k') if form.focus == Field::Region => {
            form.move_region(-1, session.regions().len())
        }
        KeyCode::Down | KeyCode::Char('j') if form.focus == Field::Region => {
            form.move_region(1, session.regions().len())
        }
        KeyCode::Right | KeyCode::Char('l') => form.adjust(inputs, 1.0),
        KeyCode::Left | KeyCode::Char('h') => form.adjust(inputs, -1.0),
        KeyCode::PageUp => form.adjust(inputs, PAGE),
        KeyCode::PageDown => form.adjust(inputs, -PAGE),
        KeyCode::Enter => form.submit(session),
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, state: &EstimateState, session: &Session) {
    let form = &state.form;
    let inputs = &session.config().inputs;

    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (header, body, hint) = layout::vertical(area);
    let (left, right) = layout::body(body);
    let (regions, area_slider, age_slider) = layout::inputs(left);
    let (estimate, overview, events) = layout::outputs(right);

    f.render_widget(widgets::header(session.report()), header);

    let mut list_state = ListState::default();
    list_state.select(Some(form.region));
    f.render_stateful_widget(
        widgets::regions(session.regions(), form.focus == Field::Region),
        regions,
        &mut list_state,
    );

    f.render_widget(
        widgets::slider("Area", "m²", form.area, &inputs.area, form.focus == Field::Area),
        area_slider,
    );
    f.render_widget(
        widgets::slider("Age", "years", form.age, &inputs.age, form.focus == Field::Age),
        age_slider,
    );

    f.render_widget(widgets::outcome(form.outcome.as_ref()), estimate);
    f.render_widget(widgets::overview(session.overview(OVERVIEW_ROWS)), overview);
    f.render_widget(widgets::logs(&form.logs), events);
    f.render_widget(widgets::hint(), hint);
}
