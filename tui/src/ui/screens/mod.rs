pub mod estimate;
pub mod menu;

use crossterm::event::KeyCode;
use estimator::Session;
use ratatui::Frame;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

pub enum Screen {
    Menu(menu::MenuState),
    Estimate(estimate::EstimateState),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame, session: &Session) {
        match self {
            Screen::Menu(s) => menu::draw(f, s),
            Screen::Estimate(s) => estimate::draw(f, s, session),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, session: &Session) -> Action {
        match self {
            Screen::Menu(s) => menu::handle_key(s, key, session),
            Screen::Estimate(s) => estimate::handle_key(s, key, session),
        }
    }
}
