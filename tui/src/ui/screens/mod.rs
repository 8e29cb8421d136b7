pub mod analysis;
pub mod menu;

use crossterm::event::KeyCode;
use pricing::Engine;
use ratatui::Frame;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

pub enum Screen {
    Menu(menu::MenuState),
    Analysis(analysis::AnalysisState),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Menu(s) => menu::draw(f, s),
            Screen::Analysis(s) => analysis::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, engine: &'static Engine) -> Action {
        match self {
            Screen::Menu(s) => menu::handle_key(s, key, engine),
            Screen::Analysis(s) => analysis::handle_key(s, key),
        }
    }
}
