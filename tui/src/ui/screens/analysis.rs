use crossterm::event::KeyCode;
use pricing::{estimate, Engine, Estimate};
use ratatui::{
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::state::model::{Control, QueryDraft};
use crate::ui::{layout, theme::Theme, widgets};

use super::Action;

/// Interactive property analysis. Every input change re-runs the
/// estimator against the shared model; the model itself is never refit.
pub struct AnalysisState {
    engine: &'static Engine,
    draft: QueryDraft,
    selected: usize,
    estimate: Option<Estimate>,
}

impl AnalysisState {
    pub fn new(engine: &'static Engine) -> Self {
        let mut state = Self {
            engine,
            draft: QueryDraft::new(),
            selected: 0,
            estimate: None,
        };
        state.recompute();
        state
    }

    fn selected_control(&self) -> Control {
        Control::ALL[self.selected]
    }

    fn recompute(&mut self) {
        // The draft is clamped by construction, so this only stays None
        // if the boundary validation is somehow violated.
        self.estimate = self
            .draft
            .to_query()
            .map(|query| estimate(self.engine.model(), &query))
            .ok();
    }
}

pub fn handle_key(state: &mut AnalysisState, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            if state.selected > 0 {
                state.selected -= 1;
            }
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            state.selected = (state.selected + 1) % Control::ALL.len();
            Action::None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.draft.adjust(state.selected_control(), -1);
            state.recompute();
            Action::None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.draft.adjust(state.selected_control(), 1);
            state.recompute();
            Action::None
        }
        KeyCode::Char('q') | KeyCode::Esc => Action::Transition(super::Screen::Menu(
            crate::ui::screens::menu::MenuState::new(),
        )),
        _ => Action::None,
    }
}

pub fn draw(f: &mut Frame, state: &AnalysisState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (header_area, body_area, hint_area) = layout::vertical(area);
    let (controls_area, results_area) = layout::body(body_area);

    f.render_widget(widgets::header(state.engine), header_area);
    f.render_widget(
        widgets::controls(&state.draft, state.selected_control()),
        controls_area,
    );

    match &state.estimate {
        Some(est) => {
            let (prices_area, recommendation_area, impacts_area) = layout::results(results_area);
            f.render_widget(widgets::prices(est, state.draft.asking_price), prices_area);
            f.render_widget(widgets::recommendation(est), recommendation_area);
            f.render_widget(widgets::impact_table(est), impacts_area);
        }
        None => {
            f.render_widget(
                Paragraph::new(Span::styled("inputs out of range", Theme::error())),
                results_area,
            );
        }
    }

    f.render_widget(widgets::hints(), hint_area);
}
