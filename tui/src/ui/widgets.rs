use ratatui::{
    layout::Constraint,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use pricing::{format_brl, Engine, Estimate, Recommendation, FEATURES, RECORDS};

use crate::state::model::{Control, QueryDraft};
use crate::ui::theme::Theme;

const SLIDER_WIDTH: usize = 22;

pub fn header(engine: &Engine) -> Paragraph<'static> {
    let line1 = Line::from(vec![
        Span::styled("Real Estate Analysis", Theme::title()),
        Span::raw("  |  "),
        Span::styled("fair price vs asking price", Theme::dim()),
    ]);

    let line2 = Line::from(Span::styled(
        format!(
            "OLS over {} simulated records  |  {} features  |  intercept {}",
            RECORDS,
            FEATURES.len(),
            format_brl(engine.model().intercept()),
        ),
        Theme::muted(),
    ));

    Paragraph::new(vec![line1, line2])
        .block(Block::default().borders(Borders::ALL).title("Overview"))
        .wrap(Wrap { trim: true })
}

pub fn controls(draft: &QueryDraft, selected: Control) -> Paragraph<'static> {
    let mut lines: Vec<Line> = Vec::new();

    for control in Control::ALL {
        let is_selected = control == selected;
        let (prefix, style) = if is_selected {
            ("▶ ", Theme::selected())
        } else {
            ("  ", Theme::dim())
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(control.label().to_string(), style),
            Span::raw("  "),
            Span::styled(value_text(draft, control), Theme::text()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", slider_text(draft, control)),
            if is_selected { Theme::text() } else { Theme::muted() },
        )));
        lines.push(Line::from(""));
    }

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Property"))
        .wrap(Wrap { trim: false })
}

pub fn prices(estimate: &Estimate, asking_price: f64) -> Paragraph<'static> {
    let lines = vec![
        Line::from(vec![
            Span::styled("Reported Asking Price      ", Theme::dim()),
            Span::styled(format_brl(asking_price), Theme::title()),
        ]),
        Line::from(vec![
            Span::styled("Fair Price (model)         ", Theme::dim()),
            Span::styled(format_brl(estimate.predicted_price), Theme::title()),
        ]),
    ];

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Price Analysis"))
        .wrap(Wrap { trim: true })
}

pub fn recommendation(estimate: &Estimate) -> Paragraph<'static> {
    let tone = match estimate.recommendation {
        Recommendation::Opportunity => Theme::ok(),
        Recommendation::Overpriced => Theme::error(),
        Recommendation::Aligned => Theme::info(),
    };

    let message = estimate.recommendation.message(estimate.difference);

    Paragraph::new(Line::from(Span::styled(message, tone)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Investment Suggestion")
                .border_style(tone),
        )
        .wrap(Wrap { trim: true })
}

pub fn impact_table(estimate: &Estimate) -> Table<'static> {
    let header = Row::new(vec!["Feature", "Estimated Impact"]).style(Theme::title());

    let rows = estimate
        .impacts
        .iter()
        .map(|impact| {
            Row::new(vec![
                Cell::from(impact.label),
                Cell::from(impact.text.clone()),
            ])
        })
        .collect::<Vec<_>>();

    Table::new(rows, [Constraint::Length(30), Constraint::Min(24)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Statistical Influence of Features"),
        )
}

pub fn hints() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("↑↓ / tab", Theme::dim()),
        Span::styled("  select    ", Theme::muted()),
        Span::styled("←→ / h l", Theme::dim()),
        Span::styled("  adjust    ", Theme::muted()),
        Span::styled("q / esc", Theme::dim()),
        Span::styled("  back", Theme::muted()),
    ]))
}

fn value_text(draft: &QueryDraft, control: Control) -> String {
    match control {
        Control::Area => format!("{:.0} sqm", draft.area),
        Control::Bedrooms => format!("{}", draft.bedrooms),
        Control::Distance => format!("{:.1} km", draft.distance),
        Control::AskingPrice => format_brl(draft.asking_price),
    }
}

fn slider_text(draft: &QueryDraft, control: Control) -> String {
    let (value, min, max) = match control {
        Control::Area => (draft.area, FEATURES[0].min, FEATURES[0].max),
        Control::Bedrooms => (f64::from(draft.bedrooms), FEATURES[1].min, FEATURES[1].max),
        Control::Distance => (draft.distance, FEATURES[2].min, FEATURES[2].max),
        // Unbounded above; rendered as a plain field.
        Control::AskingPrice => return format!("[{:<width$}]", "+/-", width = SLIDER_WIDTH),
    };

    let ratio = ((value - min) / (max - min)).clamp(0.0, 1.0);
    let filled = (ratio * SLIDER_WIDTH as f64).round() as usize;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(SLIDER_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_fills_proportionally() {
        let mut draft = QueryDraft::new();

        draft.area = FEATURES[0].min;
        assert_eq!(
            slider_text(&draft, Control::Area),
            format!("[{}]", "░".repeat(SLIDER_WIDTH))
        );

        draft.area = FEATURES[0].max;
        assert_eq!(
            slider_text(&draft, Control::Area),
            format!("[{}]", "█".repeat(SLIDER_WIDTH))
        );
    }

    #[test]
    fn value_text_uses_currency_for_the_asking_price() {
        let draft = QueryDraft::new();
        assert_eq!(value_text(&draft, Control::AskingPrice), "R$ 300.000,00");
    }
}
