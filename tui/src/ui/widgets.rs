use estimator::{configs::SliderConfig, synthetic::Listing, FitReport};
use ratatui::{
    layout::Constraint,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table, Wrap},
};

use crate::state::form::{LogLine, Outcome};

use super::theme::Theme;

fn panel(title: &str, focused: bool) -> Block<'static> {
    let border = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {title} "))
        .title_style(Theme::title())
}

pub fn header(report: FitReport) -> Paragraph<'static> {
    let line1 = Line::from(vec![
        Span::styled("House Price Estimator", Theme::title()),
        Span::styled("  |  linear regression on a synthetic market", Theme::dim()),
    ]);

    let line2 = Line::from(Span::styled(
        format!(
            "samples: {}  |  columns: {}  |  mse: {:.2}  |  r²: {:.4}",
            report.samples, report.columns, report.mse, report.r2
        ),
        Theme::text(),
    ));

    Paragraph::new(vec![line1, line2])
        .block(panel("Model", false))
        .wrap(Wrap { trim: true })
}

pub fn regions<'a>(regions: &'a [String], focused: bool) -> List<'a> {
    let items: Vec<ListItem> = regions
        .iter()
        .map(|r| ListItem::new(r.as_str()).style(Theme::text()))
        .collect();

    List::new(items)
        .block(panel("Region", focused))
        .highlight_style(Theme::highlight())
        .highlight_symbol("▶ ")
}

pub fn slider<'a>(
    title: &'a str,
    unit: &str,
    value: f64,
    cfg: &SliderConfig,
    focused: bool,
) -> Gauge<'a> {
    let span = cfg.max - cfg.min;
    let ratio = if span > 0.0 {
        ((value - cfg.min) / span).clamp(0.0, 1.0)
    } else {
        1.0
    };

    Gauge::default()
        .block(panel(title, focused))
        .gauge_style(Theme::gauge())
        .ratio(ratio)
        .label(format!("{value:.0} {unit}  ({:.0}..{:.0})", cfg.min, cfg.max))
}

pub fn outcome(outcome: Option<&Outcome>) -> Paragraph<'static> {
    let lines = match outcome {
        None => vec![Line::from(Span::styled(
            "press enter to estimate the price",
            Theme::muted(),
        ))],
        Some(Outcome::Estimate(estimate)) => {
            let request = &estimate.request;
            vec![
                Line::from(vec![
                    Span::styled("region: ", Theme::dim()),
                    Span::styled(request.region.clone(), Theme::text()),
                    Span::styled(
                        format!(
                            "  |  area: {:.0} m²  |  age: {:.0} years",
                            request.area, request.age
                        ),
                        Theme::dim(),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("estimated total: {:.2} x10k CNY", estimate.price),
                    Theme::ok(),
                )),
                Line::from(Span::styled(
                    format!("about {:.0} CNY per m²", estimate.unit_price),
                    Theme::text(),
                )),
            ]
        }
        Some(Outcome::Rejected(reason)) => vec![
            Line::from(Span::styled("request rejected", Theme::error())),
            Line::from(Span::styled(reason.clone(), Theme::text())),
        ],
    };

    Paragraph::new(lines)
        .block(panel("Estimate", false))
        .wrap(Wrap { trim: true })
}

pub fn overview(listings: &[Listing]) -> Table<'static> {
    let header = Row::new(vec!["region", "area m²", "age", "price x10k"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = listings
        .iter()
        .map(|l| {
            Row::new(vec![
                Cell::from(l.region.clone()),
                Cell::from(format!("{:.0}", l.area)),
                Cell::from(format!("{:.0}", l.age)),
                Cell::from(format!("{:.2}", l.price)),
            ])
            .style(Theme::text())
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(panel("Market overview", false))
}

pub fn logs(logs: &[LogLine]) -> Paragraph<'_> {
    let tail = logs.iter().rev().take(4).rev();

    let lines = tail
        .map(|l| {
            let style = if l.level == "ERROR" {
                Theme::error()
            } else {
                Theme::dim()
            };
            Line::from(vec![
                Span::styled(format!("[{}] ", l.level), style),
                Span::styled(l.message.as_str(), Theme::text()),
            ])
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(panel("Events", false))
        .wrap(Wrap { trim: true })
}

pub fn hint() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("tab", Theme::dim()),
        Span::styled("  next input    ", Theme::muted()),
        Span::styled("↑↓ ←→", Theme::dim()),
        Span::styled("  change    ", Theme::muted()),
        Span::styled("pgup/pgdn", Theme::dim()),
        Span::styled("  ×10    ", Theme::muted()),
        Span::styled("enter", Theme::dim()),
        Span::styled("  estimate    ", Theme::muted()),
        Span::styled("esc", Theme::dim()),
        Span::styled("  menu", Theme::muted()),
    ]))
}
