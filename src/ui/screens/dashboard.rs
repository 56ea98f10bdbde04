use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::summary::{BudgetTier, CategoryTotal};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

const BAR_WIDTH: u16 = 10;
const BAR_GAP: u16 = 1;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Summary cards
            Constraint::Min(10),   // Breakdown + budgets
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_expense_chart(f, lower[0], app);
    render_budget_overview(f, lower[1], app);
}

fn titled_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let totals = &app.summary.totals;
    let income_count = app.transactions().iter().filter(|t| t.is_income()).count();
    let expense_count = app.transactions().iter().filter(|t| t.is_expense()).count();
    let positive = totals.net >= Decimal::ZERO;

    render_card(
        f,
        cards[0],
        "Total Income",
        format_amount(totals.income, &app.currency),
        theme::GREEN,
        format!("{income_count} txns"),
    );
    render_card(
        f,
        cards[1],
        "Total Expenses",
        format_amount(totals.expenses, &app.currency),
        theme::RED,
        format!("{expense_count} txns"),
    );
    render_card(
        f,
        cards[2],
        "Net Income",
        format_amount(totals.net, &app.currency),
        if positive { theme::GREEN } else { theme::RED },
        format!(
            "{} cash flow",
            if positive { "Positive" } else { "Negative" }
        ),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    display: String,
    color: ratatui::style::Color,
    subtitle: String,
) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            display,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(titled_block(title));

    f.render_widget(text, area);
}

fn render_expense_chart(f: &mut Frame, area: Rect, app: &App) {
    let chart_data = &app.summary.chart;
    if chart_data.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No expense data to display",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(titled_block("Expense Breakdown"));
        f.render_widget(msg, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2);
    let fits = ((inner_width + BAR_GAP) / (BAR_WIDTH + BAR_GAP)).max(1) as usize;

    let bars: Vec<Bar> = chart_bars(chart_data, fits)
        .into_iter()
        .enumerate()
        .map(|(i, (label, total))| {
            let color = theme::chart_color(i);
            Bar::default()
                .value(total.round().to_u64().unwrap_or(0))
                .text_value(format_amount(total, &app.currency))
                .label(Line::from(truncate(&label, BAR_WIDTH as usize)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(titled_block("Expense Breakdown"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP);

    f.render_widget(chart, area);
}

/// At most `max` bars. When there are more categories than that, the
/// smallest ones are folded into a trailing `Other (N)` bar.
pub(crate) fn chart_bars(chart: &[CategoryTotal], max: usize) -> Vec<(String, Decimal)> {
    let max = max.max(1);
    if chart.len() <= max {
        return chart
            .iter()
            .map(|c| (c.category.clone(), c.total))
            .collect();
    }

    let (shown, rest) = chart.split_at(max - 1);
    let mut bars: Vec<(String, Decimal)> = shown
        .iter()
        .map(|c| (c.category.clone(), c.total))
        .collect();
    let other = rest
        .iter()
        .fold(Decimal::ZERO, |acc, c| acc.saturating_add(c.total));
    bars.push((format!("Other ({})", rest.len()), other));
    bars
}

fn render_budget_overview(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .summary
        .budgets
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|status| {
            let color = theme::tier_color(status.tier);
            let marker = if status.tier == BudgetTier::Over { "! " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme::RED)),
                Span::styled(
                    format!("{:<15}", truncate(&status.category, 14)),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!("{:>7}", format!("{:.1}%", status.percentage)),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(titled_block("Budget Overview")), area);
}
