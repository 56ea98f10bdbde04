use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::summary::{BudgetStatus, BudgetTier};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.summary.budgets.is_empty() {
        render_empty(f, area);
        return;
    }

    let items: Vec<ListItem> = app
        .summary
        .budgets
        .iter()
        .enumerate()
        .skip(app.budget_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, status)| {
            let color = theme::tier_color(status.tier);
            let style = if i == app.budget_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let marker = if status.tier == BudgetTier::Over { "! " } else { "  " };
            let display_name = truncate(&status.category, 15);

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme::RED)),
                Span::styled(format!("{display_name:<16}"), style),
                Span::styled(
                    format!(
                        "{} / {} ",
                        format_amount(status.spent, &app.currency),
                        format_amount(status.limit, &app.currency)
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(progress_bar(status.percentage, 20), Style::default().fg(color)),
                Span::styled(
                    format!(" {:.1}% used  ", status.percentage),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(headroom_text(status, &app.currency), theme::dim_style()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Budget Overview ", theme::title_style())),
    );
    f.render_widget(list, area);
}

/// `"$200.00 remaining"` or `"$50.00 over budget"`.
pub(crate) fn headroom_text(status: &BudgetStatus, currency: &str) -> String {
    if status.tier == BudgetTier::Over {
        format!("{} over budget", format_amount(status.overage(), currency))
    } else {
        format!("{} remaining", format_amount(status.remaining(), currency))
    }
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No budget limits configured",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Budget Overview ", theme::title_style())),
    );
    f.render_widget(msg, area);
}
