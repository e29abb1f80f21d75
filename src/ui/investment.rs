// ============================================================================
// Écran Investissement - "Investment Center"
// ============================================================================
// En-tête, cartes de synthèse, barre d'onglets, puis UN SEUL des trois
// panneaux selon l'onglet actif :
// - Portfolio : allocation, performance, positions
// - Market : catalogue de produits
// - History : transactions d'investissement
//
// CONCEPT RUST : Dispatch par match
// - Le panneau est choisi par un match exhaustif sur InvestmentTab
// - Les deux autres panneaux ne sont jamais dessinés
// ============================================================================

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::{
    Holding, InvestmentData, InvestmentProduct, InvestmentTransaction, ProductType, RiskLevel,
    SummaryCard, Tone,
};
use crate::state::InvestmentTab;
use crate::ui::chart;
use crate::ui::dashboard::{inert, section_block, titled_block, ACCENT};

/// Dessine l'écran Investissement dans la zone donnée
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // En-tête
            Constraint::Length(5), // Cartes de synthèse
            Constraint::Length(3), // Onglets
            Constraint::Min(0),    // Panneau actif
        ])
        .split(area)
        .to_vec();

    render_header(frame, chunks[0]);
    render_summary(frame, &app.investment.portfolio.summary, chunks[1]);
    render_tabs(frame, app.active_tab(), chunks[2]);
    render_panel(frame, app.active_tab(), &app.investment, chunks[3]);
}

/// Dessine le panneau de l'onglet actif, et lui seul
pub fn render_panel(frame: &mut Frame, tab: InvestmentTab, data: &InvestmentData, area: Rect) {
    match tab {
        InvestmentTab::Portfolio => render_portfolio(frame, data, area),
        InvestmentTab::Market => render_market(frame, &data.products, area),
        InvestmentTab::History => render_history(frame, &data.transactions, area),
    }
}

// ============================================================================
// En-tête, synthèse et onglets
// ============================================================================

fn render_header(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![
            Span::styled(
                "Investment Center",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            inert("Notifications"),
            Span::raw(" "),
            Span::styled("John Doe", Style::default().fg(ACCENT)),
        ]),
        Line::from(Span::styled(
            "Manage your investments and explore new opportunities",
            Style::default().fg(Color::Blue),
        )),
    ];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(ACCENT));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_summary(frame: &mut Frame, cards: &[SummaryCard], area: Rect) {
    if cards.is_empty() {
        return;
    }

    // Colonnes de largeur égale, une par carte
    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Ratio(1, cards.len() as u32))
        .collect();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        let value_color = match card.tone {
            Tone::Positive => Color::Green,
            Tone::Neutral => Color::White,
        };

        let text = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default().fg(value_color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.caption.clone(), Style::default().fg(Color::Gray))),
        ];

        let paragraph = Paragraph::new(text).block(section_block(&card.title));
        frame.render_widget(paragraph, *column);
    }
}

fn render_tabs(frame: &mut Frame, active: InvestmentTab, area: Rect) {
    let titles: Vec<Line> = InvestmentTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        )
        .select(active.index())
        .style(Style::default().fg(Color::Blue))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

    frame.render_widget(tabs, area);
}

// ============================================================================
// Panneau : Portfolio
// ============================================================================

fn render_portfolio(frame: &mut Frame, data: &InvestmentData, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(6)])
        .split(area);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    chart::render_allocation(frame, &data.portfolio.allocations, charts[0]);
    chart::render_performance(frame, &data.portfolio.performance, charts[1]);
    render_holdings(frame, &data.portfolio.holdings, rows[1]);
}

/// Cellules d'une ligne "Your Investments"
pub fn holding_cells(holding: &Holding) -> [String; 5] {
    [
        holding.name.clone(),
        holding.kind.clone(),
        holding.value.clone(),
        holding.total_return.clone(),
        "View Details".to_string(),
    ]
}

fn render_holdings(frame: &mut Frame, holdings: &[Holding], area: Rect) {
    let rows: Vec<Row> = holdings
        .iter()
        .map(|holding| {
            let [name, kind, value, total_return, action] = holding_cells(holding);
            Row::new(vec![
                Cell::from(name).style(Style::default().fg(Color::White)),
                Cell::from(kind).style(Style::default().fg(Color::Blue)),
                Cell::from(value),
                Cell::from(total_return).style(Style::default().fg(Color::Green)),
                Cell::from(action).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let title = Line::from(vec![
        Span::styled(" Your Investments ", Style::default().add_modifier(Modifier::BOLD)),
        inert("Add Investment"),
        Span::raw(" "),
    ]);

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Percentage(15),
        ],
    )
    .header(header_row(&["Investment", "Type", "Value", "Return", "Actions"]))
    .block(titled_block(title));

    frame.render_widget(table, area);
}

// ============================================================================
// Panneau : Market & Products
// ============================================================================

/// Cellules d'une ligne "Investment Products"
pub fn product_cells(product: &InvestmentProduct) -> [String; 6] {
    [
        product.name.clone(),
        product.product_type.label().to_string(),
        product.risk.label().to_string(),
        product.annual_return.clone(),
        product.min_investment.clone(),
        "Invest Now".to_string(),
    ]
}

fn product_type_color(product_type: ProductType) -> Color {
    match product_type {
        ProductType::Stock => Color::Blue,
        ProductType::Bond => Color::Green,
        ProductType::Etf => Color::Magenta,
        ProductType::Mixed => Color::Gray,
    }
}

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::High => Color::Red,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::Low => Color::Green,
    }
}

fn render_market(frame: &mut Frame, products: &[InvestmentProduct], area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Bandeau d'information
            Constraint::Min(6),    // Catalogue
            Constraint::Length(3), // Avertissement
        ])
        .split(area);

    let info = Paragraph::new(Line::from(vec![
        Span::styled("i ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Span::raw("Explore our investment products and make informed decisions. Need help? "),
        Span::styled(
            "Schedule a consultation",
            Style::default().add_modifier(Modifier::UNDERLINED),
        ),
        Span::raw(" with our financial advisors."),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(info, chunks[0]);

    let rows: Vec<Row> = products
        .iter()
        .map(|product| {
            let [name, kind, risk, annual_return, min, action] = product_cells(product);
            Row::new(vec![
                Cell::from(name).style(Style::default().fg(Color::White)),
                Cell::from(kind).style(Style::default().fg(product_type_color(product.product_type))),
                Cell::from(risk).style(Style::default().fg(risk_color(product.risk))),
                Cell::from(annual_return).style(Style::default().fg(Color::Green)),
                Cell::from(min),
                Cell::from(action).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let title = Line::from(vec![
        Span::styled(" Investment Products ", Style::default().add_modifier(Modifier::BOLD)),
        inert("Filter"),
        Span::raw(" "),
    ]);

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(12),
            Constraint::Percentage(13),
            Constraint::Percentage(17),
            Constraint::Percentage(18),
            Constraint::Percentage(15),
        ],
    )
    .header(header_row(&[
        "Product",
        "Type",
        "Risk Level",
        "Annual Return",
        "Min. Investment",
        "Action",
    ]))
    .block(titled_block(title));
    frame.render_widget(table, chunks[1]);

    let warning = Paragraph::new(Line::from(vec![
        Span::styled("! ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled(
            "Remember that all investments carry risk. Past performance is not indicative of future results.",
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(warning, chunks[2]);
}

// ============================================================================
// Panneau : Transaction History
// ============================================================================

/// Cellules d'une ligne de l'historique
pub fn investment_transaction_cells(transaction: &InvestmentTransaction) -> [String; 6] {
    [
        format!("{} {}", transaction.date, transaction.time),
        transaction.kind.label().to_string(),
        transaction.investment.clone(),
        transaction.amount.clone(),
        transaction.status.clone(),
        "View Details".to_string(),
    ]
}

fn render_history(frame: &mut Frame, transactions: &[InvestmentTransaction], area: Rect) {
    let rows: Vec<Row> = transactions
        .iter()
        .map(|transaction| {
            let [date, kind, investment, amount, status, action] =
                investment_transaction_cells(transaction);
            Row::new(vec![
                Cell::from(date),
                Cell::from(kind).style(Style::default().fg(Color::Green)),
                Cell::from(investment).style(Style::default().fg(Color::White)),
                Cell::from(amount).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(status).style(Style::default().fg(Color::Blue)),
                Cell::from(action).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let title = Line::from(vec![
        Span::styled(" Transaction History ", Style::default().add_modifier(Modifier::BOLD)),
        inert("Date Range"),
        Span::raw(" "),
        inert("Export"),
        Span::raw(" "),
    ]);

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(22),
            Constraint::Percentage(10),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Percentage(13),
            Constraint::Percentage(15),
        ],
    )
    .header(header_row(&["Date", "Type", "Investment", "Amount", "Status", "Details"]))
    .block(titled_block(title));

    frame.render_widget(table, area);
}

/// Ligne d'en-tête commune aux tableaux
fn header_row(labels: &[&'static str]) -> Row<'static> {
    Row::new(labels.iter().copied())
        .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
        .bottom_margin(1)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_app;
    use crate::ui::dashboard::tests::render_to_text;

    /// Texte qui n'apparaît que dans le panneau de l'onglet
    fn panel_marker(tab: InvestmentTab) -> &'static str {
        match tab {
            InvestmentTab::Portfolio => "Portfolio Allocation",
            InvestmentTab::Market => "Investment Products",
            InvestmentTab::History => "Completed",
        }
    }

    #[test]
    fn test_exactly_one_panel_visible() {
        for tab in InvestmentTab::ALL {
            let mut app = sample_app();
            app.select_tab(tab);
            let text = render_to_text(&app, 140, 50);

            for other in InvestmentTab::ALL {
                assert_eq!(
                    text.contains(panel_marker(other)),
                    other == tab,
                    "tab {:?}, marker {:?}",
                    tab,
                    panel_marker(other)
                );
            }
        }
    }

    #[test]
    fn test_summary_and_tabs_always_visible() {
        let text = render_to_text(&sample_app(), 140, 50);
        assert!(text.contains("Investment Center"));
        assert!(text.contains("$24,500.00"));
        assert!(text.contains("+9.6% overall"));
        for tab in InvestmentTab::ALL {
            assert!(text.contains(tab.title()));
        }
    }

    #[test]
    fn test_product_cells_unmodified_and_ordered() {
        let app = sample_app();
        let cells: Vec<[String; 6]> = app.investment.products.iter().map(product_cells).collect();

        assert_eq!(cells.len(), 4);
        assert_eq!(
            cells[0],
            ["Growth Stock Fund", "Stock", "High", "+12.4%", "$500", "Invest Now"].map(String::from)
        );
        assert_eq!(
            cells[3],
            ["Balanced Portfolio", "Mixed", "Medium", "+8.5%", "$2,000", "Invest Now"]
                .map(String::from)
        );
        let names: Vec<&str> = cells.iter().map(|c| c[0].as_str()).collect();
        assert_eq!(
            names,
            ["Growth Stock Fund", "Income Bond Fund", "Technology ETF", "Balanced Portfolio"]
        );
    }

    #[test]
    fn test_products_rendered_in_order() {
        let mut app = sample_app();
        app.select_tab(InvestmentTab::Market);
        let text = render_to_text(&app, 140, 50);

        let positions: Vec<usize> = app
            .investment
            .products
            .iter()
            .map(|p| text.find(p.name.as_str()).expect("product row missing"))
            .collect();
        assert_eq!(positions.len(), 4);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_history_rows_match_literal_list() {
        let mut app = sample_app();
        app.select_tab(InvestmentTab::History);

        let cells: Vec<[String; 6]> = app
            .investment
            .transactions
            .iter()
            .map(investment_transaction_cells)
            .collect();
        assert_eq!(cells.len(), app.investment.transactions.len());
        assert_eq!(cells[0][0], "Apr 12, 2025 10:24 AM");
        assert_eq!(cells[2][2], "Corporate Bond Fund");

        let text = render_to_text(&app, 140, 50);
        assert_eq!(text.matches("Completed").count(), 3);
        let first = text.find("Apr 12, 2025").unwrap();
        let second = text.find("Mar 10, 2025").unwrap();
        let third = text.find("Feb 22, 2025").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_holdings_cells() {
        let app = sample_app();
        let cells: Vec<[String; 5]> = app.investment.portfolio.holdings.iter().map(holding_cells).collect();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2][1], "Index Fund");
        assert_eq!(cells[0][3], "+16.4%");
    }
}
