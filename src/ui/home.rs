// ============================================================================
// Écran Accueil - "Dashboard"
// ============================================================================
// Solde (masqué ou révélé), actions rapides, taux de change, transactions
// récentes et formulaire de virement.
//
// Seul le solde dépend de l'état : tout le reste est un rendu pur des
// enregistrements chargés au démarrage. Les champs du formulaire et les
// boutons sont des libellés, sans saisie ni action.
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::{BankTransaction, ExchangeRate, HomeData, QuickAction, TransferForm, Trend};
use crate::ui::dashboard::{inert, section_block, ACCENT};

/// Dessine l'écran Accueil dans la zone donnée
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // En-tête + recherche
            Constraint::Length(6), // Solde
            Constraint::Length(3), // Actions rapides
            Constraint::Min(7),    // Taux + transactions
            Constraint::Length(8), // Virement
        ])
        .split(area)
        .to_vec();

    render_header(frame, chunks[0]);
    render_account(frame, app, chunks[1]);
    render_quick_actions(frame, &app.home.quick_actions, chunks[2]);
    render_activity(frame, &app.home, chunks[3]);
    render_transfer(frame, &app.home.transfer, chunks[4]);
}

// ============================================================================
// En-tête et solde
// ============================================================================

fn render_header(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(40)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Dashboard",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(ACCENT)));
    frame.render_widget(title, columns[0]);

    // Champ de recherche : affiché, jamais actif
    let search = Paragraph::new(Span::styled(
        "Search transactions...",
        Style::default().fg(Color::DarkGray),
    ))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(search, columns[1]);
}

fn render_account(frame: &mut Frame, app: &App, area: Rect) {
    let account = &app.home.account;

    let text = vec![
        Line::from(Span::styled("Total Balance", Style::default().fg(Color::Gray))),
        Line::from(vec![
            Span::styled(
                app.displayed_balance().to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", app.balance.button_label()),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(account.account_label.clone(), Style::default().fg(Color::Gray))),
        Line::from(inert("Copy Account No.")),
    ];

    frame.render_widget(Paragraph::new(text).block(section_block("Account")), area);
}

// ============================================================================
// Actions rapides
// ============================================================================

/// Teinte terminal d'une action rapide
pub fn action_color(action: &QuickAction) -> Color {
    match action.tint() {
        "indigo" => Color::Blue,
        "emerald" => Color::Green,
        "violet" => Color::Magenta,
        "amber" => Color::Yellow,
        _ => Color::Gray,
    }
}

fn render_quick_actions(frame: &mut Frame, actions: &[QuickAction], area: Rect) {
    if actions.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = actions
        .iter()
        .map(|_| Constraint::Ratio(1, actions.len() as u32))
        .collect();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (action, column) in actions.iter().zip(columns.iter()) {
        let color = action_color(action);
        let paragraph = Paragraph::new(Span::styled(
            action.label.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));

        frame.render_widget(paragraph, *column);
    }
}

// ============================================================================
// Taux de change et transactions récentes
// ============================================================================

/// Ligne d'un taux de change : devise, taux, flèche de tendance
pub fn rate_line(rate: &ExchangeRate) -> Line<'static> {
    let trend_color = match rate.trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
    };

    Line::from(vec![
        Span::styled(
            format!("{:<5}", rate.currency),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(rate.rate.clone(), Style::default().fg(Color::Gray)),
        Span::raw(" "),
        Span::styled(rate.trend.arrow(), Style::default().fg(trend_color)),
    ])
}

/// Ligne d'une transaction récente : libellé, date, montant coloré
pub fn bank_transaction_line(transaction: &BankTransaction) -> Line<'static> {
    let amount_color = if transaction.kind.is_inflow() {
        Color::Green
    } else {
        Color::Red
    };

    Line::from(vec![
        Span::styled(
            format!("{:<22}", transaction.name),
            Style::default().fg(Color::White),
        ),
        Span::styled(format!("{:<22}", transaction.date), Style::default().fg(Color::Gray)),
        Span::styled(
            transaction.amount.clone(),
            Style::default().fg(amount_color).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_activity(frame: &mut Frame, home: &HomeData, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(area);

    // Taux : une ligne par enregistrement, puis le bouton inerte
    let mut rate_items: Vec<ListItem> = home.rates.iter().map(|r| ListItem::new(rate_line(r))).collect();
    rate_items.push(ListItem::new(Line::from(inert("View All Rates"))));
    frame.render_widget(List::new(rate_items).block(section_block("Exchange Rates")), columns[0]);

    let transaction_items: Vec<ListItem> = home
        .transactions
        .iter()
        .map(|t| ListItem::new(bank_transaction_line(t)))
        .collect();
    let block = section_block("Recent Transactions").title(
        Title::from(Line::from(vec![inert("View All"), Span::raw(" ")])).alignment(Alignment::Right),
    );
    frame.render_widget(List::new(transaction_items).block(block), columns[1]);
}

// ============================================================================
// Virement
// ============================================================================

/// Ligne "libellé : valeur" d'un champ du formulaire
fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<11}", label), Style::default().fg(Color::Gray)),
        Span::styled(format!("[ {} ▾ ]", value), Style::default().fg(Color::White)),
    ])
}

fn render_transfer(frame: &mut Frame, form: &TransferForm, area: Rect) {
    let block = section_block("Transfer Money");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(30),
            Constraint::Percentage(25),
        ])
        .split(inner);

    // Un select affiche sa première option
    let first = |options: &[String]| options.first().cloned().unwrap_or_default();

    let accounts = Paragraph::new(vec![
        field_line("From", &first(&form.from_accounts)),
        Line::from(""),
        field_line("To", &first(&form.beneficiaries)),
    ]);
    frame.render_widget(accounts, columns[0]);

    let inputs = Paragraph::new(vec![
        field_line("Amount", &form.amount_placeholder),
        Line::from(""),
        field_line("Narration", &form.narration_placeholder),
    ]);
    frame.render_widget(inputs, columns[1]);

    let send = Paragraph::new(vec![
        Line::from(Span::styled("Transfer Fee", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            form.fee.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(inert("Send Money")),
    ]);
    frame.render_widget(send, columns[2]);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_app;
    use crate::state::MASKED_BALANCE;
    use crate::ui::dashboard::tests::render_to_text;

    const FULL: &str = "₦1,245,876.50";

    fn home_text(app: &App) -> String {
        render_to_text(app, 140, 50)
    }

    #[test]
    fn test_mask_applies_to_account_panel_only() {
        let mut app = sample_app();
        app.show_home();
        let text = home_text(&app);

        assert!(text.contains(MASKED_BALANCE));
        assert!(text.contains("[Show]"));

        // Le panneau du compte n'affiche que le masque...
        let account = text.find("Total Balance").expect("account panel missing");
        let transfer = text.find("Transfer Money").expect("transfer panel missing");
        assert!(!text[account..transfer].contains(FULL));

        // ...alors que l'option "From" du virement reste littérale
        assert!(text[transfer..].contains("Arigo Pay Account (₦1,245,876.50)"));
        assert_eq!(text.matches(FULL).count(), 1);
    }

    #[test]
    fn test_balance_revealed_then_masked_again() {
        let mut app = sample_app();
        app.show_home();
        let masked = home_text(&app);

        app.toggle_balance();
        let revealed = home_text(&app);
        assert!(!revealed.contains(MASKED_BALANCE));
        assert!(revealed.contains("[Hide]"));
        assert_eq!(revealed.matches(FULL).count(), 2);

        app.toggle_balance();
        assert_eq!(home_text(&app), masked);
    }

    #[test]
    fn test_transactions_in_literal_order() {
        let mut app = sample_app();
        app.show_home();
        let text = home_text(&app);

        let positions: Vec<usize> = app
            .home
            .transactions
            .iter()
            .map(|t| text.find(t.name.as_str()).expect("transaction row missing"))
            .collect();
        assert_eq!(positions.len(), 3);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_static_panels_present() {
        let mut app = sample_app();
        app.show_home();
        let text = home_text(&app);

        for label in ["Send Money", "Pay with QR", "Add Beneficiary", "Currency Swap"] {
            assert!(text.contains(label), "missing {}", label);
        }
        assert!(text.contains("1 EUR = 1,350 NGN"));
        assert!(text.contains("Arigo Pay •••• 4567"));
        assert!(text.contains("₦50.00"));
    }

    #[test]
    fn test_quick_action_colors_follow_class() {
        let app = sample_app();
        let colors: Vec<Color> = app.home.quick_actions.iter().map(action_color).collect();
        assert_eq!(colors, vec![Color::Blue, Color::Green, Color::Magenta, Color::Yellow]);
    }

    #[test]
    fn test_rate_line_arrow() {
        let app = sample_app();
        let line = rate_line(&app.home.rates[1]);
        let text: String = line.spans.iter().map(|s| s.content.to_string()).collect();
        assert!(text.starts_with("EUR"));
        assert!(text.ends_with("▼"));
    }
}
