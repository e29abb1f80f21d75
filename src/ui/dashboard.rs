// ============================================================================
// Dashboard - Routage et éléments communs
// ============================================================================
// Choisit l'écran à dessiner et fournit les morceaux partagés :
// layout principal, footer des raccourcis, libellés inertes
//
// CONCEPTS RATATUI :
// 1. Frame : surface de dessin
// 2. Layout : découpage de l'espace en zones
// 3. Style : couleurs et attributs de texte
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Screen};
use crate::ui::{home, investment};

/// Couleur principale des bordures
pub const ACCENT: Color = Color::Cyan;

/// Dessine l'interface complète
///
/// CONCEPT RUST : Routing avec match sur enum
/// - Le compilateur garantit que chaque écran est géré
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = create_layout(frame.size());

    match app.current_screen {
        Screen::Investment => investment::render(frame, app, chunks[0]),
        Screen::Home => home::render(frame, app, chunks[0]),
    }

    render_footer(frame, app, chunks[1]);
}

/// Crée le layout principal (contenu, footer)
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Écran courant
            Constraint::Length(3), // Footer : 3 lignes
        ])
        .split(area)
        .to_vec()
}

// ============================================================================
// Helpers partagés
// ============================================================================

/// Block standard avec bordures et titre
pub fn section_block(title: &str) -> Block<'static> {
    titled_block(Line::from(Span::styled(
        format!(" {} ", title),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
}

/// Block avec un titre composé (ex: titre + boutons inertes)
pub fn titled_block(title: Line<'static>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(title)
}

/// Libellé d'un bouton sans action (ex: "[Export]")
///
/// Affiché en gris pour le distinguer des raccourcis actifs.
pub fn inert(label: &str) -> Span<'static> {
    Span::styled(format!("[{}]", label), Style::default().fg(Color::DarkGray))
}

/// Style d'un raccourci clavier dans le footer
fn key_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

// ============================================================================
// Footer : Instructions
// ============================================================================

/// Dessine le footer avec les raccourcis clavier
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    let shortcuts = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled("⚠  Appuyez sur ", key_style(Color::Yellow)),
            Span::styled(
                "[q]",
                key_style(Color::Red).add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                " à nouveau pour quitter, ou n'importe quelle autre touche pour annuler ⚠",
                key_style(Color::Yellow),
            ),
        ])
    } else {
        let mut spans = vec![
            Span::styled(app.current_screen.title(), key_style(ACCENT)),
            Span::raw("  |  "),
            Span::styled("[q]", key_style(Color::Yellow)),
            Span::raw(" Quit  "),
            Span::styled("[i]", key_style(Color::Yellow)),
            Span::raw(" Investment  "),
            Span::styled("[h]", key_style(Color::Yellow)),
            Span::raw(" Home  "),
        ];

        match app.current_screen {
            Screen::Investment => spans.extend([
                Span::styled("[1 2 3]", key_style(Color::Green)),
                Span::raw(" Tab  "),
                Span::styled("[←→ / Tab]", key_style(Color::Green)),
                Span::raw(" Cycle"),
            ]),
            Screen::Home => spans.extend([
                Span::styled("[b / Space]", key_style(Color::Green)),
                Span::raw(format!(" {} balance", app.balance.button_label())),
            ]),
        }

        Line::from(spans)
    };

    let paragraph = Paragraph::new(vec![shortcuts])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::app::tests::sample_app;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    /// Dessine l'app sur un terminal virtuel et retourne le texte affiché
    pub(crate) fn render_to_text(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    /// Texte du buffer, une ligne par rangée
    pub(crate) fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    /// Trois dernières lignes : le footer
    fn footer_text(app: &App) -> String {
        let text = render_to_text(app, 140, 50);
        let lines: Vec<&str> = text.lines().collect();
        lines[lines.len() - 3..].join("\n")
    }

    #[test]
    fn test_footer_follows_screen() {
        let mut app = sample_app();
        let footer = footer_text(&app);
        assert!(footer.contains("Investment Center"));
        assert!(footer.contains("Cycle"));

        app.show_home();
        let footer = footer_text(&app);
        assert!(footer.contains("Dashboard"));
        assert!(footer.contains("Show balance"));
        assert!(!footer.contains("Investment Center"));
    }

    #[test]
    fn test_footer_quit_confirmation() {
        let mut app = sample_app();
        app.request_quit();
        let text = render_to_text(&app, 140, 50);
        assert!(text.contains("pour quitter"));
    }
}
