// ============================================================================
// Gestion des événements
// ============================================================================
// Gère les événements clavier et les ticks de l'application
//
// CONCEPTS RUST :
// 1. Enums avec variants : représenter différents types d'événements
// 2. Pattern matching avec guards : router chaque touche selon l'écran
// 3. Error handling avec Result
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use tracing::{debug, info};

use crate::app::App;
use crate::state::InvestmentTab;

/// Événements de l'application
#[derive(Debug, Clone)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Tick régulier (aucun événement pendant le délai de poll)
    Tick,
}

/// Gestionnaire d'événements
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Crée un gestionnaire avec un poll de 250ms
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
        }
    }

    /// Lit le prochain événement (bloquant avec timeout)
    ///
    /// CONCEPT : Non-blocking I/O avec timeout
    /// - poll(timeout) attend au plus `tick_rate`
    /// - Si pas d'événement, retourne Ok(Event::Tick)
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Sur certains OS, on reçoit Press ET Release
                // On ne garde que Press pour éviter les doublons
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),

                // Resize, souris, Release : simple redessin
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helpers : Convertir KeyEvent en action
// ============================================================================

/// Code de la touche, si c'est un événement clavier
fn key_code(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(key) => Some(key.code),
        Event::Tick => None,
    }
}

/// Vérifie si l'événement est la touche 'q' (quitter)
pub fn is_quit_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('q') | KeyCode::Char('Q')))
}

/// Vérifie si l'événement est Échap
pub fn is_escape_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Esc))
}

/// 'i' : écran Investissement
pub fn is_investment_screen_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('i') | KeyCode::Char('I')))
}

/// 'h' : écran Accueil
pub fn is_home_screen_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('h') | KeyCode::Char('H')))
}

/// Tab ou flèche droite : onglet suivant
pub fn is_next_tab_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Tab | KeyCode::Right))
}

/// Shift+Tab ou flèche gauche : onglet précédent
pub fn is_previous_tab_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::BackTab | KeyCode::Left))
}

/// '1', '2', '3' : sélection directe d'un onglet
pub fn tab_from_event(event: &Event) -> Option<InvestmentTab> {
    match key_code(event)? {
        KeyCode::Char('1') => Some(InvestmentTab::Portfolio),
        KeyCode::Char('2') => Some(InvestmentTab::Market),
        KeyCode::Char('3') => Some(InvestmentTab::History),
        _ => None,
    }
}

/// 'b' ou Espace : afficher/masquer le solde
pub fn is_toggle_balance_event(event: &Event) -> bool {
    matches!(
        key_code(event),
        Some(KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Char(' '))
    )
}

// ============================================================================
// Traitement des événements
// ============================================================================

/// Traite un événement et met à jour l'état de l'application
///
/// CONCEPT RUST : Pattern matching avec guards
/// - Chaque guard combine la touche et l'écran courant
/// - La première branche qui matche gagne
/// - Toute touche autre que 'q' annule une demande de quit en attente
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(_) if is_quit_event(&event) => {
            if app.is_awaiting_quit_confirmation() {
                info!("User confirmed quit");
                app.quit();
            } else {
                info!("User requested quit (awaiting confirmation)");
                app.request_quit();
            }
        }

        Event::Key(_) if is_escape_event(&event) => {
            app.cancel_quit();
        }

        // Navigation entre écrans
        Event::Key(_) if is_investment_screen_event(&event) => {
            app.cancel_quit();
            debug!("User opened investment screen");
            app.show_investment();
        }
        Event::Key(_) if is_home_screen_event(&event) => {
            app.cancel_quit();
            debug!("User opened home screen");
            app.show_home();
        }

        // Onglets (seulement sur l'écran Investissement)
        Event::Key(_) if app.is_on_investment() && tab_from_event(&event).is_some() => {
            app.cancel_quit();
            if let Some(tab) = tab_from_event(&event) {
                app.select_tab(tab);
                info!(tab = ?tab, "Tab selected");
            }
        }
        Event::Key(_) if app.is_on_investment() && is_next_tab_event(&event) => {
            app.cancel_quit();
            app.next_tab();
            info!(tab = ?app.active_tab(), "Tab selected");
        }
        Event::Key(_) if app.is_on_investment() && is_previous_tab_event(&event) => {
            app.cancel_quit();
            app.previous_tab();
            info!(tab = ?app.active_tab(), "Tab selected");
        }

        // Solde (seulement sur l'écran Accueil)
        Event::Key(_) if app.is_on_home() && is_toggle_balance_event(&event) => {
            app.cancel_quit();
            app.toggle_balance();
            info!(revealed = app.balance.is_revealed(), "Balance visibility toggled");
        }

        Event::Key(_) => {
            // Toute autre touche : annule la confirmation si active
            app.cancel_quit();
        }

        Event::Tick => {}
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_app;
    use crate::state::MASKED_BALANCE;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_is_quit_event() {
        assert!(is_quit_event(&key(KeyCode::Char('q'))));
        assert!(!is_quit_event(&key(KeyCode::Char('a'))));
        assert!(!is_quit_event(&Event::Tick));
    }

    #[test]
    fn test_tab_keys() {
        assert_eq!(tab_from_event(&key(KeyCode::Char('1'))), Some(InvestmentTab::Portfolio));
        assert_eq!(tab_from_event(&key(KeyCode::Char('3'))), Some(InvestmentTab::History));
        assert_eq!(tab_from_event(&key(KeyCode::Char('4'))), None);
        assert!(is_next_tab_event(&key(KeyCode::Tab)));
        assert!(is_previous_tab_event(&key(KeyCode::BackTab)));
    }

    #[test]
    fn test_two_step_quit() {
        let mut app = sample_app();

        handle_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.is_running());
        assert!(app.is_awaiting_quit_confirmation());

        handle_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.is_running());
    }

    #[test]
    fn test_other_key_cancels_quit() {
        let mut app = sample_app();

        handle_event(&mut app, key(KeyCode::Char('q')));
        handle_event(&mut app, key(KeyCode::Char('x')));
        assert!(!app.is_awaiting_quit_confirmation());

        handle_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.is_running());
    }

    #[test]
    fn test_tab_selection_by_key() {
        let mut app = sample_app();

        handle_event(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.active_tab(), InvestmentTab::Market);

        handle_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.active_tab(), InvestmentTab::History);

        handle_event(&mut app, key(KeyCode::Left));
        assert_eq!(app.active_tab(), InvestmentTab::Market);
    }

    #[test]
    fn test_keys_are_scoped_to_their_screen() {
        let mut app = sample_app();

        // Espace sur l'écran Investissement : le solde ne bouge pas
        handle_event(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.displayed_balance(), MASKED_BALANCE);

        // '3' sur l'écran Accueil : l'onglet ne bouge pas
        handle_event(&mut app, key(KeyCode::Char('h')));
        handle_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.active_tab(), InvestmentTab::Portfolio);

        handle_event(&mut app, key(KeyCode::Char('b')));
        assert_eq!(app.displayed_balance(), "₦1,245,876.50");
    }
}
