// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// CONCEPTS RUST :
// 1. State Management : centraliser l'état dans une seule structure
// 2. Mutabilité contrôlée : &mut self pour modifier l'état
// 3. Composition : chaque écran possède sa propre cellule d'état
//
// PATTERN : "Application State"
// - Tous les composants de l'UI lisent depuis App (&App)
// - Toutes les modifications passent par les méthodes de App
// - Les données affichées sont chargées une fois et jamais modifiées
// ============================================================================

use crate::models::{HomeData, InvestmentData};
use crate::state::{BalanceVisibility, InvestmentTab, TabSelector};

// ============================================================================
// Enum : Screen
// ============================================================================
// CONCEPT RUST : Enums pour state machines
// - Un seul écran visible à la fois
// - Changer d'écran ne touche pas à l'état de l'autre écran
// ============================================================================

/// Écrans de l'application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// "Investment Center" : portefeuille, produits, historique
    #[default]
    Investment,

    /// "Dashboard" : solde, taux de change, transactions, virement
    Home,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Investment => "Investment Center",
            Screen::Home => "Dashboard",
        }
    }
}

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Écran actuellement affiché
    pub current_screen: Screen,

    /// Onglet actif de l'écran Investissement
    pub tabs: TabSelector,

    /// Solde masqué ou révélé sur l'écran Accueil
    pub balance: BalanceVisibility,

    /// Données de l'écran Investissement (immuables)
    pub investment: InvestmentData,

    /// Données de l'écran Accueil (immuables)
    pub home: HomeData,

    /// Indique si l'utilisateur a demandé à quitter (attend confirmation)
    /// CONCEPT : Two-step quit pour éviter les sorties accidentelles
    /// - Première pression de 'q' : confirm_quit = true
    /// - Deuxième pression de 'q' : running = false (quit réel)
    /// - N'importe quelle autre touche : confirm_quit = false (annulation)
    pub confirm_quit: bool,
}

impl App {
    /// Crée l'application sur l'écran par défaut (Investissement)
    pub fn new(investment: InvestmentData, home: HomeData) -> Self {
        Self::with_screen(investment, home, Screen::default())
    }

    /// Crée l'application sur un écran donné
    pub fn with_screen(investment: InvestmentData, home: HomeData, screen: Screen) -> Self {
        Self {
            running: true,
            current_screen: screen,
            tabs: TabSelector::new(),
            balance: BalanceVisibility::new(),
            investment,
            home,
            confirm_quit: false,
        }
    }

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    // ========================================================================
    // Navigation entre écrans
    // ========================================================================

    pub fn show_investment(&mut self) {
        self.current_screen = Screen::Investment;
    }

    pub fn show_home(&mut self) {
        self.current_screen = Screen::Home;
    }

    pub fn is_on_investment(&self) -> bool {
        self.current_screen == Screen::Investment
    }

    pub fn is_on_home(&self) -> bool {
        self.current_screen == Screen::Home
    }

    // ========================================================================
    // Écran Investissement
    // ========================================================================

    pub fn select_tab(&mut self, tab: InvestmentTab) {
        self.tabs.select_tab(tab);
    }

    pub fn next_tab(&mut self) {
        self.tabs.next();
    }

    pub fn previous_tab(&mut self) {
        self.tabs.previous();
    }

    pub fn active_tab(&self) -> InvestmentTab {
        self.tabs.active()
    }

    // ========================================================================
    // Écran Accueil
    // ========================================================================

    pub fn toggle_balance(&mut self) {
        self.balance.toggle();
    }

    /// Solde tel qu'il doit être affiché (masqué ou complet)
    pub fn displayed_balance(&self) -> &str {
        self.balance.display(&self.home.account.full_balance)
    }

    // ========================================================================
    // Confirmation de quit
    // ========================================================================

    /// Demande la confirmation de quitter (première pression de 'q')
    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    /// Annule la demande de quit
    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    /// Vérifie si on attend la confirmation de quit
    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::provider::{load_home, load_investment, SampleProvider};
    use crate::state::MASKED_BALANCE;

    /// App chargée avec les données d'exemple (partagée avec les tests UI)
    pub(crate) fn sample_app() -> App {
        let provider = SampleProvider::new();
        App::new(
            load_investment(&provider).unwrap(),
            load_home(&provider).unwrap(),
        )
    }

    #[test]
    fn test_app_creation() {
        let app = sample_app();
        assert!(app.is_running());
        assert!(app.is_on_investment());
        assert_eq!(app.active_tab(), InvestmentTab::Portfolio);
        assert_eq!(app.displayed_balance(), MASKED_BALANCE);
    }

    #[test]
    fn test_app_quit() {
        let mut app = sample_app();
        app.quit();
        assert!(!app.is_running());
    }

    #[test]
    fn test_screen_switch_keeps_view_state() {
        let mut app = sample_app();

        app.select_tab(InvestmentTab::History);
        app.show_home();
        app.toggle_balance();
        assert_eq!(app.displayed_balance(), "₦1,245,876.50");

        app.show_investment();
        assert_eq!(app.active_tab(), InvestmentTab::History);

        app.show_home();
        assert_eq!(app.displayed_balance(), "₦1,245,876.50");
    }

    #[test]
    fn test_quit_confirmation() {
        let mut app = sample_app();
        assert!(!app.is_awaiting_quit_confirmation());

        app.request_quit();
        assert!(app.is_awaiting_quit_confirmation());

        app.cancel_quit();
        assert!(!app.is_awaiting_quit_confirmation());
        assert!(app.is_running());
    }
}
