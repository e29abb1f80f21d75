// ============================================================================
// État local des vues
// ============================================================================
// Les deux seules cellules d'état des écrans :
// - TabSelector : onglet actif de l'écran Investissement
// - BalanceVisibility : solde masqué ou révélé sur l'écran Accueil
//
// CONCEPT RUST : Transitions infaillibles
// - Aucune méthode ne retourne Result : une affectation ne peut pas échouer
// - &mut self suffit, le borrow checker garantit un seul propriétaire
// ============================================================================

/// Solde affiché tant qu'il n'est pas révélé
pub const MASKED_BALANCE: &str = "₦•••••••";

// ============================================================================
// Onglets de l'écran Investissement
// ============================================================================

/// Onglet de l'écran Investissement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvestmentTab {
    #[default]
    Portfolio,
    Market,
    History,
}

impl InvestmentTab {
    /// Ordre d'affichage dans la barre d'onglets
    pub const ALL: [InvestmentTab; 3] = [
        InvestmentTab::Portfolio,
        InvestmentTab::Market,
        InvestmentTab::History,
    ];

    /// Titre affiché dans la barre d'onglets
    pub fn title(&self) -> &'static str {
        match self {
            InvestmentTab::Portfolio => "My Portfolio",
            InvestmentTab::Market => "Market & Products",
            InvestmentTab::History => "Transaction History",
        }
    }

    /// Position dans `ALL`
    pub fn index(&self) -> usize {
        match self {
            InvestmentTab::Portfolio => 0,
            InvestmentTab::Market => 1,
            InvestmentTab::History => 2,
        }
    }

    /// Onglet suivant (cyclique)
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Onglet précédent (cyclique)
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Sélection de l'onglet actif
///
/// Le graphe d'états est complet : chaque onglet est atteignable depuis
/// n'importe quel autre en une seule sélection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelector {
    active: InvestmentTab,
}

impl TabSelector {
    /// Commence toujours sur le portefeuille
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> InvestmentTab {
        self.active
    }

    /// Remplace l'onglet actif sans condition
    pub fn select_tab(&mut self, tab: InvestmentTab) {
        self.active = tab;
    }

    pub fn next(&mut self) {
        self.select_tab(self.active.next());
    }

    pub fn previous(&mut self) {
        self.select_tab(self.active.previous());
    }

    pub fn is_active(&self, tab: InvestmentTab) -> bool {
        self.active == tab
    }
}

// ============================================================================
// Visibilité du solde
// ============================================================================

/// Drapeau "révéler le solde"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BalanceVisibility {
    revealed: bool,
}

impl BalanceVisibility {
    /// Commence masqué
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Inverse le drapeau
    pub fn toggle(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Chaîne à afficher à la place du solde
    ///
    /// CONCEPT RUST : Lifetime explicite
    /// - Le retour emprunte soit `full`, soit une constante 'static
    /// - Les deux vivent au moins aussi longtemps que `'a`
    pub fn display<'a>(&self, full: &'a str) -> &'a str {
        if self.revealed {
            full
        } else {
            MASKED_BALANCE
        }
    }

    /// Libellé du bouton à côté du solde
    pub fn button_label(&self) -> &'static str {
        if self.revealed {
            "Hide"
        } else {
            "Show"
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "₦1,245,876.50";

    #[test]
    fn test_initial_tab_is_portfolio() {
        assert_eq!(TabSelector::new().active(), InvestmentTab::Portfolio);
    }

    #[test]
    fn test_every_tab_reachable_from_every_tab() {
        for from in InvestmentTab::ALL {
            for to in InvestmentTab::ALL {
                let mut selector = TabSelector::new();
                selector.select_tab(from);
                selector.select_tab(to);
                assert_eq!(selector.active(), to);
            }
        }
    }

    #[test]
    fn test_tab_cycling() {
        let mut selector = TabSelector::new();

        selector.next();
        assert!(selector.is_active(InvestmentTab::Market));
        selector.next();
        assert!(selector.is_active(InvestmentTab::History));
        selector.next();
        assert!(selector.is_active(InvestmentTab::Portfolio));

        selector.previous();
        assert!(selector.is_active(InvestmentTab::History));
    }

    #[test]
    fn test_balance_starts_masked() {
        let visibility = BalanceVisibility::new();
        assert!(!visibility.is_revealed());
        assert_eq!(visibility.display(FULL), MASKED_BALANCE);
        assert_eq!(visibility.button_label(), "Show");
    }

    #[test]
    fn test_toggle_twice_restores_display() {
        let mut visibility = BalanceVisibility::new();
        let before = visibility.display(FULL).to_string();

        visibility.toggle();
        assert_eq!(visibility.display(FULL), FULL);
        assert_eq!(visibility.button_label(), "Hide");

        visibility.toggle();
        assert_eq!(visibility.display(FULL), before);
    }
}
