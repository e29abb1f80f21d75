// ============================================================================
// Structures : écran Accueil (banque)
// ============================================================================
// Enregistrements du tableau de bord "Dashboard" : solde, taux de change,
// transactions récentes, actions rapides et formulaire de virement
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::TransactionType;

/// Tendance d'un taux de change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Flèche affichée à côté du taux
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

/// Taux de change affiché (ex: "1 USD = 1,200 NGN")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub currency: String,
    pub rate: String,
    pub trend: Trend,
}

/// Transaction récente du compte courant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub name: String,
    pub amount: String,

    /// Date d'affichage (ex: "Today, 10:45 AM")
    pub date: String,
}

/// Action rapide (purement décorative)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAction {
    pub label: String,

    /// Classes de couleur (ex: "bg-indigo-100 text-indigo-600")
    pub color: String,
}

impl QuickAction {
    /// Teinte du texte, extraite de la classe "text-<teinte>-<nuance>"
    ///
    /// Un nom de teinte seul ("indigo") est accepté tel quel.
    pub fn tint(&self) -> &str {
        let class = self
            .color
            .split_whitespace()
            .find_map(|class| class.strip_prefix("text-"))
            .unwrap_or(self.color.trim());

        // "indigo-600" → "indigo"
        class.split('-').next().unwrap_or(class)
    }
}

/// Solde et libellé du compte
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Solde complet, affiché seulement quand il est révélé
    pub full_balance: String,

    /// Compte masqué (ex: "Arigo Pay •••• 4567")
    pub account_label: String,
}

/// Formulaire de virement statique
///
/// Les champs sont affichés mais ne capturent aucune saisie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferForm {
    pub from_accounts: Vec<String>,
    pub beneficiaries: Vec<String>,
    pub amount_placeholder: String,
    pub narration_placeholder: String,
    pub fee: String,
}

/// Données du compte courant, telles que livrées par un fournisseur
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banking {
    pub account: AccountSummary,
    pub quick_actions: Vec<QuickAction>,
    pub transactions: Vec<BankTransaction>,
    pub transfer: TransferForm,
}

/// Tout ce que l'écran Accueil affiche
#[derive(Debug, Clone, PartialEq)]
pub struct HomeData {
    pub account: AccountSummary,
    pub quick_actions: Vec<QuickAction>,
    pub rates: Vec<ExchangeRate>,
    pub transactions: Vec<BankTransaction>,
    pub transfer: TransferForm,
}

impl HomeData {
    /// Assemble l'écran à partir du compte et des taux
    pub fn new(banking: Banking, rates: Vec<ExchangeRate>) -> Self {
        Self {
            account: banking.account,
            quick_actions: banking.quick_actions,
            rates,
            transactions: banking.transactions,
            transfer: banking.transfer,
        }
    }
}
