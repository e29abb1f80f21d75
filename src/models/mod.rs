// ============================================================================
// Module : models
// ============================================================================
// Ce module contient toutes les structures de données de l'application
//
// CONCEPT RUST : Modules et visibilité
// - "pub mod" : déclare un sous-module public (accessible depuis l'extérieur)
// - Sans "pub", le module serait privé au crate
// ============================================================================

pub mod transaction; // Type de transaction partagé par les deux écrans
pub mod investment;  // Écran Investissement (portefeuille, produits, historique)
pub mod banking;     // Écran Accueil (solde, taux, virement)

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use arigopay::models::investment::InvestmentProduct;
// On peut faire : use arigopay::models::InvestmentProduct;
pub use transaction::TransactionType;
pub use investment::{
    allocation_color, allocation_total, AllocationSlice, Holding, InvestmentData,
    InvestmentProduct, InvestmentTransaction, PerformancePoint, Portfolio, ProductType, RiskLevel,
    SummaryCard, Tone, ALLOCATION_COLORS,
};
pub use banking::{
    AccountSummary, BankTransaction, Banking, ExchangeRate, HomeData, QuickAction, TransferForm,
    Trend,
};
