// ============================================================================
// Module : provider
// ============================================================================
// Sources de données des deux écrans
//
// CONCEPT RUST : Trait comme point de jonction
// - Les écrans ne savent pas d'où viennent leurs enregistrements
// - SampleProvider : enregistrements littéraux compilés dans le binaire
// - SnapshotProvider : mêmes formes, lues depuis un document JSON local
// ============================================================================

pub mod sample;   // Données d'exemple littérales
pub mod snapshot; // Document JSON local

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::models::{
    Banking, ExchangeRate, HomeData, InvestmentData, InvestmentProduct, InvestmentTransaction,
    Portfolio,
};

pub use sample::SampleProvider;
pub use snapshot::SnapshotProvider;

/// Fournisseur des enregistrements affichés
///
/// Chaque méthode retourne une copie possédée : les écrans ne partagent
/// rien avec le fournisseur après le chargement.
pub trait DataProvider {
    /// Nom court pour les logs
    fn name(&self) -> &str;

    /// Synthèse, allocation, performance et positions
    fn portfolio(&self) -> Result<Portfolio>;

    /// Catalogue de produits
    fn products(&self) -> Result<Vec<InvestmentProduct>>;

    /// Historique des transactions d'investissement
    fn investment_history(&self) -> Result<Vec<InvestmentTransaction>>;

    /// Taux de change
    fn rates(&self) -> Result<Vec<ExchangeRate>>;

    /// Compte courant : solde, actions rapides, transactions, virement
    fn banking(&self) -> Result<Banking>;
}

/// Assemble les données de l'écran Investissement
#[instrument(skip_all, fields(provider = provider.name()))]
pub fn load_investment(provider: &dyn DataProvider) -> Result<InvestmentData> {
    let portfolio = provider.portfolio().context("Chargement du portefeuille")?;
    let products = provider.products().context("Chargement des produits")?;
    let transactions = provider
        .investment_history()
        .context("Chargement de l'historique")?;

    debug!(
        allocations = portfolio.allocations.len(),
        holdings = portfolio.holdings.len(),
        products = products.len(),
        transactions = transactions.len(),
        "Investment data loaded"
    );

    Ok(InvestmentData {
        portfolio,
        products,
        transactions,
    })
}

/// Assemble les données de l'écran Accueil
#[instrument(skip_all, fields(provider = provider.name()))]
pub fn load_home(provider: &dyn DataProvider) -> Result<HomeData> {
    let banking = provider.banking().context("Chargement du compte")?;
    let rates = provider.rates().context("Chargement des taux de change")?;

    info!(
        rates = rates.len(),
        transactions = banking.transactions.len(),
        "Home data loaded"
    );

    Ok(HomeData::new(banking, rates))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_sample() {
        let provider = SampleProvider::new();

        let investment = load_investment(&provider).unwrap();
        assert_eq!(investment.products.len(), 4);
        assert_eq!(investment.transactions.len(), 3);

        let home = load_home(&provider).unwrap();
        assert_eq!(home.rates.len(), 3);
        assert_eq!(home.account.full_balance, "₦1,245,876.50");
    }
}
