// ============================================================================
// SnapshotProvider : document JSON local
// ============================================================================
// Charge les mêmes enregistrements que SampleProvider depuis un fichier JSON.
// Aucun appel réseau : le document est lu une fois, puis cloné à la demande.
//
// Format attendu :
// {
//   "portfolio": { "summary": [...], "allocations": [...], "performance": [...], "holdings": [...] },
//   "products": [...],
//   "transactions": [...],
//   "rates": [...],
//   "banking": { "account": {...}, "quickActions": [...], "transactions": [...], "transfer": {...} }
// }
// ============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::models::{Banking, ExchangeRate, InvestmentProduct, InvestmentTransaction, Portfolio};

use super::DataProvider;

/// Document JSON complet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub portfolio: Portfolio,
    pub products: Vec<InvestmentProduct>,
    pub transactions: Vec<InvestmentTransaction>,
    pub rates: Vec<ExchangeRate>,
    pub banking: Banking,
}

impl Snapshot {
    /// Capture tout ce qu'un fournisseur expose
    pub fn capture(provider: &dyn DataProvider) -> Result<Self> {
        Ok(Self {
            portfolio: provider.portfolio().context("Chargement du portefeuille")?,
            products: provider.products().context("Chargement des produits")?,
            transactions: provider
                .investment_history()
                .context("Chargement de l'historique")?,
            rates: provider.rates().context("Chargement des taux de change")?,
            banking: provider.banking().context("Chargement du compte")?,
        })
    }
}

/// Fournisseur adossé à un document JSON
#[derive(Debug, Clone)]
pub struct SnapshotProvider {
    snapshot: Snapshot,
}

impl SnapshotProvider {
    /// Parse un document JSON déjà en mémoire
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(json).context("Document JSON invalide")?;

        Ok(Self { snapshot })
    }

    /// Lit et parse un fichier JSON
    #[instrument]
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Lecture impossible de {}", path.display()))?;

        let provider = Self::from_json(&json)
            .with_context(|| format!("Snapshot invalide : {}", path.display()))?;

        info!(
            products = provider.snapshot.products.len(),
            rates = provider.snapshot.rates.len(),
            "Snapshot loaded"
        );

        Ok(provider)
    }
}

impl DataProvider for SnapshotProvider {
    fn name(&self) -> &str {
        "snapshot"
    }

    fn portfolio(&self) -> Result<Portfolio> {
        Ok(self.snapshot.portfolio.clone())
    }

    fn products(&self) -> Result<Vec<InvestmentProduct>> {
        Ok(self.snapshot.products.clone())
    }

    fn investment_history(&self) -> Result<Vec<InvestmentTransaction>> {
        Ok(self.snapshot.transactions.clone())
    }

    fn rates(&self) -> Result<Vec<ExchangeRate>> {
        Ok(self.snapshot.rates.clone())
    }

    fn banking(&self) -> Result<Banking> {
        Ok(self.snapshot.banking.clone())
    }
}
