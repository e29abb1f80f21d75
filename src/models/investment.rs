// ============================================================================
// Structures : écran Investissement
// ============================================================================
// Enregistrements affichés par le tableau de bord "Investment Center"
//
// CONCEPTS RUST :
// 1. Enregistrements immuables : construits une fois, jamais modifiés
// 2. Enums typés à la place des chaînes libres (type, risque)
// 3. Serde : noms de champs JSON identiques aux formes d'origine
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::TransactionType;

/// Palette des parts de l'allocation (appliquée par index, modulo la taille)
pub const ALLOCATION_COLORS: [&str; 4] = ["#0070f3", "#38bdf8", "#3b82f6", "#1d4ed8"];

/// Un point de la courbe de performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    /// Libellé court du mois (ex: "Jan")
    pub month: String,

    /// Valeur du portefeuille pour ce mois
    pub value: f64,
}

impl PerformancePoint {
    pub fn new(month: &str, value: f64) -> Self {
        Self {
            month: month.to_string(),
            value,
        }
    }
}

/// Une part de l'allocation du portefeuille
///
/// La valeur est un pourcentage non validé : rien ne garantit que
/// la somme des parts fasse 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub name: String,
    pub value: f64,
}

impl AllocationSlice {
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }

    /// Libellé affiché sous la barre (ex: "Stocks 45%")
    pub fn label(&self) -> String {
        format!("{} {:.0}%", self.name, self.value)
    }
}

/// Couleur hexadécimale de la part à l'index donné
pub fn allocation_color(index: usize) -> &'static str {
    ALLOCATION_COLORS[index % ALLOCATION_COLORS.len()]
}

/// Somme des pourcentages affichés
pub fn allocation_total(slices: &[AllocationSlice]) -> f64 {
    slices.iter().map(|slice| slice.value).sum()
}

/// Catégorie d'un produit d'investissement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    Stock,
    Bond,
    #[serde(rename = "ETF")]
    Etf,
    Mixed,
}

impl ProductType {
    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Stock => "Stock",
            ProductType::Bond => "Bond",
            ProductType::Etf => "ETF",
            ProductType::Mixed => "Mixed",
        }
    }
}

/// Niveau de risque d'un produit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Produit proposé dans l'onglet "Market & Products"
///
/// CONCEPT : Chaînes pré-formatées
/// - `annual_return` et `min_investment` sont des textes d'affichage
/// - Aucune arithmétique n'est faite dessus, on ne les parse donc pas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentProduct {
    /// Identifiant, utilisé seulement comme clé de ligne
    pub id: u32,

    pub name: String,

    #[serde(rename = "type")]
    pub product_type: ProductType,

    pub risk: RiskLevel,

    /// Rendement annuel formaté (ex: "+12.4%")
    #[serde(rename = "return")]
    pub annual_return: String,

    /// Investissement minimum formaté (ex: "$500")
    pub min_investment: String,
}

/// Transaction de l'onglet "Transaction History"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentTransaction {
    pub date: String,
    pub time: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub investment: String,
    pub amount: String,
    pub status: String,
}

/// Ligne du tableau "Your Investments"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub name: String,

    /// Catégorie affichée telle quelle (ex: "Index Fund")
    pub kind: String,

    pub value: String,

    #[serde(rename = "return")]
    pub total_return: String,
}

/// Ton d'une carte de synthèse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Positive,
}

/// Carte de synthèse en haut de l'écran (ex: "Total Invested")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
    pub caption: String,
    pub tone: Tone,
}

/// Données de l'onglet portefeuille, telles que livrées par un fournisseur
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub summary: Vec<SummaryCard>,
    pub allocations: Vec<AllocationSlice>,
    pub performance: Vec<PerformancePoint>,
    pub holdings: Vec<Holding>,
}

/// Tout ce que l'écran Investissement affiche
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentData {
    pub portfolio: Portfolio,
    pub products: Vec<InvestmentProduct>,
    pub transactions: Vec<InvestmentTransaction>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_label() {
        let slice = AllocationSlice::new("Stocks", 45.0);
        assert_eq!(slice.label(), "Stocks 45%");
    }

    #[test]
    fn test_allocation_color_wraps() {
        assert_eq!(allocation_color(0), "#0070f3");
        assert_eq!(allocation_color(3), "#1d4ed8");
        assert_eq!(allocation_color(4), "#0070f3");
    }

    #[test]
    fn test_product_json_shape() {
        let json = r#"{
            "id": 3,
            "name": "Technology ETF",
            "type": "ETF",
            "risk": "Medium",
            "return": "+15.7%",
            "minInvestment": "$250"
        }"#;

        let product: InvestmentProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.product_type, ProductType::Etf);
        assert_eq!(product.risk, RiskLevel::Medium);
        assert_eq!(product.annual_return, "+15.7%");
        assert_eq!(product.min_investment, "$250");
    }
}
