// ============================================================================
// Enum : TransactionType
// ============================================================================
// Sens d'une transaction, partagé par les deux écrans
//
// CONCEPT RUST : #[serde(rename = "...")]
// - Les données d'origine mélangent "Buy" et "credit"/"debit"
// - On garde ces orthographes côté JSON, et des variants idiomatiques côté Rust
// ============================================================================

use serde::{Deserialize, Serialize};

/// Type de transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Achat d'un produit (historique d'investissement)
    #[serde(rename = "Buy")]
    Buy,

    /// Crédit sur le compte courant
    #[serde(rename = "credit")]
    Credit,

    /// Débit du compte courant
    #[serde(rename = "debit")]
    Debit,
}

impl TransactionType {
    /// Libellé affiché dans les tableaux
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Buy => "Buy",
            TransactionType::Credit => "credit",
            TransactionType::Debit => "debit",
        }
    }

    /// Un crédit s'affiche en vert, tout le reste en rouge
    pub fn is_inflow(&self) -> bool {
        matches!(self, TransactionType::Credit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_spellings() {
        assert_eq!(serde_json::to_string(&TransactionType::Buy).unwrap(), "\"Buy\"");
        assert_eq!(serde_json::to_string(&TransactionType::Credit).unwrap(), "\"credit\"");

        let debit: TransactionType = serde_json::from_str("\"debit\"").unwrap();
        assert_eq!(debit, TransactionType::Debit);
        assert!(!debit.is_inflow());
    }
}
