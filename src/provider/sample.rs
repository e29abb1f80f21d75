// ============================================================================
// SampleProvider : données d'exemple littérales
// ============================================================================
// Toutes les valeurs affichées sont des constantes. Les enregistrements sont
// reconstruits à chaque appel et ne sont jamais modifiés ensuite.
// ============================================================================

use anyhow::Result;

use crate::models::{
    AccountSummary, AllocationSlice, BankTransaction, Banking, ExchangeRate, Holding,
    InvestmentProduct, InvestmentTransaction, PerformancePoint, Portfolio, ProductType,
    QuickAction, RiskLevel, SummaryCard, Tone, TransactionType, TransferForm, Trend,
};

use super::DataProvider;

/// Fournisseur des enregistrements littéraux
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleProvider;

impl SampleProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DataProvider for SampleProvider {
    fn name(&self) -> &str {
        "sample"
    }

    fn portfolio(&self) -> Result<Portfolio> {
        Ok(Portfolio {
            summary: summary_cards(),
            allocations: allocations(),
            performance: performance(),
            holdings: holdings(),
        })
    }

    fn products(&self) -> Result<Vec<InvestmentProduct>> {
        Ok(products())
    }

    fn investment_history(&self) -> Result<Vec<InvestmentTransaction>> {
        Ok(investment_history())
    }

    fn rates(&self) -> Result<Vec<ExchangeRate>> {
        Ok(rates())
    }

    fn banking(&self) -> Result<Banking> {
        Ok(Banking {
            account: AccountSummary {
                full_balance: "₦1,245,876.50".to_string(),
                account_label: "Arigo Pay •••• 4567".to_string(),
            },
            quick_actions: quick_actions(),
            transactions: bank_transactions(),
            transfer: transfer_form(),
        })
    }
}

// ============================================================================
// Écran Investissement
// ============================================================================

pub fn summary_cards() -> Vec<SummaryCard> {
    let card = |title: &str, value: &str, caption: &str, tone| SummaryCard {
        title: title.to_string(),
        value: value.to_string(),
        caption: caption.to_string(),
        tone,
    };

    vec![
        card("Total Invested", "$24,500.00", "Updated today", Tone::Neutral),
        card("Total Returns", "+$2,345.00", "+9.6% overall", Tone::Positive),
        card("Active Investments", "7", "Across 4 categories", Tone::Neutral),
    ]
}

pub fn performance() -> Vec<PerformancePoint> {
    vec![
        PerformancePoint::new("Jan", 4000.0),
        PerformancePoint::new("Feb", 3800.0),
        PerformancePoint::new("Mar", 4200.0),
        PerformancePoint::new("Apr", 5000.0),
        PerformancePoint::new("May", 4700.0),
        PerformancePoint::new("Jun", 5200.0),
        PerformancePoint::new("Jul", 5500.0),
    ]
}

pub fn allocations() -> Vec<AllocationSlice> {
    vec![
        AllocationSlice::new("Stocks", 45.0),
        AllocationSlice::new("Bonds", 25.0),
        AllocationSlice::new("ETFs", 20.0),
        AllocationSlice::new("Cash", 10.0),
    ]
}

pub fn holdings() -> Vec<Holding> {
    let holding = |name: &str, kind: &str, value: &str, total_return: &str| Holding {
        name: name.to_string(),
        kind: kind.to_string(),
        value: value.to_string(),
        total_return: total_return.to_string(),
    };

    vec![
        holding("Tech Growth Fund", "ETF", "$8,240.00", "+16.4%"),
        holding("Corporate Bond Fund", "Bond", "$5,120.00", "+4.2%"),
        holding("S&P 500 Index", "Index Fund", "$6,380.00", "+9.1%"),
    ]
}

pub fn products() -> Vec<InvestmentProduct> {
    let product = |id, name: &str, product_type, risk, annual_return: &str, min: &str| {
        InvestmentProduct {
            id,
            name: name.to_string(),
            product_type,
            risk,
            annual_return: annual_return.to_string(),
            min_investment: min.to_string(),
        }
    };

    vec![
        product(1, "Growth Stock Fund", ProductType::Stock, RiskLevel::High, "+12.4%", "$500"),
        product(2, "Income Bond Fund", ProductType::Bond, RiskLevel::Low, "+3.2%", "$1,000"),
        product(3, "Technology ETF", ProductType::Etf, RiskLevel::Medium, "+15.7%", "$250"),
        product(4, "Balanced Portfolio", ProductType::Mixed, RiskLevel::Medium, "+8.5%", "$2,000"),
    ]
}

pub fn investment_history() -> Vec<InvestmentTransaction> {
    let buy = |date: &str, time: &str, investment: &str, amount: &str| InvestmentTransaction {
        date: date.to_string(),
        time: time.to_string(),
        kind: TransactionType::Buy,
        investment: investment.to_string(),
        amount: amount.to_string(),
        status: "Completed".to_string(),
    };

    vec![
        buy("Apr 12, 2025", "10:24 AM", "Tech Growth Fund", "$2,000.00"),
        buy("Mar 10, 2025", "2:15 PM", "S&P 500 Index", "$1,500.00"),
        buy("Feb 22, 2025", "9:45 AM", "Corporate Bond Fund", "$3,000.00"),
    ]
}

// ============================================================================
// Écran Accueil
// ============================================================================

pub fn rates() -> Vec<ExchangeRate> {
    let rate = |currency: &str, rate: &str, trend| ExchangeRate {
        currency: currency.to_string(),
        rate: rate.to_string(),
        trend,
    };

    vec![
        rate("USD", "1 USD = 1,200 NGN", Trend::Up),
        rate("EUR", "1 EUR = 1,350 NGN", Trend::Down),
        rate("GBP", "1 GBP = 1,500 NGN", Trend::Up),
    ]
}

pub fn bank_transactions() -> Vec<BankTransaction> {
    let tx = |kind, name: &str, amount: &str, date: &str| BankTransaction {
        kind,
        name: name.to_string(),
        amount: amount.to_string(),
        date: date.to_string(),
    };

    vec![
        tx(TransactionType::Credit, "Salary Deposit", "₦250,000", "Today, 10:45 AM"),
        tx(TransactionType::Debit, "Transfer to John", "₦50,000", "Yesterday, 2:30 PM"),
        tx(TransactionType::Debit, "Electricity Bill", "₦15,000", "Mar 15, 9:15 AM"),
    ]
}

pub fn quick_actions() -> Vec<QuickAction> {
    [
        ("Send Money", "bg-indigo-100 text-indigo-600"),
        ("Pay with QR", "bg-emerald-100 text-emerald-600"),
        ("Add Beneficiary", "bg-violet-100 text-violet-600"),
        ("Currency Swap", "bg-amber-100 text-amber-600"),
    ]
    .iter()
    .map(|&(label, color)| QuickAction {
        label: label.to_string(),
        color: color.to_string(),
    })
    .collect()
}

pub fn transfer_form() -> TransferForm {
    TransferForm {
        from_accounts: vec![
            "Arigo Pay Account (₦1,245,876.50)".to_string(),
            "Savings Account (₦500,000.00)".to_string(),
        ],
        beneficiaries: vec![
            "Select beneficiary".to_string(),
            "John Doe (Zenith Bank •••• 1234)".to_string(),
            "Jane Smith (GTBank •••• 5678)".to_string(),
        ],
        amount_placeholder: "0.00".to_string(),
        narration_placeholder: "Optional".to_string(),
        fee: "₦50.00".to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::allocation_total;

    #[test]
    fn test_allocation_sums_to_hundred() {
        // Échoue si quelqu'un modifie les parts sans rééquilibrer
        assert_eq!(allocation_total(&allocations()), 100.0);
    }

    #[test]
    fn test_products_in_literal_order() {
        let names: Vec<String> = products().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "Growth Stock Fund",
                "Income Bond Fund",
                "Technology ETF",
                "Balanced Portfolio"
            ]
        );
    }

    #[test]
    fn test_records_are_rebuilt_identically() {
        let provider = SampleProvider::new();
        assert_eq!(provider.portfolio().unwrap(), provider.portfolio().unwrap());
        assert_eq!(provider.banking().unwrap(), provider.banking().unwrap());
    }

    #[test]
    fn test_history_is_all_completed_buys() {
        for tx in investment_history() {
            assert_eq!(tx.kind, TransactionType::Buy);
            assert_eq!(tx.status, "Completed");
        }
    }
}
