//! Canned demo results
//!
//! Returned whenever the backend cannot produce a usable analysis. Selection
//! goes through a [`RandomSource`] so callers and tests control which sample
//! is shown.

use lexdoc_domain::traits::RandomSource;
use lexdoc_domain::AnalysisResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Processing method attached to every demo result
pub const DEMO_PROCESSING_METHOD: &str = "Advanced AI Analysis - Demo Mode";

/// Random source backed by the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len.max(1))
    }
}

/// Reproducible random source
#[derive(Debug, Clone)]
pub struct SeededSource(StdRng);

impl SeededSource {
    /// Create a source from a fixed seed
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len.max(1))
    }
}

/// Set of canned analyses to choose from
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    results: Vec<AnalysisResult>,
}

impl DemoCatalog {
    /// Built-in loan and rental samples
    pub fn builtin() -> Self {
        Self {
            results: vec![loan_sample(), rental_sample()],
        }
    }

    /// All samples in selection order
    pub fn results(&self) -> &[AnalysisResult] {
        &self.results
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the catalog is empty (never true for the built-in catalog)
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Pick one sample
    pub fn pick(&self, rng: &mut dyn RandomSource) -> AnalysisResult {
        let last = self.results.len().saturating_sub(1);
        let idx = rng.pick_index(self.results.len()).min(last);
        self.results
            .get(idx)
            .cloned()
            .unwrap_or_else(rental_sample)
    }
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn points(items: &[&str]) -> Vec<String> {
    items.iter().map(|p| p.to_string()).collect()
}

fn loan_sample() -> AnalysisResult {
    AnalysisResult::new(
        "LOAN AGREEMENT ANALYSIS: This is a secured personal loan agreement between the borrower and John Smith (lender) with significant risk factors. The loan involves property collateral with strict payment terms and severe default consequences. Critical attention required for payment deadlines and collateral protection clauses.",
        points(&[
            "CRITICAL: $50,000 loan amount must be paid in full by January 1, 2025",
            "HIGH RISK: Property ownership (123 Main Street) automatically transfers to John Smith if payment is missed",
            "Monthly payments: $2,200 due by 15th of each month, starting February 2024",
            "Late payment penalty: 5% of monthly payment amount for each day past due",
            "Collateral at risk: Primary residence deed held as security by lender",
            "No grace period: Default triggers immediate foreclosure proceedings",
            "Notice requirement: 10-day written notice before default declaration",
            "Legal fees: Borrower responsible for all collection and legal costs",
            "Insurance requirement: Property must maintain $500K+ insurance coverage",
            "Early payment: No penalty for paying loan in full before due date",
        ]),
        DEMO_PROCESSING_METHOD,
    )
}

fn rental_sample() -> AnalysisResult {
    AnalysisResult::new(
        "RENTAL AGREEMENT ANALYSIS: Standard residential lease with typical landlord-favorable terms. Contains some tenant-protective clauses but includes several financial obligations and restrictions. Moderate risk level with clear payment and occupancy requirements.",
        points(&[
            "Monthly rent: $2,500 due by 1st of each month (late fee applies after 5th)",
            "Security deposit: $5,000 due at signing (refundable with conditions)",
            "Lease term: 12 months ending December 31, 2024 (auto-renewal clause)",
            "Late fee: $100 charged for payments received after 5th of month",
            "Pet restriction: No pets allowed without written landlord consent and $500 pet deposit",
            "Maintenance: Tenant responsible for repairs under $200 per incident",
            "Notice period: 30 days required for lease termination by either party",
            "Occupancy limit: Maximum 2 adults, children under 18 permitted",
            "Utilities: Tenant pays electricity, gas, internet; landlord pays water/trash",
            "Inspection rights: Landlord may inspect with 24-hour advance notice",
        ]),
        DEMO_PROCESSING_METHOD,
    )
}
