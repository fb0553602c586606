//! Fiscal constants used by the budget calculation.

/// Flat VAT rate charged on gross income.
pub const VAT_RATE: f64 = 0.21;

/// IRPF brackets as `(upper bound on annual gross, rate)` pairs, evaluated
/// in ascending order with the upper bound inclusive.
pub const IRPF_BRACKETS: [(f64, f64); 4] = [
    (12_450.0, 0.19),
    (20_200.0, 0.24),
    (35_200.0, 0.30),
    (60_000.0, 0.37),
];

/// IRPF rate applied above the last bracket bound.
pub const IRPF_TOP_RATE: f64 = 0.45;

/// Months used to annualize the monthly gross before bracket selection.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Horizon of the savings projection, in months.
pub const PROJECTION_MONTHS: f64 = 6.0;
