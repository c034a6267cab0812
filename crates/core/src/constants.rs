/// Decimal precision for percentages shown on account cards
pub const DISPLAY_PERCENT_PRECISION: u32 = 1;

/// Decimal precision for category return percentages
pub const CATEGORY_RETURN_PRECISION: u32 = 2;

/// Default initial guess for the XIRR solver (10%)
pub const XIRR_DEFAULT_GUESS: f64 = 0.10;

/// Hard iteration cap for the XIRR solver
pub const XIRR_MAX_ITERATIONS: usize = 100;

/// Convergence tolerance for the XIRR solver
pub const XIRR_TOLERANCE: f64 = 1e-7;

/// Day count used to turn calendar days into year fractions
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Display marker for an absent metric
pub const NO_DATA_MARKER: &str = "--";

/// Display marker for growth measured from a zero starting balance
pub const NEW_ACCOUNT_MARKER: &str = "New";

/// Category name used when an account references an unknown category
pub const UNCATEGORIZED_NAME: &str = "Uncategorized";
