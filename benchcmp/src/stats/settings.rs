//!
//! The statistics settings.
//!

///
/// The row order within each table.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// By package, then by benchmark name.
    #[default]
    Name,
    /// By package, then the most favorable significant change first.
    BestDeltaFirst,
}

///
/// The statistics settings.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// The significance threshold of the p-value.
    pub alpha: f64,
    /// The row order.
    pub order: Order,
}

impl Settings {
    /// The default significance threshold.
    pub const DEFAULT_ALPHA: f64 = 0.05;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(alpha: f64, order: Order) -> Self {
        Self { alpha, order }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ALPHA, Order::default())
    }
}
