mod types;

pub use types::{StockInput, StockQuantity, StockStatus};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StockError {
    #[error("Invalid stock value '{value}': expected a number")]
    InvalidInput { value: String },
}

/// Classify a stock level against its minimum.
///
/// Rules, first match wins:
/// 1. `current <= 0` is out of stock, whatever the minimum.
/// 2. `current <= minimum` is low stock (inclusive).
/// 3. Anything else is normal.
pub fn classify(current: StockQuantity, minimum: StockQuantity) -> StockStatus {
    if current.value() <= 0.0 {
        StockStatus::OutOfStock
    } else if current <= minimum {
        StockStatus::Low
    } else {
        StockStatus::Normal
    }
}

/// Classify a stock level given as integers or numeric text.
///
/// Fails with [`StockError::InvalidInput`] if either value is not a number.
pub fn get_stock_status(
    current: impl StockInput,
    minimum: impl StockInput,
) -> Result<StockStatus, StockError> {
    let current = current.into_quantity()?;
    let minimum = minimum.into_quantity()?;
    Ok(classify(current, minimum))
}
