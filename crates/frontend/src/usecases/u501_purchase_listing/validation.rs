use crate::shared::http::FetchError;

pub const INVALID_ITEM_DATA: &str = "Invalid item data";

/// Проверка данных лота до любого сетевого вызова.
pub fn validate_purchase(name: &str, price: f64) -> Result<(), FetchError> {
    if name.trim().is_empty() || !price.is_finite() || price <= 0.0 {
        return Err(FetchError::Validation(INVALID_ITEM_DATA.to_string()));
    }
    Ok(())
}
