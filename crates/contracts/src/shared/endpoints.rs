//! REST paths, relative to the API base URL.

pub const LOGIN: &str = "/api/user/login/";
pub const REFRESH: &str = "/api/user/refresh/";
pub const LOGOUT: &str = "/api/user/logout/";
pub const ME: &str = "/api/user/me/";

pub const AGENCIES: &str = "/api/sale/agencies/";
pub const ALL_AGENCIES: &str = "/api/sale/agencies/all";
pub const CITY_CHOICES: &str = "/api/sale/agencies/choices/";
pub const WAREHOUSES: &str = "/api/sale/warehouses/";
pub const CATEGORIES: &str = "/api/sale/categories/";
pub const ALL_CATEGORIES: &str = "/api/sale/categories/all";
pub const BATCHES: &str = "/api/sale/batches/";
pub const ALL_BATCHES: &str = "/api/sale/batches/all";
pub const PRODUCTS: &str = "/api/sale/products/";
pub const PRODUCT_STOCKS: &str = "/api/sale/product-stocks/";
pub const SUPPLIERS: &str = "/api/sale/suppliers/";
pub const ALL_SUPPLIERS: &str = "/api/sale/suppliers/all";
pub const CLIENTS: &str = "/api/sale/clients/";
pub const ALL_CLIENTS: &str = "/api/sale/clients/all";
pub const CLIENT_CHOICES: &str = "/api/sale/clients/choices/";
pub const PRODUCT_CHANNEL_PRICES: &str = "/api/sale/product-channel-prices/";
pub const SELLING_CHANNELS: &str = "/api/sale/selling-channels/";
pub const ALL_SELLING_CHANNELS: &str = "/api/sale/selling-channels/all";
pub const PURCHASES: &str = "/api/sale/purchases/";
pub const SALES: &str = "/api/sale/sales/";
pub const ENTRIES: &str = "/api/sale/entries/";
pub const OUTPUTS: &str = "/api/sale/outputs/";
pub const PAYMENTS: &str = "/api/sale/payments/";
pub const CATALOG: &str = "/api/sale/catalog/";

/// `{collection}{id}/`
pub fn item(collection: &str, id: i64) -> String {
    format!("{collection}{id}/")
}

pub fn increment_damaged_stock(product_stock_id: i64) -> String {
    format!("{PRODUCT_STOCKS}{product_stock_id}/increment-damaged-stock/")
}

pub fn proforma_pdf(sale_id: i64) -> String {
    format!("/api/sale/proforma-pdf/{sale_id}/")
}

pub fn output_pdf(output_id: i64) -> String {
    format!("/api/sale/output-pdf/{output_id}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_paths() {
        assert_eq!(item(AGENCIES, 12), "/api/sale/agencies/12/");
        assert_eq!(
            increment_damaged_stock(3),
            "/api/sale/product-stocks/3/increment-damaged-stock/"
        );
        assert_eq!(proforma_pdf(9), "/api/sale/proforma-pdf/9/");
    }
}
