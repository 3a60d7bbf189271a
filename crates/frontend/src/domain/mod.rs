pub mod a001_agency;
pub mod a002_warehouse;
pub mod a003_category;
pub mod a004_batch;
pub mod a005_product;
pub mod a006_product_stock;
pub mod a007_supplier;
pub mod a008_client;
pub mod a009_selling_channel;
pub mod a010_purchase;
pub mod a011_sale;
pub mod a012_entry;
pub mod a013_output;
pub mod a014_payment;
