use super::aggregate::{Supplier, SupplierPayload};
use crate::domain::common::{ADDRESS_RULE, EMAIL_RULE, NAME_RULE, NIT_RULE, PHONE_RULE};
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FormModel, ValidatedField};
use crate::shared::line_items::{CatalogItem, LineForm, LineItem, LineItems, PickerScope};

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierForm {
    pub name: ValidatedField,
    pub phone: ValidatedField,
    pub nit: ValidatedField,
    pub email: ValidatedField,
    pub address: ValidatedField,
    /// Supplied products; only the ids are sent.
    pub products: LineItems,
}

impl Default for SupplierForm {
    fn default() -> Self {
        Self {
            name: ValidatedField::new(NAME_RULE),
            phone: ValidatedField::new(PHONE_RULE),
            nit: ValidatedField::new(NIT_RULE),
            email: ValidatedField::new(EMAIL_RULE),
            address: ValidatedField::new(ADDRESS_RULE),
            products: LineItems::new(),
        }
    }
}

impl From<&Supplier> for SupplierForm {
    fn from(s: &Supplier) -> Self {
        let products = s
            .products
            .iter()
            .map(|p| {
                LineItem::new(CatalogItem {
                    id: p.id,
                    name: p.name.clone(),
                    code: p.code.clone(),
                    ..Default::default()
                })
            })
            .collect();
        Self {
            name: ValidatedField::with_value(NAME_RULE, s.name.clone()),
            phone: ValidatedField::with_value(PHONE_RULE, s.phone.clone()),
            nit: ValidatedField::with_value(NIT_RULE, s.nit.clone()),
            email: ValidatedField::with_value(EMAIL_RULE, s.email.clone()),
            address: ValidatedField::with_value(ADDRESS_RULE, s.address.clone()),
            products: LineItems::from_items(products),
        }
    }
}

impl SupplierForm {
    pub const SCOPE: PickerScope = PickerScope::Products;
}

impl FormModel for SupplierForm {
    type Payload = SupplierPayload;

    fn is_ready(&self) -> bool {
        all_ready(&[&self.name, &self.phone, &self.nit, &self.email, &self.address])
    }

    fn payload(&self) -> SupplierPayload {
        SupplierPayload {
            name: self.name.value.trim().to_string(),
            phone: self.phone.value.trim().to_string(),
            nit: self.nit.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            address: self.address.value.trim().to_string(),
            product: self.products.items().iter().map(LineItem::product_id).collect(),
        }
    }

    fn apply_server_errors(&mut self, errors: &FieldErrors) {
        let fields: [(&str, &mut ValidatedField); 5] = [
            ("name", &mut self.name),
            ("phone", &mut self.phone),
            ("nit", &mut self.nit),
            ("email", &mut self.email),
            ("address", &mut self.address),
        ];
        for (key, field) in fields {
            if let Some(message) = errors.first(key) {
                field.dispatch(FieldAction::Error(message));
            }
        }
    }
}

impl LineForm for SupplierForm {
    fn lines(&self) -> &LineItems {
        &self.products
    }

    fn lines_mut(&mut self) -> &mut LineItems {
        &mut self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> SupplierForm {
        let mut form = SupplierForm::default();
        let set = |f: &mut ValidatedField, v: &str| f.dispatch(FieldAction::Change(v.into()));
        set(&mut form.name, "Ferretería Andina");
        set(&mut form.phone, "71234567");
        set(&mut form.nit, "1020304050");
        set(&mut form.email, "ventas@andina.bo");
        set(&mut form.address, "Av. Blanco Galindo km 4");
        form
    }

    #[test]
    fn test_payload_lists_product_ids() {
        let mut form = filled();
        form.products.add(CatalogItem {
            id: 3,
            name: "Clavos".into(),
            ..Default::default()
        });
        form.products.add(CatalogItem {
            id: 7,
            name: "Tornillos".into(),
            ..Default::default()
        });
        assert!(form.is_ready());
        let body = serde_json::to_value(form.payload()).expect("serialize");
        assert_eq!(body["product"], json!([3, 7]));
        assert_eq!(body["address"], json!("Av. Blanco Galindo km 4"));
    }

    #[test]
    fn test_phone_rejects_letters() {
        let mut form = filled();
        form.phone.dispatch(FieldAction::Change("71a34567".into()));
        assert_eq!(form.phone.feedback(), Some("Ingrese teléfono válido"));
        assert!(!form.is_ready());
    }

    #[test]
    fn test_products_are_optional() {
        assert!(filled().is_ready());
        assert!(filled().payload().product.is_empty());
    }
}
