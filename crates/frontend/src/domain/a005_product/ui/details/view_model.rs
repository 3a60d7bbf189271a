use contracts::domain::a005_product::aggregate::{Product, ProductPayload};
use contracts::domain::a005_product::form::ProductForm;
use contracts::shared::endpoints;
use contracts::shared::form::FormMode;
use leptos::prelude::*;
use web_sys::{File, FormData};

use crate::shared::form_view::FormViewModel;
use crate::shared::http::{send, ApiError, ApiRequest};
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub base: FormViewModel<ProductForm>,
    /// Picture chosen in the file input, not yet uploaded.
    pub image: StoredValue<Option<File>, LocalStorage>,
    pub image_name: RwSignal<Option<String>>,
}

impl ProductDetailsViewModel {
    pub fn new(mode: FormMode) -> Self {
        Self {
            base: FormViewModel::new(ProductForm::default(), mode),
            image: StoredValue::new_local(None),
            image_name: RwSignal::new(None),
        }
    }

    pub fn load_if_needed(&self, auth: AuthContext) {
        if let FormMode::Edit(id) = self.base.mode() {
            self.base
                .load(auth, endpoints::item(endpoints::PRODUCTS, id), |p: Product| {
                    ProductForm::from(&p)
                });
        }
    }

    pub fn choose_image(&self, file: Option<File>) {
        self.image_name.set(file.as_ref().map(File::name));
        self.image.set_value(file);
    }

    pub fn next(&self, auth: AuthContext) {
        let mode = self.base.mode();
        let image = self.image.get_value();
        self.base.next(auth, move |payload| save_product(mode, payload, image));
    }
}

fn multipart(payload: &ProductPayload, image: Option<&File>) -> Result<FormData, ApiError> {
    let js = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
    let form = FormData::new().map_err(js)?;
    for (name, value) in payload.parts() {
        form.append_with_str(name, value).map_err(js)?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(js)?;
    }
    Ok(form)
}

async fn save_product(
    mode: FormMode,
    payload: ProductPayload,
    image: Option<File>,
) -> Result<(), ApiError> {
    let form = multipart(&payload, image.as_ref())?;
    let request = match mode {
        FormMode::Create => ApiRequest::post(endpoints::PRODUCTS),
        FormMode::Edit(id) => ApiRequest::put(endpoints::item(endpoints::PRODUCTS, id)),
    };
    send(request.form(form)).await
}
