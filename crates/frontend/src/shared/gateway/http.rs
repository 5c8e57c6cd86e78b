use super::CatalogGateway;
use crate::shared::config::CatalogConfig;
use crate::shared::error::{GatewayError, GatewayResult};
use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::domain::a002_animal::aggregate::{Animal, AnimalDto};
use contracts::shared::envelope::{ListEnvelope, MutationAck, UploadReceipt};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Gateway backed by the browser's `fetch`
#[derive(Debug, Clone, Default)]
pub struct HttpGateway {
    config: CatalogConfig,
}

impl HttpGateway {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }
}

fn ensure_ok(response: &Response) -> GatewayResult<()> {
    if !response.ok() {
        return Err(GatewayError::Http(response.status()));
    }
    Ok(())
}

async fn get_list<T: DeserializeOwned>(url: &str) -> GatewayResult<Vec<T>> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await?;
    ensure_ok(&response)?;

    let envelope: ListEnvelope<T> = response.json().await?;
    Ok(envelope.into_inner())
}

async fn post_json<B: Serialize>(url: &str, body: &B) -> GatewayResult<bool> {
    let response = Request::post(url)
        .header("Accept", "application/json")
        .json(body)?
        .send()
        .await?;
    ensure_ok(&response)?;

    let ack: MutationAck = response.json().await?;
    Ok(ack.success)
}

fn js_err(e: wasm_bindgen::JsValue) -> GatewayError {
    GatewayError::Browser(format!("{e:?}"))
}

#[async_trait(?Send)]
impl CatalogGateway for HttpGateway {
    type Upload = web_sys::File;

    async fn fetch_categories(&self) -> GatewayResult<Vec<Category>> {
        get_list(&self.config.categories_url()).await
    }

    async fn fetch_animals(&self) -> GatewayResult<Vec<Animal>> {
        get_list(&self.config.animals_url()).await
    }

    async fn create_category(&self, dto: &CategoryDto) -> GatewayResult<bool> {
        post_json(&self.config.categories_url(), dto).await
    }

    async fn create_animal(&self, dto: &AnimalDto) -> GatewayResult<bool> {
        post_json(&self.config.animals_url(), dto).await
    }

    async fn upload_image(&self, file: web_sys::File) -> GatewayResult<String> {
        let form_data = web_sys::FormData::new().map_err(js_err)?;
        form_data.append_with_blob("file", &file).map_err(js_err)?;
        form_data
            .append_with_str("upload_preset", &self.config.upload_preset)
            .map_err(js_err)?;

        // No explicit Content-Type: the browser adds the multipart boundary.
        let response = Request::post(&self.config.upload_url)
            .body(form_data)?
            .send()
            .await?;
        ensure_ok(&response)?;

        let receipt: UploadReceipt = response.json().await?;
        receipt.hosted_url().ok_or(GatewayError::MissingUrl)
    }
}
