//! REST Backend
//!
//! `reqwest` implementation of [`OutfitRepository`] and [`PaletteSource`].

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use super::{CredentialStore, OutfitRepository, PaletteSource};
use crate::config::ApiConfig;
use crate::error::{OutfitError, OutfitResult};
use crate::model::{Item, Outfit, OutfitId, OutfitPatch};
use crate::wire::{self, OutfitResponse, OutfitSummary};

/// File name the preview image is uploaded under
const PREVIEW_FILE_NAME: &str = "outfit-preview.png";

/// Item listing, plain or paginated
#[derive(Deserialize)]
#[serde(untagged)]
enum ItemListing {
    Plain(Vec<Item>),
    Paged { results: Vec<Item> },
}

/// Best-effort user-facing message from an error response body
pub fn error_from_response(status: u16, body: &str) -> OutfitError {
    let fallback = || format!("Request failed with status {status}");
    let message = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => ["message", "detail", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str).map(str::to_string))
            .or_else(|| {
                map.iter().find_map(|(field, value)| {
                    let first = match value {
                        Value::String(s) => Some(s.as_str()),
                        Value::Array(values) => values.first().and_then(Value::as_str),
                        _ => None,
                    };
                    first.map(|msg| format!("{field}: {msg}"))
                })
            })
            .unwrap_or_else(fallback),
        Ok(Value::String(s)) if !s.trim().is_empty() => s,
        _ => fallback(),
    };
    OutfitError::Backend { status, message }
}

/// Decode a response body into JSON in client key convention
fn decode_body(status: u16, body: &str) -> OutfitResult<Value> {
    if !(200..300).contains(&status) {
        return Err(error_from_response(status, body));
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(wire::keys_to_camel_case(serde_json::from_str(body)?))
}

/// Body of a successful preview upload
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PreviewUpload {
    preview_image_url: String,
}

const OUTFITS_PATH: &str = "/outfits/";
const SCHEDULED_PATH: &str = "/outfits/scheduled/";

fn outfit_path(id: OutfitId) -> String {
    format!("/outfits/{id}/")
}

/// HTTP client bound to one API base URL and credential store
#[derive(Clone)]
pub struct HttpBackend<C> {
    client: Client,
    config: ApiConfig,
    credentials: C,
}

impl<C: CredentialStore> HttpBackend<C> {
    pub fn new(config: ApiConfig, credentials: C) -> Self {
        Self {
            client: Client::new(),
            config,
            credentials,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.config.endpoint(path));
        match self.credentials.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn create_request(&self, outfit: &Outfit) -> OutfitResult<RequestBuilder> {
        let body = wire::to_wire(&wire::outfit_request(outfit))?;
        Ok(self.request(Method::POST, OUTFITS_PATH).json(&body))
    }

    fn update_request(&self, id: OutfitId, patch: &OutfitPatch) -> OutfitResult<RequestBuilder> {
        let body = wire::to_wire(&wire::patch_request(patch))?;
        Ok(self.request(Method::PATCH, &outfit_path(id)).json(&body))
    }

    fn upload_request(&self, id: OutfitId, png: Vec<u8>) -> OutfitResult<RequestBuilder> {
        let part = Part::bytes(png)
            .file_name(PREVIEW_FILE_NAME)
            .mime_str("image/png")?;
        let form = Form::new().part("preview_image", part);
        Ok(self
            .request(Method::POST, &format!("/outfits/{id}/upload-preview/"))
            .multipart(form))
    }

    /// Send and return the body as JSON in client key convention
    async fn send(&self, builder: RequestBuilder) -> OutfitResult<Value> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_body(status, &body).inspect_err(|err| {
            if let OutfitError::Backend { .. } = err {
                log::error!("Backend request failed: {err}");
            }
        })
    }

    fn outfit_from(&self, value: Value) -> OutfitResult<Outfit> {
        let response: OutfitResponse = serde_json::from_value(value)?;
        Ok(response.into_outfit(self.config.media_origin()))
    }

    async fn fetch_outfit(&self, builder: RequestBuilder) -> OutfitResult<Outfit> {
        let value = self.send(builder).await?;
        self.outfit_from(value)
    }

    async fn fetch_summaries(&self, path: &str) -> OutfitResult<Vec<OutfitSummary>> {
        let value = self.send(self.request(Method::GET, path)).await?;
        let mut summaries: Vec<OutfitSummary> = serde_json::from_value(value)?;
        for summary in &mut summaries {
            summary.preview_image_url = summary
                .preview_image_url
                .take()
                .map(|url| wire::normalize_image_url(&url, self.config.media_origin()));
        }
        Ok(summaries)
    }
}

fn not_found_as(id: OutfitId) -> impl Fn(OutfitError) -> OutfitError {
    move |err| match err {
        OutfitError::Backend { status, .. } if status == StatusCode::NOT_FOUND.as_u16() => {
            OutfitError::NotFound(id)
        }
        other => other,
    }
}

#[async_trait(?Send)]
impl<C: CredentialStore> OutfitRepository for HttpBackend<C> {
    async fn create(&self, outfit: &Outfit) -> OutfitResult<Outfit> {
        let created = self.fetch_outfit(self.create_request(outfit)?).await?;
        log::info!("Created outfit {:?}", created.id);
        Ok(created)
    }

    async fn read(&self, id: OutfitId) -> OutfitResult<Outfit> {
        self.fetch_outfit(self.request(Method::GET, &outfit_path(id)))
            .await
            .map_err(not_found_as(id))
    }

    async fn update(&self, id: OutfitId, patch: &OutfitPatch) -> OutfitResult<Outfit> {
        let updated = self
            .fetch_outfit(self.update_request(id, patch)?)
            .await
            .map_err(not_found_as(id))?;
        log::info!("Updated outfit {id}");
        Ok(updated)
    }

    async fn delete(&self, id: OutfitId) -> OutfitResult<()> {
        self.send(self.request(Method::DELETE, &outfit_path(id)))
            .await
            .map_err(not_found_as(id))?;
        log::info!("Deleted outfit {id}");
        Ok(())
    }

    async fn list_all(&self) -> OutfitResult<Vec<OutfitSummary>> {
        self.fetch_summaries(OUTFITS_PATH).await
    }

    async fn list_scheduled(&self) -> OutfitResult<Vec<OutfitSummary>> {
        self.fetch_summaries(SCHEDULED_PATH).await
    }

    async fn upload_preview(&self, id: OutfitId, png: Vec<u8>) -> OutfitResult<String> {
        let value = self
            .send(self.upload_request(id, png)?)
            .await
            .map_err(not_found_as(id))?;
        let upload: PreviewUpload = serde_json::from_value(value)?;
        log::info!("Uploaded preview for outfit {id}");
        Ok(wire::normalize_image_url(
            &upload.preview_image_url,
            self.config.media_origin(),
        ))
    }
}

#[async_trait(?Send)]
impl<C: CredentialStore> PaletteSource for HttpBackend<C> {
    async fn fetch_palette(&self) -> OutfitResult<Vec<Item>> {
        let value = self.send(self.request(Method::GET, "/wardrobe/items/")).await?;
        let items = match serde_json::from_value::<ItemListing>(value)? {
            ItemListing::Plain(items) | ItemListing::Paged { results: items } => items,
        };
        let origin = self.config.media_origin();
        Ok(items
            .into_iter()
            .map(|item| wire::normalize_item(item, origin))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Layer;
    use crate::model::{ItemId, PlacedItem, Position, Season, Size};
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use reqwest::Request;
    use serde_json::json;

    struct FixedToken(Option<&'static str>);

    impl CredentialStore for FixedToken {
        fn access_token(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    fn backend(token: Option<&'static str>) -> HttpBackend<FixedToken> {
        HttpBackend::new(ApiConfig::new("http://api.test/api"), FixedToken(token))
    }

    fn build(builder: RequestBuilder) -> Request {
        builder.build().unwrap()
    }

    fn json_body(request: &Request) -> Value {
        let bytes = request.body().and_then(|body| body.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    fn shirt() -> PlacedItem {
        PlacedItem {
            item: Item {
                id: ItemId(7),
                image_url: "http://api.test/media/items/7.png".to_string(),
                category: "Shirt".to_string(),
                colors: vec!["white".to_string()],
                season: Season::Summer,
                brand: None,
            },
            layer: Layer::Tops,
            position: Position::new(120.0, 80.0),
            size: Size::new(150.0, 150.0),
            rotation: 90.0,
            z_index: 3,
        }
    }

    fn message(err: OutfitError) -> String {
        err.to_string()
    }

    #[test]
    fn test_message_keys_in_order() {
        let body = r#"{"detail": "Not found.", "message": "Outfit missing"}"#;
        assert_eq!(message(error_from_response(404, body)), "Outfit missing");
        let body = r#"{"detail": "Authentication credentials were not provided."}"#;
        assert_eq!(
            message(error_from_response(401, body)),
            "Authentication credentials were not provided."
        );
        assert_eq!(message(error_from_response(500, r#"{"error": "boom"}"#)), "boom");
    }

    #[test]
    fn test_field_errors() {
        let body = r#"{"name": ["This field is required."]}"#;
        let err = error_from_response(400, body);
        assert_eq!(
            err,
            OutfitError::Backend {
                status: 400,
                message: "name: This field is required.".to_string()
            }
        );
    }

    #[test]
    fn test_unparseable_body_falls_back_to_status() {
        assert_eq!(
            message(error_from_response(502, "<html>Bad Gateway</html>")),
            "Request failed with status 502"
        );
        assert_eq!(
            message(error_from_response(500, "{}")),
            "Request failed with status 500"
        );
    }

    #[test]
    fn test_not_found_mapping() {
        let map = not_found_as(OutfitId(42));
        assert_eq!(map(error_from_response(404, "{}")), OutfitError::NotFound(OutfitId(42)));
        assert!(matches!(
            map(OutfitError::Network("offline".into())),
            OutfitError::Network(_)
        ));
    }

    #[test]
    fn test_bearer_token_attached_when_present() {
        let request = build(backend(Some("tok")).request(Method::GET, "/outfits/"));
        assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer tok");

        let request = build(backend(None).request(Method::GET, "/outfits/"));
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_crud_methods_and_urls() {
        let backend = backend(Some("tok"));
        let outfit = Outfit {
            name: "Office".to_string(),
            items: vec![shirt()],
            ..Outfit::untitled()
        };

        let create = build(backend.create_request(&outfit).unwrap());
        assert_eq!(create.method(), Method::POST);
        assert_eq!(create.url().as_str(), "http://api.test/api/outfits/");
        let body = json_body(&create);
        assert_eq!(body["name"], "Office");
        assert_eq!(body["items"][0]["clothing_item_id"], 7);
        assert_eq!(body["items"][0]["position_x"], 120.0);
        assert_eq!(body["items"][0]["z_index"], 3);

        let read = build(backend.request(Method::GET, &outfit_path(OutfitId(42))));
        assert_eq!(read.method(), Method::GET);
        assert_eq!(read.url().as_str(), "http://api.test/api/outfits/42/");

        let delete = build(backend.request(Method::DELETE, &outfit_path(OutfitId(42))));
        assert_eq!(delete.method(), Method::DELETE);
        assert_eq!(delete.url().as_str(), "http://api.test/api/outfits/42/");

        let list = build(backend.request(Method::GET, OUTFITS_PATH));
        assert_eq!(list.url().as_str(), "http://api.test/api/outfits/");
        let scheduled = build(backend.request(Method::GET, SCHEDULED_PATH));
        assert_eq!(scheduled.url().as_str(), "http://api.test/api/outfits/scheduled/");
    }

    #[test]
    fn test_patch_sends_only_present_fields() {
        let patch = OutfitPatch {
            name: Some("Renamed".to_string()),
            ..OutfitPatch::default()
        };
        let request = build(backend(Some("tok")).update_request(OutfitId(42), &patch).unwrap());
        assert_eq!(request.method(), Method::PATCH);
        assert_eq!(request.url().as_str(), "http://api.test/api/outfits/42/");
        assert_eq!(json_body(&request), json!({"name": "Renamed"}));
    }

    #[test]
    fn test_preview_upload_is_multipart() {
        let request = build(
            backend(Some("tok"))
                .upload_request(OutfitId(42), vec![0x89, b'P', b'N', b'G'])
                .unwrap(),
        );
        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.url().as_str(),
            "http://api.test/api/outfits/42/upload-preview/"
        );
        let content_type = request.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
        assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer tok");
    }

    #[test]
    fn test_read_response_maps_every_placement_field() {
        let body = r#"{
            "id": 42,
            "name": "Office",
            "occasion": "work",
            "season": "winter",
            "scheduled_date": "2025-12-25",
            "preview_image_url": "/media/previews/42.png",
            "created_at": "2025-03-01T10:00:00Z",
            "updated_at": "2025-03-02T08:30:00Z",
            "items": [{
                "id": 100,
                "clothing_item": {
                    "id": 7,
                    "image_url": "/media/items/7.png",
                    "category": "Shirt",
                    "colors": ["white"],
                    "season": "summer"
                },
                "layer": "tops",
                "position_x": 120.5,
                "position_y": 80.25,
                "size_width": 150.0,
                "size_height": 175.0,
                "rotation": 90.0,
                "z_index": 3
            }]
        }"#;
        let backend = backend(None);
        let outfit = backend.outfit_from(decode_body(200, body).unwrap()).unwrap();
        assert_eq!(outfit.id, Some(OutfitId(42)));
        assert_eq!(outfit.scheduled_date.as_deref(), Some("2025-12-25"));
        assert_eq!(
            outfit.preview_image_url.as_deref(),
            Some("http://api.test/media/previews/42.png")
        );
        assert!(outfit.created_at.is_some());

        let placed = &outfit.items[0];
        assert_eq!(placed.id(), ItemId(7));
        assert_eq!(placed.item.image_url, "http://api.test/media/items/7.png");
        assert_eq!(placed.layer, Layer::Tops);
        assert_eq!(placed.position, Position::new(120.5, 80.25));
        assert_eq!(placed.size, Size::new(150.0, 175.0));
        assert_eq!(placed.rotation, 90.0);
        assert_eq!(placed.z_index, 3);
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(204, "").unwrap(), Value::Null);
        assert_eq!(
            decode_body(200, r#"{"preview_image_url": "/media/p.png"}"#).unwrap(),
            json!({"previewImageUrl": "/media/p.png"})
        );
        assert_eq!(
            decode_body(404, r#"{"detail": "Not found."}"#),
            Err(OutfitError::Backend {
                status: 404,
                message: "Not found.".to_string()
            })
        );
    }
}
