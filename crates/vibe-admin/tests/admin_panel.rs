//! Admin panel flows over local and remote repositories.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use vibe_admin::prelude::*;
use vibe_auth::AuthError;
use vibe_cache::keys;
use vibe_commerce::catalog::{ContactInfo, Product};
use vibe_commerce::ProductId;
use vibe_data::{
    ApiConfig, FetchClient, FetchError, HttpTransport, Method, Request, Response, StoreApi,
};

const PASSWORD: &str = "correct horse battery staple";

fn form(name: &str) -> ProductForm {
    let mut form = ProductForm::new();
    form.name = name.to_string();
    form.price = "1290".to_string();
    form.old_price = "1690".to_string();
    form.image = "https://img.example/p.jpg".to_string();
    form.colors = "yellow, blue".to_string();
    form.toggle_size("4-5 лет");
    form
}

fn local_panel(cache: &Cache) -> AdminPanel {
    AdminPanel::new(
        Arc::new(LocalProductRepository::new(cache.clone())),
        Arc::new(LocalContactRepository::new(cache.clone())),
        Arc::new(PasswordCredentials::from_password(PASSWORD).unwrap()),
        AdminSession::new(cache.clone()),
    )
}

#[tokio::test]
async fn test_mutations_require_login() {
    let cache = Cache::in_memory();
    let panel = local_panel(&cache);

    assert!(!panel.is_authenticated().unwrap());
    let err = panel.submit(&form("Dino"), None).await.unwrap_err();
    assert!(matches!(err, AdminError::NotAuthenticated));
    assert!(matches!(
        panel.delete(ProductId::new(1)).await,
        Err(AdminError::NotAuthenticated)
    ));
    assert!(panel.products().await.unwrap().is_empty());

    let notices = panel.take_notices();
    assert_eq!(notices.len(), 2);
    assert!(notices.iter().all(Notice::is_error));
}

#[tokio::test]
async fn test_login_and_logout() {
    let cache = Cache::in_memory();
    let panel = local_panel(&cache);

    assert!(panel.login("admin123").is_err());
    assert!(!panel.is_authenticated().unwrap());
    let notices = panel.take_notices();
    assert_eq!(notices[0].title, "Ошибка входа");
    assert_eq!(notices[0].description, "Неверный пароль");

    panel.login(PASSWORD).unwrap();
    assert!(panel.is_authenticated().unwrap());
    assert_eq!(panel.take_notices()[0].title, "Вход выполнен");

    // The session lives in the cache, so a second panel sees it.
    assert!(local_panel(&cache).is_authenticated().unwrap());

    panel.logout().unwrap();
    assert!(!panel.is_authenticated().unwrap());
    assert!(!cache.exists(keys::ADMIN_SESSION).unwrap());
}

/// Plain comparison, for tests that log in many times.
struct PlainCredentials(&'static str);

impl CredentialChecker for PlainCredentials {
    fn verify(&self, secret: &str) -> Result<bool, AuthError> {
        Ok(secret == self.0)
    }
}

#[test]
fn test_notice_log_keeps_latest() {
    let cache = Cache::in_memory();
    let panel = AdminPanel::new(
        Arc::new(LocalProductRepository::new(cache.clone())),
        Arc::new(LocalContactRepository::new(cache.clone())),
        Arc::new(PlainCredentials(PASSWORD)),
        AdminSession::new(cache),
    );

    for _ in 0..NOTICE_LIMIT + 10 {
        assert!(panel.login("wrong").is_err());
    }
    panel.login(PASSWORD).unwrap();

    let notices = panel.take_notices();
    assert_eq!(notices.len(), NOTICE_LIMIT);
    assert_eq!(notices[NOTICE_LIMIT - 1].title, "Вход выполнен");
    assert!(notices[..NOTICE_LIMIT - 1].iter().all(Notice::is_error));
    assert!(panel.take_notices().is_empty());
}

#[tokio::test]
async fn test_local_crud_flow() {
    let cache = Cache::in_memory();
    let panel = local_panel(&cache);
    panel.login(PASSWORD).unwrap();
    panel.take_notices();

    let created = panel.submit(&form("Футболка Dino"), None).await.unwrap();
    assert_eq!(created.discount, Some(24));
    assert_eq!(
        panel.take_notices(),
        vec![Notice::success(
            "Товар добавлен",
            "Футболка Dino добавлен в каталог"
        )]
    );

    let mut edit = ProductForm::from_product(&created);
    edit.price = "990".to_string();
    let updated = panel.submit(&edit, Some(&created)).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.discount, Some(41));
    assert_eq!(panel.take_notices()[0].title, "Товар обновлён");

    // The whole collection is written under the products key.
    let stored: Vec<Product> = cache.get(keys::PRODUCTS).unwrap().unwrap();
    assert_eq!(stored, vec![updated.clone()]);

    panel.delete(created.id).await.unwrap();
    assert!(panel.products().await.unwrap().is_empty());
    assert_eq!(panel.take_notices()[0].title, "Товар удалён");
}

#[tokio::test]
async fn test_invalid_form_reports_notice() {
    let cache = Cache::in_memory();
    let panel = local_panel(&cache);
    panel.login(PASSWORD).unwrap();
    panel.take_notices();

    let mut bad = form("Dino");
    bad.price = "дорого".to_string();
    let err = panel.submit(&bad, None).await.unwrap_err();
    assert!(matches!(err, AdminError::InvalidNumber { field: "price", .. }));

    let notices = panel.take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());
    assert_eq!(notices[0].description, "Поле «Цена» должно быть числом");
    assert!(panel.products().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_local_contacts() {
    let cache = Cache::in_memory();
    let panel = local_panel(&cache);
    assert_eq!(panel.contacts().await.unwrap(), ContactInfo::default());

    let contacts = ContactInfo::new("Москва, ул. Новая, 1", "+7 (999) 000-00-00", "shop@vibe.ru");
    assert!(matches!(
        panel.save_contacts(contacts.clone()).await,
        Err(AdminError::NotAuthenticated)
    ));

    panel.login(PASSWORD).unwrap();
    panel.save_contacts(contacts.clone()).await.unwrap();
    assert_eq!(panel.contacts().await.unwrap(), contacts);
    assert_eq!(
        panel.take_notices().last().map(|n| n.title.as_str()),
        Some("Контакты сохранены")
    );
}

/// An in-memory stand-in for the products and contacts functions.
#[derive(Default)]
struct FakeServer {
    products: Mutex<Vec<serde_json::Value>>,
    contacts: Mutex<Option<serde_json::Value>>,
    next_id: Mutex<i64>,
}

impl FakeServer {
    fn reply(status: u16, body: serde_json::Value) -> Response {
        Response::new(status, HashMap::new(), body.to_string().into_bytes())
    }

    fn body(request: &Request) -> serde_json::Value {
        serde_json::from_slice(request.body.as_deref().unwrap_or(b"null")).unwrap()
    }
}

#[async_trait]
impl HttpTransport for FakeServer {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        let url = request.url.clone();
        if url == "http://fake/contacts" {
            let mut contacts = self.contacts.lock();
            return Ok(match request.method {
                Method::Get => Self::reply(200, contacts.clone().unwrap_or_default()),
                _ => {
                    let body = Self::body(&request);
                    *contacts = Some(body.clone());
                    Self::reply(200, body)
                }
            });
        }

        let mut products = self.products.lock();
        let id = url
            .strip_prefix("http://fake/products/")
            .and_then(|id| id.parse::<i64>().ok());
        let not_found = || Self::reply(404, serde_json::json!({"error": "Product not found"}));

        Ok(match (request.method, id) {
            (Method::Get, None) => Self::reply(200, serde_json::Value::from(products.clone())),
            (Method::Post, None) => {
                let mut next_id = self.next_id.lock();
                *next_id += 1;
                let mut body = Self::body(&request);
                body["id"] = serde_json::json!(*next_id);
                products.push(body.clone());
                Self::reply(201, body)
            }
            (Method::Put, Some(id)) => match products.iter_mut().find(|p| p["id"] == id) {
                Some(product) => {
                    if let (Some(stored), serde_json::Value::Object(patch)) =
                        (product.as_object_mut(), Self::body(&request))
                    {
                        stored.extend(patch);
                    }
                    Self::reply(200, product.clone())
                }
                None => not_found(),
            },
            (Method::Delete, Some(id)) => {
                let before = products.len();
                products.retain(|p| p["id"] != id);
                if products.len() == before {
                    not_found()
                } else {
                    Self::reply(200, serde_json::json!({"message": "Product deleted", "id": id}))
                }
            }
            _ => Self::reply(405, serde_json::json!({"error": "Method not allowed"})),
        })
    }
}

fn remote_panel(server: Arc<FakeServer>) -> AdminPanel {
    let client = FetchClient::with_shared_transport(server);
    let api = StoreApi::with_client(
        client,
        ApiConfig::new("http://fake/products", "http://fake/contacts"),
    );
    AdminPanel::new(
        Arc::new(RemoteProductRepository::new(api.clone())),
        Arc::new(RemoteContactRepository::new(api)),
        Arc::new(PasswordCredentials::from_password(PASSWORD).unwrap()),
        AdminSession::new(Cache::in_memory()),
    )
}

#[tokio::test]
async fn test_remote_crud_flow() {
    let server = Arc::new(FakeServer::default());
    let panel = remote_panel(server.clone());
    panel.login(PASSWORD).unwrap();

    let created = panel.submit(&form("Платье Sunny"), None).await.unwrap();
    // Server-assigned id, not the local timestamp.
    assert_eq!(created.id, ProductId::new(1));
    assert_eq!(created.discount, Some(24));

    let mut edit = ProductForm::from_product(&created);
    edit.name = "Платье Sunny 2".to_string();
    let updated = panel.submit(&edit, Some(&created)).await.unwrap();
    assert_eq!(updated.name, "Платье Sunny 2");

    let listed = panel.products().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Платье Sunny 2");

    panel.delete(created.id).await.unwrap();
    assert!(server.products.lock().is_empty());
}

#[tokio::test]
async fn test_remote_error_message_surfaces() {
    let server = Arc::new(FakeServer::default());
    let panel = remote_panel(server);
    panel.login(PASSWORD).unwrap();
    panel.take_notices();

    let err = panel.delete(ProductId::new(77)).await.unwrap_err();
    assert!(matches!(err, AdminError::Fetch(_)));
    let notices = panel.take_notices();
    assert_eq!(notices[0].description, "Product not found");
}

#[tokio::test]
async fn test_remote_contacts() {
    let server = Arc::new(FakeServer::default());
    *server.contacts.lock() = Some(serde_json::to_value(ContactInfo::default()).unwrap());
    let panel = remote_panel(server);
    panel.login(PASSWORD).unwrap();

    let contacts = ContactInfo::new("Санкт-Петербург", "+7 (812) 000-00-00", "spb@vibe.ru");
    let saved = panel.save_contacts(contacts.clone()).await.unwrap();
    assert_eq!(saved, contacts);
    assert_eq!(panel.contacts().await.unwrap(), contacts);
}
