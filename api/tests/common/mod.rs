//! Shared harness for HTTP tests
//!
//! Builds the real application on in-memory repositories, the in-memory
//! key-value store, the capturing mail sender and a stub payment gateway.

#![allow(dead_code)]

use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse},
    test, web, App, Error,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

use actix_http::Request;
use bz_api::{create_app, AppState, Collaborators};
use bz_core::services::onboarding::{VendorGateway, VendorGatewayError, VendorRegistration};
use bz_core::repositories::SellerRepository;
use bz_infra::cache::InMemoryStore;
use bz_infra::database::{InMemorySellerRepository, InMemoryShopRepository, InMemoryUserRepository};
use bz_infra::mail::MockMailSender;
use bz_shared::config::{AppConfig, Environment};

pub const PASSWORD: &str = "correct-horse-battery";

/// Payment gateway that accepts every vendor
#[derive(Clone, Default)]
pub struct StubVendorGateway {
    pub registrations: Arc<Mutex<Vec<VendorRegistration>>>,
}

#[async_trait]
impl VendorGateway for StubVendorGateway {
    async fn create_vendor(
        &self,
        registration: &VendorRegistration,
    ) -> Result<Value, VendorGatewayError> {
        self.registrations.lock().await.push(registration.clone());
        Ok(json!({ "vendor_id": registration.vendor_id, "status": "ACTIVE" }))
    }
}

pub struct TestContext {
    pub config: AppConfig,
    pub state: web::Data<AppState>,
    pub mailer: MockMailSender,
    pub sellers: InMemorySellerRepository,
    pub vendors: StubVendorGateway,
}

impl TestContext {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.bcrypt_cost = 4;

        let mailer = MockMailSender::new();
        let sellers = InMemorySellerRepository::new();
        let vendors = StubVendorGateway::default();

        let collaborators = Collaborators {
            users: Arc::new(InMemoryUserRepository::new()),
            sellers: Arc::new(sellers.clone()),
            shops: Arc::new(InMemoryShopRepository::new()),
            store: Arc::new(InMemoryStore::new()),
            mailer: Arc::new(mailer.clone()),
            vendors: Arc::new(vendors.clone()),
        };
        let state = web::Data::new(AppState::new(&config, collaborators));

        Self {
            config,
            state,
            mailer,
            sellers,
            vendors,
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = Error,
            InitError = (),
        >,
    > {
        create_app(self.state.clone(), &self.config.server, Environment::Development)
    }

    pub async fn otp_for(&self, email: &str) -> String {
        self.mailer
            .last_code_for(email)
            .await
            .expect("an OTP mail should have been sent")
    }

    pub async fn seller_id(&self, email: &str) -> String {
        self.sellers
            .find_by_email(email)
            .await
            .unwrap()
            .expect("seller should exist")
            .id
            .to_string()
    }
}

pub async fn post_json<S, B>(app: &S, uri: &str, body: Value) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    test::call_service(app, test::TestRequest::post().uri(uri).set_json(body).to_request()).await
}

pub async fn read_json<B>(resp: ServiceResponse<B>) -> Value
where
    B: MessageBody,
{
    test::read_body_json(resp).await
}

/// Register and verify a user, returning nothing but leaving the account in place
pub async fn register_user<S, B>(ctx: &TestContext, app: &S, name: &str, email: &str)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let resp = post_json(
        app,
        "/api/user-registration",
        json!({ "name": name, "email": email, "password": PASSWORD }),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 200);

    let otp = ctx.otp_for(email).await;
    let resp = post_json(
        app,
        "/api/verify-user",
        json!({ "name": name, "email": email, "password": PASSWORD, "otp": otp }),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 201);
}

/// Register and verify a seller
pub async fn register_seller<S, B>(ctx: &TestContext, app: &S, name: &str, email: &str)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let body = json!({
        "name": name,
        "email": email,
        "password": PASSWORD,
        "phone_number": "+919800000000",
        "country": "India",
    });
    let resp = post_json(app, "/api/seller-registration", body.clone()).await;
    assert_eq!(resp.status().as_u16(), 200);

    let mut verify = body;
    verify["otp"] = Value::String(ctx.otp_for(email).await);
    let resp = post_json(app, "/api/verify-seller", verify).await;
    assert_eq!(resp.status().as_u16(), 201);
}
