#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::sync::Semaphore;
use tokio_util::task::TaskTracker;
use tower::ServiceExt;

use signup_api::config::ServerConfig;
use signup_api::router::build_app_router;
use signup_api::state::AppState;
use signup_api::tracker::RegistrationTracker;
use signup_core::ids::{AccountId, OrganizationId};
use signup_core::metadata::MetadataValues;
use signup_core::region::RegionCode;
use signup_core::registration::RegistrationForm;
use signup_pipeline::{CommercePlatform, FailurePolicy, PlatformError, RegistrationOrchestrator};
use signup_shopify::config::DEFAULT_TIMEOUT;
use signup_shopify::ShopifyConfig;

/// One recorded platform call, with identifiers as plain strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateAccount(String),
    CreateOrganization(String),
    Link(Option<String>, Option<String>),
    Update(Option<String>, Option<String>),
}

/// Fake platform: records calls, optionally blocks account creation until
/// released, and fails the steps it is configured to fail.
#[derive(Default)]
pub struct RecordingPlatform {
    calls: Mutex<Vec<Call>>,
    gate: Option<Semaphore>,
    account_error: Option<PlatformError>,
    organization_error: Option<PlatformError>,
}

impl RecordingPlatform {
    /// A platform whose account creation waits for [`release`](Self::release).
    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Default::default()
        }
    }

    /// A platform whose account creation fails with `err`.
    pub fn failing_account(err: PlatformError) -> Self {
        Self {
            account_error: Some(err),
            ..Default::default()
        }
    }

    /// A platform whose organization creation fails with `err`.
    pub fn failing_organization(err: PlatformError) -> Self {
        Self {
            organization_error: Some(err),
            ..Default::default()
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CommercePlatform for RecordingPlatform {
    async fn create_account(&self, form: &RegistrationForm) -> Result<AccountId, PlatformError> {
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        self.push(Call::CreateAccount(form.email.clone()));
        match &self.account_error {
            Some(e) => Err(e.clone()),
            None => Ok(AccountId::from_compound("gid://shopify/Customer/7001").unwrap()),
        }
    }

    async fn create_organization(
        &self,
        _form: &RegistrationForm,
        region: RegionCode,
    ) -> Result<OrganizationId, PlatformError> {
        self.push(Call::CreateOrganization(region.to_string()));
        match &self.organization_error {
            Some(e) => Err(e.clone()),
            None => Ok(OrganizationId::from_compound("gid://shopify/Company/9001").unwrap()),
        }
    }

    async fn link_account(
        &self,
        organization: Option<&OrganizationId>,
        account: Option<&AccountId>,
    ) -> Result<Value, PlatformError> {
        self.push(Call::Link(
            organization.map(ToString::to_string),
            account.map(ToString::to_string),
        ));
        if organization.is_none() || account.is_none() {
            return Err(PlatformError::MissingData("identifier".into()));
        }
        Ok(json!({ "data": { "companyAssignCustomerAsContact": { "userErrors": [] } } }))
    }

    async fn update_account(
        &self,
        account: Option<&AccountId>,
        _form: &RegistrationForm,
        region: Option<RegionCode>,
        _metadata: &MetadataValues,
    ) -> Result<Value, PlatformError> {
        self.push(Call::Update(
            account.map(ToString::to_string),
            region.map(|r| r.to_string()),
        ));
        match account {
            Some(_) => Ok(json!({ "customer": {} })),
            None => Err(PlatformError::MissingData("account".into())),
        }
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        registration_retention_secs: 3600,
        failure_policy: FailurePolicy::BestEffort,
        shopify: ShopifyConfig {
            store_domain: "test.invalid".into(),
            api_version: "2024-01".into(),
            admin_access_token: "admin".into(),
            storefront_access_token: "storefront".into(),
            default_password: "pass".into(),
            timeout: DEFAULT_TIMEOUT,
        },
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub platform: Arc<RecordingPlatform>,
}

impl TestApp {
    /// Wait until every dispatched registration task has finished.
    pub async fn settle(&self) {
        self.state.tasks.close();
        tokio::time::timeout(Duration::from_secs(5), self.state.tasks.wait())
            .await
            .expect("registrations did not finish in time");
        self.state.tasks.reopen();
    }
}

/// Build the full application router (same middleware stack as production)
/// on top of the given fake platform.
pub fn build_test_app(platform: RecordingPlatform, policy: FailurePolicy) -> TestApp {
    let config = test_config();
    let platform = Arc::new(platform);

    let state = AppState {
        orchestrator: RegistrationOrchestrator::new(platform.clone(), policy),
        tracker: Arc::new(RegistrationTracker::new()),
        tasks: TaskTracker::new(),
    };

    TestApp {
        router: build_app_router(state.clone(), &config),
        state,
        platform,
    }
}

pub fn default_app() -> TestApp {
    build_test_app(RecordingPlatform::default(), FailurePolicy::BestEffort)
}

/// A complete, well-formed submission for the given state name.
pub fn registration_body(state: &str) -> Value {
    json!({
        "customer": {
            "FirstName": "Loja Azul",
            "Trading_name": "Azul Comercio LTDA",
            "Complete_name": "Maria Souza",
            "Email": "compras@lojaazul.com.br",
            "Logradouro": "Rua das Flores",
            "Number": "120",
            "Complement": "Sala 4",
            "city": "Campinas",
            "UF": state,
            "CEP": "13010-000",
            "Cell": "+55 19 99999-0000",
            "CNPJ": "12.345.678/0001-90"
        },
        "metafield": {
            "tipo": "revenda",
            "marca": "Azul",
            "canal": "online",
            "estadual": "isento"
        }
    })
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
