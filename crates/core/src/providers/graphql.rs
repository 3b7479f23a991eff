use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::session::Session;
use crate::models::transaction::{Transaction, TransactionKind};
use crate::models::user::{ProfileData, UserProfile};

use super::traits::ProfileProvider;

const DEFAULT_BASE_URL: &str = "https://learn.reboot01.com";

/// The single fixed query: profile fields, the most-recent level-type
/// transaction, all skill transactions, and the full chronological
/// transaction list — one round-trip for the whole dashboard.
const PROFILE_QUERY: &str = r#"
{
    user {
        id
        login
        firstName
        lastName
        email
        campus
        githubId
        auditRatio
        totalUp
        totalDown
        transactions(order_by: {amount: desc}, where: {type: {_eq: "level"}}, limit: 1) {
            type
            amount
        }
    }
    skills: transaction(where: {type: {_like: "%skill%"}}, order_by: {amount: desc}) {
        amount
        type
        path
        createdAt
    }
    transactions: transaction(order_by: {createdAt: asc}) {
        type
        amount
        createdAt
        path
        object {
            name
        }
    }
}
"#;

/// Data-query collaborator: POSTs the fixed GraphQL document with a
/// bearer token and converts the response into [`ProfileData`].
pub struct GraphqlClient {
    client: Client,
    base_url: String,
}

impl GraphqlClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
        }
    }
}

impl Default for GraphqlClient {
    fn default() -> Self {
        Self::new()
    }
}

// ── GraphQL response types ──────────────────────────────────────────

#[derive(Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Deserialize)]
struct ResponseData {
    user: Vec<UserDto>,
    #[serde(default)]
    skills: Vec<TransactionDto>,
    #[serde(default)]
    transactions: Vec<TransactionDto>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: u64,
    login: String,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    campus: Option<String>,
    #[serde(default)]
    github_id: Option<u64>,
    #[serde(default)]
    audit_ratio: f64,
    #[serde(default)]
    total_up: u64,
    #[serde(default)]
    total_down: u64,
    #[serde(default)]
    transactions: Vec<LevelDto>,
}

#[derive(Deserialize)]
struct LevelDto {
    amount: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionDto {
    #[serde(rename = "type")]
    raw_type: String,
    amount: u64,
    created_at: DateTime<Utc>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    object: Option<ObjectDto>,
}

#[derive(Deserialize)]
struct ObjectDto {
    #[serde(default)]
    name: Option<String>,
}

/// Parse a raw response body into [`ProfileData`].
///
/// A non-empty `errors` list takes precedence over any partial `data`
/// and surfaces the first error's message. Exposed so response handling
/// is testable without a network.
pub fn parse_profile_response(body: &str) -> Result<ProfileData, CoreError> {
    let response: GraphqlResponse = serde_json::from_str(body)?;

    if let Some(first) = response.errors.first() {
        return Err(CoreError::GraphQl(first.message.clone()));
    }

    let data = response
        .data
        .ok_or_else(|| CoreError::MalformedResponse("missing data payload".to_string()))?;

    let user_dto = data
        .user
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::MalformedResponse("empty user list".to_string()))?;

    let level = user_dto.transactions.first().map(|level| level.amount);
    let user = UserProfile {
        id: user_dto.id,
        login: user_dto.login,
        first_name: user_dto.first_name,
        last_name: user_dto.last_name,
        email: user_dto.email,
        campus: user_dto.campus,
        github_id: user_dto.github_id,
        audit_ratio: user_dto.audit_ratio,
        total_up: user_dto.total_up,
        total_down: user_dto.total_down,
    };

    Ok(ProfileData {
        user,
        level,
        skills: convert_transactions(data.skills),
        transactions: convert_transactions(data.transactions),
    })
}

/// Convert transaction DTOs, dropping kinds this dashboard does not
/// chart (the backend grows new types without notice).
fn convert_transactions(dtos: Vec<TransactionDto>) -> Vec<Transaction> {
    dtos.into_iter()
        .filter_map(|dto| {
            let Some(kind) = TransactionKind::classify(&dto.raw_type) else {
                log::debug!("skipping transaction of unknown type '{}'", dto.raw_type);
                return None;
            };
            let subject_name = dto
                .object
                .and_then(|object| object.name)
                .unwrap_or_default();
            Some(Transaction {
                kind,
                raw_type: dto.raw_type,
                amount: dto.amount,
                occurred_at: dto.created_at,
                subject_path: dto.path.unwrap_or_default(),
                subject_name,
            })
        })
        .collect()
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ProfileProvider for GraphqlClient {
    fn name(&self) -> &str {
        "GraphQL"
    }

    async fn fetch_profile(&self, session: &Session) -> Result<ProfileData, CoreError> {
        let url = format!("{}/api/graphql-engine/v1/graphql", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(session.token())
            .json(&serde_json::json!({ "query": PROFILE_QUERY }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            // The body may still carry a structured errors list worth
            // surfacing; fall back to the bare status otherwise.
            return match parse_profile_response(&body) {
                Err(CoreError::GraphQl(message)) => Err(CoreError::GraphQl(message)),
                _ => Err(CoreError::Network(format!(
                    "data query returned status {status}"
                ))),
            };
        }

        parse_profile_response(&body)
    }
}
