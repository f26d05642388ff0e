//! Outbound HTTP on behalf of the dashboard view.
//!
//! Two one-shot calls: the sales-rep list (GET, status checked) and the
//! question endpoint (POST, status not checked). Neither retries.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::{SalesDashError, SalesDashResult};
use crate::models::{AskRequest, AskResponse, SalesRep};

/// The two remote operations the dashboard depends on.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Fails on transport errors and on any non-success HTTP status.
    async fn fetch_sales_reps(&self) -> SalesDashResult<Vec<SalesRep>>;

    /// Returns the `answer` field of the response. A non-success status
    /// whose body still decodes is treated like a success.
    async fn ask_question(&self, question: &str) -> SalesDashResult<String>;
}

pub struct FetchGateway {
    client: Client,
    sales_reps_url: Url,
    ai_url: Url,
}

impl FetchGateway {
    pub fn new(api: &ApiConfig) -> SalesDashResult<Self> {
        Ok(Self::with_client(
            Client::new(),
            api.sales_reps_url()?,
            api.ai_url()?,
        ))
    }

    pub fn with_client(client: Client, sales_reps_url: Url, ai_url: Url) -> Self {
        Self {
            client,
            sales_reps_url,
            ai_url,
        }
    }

    pub fn sales_reps_url(&self) -> &Url {
        &self.sales_reps_url
    }

    pub fn ai_url(&self) -> &Url {
        &self.ai_url
    }
}

#[async_trait]
impl DashboardApi for FetchGateway {
    async fn fetch_sales_reps(&self) -> SalesDashResult<Vec<SalesRep>> {
        debug!(url = %self.sales_reps_url, "Fetching sales representatives");

        let response = self.client.get(self.sales_reps_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SalesDashError::HttpStatus {
                status: status.as_u16(),
                url: self.sales_reps_url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let reps = SalesRep::list_from_json(&body)?;

        info!(count = reps.len(), "Fetched sales representatives");
        Ok(reps)
    }

    async fn ask_question(&self, question: &str) -> SalesDashResult<String> {
        debug!(url = %self.ai_url, "Submitting question");

        let response = self
            .client
            .post(self.ai_url.clone())
            .json(&AskRequest::new(question))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "AI endpoint returned non-success status");
        }

        let body: AskResponse = response.json().await?;
        Ok(body.into_answer())
    }
}
