//! Dashboard state and the view model rendered from it.
//!
//! `DashboardState` owns the four fields a mounted dashboard tracks. Front
//! ends feed task results into it and draw whatever `render()` returns.

use tracing::{debug, info};

use crate::error::SalesDashResult;
use crate::format::format_deal_value;
use crate::models::{RecordId, SalesRep};

pub const LOADING_MESSAGE: &str = "Loading sales data...";
pub const NO_REPS_MESSAGE: &str = "No sales representatives found.";
pub const NO_DEALS_MESSAGE: &str = "No deals recorded for this representative.";
pub const ASK_ERROR_MESSAGE: &str = "Error getting AI response.";
pub const VALUE_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    sales_reps: Vec<SalesRep>,
    loading: bool,
    question: String,
    answer: String,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            sales_reps: Vec::new(),
            loading: true,
            question: String::new(),
            answer: String::new(),
        }
    }
}

impl DashboardState {
    /// Starts a fresh mount. Nothing from a previous mount is kept.
    pub fn begin_mount(&mut self) {
        *self = Self::default();
    }

    /// Applies the result of the list fetch. A failure is logged and
    /// leaves the list empty.
    pub fn apply_sales_reps(&mut self, result: SalesDashResult<Vec<SalesRep>>) {
        match result {
            Ok(reps) => {
                info!(count = reps.len(), "Sales representatives loaded");
                self.sales_reps = reps;
            }
            Err(e) => {
                e.log();
                self.sales_reps.clear();
            }
        }
        self.loading = false;
    }

    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// Applies the result of a question. Whichever result arrives last
    /// overwrites the answer.
    pub fn apply_answer(&mut self, result: SalesDashResult<String>) {
        match result {
            Ok(answer) => {
                debug!(len = answer.len(), "Answer received");
                self.answer = answer;
            }
            Err(e) => {
                e.log();
                self.answer = ASK_ERROR_MESSAGE.to_string();
            }
        }
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn sales_reps(&self) -> &[SalesRep] {
        &self.sales_reps
    }

    pub fn render(&self) -> PageView {
        let reps = if self.loading {
            RepsSection::Loading
        } else if self.sales_reps.is_empty() {
            RepsSection::Empty
        } else {
            RepsSection::Cards(self.sales_reps.iter().map(RepCard::from_rep).collect())
        };

        PageView {
            reps,
            question: self.question.clone(),
            answer: (!self.answer.is_empty()).then(|| self.answer.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub reps: RepsSection,
    pub question: String,
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RepsSection {
    Loading,
    Empty,
    Cards(Vec<RepCard>),
}

impl RepsSection {
    /// Fixed text shown in place of the cards, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            RepsSection::Loading => Some(LOADING_MESSAGE),
            RepsSection::Empty => Some(NO_REPS_MESSAGE),
            RepsSection::Cards(_) => None,
        }
    }

    pub fn cards(&self) -> &[RepCard] {
        match self {
            RepsSection::Cards(cards) => cards,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepCard {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub deals: DealsSection,
}

impl RepCard {
    fn from_rep(rep: &SalesRep) -> Self {
        let deals = if rep.has_deals() {
            DealsSection::Deals(
                rep.deals
                    .iter()
                    .map(|deal| DealLine {
                        id: deal.id.clone(),
                        client: deal.client.clone(),
                        status: deal.status.clone(),
                        value: format_deal_value(deal.value),
                    })
                    .collect(),
            )
        } else {
            DealsSection::NoDeals
        };

        Self {
            id: rep.id.clone(),
            name: rep.name.clone(),
            role: rep.role.clone(),
            deals,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DealsSection {
    NoDeals,
    Deals(Vec<DealLine>),
}

impl DealsSection {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            DealsSection::NoDeals => Some(NO_DEALS_MESSAGE),
            DealsSection::Deals(_) => None,
        }
    }

    pub fn lines(&self) -> &[DealLine] {
        match self {
            DealsSection::Deals(lines) => lines,
            DealsSection::NoDeals => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DealLine {
    pub id: RecordId,
    pub client: String,
    pub status: String,
    pub value: String,
}

impl std::fmt::Display for DealLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} - {}", self.client, self.status, self.value)
    }
}
