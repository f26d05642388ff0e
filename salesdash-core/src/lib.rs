pub mod config;
pub mod error;
pub mod format;
pub mod gateway;
pub mod models;
pub mod view;

pub use config::{get_config_dir, get_data_dir, ApiConfig, DashboardConfig, LoggingConfig, TuiConfig};
pub use error::{CliErrorDisplay, SalesDashError, SalesDashResult};
pub use format::{format_deal_value, group_thousands};
pub use gateway::{DashboardApi, FetchGateway};
pub use models::{AskRequest, AskResponse, Deal, RecordId, SalesRep};
pub use view::{
    DashboardState, DealLine, DealsSection, PageView, RepCard, RepsSection, ASK_ERROR_MESSAGE,
    LOADING_MESSAGE, NO_DEALS_MESSAGE, NO_REPS_MESSAGE, VALUE_PLACEHOLDER,
};
