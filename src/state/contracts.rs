//! Contract-list state and the row view model derived from it.
//!
//! DESIGN
//! ======
//! Every refresh takes a new generation number. A response is applied only
//! while its generation is still the latest, so overlapping refreshes settle
//! on the most recently requested data regardless of arrival order.

#[cfg(test)]
#[path = "contracts_test.rs"]
mod contracts_test;

use crate::net::types::{ApiError, Contract};
use crate::util::usage::{UsageColor, limit_reached, usage_percent};

pub const EMPTY_LIST_MESSAGE: &str = "No contracts found";
pub const LOADING_MESSAGE: &str = "Loading contracts...";
const LAST_CHECKED_PLACEHOLDER: &str = "—";

/// The remote collection as last fetched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContractsState {
    pub items: Vec<Contract>,
    pub loading: bool,
    /// Set once any fetch has settled, successfully or not.
    pub loaded: bool,
    pub error: Option<String>,
    pub generation: u64,
}

/// What happened when a fetch result was offered to the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchApplied {
    /// A newer refresh was started after this one; the result was dropped.
    Stale,
    Loaded { count: usize },
    Failed { message: String },
}

impl ContractsState {
    /// Start a refresh and return its generation.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply a fetch result if `generation` is still current.
    ///
    /// On failure the previous items are kept and `error` is set.
    pub fn apply_fetch(&mut self, generation: u64, result: Result<Vec<Contract>, ApiError>) -> FetchApplied {
        if generation != self.generation {
            return FetchApplied::Stale;
        }
        self.loading = false;
        self.loaded = true;
        match result {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                self.error = None;
                FetchApplied::Loaded { count }
            }
            Err(err) => {
                let message = err.to_string();
                self.error = Some(message.clone());
                FetchApplied::Failed { message }
            }
        }
    }

    /// A refresh is running over a list that is already on screen.
    pub fn is_refreshing(&self) -> bool {
        self.loading && self.loaded
    }

    /// Build what the list container should currently show.
    pub fn list_view(&self) -> ListView {
        if self.items.is_empty() {
            if !self.loaded {
                return ListView::Loading;
            }
            return ListView::Empty;
        }
        ListView::Items(self.items.iter().map(ContractRow::from_contract).collect())
    }
}

/// Content of the list container.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    Loading,
    Empty,
    Items(Vec<ContractRow>),
}

/// Display-ready values for one rendered contract.
#[derive(Clone, Debug, PartialEq)]
pub struct ContractRow {
    pub contract: Contract,
    pub used: u64,
    pub limit: u64,
    pub percent: f64,
    pub color: UsageColor,
    pub limit_reached: bool,
    pub last_checked: String,
}

impl ContractRow {
    pub fn from_contract(contract: &Contract) -> Self {
        let used = contract.amount();
        let limit = contract.limit();
        let percent = usage_percent(used, limit);
        Self {
            contract: contract.clone(),
            used,
            limit,
            percent,
            color: UsageColor::for_percent(percent),
            limit_reached: limit_reached(used, limit),
            last_checked: contract
                .last_checked
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| LAST_CHECKED_PLACEHOLDER.to_owned()),
        }
    }

    /// Tooltip text for the usage bar.
    pub fn usage_label(&self) -> String {
        if self.limit == 0 {
            return "No limit".to_owned();
        }
        format!("{:.0}% used", self.percent.floor())
    }

    /// Inline style for the filled part of the usage bar.
    pub fn bar_style(&self) -> String {
        format!("width:{:.1}%; background-color:{};", self.percent, self.color.hex())
    }
}
