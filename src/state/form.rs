//! Add/edit form state, field normalization, and edit mode.
//!
//! DESIGN
//! ======
//! Field values are kept as raw text exactly as typed. Parsing and
//! normalization happen only when a payload is built, so a failed submit
//! leaves the user's input untouched.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{Contract, ContractId, ContractPayload};

pub const ADD_TITLE: &str = "Add Contract";
pub const EDIT_TITLE: &str = "Edit Contract";

/// Editable form inputs, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    SfmcSubdomain,
    ClientId,
    ClientSecret,
    DeKey,
    ContactsLimit,
    SlackUsersIds,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::SfmcSubdomain,
        FormField::ClientId,
        FormField::ClientSecret,
        FormField::DeKey,
        FormField::ContactsLimit,
        FormField::SlackUsersIds,
    ];

    /// Wire/input name of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::SfmcSubdomain => "sfmc_subdomain",
            Self::ClientId => "client_id",
            Self::ClientSecret => "client_secret",
            Self::DeKey => "de_key",
            Self::ContactsLimit => "contacts_limit",
            Self::SlackUsersIds => "slack_users_ids",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::SfmcSubdomain => "SFMC Subdomain",
            Self::ClientId => "Client ID",
            Self::ClientSecret => "Client Secret",
            Self::DeKey => "Data Extension Key",
            Self::ContactsLimit => "Contacts Limit",
            Self::SlackUsersIds => "Slack User IDs",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::ClientSecret => "password",
            Self::ContactsLimit => "number",
            _ => "text",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::ContactsLimit => "0 = no limit",
            Self::SlackUsersIds => "U012AB3CD, U045EF6GH",
            _ => "",
        }
    }

    pub fn required(self) -> bool {
        matches!(self, Self::Name)
    }
}

/// Validation failures caught before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,
    #[error("Contacts limit must be a non-negative whole number, got '{0}'")]
    InvalidLimit(String),
}

/// Raw text of every form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractForm {
    pub name: String,
    pub sfmc_subdomain: String,
    pub client_id: String,
    pub client_secret: String,
    pub de_key: String,
    pub contacts_limit: String,
    pub slack_users_ids: String,
}

impl ContractForm {
    /// Pre-fill inputs from an existing record.
    pub fn from_contract(contract: &Contract) -> Self {
        Self {
            name: contract.name.clone(),
            sfmc_subdomain: contract.sfmc_subdomain.clone().unwrap_or_default(),
            client_id: contract.client_id.clone().unwrap_or_default(),
            client_secret: contract.client_secret.clone().unwrap_or_default(),
            de_key: contract.de_key.clone().unwrap_or_default(),
            contacts_limit: match contract.limit() {
                0 => String::new(),
                limit => limit.to_string(),
            },
            slack_users_ids: contract.slack_users_ids.join(", "),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::SfmcSubdomain => &self.sfmc_subdomain,
            FormField::ClientId => &self.client_id,
            FormField::ClientSecret => &self.client_secret,
            FormField::DeKey => &self.de_key,
            FormField::ContactsLimit => &self.contacts_limit,
            FormField::SlackUsersIds => &self.slack_users_ids,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::SfmcSubdomain => &mut self.sfmc_subdomain,
            FormField::ClientId => &mut self.client_id,
            FormField::ClientSecret => &mut self.client_secret,
            FormField::DeKey => &mut self.de_key,
            FormField::ContactsLimit => &mut self.contacts_limit,
            FormField::SlackUsersIds => &mut self.slack_users_ids,
        };
        *slot = value;
    }

    /// Validate and normalize the inputs into a request payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when the name is blank or the limit is not a
    /// non-negative integer.
    pub fn to_payload(&self) -> Result<ContractPayload, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        Ok(ContractPayload {
            name: self.name.clone(),
            sfmc_subdomain: self.sfmc_subdomain.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            de_key: self.de_key.clone(),
            contacts_limit: parse_limit(&self.contacts_limit)?,
            slack_users_ids: normalize_slack_ids(&self.slack_users_ids),
        })
    }
}

/// Split comma-separated ids, trimming each and dropping empty entries.
pub fn normalize_slack_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_limit(raw: &str) -> Result<u64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<u64>().map_err(|_| FormError::InvalidLimit(trimmed.to_owned()))
}

/// Form visibility plus edit mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub open: bool,
    /// Record the next submit updates; `None` means the next submit creates.
    pub editing_id: Option<ContractId>,
    pub fields: ContractForm,
    pub submitting: bool,
    /// Bumped whenever the form is opened or closed, so a request can tell
    /// whether the form it was sent from is still the one on screen.
    pub session: u64,
}

impl FormState {
    /// Open a blank form for a new record.
    pub fn open_create(&mut self) {
        self.session += 1;
        self.editing_id = None;
        self.fields = ContractForm::default();
        self.open = true;
    }

    /// Open the form pre-filled from `contract` in edit mode.
    pub fn open_edit(&mut self, contract: &Contract) {
        self.session += 1;
        self.editing_id = Some(contract.id);
        self.fields = ContractForm::from_contract(contract);
        self.open = true;
    }

    /// Hide the form and leave edit mode.
    pub fn close(&mut self) {
        self.session += 1;
        self.open = false;
        self.editing_id = None;
        self.fields = ContractForm::default();
    }

    pub fn title(&self) -> &'static str {
        if self.editing_id.is_some() { EDIT_TITLE } else { ADD_TITLE }
    }
}
