pub mod confirm_dialog;
pub mod contract_card;
pub mod contract_form;
pub mod contract_list;
pub mod help_modal;
pub mod toast_stack;
pub mod toolbar;
