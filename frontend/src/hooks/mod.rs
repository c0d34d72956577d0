pub mod use_document_title;
pub mod use_settings;
pub mod use_toasts;
