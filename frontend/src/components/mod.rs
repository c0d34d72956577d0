pub mod back_button;
pub mod home_view;
pub mod logout_dialog;
pub mod picture_dialog;
pub mod profile_card;
pub mod settings_view;
pub mod toast_stack;
