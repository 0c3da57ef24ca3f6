pub mod admin;
pub mod bounce;
pub mod burn_notification;
pub mod buy;
pub mod finalize_ico;
pub mod mint;
pub mod setup_ico;
pub mod update_ico;
