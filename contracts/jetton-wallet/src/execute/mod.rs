pub mod bounce;
pub mod burn;
pub mod internal_transfer;
pub mod transfer;
