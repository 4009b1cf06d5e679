pub mod pii;
pub mod validators;

pub use pii::{mask_id_number, Masked};
