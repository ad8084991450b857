pub mod claim;
pub mod init_claim;
pub mod initialize;
pub mod update;
pub mod upload_badge;
pub mod upload_validation;
pub mod withdraw;

pub use claim::*;
pub use claim::{handler as claim_handler, Claim};
pub use init_claim::*;
pub use init_claim::{handler as init_claim_handler, InitClaim};
pub use initialize::*;
pub use initialize::{handler as initialize_handler, Initialize};
pub use update::*;
pub use update::{handler as update_handler, Update};
pub use upload_badge::*;
pub use upload_badge::{handler as upload_badge_handler, UploadBadge};
pub use upload_validation::*;
pub use upload_validation::{handler as upload_validation_handler, UploadValidation};
pub use withdraw::*;
pub use withdraw::{handler as withdraw_handler, Withdraw};
