pub mod identity_service;
pub mod local_scan;

pub use identity_service::IdentityService;
pub use local_scan::LocalScanPolicy;
