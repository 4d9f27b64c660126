mod identity_config;

pub use identity_config::IdentityConfig;
