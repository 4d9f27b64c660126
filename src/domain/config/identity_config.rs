pub struct IdentityConfig;

impl IdentityConfig {
    /// The only address excluded when picking a "real" address.
    pub const LOOPBACK_V4: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 9060;

    // inet_ntop buffer sizes, including the trailing NUL
    pub const IPV4_TEXT_LEN: usize = 16;
    pub const IPV6_TEXT_LEN: usize = 46;
}
