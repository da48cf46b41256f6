/// User agent string used in HTTP requests to identify this client to the brokerage API
pub const USER_AGENT: &str = "portfolio-analyzer/0.1.0";
/// Default page size requested from paginated brokerage endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Default access token lifetime requested at login (24 hours)
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 86_400;
/// Safety margin in seconds applied when deciding whether a session needs refresh
pub const TOKEN_REFRESH_MARGIN_SECS: u64 = 300;
/// Maximum number of orders returned when the caller asks for "recent" orders
pub const RECENT_ORDERS_LIMIT: usize = 10;
/// OAuth scope requested at login
pub const OAUTH_SCOPE: &str = "internal";
/// Public OAuth client identifier for the brokerage token endpoints
pub const OAUTH_CLIENT_ID: &str = "c82SH0WZOsabOXGP2sxqcj34FxkvfnWRZBKlBjFS";
/// Length of the generated device token sent with login requests
pub const DEVICE_TOKEN_LENGTH: usize = 30;
