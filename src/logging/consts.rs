use std::net::{IpAddr, Ipv4Addr};

pub const DEFAULT_DIRECTIVE: &str = "globle_solver=info";
pub const DEFAULT_CLIENT_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));

/// Values of the `task` field, used to filter events by kind.
pub const HTTP_REQUEST_MARKER: &str = "http_request";
pub const TRIANGULATION_MARKER: &str = "triangulation";
