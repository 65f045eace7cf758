/// Port the configured DNS servers are queried on.
pub const DNS_PORT: u16 = 53;
