/// Resolver that directs each query at a caller-specified DNS server.
pub struct DnsResolver {
    pub port: u16,
}
