/// Local gateway the services are reachable through.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
