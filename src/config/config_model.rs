#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub database: Database,
    pub delivery: DeliverySettings,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct DeliverySettings {
    /// When true, status changes must move forward along the step order;
    /// the source system lets any status be set at any time.
    pub strict_status_transitions: bool,
}
