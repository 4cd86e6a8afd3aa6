//! Connection settings for the local Firestore emulator.

/// Where the seeder sends its documents.
///
/// Defaults point at the emulator the mobile app talks to during development.
#[derive(Debug, Clone)]
pub struct EmulatorConfig {
    /// Firebase project the emulator is serving.
    pub project_id: String,
    pub host: String,
    /// Firestore emulator port.
    pub port: u16,
    /// Emulator Suite UI port, only used for the hint printed after seeding.
    pub ui_port: u16,
    /// Target collection.
    pub collection: String,
    /// Bearer token sent with every request. The emulator treats `owner` as
    /// an admin credential that skips security rules.
    pub auth_token: Option<String>,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            project_id: "masakini-ba32a".to_string(),
            host: "localhost".to_string(),
            port: 8081,
            ui_port: 4000,
            collection: "recipes".to_string(),
            auth_token: Some("owner".to_string()),
        }
    }
}

impl EmulatorConfig {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Base URL of the emulator's Firestore REST API.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/v1", self.host, self.port)
    }

    /// Resource path of the documents root for the default database.
    pub fn documents_path(&self) -> String {
        format!("projects/{}/databases/(default)/documents", self.project_id)
    }

    /// Firestore page of the Emulator Suite UI.
    pub fn ui_url(&self) -> String {
        format!("http://{}:{}/firestore", self.host, self.ui_port)
    }
}
