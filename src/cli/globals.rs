use secrecy::SecretString;

/// Runtime configuration shared by the server, read-only after startup.
#[derive(Clone)]
pub struct GlobalArgs {
    pub admin_email: String,
    pub admin_password: SecretString,
    pub token_secret: SecretString,
    pub token_ttl_seconds: u64,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(
        admin_email: String,
        admin_password: SecretString,
        token_secret: SecretString,
        token_ttl_seconds: u64,
    ) -> Self {
        Self {
            admin_email,
            admin_password,
            token_secret,
            token_ttl_seconds,
        }
    }
}

impl std::fmt::Debug for GlobalArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalArgs")
            .field("admin_email", &self.admin_email)
            .field("admin_password", &"***")
            .field("token_secret", &"***")
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .finish()
    }
}
