use log::{debug, info, warn};

/// Scoped wrapper over the `log` facade so every line names its origin.
pub struct LogManager {
    scope: &'static str,
}

impl LogManager {
    pub fn new(scope: &'static str) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> &'static str {
        self.scope
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.scope, message);
    }

    pub fn detail(&self, message: &str) {
        debug!("[{}] {}", self.scope, message);
    }

    pub fn caution(&self, message: &str) {
        warn!("[{}] {}", self.scope, message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new("wavecore")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scope_names_the_crate() {
        assert_eq!(LogManager::default().scope(), "wavecore");
        assert_eq!(LogManager::new("SequenceStage").scope(), "SequenceStage");
    }
}
