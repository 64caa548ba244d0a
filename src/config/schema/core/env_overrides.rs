use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("CONTENT_GUIDELINES_STORE")
            && !path.is_empty()
        {
            self.store.path = path;
        }

        if let Ok(level) = std::env::var("CONTENT_GUIDELINES_LOG")
            && !level.is_empty()
        {
            self.observability.log_level = level;
        }

        if let Ok(max_str) = std::env::var("CONTENT_GUIDELINES_MAX_CHARS")
            && let Ok(max_chars) = max_str.parse::<usize>()
        {
            self.packet.max_chars = max_chars;
        }
    }
}
