mod service;

pub use service::{GridConfigService, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
