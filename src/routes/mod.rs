mod health_check;

pub use health_check::{healthcheck, is_health_target, HEALTH_PATH};
