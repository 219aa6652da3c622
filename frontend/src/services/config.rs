use shared::SchedulerConfig;
use crate::services::logging::Logger;

/// Optional `<script type="application/json">` block in index.html
pub const CONFIG_ELEMENT_ID: &str = "scheduler-config";

/// Read the embedded JSON overrides, falling back to the defaults when the
/// block is missing or invalid.
pub fn load_config() -> SchedulerConfig {
    let embedded = gloo::utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    match embedded {
        Some(json) if !json.trim().is_empty() => match SchedulerConfig::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                Logger::warn_with_component("config", &format!("Ignoring embedded scheduler config: {}", e));
                SchedulerConfig::default()
            }
        },
        _ => SchedulerConfig::default(),
    }
}
