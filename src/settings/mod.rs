pub mod settings_struct;

pub use settings_struct::{GroupNames, HealthCheckSettings, Settings, TemplateSettings};
