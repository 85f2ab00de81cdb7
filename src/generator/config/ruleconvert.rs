use crate::settings::TemplateSettings;

/// The fixed rule list: LAN and one country go direct, the rest is proxied.
pub fn clash_rules(template: &TemplateSettings) -> Vec<String> {
    vec![
        "GEOIP,LAN,DIRECT".to_string(),
        format!("GEOIP,{},DIRECT", template.bypass_country),
        format!("MATCH,{}", template.groups.select),
    ]
}
