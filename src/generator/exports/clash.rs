use crate::generator::config::group::group_generate;
use crate::generator::config::ruleconvert::clash_rules;
use crate::generator::yaml::clash::{ClashProxy, ClashYamlOutput};
use crate::interfaces::ConvertError;
use crate::models::ProxyRecord;
use crate::settings::TemplateSettings;

/// Build the Clash document for an ordered, already deduplicated batch.
pub fn proxy_to_clash(nodes: &[ProxyRecord], template: &TemplateSettings) -> ClashYamlOutput {
    let node_names: Vec<String> = nodes.iter().map(|n| n.name.clone()).collect();

    ClashYamlOutput {
        port: template.port,
        socks_port: template.socks_port,
        allow_lan: template.allow_lan,
        mode: template.mode.clone(),
        log_level: template.log_level.clone(),
        external_controller: template.external_controller.clone(),
        proxies: nodes.iter().map(ClashProxy::from).collect(),
        proxy_groups: group_generate(&node_names, template),
        rules: clash_rules(template),
    }
}

/// Serialize the Clash document for `nodes` to YAML text.
pub fn proxy_to_clash_yaml(
    nodes: &[ProxyRecord],
    template: &TemplateSettings,
) -> Result<String, ConvertError> {
    serde_yaml::to_string(&proxy_to_clash(nodes, template))
        .map_err(|e| ConvertError::Internal(format!("failed to serialize document: {}", e)))
}
