//! Group generation utilities
//!
//! The document always carries the same four groups: a top-level selector,
//! a manual selector, a latency-tested group and a failover group.

use crate::generator::yaml::clash::ClashProxyGroup;
use crate::settings::TemplateSettings;

/// Generates the fixed proxy groups over `node_names`, keeping their order.
pub fn group_generate(node_names: &[String], template: &TemplateSettings) -> Vec<ClashProxyGroup> {
    let groups = &template.groups;
    let check = &template.health_check;

    let mut top_level = vec![
        groups.auto.clone(),
        groups.fallback.clone(),
        groups.manual.clone(),
    ];
    top_level.extend_from_slice(node_names);

    vec![
        ClashProxyGroup::Select {
            name: groups.select.clone(),
            proxies: top_level,
        },
        ClashProxyGroup::Select {
            name: groups.manual.clone(),
            proxies: node_names.to_vec(),
        },
        ClashProxyGroup::UrlTest {
            name: groups.auto.clone(),
            proxies: node_names.to_vec(),
            url: check.url.clone(),
            interval: check.interval,
            tolerance: check.tolerance,
        },
        ClashProxyGroup::Fallback {
            name: groups.fallback.clone(),
            proxies: node_names.to_vec(),
            url: check.url.clone(),
            interval: check.interval,
        },
    ]
}

/// Names a node must not take because a group or a built-in policy owns them.
pub fn reserved_names(template: &TemplateSettings) -> Vec<String> {
    group_generate(&[], template)
        .iter()
        .map(|group| group.name().to_string())
        .chain(["DIRECT".to_string(), "REJECT".to_string()])
        .collect()
}
