pub mod group;
pub mod ruleconvert;
