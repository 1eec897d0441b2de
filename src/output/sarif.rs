use crate::report::ValidationReport;
use crate::rules;
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::HashMap;

pub fn format(report: &ValidationReport) -> String {
    let catalogue = rules::all_rules();

    let rule_index: HashMap<&str, i64> = catalogue
        .iter()
        .enumerate()
        .map(|(i, rule)| (rule.id, i as i64))
        .collect();

    let descriptors: Vec<ReportingDescriptor> = catalogue
        .iter()
        .map(|rule| {
            let mut descriptor = ReportingDescriptor::builder().id(rule.id.to_string()).build();
            descriptor.short_description = Some(
                MultiformatMessageString::builder()
                    .text(rule.message.to_string())
                    .build(),
            );
            descriptor.help = Some(
                MultiformatMessageString::builder()
                    .text(rule.remediation.to_string())
                    .build(),
            );
            descriptor
        })
        .collect();

    let results: Vec<SarifResult> = report
        .violations
        .iter()
        .map(|v| {
            let mut result = SarifResult::builder()
                .message(Message::builder().text(v.message.clone()).build())
                .build();

            result.rule_id = Some(v.rule_id.to_string());
            result.level = Some(ResultLevel::Error);
            result.rule_index = rule_index.get(v.rule_id).copied();

            let uri = v.document.to_string_lossy().replace('\\', "/");
            let mut location = Location::builder().build();
            let mut physical = PhysicalLocation::builder().build();
            physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());
            location.physical_location = Some(physical);
            result.locations = Some(vec![location]);

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("skillcheck")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(descriptors)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}
