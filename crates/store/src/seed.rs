//! The fixed starting document
//!
//! A new editing session begins from this configuration: bucket and
//! result-prefix settings, two source/target pairs (one nested under the
//! input-file section, one top-level), the processing case, and the JIRA
//! testcase block with its test plans and testcases.

use confedit_core::Document;
use serde_json::json;

/// The configuration document a fresh editing session starts from
pub fn default_document() -> Document {
    Document::from_value(json!({
        "bucket_name": "lly-gss",
        "inputfileconfig": {
            "sources_and_targets": {
                "source": {
                    "path": "s3://test",
                    "type": "s3",
                    "format": "csv",
                    "delimiter": ",",
                    "compositekeys": "cand_id",
                    "matchingcols": "cand_id"
                },
                "target": {
                    "path": "s3://test",
                    "type": "s3",
                    "format": "csv",
                    "delimiter": ",",
                    "compositekeys": "cand_id",
                    "matchingcols": "cand_id"
                },
                "processing_case": "General_Payment"
            }
        },
        "source": {
            "path": "s3://",
            "type": "s3",
            "format": "csv",
            "delimiter": ",",
            "compositekeys": "code",
            "matchingcols": "CODE"
        },
        "target": {
            "path": "s3",
            "type": "s3",
            "format": "csv",
            "delimiter": ",",
            "compositekeys": "code",
            "matchingcols": "CODE"
        },
        "processing_case": "International",
        "results_prefix": "DAD",
        "jira_updation": "Yes",
        "jira_defect_creation": "No",
        "testcaseconfig_config_new": {
            "execution": {
                "epic": "DEMOSCRUM-659",
                "assignee": "34343434523443",
                "priority": "highest",
                "test_plan": [
                    {
                        "status": ["TO DO"],
                        "summary": "Demo Test Plan",
                        "test_plan_id": "DEMOSCRUM-660"
                    }
                ],
                "components": "Automation",
                "fixVersions": "Test",
                "project_name": "DEMOSCRUM",
                "affectversion": "",
                "qa_execution_key": "DEMOSCRUM-1181"
            },
            "testcases": [
                {
                    "config_data": {},
                    "test_case_id": "DEMOSCRUM-885"
                }
            ],
            "JIRA_Secret_Name": "gss_jira_secret",
            "payload_filename": "testcase_config.json"
        }
    }))
}
