//! Integration tests for the extraction pipeline.

use tempfile::TempDir;

use admx_cli::pipeline::extract_records;
use admx_model::UNRESOLVED;

const VENDOR_ADMX: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<policyDefinitions>
  <categories>
    <category name="Updates" displayName="$(string.CAT_UPDATES)"/>
  </categories>
  <supportedOn>
    <definitions>
      <definition name="Supported_Win10" displayName="en_base:SUP_WIN10_STR"/>
    </definitions>
  </supportedOn>
  <policies>
    <policy name="DisableAutoUpdate" class="Machine"
            displayName="$(string.POL_NAME)" explainText="$(string.POL_HELP)"
            key="Software\Policies\Vendor\Updates" valueName="NoAutoUpdate">
      <parentCategory ref="Updates"/>
      <supportedOn ref="Supported_Win10"/>
    </policy>
    <policy name="MissingStrings" class="User"
            displayName="$(string.POL_123_NAME)" explainText="$(string.POL_123_HELP)"
            key="Software\Policies\Vendor" valueName="Missing">
      <parentCategory ref="Updates"/>
    </policy>
  </policies>
</policyDefinitions>"#;

const VENDOR_ADML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<policyDefinitionResources>
  <resources>
    <stringTable>
      <string id="CAT_UPDATES">Update settings</string>
      <string id="POL_NAME">Disable automatic updates</string>
      <string id="POL_HELP">Stops the updater service.</string>
    </stringTable>
  </resources>
</policyDefinitionResources>"#;

const OTHER_ADMX: &str = r#"<policyDefinitions>
  <policies>
    <policy name="SharedBranding" class="User"
            displayName="shared_strings:X" explainText="$(string.OTHER_HELP)"
            key="Software\Policies\Other" valueName="Branding">
    </policy>
  </policies>
</policyDefinitions>"#;

const OTHER_ADML: &str = r#"<policyDefinitionResources>
  <resources>
    <stringTable>
      <string id="OTHER_HELP">Branding help.</string>
    </stringTable>
  </resources>
</policyDefinitionResources>"#;

const EN_BASE_ADML: &str = r#"<policyDefinitionResources>
  <resources>
    <stringTable>
      <string id="SUP_WIN10_STR">Windows 10</string>
    </stringTable>
  </resources>
</policyDefinitionResources>"#;

const SHARED_ADML: &str = r#"<policyDefinitionResources>
  <resources>
    <stringTable>
      <string id="X">Shared branding</string>
    </stringTable>
  </resources>
</policyDefinitionResources>"#;

fn create_templates_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("other.admx"), OTHER_ADMX).unwrap();
    std::fs::write(dir.path().join("vendor.admx"), VENDOR_ADMX).unwrap();

    let lang = dir.path().join("en-US");
    std::fs::create_dir(&lang).unwrap();
    std::fs::write(lang.join("vendor.adml"), VENDOR_ADML).unwrap();
    std::fs::write(lang.join("other.adml"), OTHER_ADML).unwrap();
    std::fs::write(lang.join("en_base.adml"), EN_BASE_ADML).unwrap();
    std::fs::write(lang.join("shared_strings.adml"), SHARED_ADML).unwrap();
    dir
}

#[test]
fn resolves_all_policies_across_files() {
    let dir = create_templates_dir();
    let result = extract_records(dir.path(), "en-US").unwrap();

    assert!(result.errors.is_empty());
    assert_eq!(result.records.len(), 3);
    // Files in filename order, policies in document order.
    let names: Vec<&str> = result.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["SharedBranding", "DisableAutoUpdate", "MissingStrings"]
    );
}

#[test]
fn named_support_definition_resolves_through_cross_file() {
    let dir = create_templates_dir();
    let result = extract_records(dir.path(), "en-US").unwrap();

    let record = result
        .records
        .iter()
        .find(|r| r.name == "DisableAutoUpdate")
        .unwrap();
    assert_eq!(record.supported_on, "Windows 10");
    assert_eq!(record.parent_category, "Update settings");
    assert_eq!(record.display_name, "Disable automatic updates");
    assert_eq!(record.explain_text, "Stops the updater service.");
    assert_eq!(record.class, "Machine");
    assert_eq!(record.source_file, "vendor");
}

#[test]
fn cross_file_display_reference_resolves() {
    let dir = create_templates_dir();
    let result = extract_records(dir.path(), "en-US").unwrap();

    let record = result
        .records
        .iter()
        .find(|r| r.name == "SharedBranding")
        .unwrap();
    assert_eq!(record.display_name, "Shared branding");
    assert_eq!(record.explain_text, "Branding help.");
}

#[test]
fn missing_keys_yield_unresolved_but_full_records() {
    let dir = create_templates_dir();
    let result = extract_records(dir.path(), "en-US").unwrap();

    let record = result
        .records
        .iter()
        .find(|r| r.name == "MissingStrings")
        .unwrap();
    assert_eq!(record.display_name, UNRESOLVED);
    assert_eq!(record.explain_text, UNRESOLVED);
    assert_eq!(record.parent_category, "Update settings");
    assert_eq!(record.registry_value_name, "Missing");
}

#[test]
fn malformed_definition_file_is_skipped_not_fatal() {
    let dir = create_templates_dir();
    std::fs::write(dir.path().join("broken.admx"), "definitely not xml <").unwrap();

    let result = extract_records(dir.path(), "en-US").unwrap();
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("broken.admx"));
    assert_eq!(result.records.len(), 3);
}

#[test]
fn missing_default_localization_degrades_to_unresolved() {
    let dir = create_templates_dir();
    std::fs::remove_file(dir.path().join("en-US").join("vendor.adml")).unwrap();

    let result = extract_records(dir.path(), "en-US").unwrap();
    let record = result
        .records
        .iter()
        .find(|r| r.name == "DisableAutoUpdate")
        .unwrap();
    assert_eq!(record.display_name, UNRESOLVED);
    // Cross-file references do not depend on the default table.
    assert_eq!(record.supported_on, "Windows 10");
}

#[test]
fn unknown_language_resolves_nothing_but_completes() {
    let dir = create_templates_dir();
    let result = extract_records(dir.path(), "de-DE").unwrap();

    assert_eq!(result.records.len(), 3);
    assert!(
        result
            .records
            .iter()
            .all(|r| r.display_name == UNRESOLVED)
    );
}

#[test]
fn missing_templates_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    assert!(extract_records(&dir.path().join("nope"), "en-US").is_err());
}

#[test]
fn per_file_summaries_count_policies_and_unresolved_fields() {
    let dir = create_templates_dir();
    let result = extract_records(dir.path(), "en-US").unwrap();

    let vendor = result
        .files
        .iter()
        .find(|f| f.source_file == "vendor")
        .unwrap();
    assert_eq!(vendor.policies, 2);
    // MissingStrings: display + explain unresolved, supportedOn absent.
    assert_eq!(vendor.unresolved_fields, 2);
}
