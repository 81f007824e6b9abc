use ohub_domain::client::{Branch, ClientRecord, Competitor, PersonalInfo};
use ohub_domain::constants::{STEP_BRANCHES, STEP_PERSONAL};
use ohub_domain::steps::StepSet;
use serde_json::json;

#[test]
fn client_record_serializes_camel_case() {
    let mut record = ClientRecord::default();
    record.personal.full_name = "Sara Mostafa".to_owned();
    record.business.main_office_address = "12 Tahrir Sq".to_owned();

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["personal"]["fullName"], "Sara Mostafa");
    assert_eq!(value["business"]["mainOfficeAddress"], "12 Tahrir Sq");
}

#[test]
fn partial_record_loads_with_defaults() {
    let raw = json!({
        "personal": { "fullName": "Omar" },
        "branches": [{ "name": "Downtown" }]
    });

    let record: ClientRecord = serde_json::from_value(raw).unwrap();
    assert_eq!(
        record.personal,
        PersonalInfo { full_name: "Omar".to_owned(), ..PersonalInfo::default() }
    );
    assert_eq!(
        record.branches,
        vec![Branch { name: "Downtown".to_owned(), ..Branch::default() }]
    );
    assert!(record.competitors.is_empty());
    assert!(record.id.is_empty());
}

#[test]
fn competitor_swot_lists_keep_order() {
    let raw = json!({
        "name": "Rival Co",
        "swot": { "strengths": ["brand", "reach", "pricing"] }
    });

    let competitor: Competitor = serde_json::from_value(raw).unwrap();
    assert_eq!(competitor.swot.strengths, vec!["brand", "reach", "pricing"]);
    assert!(competitor.swot.threats.is_empty());
}

#[test]
fn step_set_roundtrips_as_bits() {
    let done = StepSet::PERSONAL | StepSet::BRANCHES;

    let encoded = serde_json::to_string(&done).unwrap();
    assert_eq!(encoded, "5");

    let decoded: StepSet = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, done);
}

#[test]
fn step_set_parses_step_names() {
    assert_eq!(StepSet::from(STEP_PERSONAL), StepSet::PERSONAL);
    assert_eq!(StepSet::from(STEP_BRANCHES), StepSet::BRANCHES);
    assert_eq!(StepSet::from("unknown"), StepSet::empty());
    assert_eq!(StepSet::from("*"), StepSet::ALL);
}
