use ohub_domain::constants::{KEY_CLIENT_DATA, KEY_CLIENTS, KEY_SELECTED_CLIENT_ID};
use ohub_domain::client::ClientRecord;
use ohub_domain::steps::StepSet;
use ohub_events::EventHub;
use ohub_storage::Store;
use ohub_wizard::steps::SwotList;
use ohub_wizard::{FieldName, Step, Wizard, WizardEvent};
use std::sync::{Arc, Mutex};

fn recorded_events(hub: &EventHub) -> Arc<Mutex<Vec<WizardEvent>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    hub.subscribe::<WizardEvent, _>(move |event| {
        sink.lock().unwrap().push(event.clone());
    });
    log
}

#[test]
fn full_walkthrough_assembles_and_persists_the_record() {
    let store = Store::in_memory();
    let hub = EventHub::new();
    let mut wizard = Wizard::new(store.clone(), hub);

    // Step 1: personal info.
    wizard.edit(FieldName::FullName, "Sara Mostafa");
    wizard.edit(FieldName::Email, "sara@agency.com");
    wizard.edit(FieldName::Phone, "01012345678");
    wizard.edit(FieldName::Position, "Owner");
    assert!(wizard.submit_step().unwrap());
    assert_eq!(wizard.active_step(), Step::Business);

    // Step 2: business info.
    wizard.edit(FieldName::BusinessName, "Nile Bakery");
    wizard.edit(FieldName::Category, "Food & Beverage");
    wizard.edit(FieldName::EstablishedYear, "2015");
    assert!(wizard.submit_step().unwrap());

    // Step 3: branches.
    wizard.edit(FieldName::BranchName, "Downtown");
    wizard.edit(FieldName::BranchPhone, "01112345678");
    assert!(wizard.add_item());
    assert!(wizard.submit_step().unwrap());

    // Step 4: competitors (with SWOT).
    wizard.edit(FieldName::CompetitorName, "Rival Bakery");
    wizard.edit(FieldName::CompetitorWebsite, "rival-bakery.com");
    assert!(wizard.add_swot(SwotList::Strengths, "larger fleet"));
    assert!(wizard.add_item());
    assert!(wizard.submit_step().unwrap());

    // Step 5: segments — final submit persists.
    wizard.edit(FieldName::SegmentName, "Families");
    wizard.edit(FieldName::TargetAge, "35");
    assert!(wizard.add_item());
    assert!(wizard.submit_step().unwrap());

    assert!(wizard.is_complete());
    assert_eq!(wizard.completed(), StepSet::ALL);

    let clients: Vec<ClientRecord> = store.get(KEY_CLIENTS).unwrap().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].personal.full_name, "Sara Mostafa");
    assert_eq!(clients[0].branches.len(), 1);
    assert_eq!(clients[0].competitors[0].swot.strengths, vec!["larger fleet"]);
    assert_eq!(clients[0].segments[0].target_age, "35");
    assert!(!clients[0].id.is_empty());

    let selected: String = store.get(KEY_SELECTED_CLIENT_ID).unwrap().unwrap();
    assert_eq!(selected, clients[0].id);

    let fallback: ClientRecord = store.get(KEY_CLIENT_DATA).unwrap().unwrap();
    assert_eq!(fallback, clients[0]);
}

#[test]
fn rejected_step_blocks_navigation_until_corrected() {
    let mut wizard = Wizard::new(Store::in_memory(), EventHub::new());

    wizard.edit(FieldName::Email, "broken@nowhere");
    assert!(!wizard.submit_step().unwrap());
    assert_eq!(wizard.active_step(), Step::Personal);
    assert!(wizard.errors().contains_key(&FieldName::Email));

    wizard.edit(FieldName::Email, "fixed@agency.com");
    assert!(wizard.errors().is_empty(), "editing clears the error optimistically");
    assert!(wizard.submit_step().unwrap());
    assert_eq!(wizard.active_step(), Step::Business);
}

#[test]
fn previous_step_needs_no_validation_and_keeps_data() {
    let mut wizard = Wizard::new(Store::in_memory(), EventHub::new());
    assert!(wizard.submit_step().unwrap());

    // Type something invalid on the business step, then go back.
    wizard.edit(FieldName::BusinessName, "Nile Bakery");
    assert!(wizard.previous_step());
    assert_eq!(wizard.active_step(), Step::Personal);

    // The unvalidated buffer was merged into the aggregate.
    assert_eq!(wizard.record().business.business_name, "Nile Bakery");

    // And the buffer itself survives for the return trip.
    assert_eq!(wizard.business().form().business_name, "Nile Bakery");

    assert!(!wizard.previous_step(), "cannot retreat from the first step");
}

#[test]
fn branch_phone_blocks_but_competitor_website_does_not() {
    // The known per-step asymmetry, preserved deliberately.
    let mut wizard = Wizard::new(Store::in_memory(), EventHub::new());
    assert!(wizard.submit_step().unwrap());
    assert!(wizard.submit_step().unwrap());

    // Branches: malformed phone blocks the append.
    assert_eq!(wizard.active_step(), Step::Branches);
    wizard.edit(FieldName::BranchPhone, "0000");
    assert!(!wizard.add_item());
    assert!(wizard.branches().items().is_empty());
    assert!(wizard.submit_step().unwrap());

    // Competitors: malformed website is surfaced but the entry commits.
    assert_eq!(wizard.active_step(), Step::Competitors);
    wizard.edit(FieldName::CompetitorWebsite, "not a url");
    assert!(wizard.add_item());
    assert_eq!(wizard.competitors().items().len(), 1);
    assert!(wizard.errors().contains_key(&FieldName::CompetitorWebsite));
}

#[test]
fn events_mirror_every_committed_mutation() {
    let store = Store::in_memory();
    let hub = EventHub::new();
    let log = recorded_events(&hub);
    let mut wizard = Wizard::new(store, hub);

    wizard.edit(FieldName::FullName, "Sara");
    wizard.edit(FieldName::Email, "sara@agency.com");
    {
        let events = log.lock().unwrap();
        assert_eq!(events.len(), 2, "one DraftUpdated per edit");
        assert!(matches!(events[0], WizardEvent::DraftUpdated { step: Step::Personal, .. }));
    }

    wizard.submit_step().unwrap();
    {
        let events = log.lock().unwrap();
        assert!(matches!(events.last(), Some(WizardEvent::StepAdvanced { step: Step::Personal, .. })));
    }

    wizard.previous_step();
    {
        let events = log.lock().unwrap();
        assert!(matches!(events.last(), Some(WizardEvent::StepRetreated { step: Step::Business, .. })));
    }
}

#[test]
fn completing_the_last_step_publishes_completed_with_the_saved_id() {
    let store = Store::in_memory();
    let hub = EventHub::new();
    let log = recorded_events(&hub);
    let mut wizard = Wizard::new(store, hub);

    for _ in 0..5 {
        assert!(wizard.submit_step().unwrap());
    }

    let events = log.lock().unwrap();
    let completed = events
        .iter()
        .find_map(|e| match e {
            WizardEvent::Completed { record } => Some(record.clone()),
            _ => None,
        })
        .expect("Completed event published");
    assert_eq!(completed.id.len(), 12);
}

#[test]
fn resume_hydrates_every_step_buffer() {
    let mut record = ClientRecord::default();
    record.personal.full_name = "Omar".to_owned();
    record.branches.push(ohub_domain::client::Branch {
        name: "Giza".to_owned(),
        ..Default::default()
    });

    let wizard = Wizard::resume(Store::in_memory(), EventHub::new(), record);
    assert_eq!(wizard.personal().form().full_name, "Omar");
    assert_eq!(wizard.branches().items().len(), 1);
}
