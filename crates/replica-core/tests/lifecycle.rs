use std::sync::Mutex;

use replica_core::{
    is_complete, on_event, LifecycleEvent, ReplicaStatus, ReplicaUpdate, RequestType,
    ResourceProperties, TableDescription, TableService, TableStatus,
};

// ---------------------------------------------------------------------------
// FakeTable: in-memory TableService
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct FakeError(String);

impl std::fmt::Display for FakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FakeError {}

/// Serves whatever snapshot the test installs and records every update.
struct FakeTable {
    state: Mutex<TableDescription>,
    updates: Mutex<Vec<ReplicaUpdate>>,
    describes: Mutex<usize>,
    fail_with: Option<String>,
}

impl FakeTable {
    fn new(state: TableDescription) -> Self {
        Self {
            state: Mutex::new(state),
            updates: Mutex::new(Vec::new()),
            describes: Mutex::new(0),
            fail_with: None,
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new(TableDescription::default())
        }
    }

    fn set(&self, state: TableDescription) {
        *self.state.lock().unwrap() = state;
    }

    fn updates(&self) -> Vec<ReplicaUpdate> {
        self.updates.lock().unwrap().clone()
    }

    fn describes(&self) -> usize {
        *self.describes.lock().unwrap()
    }
}

impl TableService for FakeTable {
    type Error = FakeError;

    async fn describe_table(&self, _table_name: &str) -> Result<TableDescription, FakeError> {
        *self.describes.lock().unwrap() += 1;
        if let Some(msg) = &self.fail_with {
            return Err(FakeError(msg.clone()));
        }
        Ok(self.state.lock().unwrap().clone())
    }

    async fn update_table(
        &self,
        _table_name: &str,
        update: &ReplicaUpdate,
    ) -> Result<TableDescription, FakeError> {
        if let Some(msg) = &self.fail_with {
            return Err(FakeError(msg.clone()));
        }
        self.updates.lock().unwrap().push(update.clone());
        Ok(self.state.lock().unwrap().clone())
    }
}

fn event(request_type: RequestType) -> LifecycleEvent {
    LifecycleEvent::new(request_type, ResourceProperties::new("Orders", "eu-west-1"))
}

fn orders(status: TableStatus) -> TableDescription {
    TableDescription::new("Orders", status)
}

fn orders_with(status: TableStatus, replica: ReplicaStatus) -> TableDescription {
    orders(status).with_replica("eu-west-1", replica)
}

// ---------------------------------------------------------------------------
// Event phase
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_adds_replica_without_describing() {
    let svc = FakeTable::new(orders(TableStatus::Active));
    let resp = on_event(&svc, &event(RequestType::Create)).await.unwrap();

    assert_eq!(resp.physical_resource_id.as_deref(), Some("Orders-eu-west-1"));
    assert_eq!(svc.updates(), vec![ReplicaUpdate::add("eu-west-1")]);
    assert_eq!(svc.describes(), 0);
}

#[tokio::test]
async fn delete_removes_replica_and_clears_physical_id() {
    let svc = FakeTable::new(orders_with(TableStatus::Active, ReplicaStatus::Active));
    let resp = on_event(&svc, &event(RequestType::Delete)).await.unwrap();

    assert_eq!(resp.physical_resource_id, None);
    assert_eq!(svc.updates(), vec![ReplicaUpdate::remove("eu-west-1")]);
}

#[tokio::test]
async fn update_with_existing_replica_issues_no_mutation() {
    let svc = FakeTable::new(orders_with(TableStatus::Active, ReplicaStatus::Active));
    let resp = on_event(&svc, &event(RequestType::Update)).await.unwrap();

    assert_eq!(resp.physical_resource_id.as_deref(), Some("Orders-eu-west-1"));
    assert!(svc.updates().is_empty());
    assert_eq!(svc.describes(), 1);
}

#[tokio::test]
async fn update_after_table_replacement_adds_replica() {
    let replaced = orders(TableStatus::Active).with_replica("us-west-2", ReplicaStatus::Active);
    let svc = FakeTable::new(replaced);
    let resp = on_event(&svc, &event(RequestType::Update)).await.unwrap();

    assert_eq!(resp.physical_resource_id.as_deref(), Some("Orders-eu-west-1"));
    assert_eq!(svc.updates(), vec![ReplicaUpdate::add("eu-west-1")]);
}

#[tokio::test]
async fn repeated_update_never_double_adds() {
    let svc = FakeTable::new(orders(TableStatus::Active));
    on_event(&svc, &event(RequestType::Update)).await.unwrap();
    // The first add was accepted; the service now lists the replica.
    svc.set(orders_with(TableStatus::Updating, ReplicaStatus::Creating));
    on_event(&svc, &event(RequestType::Update)).await.unwrap();

    assert_eq!(svc.updates(), vec![ReplicaUpdate::add("eu-west-1")]);
}

#[tokio::test]
async fn event_phase_propagates_remote_failure() {
    let svc = FakeTable::failing("ThrottlingException: rate exceeded");
    let err = on_event(&svc, &event(RequestType::Update)).await.unwrap_err();
    assert_eq!(err.to_string(), "ThrottlingException: rate exceeded");

    let err = on_event(&svc, &event(RequestType::Create)).await.unwrap_err();
    assert!(err.to_string().contains("ThrottlingException"));
}

// ---------------------------------------------------------------------------
// Completion checks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_scenario_converges_once_replica_active() {
    let svc = FakeTable::new(orders(TableStatus::Active));
    let create = event(RequestType::Create);

    let resp = on_event(&svc, &create).await.unwrap();
    assert_eq!(resp.physical_resource_id.as_deref(), Some("Orders-eu-west-1"));

    svc.set(orders_with(TableStatus::Updating, ReplicaStatus::Creating));
    assert!(!is_complete(&svc, &create).await.unwrap().is_complete);

    svc.set(orders_with(TableStatus::Active, ReplicaStatus::Creating));
    assert!(!is_complete(&svc, &create).await.unwrap().is_complete);

    svc.set(orders_with(TableStatus::Active, ReplicaStatus::Active));
    assert!(is_complete(&svc, &create).await.unwrap().is_complete);
    assert_eq!(svc.updates().len(), 1, "checks never mutate");
}

#[tokio::test]
async fn delete_scenario_converges_once_replica_absent() {
    let svc = FakeTable::new(orders_with(TableStatus::Active, ReplicaStatus::Active));
    let delete = event(RequestType::Delete);

    let resp = on_event(&svc, &delete).await.unwrap();
    assert_eq!(resp.physical_resource_id, None);

    svc.set(orders_with(TableStatus::Active, ReplicaStatus::Deleting));
    assert!(!is_complete(&svc, &delete).await.unwrap().is_complete);

    svc.set(orders(TableStatus::Active));
    assert!(is_complete(&svc, &delete).await.unwrap().is_complete);
}

#[tokio::test]
async fn skip_wait_completes_before_replica_is_active() {
    let svc = FakeTable::new(orders_with(TableStatus::Active, ReplicaStatus::Creating));
    let mut create = event(RequestType::Create);
    assert!(!is_complete(&svc, &create).await.unwrap().is_complete);

    create.resource_properties.skip_replication_completed_wait = true;
    assert!(is_complete(&svc, &create).await.unwrap().is_complete);
}

#[tokio::test]
async fn repeated_checks_on_unchanged_state_agree() {
    let svc = FakeTable::new(orders_with(TableStatus::Active, ReplicaStatus::Creating));
    let update = event(RequestType::Update);

    for _ in 0..3 {
        assert!(!is_complete(&svc, &update).await.unwrap().is_complete);
    }
    assert_eq!(svc.describes(), 3, "every check reads fresh state");
}

#[tokio::test]
async fn check_failure_is_an_error_not_false() {
    let svc = FakeTable::failing("ResourceNotFoundException: Requested resource not found");
    let result = is_complete(&svc, &event(RequestType::Delete)).await;
    assert!(result.is_err());
}
