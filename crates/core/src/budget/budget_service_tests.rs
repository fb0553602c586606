//! Unit tests for the budget calculation service.

use super::*;
use crate::clients::{Client, ClientRepositoryTrait, ClientUpdate, NewClient};
use crate::errors::{DatabaseError, Error, Result};
use crate::expenses::{
    NewPersonalExpense, NewProfessionalExpense, PersonalExpense, PersonalExpenseRepositoryTrait,
    PersonalExpenseUpdate, ProfessionalExpense, ProfessionalExpenseRepositoryTrait,
    ProfessionalExpenseUpdate,
};
use crate::response::ServiceResponse;
use crate::settings::{SettingsRepositoryTrait, SettingsUpdate, TherapistSettings};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

const OWNER: &str = "owner-1";
const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockClientRepository {
    clients: Vec<Client>,
    fail: bool,
}

#[async_trait]
impl ClientRepositoryTrait for MockClientRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<Client>> {
        if self.fail {
            return Err(Error::Database(DatabaseError::QueryFailed(
                "store unavailable".to_string(),
            )));
        }
        Ok(self
            .clients
            .iter()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn create(&self, _new_client: NewClient) -> Result<Client> {
        unimplemented!()
    }

    async fn update(&self, _client_update: ClientUpdate) -> Result<Client> {
        unimplemented!()
    }

    async fn delete(&self, _client_id: &str, _owner_id: &str) -> Result<usize> {
        unimplemented!()
    }
}

struct MockPersonalExpenseRepository {
    expenses: Vec<PersonalExpense>,
    fail: bool,
}

#[async_trait]
impl PersonalExpenseRepositoryTrait for MockPersonalExpenseRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<PersonalExpense>> {
        if self.fail {
            return Err(Error::Database(DatabaseError::QueryFailed(
                "store unavailable".to_string(),
            )));
        }
        Ok(self
            .expenses
            .iter()
            .filter(|e| e.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn create(&self, _new_expense: NewPersonalExpense) -> Result<PersonalExpense> {
        unimplemented!()
    }

    async fn update(&self, _expense_update: PersonalExpenseUpdate) -> Result<PersonalExpense> {
        unimplemented!()
    }

    async fn delete(&self, _expense_id: &str, _owner_id: &str) -> Result<usize> {
        unimplemented!()
    }
}

struct MockProfessionalExpenseRepository {
    expenses: Vec<ProfessionalExpense>,
    fail: bool,
}

#[async_trait]
impl ProfessionalExpenseRepositoryTrait for MockProfessionalExpenseRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<ProfessionalExpense>> {
        if self.fail {
            return Err(Error::Database(DatabaseError::QueryFailed(
                "store unavailable".to_string(),
            )));
        }
        Ok(self
            .expenses
            .iter()
            .filter(|e| e.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn create(&self, _new_expense: NewProfessionalExpense) -> Result<ProfessionalExpense> {
        unimplemented!()
    }

    async fn update(
        &self,
        _expense_update: ProfessionalExpenseUpdate,
    ) -> Result<ProfessionalExpense> {
        unimplemented!()
    }

    async fn delete(&self, _expense_id: &str, _owner_id: &str) -> Result<usize> {
        unimplemented!()
    }
}

struct MockSettingsRepository {
    settings: Option<TherapistSettings>,
    fail: bool,
}

#[async_trait]
impl SettingsRepositoryTrait for MockSettingsRepository {
    fn get_by_owner(&self, owner_id: &str) -> Result<Option<TherapistSettings>> {
        if self.fail {
            return Err(Error::Database(DatabaseError::QueryFailed(
                "store unavailable".to_string(),
            )));
        }
        Ok(self
            .settings
            .clone()
            .filter(|s| s.owner_id == owner_id))
    }

    async fn upsert(&self, _settings_update: SettingsUpdate) -> Result<TherapistSettings> {
        unimplemented!()
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn client(sessions: i32, rate: f64) -> Client {
    let now = Utc::now().naive_utc();
    Client {
        id: uuid::Uuid::new_v4().to_string(),
        owner_id: OWNER.to_string(),
        name: "Client".to_string(),
        monthly_sessions: sessions,
        session_rate: rate,
        created_at: now,
        updated_at: now,
    }
}

fn personal(cost: f64) -> PersonalExpense {
    let now = Utc::now().naive_utc();
    PersonalExpense {
        id: uuid::Uuid::new_v4().to_string(),
        owner_id: OWNER.to_string(),
        description: "Personal".to_string(),
        cost,
        created_at: now,
        updated_at: now,
    }
}

fn professional(cost: f64) -> ProfessionalExpense {
    let now = Utc::now().naive_utc();
    ProfessionalExpense {
        id: uuid::Uuid::new_v4().to_string(),
        owner_id: OWNER.to_string(),
        description: "Professional".to_string(),
        cost,
        created_at: now,
        updated_at: now,
    }
}

fn goal(monthly_savings_goal: f64) -> TherapistSettings {
    let now = Utc::now().naive_utc();
    TherapistSettings {
        id: uuid::Uuid::new_v4().to_string(),
        owner_id: OWNER.to_string(),
        monthly_savings_goal,
        created_at: now,
        updated_at: now,
    }
}

struct Fixture {
    clients: Vec<Client>,
    personal: Vec<PersonalExpense>,
    professional: Vec<ProfessionalExpense>,
    settings: Option<TherapistSettings>,
    fail_clients: bool,
    fail_personal: bool,
    fail_professional: bool,
    fail_settings: bool,
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            clients: vec![],
            personal: vec![],
            professional: vec![],
            settings: None,
            fail_clients: false,
            fail_personal: false,
            fail_professional: false,
            fail_settings: false,
        }
    }
}

impl Fixture {
    fn service(self) -> BudgetService {
        BudgetService::new(
            Arc::new(MockClientRepository {
                clients: self.clients,
                fail: self.fail_clients,
            }),
            Arc::new(MockPersonalExpenseRepository {
                expenses: self.personal,
                fail: self.fail_personal,
            }),
            Arc::new(MockProfessionalExpenseRepository {
                expenses: self.professional,
                fail: self.fail_professional,
            }),
            Arc::new(MockSettingsRepository {
                settings: self.settings,
                fail: self.fail_settings,
            }),
        )
    }
}

// ============================================================================
// Bracket selection
// ============================================================================

#[test]
fn irpf_brackets_are_upper_bound_inclusive() {
    assert_eq!(irpf_rate_for_annual_gross(0.0), 0.19);
    assert_eq!(irpf_rate_for_annual_gross(12_450.0), 0.19);
    assert_eq!(irpf_rate_for_annual_gross(12_450.01), 0.24);
    assert_eq!(irpf_rate_for_annual_gross(20_200.0), 0.24);
    assert_eq!(irpf_rate_for_annual_gross(20_200.01), 0.30);
    assert_eq!(irpf_rate_for_annual_gross(35_200.0), 0.30);
    assert_eq!(irpf_rate_for_annual_gross(35_200.01), 0.37);
    assert_eq!(irpf_rate_for_annual_gross(60_000.0), 0.37);
    assert_eq!(irpf_rate_for_annual_gross(60_000.01), 0.45);
}

#[test]
fn irpf_bracket_boundaries_through_the_service() {
    // 1037.5 monthly annualizes to exactly 12450.
    let summary = Fixture {
        clients: vec![client(1, 1_037.5)],
        ..Default::default()
    }
    .service()
    .calculate_budget(OWNER)
    .unwrap();
    assert_eq!(summary.irpf_rate, 0.19);

    // 5000 monthly annualizes to exactly 60000.
    let summary = Fixture {
        clients: vec![client(1, 5_000.0)],
        ..Default::default()
    }
    .service()
    .calculate_budget(OWNER)
    .unwrap();
    assert_eq!(summary.irpf_rate, 0.37);

    // Just above the top bound.
    let summary = Fixture {
        clients: vec![client(1, 5_001.0)],
        ..Default::default()
    }
    .service()
    .calculate_budget(OWNER)
    .unwrap();
    assert_eq!(summary.irpf_rate, 0.45);
}

// ============================================================================
// The calculation
// ============================================================================

#[test]
fn worked_example_matches_reference_numbers() {
    // One client, 10 sessions at 60: gross 600, annual 7200 -> 19% bracket.
    let summary = Fixture {
        clients: vec![client(10, 60.0)],
        personal: vec![personal(30.0)],
        professional: vec![professional(50.0)],
        settings: Some(goal(200.0)),
        ..Default::default()
    }
    .service()
    .calculate_budget(OWNER)
    .unwrap();

    assert_close(summary.gross_income, 600.0);
    assert_eq!(summary.irpf_rate, 0.19);
    assert_close(summary.vat, 126.0);
    assert_close(summary.income_tax, 114.0);
    assert_close(summary.total_professional, 50.0);
    assert_close(summary.total_personal, 30.0);
    assert_close(summary.net_income, 280.0);
    assert_close(summary.projected_savings, 1_680.0);
    assert_close(summary.savings_goal, 1_200.0);
    assert_close(summary.difference, 480.0);
}

#[test]
fn clients_without_sessions_or_rate_contribute_nothing() {
    let summary = Fixture {
        clients: vec![client(0, 80.0), client(12, 0.0), client(4, 55.0)],
        ..Default::default()
    }
    .service()
    .calculate_budget(OWNER)
    .unwrap();

    assert_close(summary.gross_income, 220.0);
}

#[test]
fn gross_income_aggregates_all_clients() {
    let summary = Fixture {
        clients: vec![client(4, 50.0), client(2, 70.0), client(1, 60.0)],
        ..Default::default()
    }
    .service()
    .calculate_budget(OWNER)
    .unwrap();

    // 200 + 140 + 60
    assert_close(summary.gross_income, 400.0);
    assert_close(summary.vat, 400.0 * 0.21);
}

#[test]
fn net_income_identity_holds_with_negative_costs() {
    let summary = Fixture {
        clients: vec![client(8, 90.0)],
        personal: vec![personal(100.0), personal(-40.0)],
        professional: vec![professional(250.0), professional(-10.0)],
        settings: Some(goal(300.0)),
        ..Default::default()
    }
    .service()
    .calculate_budget(OWNER)
    .unwrap();

    assert_close(summary.total_personal, 60.0);
    assert_close(summary.total_professional, 240.0);
    assert_close(
        summary.net_income,
        summary.gross_income
            - summary.total_professional
            - summary.income_tax
            - summary.vat
            - summary.total_personal,
    );
    assert_close(summary.projected_savings, summary.net_income * 6.0);
    assert_close(summary.savings_goal, 300.0 * 6.0);
    assert_close(
        summary.difference,
        summary.projected_savings - summary.savings_goal,
    );
}

#[test]
fn empty_collections_produce_an_all_zero_summary() {
    let summary = Fixture::default().service().calculate_budget(OWNER).unwrap();

    assert_eq!(summary.gross_income, 0.0);
    assert_eq!(summary.vat, 0.0);
    assert_eq!(summary.irpf_rate, 0.19);
    assert_eq!(summary.income_tax, 0.0);
    assert_eq!(summary.total_professional, 0.0);
    assert_eq!(summary.total_personal, 0.0);
    assert_eq!(summary.net_income, 0.0);
    assert_eq!(summary.projected_savings, 0.0);
    assert_eq!(summary.savings_goal, 0.0);
    assert_eq!(summary.difference, 0.0);
}

#[test]
fn missing_settings_row_means_zero_goal_not_an_error() {
    let summary = Fixture {
        clients: vec![client(10, 60.0)],
        settings: None,
        ..Default::default()
    }
    .service()
    .calculate_budget(OWNER)
    .unwrap();

    assert_eq!(summary.savings_goal, 0.0);
    assert_close(summary.difference, summary.projected_savings);
}

#[test]
fn another_owners_settings_row_is_invisible() {
    let mut other = goal(999.0);
    other.owner_id = "owner-2".to_string();

    let summary = Fixture {
        clients: vec![client(10, 60.0)],
        settings: Some(other),
        ..Default::default()
    }
    .service()
    .calculate_budget(OWNER)
    .unwrap();

    assert_eq!(summary.savings_goal, 0.0);
}

#[test]
fn non_finite_amounts_coerce_to_zero() {
    let summary = Fixture {
        clients: vec![client(10, f64::NAN), client(2, f64::INFINITY), client(4, 55.0)],
        personal: vec![personal(f64::NAN)],
        ..Default::default()
    }
    .service()
    .calculate_budget(OWNER)
    .unwrap();

    assert_close(summary.gross_income, 220.0);
    assert_close(summary.total_personal, 0.0);
    assert!(summary.net_income.is_finite());
}

// ============================================================================
// Failure behavior
// ============================================================================

#[test]
fn any_failing_read_aborts_the_calculation() {
    let cases = [
        Fixture {
            fail_clients: true,
            ..Default::default()
        },
        Fixture {
            fail_personal: true,
            ..Default::default()
        },
        Fixture {
            fail_professional: true,
            ..Default::default()
        },
        Fixture {
            fail_settings: true,
            ..Default::default()
        },
    ];

    for fixture in cases {
        let result = fixture.service().calculate_budget(OWNER);
        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::QueryFailed(_)))
        ));
    }
}

#[test]
fn failures_collapse_to_a_generic_envelope() {
    let result = Fixture {
        fail_settings: true,
        ..Default::default()
    }
    .service()
    .calculate_budget(OWNER);

    let response = ServiceResponse::from_result(
        result,
        "Budget calculated successfully",
        "Failed to calculate budget",
    );
    assert!(!response.success);
    assert_eq!(response.message, "Failed to calculate budget");
    assert!(response.data.is_none());
}
