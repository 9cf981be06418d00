mod support;

use std::collections::BTreeMap;

use dispatch_core::config::DispatchConfig;
use dispatch_core::error::DispatchError;
use dispatch_core::model::{IncidentPriorityStats, MissionStatus};
use dispatch_core::orchestrator::{AssignmentOrchestrator, RecordKind};
use dispatch_core::snapshot::DispatchSnapshot;
use dispatch_core::test_helpers::{offset_north, BASE_LON};

use support::entities::{destination_north, IncidentBuilder, ResponderBuilder};

fn orchestrator() -> AssignmentOrchestrator {
    AssignmentOrchestrator::default()
}

#[test]
fn loose_fit_nearby_boat_is_assigned() {
    // 2 people, capacity 3: near tier (100) plus the tight-capacity bonus (50).
    let snapshot = DispatchSnapshot::new(
        vec![IncidentBuilder::new("inc").with_people(2).build()],
        vec![ResponderBuilder::new("boat").with_capacity(3).north(0.01).build()],
    );
    let report = orchestrator().dispatch(&snapshot).expect("dispatch");
    let mission = &report.missions[0];
    assert_eq!(mission.status, MissionStatus::Assigned);
    assert_eq!(mission.responder_id.as_deref(), Some("boat"));
    assert_eq!(mission.score, Some(150));
}

#[test]
fn roomy_nearby_boat_scores_distance_tier_only() {
    let snapshot = DispatchSnapshot::new(
        vec![IncidentBuilder::new("inc").with_people(2).build()],
        vec![ResponderBuilder::new("boat").with_capacity(9).north(0.01).build()],
    );
    let report = orchestrator().dispatch(&snapshot).expect("dispatch");
    assert_eq!(report.missions[0].status, MissionStatus::Assigned);
    assert_eq!(report.missions[0].score, Some(100));
}

#[test]
fn exact_capacity_match_scores_200() {
    let snapshot = DispatchSnapshot::new(
        vec![IncidentBuilder::new("inc").with_people(2).build()],
        vec![ResponderBuilder::new("boat").with_capacity(2).north(0.01).build()],
    );
    let report = orchestrator().dispatch(&snapshot).expect("dispatch");
    assert_eq!(report.missions[0].score, Some(200));
}

#[test]
fn exact_capacity_with_medical_scores_300() {
    let snapshot = DispatchSnapshot::new(
        vec![IncidentBuilder::new("inc").with_people(3).needing_medical().build()],
        vec![ResponderBuilder::new("medic")
            .with_capacity(3)
            .with_medical()
            .north(0.01)
            .build()],
    );
    let report = orchestrator().dispatch(&snapshot).expect("dispatch");
    assert_eq!(report.missions[0].score, Some(300));
}

#[test]
fn undersized_boat_leaves_mission_unassigned() {
    let snapshot = DispatchSnapshot::new(
        vec![IncidentBuilder::new("inc").with_people(5).build()],
        vec![ResponderBuilder::new("dinghy").with_capacity(4).build()],
    );
    let report = orchestrator().dispatch(&snapshot).expect("dispatch");
    let mission = &report.missions[0];
    assert_eq!(mission.status, MissionStatus::Unassigned);
    assert!(mission.responder_id.is_none());
    assert!(mission.score.is_none());
    assert_eq!(report.summary.no_compatible_responder, 1);
}

#[test]
fn zero_priority_is_never_dispatched() {
    let snapshot = DispatchSnapshot::new(
        vec![IncidentBuilder::new("inc").with_people(2).build()],
        vec![ResponderBuilder::new("boat").with_capacity(2).build()],
    )
    .with_priority_stats("inc", IncidentPriorityStats::new(0.0, 3.0, 1).escalated());
    let report = orchestrator().dispatch(&snapshot).expect("dispatch");
    assert_eq!(report.missions[0].status, MissionStatus::Unassigned);
    assert_eq!(report.summary.gate_blocked, 1);
}

#[test]
fn escalated_incident_takes_the_contested_responder() {
    // X sits next to the boat and fits it exactly; Y is farther and loosely fitted.
    let x = IncidentBuilder::new("x").with_people(4).build();
    let y = IncidentBuilder::new("y").with_people(2).north(0.12).build();
    let boat = ResponderBuilder::new("boat").with_capacity(4).build();

    let snapshot = DispatchSnapshot::new(vec![x, y], vec![boat])
        .with_priority_stats("x", IncidentPriorityStats::new(9.0, 5.0, 2))
        .with_priority_stats("y", IncidentPriorityStats::new(3.0, 5.0, 2).escalated());
    let report = orchestrator().dispatch(&snapshot).expect("dispatch");

    assert_eq!(report.missions[0].incident_id, "x");
    assert_eq!(report.missions[0].status, MissionStatus::Unassigned);
    assert_eq!(report.missions[1].status, MissionStatus::Assigned);
    assert_eq!(report.missions[1].responder_id.as_deref(), Some("boat"));
}

#[test]
fn without_escalation_the_better_fit_wins() {
    let x = IncidentBuilder::new("x").with_people(4).build();
    let y = IncidentBuilder::new("y").with_people(2).north(0.12).build();
    let boat = ResponderBuilder::new("boat").with_capacity(4).build();

    let snapshot = DispatchSnapshot::new(vec![x, y], vec![boat])
        .with_priority_stats("x", IncidentPriorityStats::new(9.0, 5.0, 2))
        .with_priority_stats("y", IncidentPriorityStats::new(7.0, 5.0, 2));
    let report = orchestrator().dispatch(&snapshot).expect("dispatch");

    assert_eq!(report.missions[0].responder_id.as_deref(), Some("boat"));
    assert_eq!(report.missions[1].status, MissionStatus::Unassigned);
}

#[test]
fn nearest_destination_is_attached() {
    let snapshot = DispatchSnapshot::new(
        vec![IncidentBuilder::new("inc").build()],
        vec![ResponderBuilder::new("boat").build()],
    )
    .with_destinations(vec![
        destination_north("stadium", 0.3),
        destination_north("church", 0.02),
    ]);
    let report = orchestrator().dispatch(&snapshot).expect("dispatch");
    let mission = &report.missions[0];
    let lat = mission.destination_lat.expect("destination set");
    assert!((lat - offset_north(0.02)).abs() < 1e-9);
    assert_eq!(mission.destination_lon, Some(BASE_LON));
}

#[test]
fn no_destinations_leaves_destination_empty() {
    let snapshot = DispatchSnapshot::new(
        vec![IncidentBuilder::new("inc").build()],
        vec![ResponderBuilder::new("boat").build()],
    );
    let mission = &orchestrator().dispatch(&snapshot).expect("dispatch").missions[0];
    assert_eq!(mission.status, MissionStatus::Assigned);
    assert!(mission.destination_lat.is_none());
    assert!(mission.destination_lon.is_none());
}

#[test]
fn responders_are_consumed_at_most_once() {
    let incidents = (0..5)
        .map(|i| IncidentBuilder::new(&format!("inc-{i}")).north(i as f64 * 0.01).build())
        .collect();
    let responders = (0..3)
        .map(|i| ResponderBuilder::new(&format!("boat-{i}")).north(i as f64 * 0.02).build())
        .collect();
    let report = orchestrator()
        .dispatch(&DispatchSnapshot::new(incidents, responders))
        .expect("dispatch");

    let mut assigned: Vec<&str> = report
        .missions
        .iter()
        .filter_map(|m| m.responder_id.as_deref())
        .collect();
    assert_eq!(assigned.len(), 3);
    assigned.sort_unstable();
    assigned.dedup();
    assert_eq!(assigned.len(), 3);
    assert_eq!(report.summary.assigned, 3);
    assert_eq!(report.summary.unassigned, 2);
}

#[test]
fn one_mission_per_incident_in_input_order() {
    let incidents = vec![
        IncidentBuilder::new("c").build(),
        IncidentBuilder::new("a").build(),
        IncidentBuilder::new("b").build(),
    ];
    let snapshot = DispatchSnapshot::new(incidents, vec![])
        .with_priority_stats("b", IncidentPriorityStats::new(9.0, 1.0, 3));
    let report = orchestrator().dispatch(&snapshot).expect("dispatch");
    let ids: Vec<&str> = report.missions.iter().map(|m| m.incident_id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
    assert!(report.missions.iter().all(|m| !m.is_assigned()));
}

#[test]
fn gate_sees_the_shrinking_responder_pool() {
    let build = |responders: usize| {
        let incidents = vec![
            IncidentBuilder::new("urgent").build(),
            IncidentBuilder::new("minor").north(0.01).build(),
        ];
        let pool = (0..responders)
            .map(|i| ResponderBuilder::new(&format!("boat-{i}")).build())
            .collect();
        DispatchSnapshot::new(incidents, pool)
            .with_priority_stats("urgent", IncidentPriorityStats::new(9.0, 4.0, 1))
            .with_priority_stats("minor", IncidentPriorityStats::new(2.0, 4.0, 1))
    };

    // Two boats: after "urgent" takes one, 1 waiting > 1 / 1.5 blocks "minor".
    let report = orchestrator().dispatch(&build(2)).expect("dispatch");
    assert_eq!(report.missions[0].status, MissionStatus::Assigned);
    assert_eq!(report.missions[1].status, MissionStatus::Unassigned);
    assert_eq!(report.summary.gate_blocked, 1);

    // Three boats: two remain, 1 waiting <= 2 / 1.5 admits it.
    let report = orchestrator().dispatch(&build(3)).expect("dispatch");
    assert!(report.missions.iter().all(|m| m.is_assigned()));
}

#[test]
fn invalid_records_are_excluded_but_reported() {
    let snapshot = DispatchSnapshot::new(
        vec![
            IncidentBuilder::new("lost").at(f64::NAN, BASE_LON).build(),
            IncidentBuilder::new("empty").with_people(0).build(),
            IncidentBuilder::new("ok").build(),
        ],
        vec![
            ResponderBuilder::new("broken").at(95.0, BASE_LON).build(),
            ResponderBuilder::new("sunk").with_capacity(0).build(),
            ResponderBuilder::new("boat").north(0.05).build(),
        ],
    )
    .with_priority_stats("ok", IncidentPriorityStats::new(f64::INFINITY, 1.0, 1));

    let report = orchestrator().dispatch(&snapshot).expect("dispatch");
    assert_eq!(report.missions.len(), 3);
    assert_eq!(report.missions[0].status, MissionStatus::Unassigned);
    assert_eq!(report.missions[1].status, MissionStatus::Unassigned);
    assert_eq!(report.missions[2].responder_id.as_deref(), Some("boat"));

    assert_eq!(report.summary.rejected_incidents, 2);
    assert_eq!(report.summary.rejected_responders, 2);
    let kinds: Vec<RecordKind> = report.rejected.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            RecordKind::Incident,
            RecordKind::Incident,
            RecordKind::PriorityStats,
            RecordKind::Responder,
            RecordKind::Responder,
        ]
    );
}

#[test]
fn expired_deadline_discards_the_pass() {
    let snapshot = DispatchSnapshot::new(
        vec![IncidentBuilder::new("inc").build()],
        vec![ResponderBuilder::new("boat").build()],
    );
    let result =
        AssignmentOrchestrator::new(DispatchConfig::default().with_deadline_ms(0)).dispatch(&snapshot);
    assert_eq!(
        result,
        Err(DispatchError::DeadlineExceeded {
            processed: 0,
            total: 1
        })
    );
}

#[test]
fn assign_returns_missions_only() {
    let incidents = vec![IncidentBuilder::new("inc").build()];
    let responders = vec![ResponderBuilder::new("boat").with_capacity(2).build()];
    let missions = orchestrator()
        .assign(&incidents, &responders, &[], &BTreeMap::new())
        .expect("assign");
    assert_eq!(missions.len(), 1);
    assert_eq!(missions[0].score, Some(200));
    assert_eq!(missions[0].distance_meters, Some(0.0));
}
