//! Tests for the lore gateway: payload parsing, the offline starchart
//! source, and the threaded client's settlement and staleness rules.

use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use nebula_core::lore::SectorLore;

use crate::client::LoreClient;
use crate::source::{parse_payload, LoreError, LoreSource};
use crate::starchart::StarchartSource;

/// Poll until the client settles or five seconds pass.
fn poll_until_settled(client: &mut LoreClient) -> Option<SectorLore> {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if let Some(lore) = client.poll() {
            return Some(lore);
        }
        if !client.is_pending() {
            return None;
        }
        thread::sleep(Duration::from_millis(5));
    }
    None
}

/// Answers every request with a record derived from the score.
struct EchoSource;

impl LoreSource for EchoSource {
    fn fetch(&self, score: u64) -> Result<SectorLore, LoreError> {
        Ok(SectorLore {
            name: format!("Echo Sector {score}"),
            description: "Nothing but static out here.".to_string(),
            hazard_level: "LOW".to_string(),
        })
    }
}

/// Fails every request at the transport layer.
struct FailingSource;

impl LoreSource for FailingSource {
    fn fetch(&self, _score: u64) -> Result<SectorLore, LoreError> {
        Err(LoreError::Transport("relay offline".to_string()))
    }
}

/// Panics mid-fetch, killing the worker before it can send.
struct PanickingSource;

impl LoreSource for PanickingSource {
    fn fetch(&self, _score: u64) -> Result<SectorLore, LoreError> {
        panic!("lore source crashed");
    }
}

/// Blocks inside fetch until the test releases it.
struct GatedSource {
    release: Mutex<Receiver<()>>,
}

impl LoreSource for GatedSource {
    fn fetch(&self, score: u64) -> Result<SectorLore, LoreError> {
        let gate = self.release.lock().unwrap();
        gate.recv().map_err(|_| LoreError::TimedOut)?;
        Ok(SectorLore {
            name: format!("Gated Sector {score}"),
            description: "Should never be shown once invalidated.".to_string(),
            hazard_level: "LOW".to_string(),
        })
    }
}

// ---- Payload parsing ----

#[test]
fn test_parse_payload_accepts_well_formed_record() {
    let raw = r#"{
        "name": "The Cygnus Shallows",
        "description": "Dust glitters along the approach lanes.",
        "hazardLevel": "MODERATE"
    }"#;
    let lore = parse_payload(raw).unwrap();
    assert_eq!(lore.name, "The Cygnus Shallows");
    assert_eq!(lore.description, "Dust glitters along the approach lanes.");
    assert_eq!(lore.hazard_level, "MODERATE");
}

#[test]
fn test_parse_payload_tolerates_surrounding_whitespace() {
    let raw = "\n  {\"name\":\"A\",\"description\":\"B\",\"hazardLevel\":\"C\"}  \n";
    let lore = parse_payload(raw).unwrap();
    assert_eq!(lore.name, "A");
}

#[test]
fn test_parse_payload_ignores_unknown_fields() {
    let raw = r#"{
        "name": "The Vela Drift",
        "description": "Quiet.",
        "hazardLevel": "LOW",
        "beaconCount": 4,
        "surveyor": "probe-19"
    }"#;
    let lore = parse_payload(raw).unwrap();
    assert_eq!(lore.hazard_level, "LOW");
}

#[test]
fn test_parse_payload_rejects_missing_field() {
    let raw = r#"{"name": "The Vela Drift", "description": "Quiet."}"#;
    let err = parse_payload(raw).unwrap_err();
    assert!(
        matches!(err, LoreError::Malformed(_)),
        "missing hazardLevel should be a malformed-payload error, got {err:?}"
    );
}

#[test]
fn test_parse_payload_rejects_mistyped_field() {
    let raw = r#"{"name": "The Vela Drift", "description": "Quiet.", "hazardLevel": 3}"#;
    assert!(matches!(
        parse_payload(raw).unwrap_err(),
        LoreError::Malformed(_)
    ));
}

#[test]
fn test_parse_payload_rejects_non_json() {
    assert!(matches!(
        parse_payload("<html>502 Bad Gateway</html>").unwrap_err(),
        LoreError::Malformed(_)
    ));
}

#[test]
fn test_lore_error_messages() {
    let transport = LoreError::Transport("relay offline".to_string());
    assert_eq!(transport.to_string(), "lore transmission failed: relay offline");
    assert_eq!(LoreError::TimedOut.to_string(), "lore request timed out");
}

// ---- Starchart source ----

#[test]
fn test_starchart_is_deterministic_per_score() {
    let source = StarchartSource::new();
    assert_eq!(source.chart(1500), source.chart(1500));
    assert_eq!(source.chart(4500), source.chart(4500));
}

#[test]
fn test_starchart_hazard_ladder_climbs_with_sectors() {
    let source = StarchartSource::new();
    assert_eq!(source.chart(1500).hazard_level, "LOW");
    assert_eq!(source.chart(3000).hazard_level, "GUARDED");
    assert_eq!(source.chart(4500).hazard_level, "ELEVATED");
}

#[test]
fn test_starchart_hazard_clamps_at_top_rung() {
    let source = StarchartSource::new();
    assert_eq!(source.chart(1_500_000).hazard_level, "EXTREME");
}

#[test]
fn test_starchart_records_are_presentable() {
    let source = StarchartSource::new();
    for sector in 1..=8u64 {
        let lore = source.chart(sector * 1500);
        assert!(lore.name.starts_with("The "), "name was {:?}", lore.name);
        assert!(!lore.description.is_empty());
        assert!(
            lore.description.ends_with('.'),
            "description should read as prose, was {:?}",
            lore.description
        );
    }
}

#[test]
fn test_starchart_fetch_matches_chart() {
    let source = StarchartSource::new();
    let fetched = source.fetch(3000).unwrap();
    assert_eq!(fetched, source.chart(3000));
}

// ---- Client ----

#[test]
fn test_client_settles_with_source_record() {
    let mut client = LoreClient::new(Arc::new(EchoSource));
    assert!(!client.is_pending());

    client.request(1500);
    assert!(client.is_pending());

    let lore = poll_until_settled(&mut client).unwrap();
    assert_eq!(lore.name, "Echo Sector 1500");
    assert!(!client.is_pending());
}

#[test]
fn test_client_poll_without_request_is_none() {
    let mut client = LoreClient::new(Arc::new(EchoSource));
    assert_eq!(client.poll(), None);
}

#[test]
fn test_client_settles_result_only_once() {
    let mut client = LoreClient::new(Arc::new(EchoSource));
    client.request(1500);
    assert!(poll_until_settled(&mut client).is_some());
    assert_eq!(client.poll(), None);
}

#[test]
fn test_client_substitutes_fallback_on_failure() {
    let mut client = LoreClient::new(Arc::new(FailingSource));
    client.request(1500);
    let lore = poll_until_settled(&mut client).unwrap();
    assert_eq!(lore, SectorLore::fallback());
}

#[test]
fn test_client_substitutes_fallback_when_worker_dies() {
    let mut client = LoreClient::new(Arc::new(PanickingSource));
    client.request(1500);
    let lore = poll_until_settled(&mut client).unwrap();
    assert_eq!(lore, SectorLore::fallback());
}

#[test]
fn test_client_discards_response_settled_after_invalidate() {
    let (release, gate) = mpsc::channel();
    let mut client = LoreClient::new(Arc::new(GatedSource {
        release: Mutex::new(gate),
    }));

    client.request(1500);
    assert!(client.is_pending());

    // The run restarts before the request settles.
    client.invalidate();
    assert!(!client.is_pending());

    // Let the worker finish; its record is now stale and must never surface.
    release.send(()).unwrap();
    let deadline = Instant::now() + Duration::from_millis(500);
    while Instant::now() < deadline {
        assert_eq!(client.poll(), None, "stale lore must be discarded");
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn test_client_new_request_supersedes_in_flight_one() {
    let (release, gate) = mpsc::channel();
    let mut client = LoreClient::new(Arc::new(GatedSource {
        release: Mutex::new(gate),
    }));

    client.request(1500);
    client.request(3000);
    // Release both workers; only the second request's record may surface.
    release.send(()).unwrap();
    let _ = release.send(());

    let lore = poll_until_settled(&mut client).unwrap();
    assert_eq!(lore.name, "Gated Sector 3000");
}
