#![cfg(test)]
use std::time::Duration;

use pinbss_common::PinError;
use pinbss_common::config::Config;
use pinbss_common::error::StatusCode;
use pinbss_common::network::ssid::Ssid;
use pinbss_core::session::{self, Outcome};

use crate::fake::{Call, RecordingWlan, ScriptedOperator, adapter, ap, profile_xml};

fn config() -> Config {
    Config {
        scan_delay: Duration::ZERO,
        ..Config::default()
    }
}

fn home_and_work() -> RecordingWlan {
    RecordingWlan::new()
        .profile("Home", profile_xml("Home", "HomeNet"))
        .profile("Work", profile_xml("Work", "WorkNet"))
}

#[test]
fn no_adapter_stops_before_scanning() {
    let wlan = RecordingWlan::new().adapters(vec![]);
    let mut operator = ScriptedOperator::default();

    let result = session::run(&wlan, &mut operator, &config());

    assert!(matches!(result, Err(PinError::NoAdapter)));
    assert_eq!(wlan.calls(), vec![Call::Interfaces]);
}

#[test]
fn several_adapters_stop_before_scanning() {
    let wlan = RecordingWlan::new().adapters(vec![adapter(1), adapter(2)]);
    let mut operator = ScriptedOperator::default();

    let result = session::run(&wlan, &mut operator, &config());

    assert!(matches!(result, Err(PinError::MultipleAdapters { count: 2 })));
    assert_eq!(wlan.calls(), vec![Call::Interfaces]);
    assert!(operator.shown_profiles.is_empty());
}

#[test]
fn chosen_profile_drives_the_filter() {
    let wlan = home_and_work().snapshots(vec![Ok(vec![
        ap("WorkNet", 1, -35),
        ap("HomeNet", 2, -71),
        ap("HomeNet", 3, -52),
        ap("HomeNet-guest", 4, -50),
    ])]);
    let mut operator = ScriptedOperator::answering(0, 1);

    let outcome = session::run(&wlan, &mut operator, &config()).unwrap();

    assert_eq!(operator.shown_profiles.len(), 2);
    assert_eq!(operator.shown_profiles[0].ssid, Ssid::from("HomeNet"));
    assert_eq!(operator.shown_networks, vec![ap("HomeNet", 2, -71), ap("HomeNet", 3, -52)]);
    assert!(
        operator
            .shown_networks
            .iter()
            .all(|network| network.ssid == Ssid::from("HomeNet"))
    );

    match outcome {
        Outcome::Connected { request, network, profile, .. } => {
            assert_eq!(profile.name, "Home");
            assert_eq!(network, ap("HomeNet", 3, -52));
            assert_eq!(request.ssid(), &network.ssid);
            assert_eq!(request.allowed_bssids(), &[network.bssid]);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn calls_happen_in_workflow_order() {
    let wlan = home_and_work()
        .snapshots(vec![Ok(vec![ap("HomeNet", 2, -60), ap("HomeNet", 3, -50)])]);
    let mut operator = ScriptedOperator::answering(0, 0);

    session::run(&wlan, &mut operator, &config()).unwrap();

    let calls = wlan.calls();
    assert_eq!(calls[..5], [
        Call::Interfaces,
        Call::TriggerScan,
        Call::ProfileNames,
        Call::ProfileXml("Home".into()),
        Call::ProfileXml("Work".into()),
    ]);
    assert_eq!(calls[5], Call::BssList);
    assert!(matches!(calls[6], Call::Connect(_)));
    assert_eq!(calls.len(), 7);
}

#[test]
fn polling_stops_once_results_arrive() {
    let wlan = home_and_work().snapshots(vec![
        Ok(vec![]),
        Ok(vec![]),
        Ok(vec![]),
        Ok(vec![ap("HomeNet", 2, -60), ap("WorkNet", 3, -50)]),
        Ok(vec![ap("HomeNet", 9, -90); 4]),
    ]);
    let mut operator = ScriptedOperator::answering(0, 0);
    let mut sleeps: Vec<Duration> = Vec::new();

    let outcome =
        session::run_with_sleep(&wlan, &mut operator, &Config::default(), |d| sleeps.push(d))
            .unwrap();

    assert_eq!(wlan.count(|c| matches!(c, Call::BssList)), 4);
    assert_eq!(sleeps, vec![Duration::from_millis(500); 4]);
    assert!(matches!(outcome, Outcome::Connected { .. }));
}

#[test]
fn polling_is_capped_at_ten_attempts() {
    let wlan = home_and_work().snapshots(vec![Ok(vec![ap("HomeNet", 2, -60)])]);
    let mut operator = ScriptedOperator::answering(0, 0);

    let outcome = session::run(&wlan, &mut operator, &config()).unwrap();

    assert_eq!(wlan.count(|c| matches!(c, Call::BssList)), 10);
    assert!(matches!(outcome, Outcome::Connected { .. }));
}

#[test]
fn out_of_range_bssid_never_connects() {
    let wlan = home_and_work().snapshots(vec![Ok(vec![
        ap("HomeNet", 1, -40),
        ap("HomeNet", 2, -50),
        ap("HomeNet", 3, -60),
    ])]);
    let mut operator = ScriptedOperator::answering(0, 5);

    let result = session::run(&wlan, &mut operator, &config());

    match result {
        Err(err @ PinError::InvalidSelection { .. }) => {
            assert_ne!(err.exit_code(), 0);
            if let PinError::InvalidSelection { len, .. } = err {
                assert_eq!(len, 3);
            }
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(wlan.count(|c| matches!(c, Call::Connect(_))), 0);
}

#[test]
fn rejected_connect_surfaces_the_subsystem_code() {
    let wlan = home_and_work()
        .snapshots(vec![Ok(vec![ap("HomeNet", 1, -40), ap("HomeNet", 2, -50)])])
        .connect_result(Err(StatusCode(1397)));
    let mut operator = ScriptedOperator::answering(0, 1);

    let result = session::run(&wlan, &mut operator, &config());

    match result {
        Err(err @ PinError::ConnectRejected { .. }) => assert_eq!(err.exit_code(), 1397),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(wlan.count(|c| matches!(c, Call::Connect(_))), 1);
}

#[test]
fn invisible_network_is_not_an_error() {
    let wlan = home_and_work()
        .snapshots(vec![Ok(vec![ap("WorkNet", 1, -40), ap("Cafe", 2, -50)])]);
    let mut operator = ScriptedOperator::answering(0, 0);

    let outcome = session::run(&wlan, &mut operator, &config()).unwrap();

    match outcome {
        Outcome::NotVisible { profile, scanned, .. } => {
            assert_eq!(profile.ssid, Ssid::from("HomeNet"));
            assert_eq!(scanned, 2);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(operator.shown_networks.is_empty());
    assert_eq!(wlan.count(|c| matches!(c, Call::Connect(_))), 0);
}

#[test]
fn failing_poll_aborts_the_session() {
    let wlan = home_and_work().snapshots(vec![Ok(vec![]), Err(StatusCode(1169))]);
    let mut operator = ScriptedOperator::answering(0, 0);

    let result = session::run(&wlan, &mut operator, &config());

    assert!(matches!(
        result,
        Err(PinError::ScanQueryFailed { attempt: 2, code: StatusCode(1169) })
    ));
    assert_eq!(wlan.count(|c| matches!(c, Call::Connect(_))), 0);
}

#[test]
fn unparsable_profiles_are_hidden_from_the_operator() {
    let wlan = RecordingWlan::new()
        .profile("Work", profile_xml("Work", "WorkNet"))
        .profile("Odd", profile_xml("Odd", "caf\u{e9}"))
        .profile("Home", profile_xml("Home", "HomeNet"))
        .snapshots(vec![Ok(vec![ap("HomeNet", 1, -40), ap("HomeNet", 2, -45)])]);
    let mut operator = ScriptedOperator::answering(1, 0);

    let outcome = session::run(&wlan, &mut operator, &config()).unwrap();

    let names: Vec<&str> = operator.shown_profiles.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Work", "Home"]);
    assert!(matches!(outcome, Outcome::Connected { ref profile, .. } if profile.name == "Home"));
}
