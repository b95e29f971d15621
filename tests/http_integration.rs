// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for device control using wiremock.

use std::sync::Arc;
use std::time::Duration;

use pixoor_lib::coordinator::PixooCoordinator;
use pixoor_lib::discovery::DeviceRecord;
use pixoor_lib::entity::{
    BuzzerSiren, Entity, HourModeSelect, RotationSelect, ScreenLight, TemperatureUnitSelect,
    TurnOn,
};
use pixoor_lib::protocol::HttpConfig;
use pixoor_lib::types::Brightness;
use pixoor_lib::{Error, ParseError, ProtocolError, ValueError};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn record_for(server: &MockServer) -> DeviceRecord {
    DeviceRecord {
        id: "300000001".to_string(),
        mac: "aa:bb:cc:dd:ee:ff".to_string(),
        name: "Test Pixoo".to_string(),
        ip: server.uri().replace("http://", ""),
        hardware: "70".to_string(),
    }
}

fn coordinator_for(server: &MockServer) -> PixooCoordinator {
    let record = record_for(server);
    let config = HttpConfig::new(record.ip.clone()).with_timeout(Duration::from_secs(2));
    PixooCoordinator::with_config(record, config)
}

fn settings_json(light_switch: i64, brightness: i64, clock_id: i64) -> serde_json::Value {
    serde_json::json!({
        "error_code": 0,
        "LightSwitch": light_switch,
        "Brightness": brightness,
        "CurClockId": clock_id,
        "Time24Flag": 1,
        "TemperatureMode": 0,
        "GyrateAngle": 0,
        "MirrorFlag": 0
    })
}

/// Mounts a settings mock answering `Channel/GetAllConf`.
async fn mount_settings(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/post"))
        .and(body_partial_json(
            serde_json::json!({"Command": "Channel/GetAllConf"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mounts an acknowledgement mock for the given command.
async fn mount_ack(server: &MockServer, command_match: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/post"))
        .and(body_partial_json(command_match))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error_code": 0
        })))
        .mount(server)
        .await;
}

// ============================================================================
// Refresh
// ============================================================================

mod refresh {
    use super::*;

    #[tokio::test]
    async fn maps_settings_to_snapshot() {
        let server = MockServer::start().await;
        mount_settings(&server, settings_json(1, 128, 10)).await;

        let coordinator = coordinator_for(&server);
        let snapshot = coordinator.refresh().await.unwrap();

        assert!(snapshot.screen_on());
        assert_eq!(snapshot.brightness().value(), 50);
        assert_eq!(snapshot.effect_id(), 10);
        assert_eq!(snapshot.effect(), "Normal - Classic Digital Clock");
        assert_eq!(coordinator.snapshot(), Some(snapshot));
    }

    #[tokio::test]
    async fn first_refresh_succeeds() {
        let server = MockServer::start().await;
        mount_settings(&server, settings_json(0, 255, 64)).await;

        let coordinator = coordinator_for(&server);
        let snapshot = coordinator.first_refresh().await.unwrap();

        assert!(!snapshot.screen_on());
        assert_eq!(snapshot.effect(), "financial - Bitcoin ");
    }

    #[tokio::test]
    async fn first_refresh_failure_is_not_ready() {
        // No mocks mounted: the device answers 404
        let server = MockServer::start().await;

        let coordinator = coordinator_for(&server);
        let err = coordinator.first_refresh().await.unwrap_err();

        assert!(err.is_not_ready());
    }

    #[tokio::test]
    async fn unknown_clock_id_fails_and_keeps_previous_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/post"))
            .respond_with(ResponseTemplate::new(200).set_body_json(settings_json(1, 128, 10)))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        // Second poll reports an id outside the faces table
        mount_settings(&server, settings_json(1, 128, 999_999)).await;

        let coordinator = coordinator_for(&server);
        let first = coordinator.refresh().await.unwrap();

        let err = coordinator.refresh().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::UnknownEffectId(999_999))
        ));
        assert_eq!(coordinator.snapshot(), Some(first));
    }

    #[tokio::test]
    async fn malformed_response_is_recoverable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/post"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_settings(&server, settings_json(1, 128, 10)).await;

        let coordinator = coordinator_for(&server);

        let err = coordinator.refresh().await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(coordinator.snapshot().is_none());

        // The same coordinator refreshes successfully on the next attempt
        let snapshot = coordinator.refresh().await.unwrap();
        assert_eq!(snapshot.effect_id(), 10);
    }

    #[tokio::test]
    async fn timeout_is_recoverable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/post"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(settings_json(1, 128, 10))
                    .set_delay(Duration::from_secs(2)),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_settings(&server, settings_json(1, 128, 10)).await;

        let record = record_for(&server);
        let config =
            HttpConfig::new(record.ip.clone()).with_timeout(Duration::from_millis(200));
        let coordinator = PixooCoordinator::with_config(record, config);

        let err = coordinator.refresh().await.unwrap_err();
        assert!(matches!(err, Error::Protocol(ProtocolError::Timeout(_))));

        let snapshot = coordinator.refresh().await.unwrap();
        assert_eq!(snapshot.effect_id(), 10);
    }

    #[tokio::test]
    async fn http_error_surfaces_as_connection_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/post"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let coordinator = coordinator_for(&server);
        let err = coordinator.refresh().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::ConnectionFailed(_))
        ));
    }

    #[tokio::test]
    async fn settings_error_code_rejected() {
        let server = MockServer::start().await;
        let mut body = settings_json(1, 128, 10);
        body["error_code"] = serde_json::json!(4);
        mount_settings(&server, body).await;

        let coordinator = coordinator_for(&server);
        let err = coordinator.refresh().await.unwrap_err();
        assert!(matches!(err, Error::Device(_)));
        assert!(coordinator.snapshot().is_none());
    }
}

// ============================================================================
// Commands
// ============================================================================

mod commands {
    use super::*;

    #[tokio::test]
    async fn set_brightness_transmits_device_level() {
        let server = MockServer::start().await;
        // 80% must go out as ceil(80 * 255 / 100) = 204
        mount_ack(
            &server,
            serde_json::json!({"Command": "Channel/SetBrightness", "Brightness": 204}),
        )
        .await;
        mount_settings(&server, settings_json(1, 204, 10)).await;

        let coordinator = coordinator_for(&server);
        let snapshot = coordinator
            .set_brightness(Brightness::new(80).unwrap())
            .await
            .unwrap();

        assert_eq!(snapshot.brightness().value(), 80);
    }

    #[tokio::test]
    async fn set_effect_transmits_clock_id() {
        let server = MockServer::start().await;
        mount_ack(
            &server,
            serde_json::json!({"Command": "Channel/SetClockSelectId", "ClockId": 64}),
        )
        .await;
        mount_settings(&server, settings_json(1, 128, 64)).await;

        let coordinator = coordinator_for(&server);
        let snapshot = coordinator.set_effect("financial - Bitcoin ").await.unwrap();

        assert_eq!(snapshot.effect_id(), 64);
        assert_eq!(snapshot.effect(), "financial - Bitcoin ");
    }

    #[tokio::test]
    async fn set_screen_power_off() {
        let server = MockServer::start().await;
        mount_ack(
            &server,
            serde_json::json!({"Command": "Channel/OnOffScreen", "OnOff": 0}),
        )
        .await;
        mount_settings(&server, settings_json(0, 128, 10)).await;

        let coordinator = coordinator_for(&server);
        let snapshot = coordinator.set_screen_power(false).await.unwrap();

        assert!(!snapshot.screen_on());
    }

    #[tokio::test]
    async fn unknown_effect_issues_no_request() {
        let server = MockServer::start().await;

        let coordinator = coordinator_for(&server);
        let err = coordinator.set_effect("No Such Face").await.unwrap_err();

        assert!(matches!(
            err,
            Error::Value(ValueError::UnknownEffect(name)) if name == "No Such Face"
        ));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_command_still_refreshes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/post"))
            .and(body_partial_json(
                serde_json::json!({"Command": "Channel/OnOffScreen"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error_code": 4
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/post"))
            .and(body_partial_json(
                serde_json::json!({"Command": "Channel/GetAllConf"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(settings_json(1, 128, 10)))
            .expect(1)
            .mount(&server)
            .await;

        let coordinator = coordinator_for(&server);
        let err = coordinator.set_screen_power(true).await.unwrap_err();

        // The command error wins, but the follow-up refresh still ran and
        // replaced the snapshot with device truth
        assert!(matches!(err, Error::Device(_)));
        assert!(coordinator.snapshot().is_some());
    }
}

// ============================================================================
// Entities
// ============================================================================

mod entities {
    use super::*;

    #[tokio::test]
    async fn light_turn_on_applies_attributes_in_order() {
        let server = MockServer::start().await;
        mount_ack(
            &server,
            serde_json::json!({"Command": "Channel/SetClockSelectId", "ClockId": 152}),
        )
        .await;
        mount_ack(
            &server,
            serde_json::json!({"Command": "Channel/SetBrightness", "Brightness": 102}),
        )
        .await;
        mount_ack(
            &server,
            serde_json::json!({"Command": "Channel/OnOffScreen", "OnOff": 1}),
        )
        .await;
        mount_settings(&server, settings_json(1, 102, 152)).await;

        let coordinator = Arc::new(coordinator_for(&server));
        let light = ScreenLight::new(Arc::clone(&coordinator));

        light
            .turn_on(
                TurnOn::new()
                    .with_brightness(Brightness::new(40).unwrap())
                    .with_effect("Weather - Big Time"),
            )
            .await
            .unwrap();

        assert_eq!(light.is_on(), Some(true));
        assert_eq!(light.brightness().unwrap().value(), 40);
        assert_eq!(light.effect(), Some("Weather - Big Time"));
    }

    #[tokio::test]
    async fn light_turn_off() {
        let server = MockServer::start().await;
        mount_ack(
            &server,
            serde_json::json!({"Command": "Channel/OnOffScreen", "OnOff": 0}),
        )
        .await;
        mount_settings(&server, settings_json(0, 128, 10)).await;

        let coordinator = Arc::new(coordinator_for(&server));
        let light = ScreenLight::new(Arc::clone(&coordinator));

        light.turn_off().await.unwrap();
        assert_eq!(light.is_on(), Some(false));
    }

    #[tokio::test]
    async fn select_round_trip() {
        let server = MockServer::start().await;
        mount_ack(
            &server,
            serde_json::json!({"Command": "Device/SetDisTempMode", "Mode": 1}),
        )
        .await;
        let mut body = settings_json(1, 128, 10);
        body["TemperatureMode"] = serde_json::json!(1);
        mount_settings(&server, body).await;

        let coordinator = Arc::new(coordinator_for(&server));
        let select = TemperatureUnitSelect::new(Arc::clone(&coordinator));

        assert_eq!(select.current_option(), None);
        select.select_option("fahrenheit").await.unwrap();
        assert_eq!(select.current_option(), Some("fahrenheit"));
    }

    #[tokio::test]
    async fn select_unknown_option_issues_no_request() {
        let server = MockServer::start().await;

        let coordinator = Arc::new(coordinator_for(&server));
        let select = HourModeSelect::new(Arc::clone(&coordinator));

        let err = select.select_option("13h").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::UnknownOption { .. })
        ));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rotation_select_transmits_mode() {
        let server = MockServer::start().await;
        mount_ack(
            &server,
            serde_json::json!({"Command": "Device/SetScreenRotationAngle", "Mode": 3}),
        )
        .await;
        let mut body = settings_json(1, 128, 10);
        body["GyrateAngle"] = serde_json::json!(3);
        mount_settings(&server, body).await;

        let coordinator = Arc::new(coordinator_for(&server));
        let select = RotationSelect::new(Arc::clone(&coordinator));

        select.select_option("270").await.unwrap();
        assert_eq!(select.current_option(), Some("270"));
    }

    #[tokio::test]
    async fn entity_identities_share_device_info() {
        let server = MockServer::start().await;
        let coordinator = Arc::new(coordinator_for(&server));

        let light = ScreenLight::new(Arc::clone(&coordinator));
        let siren = BuzzerSiren::new(Arc::clone(&coordinator));

        assert_eq!(light.unique_id(), "300000001-screen");
        assert_eq!(siren.unique_id(), "300000001-siren");
        assert_eq!(light.device_info(), siren.device_info());
        assert_eq!(light.device_info().model, "Pixoo64");
    }
}

// ============================================================================
// Siren
// ============================================================================

mod siren {
    use super::*;

    async fn siren_for(server: &MockServer) -> BuzzerSiren {
        mount_ack(
            server,
            serde_json::json!({"Command": "Device/PlayBuzzer"}),
        )
        .await;
        mount_settings(server, settings_json(1, 128, 10)).await;
        BuzzerSiren::new(Arc::new(coordinator_for(server)))
    }

    #[tokio::test]
    async fn turn_on_sets_flag_and_auto_off_clears_it() {
        let server = MockServer::start().await;
        let siren = siren_for(&server).await;

        siren
            .turn_on(Some(Duration::from_millis(200)))
            .await
            .unwrap();
        assert!(siren.is_on());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(!siren.is_on());
    }

    #[tokio::test]
    async fn retrigger_cancels_previous_auto_off() {
        let server = MockServer::start().await;
        let siren = siren_for(&server).await;

        // First activation would turn off at ~300 ms
        siren
            .turn_on(Some(Duration::from_millis(300)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Retrigger for 600 ms; the siren must stay on past the first
        // activation's deadline and turn off only after the second one's
        siren
            .turn_on(Some(Duration::from_millis(600)))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(siren.is_on(), "first auto-off was not cancelled");

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(!siren.is_on());
    }

    #[tokio::test]
    async fn buzzer_command_carries_duration() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/post"))
            .and(body_partial_json(serde_json::json!({
                "Command": "Device/PlayBuzzer",
                "ActiveTimeInCycle": 500,
                "OffTimeInCycle": 500,
                "PlayTTotalTime": 5000,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error_code": 0
            })))
            .expect(1)
            .mount(&server)
            .await;
        mount_settings(&server, settings_json(1, 128, 10)).await;

        let siren = BuzzerSiren::new(Arc::new(coordinator_for(&server)));
        siren.turn_on(Some(Duration::from_secs(5))).await.unwrap();
        siren.cancel();
    }

    #[tokio::test]
    async fn cancel_clears_pending_auto_off() {
        let server = MockServer::start().await;
        let siren = siren_for(&server).await;

        siren.turn_on(Some(Duration::from_secs(30))).await.unwrap();
        assert!(siren.is_on());

        siren.cancel();
        assert!(!siren.is_on());
    }

    #[tokio::test]
    async fn failed_buzzer_command_leaves_siren_off() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/post"))
            .and(body_partial_json(
                serde_json::json!({"Command": "Device/PlayBuzzer"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error_code": 4
            })))
            .mount(&server)
            .await;
        mount_settings(&server, settings_json(1, 128, 10)).await;

        let siren = BuzzerSiren::new(Arc::new(coordinator_for(&server)));
        let err = siren.turn_on(None).await.unwrap_err();

        assert!(matches!(err, Error::Device(_)));
        assert!(!siren.is_on());
    }
}

// ============================================================================
// Polling
// ============================================================================

mod polling {
    use super::*;

    #[tokio::test]
    async fn polling_refreshes_periodically_and_stops_on_abort() {
        let server = MockServer::start().await;
        mount_settings(&server, settings_json(1, 128, 10)).await;

        let coordinator = Arc::new(coordinator_for(&server));
        let handle = Arc::clone(&coordinator).spawn_polling_every(Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(coordinator.snapshot().is_some());
        assert!(!handle.is_finished());

        handle.abort();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(handle.is_finished());
    }

    #[tokio::test]
    async fn polling_survives_failed_ticks() {
        let server = MockServer::start().await;
        // First poll fails, later polls succeed
        Mock::given(method("POST"))
            .and(path("/post"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_settings(&server, settings_json(1, 128, 10)).await;

        let coordinator = Arc::new(coordinator_for(&server));
        let _handle = Arc::clone(&coordinator).spawn_polling_every(Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(coordinator.snapshot().is_some());
    }
}
