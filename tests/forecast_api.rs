mod common;

use skycast::{data::forecast::ForecastClient, domain::errors::LookupError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, query_param},
};

#[tokio::test]
async fn full_payload_assembles_a_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("timezone", "auto"))
        .and(query_param("forecast_days", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::forecast_payload()))
        .mount(&server)
        .await;

    let client = ForecastClient::with_base_url(server.uri());
    let snapshot = client
        .fetch(common::stockholm_location())
        .await
        .expect("fetched");

    assert_eq!(snapshot.location.name, "Stockholm");
    assert_eq!(snapshot.current.temperature, 7.2);
    assert_eq!(snapshot.current.weather_code, 61);
    assert!(snapshot.current.is_day);
    assert_eq!(snapshot.current.temperature_unit, "°C");
    assert_eq!(snapshot.current.humidity_unit, "%");

    assert_eq!(snapshot.daily.len(), 7);
    assert_eq!(snapshot.daily[0].date, "Thu");
    assert_eq!(snapshot.daily[0].long_date, "Thursday");
    assert_eq!(snapshot.daily[0].max_temp, 8.0);
    assert_eq!(snapshot.daily[6].date, "Wed");

    assert_eq!(snapshot.hourly.len(), 3);
    assert_eq!(snapshot.hourly[0].time, "10 AM");
    assert_eq!(snapshot.hourly[0].short_day, "Thu");
    assert_eq!(snapshot.hours_for_day("Thu").len(), 2);
    assert_eq!(snapshot.hours_for_day("Fri").len(), 1);
}

#[tokio::test]
async fn unit_metadata_is_carried_through_verbatim() {
    let server = MockServer::start().await;
    let mut payload = common::forecast_payload();
    payload["current_units"] = serde_json::json!({
        "temperature_2m": "°F",
        "wind_speed_10m": "mp/h",
        "precipitation": "inch",
        "relative_humidity_2m": "%"
    });
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let client = ForecastClient::with_base_url(server.uri());
    let snapshot = client
        .fetch(common::stockholm_location())
        .await
        .expect("fetched");

    assert_eq!(snapshot.current.temperature_unit, "°F");
    assert_eq!(snapshot.current.wind_speed_unit, "mp/h");
    assert_eq!(snapshot.current.precipitation_unit, "inch");
}

#[tokio::test]
async fn absent_unit_block_defaults_to_metric_suffixes() {
    let server = MockServer::start().await;
    let mut payload = common::forecast_payload();
    payload.as_object_mut().unwrap().remove("current_units");
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let client = ForecastClient::with_base_url(server.uri());
    let snapshot = client
        .fetch(common::stockholm_location())
        .await
        .expect("fetched");

    assert_eq!(snapshot.current.temperature_unit, "°C");
    assert_eq!(snapshot.current.wind_speed_unit, "km/h");
    assert_eq!(snapshot.current.precipitation_unit, "mm");
}

#[tokio::test]
async fn missing_current_section_is_no_data() {
    let server = MockServer::start().await;
    let mut payload = common::forecast_payload();
    payload.as_object_mut().unwrap().remove("current");
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let client = ForecastClient::with_base_url(server.uri());
    let err = client
        .fetch(common::stockholm_location())
        .await
        .expect_err("no current section");

    assert!(matches!(err, LookupError::NoData));
}

#[tokio::test]
async fn server_error_is_a_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = ForecastClient::with_base_url(server.uri());
    let err = client
        .fetch(common::stockholm_location())
        .await
        .expect_err("bad gateway");

    assert!(matches!(err, LookupError::Network { stage: "weather", .. }));
    assert_eq!(err.to_string(), "Failed to fetch weather data");
}

#[tokio::test]
async fn malformed_timestamps_are_skipped_not_fatal() {
    let server = MockServer::start().await;
    let mut payload = common::forecast_payload();
    payload["daily"]["time"][2] = serde_json::json!("not-a-date");
    payload["hourly"]["time"][0] = serde_json::json!("garbage");
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let client = ForecastClient::with_base_url(server.uri());
    let snapshot = client
        .fetch(common::stockholm_location())
        .await
        .expect("fetched");

    assert_eq!(snapshot.daily.len(), 6);
    assert_eq!(snapshot.hourly.len(), 2);
    // Order of the surviving entries is still the API's.
    assert_eq!(snapshot.daily[0].date, "Thu");
    assert_eq!(snapshot.daily[1].date, "Fri");
    assert_eq!(snapshot.daily[2].date, "Sun");
}
