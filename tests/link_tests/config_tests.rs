//! Config Tests

use syncframe::transport::LoopbackTransport;
use syncframe::{Config, Link, SyncFrameError};

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.baud_rate, 115_200);
    assert_eq!(config.read_chunk, 512);
    assert_eq!(config.read_timeout_ms, 100);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_overrides() {
    let config = Config::builder()
        .port("COM34")
        .baud_rate(57_600)
        .read_timeout_ms(20)
        .read_chunk(64)
        .poll_interval_ms(250)
        .startup_delay_ms(0)
        .build();

    assert_eq!(config.port, "COM34");
    assert_eq!(config.baud_rate, 57_600);
    assert_eq!(config.read_timeout_ms, 20);
    assert_eq!(config.read_chunk, 64);
    assert_eq!(config.poll_interval_ms, 250);
    assert_eq!(config.startup_delay_ms, 0);
}

#[test]
fn test_zero_read_chunk_rejected() {
    let config = Config::builder().read_chunk(0).build();
    assert!(matches!(config.validate(), Err(SyncFrameError::Config(_))));

    let (transport, _peer) = LoopbackTransport::pair();
    assert!(Link::new(transport, &config).is_err());
}

#[test]
fn test_zero_baud_rejected() {
    let config = Config::builder().baud_rate(0).build();
    assert!(matches!(config.validate(), Err(SyncFrameError::Config(_))));
}

#[test]
fn test_empty_port_rejected() {
    let config = Config::builder().port("").build();
    assert!(matches!(config.validate(), Err(SyncFrameError::Config(_))));
}
