use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_reads_value() {
    assert_eq!(parse_port(Some(" 9000 ")).unwrap(), 9000);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert_eq!(err.to_string(), "configuration error: invalid PORT: eighty");
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    assert_eq!(HostConfig { port: 8081 }.bind_addr(), "0.0.0.0:8081");
}
