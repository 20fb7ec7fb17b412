use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("ASSETS_DIR");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe { clear_host_env() };

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("ASSETS_DIR", "/srv/tweetmind/assets");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/tweetmind/assets"));

    unsafe { clear_host_env() };
}

#[test]
fn parse_port_treats_blank_as_default() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert_eq!(err.to_string(), "configuration error: invalid PORT: eighty");

    assert!(parse_port(Some("70000")).is_err());
}
