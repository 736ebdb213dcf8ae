use super::*;

/// # Safety
/// Env mutation races with other tests touching the same keys; only the
/// `from_env` test below touches these.
unsafe fn clear_hub_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("CHAT_UPSTREAM_URL");
        std::env::remove_var("CHAT_UPSTREAM_TIMEOUT_SECS");
        std::env::remove_var("CHAT_UPSTREAM_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("STATIC_DIR");
    }
}

#[test]
fn from_env_defaults_and_overrides() {
    unsafe { clear_hub_env() };

    let cfg = HubConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream.url, DEFAULT_CHAT_UPSTREAM_URL);
    assert_eq!(
        cfg.upstream.timeouts,
        UpstreamTimeouts {
            request_secs: DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
        }
    );
    assert!(cfg.static_dir.ends_with("static"));

    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("CHAT_UPSTREAM_URL", " http://localhost:9000/chat ");
        std::env::set_var("CHAT_UPSTREAM_TIMEOUT_SECS", "5");
        std::env::set_var("CHAT_UPSTREAM_CONNECT_TIMEOUT_SECS", "soon");
        std::env::set_var("STATIC_DIR", "/srv/hub/static");
    }

    let cfg = HubConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream.url, "http://localhost:9000/chat");
    assert_eq!(cfg.upstream.timeouts.request_secs, 5);
    assert_eq!(cfg.upstream.timeouts.connect_secs, DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS);
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/hub/static"));

    unsafe { std::env::set_var("CHAT_UPSTREAM_URL", "   ") };
    assert_eq!(HubConfig::from_env(), Err(ConfigError::EmptyUpstreamUrl));

    unsafe { clear_hub_env() };
}

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_padded_value() {
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}

#[test]
fn parse_port_rejects_garbage_and_overflow() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn env_parse_u64_falls_back_on_invalid() {
    let key = "__TEST_HUB_U64_INVALID_4411__";
    unsafe { std::env::set_var(key, "-3") };
    assert_eq!(env_parse_u64(key, 7), 7);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_u64_reads_valid_value() {
    let key = "__TEST_HUB_U64_VALID_4412__";
    unsafe { std::env::set_var(key, "42") };
    assert_eq!(env_parse_u64(key, 7), 42);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_u64_unset_uses_default() {
    assert_eq!(env_parse_u64("__TEST_HUB_U64_SURELY_UNSET_4413__", 9), 9);
}
