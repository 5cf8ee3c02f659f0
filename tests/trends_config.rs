// tests/trends_config.rs
use std::{env, fs};
use trend_aggregator::config::trends::{
    DEFAULT_USER_AGENT, ENV_INCLUDE_INSTAGRAM, ENV_TRENDS_CONFIG_PATH, ENV_TWITTER_API_KEY,
};
use trend_aggregator::ingest::providers::http_client;
use trend_aggregator::TrendsConfig;

fn clear_env() {
    env::remove_var(ENV_TRENDS_CONFIG_PATH);
    env::remove_var(ENV_TWITTER_API_KEY);
    env::remove_var(ENV_INCLUDE_INSTAGRAM);
}

#[serial_test::serial]
#[test]
fn parse_toml_and_json_paths() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();

    let p_toml = dir.path().join("trends.toml");
    fs::write(
        &p_toml,
        r#"
twitter_api_key = "abc"
include_instagram = true
top_n = 10
"#,
    )
    .unwrap();
    let t = TrendsConfig::load_from(&p_toml).unwrap();
    assert_eq!(t.twitter_credential(), Some("abc"));
    assert!(t.include_instagram);
    assert_eq!(t.top_n, 10);

    let p_json = dir.path().join("trends.json");
    fs::write(&p_json, r#"{"similarity_threshold": 0.75}"#).unwrap();
    let j = TrendsConfig::load_from(&p_json).unwrap();
    assert!((j.similarity_threshold - 0.75).abs() < f64::EPSILON);
    assert!(!j.include_instagram);
}

#[serial_test::serial]
#[test]
fn default_uses_env_then_fallbacks() {
    // Isolate CWD so the repo's own config/ doesn't leak in
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    clear_env();

    // 1) Nothing → built-in defaults
    let v = TrendsConfig::load_default().unwrap();
    assert_eq!(v, TrendsConfig::default());

    // 2) Fallback TOML in ./config/
    let cfg_dir = tmp.path().join("config");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("trends.toml"), "top_n = 5\n").unwrap();
    assert_eq!(TrendsConfig::load_default().unwrap().top_n, 5);

    // 3) Env path wins
    let p_env = tmp.path().join("elsewhere.json");
    fs::write(&p_env, r#"{"top_n": 3}"#).unwrap();
    env::set_var(ENV_TRENDS_CONFIG_PATH, p_env.display().to_string());
    assert_eq!(TrendsConfig::load_default().unwrap().top_n, 3);

    // 4) Env path to nowhere is an error
    env::set_var(ENV_TRENDS_CONFIG_PATH, tmp.path().join("missing.toml").display().to_string());
    assert!(TrendsConfig::load_default().is_err());

    clear_env();
    env::set_current_dir(&old).unwrap();
}

#[serial_test::serial]
#[test]
fn env_overrides_apply_after_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("trends.toml");
    fs::write(&p, "twitter_api_key = \"ENV\"\ninclude_instagram = false\n").unwrap();

    // ENV marker without the variable: source disabled, not an error
    let off = TrendsConfig::load_from(&p).unwrap();
    assert_eq!(off.twitter_credential(), None);

    env::set_var(ENV_TWITTER_API_KEY, "from-env");
    env::set_var(ENV_INCLUDE_INSTAGRAM, "true");
    let on = TrendsConfig::load_from(&p).unwrap();
    assert_eq!(on.twitter_credential(), Some("from-env"));
    assert!(on.include_instagram);

    clear_env();
}

#[serial_test::serial]
#[test]
fn illegal_user_agent_in_file_loads_default() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("trends.toml");
    fs::write(&p, "user_agent = \"bad\\nagent\"\ntop_n = 3\n").unwrap();

    let cfg = TrendsConfig::load_from(&p).unwrap();
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.top_n, 3);
    assert!(http_client(&cfg).is_ok());
}
