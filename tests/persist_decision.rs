//! Decision persistence writes exactly one boolean per invocation, equal to
//! "override flag present", regardless of what the store already holds.

mod common;

use clap::{ArgMatches, Command};

use common::MemorySettings;
use ownergate::adapters::SettingsStore;
use ownergate::constants::CHECK_OWNER_SETTING;
use ownergate::policy::{persist_decision, register_options};

fn parse(args: &[&str]) -> ArgMatches {
    register_options(Command::new("admin"))
        .try_get_matches_from(args)
        .unwrap()
}

#[test]
fn records_true_when_flag_present() {
    let input = parse(&["admin", "--no-config-owner-check"]);
    let settings = MemorySettings::default();
    persist_decision(&input, &settings).unwrap();

    let writes = settings.writes.lock().unwrap();
    assert_eq!(writes.as_slice(), &[(CHECK_OWNER_SETTING.to_string(), true)]);
}

#[test]
fn records_false_when_flag_absent() {
    let input = parse(&["admin"]);
    let settings = MemorySettings::default();
    persist_decision(&input, &settings).unwrap();

    let writes = settings.writes.lock().unwrap();
    assert_eq!(writes.as_slice(), &[(CHECK_OWNER_SETTING.to_string(), false)]);
}

#[test]
fn write_is_unconditional_whatever_the_store_held() {
    for prior in [true, false] {
        let input = parse(&["admin", "--no-config-owner-check"]);
        let settings = MemorySettings::with_value(CHECK_OWNER_SETTING, prior);
        persist_decision(&input, &settings).unwrap();
        assert_eq!(settings.get_bool(CHECK_OWNER_SETTING), Some(true), "prior={prior}");
        assert_eq!(settings.writes.lock().unwrap().len(), 1);
    }
}
