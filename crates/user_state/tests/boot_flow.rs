use std::rc::Rc;

use platform_host::{HostServices, MemoryEventDispatch, StaticPlatform, MANUAL_CONNECT_EVENT};
use pretty_assertions::assert_eq;
use user_state::{
    CatalogLocalizer, EnvironmentConfig, I18n, I18nError, LocaleMessage, LocaleMessages, OsName,
    ThemeType, UserAction, UserStateStore,
};

fn boot(platform: StaticPlatform) -> (UserStateStore, MemoryEventDispatch) {
    let events = MemoryEventDispatch::default();
    let host = HostServices::stub(platform, Rc::new(events.clone()));
    (UserStateStore::new(host), events)
}

#[test]
fn localizer_fails_until_installed() {
    let (mut store, _) = boot(StaticPlatform::linux());

    assert_eq!(store.state().i18n.t("icu:title"), Err(I18nError::NotSetUp));
    assert_eq!(store.state().i18n.locale(), Err(I18nError::NotSetUp));
    assert_eq!(store.state().i18n.intl(), Err(I18nError::NotSetUp));
    assert_eq!(
        store.state().i18n.is_legacy_format("icu:title"),
        Err(I18nError::NotSetUp)
    );

    let mut messages = LocaleMessages::new();
    messages.insert("icu:title".to_string(), LocaleMessage::icu("Signal"));
    store.install_i18n(I18n::new(CatalogLocalizer::new("en-US", messages)));

    assert_eq!(store.state().i18n.t("icu:title").unwrap(), "Signal");
    assert_eq!(store.state().i18n.locale().unwrap(), "en-US");
}

#[test]
fn wire_update_after_environment_boot_keeps_untouched_fields() {
    let (mut store, _) = boot(StaticPlatform::macos());
    store.apply_environment(
        EnvironmentConfig::from_json_str(
            r#"{"platform":"darwin","version":"6.2.0","tempPath":"/tmp/client"}"#,
        )
        .expect("parse environment"),
    );
    store.dispatch(
        UserAction::from_json_str(r#"{"type":"USER_CHANGED","payload":{"regionCode":"US"}}"#)
            .expect("decode region"),
    );
    let before = store.state().clone();

    store.dispatch(
        UserAction::from_json_str(r#"{"type":"USER_CHANGED","payload":{"theme":"dark"}}"#)
            .expect("decode theme"),
    );

    let mut expected = before;
    expected.theme = ThemeType::Dark;
    assert_eq!(store.state(), &expected);
    assert_eq!(store.state().region_code.as_deref(), Some("US"));
    assert_eq!(store.state().platform, "darwin");
    assert_eq!(store.state().version, "6.2.0");
    assert_eq!(store.state().temp_path, "/tmp/client");
    assert_eq!(store.state().os_name, Some(OsName::Macos));
}

#[test]
fn reconnect_dispatches_one_event_per_request() {
    let (mut store, events) = boot(StaticPlatform::unrecognized());

    assert_eq!(store.manual_reconnect(), UserAction::Noop);
    assert_eq!(store.manual_reconnect(), UserAction::Noop);

    assert_eq!(events.count(MANUAL_CONNECT_EVENT), 2);
    assert_eq!(store.state().os_name, None);
}
