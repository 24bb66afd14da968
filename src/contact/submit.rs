use log::{error, info};
use serde::Serialize;
use wasm_bindgen::JsValue;

use super::models::{ContactDraft, Stamp, Submission};
use super::store::{KeyValueStore, RecordStore, StoreError};
use super::validate::{validate, ValidationError};
use crate::components::notification::NotificationKind;
use crate::config;

pub const MSG_MISSING_FIELDS: &str = "الرجاء ملء جميع الحقول المطلوبة";
pub const MSG_SENT: &str = "تم إرسال رسالتك بنجاح! سنتواصل معك قريباً";
pub const MSG_SEND_FAILED: &str = "حدث خطأ أثناء إرسال الرسالة. الرجاء المحاولة مرة أخرى";

pub trait Clock {
    fn now(&self) -> Stamp;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DateFormat {
    time_zone: &'static str,
    year: &'static str,
    month: &'static str,
    day: &'static str,
    hour: &'static str,
    minute: &'static str,
}

/// Formats through the browser's `Date.toLocaleString` so the site locale's calendar is used.
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> Stamp {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let options = serde_wasm_bindgen::to_value(&DateFormat {
            time_zone: config::SITE_TIME_ZONE,
            year: "numeric",
            month: "long",
            day: "numeric",
            hour: "2-digit",
            minute: "2-digit",
        })
        .unwrap_or(JsValue::UNDEFINED);
        let date = js_sys::Date::new(&JsValue::from_f64(timestamp as f64))
            .to_locale_string(config::SITE_LOCALE, &options)
            .into();
        Stamp { date, timestamp }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Invalid(ValidationError),
    Saved { stored: usize },
    Failed(StoreError),
}

impl SubmitOutcome {
    pub fn notification(&self) -> (&'static str, NotificationKind) {
        match self {
            SubmitOutcome::Invalid(_) => (MSG_MISSING_FIELDS, NotificationKind::Error),
            SubmitOutcome::Saved { .. } => (MSG_SENT, NotificationKind::Success),
            SubmitOutcome::Failed(_) => (MSG_SEND_FAILED, NotificationKind::Error),
        }
    }

    /// Only a persisted submission clears the form.
    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::Saved { .. })
    }
}

/// Validate, then persist. The store is not touched for an invalid draft.
pub fn submit_contact<S: KeyValueStore>(
    draft: &ContactDraft,
    store: &RecordStore<S>,
    clock: &dyn Clock,
) -> SubmitOutcome {
    if let Err(e) = validate(draft) {
        info!("Contact form rejected: {}", e);
        return SubmitOutcome::Invalid(e);
    }

    let record = Submission::from_draft(draft, clock.now());
    match store.append(&record) {
        Ok(stored) => {
            info!("Contact submission saved ({} stored)", stored);
            SubmitOutcome::Saved { stored }
        }
        Err(e) => {
            error!("Error saving form data: {}", e);
            SubmitOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::store::MemoryStorage;
    use crate::contact::validate::Field;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> Stamp {
            Stamp {
                date: "١٩ أكتوبر ٢٠٢٦".to_string(),
                timestamp: 1_792_400_000_000,
            }
        }
    }

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: "+966512345678".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn missing_field_writes_nothing_and_reports_error() {
        let store = RecordStore::new(MemoryStorage::default());
        for d in [draft("", "e", "m"), draft("n", "", "m"), draft("n", "e", "")] {
            let outcome = submit_contact(&d, &store, &FixedClock);
            assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
            assert_eq!(outcome.notification(), (MSG_MISSING_FIELDS, NotificationKind::Error));
            assert!(!outcome.clears_form());
        }
        assert!(store.storage().get_item("contactSubmissions").unwrap().is_none());
    }

    #[test]
    fn invalid_draft_names_the_field() {
        let store = RecordStore::new(MemoryStorage::default());
        match submit_contact(&draft("n", "", "m"), &store, &FixedClock) {
            SubmitOutcome::Invalid(ValidationError::MissingField(field)) => assert_eq!(field, Field::Email),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn valid_submission_prepends_one_record() {
        let store = RecordStore::new(MemoryStorage::default());
        submit_contact(&draft("first", "e", "m"), &store, &FixedClock);
        let outcome = submit_contact(&draft("second", "e", "m"), &store, &FixedClock);

        assert!(matches!(outcome, SubmitOutcome::Saved { stored: 2 }));
        assert_eq!(outcome.notification(), (MSG_SENT, NotificationKind::Success));
        assert!(outcome.clears_form());

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "second");
        assert_eq!(records[0].phone, "+966512345678");
        assert_eq!(records[0].timestamp, 1_792_400_000_000);
        assert_eq!(records[0].date, "١٩ أكتوبر ٢٠٢٦");
    }

    #[test]
    fn storage_failure_reports_error_and_keeps_form() {
        let store = RecordStore::new(MemoryStorage::failing());
        let outcome = submit_contact(&draft("n", "e", "m"), &store, &FixedClock);
        assert!(matches!(outcome, SubmitOutcome::Failed(StoreError::Write { .. })));
        assert_eq!(outcome.notification(), (MSG_SEND_FAILED, NotificationKind::Error));
        assert!(!outcome.clears_form());
    }

    #[test]
    fn empty_stored_value_still_saves() {
        let store = RecordStore::new(MemoryStorage::with_item("contactSubmissions", ""));
        let outcome = submit_contact(&draft("n", "e", "m"), &store, &FixedClock);
        assert!(matches!(outcome, SubmitOutcome::Saved { stored: 1 }));
    }

    #[test]
    fn corrupt_store_fails_the_submission() {
        let store = RecordStore::new(MemoryStorage::with_item("contactSubmissions", "nope"));
        let outcome = submit_contact(&draft("n", "e", "m"), &store, &FixedClock);
        assert!(matches!(outcome, SubmitOutcome::Failed(StoreError::Corrupt(_))));
    }
}
