//! Draft editor for a single user record.
//!
//! The form owns a copy of the record; nothing reaches the server until the
//! caller takes the draft via [`EditForm::begin_submit`] and runs its own
//! update operation.

use std::future::Future;

use crate::remote::wire::UserRecord;

pub struct EditForm {
    draft: UserRecord,
    submitting: bool,
}

impl EditForm {
    /// Seeds the draft from the record being edited.
    pub fn new(record: &UserRecord) -> Self {
        Self {
            draft: record.clone(),
            submitting: false,
        }
    }

    pub fn draft(&self) -> &UserRecord {
        &self.draft
    }

    /// Whether the submit control is disabled by a pending update.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.draft.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.draft.last_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.draft.email = value.into();
    }

    /// Hands the full draft to `save` and stays disabled until it settles,
    /// success or failure. Returns `None` if a submit is already pending.
    pub async fn submit<F, Fut, T, E>(&mut self, save: F) -> Option<Result<T, E>>
    where
        F: FnOnce(UserRecord) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let draft = self.begin_submit()?;
        let result = save(draft).await;
        self.settle();
        Some(result)
    }

    /// Takes a snapshot of the full draft for submission and disables the
    /// submit control. Returns `None` if a submit is already pending.
    pub fn begin_submit(&mut self) -> Option<UserRecord> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.draft.clone())
    }

    /// Re-enables the submit control once the update settles, success or
    /// failure.
    pub fn settle(&mut self) {
        self.submitting = false;
    }

    /// Discards the draft without invoking any update.
    pub fn cancel(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            id: 2,
            first_name: "Janet".to_string(),
            last_name: "Weaver".to_string(),
            email: "janet.weaver@reqres.in".to_string(),
            avatar: "https://reqres.in/img/faces/2-image.jpg".to_string(),
        }
    }

    #[test]
    fn draft_is_seeded_from_the_record() {
        let form = EditForm::new(&record());
        assert_eq!(form.draft(), &record());
        assert!(!form.is_submitting());
    }

    #[test]
    fn field_change_touches_only_that_field() {
        let mut form = EditForm::new(&record());
        form.set_email("janet@example.com");

        assert_eq!(form.draft().email, "janet@example.com");
        assert_eq!(form.draft().first_name, "Janet");
        assert_eq!(form.draft().last_name, "Weaver");
        assert_eq!(form.draft().id, 2);
        assert_eq!(form.draft().avatar, record().avatar);
    }

    #[test]
    fn submit_hands_over_the_full_draft_and_disables_resubmission() {
        let mut form = EditForm::new(&record());
        form.set_first_name("Jan");

        let draft = form.begin_submit().expect("first submit should start");
        assert_eq!(draft.first_name, "Jan");
        assert_eq!(draft.id, 2);
        assert!(form.is_submitting());

        // Disabled until the pending update settles.
        assert!(form.begin_submit().is_none());

        form.settle();
        assert!(!form.is_submitting());
        assert!(form.begin_submit().is_some());
    }

    #[tokio::test]
    async fn submit_reenables_after_a_failed_update() {
        let mut form = EditForm::new(&record());
        form.set_first_name("Jan");

        let result = form
            .submit(|draft| async move {
                assert_eq!(draft.first_name, "Jan");
                assert_eq!(draft.id, 2);
                Err::<(), &str>("update failed")
            })
            .await;

        assert_eq!(result, Some(Err("update failed")));
        // The failure settled the operation, so the control is live again.
        assert!(!form.is_submitting());
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn cancel_discards_the_draft_without_saving() {
        let original = record();
        let mut form = EditForm::new(&original);
        form.set_first_name("Changed");
        form.cancel();
        // Nothing was handed to any update operation; the caller still
        // holds the unmodified record.
        assert_eq!(original.first_name, "Janet");
    }
}
