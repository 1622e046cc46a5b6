//! In-memory mail API for view tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use prune::App;
use prune::confirm::AutoConfirm;
use prune::format::DateFormatter;
use prune::notify::RecordingNotifier;
use prune::view::{ComposeView, DetailView, ListView};
use prune_core::{
    Email, EmailApi, EmailId, EmailRequest, EmailStatus, EmailType, Error, Result,
};
use reqwest::StatusCode;
use tokio::sync::Barrier;

/// A call made against [`FakeApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Send(EmailRequest),
    Draft(EmailRequest),
    ListAll,
    List(EmailType),
    Get(EmailId),
    Delete(EmailId),
}

/// How `get_by_id` should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetFailure {
    NotFound,
    ServerError,
}

#[derive(Debug, Default)]
struct State {
    emails: Vec<Email>,
    next_id: i64,
    failing_lists: HashSet<EmailType>,
    get_failure: Option<GetFailure>,
    fail_send: bool,
    fail_draft: bool,
    calls: Vec<Call>,
}

/// Mail API backed by a vector of emails.
///
/// With [`FakeApi::with_list_barrier`] the three list calls only return once
/// all of them have started, so a caller that awaits them one after the
/// other never finishes.
#[derive(Debug, Default)]
pub struct FakeApi {
    state: Mutex<State>,
    list_barrier: Option<Barrier>,
}

fn server_error() -> Error {
    Error::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: "boom".to_string(),
    }
}

impl FakeApi {
    pub fn new(emails: Vec<Email>) -> Self {
        let next_id = emails
            .iter()
            .filter_map(|e| e.id)
            .map(EmailId::get)
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            state: Mutex::new(State {
                emails,
                next_id,
                ..State::default()
            }),
            list_barrier: None,
        }
    }

    #[must_use]
    pub fn with_list_barrier(mut self) -> Self {
        self.list_barrier = Some(Barrier::new(3));
        self
    }

    pub fn fail_list(&self, email_type: EmailType) {
        self.state.lock().unwrap().failing_lists.insert(email_type);
    }

    pub fn heal_lists(&self) {
        self.state.lock().unwrap().failing_lists.clear();
    }

    pub fn fail_get(&self, failure: GetFailure) {
        self.state.lock().unwrap().get_failure = Some(failure);
    }

    pub fn fail_send(&self) {
        self.state.lock().unwrap().fail_send = true;
    }

    pub fn fail_draft(&self) {
        self.state.lock().unwrap().fail_draft = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn stored(&self) -> Vec<Email> {
        self.state.lock().unwrap().emails.clone()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }

    async fn list(&self, email_type: EmailType) -> Result<Vec<Email>> {
        self.record(Call::List(email_type));
        if let Some(barrier) = &self.list_barrier {
            barrier.wait().await;
        }

        let state = self.state.lock().unwrap();
        if state.failing_lists.contains(&email_type) {
            return Err(server_error());
        }
        Ok(state
            .emails
            .iter()
            .filter(|e| e.email_type == email_type)
            .cloned()
            .collect())
    }

    fn store(&self, request: &EmailRequest, email_type: EmailType) -> Email {
        let mut state = self.state.lock().unwrap();
        let id = EmailId(state.next_id);
        state.next_id += 1;

        let status = match email_type {
            EmailType::Draft => EmailStatus::Draft,
            EmailType::Sent | EmailType::Received => EmailStatus::Sent,
        };
        let email = Email {
            id: Some(id),
            from_email: "me@example.com".to_string(),
            to_email: request.to.clone(),
            cc_email: Some(request.cc.clone()).filter(|cc| !cc.is_empty()),
            bcc_email: Some(request.bcc.clone()).filter(|bcc| !bcc.is_empty()),
            subject: request.subject.clone(),
            body: request.body.clone(),
            sent_date: (email_type == EmailType::Sent).then(|| at(2025, 1, 15)),
            received_date: None,
            status,
            email_type,
        };
        state.emails.push(email.clone());
        email
    }
}

#[async_trait]
impl EmailApi for FakeApi {
    async fn send(&self, request: &EmailRequest) -> Result<Email> {
        self.record(Call::Send(request.clone()));
        if self.state.lock().unwrap().fail_send {
            return Err(server_error());
        }
        Ok(self.store(request, EmailType::Sent))
    }

    async fn save_as_draft(&self, request: &EmailRequest) -> Result<Email> {
        self.record(Call::Draft(request.clone()));
        if self.state.lock().unwrap().fail_draft {
            return Err(server_error());
        }
        Ok(self.store(request, EmailType::Draft))
    }

    async fn list_all(&self) -> Result<Vec<Email>> {
        self.record(Call::ListAll);
        Ok(self.stored())
    }

    async fn list_sent(&self) -> Result<Vec<Email>> {
        self.list(EmailType::Sent).await
    }

    async fn list_received(&self) -> Result<Vec<Email>> {
        self.list(EmailType::Received).await
    }

    async fn list_drafts(&self) -> Result<Vec<Email>> {
        self.list(EmailType::Draft).await
    }

    async fn get_by_id(&self, id: EmailId) -> Result<Email> {
        self.record(Call::Get(id));
        let state = self.state.lock().unwrap();
        match state.get_failure {
            Some(GetFailure::NotFound) => return Err(Error::NotFound(id)),
            Some(GetFailure::ServerError) => return Err(server_error()),
            None => {}
        }
        state
            .emails
            .iter()
            .find(|e| e.id == Some(id))
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    async fn delete(&self, id: EmailId) -> Result<()> {
        self.record(Call::Delete(id));
        let mut state = self.state.lock().unwrap();
        let before = state.emails.len();
        state.emails.retain(|e| e.id != Some(id));
        if state.emails.len() == before {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }
}

pub fn at(year: i32, month: u32, day: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(10, 30, 5)
        .unwrap()
}

pub fn email(id: i64, email_type: EmailType) -> Email {
    let (status, sent_date, received_date) = match email_type {
        EmailType::Sent => (EmailStatus::Sent, Some(at(2025, 1, 15)), None),
        EmailType::Received => (EmailStatus::Unread, None, Some(at(2025, 2, 3))),
        EmailType::Draft => (EmailStatus::Draft, None, None),
    };

    Email {
        id: Some(EmailId(id)),
        from_email: "alice@example.com".to_string(),
        to_email: "bob@example.com".to_string(),
        cc_email: None,
        bcc_email: None,
        subject: format!("Subject {id}"),
        body: format!("Body {id}"),
        sent_date,
        received_date,
        status,
        email_type,
    }
}

/// One email of each type: 1 sent, 2 received, 3 draft.
pub fn mailbox() -> Vec<Email> {
    vec![
        email(1, EmailType::Sent),
        email(2, EmailType::Received),
        email(3, EmailType::Draft),
    ]
}

/// Shared capabilities for building views.
pub struct Harness {
    pub api: Arc<FakeApi>,
    pub notifier: Arc<RecordingNotifier>,
    pub confirm: Arc<AutoConfirm>,
    pub formatter: DateFormatter,
}

impl Harness {
    pub fn new(api: FakeApi) -> Self {
        Self::with_confirm(api, true)
    }

    pub fn with_confirm(api: FakeApi, answer: bool) -> Self {
        Self {
            api: Arc::new(api),
            notifier: Arc::new(RecordingNotifier::new()),
            confirm: Arc::new(AutoConfirm(answer)),
            formatter: DateFormatter::new(chrono::Locale::en_US),
        }
    }

    pub fn list_view(&self) -> ListView {
        ListView::new(
            self.api.clone(),
            self.notifier.clone(),
            self.confirm.clone(),
            self.formatter,
        )
    }

    pub fn detail_view(&self) -> DetailView {
        DetailView::new(
            self.api.clone(),
            self.notifier.clone(),
            self.confirm.clone(),
            self.formatter,
        )
    }

    pub fn compose_view(&self) -> ComposeView {
        ComposeView::new(self.api.clone(), self.notifier.clone())
    }

    pub fn app(&self) -> App {
        App::new(
            self.api.clone(),
            self.notifier.clone(),
            self.confirm.clone(),
            self.formatter,
        )
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifier
            .calls()
            .into_iter()
            .map(|n| n.message)
            .collect()
    }
}
