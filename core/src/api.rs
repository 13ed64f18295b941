//! One call per Mojang endpoint over an injected transport.
//!
//! `MojangApi` glues a `MojangClient` to a `Transport`: build, execute, parse.
//! It holds no mutable state, so a shared reference can be used from many
//! threads at once as long as the transport allows it.

use tracing::debug;

use crate::client::MojangClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{ProfileId, ProfileName, ProfileSkin};

pub struct MojangApi<T> {
    client: MojangClient,
    transport: T,
}

#[cfg(feature = "ureq")]
impl MojangApi<crate::http::UreqTransport> {
    /// Production hosts over a default ureq agent.
    pub fn with_ureq() -> Self {
        Self::new(MojangClient::new(), crate::http::UreqTransport::new())
    }
}

impl<T: Transport> MojangApi<T> {
    pub fn new(client: MojangClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &MojangClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Hashes of the servers blocked by Mojang.
    pub fn blocked_servers(&self) -> Result<Vec<String>, ApiError> {
        let response = self.transport.execute(self.client.build_blocked_servers())?;
        self.client.parse_blocked_servers(response)
    }

    pub fn is_username_available(&self, name: &str) -> Result<bool, ApiError> {
        let response = self.transport.execute(self.client.build_username_available(name))?;
        self.client.parse_username_available(response)
    }

    pub fn get_uuid(&self, name: &str) -> Result<Option<ProfileId>, ApiError> {
        let response = self.transport.execute(self.client.build_get_uuid(name))?;
        self.client.parse_get_uuid(response)
    }

    /// Resolve up to ten names in one request. Names that do not resolve are
    /// missing from the result; an empty or oversized batch is a
    /// `Request` error from the server.
    pub fn get_uuids<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<ProfileId>, ApiError> {
        debug!(count = names.len(), "bulk name lookup");
        let response = self.transport.execute(self.client.build_get_uuids(names)?)?;
        self.client.parse_get_uuids(response)
    }

    pub fn get_name(&self, uuid: &str) -> Result<Option<ProfileId>, ApiError> {
        let response = self.transport.execute(self.client.build_get_name(uuid))?;
        self.client.parse_get_name(response)
    }

    pub fn get_skin(&self, uuid: &str) -> Result<Option<ProfileSkin>, ApiError> {
        let response = self.transport.execute(self.client.build_get_skin(uuid))?;
        self.client.parse_get_skin(response)
    }

    pub fn get_history_name(&self, uuid: &str) -> Result<Option<Vec<ProfileName>>, ApiError> {
        let response = self.transport.execute(self.client.build_get_history_name(uuid))?;
        self.client.parse_get_history_name(response)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::config::ApiVariant;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Replays canned responses and records the requests it saw.
    #[derive(Default)]
    struct Recorder {
        responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl Recorder {
        fn replying(status: u16, body: &str) -> Self {
            let recorder = Self::default();
            recorder.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }));
            recorder
        }
    }

    impl Transport for Recorder {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no response queued".to_string())))
        }
    }

    fn api(recorder: &Recorder) -> MojangApi<&Recorder> {
        MojangApi::new(MojangClient::with_base_url("http://mock"), recorder)
    }

    #[test]
    fn get_uuid_issues_one_get() {
        let recorder =
            Recorder::replying(200, r#"{"id":"069a79f444e94726a5befca90e38aaf5","name":"Notch"}"#);
        let profile = api(&recorder).get_uuid("Notch").unwrap().unwrap();
        assert_eq!(profile.id, "069a79f4-44e9-4726-a5be-fca90e38aaf5");

        let requests = recorder.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].url, "http://mock/users/profiles/minecraft/Notch");
    }

    #[test]
    fn get_uuids_issues_one_post() {
        let recorder = Recorder::replying(200, "[]");
        let profiles = api(&recorder).get_uuids(&["Unknown1", "Unknown2"]).unwrap();
        assert!(profiles.is_empty());

        let requests = recorder.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].body.as_deref(), Some(r#"["Unknown1","Unknown2"]"#));
    }

    #[test]
    fn absent_skin_is_not_an_error() {
        let recorder = Recorder::replying(204, "");
        assert!(api(&recorder)
            .get_skin("00000000000000000000000000000000")
            .unwrap()
            .is_none());
    }

    #[test]
    fn legacy_availability() {
        let recorder = Recorder::replying(204, "");
        let api = MojangApi::new(
            MojangClient::with_base_url("http://mock").variant(ApiVariant::Legacy),
            &recorder,
        );
        assert!(api.is_username_available("free_name").unwrap());
        assert_eq!(
            recorder.requests.borrow()[0].url,
            "http://mock/available/minecraft/free_name"
        );
    }

    #[test]
    fn transport_failure_propagates() {
        let recorder = Recorder::default();
        let err = api(&recorder).blocked_servers().unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn history_error_status_propagates() {
        let recorder = Recorder::replying(500, "boom");
        let err = api(&recorder).get_history_name("x").unwrap_err();
        assert!(matches!(err, ApiError::Request { status: 500, .. }));
    }
}
