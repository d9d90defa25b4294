use std::time::Duration;

use egui_kittest::Harness;
use userboard_ui::UserboardApp;
use userboard_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// How long to let the mock server answer before stepping again.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 50;

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, UserboardApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, UserboardApp> {
        &mut self.harness
    }

    /// App whose users endpoint answers with `users`.
    pub async fn new_app(users: serde_json::Value) -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(users)).await
    }

    /// App whose users endpoint answers with an empty `status` response.
    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        Self::with_response(ResponseTemplate::new(status_code)).await
    }

    async fn with_response(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(response)
            .expect(1)
            .mount(&mock_server)
            .await;

        let state = State::test(format!("{}/users", mock_server.uri()));
        let app = UserboardApp::new(state);
        let harness = Harness::builder()
            .with_size(egui::vec2(1600.0, 900.0))
            .build_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    /// Steps until the users fetch has left the loading state.
    pub async fn wait_for_users(&mut self) {
        for _ in 0..40 {
            self.harness.step();
            let loading = self
                .harness
                .state()
                .state()
                .ctx
                .cached::<userboard_business::UsersCompute>()
                .is_some_and(userboard_business::UsersCompute::is_loading);
            if !loading {
                break;
            }
            yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
        }
        // One frame to compute the view, one to render it.
        self.harness.step();
        self.harness.step();
    }
}

pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// `count` users in jsonplaceholder shape, named "Person 1".."Person N".
pub fn users_json(count: u64) -> serde_json::Value {
    let users: Vec<_> = (1..=count)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "name": format!("Person {id}"),
                "username": format!("person{id}"),
                "email": format!("person{id}@mail.test"),
                "address": {
                    "street": format!("{id} Main Street"),
                    "suite": "Apt. 1",
                    "city": format!("Town {id}"),
                    "zipcode": format!("1000{id}"),
                    "geo": { "lat": "0", "lng": "0" }
                },
                "phone": format!("555-000-{id:04}"),
                "website": format!("person{id}.test"),
                "company": {
                    "name": format!("Company {id}"),
                    "catchPhrase": "Robust local throughput",
                    "bs": "cultivate vertical markets"
                }
            })
        })
        .collect();
    serde_json::Value::Array(users)
}
