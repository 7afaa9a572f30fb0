use panda_common::{AlertStatus, NewAlert, VisaType};
use panda_server::rest::{router, AppState};
use panda_server::store::AlertStore;

use crate::client::AlertClient;

/// Serves the real API router on an ephemeral port and returns a client
/// pointed at it, plus the store handle for assertions.
pub async fn spawn_api(store: AlertStore) -> (AlertClient, AlertStore) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(AppState::new(store.clone()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (AlertClient::new(&format!("http://{addr}")), store)
}

pub fn seed(store: &AlertStore, country: &str, city: &str, status: AlertStatus) -> String {
    store
        .create(NewAlert {
            country: country.into(),
            city: city.into(),
            visa_type: VisaType::Tourist,
            status: Some(status),
        })
        .id
}
