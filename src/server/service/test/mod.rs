mod storage;

use crate::server::service::storage::StorageService;
use wiremock::MockServer;

/// Storage service pointed at a mock store.
fn mock_storage(server: &MockServer) -> StorageService {
    StorageService::new(reqwest::Client::new(), &server.uri(), "service-key")
}
