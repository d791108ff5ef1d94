/// Seconds between two simulated steps of a delivery.
pub const ADVANCE_INTERVAL_SECONDS: u64 = 30;
/// Seconds a delivered activity stays visible before it is ended.
pub const AUTO_END_DELAY_SECONDS: u64 = 10;
/// Live activities allowed at the same time on the console center.
pub const MAX_ACTIVITIES: usize = 1;
pub const REJECTION_PROBABILITY: f32 = 0.0;

pub const DEFAULT_ESTIMATED_TIME: &str = "Calculando...";
pub const WIDGET_URL_SCHEME: &str = "deliveryapp";

pub const TEST_ORDER_ID: &str = "TEST123";
pub const TEST_CUSTOMER_NAME: &str = "Usuário Teste";

pub const MOCK_ORDER_NUMBER: &str = "12345";
pub const MOCK_RESTAURANT_NAME: &str = "Pizza Express";
pub const MOCK_DRIVER_NAME: &str = "Carlos Silva";

pub const CONFIG_PATH_ENV: &str = "TRACKER_CONFIG";
pub const LOG_LEVEL_ENV: &str = "TRACKER_LOG";
