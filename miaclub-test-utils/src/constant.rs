/// Password given to every account created by the fixtures
pub const TEST_PASSWORD: &str = "secreto123";

/// Base URL used when building public object URLs in tests
pub const TEST_PUBLIC_URL: &str = "http://localhost";
