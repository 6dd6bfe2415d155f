pub const SESSION_USERNAME_KEY: &str = "lottery_username";
pub const THEME_KEY: &str = "theme";

pub const FULL_TURN_DEGREES: f64 = 360.0;
/// Where inside the chosen sector the pointer comes to rest, as a fraction of the sector span.
pub const SECTOR_LANDING_FRACTION: f64 = 0.5;

pub const DEFAULT_EXTRA_SPINS: u32 = 3;
pub const DEFAULT_SPIN_DURATION_MS: u32 = 5000;
pub const DEFAULT_SPRING_STIFFNESS: f64 = 300.0;
pub const DEFAULT_SPRING_DAMPING: f64 = 30.0;
pub const DEFAULT_SPRING_MASS: f64 = 1.0;

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "demo";

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 20;

pub const REGISTRATION_DELAY_MS: u32 = 1000;
pub const REGISTRATION_REDIRECT_MS: u32 = 2000;

pub const MISSING_CREDENTIALS_ERROR: &str = "Please enter your username and password";
pub const INVALID_CREDENTIALS_ERROR: &str = "Incorrect username or password";
pub const MISSING_FIELDS_ERROR: &str = "All fields are required";
pub const INVALID_EMAIL_ERROR: &str = "Please enter a valid email address";
pub const SHORT_PASSWORD_ERROR: &str = "Password must be at least 6 characters long";
pub const PASSWORD_MISMATCH_ERROR: &str = "The two passwords do not match";
pub const REGISTRATION_SUCCESS: &str = "Registration successful! Redirecting to login...";
