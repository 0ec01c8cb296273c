pub mod cli_consts {
    //! Login Form Configuration Constants
    //!
    //! Fixed strings and defaults, organized by functional area.

    // =============================================================================
    // ENDPOINT CONFIGURATION
    // =============================================================================

    /// Path of the login route, appended to the environment's base URL.
    pub const LOGIN_PATH: &str = "/api/users/login";

    /// Environment variable selecting the deployment environment.
    pub const ENVIRONMENT_VAR: &str = "LOGIN_FORM_ENVIRONMENT";

    /// Environment variable the headless `submit` command reads the password from.
    pub const PASSWORD_VAR: &str = "LOGIN_FORM_PASSWORD";

    // =============================================================================
    // FILES
    // =============================================================================

    /// Directory under $HOME holding the config and log files.
    pub const CONFIG_DIR: &str = ".login-form";

    pub const CONFIG_FILE: &str = "config.json";

    pub const LOG_FILE: &str = "login-form.log";

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long the UI loop waits for a key before redrawing.
    pub const UI_POLL_INTERVAL_MS: u64 = 100;

    /// Size of the channel carrying request results back to the UI.
    pub const EVENT_QUEUE_SIZE: usize = 8;
}

pub mod messages {
    //! Texts shown to the user.

    pub const CARD_TITLE: &str = "Login";
    pub const CARD_DESCRIPTION: &str = "Enter your credentials to access your account";
    pub const EMAIL_LABEL: &str = "Email";
    pub const EMAIL_PLACEHOLDER: &str = "your@email.com";
    pub const PASSWORD_LABEL: &str = "Password";
    pub const PASSWORD_PLACEHOLDER: &str = "••••••••";
    pub const SUBMIT_LABEL: &str = "Login";
    pub const SUBMIT_LOADING_LABEL: &str = "Logging in...";
    pub const MODAL_TITLE: &str = "Login Successful";
    pub const MODAL_CLOSE_LABEL: &str = "Close";
    pub const NO_RESPONSE_YET: &str = "No response to show yet.";
    pub const REQUEST_IN_PROGRESS: &str = "A login request is in progress.";

    /// Inline error for HTTP failures without a usable `message`.
    pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

    /// Inline error for everything that isn't an HTTP failure.
    pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
}
