//! Well-known screen routes

/// Sign-in screen; sign-out rows always land here
pub const SIGN_IN: &str = "/(auth)/sign-in";

/// Settings list (the screen the layout is rendered on)
pub const SETTINGS: &str = "/(tabs)/settings";

/// Profile details screen
pub const PROFILE: &str = "/(tabs)/settings/profile";

/// Account deletion confirmation screen
pub const DELETE_ACCOUNT: &str = "/(tabs)/settings/delete-account";
