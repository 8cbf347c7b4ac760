use crate::app::domain::settings::ThemeMode;

/// Resolve the configured theme mode to a concrete dark/light decision.
pub fn resolve_dark_mode(mode: ThemeMode) -> bool {
    match mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    }
}

/// Ask the desktop environment whether it prefers a dark theme.
/// Falls back to light when nothing can be queried.
pub fn detect_system_dark_mode() -> bool {
    let detected = query_desktop_preference();
    log::debug!("System dark mode preference: {:?}", detected);
    detected.unwrap_or(false)
}

#[cfg(target_os = "windows")]
fn query_desktop_preference() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark, 1 = light
    let value: u32 = key.get_value("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

#[cfg(target_os = "linux")]
fn query_desktop_preference() -> Option<bool> {
    let color_scheme = gsettings_value("color-scheme");
    if let Some(ref scheme) = color_scheme {
        if scheme.contains("prefer-dark") {
            return Some(true);
        }
    }
    let gtk_theme = gsettings_value("gtk-theme");
    if let Some(ref theme) = gtk_theme {
        return Some(theme.to_lowercase().contains("dark"));
    }
    color_scheme.map(|_| false)
}

#[cfg(target_os = "linux")]
fn gsettings_value(key: &str) -> Option<String> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(target_os = "macos")]
fn query_desktop_preference() -> Option<bool> {
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    // The key is absent (non-zero exit) in light mode
    if !output.status.success() {
        return Some(false);
    }
    Some(String::from_utf8_lossy(&output.stdout).to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn query_desktop_preference() -> Option<bool> {
    None
}
