// ============================================================================
// INTERNATIONALIZATION MODULE
// ============================================================================

use std::collections::HashMap;

use crate::utils::constants::STORAGE_KEY_LANGUAGE;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

/// Translation dictionary for one language.
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "ET" => {
            // Recovery wizard
            translations.insert("verify-account", "Konto kinnitamine");
            translations.insert("one-time-key-prompt", "Ühekordne kood saadeti aadressile");
            translations.insert("one-time-key", "Ühekordne kood");
            translations.insert("set-new-password", "Uus parool");
            translations.insert("password", "Parool");
            translations.insert("repeat-password", "Korda parooli");
            translations.insert("continue", "Jätka");
            translations.insert("something-wrong-back", "Midagi on valesti? Tagasi");
            translations.insert("all-fields-required-message", "Kõik väljad on kohustuslikud");
            translations.insert("password-length-message", "Parool peab olema vähemalt 8 tähemärki");
            translations.insert("password-match-message", "Paroolid ei kattu");
            translations.insert("password-change-success", "Parool on muudetud");
            translations.insert("no-account-found", "Kontot ei leitud");
            translations.insert("wrong-otp", "Vale ühekordne kood");
            translations.insert("connection-error", "Ühenduse viga");

            // Home screen
            translations.insert("ongoing-attendance", "Käimasolev tund");
            translations.insert("course-name", "Kursuse nimi");
            translations.insert("course-code", "Kursuse kood");
            translations.insert("no-of-students", "Õpilaste arv");
            translations.insert("view-attendance-details", "Vaata tunni detaile");
            translations.insert("student-code", "Õpilaskood");
            translations.insert("first-name", "Eesnimi");
            translations.insert("last-name", "Perekonnanimi");
            translations.insert("workplace-id", "Töökoha ID");
            translations.insert("add-student", "Lisa õpilane");
            translations.insert("wrong-workplace-id", "Vale töökoha ID");
            translations.insert("attendance-check-add-success", "Õpilane lisatud: ");
            translations.insert("no-active-attendance", "Aktiivset tundi ei ole");
            translations.insert("add-new-attendance", "Lisa uus tund");
            translations.insert("view-recent-attendance", "Viimane tund");
            translations.insert("refresh", "Värskenda");

            // Settings
            translations.insert("settings", "Seaded");
            translations.insert("change-password", "Muuda parooli");
            translations.insert("log-out", "Logi välja");
            translations.insert("delete-account", "Kustuta konto");
            translations.insert("account-logout-success", "Väljalogimine õnnestus");
            translations.insert("delete-account-success", "Konto on kustutatud");
        }
        "EN" | _ => {
            // Recovery wizard
            translations.insert("verify-account", "Verify your account");
            translations.insert("one-time-key-prompt", "A one-time key was sent to");
            translations.insert("one-time-key", "One-time key");
            translations.insert("set-new-password", "Set a new password");
            translations.insert("password", "Password");
            translations.insert("repeat-password", "Repeat password");
            translations.insert("continue", "Continue");
            translations.insert("something-wrong-back", "Something wrong? Go back");
            translations.insert("all-fields-required-message", "All fields are required");
            translations.insert("password-length-message", "Password must be at least 8 characters");
            translations.insert("password-match-message", "Passwords do not match");
            translations.insert("password-change-success", "Password changed successfully");
            translations.insert("no-account-found", "No account found");
            translations.insert("wrong-otp", "Wrong one-time key");
            translations.insert("connection-error", "Connection error");

            // Home screen
            translations.insert("ongoing-attendance", "Ongoing attendance");
            translations.insert("course-name", "Course name");
            translations.insert("course-code", "Course code");
            translations.insert("no-of-students", "Number of students");
            translations.insert("view-attendance-details", "View attendance details");
            translations.insert("student-code", "Student code");
            translations.insert("first-name", "First name");
            translations.insert("last-name", "Last name");
            translations.insert("workplace-id", "Workplace ID");
            translations.insert("add-student", "Add student");
            translations.insert("wrong-workplace-id", "Wrong workplace ID");
            translations.insert("attendance-check-add-success", "Student added: ");
            translations.insert("no-active-attendance", "No ongoing attendance");
            translations.insert("add-new-attendance", "Add new attendance");
            translations.insert("view-recent-attendance", "Recent attendance");
            translations.insert("refresh", "Refresh");

            // Settings
            translations.insert("settings", "Settings");
            translations.insert("change-password", "Change password");
            translations.insert("log-out", "Log out");
            translations.insert("delete-account", "Delete account");
            translations.insert("account-logout-success", "Logged out successfully");
            translations.insert("delete-account-success", "Account deleted");
        }
    }

    translations
}

/// Resolve a translation key for a language.
/// Falls back to the key itself when no translation exists, so unknown
/// backend reason keys still render as something readable.
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);
    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }
    key.to_string()
}

/// Currently selected language, "EN" when nothing is stored.
pub fn current_language() -> String {
    load_from_storage::<String>(STORAGE_KEY_LANGUAGE).unwrap_or_else(|| "EN".to_string())
}

pub fn save_current_language(lang: &str) -> Result<(), String> {
    save_to_storage(STORAGE_KEY_LANGUAGE, &lang.to_string())
}

pub fn delete_current_language() -> Result<(), String> {
    remove_from_storage(STORAGE_KEY_LANGUAGE)
}
