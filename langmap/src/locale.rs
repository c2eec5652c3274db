//! Canonical locale query, used by build scripts to pick which language map to load.
//!
//! The result has the form `xx_YY` (language, underscore, region) whenever the platform
//! reports one.

/// Returned when none of the locale variables is set.
pub const DEFAULT_LOCALE: &str = "en_US.UTF-8";

/// Environment variables consulted on POSIX systems, in priority order.
pub const LOCALE_VARIABLES: [&str; 5] = ["LANG", "LANGUAGE", "LC_ALL", "LC_CTYPE", "LC_MESSAGES"];

/// Returns the current user's locale, e.g. `de_DE`.
///
/// On Windows the user default locale is asked for and its `-` separators become `_`;
/// if that yields nothing, or on any other platform, the POSIX environment is used.
pub fn current_locale() -> String {
    #[cfg(windows)]
    {
        if let Some(locale) = windows_locale() {
            return locale;
        }
    }

    posix_locale()
}

#[cfg(windows)]
fn windows_locale() -> Option<String> {
    sys_locale::get_locale()
        .filter(|locale| !locale.is_empty())
        .map(|locale| locale.replace('-', "_"))
}

/// Resolves the locale from the process environment.
pub fn posix_locale() -> String {
    posix_locale_with(|name| std::env::var(name).ok())
}

/// Resolves the locale through `lookup`, which maps a variable name to its value.
///
/// The first non-empty value among [`LOCALE_VARIABLES`] wins, [`DEFAULT_LOCALE`]
/// otherwise. The codeset (`.UTF-8` and anything after it) is dropped.
pub fn posix_locale_with<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let locale = LOCALE_VARIABLES
        .iter()
        .filter_map(|&name| lookup(name))
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    match locale.split_once('.') {
        Some((name, _codeset)) => name.to_string(),
        None => locale,
    }
}
