//! Console output helpers.

use colored::Colorize;
use serde::Serialize;
use social_core::SocialError;

/// Pretty-prints any serializable value as JSON.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("{}", format!("failed to render output: {}", e).red()),
    }
}

/// Prints a short confirmation line.
pub fn print_ok(message: &str) {
    println!("{}", message.green());
}

/// Prints the toast-style failure line for an action.
pub fn print_error(err: &SocialError) {
    eprintln!("{}", format!("error: {}", err).red());
    if err.is_unauthorized() {
        eprintln!("{}", "请重新登录".yellow());
    }
}
