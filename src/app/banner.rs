//! Startup banner.

use colored::Colorize;

const LOGO: &str = r"
           _ _     _     _  __ _
 __      _(_) | __| |___(_)/ _| |_
 \ \ /\ / / | |/ _` / __| | |_| __|
  \ V  V /| | | (_| \__ \ |  _| |_
   \_/\_/ |_|_|\__,_|___/_|_|  \__|";

/// Banner text: logo followed by the program version.
pub fn banner_text() -> String {
    format!("{LOGO}  v{}\n", env!("CARGO_PKG_VERSION"))
}

/// Prints the banner to stderr so stdout carries results only.
pub fn print_banner() {
    eprintln!("{}\n", banner_text().bright_cyan());
}
