use crate::types::registry::PackageRecord;

/// Usage text printed when an argument is missing.
pub fn usage_text() -> String {
    [
        "Usage: plugin-bump <plugin-name> <bump-type>",
        "",
        "bump-type: major | minor | patch",
        "",
        "Examples:",
        "  plugin-bump playwright-best-practices patch",
        "  plugin-bump building-astro5-blogs minor",
    ]
    .join("\n")
}

pub fn print_usage() {
    println!("{}", usage_text());
}

/// One `  - name (vVERSION)` line per record, in registry order.
pub fn available_lines(records: &[PackageRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| {
            format!(
                "  - {} (v{})",
                r.name.as_deref().unwrap_or("?"),
                r.version.as_deref().unwrap_or("?")
            )
        })
        .collect()
}

pub fn print_available(records: &[PackageRecord]) {
    println!("Available plugins:");
    for line in available_lines(records) {
        println!("{}", line);
    }
}

/// `name: vOLD -> vNEW`
pub fn summary_line(name: &str, old_version: &str, new_version: &str) -> String {
    format!("{}: v{} -> v{}", name, old_version, new_version)
}
