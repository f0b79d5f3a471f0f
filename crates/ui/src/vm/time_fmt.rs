use chrono::Duration;

pub(crate) fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    format!("Finished in {}:{:02}", seconds / 60, seconds % 60)
}
